use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tokio::io::AsyncWriteExt;
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

/// True iff the name has an extension and it is one we can extract.
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Reduces a client-supplied filename to a safe ASCII basename.
/// Accented letters are decomposed (NFKD) and keep their base letter.
/// Returns "" when nothing usable is left.
pub fn secure_filename(filename: &str) -> String {
    let spaced: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// `{YYYYMMDD_HHMMSS}_{uuid}_{secure name}`. Unique per call, so uploads
/// with the same name in the same second never share a file.
pub fn storage_filename(filename: &str, now: DateTime<Local>) -> String {
    format!(
        "{}_{}_{}",
        now.format("%Y%m%d_%H%M%S"),
        Uuid::new_v4().simple(),
        secure_filename(filename)
    )
}

/// Writes the upload under `upload_dir`, creating the folder if needed.
/// Fails rather than overwrite an existing file.
pub async fn persist(upload_dir: &Path, name: &str, data: &[u8]) -> Result<PathBuf> {
    tokio::fs::create_dir_all(upload_dir)
        .await
        .with_context(|| format!("Cannot create upload folder '{}'", upload_dir.display()))?;
    let path = upload_dir.join(name);
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .await
        .with_context(|| format!("Cannot create upload '{}'", path.display()))?;
    file.write_all(data)
        .await
        .with_context(|| format!("Cannot write upload '{}'", path.display()))?;
    file.flush().await?;
    Ok(path)
}

/// Removes a stored upload. Failure is logged only.
pub async fn discard(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!("Failed to remove upload '{}': {e}", path.display());
    }
}
