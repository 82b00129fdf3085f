use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

/// Service configuration loaded from environment variables.
/// Belongs to the upload surface; the analysis core takes no configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upload_folder: PathBuf,
    /// Request body limit in bytes.
    pub max_content_length: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            upload_folder: PathBuf::from(env_or("UPLOAD_FOLDER", "uploads")),
            max_content_length: match std::env::var("MAX_CONTENT_LENGTH") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_CONTENT_LENGTH must be a byte count")?,
                Err(_) => DEFAULT_MAX_CONTENT_LENGTH,
            },
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
