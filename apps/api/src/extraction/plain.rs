/// Decodes the bytes as UTF-8. Invalid UTF-8 yields an empty string.
pub fn extract_text(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::warn!("Error reading TXT: {e}");
            String::new()
        }
    }
}
