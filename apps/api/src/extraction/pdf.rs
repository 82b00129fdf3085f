//! PDF text layer extraction via `pdf-extract`.

use std::panic::{catch_unwind, AssertUnwindSafe};

/// Concatenates the text layer of every page, in page order, with no
/// separator between pages.
///
/// `pdf-extract` can panic on malformed input; a panic is handled the same
/// way as a parse error and yields an empty string.
pub fn extract_text(data: &[u8]) -> String {
    let result = catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(data)
    }));

    match result {
        Ok(Ok(pages)) => pages.concat(),
        Ok(Err(e)) => {
            tracing::warn!("Error reading PDF: {e}");
            String::new()
        }
        Err(_) => {
            tracing::warn!("Error reading PDF: parser panicked");
            String::new()
        }
    }
}
