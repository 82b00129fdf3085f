// Upload surface: validates the multipart upload, stores it briefly under the
// upload folder, and hands the stored document to extraction + analysis.
// None of the analysis core depends on anything here.

pub mod handlers;
pub mod storage;
