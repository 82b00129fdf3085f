//! Heuristic resume scoring engine.
//!
//! Pipeline: detectors → category scores → rating + feedback. Every step is
//! a pure function of the extracted text; nothing is cached between calls.

pub mod detectors;
pub mod feedback;
pub mod models;
pub mod rating;
pub mod scoring;

use thiserror::Error;

use crate::analysis::detectors::Signals;
use crate::analysis::feedback::generate_feedback;
use crate::analysis::models::AnalysisResult;
use crate::analysis::rating::Rating;
use crate::analysis::scoring::{compute_category_scores, overall_score};
use crate::extraction::{extract, SourceDocument};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Nothing readable came out of the document. Distinct from a low score.
    #[error("Could not extract text from file")]
    EmptyExtraction,
}

/// Scores already-extracted resume text.
pub fn analyze_resume(text: &str) -> Result<AnalysisResult, AnalysisError> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyExtraction);
    }

    let signals = Signals::detect(text);
    let scores = compute_category_scores(&signals);
    let overall_score = overall_score(&scores);
    let rating = Rating::from_score(overall_score);
    let feedback = generate_feedback(&signals, &scores);
    let word_count = text.split_whitespace().count();

    tracing::debug!(overall_score, %rating, word_count, "Resume analyzed");

    Ok(AnalysisResult {
        overall_score,
        rating,
        color: rating.color(),
        scores,
        feedback,
        word_count,
    })
}

/// Extracts text from `document` and scores it.
pub fn analyze_document(document: &SourceDocument) -> Result<AnalysisResult, AnalysisError> {
    let text = extract(document);
    analyze_resume(&text)
}
