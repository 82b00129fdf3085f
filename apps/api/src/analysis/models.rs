use serde::{Deserialize, Serialize};

use crate::analysis::rating::{Color, Rating};

/// The six category sub-scores, each in [0, 100].
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub contact_info: u32,
    pub experience: u32,
    pub education: u32,
    pub skills: u32,
    pub keywords: u32,
    pub formatting: u32,
}

impl CategoryScores {
    pub fn values(&self) -> [u32; 6] {
        [
            self.contact_info,
            self.experience,
            self.education,
            self.skills,
            self.keywords,
            self.formatting,
        ]
    }
}

/// Full assessment of one resume. Built once per request and returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Unweighted mean of `scores`, rounded to one decimal.
    pub overall_score: f64,
    pub rating: Rating,
    pub color: Color,
    pub scores: CategoryScores,
    pub feedback: Vec<String>,
    pub word_count: usize,
}
