use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Fair,
    Good,
    Excellent,
}

/// Presentation tag paired with each rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Success,
    Info,
    Warning,
    Danger,
}

impl Rating {
    /// Thresholds are checked highest-first: ≥85, ≥70, ≥50, else.
    pub fn from_score(overall_score: f64) -> Self {
        match overall_score {
            s if s >= 85.0 => Rating::Excellent,
            s if s >= 70.0 => Rating::Good,
            s if s >= 50.0 => Rating::Fair,
            _ => Rating::NeedsImprovement,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Rating::Excellent => Color::Success,
            Rating::Good => Color::Info,
            Rating::Fair => Color::Warning,
            Rating::NeedsImprovement => Color::Danger,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Fair => "Fair",
            Rating::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries() {
        let cases = [
            (49.9, Rating::NeedsImprovement),
            (50.0, Rating::Fair),
            (69.9, Rating::Fair),
            (70.0, Rating::Good),
            (84.9, Rating::Good),
            (85.0, Rating::Excellent),
        ];
        for (score, expected) in cases {
            assert_eq!(Rating::from_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Rating::from_score(0.0), Rating::NeedsImprovement);
        assert_eq!(Rating::from_score(100.0), Rating::Excellent);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Rating::Excellent.color(), Color::Success);
        assert_eq!(Rating::Good.color(), Color::Info);
        assert_eq!(Rating::Fair.color(), Color::Warning);
        assert_eq!(Rating::NeedsImprovement.color(), Color::Danger);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Rating::NeedsImprovement).unwrap(),
            r#""Needs Improvement""#
        );
        assert_eq!(serde_json::to_string(&Rating::Good).unwrap(), r#""Good""#);
        assert_eq!(serde_json::to_string(&Color::Danger).unwrap(), r#""danger""#);
        assert_eq!(Rating::NeedsImprovement.to_string(), "Needs Improvement");
    }

    proptest! {
        #[test]
        fn prop_rating_is_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Rating::from_score(lo) <= Rating::from_score(hi));
        }
    }
}
