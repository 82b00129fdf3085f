//! Score calculator — fixed point-award rules per category.
//!
//! | category     | rule                                                        |
//! |--------------|-------------------------------------------------------------|
//! | contact_info | +50 email, +50 phone                                        |
//! | experience   | keyword: +40, then +30 year mention, +30 length > 300 chars |
//! | education    | keyword: +60, then +40 year mention                         |
//! | skills       | +40 keyword, + min(60, 10 × tech terms)                     |
//! | keywords     | min(100, 15 × action verbs)                                 |
//! | formatting   | +30 length > 300, +30 > 10 non-empty lines, +40 non-blank   |

use crate::analysis::detectors::Signals;
use crate::analysis::models::CategoryScores;

const SUBSTANTIAL_LENGTH: usize = 300;
const MIN_STRUCTURED_LINES: usize = 10;

pub fn compute_category_scores(signals: &Signals) -> CategoryScores {
    CategoryScores {
        contact_info: contact_info_score(signals),
        experience: experience_score(signals),
        education: education_score(signals),
        skills: skills_score(signals),
        keywords: keywords_score(signals),
        formatting: formatting_score(signals),
    }
}

/// Straight mean of the six categories, rounded to one decimal place.
pub fn overall_score(scores: &CategoryScores) -> f64 {
    let values = scores.values();
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64;
    (mean * 10.0).round() / 10.0
}

fn contact_info_score(s: &Signals) -> u32 {
    award(s.has_email, 50) + award(s.has_phone, 50)
}

fn experience_score(s: &Signals) -> u32 {
    if !s.has_experience_section {
        return 0;
    }
    40 + award(s.has_year, 30) + award(s.char_count > SUBSTANTIAL_LENGTH, 30)
}

fn education_score(s: &Signals) -> u32 {
    if !s.has_education_section {
        return 0;
    }
    60 + award(s.has_year, 40)
}

fn skills_score(s: &Signals) -> u32 {
    award(s.has_skills_section, 40) + (s.tech_skill_count as u32 * 10).min(60)
}

fn keywords_score(s: &Signals) -> u32 {
    (s.action_verb_count as u32 * 15).min(100)
}

fn formatting_score(s: &Signals) -> u32 {
    award(s.char_count > SUBSTANTIAL_LENGTH, 30)
        + award(s.non_empty_lines > MIN_STRUCTURED_LINES, 30)
        + award(s.has_content, 40)
}

fn award(hit: bool, points: u32) -> u32 {
    if hit {
        points
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn blank() -> Signals {
        Signals {
            has_email: false,
            has_phone: false,
            has_experience_section: false,
            has_year: false,
            has_education_section: false,
            has_skills_section: false,
            tech_skill_count: 0,
            action_verb_count: 0,
            char_count: 0,
            non_empty_lines: 0,
            has_content: false,
        }
    }

    #[test]
    fn test_no_signals_scores_zero() {
        assert_eq!(compute_category_scores(&blank()), CategoryScores::default());
    }

    #[test]
    fn test_year_without_experience_keyword_scores_nothing() {
        let s = Signals {
            has_year: true,
            char_count: 1000,
            ..blank()
        };
        let scores = compute_category_scores(&s);
        assert_eq!(scores.experience, 0);
        assert_eq!(scores.education, 0);
    }

    #[test]
    fn test_experience_ladder() {
        let base = Signals {
            has_experience_section: true,
            ..blank()
        };
        assert_eq!(experience_score(&base), 40);
        assert_eq!(
            experience_score(&Signals {
                has_year: true,
                ..base.clone()
            }),
            70
        );
        assert_eq!(
            experience_score(&Signals {
                has_year: true,
                char_count: 301,
                ..base.clone()
            }),
            100
        );
        // Length must strictly exceed 300.
        assert_eq!(
            experience_score(&Signals {
                char_count: 300,
                ..base
            }),
            40
        );
    }

    #[test]
    fn test_education_with_year() {
        let s = Signals {
            has_education_section: true,
            has_year: true,
            ..blank()
        };
        assert_eq!(education_score(&s), 100);
    }

    #[test]
    fn test_skills_tech_terms_capped_at_60() {
        let s = Signals {
            has_skills_section: true,
            tech_skill_count: 15,
            ..blank()
        };
        assert_eq!(skills_score(&s), 100);
        let s = Signals {
            tech_skill_count: 4,
            ..blank()
        };
        assert_eq!(skills_score(&s), 40);
    }

    #[test]
    fn test_keywords_capped_at_100() {
        let s = Signals {
            action_verb_count: 11,
            ..blank()
        };
        assert_eq!(keywords_score(&s), 100);
        let s = Signals {
            action_verb_count: 5,
            ..blank()
        };
        assert_eq!(keywords_score(&s), 75);
    }

    #[test]
    fn test_formatting_rules() {
        let s = Signals {
            has_content: true,
            ..blank()
        };
        assert_eq!(formatting_score(&s), 40);
        let s = Signals {
            has_content: true,
            char_count: 301,
            non_empty_lines: 11,
            ..blank()
        };
        assert_eq!(formatting_score(&s), 100);
        let s = Signals {
            has_content: true,
            non_empty_lines: 10,
            ..blank()
        };
        assert_eq!(formatting_score(&s), 40);
    }

    #[test]
    fn test_overall_score_rounding() {
        let scores = CategoryScores {
            formatting: 40,
            ..CategoryScores::default()
        };
        assert_eq!(overall_score(&scores), 6.7);

        let scores = CategoryScores {
            contact_info: 100,
            experience: 70,
            education: 60,
            skills: 50,
            keywords: 45,
            formatting: 70,
        };
        // 395 / 6 = 65.8333…
        assert_eq!(overall_score(&scores), 65.8);
    }

    fn arb_signals() -> impl Strategy<Value = Signals> {
        (
            any::<[bool; 7]>(),
            0usize..=15,
            0usize..=11,
            0usize..5000,
            0usize..200,
        )
            .prop_map(|(b, tech, verbs, chars, lines)| Signals {
                has_email: b[0],
                has_phone: b[1],
                has_experience_section: b[2],
                has_year: b[3],
                has_education_section: b[4],
                has_skills_section: b[5],
                tech_skill_count: tech,
                action_verb_count: verbs,
                char_count: chars,
                non_empty_lines: lines,
                has_content: b[6],
            })
    }

    proptest! {
        #[test]
        fn prop_every_category_within_bounds(s in arb_signals()) {
            let scores = compute_category_scores(&s);
            for v in scores.values() {
                prop_assert!(v <= 100);
            }
        }

        #[test]
        fn prop_overall_is_rounded_mean(values in any::<[u8; 6]>()) {
            let v = values.map(|x| (x % 101) as u32);
            let scores = CategoryScores {
                contact_info: v[0],
                experience: v[1],
                education: v[2],
                skills: v[3],
                keywords: v[4],
                formatting: v[5],
            };
            let mean = v.iter().sum::<u32>() as f64 / 6.0;
            let overall = overall_score(&scores);
            prop_assert!((overall - mean).abs() <= 0.05 + 1e-9);
            prop_assert!((0.0..=100.0).contains(&overall));
            let tenths = overall * 10.0;
            prop_assert!((tenths - tenths.round()).abs() < 1e-6);
        }
    }
}
