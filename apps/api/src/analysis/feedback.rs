//! Feedback generator: warnings first, then confirmations, each in a fixed order.

use crate::analysis::detectors::Signals;
use crate::analysis::models::CategoryScores;

pub const MISSING_EMAIL: &str = "❌ Missing email address";
pub const MISSING_PHONE: &str = "❌ Missing phone number";
pub const MISSING_EXPERIENCE: &str = "❌ No clear experience section found";
pub const MISSING_EDUCATION: &str = "❌ No education section found";
pub const NO_TECH_SKILLS: &str = "⚠️ Consider adding technical skills";
pub const FEW_ACTION_VERBS: &str = "⚠️ Use more action verbs (developed, managed, led, etc.)";

pub const COMPLETE_CONTACT: &str = "✅ Complete contact information";
pub const STRONG_EXPERIENCE: &str = "✅ Strong experience section";
pub const EDUCATION_PRESENT: &str = "✅ Education details present";
pub const GOOD_SKILLS: &str = "✅ Good skills coverage";
pub const STRONG_ACTION_VERBS: &str = "✅ Strong use of action verbs";

const MIN_ACTION_VERBS: usize = 3;
const STRONG_ACTION_VERB_COUNT: usize = 5;
const STRONG_SECTION_SCORE: u32 = 80;

pub fn generate_feedback(signals: &Signals, scores: &CategoryScores) -> Vec<String> {
    let items = [
        (!signals.has_email, MISSING_EMAIL),
        (!signals.has_phone, MISSING_PHONE),
        (!signals.has_experience_section, MISSING_EXPERIENCE),
        (!signals.has_education_section, MISSING_EDUCATION),
        (signals.tech_skill_count == 0, NO_TECH_SKILLS),
        (signals.action_verb_count < MIN_ACTION_VERBS, FEW_ACTION_VERBS),
        (scores.contact_info == 100, COMPLETE_CONTACT),
        (scores.experience >= STRONG_SECTION_SCORE, STRONG_EXPERIENCE),
        (scores.education >= STRONG_SECTION_SCORE, EDUCATION_PRESENT),
        (scores.skills >= STRONG_SECTION_SCORE, GOOD_SKILLS),
        (
            signals.action_verb_count >= STRONG_ACTION_VERB_COUNT,
            STRONG_ACTION_VERBS,
        ),
    ];

    items
        .into_iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, message)| message.to_string())
        .collect()
}
