//! Section & signal detectors — pure pattern matchers over extracted text.
//!
//! Every detector answers one yes/no or count question. Matching is exact
//! substring / regex matching on a lower-cased copy of the text.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?(\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}")
        .expect("valid phone regex")
});

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2}|19\d{2})\b").expect("valid year regex"));

pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "work history",
    "employment",
    "professional experience",
];

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "education",
    "academic",
    "university",
    "college",
    "degree",
    "bachelor",
    "master",
    "phd",
];

pub const SKILLS_KEYWORDS: &[&str] = &[
    "skills",
    "technical skills",
    "competencies",
    "proficiencies",
];

pub const TECH_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "c++",
    "sql",
    "html",
    "css",
    "react",
    "node",
    "angular",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
];

pub const ACTION_VERBS: &[&str] = &[
    "developed",
    "managed",
    "led",
    "created",
    "implemented",
    "designed",
    "improved",
    "increased",
    "reduced",
    "achieved",
    "delivered",
];

/// All detector outputs for one text. Scoring and feedback read only this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signals {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_experience_section: bool,
    pub has_year: bool,
    pub has_education_section: bool,
    pub has_skills_section: bool,
    /// Distinct terms from `TECH_SKILLS` present in the text.
    pub tech_skill_count: usize,
    /// Distinct verbs from `ACTION_VERBS` present; repeats don't count.
    pub action_verb_count: usize,
    /// Length in characters, not bytes.
    pub char_count: usize,
    pub non_empty_lines: usize,
    pub has_content: bool,
}

impl Signals {
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();

        Signals {
            has_email: EMAIL_RE.is_match(&lower),
            has_phone: PHONE_RE.is_match(&lower),
            has_experience_section: contains_any(&lower, EXPERIENCE_KEYWORDS),
            has_year: YEAR_RE.is_match(&lower),
            has_education_section: contains_any(&lower, EDUCATION_KEYWORDS),
            has_skills_section: contains_any(&lower, SKILLS_KEYWORDS),
            tech_skill_count: count_present(&lower, TECH_SKILLS),
            action_verb_count: count_present(&lower, ACTION_VERBS),
            char_count: text.chars().count(),
            non_empty_lines: text.split('\n').filter(|l| !l.trim().is_empty()).count(),
            has_content: !text.trim().is_empty(),
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn count_present(haystack: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|t| haystack.contains(*t)).count()
}
