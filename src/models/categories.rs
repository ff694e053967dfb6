//! Fixed category sets.
//!
//! Subjects, grades, roles, elements and learning styles are closed sets
//! known at compile time. Each enum carries an `ALL` array in canonical
//! order; that order is also the tie-break order wherever a "dominant"
//! category is picked.

use serde::{Deserialize, Serialize};

/// Taught subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Subject {
    Korean,
    English,
    Math,
    Science,
    Social,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Korean,
        Subject::English,
        Subject::Math,
        Subject::Science,
        Subject::Social,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Subject::Korean => "Korean",
            Subject::English => "English",
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::Social => "Social Studies",
        }
    }

    /// Parses a roster label. Unknown labels return `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "korean" | "국어" => Some(Subject::Korean),
            "english" | "영어" => Some(Subject::English),
            "math" | "mathematics" | "수학" => Some(Subject::Math),
            "science" | "과학" => Some(Subject::Science),
            "social" | "social studies" | "사회" => Some(Subject::Social),
            _ => None,
        }
    }
}

/// Student grade level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Grade {
    Elementary,
    Middle1,
    Middle2,
    Middle3,
    High1,
    High2,
    High3,
}

impl Grade {
    pub const ALL: [Grade; 7] = [
        Grade::Elementary,
        Grade::Middle1,
        Grade::Middle2,
        Grade::Middle3,
        Grade::High1,
        Grade::High2,
        Grade::High3,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Grade::Elementary => "Elementary",
            Grade::Middle1 => "Middle 1",
            Grade::Middle2 => "Middle 2",
            Grade::Middle3 => "Middle 3",
            Grade::High1 => "High 1",
            Grade::High2 => "High 2",
            Grade::High3 => "High 3",
        }
    }

    /// Parses a roster label. Unknown labels return `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let key: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        match key.as_str() {
            "elementary" | "초등" => Some(Grade::Elementary),
            "middle1" | "m1" | "중1" => Some(Grade::Middle1),
            "middle2" | "m2" | "중2" => Some(Grade::Middle2),
            "middle3" | "m3" | "중3" => Some(Grade::Middle3),
            "high1" | "h1" | "고1" => Some(Grade::High1),
            "high2" | "h2" | "고2" => Some(Grade::High2),
            "high3" | "h3" | "고3" => Some(Grade::High3),
            _ => None,
        }
    }
}

/// Organizational role within a teacher team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TeamRole {
    Teacher,
    Manager,
    Admin,
}

impl TeamRole {
    pub const ALL: [TeamRole; 3] = [TeamRole::Teacher, TeamRole::Manager, TeamRole::Admin];

    /// Parses a role value. Unknown roles return `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "teacher" => Some(TeamRole::Teacher),
            "manager" => Some(TeamRole::Manager),
            "admin" => Some(TeamRole::Admin),
            _ => None,
        }
    }
}

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }
}

/// Preferred learning modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Reading,
    Kinesthetic,
}

impl LearningStyle {
    /// Canonical order; earlier styles win ties.
    pub const ALL: [LearningStyle; 4] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Reading,
        LearningStyle::Kinesthetic,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Auditory => "Auditory",
            LearningStyle::Reading => "Reading",
            LearningStyle::Kinesthetic => "Kinesthetic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_parse() {
        assert_eq!(Subject::parse("Math"), Some(Subject::Math));
        assert_eq!(Subject::parse(" 영어 "), Some(Subject::English));
        assert_eq!(Subject::parse("Art"), None);
    }

    #[test]
    fn test_grade_parse() {
        assert_eq!(Grade::parse("High 2"), Some(Grade::High2));
        assert_eq!(Grade::parse("중3"), Some(Grade::Middle3));
        assert_eq!(Grade::parse("elementary"), Some(Grade::Elementary));
        assert_eq!(Grade::parse("college"), None);
    }

    #[test]
    fn test_role_parse_ignores_unknown() {
        assert_eq!(TeamRole::parse("Manager"), Some(TeamRole::Manager));
        assert_eq!(TeamRole::parse("janitor"), None);
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(LearningStyle::ALL[0], LearningStyle::Visual);
        assert_eq!(Element::ALL[4], Element::Water);
        assert!(Grade::Elementary < Grade::High3);
    }
}
