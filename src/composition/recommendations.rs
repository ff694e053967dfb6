//! Rule-based recommendations for a team composition.
//!
//! Rules are checked in a fixed order and each fires at most once. The
//! result is stably sorted by priority, so rules sharing a priority keep
//! their check order.

use serde::{Deserialize, Serialize};

use super::{DiversityScore, TeamComposition};
use crate::models::{Element, Grade, LearningStyle, Subject};

/// Visual-heavy teams are flagged when the other styles sum below this.
const NON_VISUAL_SHARE_MIN: f64 = 40.0;
/// Overall diversity below this is flagged.
const LOW_DIVERSITY: u32 = 50;
/// Overall diversity at or above this earns an affirmative note.
const STRONG_DIVERSITY: u32 = 70;

/// Recommendation topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationCategory {
    Diversity,
    Coverage,
    Balance,
}

/// Urgency; sorts high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// An actionable finding about a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Stable rule identifier.
    pub id: String,
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    /// Numbers that triggered the rule.
    pub evidence: String,
    /// Suggested steps, in order.
    pub action_items: Vec<String>,
}

impl Recommendation {
    fn new(
        id: &str,
        category: RecommendationCategory,
        priority: Priority,
        title: &str,
        description: impl Into<String>,
        evidence: impl Into<String>,
        action_items: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            category,
            priority,
            title: title.to_string(),
            description: description.into(),
            evidence: evidence.into(),
            action_items: action_items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Evaluates every rule against a composition and its diversity score.
pub fn generate_recommendations(
    composition: &TeamComposition,
    diversity: &DiversityScore,
) -> Vec<Recommendation> {
    let mut recs: Vec<Recommendation> = [
        learning_style_imbalance(composition),
        element_deficiency(composition),
        subject_gaps(composition),
        grade_gaps(composition),
        low_diversity(diversity),
        strong_diversity(diversity),
    ]
    .into_iter()
    .flatten()
    .collect();

    recs.sort_by_key(|r| r.priority);
    recs
}

fn learning_style_imbalance(composition: &TeamComposition) -> Option<Recommendation> {
    let styles = &composition.learning_style;
    if styles.dominant != Some(LearningStyle::Visual) {
        return None;
    }
    let others = styles.share_excluding(LearningStyle::Visual);
    if others >= NON_VISUAL_SHARE_MIN {
        return None;
    }

    Some(Recommendation::new(
        "learning-style-balance",
        RecommendationCategory::Balance,
        Priority::High,
        "Learning styles lean heavily visual",
        "Most of the team teaches through visual material, which leaves auditory, reading \
         and kinesthetic learners underserved.",
        format!(
            "Visual {:.0}%, Auditory {:.0}%, Reading {:.0}%, Kinesthetic {:.0}%",
            styles.averages.visual,
            styles.averages.auditory,
            styles.averages.reading,
            styles.averages.kinesthetic
        ),
        &[
            "Recruit teachers with auditory or kinesthetic strengths",
            "Pair visual-leaning teachers with mixed-modality lesson plans",
            "Review student learning profiles against the current mix",
        ],
    ))
}

fn element_deficiency(composition: &TeamComposition) -> Option<Recommendation> {
    let elements = &composition.elements;
    if elements.deficient.is_empty() {
        return None;
    }

    Some(Recommendation::new(
        "element-balance",
        RecommendationCategory::Balance,
        Priority::Medium,
        "Five-element balance is uneven",
        format!(
            "The team is weak in {} relative to the other elements.",
            join_labels(elements.deficient.iter().map(|&e| Element::label(e)))
        ),
        format!(
            "Dominant: {}, deficient: {}",
            elements.dominant_label(),
            join_labels(elements.deficient.iter().map(|&e| Element::label(e)))
        ),
        &[
            "Consider the deficient elements when hiring",
            "Balance homeroom pairings across elements",
        ],
    ))
}

fn subject_gaps(composition: &TeamComposition) -> Option<Recommendation> {
    let weak = &composition.expertise.weak_subjects;
    if weak.is_empty() {
        return None;
    }

    Some(Recommendation::new(
        "subject-coverage",
        RecommendationCategory::Coverage,
        Priority::High,
        "Some subjects are under-covered",
        format!(
            "{} have fewer teachers than half of an even share.",
            join_labels(weak.iter().map(|&s| Subject::label(s)))
        ),
        count_evidence(weak.iter().map(|s| {
            let count = composition.expertise.subjects.get(s).copied().unwrap_or(0);
            (s.label(), count)
        })),
        &[
            "Prioritize these subjects in the next hiring round",
            "Cross-train teachers with adjacent expertise",
        ],
    ))
}

fn grade_gaps(composition: &TeamComposition) -> Option<Recommendation> {
    let weak = &composition.expertise.weak_grades;
    if weak.is_empty() {
        return None;
    }

    Some(Recommendation::new(
        "grade-coverage",
        RecommendationCategory::Coverage,
        Priority::Medium,
        "Some grade levels are under-served",
        format!(
            "{} have fewer students than half of an even share.",
            join_labels(weak.iter().map(|&g| Grade::label(g)))
        ),
        count_evidence(weak.iter().map(|g| {
            let count = composition.expertise.grades.get(g).copied().unwrap_or(0);
            (g.label(), count)
        })),
        &[
            "Check whether enrollment or staffing explains the gap",
            "Assign teachers with experience in these grades",
        ],
    ))
}

fn low_diversity(diversity: &DiversityScore) -> Option<Recommendation> {
    if diversity.overall >= LOW_DIVERSITY {
        return None;
    }

    Some(Recommendation::new(
        "low-diversity",
        RecommendationCategory::Diversity,
        Priority::Medium,
        "Team diversity is low",
        "Teachers are concentrated in a few personality types, styles or specialties.",
        diversity_evidence(diversity),
        &[
            "Broaden candidate sourcing for the next opening",
            "Use the component scores to target the weakest dimension",
        ],
    ))
}

fn strong_diversity(diversity: &DiversityScore) -> Option<Recommendation> {
    if diversity.overall < STRONG_DIVERSITY {
        return None;
    }

    Some(Recommendation::new(
        "strong-diversity",
        RecommendationCategory::Diversity,
        Priority::Low,
        "Team composition is strong",
        "The team is well spread across personality types, styles and specialties.",
        diversity_evidence(diversity),
        &["Keep the current mix in mind when replacing departing teachers"],
    ))
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}

fn count_evidence<'a>(items: impl Iterator<Item = (&'a str, usize)>) -> String {
    items
        .map(|(label, count)| format!("{label}: {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn diversity_evidence(d: &DiversityScore) -> String {
    format!(
        "Overall {} (MBTI {}, learning style {}, element {}, subject {}, grade {})",
        d.overall,
        d.mbti_diversity,
        d.learning_style_diversity,
        d.element_diversity,
        d.subject_diversity,
        d.grade_diversity
    )
}
