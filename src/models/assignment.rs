//! Assignment (solution) model.

use serde::{Deserialize, Serialize};

use super::CompatibilityScore;

/// A student placed with a teacher.
///
/// At most one assignment exists per student within a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Placed student ID.
    pub student_id: String,
    /// Receiving teacher ID.
    pub teacher_id: String,
    /// Score that won the placement.
    pub score: CompatibilityScore,
}

impl Assignment {
    /// Creates an assignment from a bare overall score.
    pub fn new(student_id: impl Into<String>, teacher_id: impl Into<String>, overall: f64) -> Self {
        Self::with_score(student_id, teacher_id, CompatibilityScore::new(overall))
    }

    /// Creates an assignment carrying a full score.
    pub fn with_score(
        student_id: impl Into<String>,
        teacher_id: impl Into<String>,
        score: CompatibilityScore,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            teacher_id: teacher_id.into(),
            score,
        }
    }

    /// Overall compatibility score (0-100).
    pub fn overall(&self) -> f64 {
        self.score.overall
    }
}
