//! Compatibility score model.

use serde::{Deserialize, Serialize};

/// Named sub-scores behind an overall compatibility score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub personality: f64,
    pub learning_style: f64,
    pub five_element: f64,
    pub name: f64,
    pub load_balance: f64,
}

/// Fit between one teacher and one student.
///
/// Produced by the caller's scorer; the engine only reads `overall`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScore {
    /// Overall score (0-100).
    pub overall: f64,
    /// Sub-score breakdown.
    pub breakdown: ScoreBreakdown,
    /// Human-readable reasons.
    pub reasons: Vec<String>,
}

impl CompatibilityScore {
    /// Creates a score with an empty breakdown.
    pub fn new(overall: f64) -> Self {
        Self {
            overall,
            breakdown: ScoreBreakdown::default(),
            reasons: Vec::new(),
        }
    }

    /// Sets the breakdown.
    pub fn with_breakdown(mut self, breakdown: ScoreBreakdown) -> Self {
        self.breakdown = breakdown;
        self
    }

    /// Appends a reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reasons.push(reason.into());
        self
    }
}
