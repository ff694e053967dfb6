//! Fairness audit over a finished assignment.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{abroca, disparity_index, distribution_balance};
use crate::models::Assignment;

/// Limits beyond which a metric produces an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairnessThresholds {
    /// Disparity above this is flagged.
    pub disparity: f64,
    /// Skew above this is flagged.
    pub abroca: f64,
    /// Balance below this is flagged.
    pub balance: f64,
}

impl Default for FairnessThresholds {
    fn default() -> Self {
        Self {
            disparity: 0.2,
            abroca: 0.3,
            balance: 0.7,
        }
    }
}

/// Fairness metrics for one assignment (all 0.0..1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairnessMetrics {
    /// Lower is better.
    pub disparity_index: f64,
    /// Lower is better.
    pub abroca: f64,
    /// Higher is better.
    pub distribution_balance: f64,
    pub recommendations: Vec<String>,
}

impl FairnessMetrics {
    /// Whether every metric is within the given thresholds.
    pub fn meets_thresholds(&self, thresholds: &FairnessThresholds) -> bool {
        self.disparity_index <= thresholds.disparity
            && self.abroca <= thresholds.abroca
            && self.distribution_balance >= thresholds.balance
    }
}

/// Computes fairness metrics and advisories.
#[derive(Debug, Clone, Default)]
pub struct FairnessAuditor {
    thresholds: FairnessThresholds,
}

impl FairnessAuditor {
    /// Creates an auditor with custom thresholds.
    pub fn new(thresholds: FairnessThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use.
    pub fn thresholds(&self) -> &FairnessThresholds {
        &self.thresholds
    }

    /// Audits an assignment.
    ///
    /// # Arguments
    /// * `assignments` - Placements to audit.
    /// * `groups` - Optional student ID → group label map for the disparity index.
    pub fn audit(
        &self,
        assignments: &[Assignment],
        groups: Option<&HashMap<String, String>>,
    ) -> FairnessMetrics {
        let disparity = groups.map_or(0.0, |g| disparity_index(assignments, g));
        let skew = abroca(assignments);
        let balance = distribution_balance(assignments);

        debug!(
            assignments = assignments.len(),
            disparity, skew, balance, "fairness audited"
        );

        FairnessMetrics {
            disparity_index: disparity,
            abroca: skew,
            distribution_balance: balance,
            recommendations: self.recommendations(disparity, skew, balance),
        }
    }

    fn recommendations(&self, disparity: f64, skew: f64, balance: f64) -> Vec<String> {
        let t = &self.thresholds;
        let mut recs = Vec::new();

        if disparity > t.disparity {
            recs.push(format!(
                "Average compatibility differs across student groups (disparity {disparity:.2}); \
                 review matching for under-served groups."
            ));
        }
        if skew > t.abroca {
            recs.push(format!(
                "Compatibility scores are unevenly distributed (skew {skew:.2}); \
                 check whether the scoring weights favor certain profiles."
            ));
        }
        if balance < t.balance {
            recs.push(format!(
                "Teacher loads are unbalanced (balance {balance:.2}); \
                 redistribute students or lower the per-teacher cap."
            ));
        }
        if recs.is_empty() {
            recs.push("Fairness metrics are within the normal range.".to_string());
        }

        recs
    }
}

/// Audits an assignment with the default thresholds.
pub fn audit_fairness(
    assignments: &[Assignment],
    groups: Option<&HashMap<String, String>>,
) -> FairnessMetrics {
    FairnessAuditor::default().audit(assignments, groups)
}
