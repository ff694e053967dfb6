//! Assignment run options.

use serde::{Deserialize, Serialize};

/// Headroom over the average load used when no cap is given.
const DEFAULT_CAP_FACTOR: f64 = 1.2;

/// Caller-tunable limits for one assignment run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentOptions {
    /// Hard cap on a teacher's total load. Defaults to
    /// `ceil(average_load * 1.2)`.
    pub max_students_per_teacher: Option<usize>,
    /// Scores strictly below this value disqualify a pairing.
    pub min_compatibility_threshold: Option<f64>,
}

impl AssignmentOptions {
    /// Creates options with no explicit cap or threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the load cap.
    pub fn with_max_students_per_teacher(mut self, max: usize) -> Self {
        self.max_students_per_teacher = Some(max);
        self
    }

    /// Sets the minimum acceptable score.
    pub fn with_min_compatibility_threshold(mut self, threshold: f64) -> Self {
        self.min_compatibility_threshold = Some(threshold);
        self
    }

    /// Cap in effect for a run with the given average load.
    pub fn effective_cap(&self, average_load: f64) -> usize {
        self.max_students_per_teacher
            .unwrap_or_else(|| (average_load * DEFAULT_CAP_FACTOR).ceil().max(0.0) as usize)
    }

    /// Whether a score clears the threshold (always true without one).
    pub fn accepts(&self, overall: f64) -> bool {
        self.min_compatibility_threshold
            .map_or(true, |min| overall >= min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cap_rounds_up() {
        let opts = AssignmentOptions::new();
        assert_eq!(opts.effective_cap(5.0), 6);
        assert_eq!(opts.effective_cap(2.5), 3);
        assert_eq!(opts.effective_cap(0.0), 0);
    }

    #[test]
    fn test_explicit_cap_wins() {
        let opts = AssignmentOptions::new().with_max_students_per_teacher(4);
        assert_eq!(opts.effective_cap(100.0), 4);
    }

    #[test]
    fn test_threshold() {
        let opts = AssignmentOptions::new().with_min_compatibility_threshold(60.0);
        assert!(opts.accepts(60.0));
        assert!(!opts.accepts(59.9));
        assert!(AssignmentOptions::new().accepts(0.0));
    }

    #[test]
    fn test_deserialize_partial() {
        let opts: AssignmentOptions =
            serde_json::from_str(r#"{"maxStudentsPerTeacher": 8}"#).unwrap();
        assert_eq!(opts.max_students_per_teacher, Some(8));
        assert_eq!(opts.min_compatibility_threshold, None);
    }
}
