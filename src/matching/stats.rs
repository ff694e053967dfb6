//! Descriptive aggregates over an assignment run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Load mean / variance / std dev | Population statistics of per-teacher loads |
//! | Load range | max load - min load |
//! | Average score | Mean overall score of placed students |
//! | Teacher counts | Placements per teacher in this run |
//!
//! Empty inputs produce all-zero results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, TeacherCandidate};

/// Final per-teacher loads: starting load plus placements from this run.
///
/// Teachers referenced only by an assignment start from zero.
pub fn teacher_loads(
    teachers: &[TeacherCandidate],
    assignments: &[Assignment],
) -> BTreeMap<String, usize> {
    let mut loads: BTreeMap<String, usize> = teachers
        .iter()
        .map(|t| (t.id.clone(), t.current_load))
        .collect();
    for a in assignments {
        *loads.entry(a.teacher_id.clone()).or_insert(0) += 1;
    }
    loads
}

/// Spread of teacher loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadStats {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
    pub range: usize,
}

impl LoadStats {
    /// Computes load statistics from per-teacher loads.
    pub fn calculate(loads: &BTreeMap<String, usize>) -> Self {
        if loads.is_empty() {
            return Self::default();
        }

        let n = loads.len() as f64;
        let mean = loads.values().sum::<usize>() as f64 / n;
        let variance = loads
            .values()
            .map(|&l| {
                let d = l as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        let min = loads.values().copied().min().unwrap_or(0);
        let max = loads.values().copied().max().unwrap_or(0);

        Self {
            mean,
            variance,
            std_dev: variance.sqrt(),
            min,
            max,
            range: max - min,
        }
    }
}

/// Outcome summary of an assignment run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSummary {
    /// Students presented to the run.
    pub total_students: usize,
    /// Students that received a teacher.
    pub assigned_students: usize,
    /// Mean overall score of placed students.
    pub average_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    /// Placements per teacher ID.
    pub teacher_counts: BTreeMap<String, usize>,
}

impl AssignmentSummary {
    /// Summarizes a run.
    ///
    /// # Arguments
    /// * `assignments` - Placements returned by the engine.
    /// * `total_students` - Number of students that were presented.
    pub fn calculate(assignments: &[Assignment], total_students: usize) -> Self {
        if assignments.is_empty() {
            return Self {
                total_students,
                ..Self::default()
            };
        }

        let mut teacher_counts = BTreeMap::new();
        let mut sum = 0.0;
        let mut min_score = f64::INFINITY;
        let mut max_score = f64::NEG_INFINITY;

        for a in assignments {
            let s = a.overall();
            sum += s;
            min_score = min_score.min(s);
            max_score = max_score.max(s);
            *teacher_counts.entry(a.teacher_id.clone()).or_insert(0) += 1;
        }

        Self {
            total_students,
            assigned_students: assignments.len(),
            average_score: sum / assignments.len() as f64,
            min_score,
            max_score,
            teacher_counts,
        }
    }

    /// Fraction of presented students that were placed (0.0..1.0).
    pub fn placement_rate(&self) -> f64 {
        if self.total_students == 0 {
            0.0
        } else {
            self.assigned_students as f64 / self.total_students as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loads(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_load_stats_basic() {
        let stats = LoadStats::calculate(&loads(&[("T1", 2), ("T2", 4), ("T3", 6)]));
        assert!((stats.mean - 4.0).abs() < 1e-10);
        // ((2-4)^2 + 0 + (6-4)^2) / 3 = 8/3
        assert!((stats.variance - 8.0 / 3.0).abs() < 1e-10);
        assert!((stats.std_dev - (8.0f64 / 3.0).sqrt()).abs() < 1e-10);
        assert_eq!(stats.min, 2);
        assert_eq!(stats.max, 6);
        assert_eq!(stats.range, 4);
    }

    #[test]
    fn test_load_stats_empty() {
        assert_eq!(LoadStats::calculate(&BTreeMap::new()), LoadStats::default());
    }

    #[test]
    fn test_teacher_loads_include_starting_load() {
        let teachers = vec![TeacherCandidate::new("T1").with_load(3), TeacherCandidate::new("T2")];
        let assignments = vec![
            Assignment::new("S1", "T1", 80.0),
            Assignment::new("S2", "T2", 70.0),
        ];
        let result = teacher_loads(&teachers, &assignments);
        assert_eq!(result["T1"], 4);
        assert_eq!(result["T2"], 1);
    }

    #[test]
    fn test_summary_basic() {
        let assignments = vec![
            Assignment::new("S1", "T1", 80.0),
            Assignment::new("S2", "T1", 60.0),
            Assignment::new("S3", "T2", 70.0),
        ];
        let summary = AssignmentSummary::calculate(&assignments, 4);
        assert_eq!(summary.total_students, 4);
        assert_eq!(summary.assigned_students, 3);
        assert!((summary.average_score - 70.0).abs() < 1e-10);
        assert!((summary.min_score - 60.0).abs() < 1e-10);
        assert!((summary.max_score - 80.0).abs() < 1e-10);
        assert_eq!(summary.teacher_counts["T1"], 2);
        assert!((summary.placement_rate() - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_summary_empty() {
        let summary = AssignmentSummary::calculate(&[], 0);
        assert_eq!(summary, AssignmentSummary::default());
        assert!((summary.placement_rate() - 0.0).abs() < 1e-10);
    }
}
