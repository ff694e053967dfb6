//! Single-pass greedy assignment.
//!
//! # Algorithm
//!
//! 1. Seed a running load table from each teacher's starting load.
//! 2. For each student (input order), scan teachers (input order).
//! 3. Skip teachers at or above the effective cap.
//! 4. Score the rest; drop scores below the threshold.
//! 5. Keep the strictly highest score (first seen wins ties).
//! 6. Commit the pairing and bump the winner's running load.
//!
//! A locally best choice can foreclose a better choice for a later student.
//! There is no backtracking.
//!
//! # Complexity
//! O(s * t) time and O(t) extra space where s=students, t=teachers.

use tracing::{debug, info};

use super::{AssignmentOptions, CompatibilityScorer};
use crate::models::{Assignment, CompatibilityScore, StudentCandidate, TeacherCandidate};

/// Greedy capacity-constrained assigner.
#[derive(Debug, Clone, Default)]
pub struct GreedyAssigner {
    options: AssignmentOptions,
}

impl GreedyAssigner {
    /// Creates an assigner with the given options.
    pub fn new(options: AssignmentOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &AssignmentOptions {
        &self.options
    }

    /// Assigns students to teachers.
    ///
    /// Returns one assignment per placed student, in student input order.
    /// Students with no eligible teacher are left out.
    pub fn assign<S: CompatibilityScorer + ?Sized>(
        &self,
        students: &[StudentCandidate],
        teachers: &[TeacherCandidate],
        scorer: &S,
    ) -> Vec<Assignment> {
        if students.is_empty() || teachers.is_empty() {
            return Vec::new();
        }

        let average_load = Self::average_load(students, teachers);
        let cap = self.options.effective_cap(average_load);

        // Indexed by teacher position; local to this call.
        let mut loads: Vec<usize> = teachers.iter().map(|t| t.current_load).collect();
        let mut assignments = Vec::with_capacity(students.len());

        for student in students {
            let mut best: Option<(usize, CompatibilityScore)> = None;

            for (idx, teacher) in teachers.iter().enumerate() {
                if loads[idx] >= cap {
                    continue;
                }

                let score = scorer.score(&teacher.analysis, &student.analysis, average_load);
                if !score.overall.is_finite() || !self.options.accepts(score.overall) {
                    continue;
                }

                let better = match &best {
                    Some((_, current)) => score.overall > current.overall,
                    None => true,
                };
                if better {
                    best = Some((idx, score));
                }
            }

            match best {
                Some((idx, score)) => {
                    loads[idx] += 1;
                    assignments.push(Assignment::with_score(
                        &student.id,
                        &teachers[idx].id,
                        score,
                    ));
                }
                None => {
                    debug!(student_id = %student.id, cap, "no eligible teacher");
                }
            }
        }

        info!(
            placed = assignments.len(),
            students = students.len(),
            teachers = teachers.len(),
            cap,
            average_load,
            "assignment run finished"
        );

        assignments
    }

    /// Incoming students per teacher.
    fn average_load(students: &[StudentCandidate], teachers: &[TeacherCandidate]) -> f64 {
        students.len() as f64 / teachers.len() as f64
    }
}

/// Assigns students to teachers with the given options.
///
/// Shorthand for `GreedyAssigner::new(options.clone()).assign(..)`.
pub fn assign<S: CompatibilityScorer + ?Sized>(
    students: &[StudentCandidate],
    teachers: &[TeacherCandidate],
    scorer: &S,
    options: &AssignmentOptions,
) -> Vec<Assignment> {
    GreedyAssigner::new(options.clone()).assign(students, teachers, scorer)
}
