//! Capacity-constrained greedy assignment.
//!
//! Pairs each student with the highest-scoring teacher that still has room,
//! using a caller-supplied scorer.
//!
//! # Usage
//!
//! ```
//! use u_match::matching::{AssignmentOptions, GreedyAssigner};
//! use u_match::models::{
//!     CandidateAnalysis, CompatibilityScore, StudentCandidate, TeacherCandidate,
//! };
//!
//! let teachers = vec![TeacherCandidate::new("T1"), TeacherCandidate::new("T2")];
//! let students = vec![StudentCandidate::new("S1"), StudentCandidate::new("S2")];
//! let scorer = |_t: &CandidateAnalysis, _s: &CandidateAnalysis, _avg: f64| {
//!     CompatibilityScore::new(75.0)
//! };
//!
//! let assigner = GreedyAssigner::new(AssignmentOptions::new().with_max_students_per_teacher(1));
//! let assignments = assigner.assign(&students, &teachers, &scorer);
//! assert_eq!(assignments.len(), 2);
//! assert_eq!(assignments[1].teacher_id, "T2");
//! ```
//!
//! # References
//!
//! - Burkard, Dell'Amico & Martello (2012), "Assignment Problems", Ch. 5
//! - Gale & Shapley (1962), "College Admissions and the Stability of Marriage"

mod engine;
mod options;
mod stats;

pub use engine::{assign, GreedyAssigner};
pub use options::AssignmentOptions;
pub use stats::{teacher_loads, AssignmentSummary, LoadStats};

use crate::models::{CandidateAnalysis, CompatibilityScore};

/// Scores the fit between one teacher and one student.
///
/// Any `Fn(&CandidateAnalysis, &CandidateAnalysis, f64) -> CompatibilityScore`
/// closure is a scorer. The third argument is the average load per teacher
/// for the run, for scorers that reward spreading students out.
pub trait CompatibilityScorer {
    /// Evaluates one (teacher, student) pairing.
    fn score(
        &self,
        teacher: &CandidateAnalysis,
        student: &CandidateAnalysis,
        average_load: f64,
    ) -> CompatibilityScore;
}

impl<F> CompatibilityScorer for F
where
    F: Fn(&CandidateAnalysis, &CandidateAnalysis, f64) -> CompatibilityScore,
{
    fn score(
        &self,
        teacher: &CandidateAnalysis,
        student: &CandidateAnalysis,
        average_load: f64,
    ) -> CompatibilityScore {
        self(teacher, student, average_load)
    }
}
