//! Matching domain models.
//!
//! Value types shared by the assignment engine, the composition analyzer
//! and the fairness auditor. Every type here is constructed once and never
//! mutated by the algorithms that consume it.
//!
//! # Domain Mappings
//!
//! | u-match | Tutoring | Mentoring | Advising |
//! |---------|----------|-----------|----------|
//! | TeacherCandidate | Tutor | Mentor | Advisor |
//! | StudentCandidate | Student | Mentee | Advisee |
//! | Assignment | Class placement | Pairing | Caseload entry |
//! | TeacherTeamData | Staff roster row | Mentor profile | Advisor profile |

mod assignment;
mod candidate;
mod categories;
mod compatibility;
mod team;

pub use assignment::Assignment;
pub use candidate::{
    CandidateAnalysis, MbtiPercentages, SajuElements, StudentCandidate, TeacherCandidate,
};
pub use categories::{Element, Grade, LearningStyle, Subject, TeamRole};
pub use compatibility::{CompatibilityScore, ScoreBreakdown};
pub use team::{LearningStylePercentages, TeacherTeamData};
