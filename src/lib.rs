//! Teacher-student matching for the U-Engine ecosystem.
//!
//! Assigns students to teachers under a load cap, analyzes the composition
//! of teacher teams, and audits assignments for fairness. Every computation
//! is a pure, synchronous function over in-memory data; fetching and
//! persisting records is left to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TeacherCandidate`, `StudentCandidate`,
//!   `CompatibilityScore`, `Assignment`, `TeacherTeamData`, fixed categories
//! - **`matching`**: Greedy capacity-constrained assignment with a pluggable
//!   `CompatibilityScorer`, plus load and outcome statistics
//! - **`composition`**: Roster distributions, Shannon diversity score and
//!   recommendations
//! - **`fairness`**: Disparity index, ABROCA-style skew and load balance
//! - **`validation`**: Optional input integrity checks (duplicate IDs,
//!   option ranges, double assignment)
//!
//! # Architecture
//!
//! The three components share only the types in `models`; none depends on
//! another's internal state. Compatibility scoring is supplied by the caller.

pub mod composition;
pub mod fairness;
pub mod matching;
pub mod models;
pub mod validation;
