//! Fairness auditing for assignments.
//!
//! Audits any list of [`Assignment`](crate::models::Assignment)s, whether
//! produced by the greedy engine or elsewhere, for group disparity,
//! score-distribution skew and load imbalance.
//!
//! # Usage
//!
//! ```
//! use u_match::fairness::audit_fairness;
//! use u_match::models::Assignment;
//!
//! let assignments = vec![
//!     Assignment::new("S1", "T1", 80.0),
//!     Assignment::new("S2", "T2", 75.0),
//! ];
//! let metrics = audit_fairness(&assignments, None);
//! assert_eq!(metrics.distribution_balance, 1.0);
//! ```
//!
//! # References
//!
//! - Gardner, Brooks & Baker (2019), "Evaluating the Fairness of Predictive
//!   Student Models Through Slicing Analysis" (ABROCA)

mod auditor;
mod metrics;

pub use auditor::{audit_fairness, FairnessAuditor, FairnessMetrics, FairnessThresholds};
pub use metrics::{abroca, disparity_index, distribution_balance};
