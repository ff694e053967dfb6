//! Input validation for assignment runs.
//!
//! The engine, analyzer and auditor accept any input and never fail. These
//! checks are an optional pre-flight for callers that want to reject bad
//! data before running. Detects:
//! - Duplicate student or teacher IDs
//! - Unusable option values (zero cap, non-finite or out-of-range threshold)
//! - Students assigned more than once
//! - Scores outside 0-100

use std::collections::HashSet;

use thiserror::Error;

use crate::matching::AssignmentOptions;
use crate::models::{Assignment, StudentCandidate, TeacherCandidate};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An option value cannot be honored.
    InvalidOption,
    /// A student appears in more than one assignment.
    DuplicateAssignment,
    /// A score is non-finite or outside 0-100.
    ScoreOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the candidates and options of an assignment run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_candidates(
    students: &[StudentCandidate],
    teachers: &[TeacherCandidate],
    options: &AssignmentOptions,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut student_ids = HashSet::new();
    for s in students {
        if !student_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", s.id),
            ));
        }
    }

    let mut teacher_ids = HashSet::new();
    for t in teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    if let Err(option_errors) = validate_options(options) {
        errors.extend(option_errors);
    }

    finish(errors)
}

/// Validates option values.
pub fn validate_options(options: &AssignmentOptions) -> ValidationResult {
    let mut errors = Vec::new();

    if options.max_students_per_teacher == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidOption,
            "maxStudentsPerTeacher must be positive",
        ));
    }

    if let Some(threshold) = options.min_compatibility_threshold {
        if !is_score(threshold) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidOption,
                format!("minCompatibilityThreshold {threshold} is outside 0-100"),
            ));
        }
    }

    finish(errors)
}

/// Validates an assignment list before auditing or persisting it.
pub fn validate_assignments(assignments: &[Assignment]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for a in assignments {
        if !seen.insert(a.student_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateAssignment,
                format!("Student '{}' is assigned more than once", a.student_id),
            ));
        }
        if !is_score(a.overall()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ScoreOutOfRange,
                format!(
                    "Assignment of '{}' to '{}' has score {}",
                    a.student_id,
                    a.teacher_id,
                    a.overall()
                ),
            ));
        }
    }

    finish(errors)
}

fn is_score(v: f64) -> bool {
    v.is_finite() && (0.0..=100.0).contains(&v)
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
