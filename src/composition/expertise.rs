//! Subject, grade and experience coverage.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Grade, Subject, TeacherTeamData};

/// A category is weak below this fraction of its even share.
const WEAK_SHARE_RATIO: f64 = 0.5;

const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;

/// Teachers bucketed by tenure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceLevels {
    /// Under one year.
    pub junior: usize,
    /// One to three years.
    pub mid: usize,
    /// Three years or more.
    pub senior: usize,
}

/// Subject and grade coverage of a roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertiseCoverage {
    /// Teachers per subject (every subject present, possibly zero).
    pub subjects: BTreeMap<Subject, usize>,
    /// Students per grade across teachers' grade lists.
    pub grades: BTreeMap<Grade, usize>,
    pub experience_levels: ExperienceLevels,
    /// Subjects below half their even share.
    pub weak_subjects: Vec<Subject>,
    /// Grades below half their even share.
    pub weak_grades: Vec<Grade>,
}

impl ExpertiseCoverage {
    /// Tallies subjects, grades and tenure as of `now`.
    ///
    /// Unrecognized labels and teachers without a creation time are skipped
    /// for the affected tally only.
    pub fn calculate(teachers: &[TeacherTeamData], now: DateTime<Utc>) -> Self {
        let mut subjects: BTreeMap<Subject, usize> = Subject::ALL.iter().map(|&s| (s, 0)).collect();
        let mut grades: BTreeMap<Grade, usize> = Grade::ALL.iter().map(|&g| (g, 0)).collect();
        let mut experience_levels = ExperienceLevels::default();

        for teacher in teachers {
            for subject in teacher.subjects.iter().filter_map(|s| Subject::parse(s)) {
                *subjects.entry(subject).or_insert(0) += 1;
            }
            for grade in teacher.student_grades.iter().filter_map(|g| Grade::parse(g)) {
                *grades.entry(grade).or_insert(0) += 1;
            }
            if let Some(created_at) = teacher.created_at {
                match tenure_years(created_at, now) {
                    y if y < 1.0 => experience_levels.junior += 1,
                    y if y < 3.0 => experience_levels.mid += 1,
                    _ => experience_levels.senior += 1,
                }
            }
        }

        let teacher_count = teachers.len();
        let weak_subjects = weak_categories(&subjects, teacher_count);
        let weak_grades = weak_categories(&grades, teacher_count);

        Self {
            subjects,
            grades,
            experience_levels,
            weak_subjects,
            weak_grades,
        }
    }

    /// Subject counts as floats, in canonical order.
    pub fn subject_counts(&self) -> Vec<f64> {
        self.subjects.values().map(|&c| c as f64).collect()
    }

    /// Grade counts as floats, in canonical order.
    pub fn grade_counts(&self) -> Vec<f64> {
        self.grades.values().map(|&c| c as f64).collect()
    }
}

/// Years between `since` and `now`, using a 365-day year.
pub fn tenure_years(since: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - since).num_seconds() as f64 / SECONDS_PER_YEAR
}

fn weak_categories<K: Copy + Ord>(counts: &BTreeMap<K, usize>, teacher_count: usize) -> Vec<K> {
    if counts.is_empty() {
        return Vec::new();
    }
    let expected = teacher_count as f64 / counts.len() as f64;
    counts
        .iter()
        .filter(|(_, &c)| (c as f64) < expected * WEAK_SHARE_RATIO)
        .map(|(&k, _)| k)
        .collect()
}
