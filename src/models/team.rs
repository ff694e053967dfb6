//! Teacher roster records for composition analysis.
//!
//! Every analytic field is optional or may be empty; the analyzer skips a
//! teacher for any distribution whose input is missing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LearningStyle, MbtiPercentages, SajuElements};

/// Learning-style percentages for one teacher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningStylePercentages {
    pub visual: f64,
    pub auditory: f64,
    pub reading: f64,
    pub kinesthetic: f64,
}

impl LearningStylePercentages {
    /// Creates percentages in canonical order.
    pub fn new(visual: f64, auditory: f64, reading: f64, kinesthetic: f64) -> Self {
        Self {
            visual,
            auditory,
            reading,
            kinesthetic,
        }
    }

    /// Percentage for one style.
    pub fn get(&self, style: LearningStyle) -> f64 {
        match style {
            LearningStyle::Visual => self.visual,
            LearningStyle::Auditory => self.auditory,
            LearningStyle::Reading => self.reading,
            LearningStyle::Kinesthetic => self.kinesthetic,
        }
    }
}

/// One teacher's roster record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherTeamData {
    /// Unique teacher identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Four-letter personality type code.
    pub mbti_type: Option<String>,
    /// Personality axis percentages.
    pub mbti: Option<MbtiPercentages>,
    /// Learning-style percentages.
    pub learning_style: Option<LearningStylePercentages>,
    /// Five-element balance.
    pub saju: Option<SajuElements>,
    /// Subjects taught (free-form labels).
    pub subjects: Vec<String>,
    /// Grades of currently assigned students (free-form labels).
    pub student_grades: Vec<String>,
    /// Organizational role.
    pub role: Option<String>,
    /// Account creation time, used as tenure start.
    pub created_at: Option<DateTime<Utc>>,
}

impl TeacherTeamData {
    /// Creates a record with no analytic data.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            mbti_type: None,
            mbti: None,
            learning_style: None,
            saju: None,
            subjects: Vec::new(),
            student_grades: Vec::new(),
            role: None,
            created_at: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the personality type code.
    pub fn with_mbti_type(mut self, code: impl Into<String>) -> Self {
        self.mbti_type = Some(code.into());
        self
    }

    /// Sets the personality axis percentages.
    pub fn with_mbti(mut self, mbti: MbtiPercentages) -> Self {
        self.mbti = Some(mbti);
        self
    }

    /// Sets the learning-style percentages.
    pub fn with_learning_style(mut self, style: LearningStylePercentages) -> Self {
        self.learning_style = Some(style);
        self
    }

    /// Sets the five-element balance.
    pub fn with_saju(mut self, saju: SajuElements) -> Self {
        self.saju = Some(saju);
        self
    }

    /// Adds a taught subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Adds a student grade.
    pub fn with_student_grade(mut self, grade: impl Into<String>) -> Self {
        self.student_grades.push(grade.into());
        self
    }

    /// Sets the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the creation time.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
