//! Assignment candidates.
//!
//! Teachers and students enter an assignment run as lightweight candidates:
//! an identity, the teacher's live load, and an analysis bundle that only the
//! caller's scoring function interprets.

use serde::{Deserialize, Serialize};

use super::Element;

/// Personality axis percentages (each opposing pair sums to ~100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MbtiPercentages {
    pub e: f64,
    pub i: f64,
    pub s: f64,
    pub n: f64,
    pub t: f64,
    pub f: f64,
    pub j: f64,
    pub p: f64,
}

/// Five-element (saju) weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SajuElements {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl SajuElements {
    /// Creates a balance from the five weights in canonical order.
    pub fn new(wood: f64, fire: f64, earth: f64, metal: f64, water: f64) -> Self {
        Self {
            wood,
            fire,
            earth,
            metal,
            water,
        }
    }

    /// Weight of a single element.
    pub fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// Sum of all five weights.
    pub fn total(&self) -> f64 {
        Element::ALL.iter().map(|&e| self.get(e)).sum()
    }
}

/// Opaque analysis bundle handed to the scoring function.
///
/// The engine never reads these fields itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateAnalysis {
    /// Four-letter personality type code (e.g. "ENFP").
    pub mbti_type: Option<String>,
    /// Personality axis percentages.
    pub mbti: Option<MbtiPercentages>,
    /// Five-element balance.
    pub saju: Option<SajuElements>,
    /// Name-numerology score.
    pub name_score: Option<f64>,
}

impl CandidateAnalysis {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
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

    /// Sets the five-element balance.
    pub fn with_saju(mut self, saju: SajuElements) -> Self {
        self.saju = Some(saju);
        self
    }

    /// Sets the name-numerology score.
    pub fn with_name_score(mut self, score: f64) -> Self {
        self.name_score = Some(score);
        self
    }
}

/// A teacher available for assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherCandidate {
    /// Unique teacher identifier.
    pub id: String,
    /// Students already assigned before this run.
    pub current_load: usize,
    /// Analysis bundle for the scorer.
    pub analysis: CandidateAnalysis,
}

impl TeacherCandidate {
    /// Creates a teacher with no current students.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            current_load: 0,
            analysis: CandidateAnalysis::default(),
        }
    }

    /// Sets the starting load.
    pub fn with_load(mut self, load: usize) -> Self {
        self.current_load = load;
        self
    }

    /// Sets the analysis bundle.
    pub fn with_analysis(mut self, analysis: CandidateAnalysis) -> Self {
        self.analysis = analysis;
        self
    }
}

/// A student waiting for a teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCandidate {
    /// Unique student identifier.
    pub id: String,
    /// Analysis bundle for the scorer.
    pub analysis: CandidateAnalysis,
}

impl StudentCandidate {
    /// Creates a student with an empty analysis bundle.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            analysis: CandidateAnalysis::default(),
        }
    }

    /// Sets the analysis bundle.
    pub fn with_analysis(mut self, analysis: CandidateAnalysis) -> Self {
        self.analysis = analysis;
        self
    }
}
