//! Five-element balance across a roster.

use serde::{Deserialize, Serialize};

use crate::models::{Element, SajuElements, TeacherTeamData};

/// An element is deficient below this fraction of the mean element sum.
const DEFICIENCY_RATIO: f64 = 0.7;

/// Label reported when no element dominates.
const NO_DOMINANT: &str = "-";

/// Summed five-element weights and their balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SajuElementsDistribution {
    /// Raw sums per element.
    pub totals: SajuElements,
    /// Share of the five-way total per element (0-100).
    pub percentages: SajuElements,
    /// Largest element; `None` when the total is zero.
    pub dominant: Option<Element>,
    /// Label of `dominant`, `"-"` when there is none.
    pub dominant_label: String,
    /// Elements below 70% of the mean element sum.
    pub deficient: Vec<Element>,
    /// Teachers with five-element data.
    pub teachers_with_data: usize,
}

impl Default for SajuElementsDistribution {
    fn default() -> Self {
        Self {
            totals: SajuElements::default(),
            percentages: SajuElements::default(),
            dominant: None,
            dominant_label: NO_DOMINANT.to_string(),
            deficient: Vec::new(),
            teachers_with_data: 0,
        }
    }
}

impl SajuElementsDistribution {
    /// Sums element weights over teachers that have them.
    pub fn calculate(teachers: &[TeacherTeamData]) -> Self {
        let mut totals = SajuElements::default();
        let mut teachers_with_data = 0;

        for saju in teachers.iter().filter_map(|t| t.saju.as_ref()) {
            teachers_with_data += 1;
            totals.wood += saju.wood;
            totals.fire += saju.fire;
            totals.earth += saju.earth;
            totals.metal += saju.metal;
            totals.water += saju.water;
        }

        Self::from_totals(totals, teachers_with_data)
    }

    /// Derives percentages, dominant and deficient elements from raw sums.
    pub fn from_totals(totals: SajuElements, teachers_with_data: usize) -> Self {
        let total = totals.total();
        if !(total.is_finite() && total > 0.0) {
            return Self {
                totals,
                teachers_with_data,
                ..Self::default()
            };
        }

        let pct = |e: Element| totals.get(e) / total * 100.0;
        let percentages = SajuElements::new(
            pct(Element::Wood),
            pct(Element::Fire),
            pct(Element::Earth),
            pct(Element::Metal),
            pct(Element::Water),
        );

        let mut dominant = Element::ALL[0];
        for e in Element::ALL {
            if totals.get(e) > totals.get(dominant) {
                dominant = e;
            }
        }

        let mean = total / Element::ALL.len() as f64;
        let deficient = Element::ALL
            .iter()
            .copied()
            .filter(|&e| totals.get(e) < mean * DEFICIENCY_RATIO)
            .collect();

        Self {
            totals,
            percentages,
            dominant: Some(dominant),
            dominant_label: dominant.label().to_string(),
            deficient,
            teachers_with_data,
        }
    }

    /// Dominant element label, or "-" when there is none.
    pub fn dominant_label(&self) -> &str {
        &self.dominant_label
    }

    /// Percentages in canonical element order.
    pub fn percentage_values(&self) -> [f64; 5] {
        Element::ALL.map(|e| self.percentages.get(e))
    }
}
