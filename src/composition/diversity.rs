//! Shannon-entropy diversity scoring.
//!
//! # Reference
//! Shannon (1948), "A Mathematical Theory of Communication";
//! Pielou (1966), evenness index J' = H / ln(S)

use serde::{Deserialize, Serialize};

/// Normalized Shannon diversity of a categorical distribution (0-100).
///
/// Computes `H = -Σ p ln p` over nonzero counts with `p = count / total`,
/// divides by `ln(counts.len())` and scales to 0-100. Returns 0 when the
/// total is not positive or there are fewer than two categories.
pub fn shannon_diversity(counts: &[f64], total: f64) -> f64 {
    if total.is_nan() || total <= 0.0 || counts.len() < 2 {
        return 0.0;
    }

    let entropy: f64 = counts
        .iter()
        .filter(|&&c| c > 0.0)
        .map(|&c| {
            let p = c / total;
            -p * p.ln()
        })
        .sum();

    let ratio = entropy / (counts.len() as f64).ln();
    if ratio.is_finite() {
        (ratio * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Per-family diversity components and their mean (all 0-100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversityScore {
    pub mbti_diversity: u32,
    pub learning_style_diversity: u32,
    pub element_diversity: u32,
    pub subject_diversity: u32,
    pub grade_diversity: u32,
    /// Unweighted mean of the five components, rounded.
    pub overall: u32,
}

impl DiversityScore {
    /// Builds a score from unrounded components.
    pub fn from_components(
        mbti: f64,
        learning_style: f64,
        element: f64,
        subject: f64,
        grade: f64,
    ) -> Self {
        let round = |v: f64| v.round().clamp(0.0, 100.0) as u32;
        let parts = [
            round(mbti),
            round(learning_style),
            round(element),
            round(subject),
            round(grade),
        ];
        let overall = (parts.iter().sum::<u32>() as f64 / parts.len() as f64).round() as u32;

        Self {
            mbti_diversity: parts[0],
            learning_style_diversity: parts[1],
            element_diversity: parts[2],
            subject_diversity: parts[3],
            grade_diversity: parts[4],
            overall,
        }
    }
}
