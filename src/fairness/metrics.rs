//! Individual fairness metrics.
//!
//! | Metric | Definition | Better |
//! |--------|-----------|--------|
//! | Disparity index | (max group mean - min group mean) / 100 | lower |
//! | ABROCA-style skew | L1 gap between score histogram and uniform, / (2 * n) | lower |
//! | Distribution balance | 1 - CV of per-teacher assignment counts | higher |
//!
//! All metrics are clamped to [0, 1].

use std::collections::{BTreeMap, HashMap};

use crate::models::Assignment;

/// Histogram bins over [0, 100].
const BINS: usize = 10;
const BIN_WIDTH: f64 = 100.0 / BINS as f64;

/// Spread of mean compatibility across student groups.
///
/// Students missing from `groups` are ignored. Returns 0 when fewer than
/// two groups have assignments.
pub fn disparity_index(assignments: &[Assignment], groups: &HashMap<String, String>) -> f64 {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for a in assignments {
        if let Some(group) = groups.get(&a.student_id) {
            let entry = sums.entry(group.as_str()).or_insert((0.0, 0));
            entry.0 += a.overall();
            entry.1 += 1;
        }
    }

    if sums.len() < 2 {
        return 0.0;
    }

    let means: Vec<f64> = sums.values().map(|&(sum, n)| sum / n as f64).collect();
    let max = means.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = means.iter().copied().fold(f64::INFINITY, f64::min);
    clamp_unit((max - min) / 100.0)
}

/// Histogram-based skew of the score distribution versus uniform.
///
/// A perfectly uniform spread across the ten bins scores 0; everything in
/// one bin scores 0.9.
pub fn abroca(assignments: &[Assignment]) -> f64 {
    if assignments.is_empty() {
        return 0.0;
    }

    let mut bins = [0usize; BINS];
    for a in assignments {
        bins[bin_index(a.overall())] += 1;
    }

    let n = assignments.len() as f64;
    let expected = n / BINS as f64;
    let distance: f64 = bins.iter().map(|&c| (c as f64 - expected).abs()).sum();
    clamp_unit(distance / (2.0 * n))
}

/// Evenness of per-teacher assignment counts: `1 - stdDev / mean`.
///
/// Empty input is treated as perfectly balanced.
pub fn distribution_balance(assignments: &[Assignment]) -> f64 {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for a in assignments {
        *counts.entry(a.teacher_id.as_str()).or_insert(0) += 1;
    }

    if counts.is_empty() {
        return 1.0;
    }

    let n = counts.len() as f64;
    let mean = counts.values().sum::<usize>() as f64 / n;
    if mean <= 0.0 {
        return 1.0;
    }
    let variance = counts
        .values()
        .map(|&c| {
            let d = c as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    clamp_unit(1.0 - variance.sqrt() / mean)
}

fn bin_index(score: f64) -> usize {
    if !score.is_finite() || score <= 0.0 {
        return 0;
    }
    ((score / BIN_WIDTH).floor() as usize).min(BINS - 1)
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
