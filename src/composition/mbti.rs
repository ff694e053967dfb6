//! Personality-type distribution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{MbtiPercentages, TeacherTeamData};

/// Opposing letter pairs, one per axis position.
const AXES: [(char, char); 4] = [('E', 'I'), ('S', 'N'), ('T', 'F'), ('J', 'P')];

/// Number of types reported in `most_common` / `rarest`.
const TOP_N: usize = 3;

/// Letter occurrences per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AxisCounts {
    pub e: usize,
    pub i: usize,
    pub s: usize,
    pub n: usize,
    pub t: usize,
    pub f: usize,
    pub j: usize,
    pub p: usize,
}

impl AxisCounts {
    fn bump(&mut self, letter: char) {
        match letter {
            'E' => self.e += 1,
            'I' => self.i += 1,
            'S' => self.s += 1,
            'N' => self.n += 1,
            'T' => self.t += 1,
            'F' => self.f += 1,
            'J' => self.j += 1,
            'P' => self.p += 1,
            _ => {}
        }
    }

    /// Per-letter percentages over each opposing pair.
    pub fn ratios(&self) -> MbtiPercentages {
        let pct = |a: usize, b: usize| -> (f64, f64) {
            let sum = a + b;
            if sum == 0 {
                (0.0, 0.0)
            } else {
                (
                    a as f64 / sum as f64 * 100.0,
                    b as f64 / sum as f64 * 100.0,
                )
            }
        };
        let (e, i) = pct(self.e, self.i);
        let (s, n) = pct(self.s, self.n);
        let (t, f) = pct(self.t, self.f);
        let (j, p) = pct(self.j, self.p);
        MbtiPercentages {
            e,
            i,
            s,
            n,
            t,
            f,
            j,
            p,
        }
    }
}

/// One exact type and its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    pub mbti_type: String,
    pub count: usize,
}

/// Personality-type distribution across a roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MbtiDistribution {
    /// Exact-type frequencies.
    pub type_counts: BTreeMap<String, usize>,
    /// Letter occurrences per axis.
    pub axis_counts: AxisCounts,
    /// Letter percentages per axis.
    pub axis_ratios: MbtiPercentages,
    /// Up to three most frequent types, most frequent first.
    pub most_common: Vec<TypeCount>,
    /// Up to three least frequent types, least frequent first.
    pub rarest: Vec<TypeCount>,
    /// Teachers with a valid type code.
    pub teachers_with_type: usize,
}

impl MbtiDistribution {
    /// Tallies type codes across teachers. Missing or malformed codes are skipped.
    pub fn calculate(teachers: &[TeacherTeamData]) -> Self {
        // First-seen order drives tie-breaking in the rankings.
        let mut ordered: Vec<TypeCount> = Vec::new();
        let mut axis_counts = AxisCounts::default();
        let mut teachers_with_type = 0;

        for code in teachers.iter().filter_map(|t| t.mbti_type.as_deref()) {
            let Some(code) = normalize_type(code) else {
                continue;
            };
            teachers_with_type += 1;
            for letter in code.chars() {
                axis_counts.bump(letter);
            }
            match ordered.iter().position(|tc| tc.mbti_type == code) {
                Some(idx) => ordered[idx].count += 1,
                None => ordered.push(TypeCount {
                    mbti_type: code,
                    count: 1,
                }),
            }
        }

        let type_counts = ordered
            .iter()
            .map(|tc| (tc.mbti_type.clone(), tc.count))
            .collect();

        let mut ranked = ordered;
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        let most_common: Vec<TypeCount> = ranked.iter().take(TOP_N).cloned().collect();
        let rarest: Vec<TypeCount> = ranked.iter().rev().take(TOP_N).cloned().collect();

        Self {
            type_counts,
            axis_counts,
            axis_ratios: axis_counts.ratios(),
            most_common,
            rarest,
            teachers_with_type,
        }
    }

    /// Exact-type frequencies as floats, for diversity scoring.
    pub fn counts(&self) -> Vec<f64> {
        self.type_counts.values().map(|&c| c as f64).collect()
    }
}

/// Uppercases and validates a four-letter type code.
pub fn normalize_type(raw: &str) -> Option<String> {
    let code = raw.trim().to_uppercase();
    let letters: Vec<char> = code.chars().collect();
    if letters.len() != AXES.len() {
        return None;
    }
    let valid = letters
        .iter()
        .zip(AXES.iter())
        .all(|(&c, &(a, b))| c == a || c == b);
    valid.then_some(code)
}
