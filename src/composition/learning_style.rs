//! Learning-style distribution.

use serde::{Deserialize, Serialize};

use crate::models::{LearningStyle, LearningStylePercentages, TeacherTeamData};

/// Average learning-style mix of a roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStyleDistribution {
    /// Rounded average percentages.
    pub averages: LearningStylePercentages,
    /// Highest average; `None` when no teacher has data.
    pub dominant: Option<LearningStyle>,
    /// Teachers contributing to the averages.
    pub teachers_with_data: usize,
}

impl LearningStyleDistribution {
    /// Averages learning-style percentages over teachers that have them.
    pub fn calculate(teachers: &[TeacherTeamData]) -> Self {
        let profiles: Vec<&LearningStylePercentages> = teachers
            .iter()
            .filter_map(|t| t.learning_style.as_ref())
            .collect();

        if profiles.is_empty() {
            return Self::default();
        }

        let n = profiles.len() as f64;
        let avg = |style: LearningStyle| -> f64 {
            (profiles.iter().map(|p| p.get(style)).sum::<f64>() / n).round()
        };
        let averages = LearningStylePercentages::new(
            avg(LearningStyle::Visual),
            avg(LearningStyle::Auditory),
            avg(LearningStyle::Reading),
            avg(LearningStyle::Kinesthetic),
        );

        let mut dominant = LearningStyle::ALL[0];
        for style in LearningStyle::ALL {
            if averages.get(style) > averages.get(dominant) {
                dominant = style;
            }
        }

        Self {
            averages,
            dominant: Some(dominant),
            teachers_with_data: profiles.len(),
        }
    }

    /// Averages in canonical style order.
    pub fn values(&self) -> [f64; 4] {
        LearningStyle::ALL.map(|s| self.averages.get(s))
    }

    /// Combined average of every style except `style`.
    pub fn share_excluding(&self, style: LearningStyle) -> f64 {
        LearningStyle::ALL
            .iter()
            .filter(|&&s| s != style)
            .map(|&s| self.averages.get(s))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_teacher(id: &str, v: f64, a: f64, r: f64, k: f64) -> TeacherTeamData {
        TeacherTeamData::new(id).with_learning_style(LearningStylePercentages::new(v, a, r, k))
    }

    #[test]
    fn test_averages_and_dominant() {
        let teachers = vec![
            make_teacher("T1", 40.0, 30.0, 20.0, 10.0),
            make_teacher("T2", 20.0, 50.0, 20.0, 10.0),
            TeacherTeamData::new("T3"),
        ];
        let dist = LearningStyleDistribution::calculate(&teachers);
        assert_eq!(dist.teachers_with_data, 2);
        assert_eq!(dist.values(), [30.0, 40.0, 20.0, 10.0]);
        assert_eq!(dist.dominant, Some(LearningStyle::Auditory));
    }

    #[test]
    fn test_rounding() {
        let teachers = vec![
            make_teacher("T1", 33.0, 33.0, 17.0, 17.0),
            make_teacher("T2", 34.0, 34.0, 16.0, 16.0),
        ];
        let dist = LearningStyleDistribution::calculate(&teachers);
        // 33.5 rounds half away from zero
        assert_eq!(dist.values(), [34.0, 34.0, 17.0, 17.0]);
    }

    #[test]
    fn test_tie_break_prefers_canonical_order() {
        let teachers = vec![make_teacher("T1", 25.0, 25.0, 25.0, 25.0)];
        let dist = LearningStyleDistribution::calculate(&teachers);
        assert_eq!(dist.dominant, Some(LearningStyle::Visual));

        let teachers = vec![make_teacher("T1", 10.0, 40.0, 40.0, 10.0)];
        let dist = LearningStyleDistribution::calculate(&teachers);
        assert_eq!(dist.dominant, Some(LearningStyle::Auditory));
    }

    #[test]
    fn test_no_data() {
        let dist = LearningStyleDistribution::calculate(&[TeacherTeamData::new("T1")]);
        assert_eq!(dist.dominant, None);
        assert_eq!(dist.values(), [0.0; 4]);
    }

    #[test]
    fn test_share_excluding() {
        let teachers = [make_teacher("T1", 70.0, 10.0, 10.0, 10.0)];
        let dist = LearningStyleDistribution::calculate(&teachers);
        assert!((dist.share_excluding(LearningStyle::Visual) - 30.0).abs() < 1e-10);
    }
}
