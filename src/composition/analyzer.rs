//! Team composition analysis entry point.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    generate_recommendations, shannon_diversity, DiversityScore, ExpertiseCoverage,
    LearningStyleDistribution, MbtiDistribution, Recommendation, RoleDistribution,
    SajuElementsDistribution,
};
use crate::models::TeacherTeamData;

/// Percentage mass one teacher contributes to the learning-style total.
const LEARNING_STYLE_MASS_PER_TEACHER: f64 = 100.0;
/// Element percentages always sum to this when any data exists.
const ELEMENT_PERCENT_TOTAL: f64 = 100.0;

/// Snapshot of a teacher roster along every analyzed dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamComposition {
    pub team_id: String,
    pub teacher_count: usize,
    pub mbti: MbtiDistribution,
    pub learning_style: LearningStyleDistribution,
    pub elements: SajuElementsDistribution,
    pub expertise: ExpertiseCoverage,
    pub roles: RoleDistribution,
}

impl TeamComposition {
    /// Computes every distribution for a roster as of `now`.
    pub fn calculate(
        team_id: impl Into<String>,
        teachers: &[TeacherTeamData],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            team_id: team_id.into(),
            teacher_count: teachers.len(),
            mbti: MbtiDistribution::calculate(teachers),
            learning_style: LearningStyleDistribution::calculate(teachers),
            elements: SajuElementsDistribution::calculate(teachers),
            expertise: ExpertiseCoverage::calculate(teachers, now),
            roles: RoleDistribution::calculate(teachers),
        }
    }

    /// Shannon diversity of each distribution family.
    pub fn diversity(&self) -> DiversityScore {
        let n = self.teacher_count as f64;

        let subject_counts = self.expertise.subject_counts();
        let subject_total: f64 = subject_counts.iter().sum();
        let grade_counts = self.expertise.grade_counts();
        let grade_total: f64 = grade_counts.iter().sum();

        DiversityScore::from_components(
            shannon_diversity(&self.mbti.counts(), n),
            shannon_diversity(
                &self.learning_style.values(),
                n * LEARNING_STYLE_MASS_PER_TEACHER,
            ),
            shannon_diversity(&self.elements.percentage_values(), ELEMENT_PERCENT_TOTAL),
            shannon_diversity(&subject_counts, subject_total),
            shannon_diversity(&grade_counts, grade_total),
        )
    }
}

/// Full analysis result for one roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionAnalysis {
    pub composition: TeamComposition,
    pub diversity_score: DiversityScore,
    /// Firing rules, high priority first.
    pub recommendations: Vec<Recommendation>,
    pub analyzed_at: DateTime<Utc>,
}

/// Analyzes a roster as of the current time.
pub fn analyze_composition(
    team_id: impl Into<String>,
    teachers: &[TeacherTeamData],
) -> CompositionAnalysis {
    analyze_composition_at(team_id, teachers, Utc::now())
}

/// Analyzes a roster as of `now`.
///
/// Teachers missing a datum are skipped for that distribution only.
pub fn analyze_composition_at(
    team_id: impl Into<String>,
    teachers: &[TeacherTeamData],
    now: DateTime<Utc>,
) -> CompositionAnalysis {
    let composition = TeamComposition::calculate(team_id, teachers, now);
    let diversity_score = composition.diversity();
    let recommendations = generate_recommendations(&composition, &diversity_score);

    debug!(
        team_id = %composition.team_id,
        teachers = composition.teacher_count,
        diversity = diversity_score.overall,
        recommendations = recommendations.len(),
        "composition analyzed"
    );

    CompositionAnalysis {
        composition,
        diversity_score,
        recommendations,
        analyzed_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::Priority;
    use crate::models::{LearningStylePercentages, SajuElements};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_roster() {
        let analysis = analyze_composition_at("empty", &[], now());
        assert_eq!(analysis.composition.teacher_count, 0);
        assert_eq!(analysis.diversity_score, DiversityScore::default());
        // Only the low-diversity rule can fire without data.
        let ids: Vec<&str> = analysis.recommendations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["low-diversity"]);
        assert_eq!(analysis.analyzed_at, now());
    }

    #[test]
    fn test_single_type_roster_has_zero_mbti_diversity() {
        let teachers: Vec<_> = (0..4)
            .map(|i| TeacherTeamData::new(format!("T{i}")).with_mbti_type("ESFJ"))
            .collect();
        let analysis = analyze_composition_at("team", &teachers, now());
        assert_eq!(analysis.composition.mbti.most_common.len(), 1);
        assert_eq!(analysis.diversity_score.mbti_diversity, 0);
    }

    #[test]
    fn test_even_mbti_spread() {
        let teachers: Vec<_> = ["ENFP", "ISTJ", "INTP", "ESFJ"]
            .iter()
            .enumerate()
            .map(|(i, c)| TeacherTeamData::new(format!("T{i}")).with_mbti_type(*c))
            .collect();
        let d = TeamComposition::calculate("team", &teachers, now()).diversity();
        assert_eq!(d.mbti_diversity, 100);
    }

    #[test]
    fn test_learning_style_mass_scales_with_team() {
        // One teacher, evenly split: p = 0.25 each → full entropy
        let one = vec![TeacherTeamData::new("T1")
            .with_learning_style(LearningStylePercentages::new(25.0, 25.0, 25.0, 25.0))];
        let d = TeamComposition::calculate("team", &one, now()).diversity();
        assert_eq!(d.learning_style_diversity, 100);
    }

    #[test]
    fn test_element_component_uses_percentages() {
        let teachers = vec![TeacherTeamData::new("T1")
            .with_saju(SajuElements::new(20.0, 20.0, 20.0, 20.0, 20.0))];
        let d = TeamComposition::calculate("team", &teachers, now()).diversity();
        assert_eq!(d.element_diversity, 100);
    }

    #[test]
    fn test_recommendations_sorted_by_priority() {
        let teachers: Vec<_> = (0..3)
            .map(|i| {
                TeacherTeamData::new(format!("T{i}"))
                    .with_mbti_type("INTJ")
                    .with_subject("Math")
                    .with_student_grade("High 1")
                    .with_saju(SajuElements::new(50.0, 10.0, 10.0, 10.0, 20.0))
                    .with_learning_style(LearningStylePercentages::new(80.0, 10.0, 5.0, 5.0))
            })
            .collect();
        let analysis = analyze_composition_at("team", &teachers, now());
        let priorities: Vec<Priority> =
            analysis.recommendations.iter().map(|r| r.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);
        assert_eq!(analysis.recommendations[0].id, "learning-style-balance");
        assert!(analysis.recommendations.iter().any(|r| r.id == "element-balance"));
    }

    #[test]
    fn test_analysis_wire_shape() {
        let analysis = analyze_composition_at("team-7", &[TeacherTeamData::new("T1")], now());
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["composition"]["teamId"], "team-7");
        assert!(json["diversityScore"]["overall"].is_number());
        assert!(json["composition"]["expertise"]["subjects"]["math"].is_number());
    }
}
