use std::collections::{HashMap, HashSet};

use chrono::{Duration, TimeZone, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use u_match::composition::analyze_composition_at;
use u_match::fairness::audit_fairness;
use u_match::matching::{
    assign, teacher_loads, AssignmentOptions, AssignmentSummary, GreedyAssigner, LoadStats,
};
use u_match::models::{
    CandidateAnalysis, CompatibilityScore, Element, SajuElements, StudentCandidate,
    TeacherCandidate, TeacherTeamData,
};
use u_match::validation::validate_assignments;

fn constant_80(_: &CandidateAnalysis, _: &CandidateAnalysis, _: f64) -> CompatibilityScore {
    CompatibilityScore::new(80.0)
}

fn name_distance(t: &CandidateAnalysis, s: &CandidateAnalysis, _: f64) -> CompatibilityScore {
    let tn = t.name_score.unwrap_or(0.0);
    let sn = s.name_score.unwrap_or(0.0);
    CompatibilityScore::new((100.0 - (tn - sn).abs()).max(0.0))
}

#[test]
fn two_teachers_ten_students_split_evenly() {
    let teachers = vec![TeacherCandidate::new("T1"), TeacherCandidate::new("T2")];
    let students: Vec<_> = (0..10).map(|i| StudentCandidate::new(format!("S{i}"))).collect();
    let opts = AssignmentOptions::new().with_max_students_per_teacher(5);

    let assignments = assign(&students, &teachers, &constant_80, &opts);
    assert_eq!(assignments.len(), 10);

    let loads = teacher_loads(&teachers, &assignments);
    assert_eq!(loads["T1"], 5);
    assert_eq!(loads["T2"], 5);
    assert_eq!(LoadStats::calculate(&loads).range, 0);

    let summary = AssignmentSummary::calculate(&assignments, students.len());
    assert_eq!(summary.assigned_students, 10);
    assert!((summary.average_score - 80.0).abs() < 1e-10);
}

#[test]
fn randomized_runs_respect_cap_and_uniqueness() {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..50 {
        let teacher_count = rng.random_range(1..6);
        let student_count = rng.random_range(0..40);
        let teachers: Vec<_> = (0..teacher_count)
            .map(|i| {
                TeacherCandidate::new(format!("T{i}"))
                    .with_load(rng.random_range(0..4))
                    .with_analysis(
                        CandidateAnalysis::new().with_name_score(rng.random_range(0.0..100.0)),
                    )
            })
            .collect();
        let students: Vec<_> = (0..student_count)
            .map(|i| {
                StudentCandidate::new(format!("S{i}")).with_analysis(
                    CandidateAnalysis::new().with_name_score(rng.random_range(0.0..100.0)),
                )
            })
            .collect();

        let cap = rng.random_range(1..10);
        let opts = AssignmentOptions::new()
            .with_max_students_per_teacher(cap)
            .with_min_compatibility_threshold(30.0);
        let assignments = GreedyAssigner::new(opts).assign(&students, &teachers, &name_distance);

        assert!(assignments.len() <= students.len());
        assert!(validate_assignments(&assignments).is_ok());

        let unique: HashSet<&str> = assignments.iter().map(|a| a.student_id.as_str()).collect();
        assert_eq!(unique.len(), assignments.len());
        assert!(assignments.iter().all(|a| a.overall() >= 30.0));

        // Teachers already over the cap take nobody; everyone else stays within it.
        let mut placed: HashMap<&str, usize> = HashMap::new();
        for a in &assignments {
            *placed.entry(a.teacher_id.as_str()).or_insert(0) += 1;
        }
        for t in &teachers {
            let added = placed.get(t.id.as_str()).copied().unwrap_or(0);
            if t.current_load >= cap {
                assert_eq!(added, 0);
            } else {
                assert!(t.current_load + added <= cap);
            }
        }
    }
}

#[test]
fn assignment_feeds_fairness_audit() {
    let teachers = vec![TeacherCandidate::new("T1"), TeacherCandidate::new("T2")];
    let students: Vec<_> = (0..10).map(|i| StudentCandidate::new(format!("S{i}"))).collect();
    let opts = AssignmentOptions::new().with_max_students_per_teacher(5);
    let assignments = assign(&students, &teachers, &constant_80, &opts);

    let groups: HashMap<String, String> = students
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id.clone(), if i % 2 == 0 { "A" } else { "B" }.to_string()))
        .collect();

    let metrics = audit_fairness(&assignments, Some(&groups));
    assert_eq!(metrics.disparity_index, 0.0);
    assert!((metrics.distribution_balance - 1.0).abs() < 1e-12);
    // Every score sits in one bin
    assert!((metrics.abroca - 0.9).abs() < 1e-12);
    assert_eq!(metrics.recommendations.len(), 1);
    assert!(metrics.recommendations[0].contains("skew"));
}

#[test]
fn roster_analysis_end_to_end() {
    let now = Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap();
    let saju = [
        SajuElements::new(20.0, 4.0, 2.0, 5.0, 8.0),
        SajuElements::new(30.0, 6.0, 8.0, 5.0, 12.0),
    ];
    let roster: Vec<_> = (0..4)
        .map(|i| {
            let mut t = TeacherTeamData::new(format!("T{i}"))
                .with_mbti_type("ENTP")
                .with_role(if i == 0 { "manager" } else { "teacher" })
                .with_subject(["Math", "English", "Science", "Korean"][i])
                .with_student_grade("High 1")
                .with_created_at(now - Duration::days(200 * (i as i64 + 1)));
            if i < 2 {
                t = t.with_saju(saju[i]);
            }
            t
        })
        .collect();

    let analysis = analyze_composition_at("team-x", &roster, now);
    let comp = &analysis.composition;

    assert_eq!(comp.mbti.most_common.len(), 1);
    assert_eq!(analysis.diversity_score.mbti_diversity, 0);

    // Sums {50, 10, 10, 10, 20}: mean 20, deficient below 14
    assert_eq!(
        comp.elements.deficient,
        vec![Element::Fire, Element::Earth, Element::Metal]
    );
    assert_eq!(comp.elements.teachers_with_data, 2);

    assert_eq!(comp.roles.manager, 1);
    assert_eq!(comp.roles.teacher, 3);
    assert_eq!(comp.expertise.experience_levels.junior, 1);
    assert_eq!(comp.expertise.experience_levels.mid, 3);

    assert!(analysis.recommendations.iter().any(|r| r.id == "element-balance"));
    assert!(analysis.recommendations.iter().any(|r| r.id == "subject-coverage"));
}
