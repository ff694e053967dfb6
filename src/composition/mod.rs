//! Teacher team composition and diversity analysis.
//!
//! Summarizes a roster along five dimensions (personality type, learning
//! style, five-element balance, subject/grade coverage, organizational role),
//! scores its diversity and derives recommendations.
//!
//! # Usage
//!
//! ```
//! use u_match::composition::analyze_composition;
//! use u_match::models::TeacherTeamData;
//!
//! let roster = vec![
//!     TeacherTeamData::new("T1").with_mbti_type("ENFP").with_subject("Math"),
//!     TeacherTeamData::new("T2").with_mbti_type("ISTJ").with_subject("English"),
//! ];
//! let analysis = analyze_composition("team-a", &roster);
//! assert_eq!(analysis.composition.teacher_count, 2);
//! assert_eq!(analysis.diversity_score.mbti_diversity, 100);
//! ```
//!
//! # Diversity
//!
//! Each component is a Shannon evenness index scaled to 0-100; the overall
//! score is their unweighted mean. Partial data never fails an analysis.
//!
//! # References
//!
//! - Shannon (1948), "A Mathematical Theory of Communication"
//! - Pielou (1966), "The measurement of diversity in different types of
//!   biological collections"

mod analyzer;
mod diversity;
mod elements;
mod expertise;
mod learning_style;
mod mbti;
mod recommendations;
mod roles;

pub use analyzer::{
    analyze_composition, analyze_composition_at, CompositionAnalysis, TeamComposition,
};
pub use diversity::{shannon_diversity, DiversityScore};
pub use elements::SajuElementsDistribution;
pub use expertise::{tenure_years, ExperienceLevels, ExpertiseCoverage};
pub use learning_style::LearningStyleDistribution;
pub use mbti::{normalize_type, AxisCounts, MbtiDistribution, TypeCount};
pub use recommendations::{
    generate_recommendations, Priority, Recommendation, RecommendationCategory,
};
pub use roles::RoleDistribution;
