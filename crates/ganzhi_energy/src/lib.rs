//! Five-element energy analysis of a four-pillar chart.
//!
//! This crate provides:
//! - Element weighting of stems, branches and hidden stems (uniform or positional)
//! - Percentage normalisation and the dominant element
//! - Useful/Supporting/Critical/Threat role classification
//! - A deterministic 24-hour display curve
//!
//! Policies are chosen through [`AnalysisConfig`] rather than separate
//! pipelines.

pub mod analysis;
pub mod error;
pub mod percent;
pub mod roles;
pub mod tally;
pub mod timeline;
pub mod weight;

pub use analysis::{Analysis, AnalysisConfig, analyze, analyze_moment, analyze_with_hidden_stems};
pub use error::AnalysisError;
pub use percent::{compute_percentages, dominant_element};
pub use roles::{
    DayStatus, RoleAssignment, RolePolicy, STRONG_DAY_THRESHOLD, classify_roles, day_status,
};
pub use tally::{ElementCounts, ElementMap, ElementPercentages};
pub use timeline::{
    HOURS_PER_DAY, Timeline, TimelineConfig, TimelinePrecision, TimelineShape,
    synthesize_timeline,
};
pub use weight::{
    STEM_WEIGHT, UNIFORM_BRANCH_WEIGHT, UNIFORM_HIDDEN_WEIGHT, WeightPolicy, count_elements,
};
