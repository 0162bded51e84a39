//! Sexagenary (stem/branch) calendar encoding and four-pillar charts.
//!
//! This crate provides:
//! - The 10 stems, 12 branches and five elements as fixed tables
//! - Hidden stems per branch, with delegate overrides
//! - Year, month, day and hour pillar calculation from a Gregorian date
//! - Resolution of charts pre-computed by an external calendar service
//!
//! Everything is a pure function of its inputs; no global state is read.

pub mod branch;
pub mod chart;
pub mod delegate;
pub mod element;
pub mod error;
pub mod hidden;
pub mod julian;
pub mod pillar;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use chart::{
    BIRTH_YEAR_RANGE, BirthMoment, Chart, ChartConfig, compute_chart, compute_chart_with,
};
pub use delegate::{
    ChartSource, DelegatePayload, DelegatePillar, ResolvedChart, chart_from_delegate,
    parse_delegate_json, resolve_chart,
};
pub use element::{ALL_ELEMENTS, Element};
pub use error::{CalendarError, ChartWarning};
pub use hidden::HiddenStemTable;
pub use julian::{DAY_CYCLE_EPOCH_JDN, julian_day_number};
pub use pillar::{
    ALL_POSITIONS, HourPillar, MonthStemRule, Pillar, PillarPosition, adjusted_year,
    day_cycle_index, day_pillar, hour_block, hour_pillar, hour_pillar_for_block, month_pillar,
    year_pillar, year_stem_index,
};
pub use stem::{ALL_STEMS, Stem};
