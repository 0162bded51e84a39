//! Error types for chart calculation.

use thiserror::Error;

/// Errors from stem/branch lookup, pillar calculation, or delegate payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Date/time component outside its table range, or a symbol that is
    /// not one of the 10 stems / 12 branches.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Pre-computed chart from an external delegate is missing a required field.
    #[error("delegate chart incomplete: {0}")]
    DelegateIncomplete(&'static str),
}

impl CalendarError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Non-fatal conditions surfaced alongside a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ChartWarning {
    /// Hour stem was derived without day-stem context.
    DegradedHourStem,
}

impl std::fmt::Display for ChartWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegradedHourStem => write!(f, "hour stem computed without day stem"),
        }
    }
}
