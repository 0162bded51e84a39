//! Error types for energy analysis.

use ganzhi_calendar::CalendarError;
use thiserror::Error;

/// Errors from chart resolution or analysis configuration.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    /// Error from chart calculation or delegate resolution.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
    /// Configuration value outside its valid range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
