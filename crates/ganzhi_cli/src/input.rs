//! Birth date/time parsing and settings-file loading.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use ganzhi_calendar::{BirthMoment, CalendarError, ChartConfig};
use ganzhi_energy::AnalysisConfig;
use serde::Deserialize;
use thiserror::Error;

/// Errors from command-line input and settings files.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid date {input:?}: {source}")]
    Date {
        input: String,
        source: chrono::ParseError,
    },
    #[error("invalid time {input:?}: {source}")]
    Time {
        input: String,
        source: chrono::ParseError,
    },
    #[error(transparent)]
    Moment(#[from] CalendarError),
}

/// Contents of a `--config` TOML file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub chart: ChartConfig,
    pub analysis: AnalysisConfig,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let text = std::fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, InputError> {
        Ok(toml::from_str(text)?)
    }
}

/// Parse `YYYY-MM-DD` and `HH:MM` into a birth moment.
///
/// Unlike the core, this rejects dates that do not exist on the calendar.
pub fn parse_moment(date: &str, time: &str) -> Result<BirthMoment, InputError> {
    let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|source| {
        InputError::Date {
            input: date.to_string(),
            source,
        }
    })?;
    let t = NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|source| {
        InputError::Time {
            input: time.to_string(),
            source,
        }
    })?;
    Ok(BirthMoment::new(d.year(), d.month(), d.day(), t.hour(), t.minute())?)
}
