//! Intraday energy curve for display.
//!
//! The curve is a fixed shape, independent of the chart and of real
//! astronomy. It is deterministic for identical parameters.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::percent::round1;

/// Number of hourly samples.
pub const HOURS_PER_DAY: usize = 24;

/// Curve shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineShape {
    /// `base + peak * exp(-(h - center)² / (2 width²))`.
    #[default]
    Gaussian,
    /// `base + peak * (1 + cos(2π (h - center) / 24)) / 2`; `width` is unused.
    Cosine,
}

/// Rounding applied to each sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelinePrecision {
    #[default]
    Integer,
    OneDecimal,
}

/// Configurable parameters for the display curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Curve shape. Default: Gaussian.
    pub shape: TimelineShape,
    /// Hour of the peak. Default: 12.0.
    pub center_hour: f64,
    /// Floor value. Default: 10.0.
    pub base: f64,
    /// Height above the floor at the center. Default: 75.0.
    pub peak: f64,
    /// Gaussian standard deviation in hours. Default: 4.0.
    pub width: f64,
    /// Sample rounding. Default: integer.
    pub precision: TimelinePrecision,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            shape: TimelineShape::Gaussian,
            center_hour: 12.0,
            base: 10.0,
            peak: 75.0,
            width: 4.0,
            precision: TimelinePrecision::Integer,
        }
    }
}

impl TimelineConfig {
    /// Reject non-finite parameters and a non-positive Gaussian width.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let fields = [
            ("center_hour", self.center_hour),
            ("base", self.base),
            ("peak", self.peak),
            ("width", self.width),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AnalysisError::InvalidConfig(format!("timeline.{name} is not finite")));
        }
        if self.shape == TimelineShape::Gaussian && self.width <= 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "timeline.width must be positive, got {}",
                self.width
            )));
        }
        Ok(())
    }
}

/// 24 intensities, index = hour of day, each within [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timeline(pub [f64; HOURS_PER_DAY]);

impl Timeline {
    pub fn values(&self) -> &[f64; HOURS_PER_DAY] {
        &self.0
    }

    /// Hour with the highest intensity (earliest on ties).
    pub fn peak_hour(&self) -> usize {
        let mut best = 0;
        for (h, v) in self.0.iter().enumerate() {
            if *v > self.0[best] {
                best = h;
            }
        }
        best
    }
}

/// Sample the display curve at each whole hour.
///
/// The config is validated first, so every sample is finite and within
/// [0, 100].
pub fn synthesize_timeline(config: &TimelineConfig) -> Result<Timeline, AnalysisError> {
    config.validate()?;
    let mut values = [0.0; HOURS_PER_DAY];
    for (h, slot) in values.iter_mut().enumerate() {
        let dh = h as f64 - config.center_hour;
        let shape = match config.shape {
            TimelineShape::Gaussian => {
                // z stays 0 at the center even when width² underflows
                let z = dh / config.width;
                (-0.5 * z * z).exp()
            }
            TimelineShape::Cosine => 0.5 * (1.0 + (2.0 * PI * dh / HOURS_PER_DAY as f64).cos()),
        };
        let v = (config.base + config.peak * shape).clamp(0.0, 100.0);
        *slot = match config.precision {
            TimelinePrecision::Integer => v.round(),
            TimelinePrecision::OneDecimal => round1(v),
        };
    }
    Ok(Timeline(values))
}
