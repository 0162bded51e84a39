//! Four-pillar chart for one birth moment.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{CalendarError, ChartWarning};
use crate::pillar::{
    HourPillar, MonthStemRule, Pillar, PillarPosition, day_pillar, hour_pillar, month_pillar,
    year_pillar,
};
use crate::stem::Stem;

/// Supported birth years; keeps the JDN arithmetic well inside `i64`.
pub const BIRTH_YEAR_RANGE: RangeInclusive<i32> = -4000..=9999;

/// A Gregorian birth date and clock time.
///
/// Components are range-checked against their tables only; day-of-month
/// is not checked against month length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl BirthMoment {
    /// Create a birth moment, rejecting out-of-table components.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, CalendarError> {
        if !BIRTH_YEAR_RANGE.contains(&year) {
            return Err(CalendarError::invalid(format!(
                "year {year} outside {}..={}",
                BIRTH_YEAR_RANGE.start(),
                BIRTH_YEAR_RANGE.end()
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::invalid(format!("month {month} outside 1..=12")));
        }
        if !(1..=31).contains(&day) {
            return Err(CalendarError::invalid(format!("day {day} outside 1..=31")));
        }
        if hour > 23 {
            return Err(CalendarError::invalid(format!("hour {hour} outside 0..=23")));
        }
        if minute > 59 {
            return Err(CalendarError::invalid(format!("minute {minute} outside 0..=59")));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }
}

impl std::fmt::Display for BirthMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Configurable parameters for chart calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Month-stem rule. Default: [`MonthStemRule::BranchOffset`].
    pub month_rule: MonthStemRule,
}

/// The four pillars of one birth moment. Immutable once built.
///
/// Serializable for reports but never deserialized: a chart only comes from
/// [`compute_chart_with`] or [`Chart::from_pillars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chart {
    moment: BirthMoment,
    year: Pillar,
    month: Pillar,
    day: Pillar,
    hour: Pillar,
    hour_stem_degraded: bool,
}

impl Chart {
    /// Assemble a chart from already-derived pillars.
    pub fn from_pillars(
        moment: BirthMoment,
        year: Pillar,
        month: Pillar,
        day: Pillar,
        hour: HourPillar,
    ) -> Self {
        Self {
            moment,
            year,
            month,
            day,
            hour: hour.pillar,
            hour_stem_degraded: hour.degraded,
        }
    }

    pub fn moment(&self) -> BirthMoment {
        self.moment
    }

    pub fn year(&self) -> Pillar {
        self.year
    }

    pub fn month(&self) -> Pillar {
        self.month
    }

    pub fn day(&self) -> Pillar {
        self.day
    }

    pub fn hour(&self) -> Pillar {
        self.hour
    }

    /// Pillar at a position.
    pub fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// All four pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [(PillarPosition, Pillar); 4] {
        [
            (PillarPosition::Year, self.year),
            (PillarPosition::Month, self.month),
            (PillarPosition::Day, self.day),
            (PillarPosition::Hour, self.hour),
        ]
    }

    /// The day stem ("day master").
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// Element of the day master.
    pub fn day_element(&self) -> Element {
        self.day.stem.element()
    }

    /// Whether the hour stem was derived without day-stem context.
    pub fn hour_stem_degraded(&self) -> bool {
        self.hour_stem_degraded
    }

    /// Non-fatal conditions attached to this chart.
    pub fn warnings(&self) -> Vec<ChartWarning> {
        if self.hour_stem_degraded {
            vec![ChartWarning::DegradedHourStem]
        } else {
            Vec::new()
        }
    }
}

impl std::fmt::Display for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Compute a chart with the default configuration.
pub fn compute_chart(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Result<Chart, CalendarError> {
    let moment = BirthMoment::new(year, month, day, hour, minute)?;
    Ok(compute_chart_with(moment, &ChartConfig::default()))
}

/// Compute a chart for a validated birth moment.
pub fn compute_chart_with(moment: BirthMoment, config: &ChartConfig) -> Chart {
    let BirthMoment {
        year,
        month,
        day,
        hour,
        ..
    } = moment;
    let yp = year_pillar(year, month, day);
    let mp = month_pillar(year, month, config.month_rule);
    let dp = day_pillar(year, month, day);
    let hp = hour_pillar(hour, Some(dp.stem));
    tracing::debug!(
        %moment,
        year = %yp,
        month = %mp,
        day = %dp,
        hour = %hp.pillar,
        "chart computed"
    );
    Chart::from_pillars(moment, yp, mp, dp, hp)
}
