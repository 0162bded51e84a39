//! Charts pre-computed by an external calendar service.
//!
//! The service is called by the presentation layer; this module only
//! validates its JSON body and decides whether to use it or to fall back
//! to local calculation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::chart::{BirthMoment, Chart, ChartConfig, compute_chart_with};
use crate::error::CalendarError;
use crate::hidden::HiddenStemTable;
use crate::pillar::{HourPillar, Pillar, hour_pillar_for_block};
use crate::stem::Stem;

/// One pillar as the delegate reports it (`sky` = stem, `earth` = branch).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatePillar {
    pub sky: Option<String>,
    pub earth: Option<String>,
}

/// Delegate response body. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatePayload {
    pub year: Option<DelegatePillar>,
    pub month: Option<DelegatePillar>,
    pub day: Option<DelegatePillar>,
    pub hour: Option<DelegatePillar>,
    /// Branch symbol → hidden stem symbols, replacing the built-in entries.
    #[serde(default)]
    pub hidden_stems: BTreeMap<String, Vec<String>>,
}

/// Parse a delegate response body.
///
/// A body that is not a JSON object of the expected shape is reported as
/// [`CalendarError::DelegateIncomplete`].
pub fn parse_delegate_json(body: &str) -> Result<DelegatePayload, CalendarError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::debug!(error = %e, "delegate body rejected");
        CalendarError::DelegateIncomplete("malformed delegate body")
    })
}

/// Where a resolved chart came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartSource {
    Computed,
    Delegate,
}

/// A chart plus the hidden-stem table to aggregate it with.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedChart {
    pub chart: Chart,
    pub source: ChartSource,
    pub hidden_stems: HiddenStemTable,
}

fn required<'a>(field: &'a Option<String>, what: &'static str) -> Result<&'a str, CalendarError> {
    field
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or(CalendarError::DelegateIncomplete(what))
}

fn full_pillar<'a>(
    pillar: &'a Option<DelegatePillar>,
    stem_field: &'static str,
    branch_field: &'static str,
) -> Result<(&'a str, &'a str), CalendarError> {
    let p = pillar.as_ref().ok_or(CalendarError::DelegateIncomplete(stem_field))?;
    Ok((required(&p.sky, stem_field)?, required(&p.earth, branch_field)?))
}

fn parse_pillar((stem, branch): (&str, &str)) -> Result<Pillar, CalendarError> {
    Ok(Pillar::new(Stem::from_symbol(stem)?, Branch::from_symbol(branch)?))
}

/// Convert a delegate payload into a chart.
///
/// Year, month and day need both symbols; the hour needs its branch, and a
/// missing hour stem is derived from the delegate's day stem. Incomplete
/// payloads return [`CalendarError::DelegateIncomplete`]; unknown symbols
/// return [`CalendarError::InvalidInput`].
pub fn chart_from_delegate(
    moment: BirthMoment,
    payload: &DelegatePayload,
) -> Result<(Chart, HiddenStemTable), CalendarError> {
    let year = full_pillar(&payload.year, "year.sky", "year.earth")?;
    let month = full_pillar(&payload.month, "month.sky", "month.earth")?;
    let day = full_pillar(&payload.day, "day.sky", "day.earth")?;
    let hour = payload
        .hour
        .as_ref()
        .ok_or(CalendarError::DelegateIncomplete("hour.earth"))?;
    let hour_branch = required(&hour.earth, "hour.earth")?;
    let hour_stem = hour.sky.as_deref().filter(|s| !s.trim().is_empty());

    let year = parse_pillar(year)?;
    let month = parse_pillar(month)?;
    let day = parse_pillar(day)?;
    let hour_branch = Branch::from_symbol(hour_branch)?;
    let hour = match hour_stem {
        Some(s) => HourPillar {
            pillar: Pillar::new(Stem::from_symbol(s)?, hour_branch),
            block: hour_branch.index(),
            degraded: false,
        },
        None => hour_pillar_for_block(hour_branch.index(), Some(day.stem)),
    };

    let mut hidden = HiddenStemTable::builtin();
    hidden.apply_symbols(
        payload
            .hidden_stems
            .iter()
            .map(|(b, stems)| (b.as_str(), stems.iter().map(String::as_str))),
    )?;

    Ok((Chart::from_pillars(moment, year, month, day, hour), hidden))
}

/// Use the delegate's chart when it is complete, otherwise compute locally.
///
/// Only [`CalendarError::InvalidInput`] is fatal: a delegate naming a symbol
/// outside the stem/branch tables is rejected, never guessed around.
pub fn resolve_chart(
    moment: BirthMoment,
    delegate: Option<&DelegatePayload>,
    config: &ChartConfig,
) -> Result<ResolvedChart, CalendarError> {
    let Some(payload) = delegate else {
        return Ok(local(moment, config));
    };
    match chart_from_delegate(moment, payload) {
        Ok((chart, hidden_stems)) => Ok(ResolvedChart {
            chart,
            source: ChartSource::Delegate,
            hidden_stems,
        }),
        Err(CalendarError::DelegateIncomplete(field)) => {
            tracing::warn!(field, "delegate chart incomplete, falling back to local calculation");
            Ok(local(moment, config))
        }
        Err(e) => Err(e),
    }
}

fn local(moment: BirthMoment, config: &ChartConfig) -> ResolvedChart {
    ResolvedChart {
        chart: compute_chart_with(moment, config),
        source: ChartSource::Computed,
        hidden_stems: HiddenStemTable::builtin(),
    }
}
