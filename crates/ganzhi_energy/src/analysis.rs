//! The analysis pipeline: chart → counts → percentages → roles, plus the
//! display timeline.

use ganzhi_calendar::{
    BirthMoment, Chart, ChartConfig, ChartSource, ChartWarning, DelegatePayload, Element,
    HiddenStemTable, resolve_chart,
};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::percent::{compute_percentages, dominant_element};
use crate::roles::{DayStatus, RoleAssignment, RolePolicy, classify_roles, day_status};
use crate::tally::{ElementCounts, ElementPercentages};
use crate::timeline::{Timeline, TimelineConfig, synthesize_timeline};
use crate::weight::{WeightPolicy, count_elements};

/// Configurable policies for [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Branch weighting. Default: positional.
    pub weight_policy: WeightPolicy,
    /// Role classification. Default: day-master aware.
    pub role_policy: RolePolicy,
    /// Display curve parameters.
    pub timeline: TimelineConfig,
}

/// Structured analysis result handed to the report layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub chart: Chart,
    pub counts: ElementCounts,
    pub percentages: ElementPercentages,
    pub day_element: Element,
    pub day_status: DayStatus,
    /// `None` only when every percentage is zero.
    pub dominant: Option<Element>,
    pub roles: RoleAssignment,
    pub timeline: Timeline,
    /// Hour stem was derived without the day stem.
    pub hour_stem_degraded: bool,
    pub warnings: Vec<ChartWarning>,
}

/// Analyse a chart using the built-in hidden stems.
pub fn analyze(chart: &Chart, config: &AnalysisConfig) -> Result<Analysis, AnalysisError> {
    analyze_with_hidden_stems(chart, &HiddenStemTable::builtin(), config)
}

/// Analyse a chart with a caller-supplied hidden-stem table.
pub fn analyze_with_hidden_stems(
    chart: &Chart,
    hidden: &HiddenStemTable,
    config: &AnalysisConfig,
) -> Result<Analysis, AnalysisError> {
    let timeline = synthesize_timeline(&config.timeline)?;
    let counts = count_elements(chart, hidden, config.weight_policy);
    let percentages = compute_percentages(&counts);
    let day_element = chart.day_element();
    let status = day_status(&percentages, day_element);
    let roles = classify_roles(&percentages, Some(day_element), config.role_policy);
    let warnings = chart.warnings();
    for w in &warnings {
        tracing::warn!(warning = %w, chart = %chart, "analysis carries a warning");
    }
    tracing::debug!(
        chart = %chart,
        day_element = %day_element,
        day_status = status.name(),
        useful = %roles.useful,
        "analysis complete"
    );

    Ok(Analysis {
        chart: *chart,
        counts,
        percentages,
        day_element,
        day_status: status,
        dominant: dominant_element(&percentages),
        roles,
        timeline,
        hour_stem_degraded: chart.hour_stem_degraded(),
        warnings,
    })
}

/// Resolve a chart (delegate first, local fallback) and analyse it.
///
/// Returns the chart source alongside the analysis so callers can tell
/// which calculator produced the pillars.
pub fn analyze_moment(
    moment: BirthMoment,
    delegate: Option<&DelegatePayload>,
    chart_config: &ChartConfig,
    config: &AnalysisConfig,
) -> Result<(ChartSource, Analysis), AnalysisError> {
    let resolved = resolve_chart(moment, delegate, chart_config)?;
    let analysis = analyze_with_hidden_stems(&resolved.chart, &resolved.hidden_stems, config)?;
    Ok((resolved.source, analysis))
}
