//! Per-week feature derivation and the fixed 29-feature model contract.
//!
//! The downstream sequence model consumes windows of 12 weekly vectors with
//! exactly 29 values each, assembled in [`FEATURE_ORDER`]. The field names of
//! [`FeatureRecord`] are a verbatim mirror of that schema, so the serialized
//! dataset can be fed back without renaming.
use crate::curve::EpidemicSeries;
use crate::phase::Phase;
use crate::profiles::LocationProfile;
use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, NaiveDate};
use log::warn;
use serde::Serialize;
use serde_json::{Map, Value};
use std::f64::consts::PI;

/// Number of weekly records the downstream model expects per window.
pub const SEQUENCE_LENGTH: usize = 12;

/// Number of model features per weekly record.
pub const NUM_FEATURES: usize = 29;

/// Fallback weight for weeks without real-world observations backing them.
const REGRESSION_WEIGHT: f64 = 0.8;

/// Canonical feature names, in the exact order the model expects them.
pub const FEATURE_ORDER: [&str; NUM_FEATURES] = [
    "log_weekly_cases",
    "log_weekly_deaths",
    "avg_cases_per_million",
    "avg_deaths_per_million",
    "avg_reproduction_rate",
    "avg_mortality_rate",
    "cases_growth_rate",
    "deaths_growth_rate",
    "avg_stringency_index",
    "weeks_since_start",
    "week_sin",
    "week_cos",
    "month_sin",
    "month_cos",
    "phase_pre_epidemic",
    "phase_growth",
    "phase_peak",
    "phase_decline",
    "phase_controlled",
    "phase_resurgence",
    "population_density",
    "neighbor_count_1000km",
    "continent_connectivity",
    "regression_weight_adjusted",
    "avg_reproduction_rate_was_missing",
    "deaths_growth_rate_was_missing",
    "avg_stringency_index_was_missing",
    "cases_growth_rate_was_missing",
    "avg_mortality_rate_was_missing",
];

/// One week of derived features. The 29 model fields plus a few descriptive
/// extras (`week`, phase labels, raw target echoes) kept for dataset
/// inspection, not consumed by the model.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureRecord {
    // Temporal
    pub week: u32,
    pub weeks_since_start: f64,
    pub week_sin: f64,
    pub week_cos: f64,
    pub month_sin: f64,
    pub month_cos: f64,

    // Epidemiological
    pub log_weekly_cases: f64,
    pub log_weekly_deaths: f64,
    pub avg_cases_per_million: f64,
    pub avg_deaths_per_million: f64,
    pub avg_reproduction_rate: f64,
    pub avg_mortality_rate: f64,
    pub cases_growth_rate: f64,
    pub deaths_growth_rate: f64,

    // Containment
    pub avg_stringency_index: f64,

    // Geographic
    pub population_density: f64,
    pub neighbor_count_1000km: f64,
    pub continent_connectivity: f64,

    // Data-quality flags. This generator never synthesizes missing data, so
    // the flags are always 0; they exist to satisfy the model schema.
    pub regression_weight_adjusted: f64,
    pub avg_reproduction_rate_was_missing: f64,
    pub deaths_growth_rate_was_missing: f64,
    pub avg_stringency_index_was_missing: f64,
    pub cases_growth_rate_was_missing: f64,
    pub avg_mortality_rate_was_missing: f64,

    // Metadata
    pub epidemic_phase: &'static str,
    pub epidemic_phase_numeric: u32,

    // Raw target echoes, for reference
    pub transmission_rate: f64,
    pub countries_affected_continent: u32,

    // Phase one-hot block
    pub phase_pre_epidemic: f64,
    pub phase_growth: f64,
    pub phase_peak: f64,
    pub phase_decline: f64,
    pub phase_controlled: f64,
    pub phase_resurgence: f64,
}

/// First simulated week. All calendar features are offsets from this date.
pub fn pandemic_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

/// Derive the full feature record for week `week` of a simulated series.
///
/// Every numeric output is finite by construction: the growth-rate
/// denominators carry a +1 and the rates are clamped, so zero-valued weeks
/// never produce NaN or infinities.
///
/// # Panics
/// Panics if `week >= series.len()`.
pub fn derive_features(
    week: usize,
    series: &EpidemicSeries,
    location: &LocationProfile,
) -> FeatureRecord {
    let cases = series.cases[week];
    let deaths = series.deaths[week];

    let log_cases = (cases as f64).ln_1p();
    let log_deaths = (deaths as f64).ln_1p();

    let date = pandemic_start() + Duration::weeks(week as i64);
    let week_of_year = f64::from(date.iso_week().week());
    let month = f64::from(date.month());

    let week_sin = (2.0 * PI * week_of_year / 52.0).sin();
    let week_cos = (2.0 * PI * week_of_year / 52.0).cos();
    let month_sin = (2.0 * PI * month / 12.0).sin();
    let month_cos = (2.0 * PI * month / 12.0).cos();

    let (cases_growth, deaths_growth) = if week > 0 {
        let prev_cases = series.cases[week - 1] as f64;
        let prev_deaths = series.deaths[week - 1] as f64;
        let cg = (cases as f64 - prev_cases) / (prev_cases + 1.0);
        let dg = if prev_deaths > 0.0 {
            (deaths as f64 - prev_deaths) / (prev_deaths + 1.0)
        } else {
            0.0
        };
        (cg, dg)
    } else {
        (0.0, 0.0)
    };

    let population = location.population as f64;
    let cases_per_million = cases as f64 / population * 1_000_000.0;
    let deaths_per_million = deaths as f64 / population * 1_000_000.0;

    let phase = Phase::for_week(week);

    // Expressed as a percentage, capped at 20%
    let mortality_rate = if cases > 0 {
        (deaths as f64 / (cases as f64 + 1.0)).min(0.2) * 100.0
    } else {
        0.0
    };

    FeatureRecord {
        week: week as u32 + 1,
        weeks_since_start: week as f64,
        week_sin,
        week_cos,
        month_sin,
        month_cos,

        log_weekly_cases: log_cases,
        log_weekly_deaths: log_deaths,
        avg_cases_per_million: cases_per_million,
        avg_deaths_per_million: deaths_per_million,
        avg_reproduction_rate: series.r0[week],
        avg_mortality_rate: mortality_rate,
        cases_growth_rate: cases_growth.clamp(-10.0, 10.0),
        deaths_growth_rate: deaths_growth.clamp(-10.0, 10.0),

        avg_stringency_index: series.stringency[week],

        population_density: location.density,
        neighbor_count_1000km: f64::from(location.neighbor_count),
        continent_connectivity: f64::from(location.continent_connectivity),

        regression_weight_adjusted: REGRESSION_WEIGHT,
        avg_reproduction_rate_was_missing: 0.0,
        deaths_growth_rate_was_missing: 0.0,
        avg_stringency_index_was_missing: 0.0,
        cases_growth_rate_was_missing: 0.0,
        avg_mortality_rate_was_missing: 0.0,

        epidemic_phase: phase.label(),
        epidemic_phase_numeric: phase.index(),

        transmission_rate: series.r0[week] / 10.0,
        countries_affected_continent: 30 + week as u32,

        phase_pre_epidemic: if phase == Phase::PreEpidemic { 1.0 } else { 0.0 },
        phase_growth: if phase == Phase::Growth { 1.0 } else { 0.0 },
        phase_peak: if phase == Phase::Peak { 1.0 } else { 0.0 },
        phase_decline: if phase == Phase::Decline { 1.0 } else { 0.0 },
        phase_controlled: if phase == Phase::Controlled { 1.0 } else { 0.0 },
        phase_resurgence: 0.0,
    }
}

impl FeatureRecord {
    /// The 29 model features, in [`FEATURE_ORDER`] order.
    pub fn to_vector(&self) -> [f64; NUM_FEATURES] {
        [
            self.log_weekly_cases,
            self.log_weekly_deaths,
            self.avg_cases_per_million,
            self.avg_deaths_per_million,
            self.avg_reproduction_rate,
            self.avg_mortality_rate,
            self.cases_growth_rate,
            self.deaths_growth_rate,
            self.avg_stringency_index,
            self.weeks_since_start,
            self.week_sin,
            self.week_cos,
            self.month_sin,
            self.month_cos,
            self.phase_pre_epidemic,
            self.phase_growth,
            self.phase_peak,
            self.phase_decline,
            self.phase_controlled,
            self.phase_resurgence,
            self.population_density,
            self.neighbor_count_1000km,
            self.continent_connectivity,
            self.regression_weight_adjusted,
            self.avg_reproduction_rate_was_missing,
            self.deaths_growth_rate_was_missing,
            self.avg_stringency_index_was_missing,
            self.cases_growth_rate_was_missing,
            self.avg_mortality_rate_was_missing,
        ]
    }
}

/// Turn a feature history into the model input window: the last
/// [`SEQUENCE_LENGTH`] records, each as an ordered 29-value vector.
///
/// Fails when the history is too short, reporting actual vs required length.
pub fn prepare_sequence(history: &[FeatureRecord]) -> Result<Vec<[f64; NUM_FEATURES]>> {
    if history.len() < SEQUENCE_LENGTH {
        return Err(anyhow!(
            "Insufficient history: {} weeks, minimum required: {}",
            history.len(),
            SEQUENCE_LENGTH
        ));
    }
    Ok(history[history.len() - SEQUENCE_LENGTH..]
        .iter()
        .map(FeatureRecord::to_vector)
        .collect())
}

/// Assemble one ordered feature vector from an untyped record, as received
/// over the wire. Absent keys are substituted with 0.0 and logged, never
/// treated as fatal.
pub fn vector_from_map(record: &Map<String, Value>) -> [f64; NUM_FEATURES] {
    let mut vector = [0.0; NUM_FEATURES];
    for (ii, key) in FEATURE_ORDER.iter().enumerate() {
        match record.get(*key).and_then(Value::as_f64) {
            Some(value) => vector[ii] = value,
            None => warn!("Missing feature: {}", key),
        }
    }
    vector
}

/// Windowing over untyped records, with the same length validation as
/// [`prepare_sequence`].
pub fn prepare_sequence_from_maps(
    history: &[Map<String, Value>],
) -> Result<Vec<[f64; NUM_FEATURES]>> {
    if history.len() < SEQUENCE_LENGTH {
        return Err(anyhow!(
            "Insufficient history: {} weeks, minimum required: {}",
            history.len(),
            SEQUENCE_LENGTH
        ));
    }
    Ok(history[history.len() - SEQUENCE_LENGTH..]
        .iter()
        .map(vector_from_map)
        .collect())
}
