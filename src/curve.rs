//! Phase-driven weekly outbreak simulation.
//!
//! One call produces four index-aligned weekly series (cases, deaths,
//! effective R0, stringency index) for a single (disease, location) scenario.
use crate::phase::Phase;
use crate::profiles::{disease_profile, DiseaseProfile};
use anyhow::Result;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Number of weeks between an infection being counted and the matching
/// deaths being reported.
pub const DEATH_REPORTING_LAG: usize = 2;

/// Cases seeded into the cumulative count before week 0.
const INITIAL_CASES: f64 = 100.0;

/// Four parallel weekly series, index-aligned by week.
#[derive(Clone, Debug, PartialEq)]
pub struct EpidemicSeries {
    pub cases: Vec<u64>,
    pub deaths: Vec<u64>,
    pub r0: Vec<f64>,
    pub stringency: Vec<f64>,
}

impl EpidemicSeries {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Simulate `num_weeks` weeks of an outbreak for a disease profile.
///
/// The per-week update order matters and is part of the contract:
/// cases are computed from the previous week's effective R0, deaths from the
/// lagged case count, and only then are stringency and R0 updated, so the
/// recorded R0/stringency already reflect the current week's measures.
pub fn simulate<R: Rng>(
    profile: &DiseaseProfile,
    num_weeks: usize,
    rng: &mut R,
) -> EpidemicSeries {
    let mut cases = Vec::with_capacity(num_weeks);
    let mut deaths = Vec::with_capacity(num_weeks);
    let mut r0_values = Vec::with_capacity(num_weeks);
    let mut stringency_values = Vec::with_capacity(num_weeks);

    let mut cumulative_cases = INITIAL_CASES;
    let mut current_r0 = profile.base_r0;
    let mut current_stringency = 0.0f64;

    // Reporting noise on death counts
    let jitter = Uniform::new(0.8, 1.2);

    for week in 0..num_weeks {
        let phase = Phase::for_week(week);
        let growth_factor = phase.growth_factor();

        // Weekly cases follow the cumulative count, floored at 10 so the
        // curve never dies out completely. The accumulator stays in f64:
        // high-R0 profiles outgrow any fixed-width integer within the
        // default horizon. The recorded count saturates at u64::MAX.
        let weekly_cases =
            ((cumulative_cases * current_r0 * growth_factor * profile.spread_speed) as u64).max(10);
        cumulative_cases += weekly_cases as f64;

        // Deaths trail cases by the reporting lag; the jitter draw only
        // happens once deaths can be non-zero, which keeps the RNG stream
        // aligned across runs.
        let weekly_deaths = if week > DEATH_REPORTING_LAG {
            let lagged_cases = cases[week - DEATH_REPORTING_LAG];
            (lagged_cases as f64 * profile.base_mortality * jitter.sample(rng)) as u64
        } else {
            0
        };

        // Containment reacts to the phase, then dampens the effective R0.
        if phase == Phase::Growth && current_stringency < 70.0 {
            current_stringency += 10.0;
        } else if phase == Phase::Decline {
            current_stringency = (current_stringency - 5.0).max(30.0);
        }

        let stringency_effect = 1.0 - (current_stringency / 100.0 * profile.stringency_response);
        current_r0 = (profile.base_r0 * stringency_effect).clamp(0.5, 10.0);

        cases.push(weekly_cases);
        deaths.push(weekly_deaths);
        r0_values.push(current_r0);
        stringency_values.push(current_stringency);
    }

    EpidemicSeries {
        cases,
        deaths,
        r0: r0_values,
        stringency: stringency_values,
    }
}

/// Same as [`simulate`], resolving the disease by registry name.
pub fn simulate_named<R: Rng>(
    disease: &str,
    num_weeks: usize,
    rng: &mut R,
) -> Result<EpidemicSeries> {
    let profile = disease_profile(disease)?;
    Ok(simulate(profile, num_weeks, rng))
}
