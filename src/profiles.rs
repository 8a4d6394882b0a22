//! Static disease and location registries.
use anyhow::{anyhow, Result};
use phf::phf_map;
use serde::Serialize;

/// Epidemiological parameters of one disease variant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DiseaseProfile {
    /// Basic reproduction number, before any containment measure
    pub base_r0: f64,
    /// Fraction of cases that die (infection fatality ratio)
    pub base_mortality: f64,
    /// Multiplier on the weekly case recurrence
    pub spread_speed: f64,
    /// How strongly stringency measures dampen the effective R0, in [0, 1]
    pub stringency_response: f64,
}

/// Demographic and geographic parameters of one location.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LocationProfile {
    pub population: u64,
    pub density: f64,
    // latitude/longitude are carried for the output record, the
    // feature derivation never reads them
    pub latitude: f64,
    pub longitude: f64,
    pub continent: &'static str,
    pub neighbor_count: u32,
    pub continent_connectivity: u32,
}

static DISEASE_PROFILES: phf::Map<&'static str, DiseaseProfile> = phf_map! {
    // COVID-19 variants
    "COVID-19-Alpha" => DiseaseProfile { base_r0: 3.5, base_mortality: 0.025, spread_speed: 1.5, stringency_response: 0.7 },
    "COVID-19-Delta" => DiseaseProfile { base_r0: 5.0, base_mortality: 0.018, spread_speed: 2.0, stringency_response: 0.6 },
    "COVID-19-Omicron" => DiseaseProfile { base_r0: 8.0, base_mortality: 0.005, spread_speed: 3.0, stringency_response: 0.4 },
    "COVID-19-Mild" => DiseaseProfile { base_r0: 1.8, base_mortality: 0.008, spread_speed: 0.8, stringency_response: 0.9 },
    "COVID-19-Severe" => DiseaseProfile { base_r0: 2.2, base_mortality: 0.045, spread_speed: 1.0, stringency_response: 0.85 },
    // MonkeyPox variants
    "MonkeyPox-Classic" => DiseaseProfile { base_r0: 1.8, base_mortality: 0.001, spread_speed: 0.8, stringency_response: 0.4 },
    "MonkeyPox-Virulent" => DiseaseProfile { base_r0: 2.5, base_mortality: 0.015, spread_speed: 1.2, stringency_response: 0.6 },
    "MonkeyPox-Resistant" => DiseaseProfile { base_r0: 3.2, base_mortality: 0.008, spread_speed: 1.5, stringency_response: 0.3 },
    "MonkeyPox-Benign" => DiseaseProfile { base_r0: 1.2, base_mortality: 0.0003, spread_speed: 0.5, stringency_response: 0.7 },
    "MonkeyPox-Mutant" => DiseaseProfile { base_r0: 4.0, base_mortality: 0.002, spread_speed: 2.2, stringency_response: 0.5 },
    // Influenza variants
    "Influenza-H1N1" => DiseaseProfile { base_r0: 1.5, base_mortality: 0.001, spread_speed: 1.5, stringency_response: 0.3 },
    "Influenza-H5N1" => DiseaseProfile { base_r0: 1.2, base_mortality: 0.06, spread_speed: 0.7, stringency_response: 0.8 },
    "Influenza-Pandemic" => DiseaseProfile { base_r0: 3.0, base_mortality: 0.025, spread_speed: 2.5, stringency_response: 0.6 },
    "Influenza-Seasonal" => DiseaseProfile { base_r0: 1.3, base_mortality: 0.0005, spread_speed: 1.8, stringency_response: 0.2 },
    "Influenza-SuperFlu" => DiseaseProfile { base_r0: 4.5, base_mortality: 0.035, spread_speed: 3.2, stringency_response: 0.7 },
};

static LOCATION_PROFILES: phf::Map<&'static str, LocationProfile> = phf_map! {
    "France" => LocationProfile {
        population: 67_000_000, density: 119.0,
        latitude: 46.2276, longitude: 2.2137,
        continent: "Europe", neighbor_count: 8, continent_connectivity: 44,
    },
    "China" => LocationProfile {
        population: 1_400_000_000, density: 153.0,
        latitude: 35.8617, longitude: 104.1954,
        continent: "Asia", neighbor_count: 14, continent_connectivity: 48,
    },
    "USA" => LocationProfile {
        population: 330_000_000, density: 36.0,
        latitude: 37.0902, longitude: -95.7129,
        continent: "North America", neighbor_count: 2, continent_connectivity: 23,
    },
    "Brazil" => LocationProfile {
        population: 212_000_000, density: 25.0,
        latitude: -14.2350, longitude: -51.9253,
        continent: "South America", neighbor_count: 10, continent_connectivity: 13,
    },
};

// phf maps iterate in arbitrary order, so the registry order used by the
// dataset assembler is pinned by these slices.
pub static DISEASE_NAMES: &[&str] = &[
    "COVID-19-Alpha",
    "COVID-19-Delta",
    "COVID-19-Omicron",
    "COVID-19-Mild",
    "COVID-19-Severe",
    "MonkeyPox-Classic",
    "MonkeyPox-Virulent",
    "MonkeyPox-Resistant",
    "MonkeyPox-Benign",
    "MonkeyPox-Mutant",
    "Influenza-H1N1",
    "Influenza-H5N1",
    "Influenza-Pandemic",
    "Influenza-Seasonal",
    "Influenza-SuperFlu",
];

pub static LOCATION_NAMES: &[&str] = &["France", "China", "USA", "Brazil"];

pub fn disease_profile(name: &str) -> Result<&'static DiseaseProfile> {
    DISEASE_PROFILES
        .get(name)
        .ok_or(anyhow!("Unknown disease profile: {}", name))
}

pub fn location_profile(name: &str) -> Result<&'static LocationProfile> {
    LOCATION_PROFILES
        .get(name)
        .ok_or(anyhow!("Unknown location profile: {}", name))
}
