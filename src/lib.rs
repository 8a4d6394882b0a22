#![warn(clippy::large_types_passed_by_value)]

pub mod curve;
pub mod dataset;
pub mod features;
pub mod phase;
pub mod profiles;

pub use crate::curve::{simulate, simulate_named, EpidemicSeries, DEATH_REPORTING_LAG};
pub use crate::dataset::{generate_scenario, Generator, ScenarioRecord, DEFAULT_NUM_WEEKS};
pub use crate::features::{
    derive_features, prepare_sequence, prepare_sequence_from_maps, vector_from_map, FeatureRecord,
    FEATURE_ORDER, NUM_FEATURES, SEQUENCE_LENGTH,
};
pub use crate::phase::Phase;
pub use crate::profiles::{
    disease_profile, location_profile, DiseaseProfile, LocationProfile, DISEASE_NAMES,
    LOCATION_NAMES,
};
