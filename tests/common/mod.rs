use epicurve::{simulate_named, EpidemicSeries};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[cfg(test)]
#[allow(dead_code)]
pub fn seeded_series(disease: &str, num_weeks: usize, seed: u64) -> EpidemicSeries {
    let mut rng = SmallRng::seed_from_u64(seed);
    simulate_named(disease, num_weeks, &mut rng).unwrap()
}

#[cfg(test)]
#[allow(dead_code)]
pub fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}
