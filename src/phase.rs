//! Week-index based epidemic phase classification, shared by the curve
//! simulator and the feature deriver so the two can never drift apart.
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    PreEpidemic,
    Growth,
    Peak,
    Decline,
    Controlled,
    // Reserved slot in the one-hot block, never produced by for_week
    Resurgence,
}

impl Phase {
    /// Phase of a 0-based week index. Thresholds are fixed: the first four
    /// weeks are pre-epidemic, then four weeks each of growth, peak and
    /// decline, everything from week 16 on is controlled.
    pub fn for_week(week: usize) -> Phase {
        match week {
            0..=3 => Phase::PreEpidemic,
            4..=7 => Phase::Growth,
            8..=11 => Phase::Peak,
            12..=15 => Phase::Decline,
            _ => Phase::Controlled,
        }
    }

    /// Multiplier applied to the weekly case recurrence.
    pub fn growth_factor(&self) -> f64 {
        match self {
            Phase::PreEpidemic => 1.2,
            Phase::Growth => 1.5,
            Phase::Peak => 1.0,
            Phase::Decline => 0.7,
            Phase::Controlled => 0.5,
            Phase::Resurgence => 1.0,
        }
    }

    /// Numeric code used in the output records (one-hot position).
    pub fn index(&self) -> u32 {
        match self {
            Phase::PreEpidemic => 0,
            Phase::Growth => 1,
            Phase::Peak => 2,
            Phase::Decline => 3,
            Phase::Controlled => 4,
            Phase::Resurgence => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::PreEpidemic => "pre_epidemic",
            Phase::Growth => "growth",
            Phase::Peak => "peak",
            Phase::Decline => "decline",
            Phase::Controlled => "controlled",
            Phase::Resurgence => "resurgence",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_thresholds() {
        assert_eq!(Phase::for_week(0), Phase::PreEpidemic);
        assert_eq!(Phase::for_week(3), Phase::PreEpidemic);
        assert_eq!(Phase::for_week(4), Phase::Growth);
        assert_eq!(Phase::for_week(7), Phase::Growth);
        assert_eq!(Phase::for_week(8), Phase::Peak);
        assert_eq!(Phase::for_week(11), Phase::Peak);
        assert_eq!(Phase::for_week(12), Phase::Decline);
        assert_eq!(Phase::for_week(15), Phase::Decline);
        assert_eq!(Phase::for_week(16), Phase::Controlled);
        assert_eq!(Phase::for_week(1000), Phase::Controlled);
    }

    #[test]
    fn growth_factors() {
        assert_eq!(Phase::for_week(0).growth_factor(), 1.2);
        assert_eq!(Phase::for_week(5).growth_factor(), 1.5);
        assert_eq!(Phase::for_week(9).growth_factor(), 1.0);
        assert_eq!(Phase::for_week(13).growth_factor(), 0.7);
        assert_eq!(Phase::for_week(20).growth_factor(), 0.5);
    }
}
