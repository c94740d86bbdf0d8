//! Cost model: estimated minutes and default prescription per tier and level

use crate::exercises::{ExperienceLevel, Tier};

/// Seconds between exercises
const TRANSITION_SECS: u32 = 30;

/// Working seconds for one set
pub fn time_per_set(tier: Tier) -> u32 {
    match tier {
        Tier::PrimaryCompound => 55,
        Tier::SecondaryCompound => 45,
        Tier::HeavyIsolation => 40,
        Tier::LightIsolation => 35,
        Tier::Hiit => 45,
        Tier::SteadyState => 600,
        Tier::DynamicCore => 40,
        Tier::IsometricCore => 45,
    }
}

/// Rest between sets, indexed beginner / moderate / advanced
pub fn rest_seconds(tier: Tier, level: ExperienceLevel) -> u32 {
    let table: [u32; 3] = match tier {
        Tier::PrimaryCompound => [180, 150, 120],
        Tier::SecondaryCompound => [150, 120, 90],
        Tier::HeavyIsolation => [90, 75, 60],
        Tier::LightIsolation => [75, 60, 45],
        Tier::Hiit => [60, 45, 30],
        Tier::SteadyState => [60, 60, 60],
        Tier::DynamicCore | Tier::IsometricCore => [60, 45, 30],
    };
    table[level.index()]
}

/// Estimated minutes for `sets` sets of a tier, including one transition
pub fn estimate_minutes(tier: Tier, level: ExperienceLevel, sets: u32) -> f32 {
    let work = sets * time_per_set(tier);
    let rest = sets.saturating_sub(1) * rest_seconds(tier, level);
    (work + rest + TRANSITION_SECS) as f32 / 60.0
}

/// Default sets for a tier before any constraint clamping
pub fn default_sets(tier: Tier, level: ExperienceLevel) -> u32 {
    let table: [u32; 3] = match tier {
        Tier::PrimaryCompound | Tier::SecondaryCompound => [3, 3, 4],
        Tier::HeavyIsolation => [3, 3, 3],
        Tier::LightIsolation => [2, 3, 3],
        Tier::Hiit => [3, 4, 5],
        Tier::SteadyState => [1, 1, 1],
        Tier::DynamicCore | Tier::IsometricCore => [2, 3, 3],
    };
    table[level.index()]
}

pub fn default_reps(tier: Tier, level: ExperienceLevel) -> &'static str {
    let table: [&'static str; 3] = match tier {
        Tier::PrimaryCompound => ["8-10", "6-8", "4-6"],
        Tier::SecondaryCompound => ["10-12", "8-10", "6-8"],
        Tier::HeavyIsolation => ["10-12", "10-12", "8-10"],
        Tier::LightIsolation => ["12-15", "12-15", "10-12"],
        Tier::Hiit => ["30s", "40s", "45s"],
        Tier::SteadyState => ["10-12min", "10-12min", "10-12min"],
        Tier::DynamicCore => ["12-15", "15-20", "20-25"],
        Tier::IsometricCore => ["20-30s", "30-45s", "45-60s"],
    };
    table[level.index()]
}
