//! Exercise catalog - static lookup table keyed by muscle group and level

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Muscle groups a routine can target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,   // finisher flag, not a primary target
    Cardio, // finisher flag, not a primary target
}

impl MuscleGroup {
    pub fn name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Core => "Core",
            MuscleGroup::Cardio => "Cardio",
        }
    }

    /// `core` and `cardio` switch finishers on instead of being trained as main work
    pub fn is_finisher_flag(&self) -> bool {
        matches!(self, MuscleGroup::Core | MuscleGroup::Cardio)
    }

    /// All muscle groups for iteration
    pub fn all() -> &'static [MuscleGroup] {
        &[
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Core,
            MuscleGroup::Cardio,
        ]
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MuscleGroup {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MuscleGroup::all()
            .iter()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ParseError::MuscleGroup(s.to_string()))
    }
}

/// Experience level of the person training
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Moderate,
    Advanced,
}

impl ExperienceLevel {
    pub fn name(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Moderate => "moderate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    /// Column in the per-level lookup tables
    pub(crate) fn index(&self) -> usize {
        match self {
            ExperienceLevel::Beginner => 0,
            ExperienceLevel::Moderate => 1,
            ExperienceLevel::Advanced => 2,
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "moderate" | "intermediate" => Ok(ExperienceLevel::Moderate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            _ => Err(ParseError::Level(s.to_string())),
        }
    }
}

/// Exercise category. Conflates movement complexity with cardio/core classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    PrimaryCompound,
    SecondaryCompound,
    HeavyIsolation,
    LightIsolation,
    Hiit,
    SteadyState,
    DynamicCore,
    IsometricCore,
}

impl Tier {
    /// Lower number = scheduled earlier and scored higher
    pub fn priority(&self) -> u8 {
        match self {
            Tier::PrimaryCompound => 1,
            Tier::SecondaryCompound => 2,
            Tier::HeavyIsolation => 3,
            Tier::LightIsolation => 4,
            Tier::Hiit | Tier::SteadyState | Tier::DynamicCore | Tier::IsometricCore => 5,
        }
    }

    pub fn tag(&self) -> Tag {
        match self {
            Tier::PrimaryCompound | Tier::SecondaryCompound => Tag::Compound,
            Tier::HeavyIsolation | Tier::LightIsolation => Tag::Isolation,
            Tier::Hiit | Tier::SteadyState => Tag::Cardio,
            Tier::DynamicCore | Tier::IsometricCore => Tag::Core,
        }
    }
}

/// Display tag derived from [`Tier`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tag {
    Compound,
    Isolation,
    Cardio,
    Core,
}

impl Tag {
    pub fn label(&self) -> &'static str {
        match self {
            Tag::Compound => "COMPOUND",
            Tag::Isolation => "ISOLATION",
            Tag::Cardio => "CARDIO",
            Tag::Core => "CORE",
        }
    }
}

/// Movement pattern of a single exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExercisePattern {
    Push,
    Pull,
    Neutral,
}

#[derive(Debug, Clone)]
pub struct ExerciseRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub tier: Tier,
    pub primary_muscle: MuscleGroup,
    pub secondary_muscle: Option<MuscleGroup>,
    pub levels: &'static [ExperienceLevel],
    pub is_beginner_safe: bool,
    pub equipment: &'static str,
    pub pattern: ExercisePattern,
    pub is_low_impact: bool, // only meaningful for cardio tiers
}

impl ExerciseRecord {
    pub fn allows(&self, level: ExperienceLevel) -> bool {
        self.levels.contains(&level)
            && (level != ExperienceLevel::Beginner || self.is_beginner_safe)
    }
}

/// Read-only exercise lookup consumed by the generator
pub trait Catalog {
    /// Exercises whose primary muscle is `group`, filtered by allowed level
    /// and, for beginners, by the safety flag.
    fn lookup(&self, group: MuscleGroup, level: ExperienceLevel) -> Vec<&ExerciseRecord>;
}

/// Catalog backed by a `'static` table
#[derive(Debug, Clone, Copy)]
pub struct StaticCatalog {
    records: &'static [ExerciseRecord],
}

impl StaticCatalog {
    pub fn with_records(records: &'static [ExerciseRecord]) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &'static [ExerciseRecord] {
        self.records
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::with_records(EXERCISES)
    }
}

impl Catalog for StaticCatalog {
    fn lookup(&self, group: MuscleGroup, level: ExperienceLevel) -> Vec<&ExerciseRecord> {
        self.records
            .iter()
            .filter(|e| e.primary_muscle == group && e.allows(level))
            .collect()
    }
}

use ExperienceLevel::{Advanced, Beginner, Moderate};

const ALL: &[ExperienceLevel] = &[Beginner, Moderate, Advanced];
const MOD_UP: &[ExperienceLevel] = &[Moderate, Advanced];
const ADV: &[ExperienceLevel] = &[Advanced];

const fn ex(
    id: &'static str,
    name: &'static str,
    tier: Tier,
    primary_muscle: MuscleGroup,
    secondary_muscle: Option<MuscleGroup>,
    levels: &'static [ExperienceLevel],
    is_beginner_safe: bool,
    equipment: &'static str,
    pattern: ExercisePattern,
) -> ExerciseRecord {
    ExerciseRecord {
        id,
        name,
        tier,
        primary_muscle,
        secondary_muscle,
        levels,
        is_beginner_safe,
        equipment,
        pattern,
        is_low_impact: false,
    }
}

const fn cardio(
    id: &'static str,
    name: &'static str,
    tier: Tier,
    levels: &'static [ExperienceLevel],
    is_beginner_safe: bool,
    equipment: &'static str,
    is_low_impact: bool,
) -> ExerciseRecord {
    ExerciseRecord {
        id,
        name,
        tier,
        primary_muscle: MuscleGroup::Cardio,
        secondary_muscle: None,
        levels,
        is_beginner_safe,
        equipment,
        pattern: ExercisePattern::Neutral,
        is_low_impact,
    }
}

use ExercisePattern::{Neutral, Pull, Push};
use MuscleGroup::{Arms, Back, Chest, Core, Legs, Shoulders};
use Tier::{
    DynamicCore, HeavyIsolation, Hiit, IsometricCore, LightIsolation, PrimaryCompound,
    SecondaryCompound, SteadyState,
};

/// Built-in catalog
#[rustfmt::skip]
pub const EXERCISES: &[ExerciseRecord] = &[
    // Chest
    ex("barbell_bench_press", "Barbell Bench Press", PrimaryCompound, Chest, Some(Arms), MOD_UP, false, "barbell", Push),
    ex("dumbbell_bench_press", "Dumbbell Bench Press", PrimaryCompound, Chest, Some(Arms), ALL, true, "dumbbell", Push),
    ex("incline_dumbbell_press", "Incline Dumbbell Press", SecondaryCompound, Chest, Some(Shoulders), ALL, true, "dumbbell", Push),
    ex("chest_dips", "Chest Dips", SecondaryCompound, Chest, Some(Arms), MOD_UP, false, "bodyweight", Push),
    ex("push_up", "Push-Up", SecondaryCompound, Chest, Some(Arms), ALL, true, "bodyweight", Push),
    ex("cable_fly", "Cable Fly", HeavyIsolation, Chest, None, ALL, true, "cable", Push),
    ex("dumbbell_pullover", "Dumbbell Pullover", HeavyIsolation, Chest, Some(Back), MOD_UP, false, "dumbbell", Neutral),
    ex("pec_deck", "Pec Deck", LightIsolation, Chest, None, ALL, true, "machine", Push),
    // Back
    ex("deadlift", "Conventional Deadlift", PrimaryCompound, Back, Some(Legs), MOD_UP, false, "barbell", Pull),
    ex("barbell_row", "Barbell Row", PrimaryCompound, Back, Some(Arms), MOD_UP, false, "barbell", Pull),
    ex("pull_up", "Pull-Up", PrimaryCompound, Back, Some(Arms), MOD_UP, false, "bodyweight", Pull),
    ex("lat_pulldown", "Lat Pulldown", SecondaryCompound, Back, Some(Arms), ALL, true, "cable", Pull),
    ex("seated_cable_row", "Seated Cable Row", SecondaryCompound, Back, Some(Arms), ALL, true, "cable", Pull),
    ex("single_arm_dumbbell_row", "Single-Arm Dumbbell Row", SecondaryCompound, Back, None, ALL, true, "dumbbell", Pull),
    ex("back_extension", "Back Extension", HeavyIsolation, Back, Some(Legs), ALL, true, "machine", Neutral),
    ex("straight_arm_pulldown", "Straight-Arm Pulldown", LightIsolation, Back, None, ALL, true, "cable", Pull),
    ex("dumbbell_shrug", "Dumbbell Shrug", LightIsolation, Back, None, ALL, true, "dumbbell", Pull),
    // Legs
    ex("back_squat", "Barbell Back Squat", PrimaryCompound, Legs, Some(Core), MOD_UP, false, "barbell", Neutral),
    ex("romanian_deadlift", "Romanian Deadlift", PrimaryCompound, Legs, Some(Back), MOD_UP, false, "barbell", Neutral),
    ex("leg_press", "Leg Press", SecondaryCompound, Legs, None, ALL, true, "machine", Neutral),
    ex("goblet_squat", "Goblet Squat", SecondaryCompound, Legs, Some(Core), ALL, true, "dumbbell", Neutral),
    ex("walking_lunge", "Walking Lunge", SecondaryCompound, Legs, None, ALL, true, "dumbbell", Neutral),
    ex("bulgarian_split_squat", "Bulgarian Split Squat", SecondaryCompound, Legs, None, MOD_UP, false, "dumbbell", Neutral),
    ex("leg_extension", "Leg Extension", HeavyIsolation, Legs, None, ALL, true, "machine", Neutral),
    ex("lying_leg_curl", "Lying Leg Curl", HeavyIsolation, Legs, None, ALL, true, "machine", Neutral),
    ex("standing_calf_raise", "Standing Calf Raise", LightIsolation, Legs, None, ALL, true, "machine", Neutral),
    ex("hip_abduction", "Hip Abduction", LightIsolation, Legs, None, ALL, true, "machine", Neutral),
    ex("glute_bridge", "Glute Bridge", LightIsolation, Legs, None, ALL, true, "bodyweight", Neutral),
    // Shoulders
    ex("overhead_press", "Standing Overhead Press", PrimaryCompound, Shoulders, Some(Arms), MOD_UP, false, "barbell", Push),
    ex("seated_dumbbell_press", "Seated Dumbbell Press", SecondaryCompound, Shoulders, Some(Arms), ALL, true, "dumbbell", Push),
    ex("arnold_press", "Arnold Press", SecondaryCompound, Shoulders, None, MOD_UP, false, "dumbbell", Push),
    ex("upright_row", "Upright Row", HeavyIsolation, Shoulders, Some(Arms), MOD_UP, false, "barbell", Pull),
    ex("lateral_raise", "Lateral Raise", LightIsolation, Shoulders, None, ALL, true, "dumbbell", Neutral),
    ex("front_raise", "Front Raise", LightIsolation, Shoulders, None, ALL, true, "dumbbell", Push),
    ex("face_pull", "Face Pull", LightIsolation, Shoulders, Some(Back), ALL, true, "cable", Pull),
    ex("rear_delt_fly", "Rear Delt Fly", LightIsolation, Shoulders, None, ALL, true, "dumbbell", Pull),
    // Arms
    ex("close_grip_bench_press", "Close-Grip Bench Press", SecondaryCompound, Arms, Some(Chest), MOD_UP, false, "barbell", Push),
    ex("diamond_push_up", "Diamond Push-Up", SecondaryCompound, Arms, Some(Chest), ALL, true, "bodyweight", Push),
    ex("skull_crusher", "Skull Crusher", HeavyIsolation, Arms, None, MOD_UP, false, "ez-bar", Push),
    ex("barbell_curl", "Barbell Curl", HeavyIsolation, Arms, None, ALL, true, "barbell", Pull),
    ex("tricep_pushdown", "Tricep Pushdown", LightIsolation, Arms, None, ALL, true, "cable", Push),
    ex("overhead_tricep_extension", "Overhead Tricep Extension", LightIsolation, Arms, None, ALL, true, "dumbbell", Push),
    ex("hammer_curl", "Hammer Curl", LightIsolation, Arms, None, ALL, true, "dumbbell", Pull),
    ex("preacher_curl", "Preacher Curl", LightIsolation, Arms, None, MOD_UP, true, "ez-bar", Pull),
    // Core
    ex("plank", "Plank", IsometricCore, Core, None, ALL, true, "bodyweight", Neutral),
    ex("side_plank", "Side Plank", IsometricCore, Core, None, ALL, true, "bodyweight", Neutral),
    ex("hollow_body_hold", "Hollow Body Hold", IsometricCore, Core, None, MOD_UP, false, "bodyweight", Neutral),
    ex("dead_bug", "Dead Bug", DynamicCore, Core, None, ALL, true, "bodyweight", Neutral),
    ex("bicycle_crunch", "Bicycle Crunch", DynamicCore, Core, None, ALL, true, "bodyweight", Neutral),
    ex("hanging_leg_raise", "Hanging Leg Raise", DynamicCore, Core, None, MOD_UP, false, "pull-up bar", Neutral),
    ex("cable_woodchop", "Cable Woodchop", DynamicCore, Core, None, MOD_UP, true, "cable", Neutral),
    ex("ab_wheel_rollout", "Ab Wheel Rollout", DynamicCore, Core, None, ADV, false, "ab wheel", Neutral),
    // Cardio
    cardio("incline_walk", "Incline Treadmill Walk", SteadyState, ALL, true, "treadmill", true),
    cardio("stationary_bike", "Stationary Bike", SteadyState, ALL, true, "bike", true),
    cardio("rowing_intervals", "Rowing Intervals", Hiit, ALL, true, "rower", true),
    cardio("battle_ropes", "Battle Ropes", Hiit, ALL, true, "ropes", true),
    cardio("jump_rope", "Jump Rope Intervals", Hiit, MOD_UP, false, "jump rope", false),
    cardio("burpees", "Burpees", Hiit, MOD_UP, false, "bodyweight", false),
    cardio("box_jumps", "Box Jumps", Hiit, ADV, false, "plyo box", false),
];

pub fn find_exercise(id: &str) -> Option<&'static ExerciseRecord> {
    EXERCISES.iter().find(|e| e.id == id)
}
