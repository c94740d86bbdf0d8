//! Warm-up, cool-down and finisher blocks

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

use super::cost::{default_reps, default_sets, estimate_minutes, rest_seconds};
use super::{Cooldown, FinisherExercise, FinisherKind, SectionEntry, Warmup};
use crate::exercises::{Catalog, ExerciseRecord, ExperienceLevel, MuscleGroup, Tag, Tier};

pub const COOLDOWN_MINUTES: u32 = 10;

/// Stretch template for one muscle group
struct Stretch {
    group: MuscleGroup,
    name: &'static str,
    detail: &'static str,
}

const DYNAMIC_STRETCHES: &[Stretch] = &[
    Stretch {
        group: MuscleGroup::Chest,
        name: "Arm Circles & Chest Openers",
        detail: "10 forward, 10 backward, 10 openers",
    },
    Stretch {
        group: MuscleGroup::Back,
        name: "Cat-Cow & Band Pull-Aparts",
        detail: "10 cat-cow, 15 pull-aparts",
    },
    Stretch {
        group: MuscleGroup::Legs,
        name: "Leg Swings & Bodyweight Squats",
        detail: "10 swings per leg, 15 squats",
    },
    Stretch {
        group: MuscleGroup::Shoulders,
        name: "Shoulder Dislocates",
        detail: "15 reps with a band or dowel",
    },
    Stretch {
        group: MuscleGroup::Arms,
        name: "Wrist Rolls & Arm Swings",
        detail: "30 seconds each",
    },
    Stretch {
        group: MuscleGroup::Core,
        name: "Torso Twists",
        detail: "20 controlled twists",
    },
    Stretch {
        group: MuscleGroup::Cardio,
        name: "High Knees",
        detail: "2 x 30 seconds",
    },
];

const STATIC_STRETCHES: &[Stretch] = &[
    Stretch {
        group: MuscleGroup::Chest,
        name: "Doorway Chest Stretch",
        detail: "30 seconds per side",
    },
    Stretch {
        group: MuscleGroup::Back,
        name: "Child's Pose",
        detail: "60 seconds",
    },
    Stretch {
        group: MuscleGroup::Legs,
        name: "Standing Quad & Hamstring Stretch",
        detail: "30 seconds each, per leg",
    },
    Stretch {
        group: MuscleGroup::Shoulders,
        name: "Cross-Body Shoulder Stretch",
        detail: "30 seconds per side",
    },
    Stretch {
        group: MuscleGroup::Arms,
        name: "Overhead Triceps & Biceps Wall Stretch",
        detail: "30 seconds each, per arm",
    },
    Stretch {
        group: MuscleGroup::Core,
        name: "Cobra Stretch",
        detail: "45 seconds",
    },
    Stretch {
        group: MuscleGroup::Cardio,
        name: "Calf Stretch",
        detail: "30 seconds per leg",
    },
];

fn stretch_for(table: &[Stretch], group: MuscleGroup) -> Option<SectionEntry> {
    table.iter().find(|s| s.group == group).map(|s| SectionEntry {
        name: s.name.to_string(),
        detail: s.detail.to_string(),
    })
}

pub fn warmup_minutes(level: ExperienceLevel) -> u32 {
    match level {
        ExperienceLevel::Beginner => 15,
        ExperienceLevel::Moderate | ExperienceLevel::Advanced => 12,
    }
}

pub fn warmup(groups: &[MuscleGroup], level: ExperienceLevel) -> Warmup {
    let mut entries = vec![SectionEntry {
        name: "General Cardio".to_string(),
        detail: "5 min light bike, rower or brisk walk".to_string(),
    }];
    entries.extend(groups.iter().filter_map(|g| stretch_for(DYNAMIC_STRETCHES, *g)));
    entries.push(SectionEntry {
        name: "Warm-up Sets".to_string(),
        detail: "2 light sets of the first exercise".to_string(),
    });

    Warmup {
        duration_minutes: warmup_minutes(level),
        entries,
    }
}

pub fn cooldown(groups: &[MuscleGroup]) -> Cooldown {
    let mut entries: Vec<SectionEntry> = groups
        .iter()
        .filter_map(|g| stretch_for(STATIC_STRETCHES, *g))
        .collect();
    entries.push(SectionEntry {
        name: "Box Breathing".to_string(),
        detail: "2 min, 4s in / 4s hold / 4s out / 4s hold".to_string(),
    });

    Cooldown {
        duration_minutes: COOLDOWN_MINUTES,
        entries,
    }
}

fn finisher_from(
    record: &ExerciseRecord,
    kind: FinisherKind,
    level: ExperienceLevel,
) -> FinisherExercise {
    let sets = default_sets(record.tier, level);
    FinisherExercise {
        id: record.id.to_string(),
        name: record.name.to_string(),
        kind,
        tier: record.tier,
        sets,
        reps: default_reps(record.tier, level).to_string(),
        rest_seconds: rest_seconds(record.tier, level),
        estimated_minutes: estimate_minutes(record.tier, level, sets),
    }
}

pub fn core_finisher_size(level: ExperienceLevel) -> usize {
    match level {
        ExperienceLevel::Beginner => 2,
        ExperienceLevel::Moderate | ExperienceLevel::Advanced => 3,
    }
}

/// Random pick of core exercises for the level
pub fn core_finisher<C: Catalog, R: Rng>(
    catalog: &C,
    level: ExperienceLevel,
    rng: &mut R,
) -> Vec<FinisherExercise> {
    let mut pool: Vec<&ExerciseRecord> = catalog
        .lookup(MuscleGroup::Core, level)
        .into_iter()
        .filter(|e| e.tier.tag() == Tag::Core)
        .collect();
    pool.shuffle(rng);

    let size = core_finisher_size(level);
    if pool.len() < size {
        warn!(available = pool.len(), wanted = size, "core finisher short on exercises");
    }

    pool.into_iter()
        .take(size)
        .map(|e| finisher_from(e, FinisherKind::Core, level))
        .collect()
}

/// Used when no cardio exercise survives filtering
pub fn fallback_cardio(level: ExperienceLevel) -> FinisherExercise {
    FinisherExercise {
        id: "incline_walking".to_string(),
        name: "Incline Walking".to_string(),
        kind: FinisherKind::Cardio,
        tier: Tier::SteadyState,
        sets: 1,
        reps: "10-12min".to_string(),
        rest_seconds: 0,
        estimated_minutes: estimate_minutes(Tier::SteadyState, level, 1),
    }
}

/// One random cardio exercise; leg days only get low-impact options
pub fn cardio_finisher<C: Catalog, R: Rng>(
    catalog: &C,
    groups: &[MuscleGroup],
    level: ExperienceLevel,
    rng: &mut R,
) -> FinisherExercise {
    let leg_day = groups.contains(&MuscleGroup::Legs);
    let pool: Vec<&ExerciseRecord> = catalog
        .lookup(MuscleGroup::Cardio, level)
        .into_iter()
        .filter(|e| e.tier.tag() == Tag::Cardio)
        .filter(|e| !leg_day || e.is_low_impact)
        .collect();

    match pool.choose(rng) {
        Some(record) => finisher_from(record, FinisherKind::Cardio, level),
        None => {
            warn!(%level, leg_day, "no cardio exercise available, using incline walking");
            fallback_cardio(level)
        }
    }
}
