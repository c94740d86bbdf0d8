//! Budgeted greedy selection over the scored queue

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::SelectedExercise;
use super::cost::{default_reps, default_sets, estimate_minutes, rest_seconds};
use super::scorer::ScoredCandidate;
use super::shape::{LevelConstraints, ShapeLimits};
use crate::exercises::{ExperienceLevel, MuscleGroup};

/// Degradation never goes below this many sets
const MIN_SETS: u32 = 2;

/// Degradation is only attempted while more than this many minutes remain
const DEGRADE_MIN_REMAINING: f32 = 5.0;

/// Running counters for one muscle group during a single selection
#[derive(Debug, Default, Clone, Copy)]
struct MuscleTally {
    exercises: usize,
    sets: u32,
}

/// Remaining budgets, consumed as candidates are admitted
#[derive(Debug)]
struct Budget {
    minutes: f32,
    sets: u32,
}

impl Budget {
    fn fits(&self, minutes: f32, sets: u32) -> bool {
        minutes <= self.minutes && sets <= self.sets
    }

    fn exhausted(&self) -> bool {
        self.minutes <= 0.0 || self.sets < MIN_SETS
    }

    fn spend(&mut self, minutes: f32, sets: u32) {
        self.minutes -= minutes;
        self.sets -= sets;
    }
}

/// Walk the queue once, admitting candidates within the per-muscle cap,
/// the set budget and the time budget. Returns exercises in display order.
pub fn select(
    queue: &[ScoredCandidate<'_>],
    constraints: &LevelConstraints,
    limits: &ShapeLimits,
    time_budget: f32,
    level: ExperienceLevel,
) -> Vec<SelectedExercise> {
    let mut tallies: HashMap<MuscleGroup, MuscleTally> = HashMap::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut budget = Budget {
        minutes: time_budget,
        sets: constraints.max_total_sets,
    };
    let mut picked: Vec<(&ScoredCandidate<'_>, u32)> = Vec::new();

    for candidate in queue {
        if picked.len() >= limits.target_exercises {
            break;
        }
        if budget.exhausted() && picked.len() >= limits.min_exercises {
            break;
        }

        let exercise = candidate.exercise;
        let tally = tallies.entry(candidate.muscle).or_default();
        if tally.exercises >= constraints.max_exercises_per_muscle || seen.contains(exercise.id) {
            continue;
        }

        let full_sets = default_sets(exercise.tier, level).min(constraints.max_sets_per_exercise);
        let full_cost = estimate_minutes(exercise.tier, level, full_sets);

        let sets = if budget.fits(full_cost, full_sets) {
            Some(full_sets)
        } else if budget.minutes > DEGRADE_MIN_REMAINING && picked.len() < limits.min_exercises {
            degrade(candidate, full_sets, &budget, level)
        } else {
            None
        };

        let Some(sets) = sets else {
            debug!(
                exercise = exercise.id,
                cost = full_cost,
                remaining_minutes = budget.minutes,
                remaining_sets = budget.sets,
                "skipped, does not fit budget"
            );
            continue;
        };

        let cost = estimate_minutes(exercise.tier, level, sets);
        budget.spend(cost, sets);
        tally.exercises += 1;
        tally.sets += sets;
        seen.insert(exercise.id);
        picked.push((candidate, sets));

        debug!(
            exercise = exercise.id,
            muscle = %candidate.muscle,
            score = candidate.score,
            sets,
            cost,
            muscle_sets = tally.sets,
            remaining_minutes = budget.minutes,
            "admitted"
        );
    }

    // display order: compounds before isolation, score order within a tier
    picked.sort_by_key(|(candidate, _)| candidate.exercise.tier.priority());

    picked
        .into_iter()
        .enumerate()
        .map(|(i, (candidate, sets))| {
            let exercise = candidate.exercise;
            let (low, high) = constraints.rest_seconds_range;
            SelectedExercise {
                id: exercise.id.to_string(),
                name: exercise.name.to_string(),
                tier: exercise.tier,
                tag: exercise.tier.tag(),
                primary_muscle: exercise.primary_muscle,
                secondary_muscle: exercise.secondary_muscle,
                sets,
                reps: default_reps(exercise.tier, level).to_string(),
                rest_seconds: rest_seconds(exercise.tier, level).clamp(low, high),
                equipment: exercise.equipment.to_string(),
                order: i + 1,
            }
        })
        .collect()
}

/// Shrink the set count one at a time until the candidate fits both
/// budgets. `None` if even the floor does not fit.
fn degrade(
    candidate: &ScoredCandidate<'_>,
    full_sets: u32,
    budget: &Budget,
    level: ExperienceLevel,
) -> Option<u32> {
    let tier = candidate.exercise.tier;
    let floor = MIN_SETS.min(full_sets);

    let fitting = (floor..full_sets)
        .rev()
        .find(|sets| budget.fits(estimate_minutes(tier, level, *sets), *sets));
    if let Some(sets) = fitting {
        debug!(exercise = candidate.exercise.id, sets, "degraded");
    }
    fitting
}
