//! Candidate scoring: turns catalog lookups into a descending-score queue

use rand::Rng;

use super::{ExercisePreference, MovementPattern};
use crate::exercises::{Catalog, ExercisePattern, ExerciseRecord, ExperienceLevel, MuscleGroup, Tag};

/// Upper bound (exclusive) of the random jitter added to every score
const JITTER: f32 = 10.0;
const PATTERN_MATCH_BONUS: f32 = 15.0;

/// A catalog exercise considered for one requested muscle group
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub exercise: &'a ExerciseRecord,
    pub muscle: MuscleGroup,
    pub score: f32,
}

/// Push days never see pull exercises and vice versa
pub fn is_excluded(exercise: &ExerciseRecord, pattern: MovementPattern) -> bool {
    matches!(
        (pattern, exercise.pattern),
        (MovementPattern::Push, ExercisePattern::Pull)
            | (MovementPattern::Pull, ExercisePattern::Push)
    )
}

fn matches_pattern(exercise: &ExerciseRecord, pattern: MovementPattern) -> bool {
    matches!(
        (pattern, exercise.pattern),
        (MovementPattern::Push, ExercisePattern::Push)
            | (MovementPattern::Pull, ExercisePattern::Pull)
            | (MovementPattern::Mixed, ExercisePattern::Neutral)
    )
}

/// Score without jitter
pub fn base_score(
    exercise: &ExerciseRecord,
    preference: ExercisePreference,
    pattern: MovementPattern,
) -> f32 {
    let mut score = (6.0 - exercise.tier.priority() as f32) * 20.0;

    let tag = exercise.tier.tag();
    score += match (preference, tag) {
        (ExercisePreference::CompoundFocus, Tag::Compound) => 50.0,
        (ExercisePreference::CompoundFocus, Tag::Isolation) => -30.0,
        (ExercisePreference::IsolationFocus, Tag::Isolation) => 60.0,
        (ExercisePreference::IsolationFocus, Tag::Compound) => -40.0,
        // compounds already lead on base score
        (ExercisePreference::Balanced, Tag::Isolation) => 35.0,
        (ExercisePreference::Balanced, _) => 5.0,
        _ => 0.0,
    };

    if matches_pattern(exercise, pattern) {
        score += PATTERN_MATCH_BONUS;
    }

    score
}

/// Score every compatible exercise for every requested group, best first
pub fn build_queue<'a, C: Catalog, R: Rng>(
    catalog: &'a C,
    groups: &[MuscleGroup],
    level: ExperienceLevel,
    preference: ExercisePreference,
    pattern: MovementPattern,
    rng: &mut R,
) -> Vec<ScoredCandidate<'a>> {
    let mut queue: Vec<ScoredCandidate<'a>> = Vec::new();

    for muscle in groups {
        for exercise in catalog.lookup(*muscle, level) {
            if is_excluded(exercise, pattern) {
                continue;
            }
            let jitter = rng.gen_range(0.0..JITTER);
            queue.push(ScoredCandidate {
                exercise,
                muscle: *muscle,
                score: base_score(exercise, preference, pattern) + jitter,
            });
        }
    }

    queue.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    queue
}
