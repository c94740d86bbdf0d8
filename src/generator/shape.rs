//! Level constraints and workout-shape detection

use serde::{Deserialize, Serialize};

use super::MovementPattern;
use crate::exercises::{ExperienceLevel, MuscleGroup};

/// Hard limits the selector works within
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelConstraints {
    pub max_exercises_per_muscle: usize,
    pub max_sets_per_exercise: u32,
    pub max_total_sets: u32,
    pub rest_seconds_range: (u32, u32),
}

impl LevelConstraints {
    pub fn for_level(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Beginner => Self {
                max_exercises_per_muscle: 3,
                max_sets_per_exercise: 3,
                max_total_sets: 18,
                rest_seconds_range: (60, 180),
            },
            ExperienceLevel::Moderate => Self {
                max_exercises_per_muscle: 4,
                max_sets_per_exercise: 4,
                max_total_sets: 24,
                rest_seconds_range: (45, 150),
            },
            ExperienceLevel::Advanced => Self {
                max_exercises_per_muscle: 5,
                max_sets_per_exercise: 5,
                max_total_sets: 30,
                rest_seconds_range: (30, 120),
            },
        }
    }

    /// Replace level defaults with the shape's overrides
    pub fn with_shape(self, shape: &WorkoutShape) -> Self {
        let limits = shape.limits();
        Self {
            max_exercises_per_muscle: limits.max_exercises_per_muscle,
            max_sets_per_exercise: limits
                .max_sets_per_exercise
                .unwrap_or(self.max_sets_per_exercise),
            max_total_sets: limits.max_total_sets.unwrap_or(self.max_total_sets),
            rest_seconds_range: self.rest_seconds_range,
        }
    }
}

/// Constraint overrides carried by each shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeLimits {
    pub target_exercises: usize,
    pub min_exercises: usize,
    pub max_exercises_per_muscle: usize,
    pub max_sets_per_exercise: Option<u32>,
    pub max_total_sets: Option<u32>,
    /// Added to the main-section time budget
    pub extra_minutes: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitDay {
    Push,
    Pull,
    /// Brutal leg day: more exercises, more sets, more time
    Legs,
}

/// Detected workout archetype
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutShape {
    FullBody(ShapeLimits),
    PushPullLeg(SplitDay, ShapeLimits),
    SingleMuscle(ShapeLimits),
    DualMuscle(ShapeLimits),
    MultiMuscle(ShapeLimits),
}

const FULL_BODY_MIN_GROUPS: usize = 4;
const TOTAL_SETS_CEILING: u32 = 40;

impl WorkoutShape {
    /// Classify from the primary groups (finisher flags already removed)
    pub fn detect(
        primary: &[MuscleGroup],
        pattern: MovementPattern,
        level: ExperienceLevel,
    ) -> Self {
        let n = primary.len();
        let base = LevelConstraints::for_level(level);

        if n >= FULL_BODY_MIN_GROUPS {
            return WorkoutShape::FullBody(ShapeLimits {
                target_exercises: 10,
                min_exercises: 8,
                max_exercises_per_muscle: 2,
                max_sets_per_exercise: Some(3),
                max_total_sets: Some(35),
                extra_minutes: 30.0,
            });
        }

        if primary == [MuscleGroup::Legs] {
            let per_muscle = [6, 7, 8][level.index()];
            return WorkoutShape::PushPullLeg(
                SplitDay::Legs,
                ShapeLimits {
                    target_exercises: 8,
                    min_exercises: 6,
                    max_exercises_per_muscle: per_muscle,
                    max_sets_per_exercise: None,
                    max_total_sets: Some((base.max_total_sets + 10).min(TOTAL_SETS_CEILING)),
                    extra_minutes: 10.0,
                },
            );
        }

        let split = match pattern {
            MovementPattern::Push => Some(SplitDay::Push),
            MovementPattern::Pull => Some(SplitDay::Pull),
            MovementPattern::Mixed => None,
        };
        if let Some(day) = split {
            return WorkoutShape::PushPullLeg(
                day,
                ShapeLimits {
                    target_exercises: 8,
                    min_exercises: 6,
                    max_exercises_per_muscle: if n <= 2 { 5 } else { 4 },
                    max_sets_per_exercise: None,
                    max_total_sets: None,
                    extra_minutes: 0.0,
                },
            );
        }

        match n {
            1 => WorkoutShape::SingleMuscle(ShapeLimits {
                target_exercises: 6,
                min_exercises: 6,
                max_exercises_per_muscle: 6,
                max_sets_per_exercise: None,
                max_total_sets: None,
                extra_minutes: 0.0,
            }),
            2 => WorkoutShape::DualMuscle(ShapeLimits {
                target_exercises: 8,
                min_exercises: 6,
                max_exercises_per_muscle: 4,
                max_sets_per_exercise: None,
                max_total_sets: None,
                extra_minutes: 0.0,
            }),
            _ => WorkoutShape::MultiMuscle(ShapeLimits {
                target_exercises: 8,
                min_exercises: 6,
                max_exercises_per_muscle: 8usize.div_ceil(n.max(1)),
                max_sets_per_exercise: None,
                max_total_sets: None,
                extra_minutes: 0.0,
            }),
        }
    }

    pub fn limits(&self) -> &ShapeLimits {
        match self {
            WorkoutShape::FullBody(limits)
            | WorkoutShape::PushPullLeg(_, limits)
            | WorkoutShape::SingleMuscle(limits)
            | WorkoutShape::DualMuscle(limits)
            | WorkoutShape::MultiMuscle(limits) => limits,
        }
    }

    pub fn is_full_body(&self) -> bool {
        matches!(self, WorkoutShape::FullBody(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            WorkoutShape::FullBody(_) => "full-body",
            WorkoutShape::PushPullLeg(SplitDay::Push, _) => "push day",
            WorkoutShape::PushPullLeg(SplitDay::Pull, _) => "pull day",
            WorkoutShape::PushPullLeg(SplitDay::Legs, _) => "leg day",
            WorkoutShape::SingleMuscle(_) => "single muscle",
            WorkoutShape::DualMuscle(_) => "dual muscle",
            WorkoutShape::MultiMuscle(_) => "multi muscle",
        }
    }
}
