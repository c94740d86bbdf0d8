//! Routine generation engine
//!
//! Pipeline per call:
//! - shape detection overrides the level constraints
//! - every compatible catalog exercise is scored into a queue
//! - a budgeted greedy walk picks the main exercises
//! - warm-up, cool-down and finishers are appended from templates

pub mod cost;
pub mod scorer;
pub mod sections;
pub mod selector;
pub mod shape;

pub use scorer::ScoredCandidate;
pub use shape::{LevelConstraints, ShapeLimits, SplitDay, WorkoutShape};

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ConfigError, ParseError};
use crate::exercises::{Catalog, ExperienceLevel, MuscleGroup, Tag, Tier};

pub const DEFAULT_TIME_BUDGET: u32 = 65;
pub const MAX_MUSCLE_GROUPS: usize = 5;

/// Requested split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    Push,
    Pull,
    #[default]
    Mixed,
}

impl MovementPattern {
    pub fn name(&self) -> &'static str {
        match self {
            MovementPattern::Push => "Push",
            MovementPattern::Pull => "Pull",
            MovementPattern::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for MovementPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MovementPattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "push" => Ok(MovementPattern::Push),
            "pull" => Ok(MovementPattern::Pull),
            "mixed" => Ok(MovementPattern::Mixed),
            _ => Err(ParseError::Pattern(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExercisePreference {
    CompoundFocus,
    #[default]
    Balanced,
    IsolationFocus,
}

impl ExercisePreference {
    pub fn name(&self) -> &'static str {
        match self {
            ExercisePreference::CompoundFocus => "compound-focus",
            ExercisePreference::Balanced => "balanced",
            ExercisePreference::IsolationFocus => "isolation-focus",
        }
    }
}

impl fmt::Display for ExercisePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExercisePreference {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "compound-focus" | "compound" => Ok(ExercisePreference::CompoundFocus),
            "balanced" => Ok(ExercisePreference::Balanced),
            "isolation-focus" | "isolation" => Ok(ExercisePreference::IsolationFocus),
            _ => Err(ParseError::Preference(s.to_string())),
        }
    }
}

/// Input for one generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub muscle_groups: Vec<MuscleGroup>,
    pub experience_level: ExperienceLevel,
    pub exercise_preference: ExercisePreference,
    pub movement_pattern: MovementPattern,
    pub include_cardio_finisher: bool,
    pub include_core_finisher: bool,
    pub time_budget_minutes: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            muscle_groups: Vec::new(),
            experience_level: ExperienceLevel::default(),
            exercise_preference: ExercisePreference::default(),
            movement_pattern: MovementPattern::default(),
            include_cardio_finisher: false,
            include_core_finisher: false,
            time_budget_minutes: DEFAULT_TIME_BUDGET,
        }
    }
}

impl GenerationConfig {
    /// Defaults with the given groups, duplicates dropped, order kept
    pub fn new(groups: impl IntoIterator<Item = MuscleGroup>) -> Self {
        let mut muscle_groups: Vec<MuscleGroup> = Vec::new();
        for group in groups {
            if !muscle_groups.contains(&group) {
                muscle_groups.push(group);
            }
        }
        Self {
            muscle_groups,
            ..Self::default()
        }
    }

    /// Boundary check for callers; `generate` itself accepts anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.muscle_groups.is_empty() {
            return Err(ConfigError::NoMuscleGroups);
        }
        if self.muscle_groups.len() > MAX_MUSCLE_GROUPS {
            return Err(ConfigError::TooManyMuscleGroups {
                max: MAX_MUSCLE_GROUPS,
                got: self.muscle_groups.len(),
            });
        }
        if self.time_budget_minutes == 0 {
            return Err(ConfigError::ZeroTimeBudget);
        }
        Ok(())
    }

    pub fn primary_groups(&self) -> Vec<MuscleGroup> {
        primary_groups(&self.muscle_groups)
    }

    pub fn wants_cardio(&self) -> bool {
        self.include_cardio_finisher || self.muscle_groups.contains(&MuscleGroup::Cardio)
    }

    pub fn wants_core(&self) -> bool {
        self.include_core_finisher || self.muscle_groups.contains(&MuscleGroup::Core)
    }
}

fn primary_groups(groups: &[MuscleGroup]) -> Vec<MuscleGroup> {
    groups.iter().filter(|g| !g.is_finisher_flag()).copied().collect()
}

/// One main-section exercise with its prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedExercise {
    pub id: String,
    pub name: String,
    pub tier: Tier,
    pub tag: Tag,
    pub primary_muscle: MuscleGroup,
    pub secondary_muscle: Option<MuscleGroup>,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
    pub equipment: String,
    pub order: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinisherKind {
    Core,
    Cardio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinisherExercise {
    pub id: String,
    pub name: String,
    pub kind: FinisherKind,
    pub tier: Tier,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
    pub estimated_minutes: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warmup {
    pub duration_minutes: u32,
    pub entries: Vec<SectionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    pub duration_minutes: u32,
    pub entries: Vec<SectionEntry>,
}

fn default_time_budget() -> u32 {
    DEFAULT_TIME_BUDGET
}

/// Generated routine, handed to persistence as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub routine_name: String,
    pub muscle_groups: Vec<MuscleGroup>,
    pub level: ExperienceLevel,
    pub movement_pattern: MovementPattern,
    pub exercise_preference: ExercisePreference,
    #[serde(default = "default_time_budget")]
    pub time_budget_minutes: u32,
    pub warmup: Warmup,
    pub main_exercises: Vec<SelectedExercise>,
    /// Core finishers first, then at most one cardio finisher
    pub finishers: Vec<FinisherExercise>,
    pub cooldown: Cooldown,
    pub total_time_minutes: u32,
    pub total_sets: u32,
    pub total_exercise_count: usize,
    pub is_ai_generated: bool,
}

impl Routine {
    pub fn core_finishers(&self) -> impl Iterator<Item = &FinisherExercise> {
        self.finishers.iter().filter(|f| f.kind == FinisherKind::Core)
    }

    pub fn cardio_finisher(&self) -> Option<&FinisherExercise> {
        self.finishers.iter().find(|f| f.kind == FinisherKind::Cardio)
    }

    /// Sum of independently estimated sections. Not checked against the budget.
    pub fn recompute_totals(&mut self) {
        let main_minutes: f32 = self
            .main_exercises
            .iter()
            .map(|e| cost::estimate_minutes(e.tier, self.level, e.sets))
            .sum();
        let finisher_minutes: f32 = self.finishers.iter().map(|f| f.estimated_minutes).sum();
        let total = (self.warmup.duration_minutes + self.cooldown.duration_minutes) as f32
            + main_minutes
            + finisher_minutes;

        self.total_time_minutes = total.round() as u32;
        self.total_sets = self.main_exercises.iter().map(|e| e.sets).sum::<u32>()
            + self.finishers.iter().map(|f| f.sets).sum::<u32>();
        self.total_exercise_count = self.main_exercises.len() + self.finishers.len();
    }

    pub fn replace_main(&mut self, main: Vec<SelectedExercise>) {
        self.main_exercises = main;
        self.recompute_totals();
    }

    pub fn replace_core_finishers(&mut self, core: Vec<FinisherExercise>) {
        let cardio = self.cardio_finisher().cloned();
        self.finishers = core;
        self.finishers.extend(cardio);
        self.recompute_totals();
    }

    pub fn replace_cardio_finisher(&mut self, cardio: FinisherExercise) {
        self.finishers.retain(|f| f.kind == FinisherKind::Core);
        self.finishers.push(cardio);
        self.recompute_totals();
    }

    /// Plain-text preview
    pub fn summary(&self) -> String {
        let mut lines = vec![
            self.routine_name.clone(),
            format!(
                "{} | {} | {} | ~{} min | {} sets | {} exercises",
                self.level,
                self.movement_pattern,
                self.exercise_preference,
                self.total_time_minutes,
                self.total_sets,
                self.total_exercise_count
            ),
            String::new(),
            format!("Warm-up ({} min)", self.warmup.duration_minutes),
        ];
        for entry in &self.warmup.entries {
            lines.push(format!("  - {}: {}", entry.name, entry.detail));
        }

        lines.push(String::new());
        lines.push("Main".to_string());
        for e in &self.main_exercises {
            lines.push(format!(
                "  {:>2}. {:28} {}x{:8} rest {:>3}s  [{}]",
                e.order,
                e.name,
                e.sets,
                e.reps,
                e.rest_seconds,
                e.tag.label()
            ));
        }

        if !self.finishers.is_empty() {
            lines.push(String::new());
            lines.push("Finishers".to_string());
            for f in &self.finishers {
                lines.push(format!("  - {:28} {}x{}", f.name, f.sets, f.reps));
            }
        }

        lines.push(String::new());
        lines.push(format!("Cool-down ({} min)", self.cooldown.duration_minutes));
        for entry in &self.cooldown.entries {
            lines.push(format!("  - {}: {}", entry.name, entry.detail));
        }

        lines.join("\n")
    }
}

fn level_prefix(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Beginner => "Foundation",
        ExperienceLevel::Moderate => "Power",
        ExperienceLevel::Advanced => "Elite",
    }
}

pub fn routine_name(
    groups: &[MuscleGroup],
    level: ExperienceLevel,
    pattern: MovementPattern,
) -> String {
    let prefix = level_prefix(level);
    let primary = primary_groups(groups);

    if let [muscle] = primary.as_slice() {
        return format!("{} {} Day", prefix, muscle);
    }

    // finisher-only routines are named after their finishers
    let named = if primary.is_empty() { groups } else { primary.as_slice() };
    let names: Vec<_> = named.iter().map(|g| g.name()).collect();
    format!("{} {}: {}", prefix, pattern.name(), names.join(" + "))
}

fn cardio_deduction(level: ExperienceLevel) -> f32 {
    match level {
        ExperienceLevel::Beginner => 10.0,
        ExperienceLevel::Moderate | ExperienceLevel::Advanced => 12.0,
    }
}

fn core_deduction(level: ExperienceLevel) -> f32 {
    match level {
        ExperienceLevel::Beginner => 6.0,
        ExperienceLevel::Moderate | ExperienceLevel::Advanced => 8.0,
    }
}

/// Minutes left for the main section once fixed sections are paid for
pub fn main_time_budget(
    time_budget: u32,
    level: ExperienceLevel,
    with_cardio: bool,
    with_core: bool,
    shape: &WorkoutShape,
) -> f32 {
    let mut minutes = time_budget as f32
        - sections::warmup_minutes(level) as f32
        - sections::COOLDOWN_MINUTES as f32
        + shape.limits().extra_minutes;
    if with_cardio {
        minutes -= cardio_deduction(level);
    }
    if with_core {
        minutes -= core_deduction(level);
    }
    minutes.max(0.0)
}

/// Generator bound to a catalog and an entropy source.
///
/// The random source is the only non-determinism: pass a seeded RNG to
/// replay a routine.
pub struct RoutineGenerator<'c, C: Catalog, R: Rng> {
    catalog: &'c C,
    rng: R,
}

impl<'c, C: Catalog, R: Rng> RoutineGenerator<'c, C, R> {
    pub fn new(catalog: &'c C, rng: R) -> Self {
        Self { catalog, rng }
    }

    pub fn generate(&mut self, config: &GenerationConfig) -> Routine {
        let level = config.experience_level;
        let with_cardio = config.wants_cardio();
        let with_core = config.wants_core();

        let (main_exercises, shape) = self.main_section(
            &config.primary_groups(),
            level,
            config.exercise_preference,
            config.movement_pattern,
            config.time_budget_minutes,
            with_cardio,
            with_core,
        );

        let mut finishers = Vec::new();
        if with_core {
            finishers.extend(sections::core_finisher(self.catalog, level, &mut self.rng));
        }
        if with_cardio {
            finishers.push(sections::cardio_finisher(
                self.catalog,
                &config.muscle_groups,
                level,
                &mut self.rng,
            ));
        }

        let mut routine = Routine {
            routine_name: routine_name(&config.muscle_groups, level, config.movement_pattern),
            muscle_groups: config.muscle_groups.clone(),
            level,
            movement_pattern: config.movement_pattern,
            exercise_preference: config.exercise_preference,
            time_budget_minutes: config.time_budget_minutes,
            warmup: sections::warmup(&config.muscle_groups, level),
            main_exercises,
            finishers,
            cooldown: sections::cooldown(&config.muscle_groups),
            total_time_minutes: 0,
            total_sets: 0,
            total_exercise_count: 0,
            is_ai_generated: true,
        };
        routine.recompute_totals();

        info!(
            routine = %routine.routine_name,
            shape = shape.name(),
            exercises = routine.main_exercises.len(),
            total_sets = routine.total_sets,
            total_minutes = routine.total_time_minutes,
            budget = config.time_budget_minutes,
            "routine generated"
        );
        routine
    }

    /// Fresh main section for an existing routine; the caller merges it
    pub fn regenerate_main(&mut self, routine: &Routine) -> Vec<SelectedExercise> {
        let with_cardio = routine.cardio_finisher().is_some();
        let with_core = routine.core_finishers().next().is_some();

        let (main, shape) = self.main_section(
            &primary_groups(&routine.muscle_groups),
            routine.level,
            routine.exercise_preference,
            routine.movement_pattern,
            routine.time_budget_minutes,
            with_cardio,
            with_core,
        );
        info!(
            routine = %routine.routine_name,
            shape = shape.name(),
            exercises = main.len(),
            "main section regenerated"
        );
        main
    }

    pub fn regenerate_core(&mut self, level: ExperienceLevel) -> Vec<FinisherExercise> {
        sections::core_finisher(self.catalog, level, &mut self.rng)
    }

    pub fn regenerate_cardio(
        &mut self,
        groups: &[MuscleGroup],
        level: ExperienceLevel,
    ) -> FinisherExercise {
        sections::cardio_finisher(self.catalog, groups, level, &mut self.rng)
    }

    #[allow(clippy::too_many_arguments)]
    fn main_section(
        &mut self,
        primary: &[MuscleGroup],
        level: ExperienceLevel,
        preference: ExercisePreference,
        pattern: MovementPattern,
        time_budget: u32,
        with_cardio: bool,
        with_core: bool,
    ) -> (Vec<SelectedExercise>, WorkoutShape) {
        let shape = WorkoutShape::detect(primary, pattern, level);
        if primary.is_empty() {
            warn!("no primary muscle groups, routine has finishers only");
            return (Vec::new(), shape);
        }

        let constraints = LevelConstraints::for_level(level).with_shape(&shape);
        let budget = main_time_budget(time_budget, level, with_cardio, with_core, &shape);
        let queue =
            scorer::build_queue(self.catalog, primary, level, preference, pattern, &mut self.rng);
        let selected = selector::select(&queue, &constraints, shape.limits(), budget, level);

        if selected.len() < shape.limits().min_exercises {
            warn!(
                shape = shape.name(),
                selected = selected.len(),
                minimum = shape.limits().min_exercises,
                budget,
                "main section below shape minimum"
            );
        }
        (selected, shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::{ExercisePattern, StaticCatalog, find_exercise};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    fn config(groups: &[MuscleGroup]) -> GenerationConfig {
        GenerationConfig::new(groups.iter().copied())
    }

    fn generate(config: &GenerationConfig, seed: u64) -> Routine {
        let catalog = StaticCatalog::default();
        let mut generator = RoutineGenerator::new(&catalog, StdRng::seed_from_u64(seed));
        generator.generate(config)
    }

    fn effective_constraints(config: &GenerationConfig) -> LevelConstraints {
        let shape = WorkoutShape::detect(
            &config.primary_groups(),
            config.movement_pattern,
            config.experience_level,
        );
        LevelConstraints::for_level(config.experience_level).with_shape(&shape)
    }

    fn assert_invariants(config: &GenerationConfig, routine: &Routine) {
        let constraints = effective_constraints(config);

        let sets: u32 = routine.main_exercises.iter().map(|e| e.sets).sum();
        assert!(sets <= constraints.max_total_sets, "{sets} sets > {}", constraints.max_total_sets);

        let ids: HashSet<_> = routine.main_exercises.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), routine.main_exercises.len(), "duplicate ids");

        let mut per_muscle: HashMap<MuscleGroup, usize> = HashMap::new();
        for e in &routine.main_exercises {
            *per_muscle.entry(e.primary_muscle).or_default() += 1;
        }
        for (muscle, count) in per_muscle {
            assert!(count <= constraints.max_exercises_per_muscle, "{muscle}: {count}");
        }

        let shape = WorkoutShape::detect(
            &config.primary_groups(),
            config.movement_pattern,
            config.experience_level,
        );
        assert!(routine.main_exercises.len() <= shape.limits().target_exercises);

        let budget = main_time_budget(
            config.time_budget_minutes,
            config.experience_level,
            config.wants_cardio(),
            config.wants_core(),
            &shape,
        );
        let spent: f32 = routine
            .main_exercises
            .iter()
            .map(|e| cost::estimate_minutes(e.tier, config.experience_level, e.sets))
            .sum();
        assert!(spent <= budget + 1e-3, "main section {spent} min > {budget} min");
    }

    #[test]
    fn test_invariants_across_configs() {
        use MuscleGroup::*;
        let group_sets: &[&[MuscleGroup]] = &[
            &[Chest],
            &[Legs],
            &[Chest, Back],
            &[Chest, Shoulders, Arms],
            &[Chest, Back, Legs, Shoulders, Arms],
            &[Back, Arms, Core, Cardio],
        ];
        let levels = [
            ExperienceLevel::Beginner,
            ExperienceLevel::Moderate,
            ExperienceLevel::Advanced,
        ];
        let patterns = [MovementPattern::Push, MovementPattern::Pull, MovementPattern::Mixed];
        let preferences = [
            ExercisePreference::CompoundFocus,
            ExercisePreference::Balanced,
            ExercisePreference::IsolationFocus,
        ];

        let mut seed = 0;
        for groups in group_sets {
            for level in levels {
                for pattern in patterns {
                    for preference in preferences {
                        for budget in [30, 65, 120] {
                            let mut c = config(groups);
                            c.experience_level = level;
                            c.movement_pattern = pattern;
                            c.exercise_preference = preference;
                            c.time_budget_minutes = budget;
                            seed += 1;
                            let routine = generate(&c, seed);
                            assert_invariants(&c, &routine);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_push_and_pull_exclusion() {
        for seed in 0..25 {
            let mut c = config(&[MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Arms]);
            c.movement_pattern = MovementPattern::Push;
            let routine = generate(&c, seed);
            for e in &routine.main_exercises {
                let pattern = find_exercise(&e.id).unwrap().pattern;
                assert_ne!(pattern, ExercisePattern::Pull, "{}", e.id);
            }

            c.movement_pattern = MovementPattern::Pull;
            let routine = generate(&c, seed);
            for e in &routine.main_exercises {
                let pattern = find_exercise(&e.id).unwrap().pattern;
                assert_ne!(pattern, ExercisePattern::Push, "{}", e.id);
            }
        }
    }

    #[test]
    fn test_full_body_has_ten_exercises() {
        use MuscleGroup::*;
        for seed in 0..25 {
            let mut c = config(&[Chest, Back, Legs, Shoulders, Arms]);
            c.time_budget_minutes = 90;
            let routine = generate(&c, seed);
            assert_eq!(routine.main_exercises.len(), 10);
            assert!(routine.main_exercises.iter().all(|e| e.sets <= 3));
        }
    }

    #[test]
    fn test_brutal_leg_day() {
        for seed in 0..25 {
            let mut c = config(&[MuscleGroup::Legs]);
            c.experience_level = ExperienceLevel::Advanced;
            c.time_budget_minutes = 90;
            let routine = generate(&c, seed);
            assert_eq!(routine.main_exercises.len(), 8);
            assert!(effective_constraints(&c).max_exercises_per_muscle >= 6);
            assert_eq!(routine.routine_name, "Elite Legs Day");
        }
    }

    #[test]
    fn test_push_day_scenario() {
        use MuscleGroup::*;
        for seed in 0..25 {
            let c = GenerationConfig {
                muscle_groups: vec![Chest, Shoulders, Arms],
                experience_level: ExperienceLevel::Moderate,
                exercise_preference: ExercisePreference::Balanced,
                movement_pattern: MovementPattern::Push,
                include_cardio_finisher: false,
                include_core_finisher: false,
                time_budget_minutes: 65,
            };
            let routine = generate(&c, seed);
            let n = routine.main_exercises.len();
            assert!((6..=8).contains(&n), "got {n} exercises");
            assert!(
                routine
                    .main_exercises
                    .iter()
                    .all(|e| find_exercise(&e.id).unwrap().pattern != ExercisePattern::Pull)
            );
            assert_eq!(routine.warmup.duration_minutes, 12);
            assert_eq!(routine.cooldown.duration_minutes, 10);
            assert!(routine.finishers.is_empty());
            assert_eq!(routine.routine_name, "Power Push: Chest + Shoulders + Arms");
        }
    }

    #[test]
    fn test_single_group_split_day_capped() {
        for seed in 0..25 {
            let mut c = config(&[MuscleGroup::Chest]);
            c.movement_pattern = MovementPattern::Push;
            c.time_budget_minutes = 120;
            assert_eq!(effective_constraints(&c).max_exercises_per_muscle, 5);

            let routine = generate(&c, seed);
            // the cap wins over the shape minimum of 6
            assert!(routine.main_exercises.len() <= 5, "got {}", routine.main_exercises.len());
            assert!(routine.main_exercises.iter().all(|e| e.primary_muscle == MuscleGroup::Chest));
        }
    }

    #[test]
    fn test_main_in_display_order() {
        let routine = generate(&config(&[MuscleGroup::Chest, MuscleGroup::Back]), 3);
        for pair in routine.main_exercises.windows(2) {
            assert!(pair[0].tier.priority() <= pair[1].tier.priority());
            assert_eq!(pair[0].order + 1, pair[1].order);
        }
        assert_eq!(routine.main_exercises[0].order, 1);
    }

    #[test]
    fn test_finishers_core_before_cardio() {
        let mut c = config(&[MuscleGroup::Back]);
        c.include_cardio_finisher = true;
        c.include_core_finisher = true;
        let routine = generate(&c, 4);
        assert_eq!(routine.finishers.len(), 4);
        assert!(routine.finishers[..3].iter().all(|f| f.kind == FinisherKind::Core));
        assert_eq!(routine.finishers[3].kind, FinisherKind::Cardio);
    }

    #[test]
    fn test_finisher_flags_from_groups() {
        let c = config(&[MuscleGroup::Chest, MuscleGroup::Core, MuscleGroup::Cardio]);
        assert!(c.wants_core() && c.wants_cardio());
        let routine = generate(&c, 8);
        assert!(routine.cardio_finisher().is_some());
        assert_eq!(routine.core_finishers().count(), 3);
        // core and cardio are never main work
        assert!(routine.main_exercises.iter().all(|e| e.primary_muscle == MuscleGroup::Chest));
    }

    #[test]
    fn test_finisher_only_routine() {
        let c = config(&[MuscleGroup::Core, MuscleGroup::Cardio]);
        let routine = generate(&c, 2);
        assert!(routine.main_exercises.is_empty());
        assert_eq!(routine.finishers.len(), 4);
        assert_eq!(routine.routine_name, "Power Mixed: Core + Cardio");
    }

    #[test]
    fn test_totals() {
        let mut c = config(&[MuscleGroup::Chest, MuscleGroup::Back]);
        c.include_core_finisher = true;
        let routine = generate(&c, 6);

        let main_sets: u32 = routine.main_exercises.iter().map(|e| e.sets).sum();
        let finisher_sets: u32 = routine.finishers.iter().map(|f| f.sets).sum();
        assert_eq!(routine.total_sets, main_sets + finisher_sets);
        assert_eq!(
            routine.total_exercise_count,
            routine.main_exercises.len() + routine.finishers.len()
        );
        assert!(routine.total_time_minutes >= 22);
        assert!(routine.is_ai_generated);
    }

    #[test]
    fn test_same_seed_same_routine() {
        let c = config(&[MuscleGroup::Chest, MuscleGroup::Arms]);
        assert_eq!(generate(&c, 77), generate(&c, 77));
    }

    #[test]
    fn test_regenerate_main_keeps_other_sections() {
        use MuscleGroup::*;
        let catalog = StaticCatalog::default();
        let mut generator = RoutineGenerator::new(&catalog, StdRng::seed_from_u64(10));
        let mut c = config(&[Chest, Back, Legs, Shoulders]);
        c.include_cardio_finisher = true;
        let mut routine = generator.generate(&c);
        let finishers = routine.finishers.clone();
        let warmup = routine.warmup.clone();

        let main = generator.regenerate_main(&routine);
        assert!(main.len() <= 10);
        routine.replace_main(main.clone());

        assert_eq!(routine.main_exercises, main);
        assert_eq!(routine.finishers, finishers);
        assert_eq!(routine.warmup, warmup);
        assert_invariants(&c, &routine);
    }

    #[test]
    fn test_regenerate_core_beginner_count() {
        let catalog = StaticCatalog::default();
        let mut generator = RoutineGenerator::new(&catalog, StdRng::seed_from_u64(12));
        assert_eq!(generator.regenerate_core(ExperienceLevel::Beginner).len(), 2);
        assert_eq!(generator.regenerate_core(ExperienceLevel::Beginner).len(), 2);
    }

    #[test]
    fn test_replace_finishers_preserves_other_family() {
        let catalog = StaticCatalog::default();
        let mut generator = RoutineGenerator::new(&catalog, StdRng::seed_from_u64(13));
        let mut c = config(&[MuscleGroup::Legs]);
        c.include_cardio_finisher = true;
        c.include_core_finisher = true;
        let mut routine = generator.generate(&c);
        let cardio = routine.cardio_finisher().cloned().unwrap();

        let core = generator.regenerate_core(routine.level);
        routine.replace_core_finishers(core.clone());
        assert_eq!(routine.finishers.len(), core.len() + 1);
        assert_eq!(routine.cardio_finisher(), Some(&cardio));
        assert_eq!(routine.finishers[..core.len()], core[..]);

        let core_now: Vec<_> = routine.core_finishers().cloned().collect();
        let new_cardio = generator.regenerate_cardio(&routine.muscle_groups, routine.level);
        routine.replace_cardio_finisher(new_cardio.clone());
        assert_eq!(routine.core_finishers().cloned().collect::<Vec<_>>(), core_now);
        assert_eq!(routine.finishers.last(), Some(&new_cardio));
    }

    #[test]
    fn test_total_may_exceed_budget() {
        let mut c = config(&[MuscleGroup::Chest]);
        c.time_budget_minutes = 20;
        c.include_cardio_finisher = true;
        let routine = generate(&c, 1);
        // warm-up + cool-down + cardio alone are over 20 minutes
        assert!(routine.total_time_minutes > 20);
    }

    #[test]
    fn test_main_time_budget() {
        use ExperienceLevel::{Beginner, Moderate};
        let shape = WorkoutShape::detect(&[MuscleGroup::Chest], MovementPattern::Mixed, Moderate);
        assert_eq!(main_time_budget(65, Moderate, false, false, &shape), 43.0);
        assert_eq!(main_time_budget(65, Moderate, true, true, &shape), 23.0);
        assert_eq!(main_time_budget(10, Beginner, false, false, &shape), 0.0);

        let legs = WorkoutShape::detect(&[MuscleGroup::Legs], MovementPattern::Mixed, Beginner);
        assert_eq!(main_time_budget(65, Beginner, true, false, &legs), 40.0);
    }

    #[test]
    fn test_routine_names() {
        use MuscleGroup::*;
        assert_eq!(
            routine_name(&[Chest], ExperienceLevel::Beginner, MovementPattern::Mixed),
            "Foundation Chest Day"
        );
        assert_eq!(
            routine_name(&[Back, Core], ExperienceLevel::Advanced, MovementPattern::Pull),
            "Elite Back Day"
        );
        assert_eq!(
            routine_name(&[Chest, Back], ExperienceLevel::Moderate, MovementPattern::Mixed),
            "Power Mixed: Chest + Back"
        );
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(GenerationConfig::default().validate(), Err(ConfigError::NoMuscleGroups));
        assert!(config(&[MuscleGroup::Chest]).validate().is_ok());

        let mut c = config(MuscleGroup::all());
        assert_eq!(c.validate(), Err(ConfigError::TooManyMuscleGroups { max: 5, got: 7 }));
        c = config(&[MuscleGroup::Legs]);
        c.time_budget_minutes = 0;
        assert_eq!(c.validate(), Err(ConfigError::ZeroTimeBudget));
    }

    #[test]
    fn test_config_dedups_groups() {
        let c = config(&[MuscleGroup::Arms, MuscleGroup::Chest, MuscleGroup::Arms]);
        assert_eq!(c.muscle_groups, vec![MuscleGroup::Arms, MuscleGroup::Chest]);
        assert_eq!(c.time_budget_minutes, 65);
    }

    #[test]
    fn test_parse_config_enums() {
        assert_eq!(
            "compound_focus".parse::<ExercisePreference>().unwrap(),
            ExercisePreference::CompoundFocus
        );
        assert_eq!(
            "Isolation-Focus".parse::<ExercisePreference>().unwrap(),
            ExercisePreference::IsolationFocus
        );
        assert_eq!("PUSH".parse::<MovementPattern>().unwrap(), MovementPattern::Push);
        assert!("legs".parse::<MovementPattern>().is_err());
    }

    #[test]
    fn test_routine_json_round_trip_defaults_budget() {
        let routine = generate(&config(&[MuscleGroup::Shoulders]), 21);
        let mut json = serde_json::to_value(&routine).unwrap();
        json.as_object_mut().unwrap().remove("time_budget_minutes");
        let back: Routine = serde_json::from_value(json).unwrap();
        assert_eq!(back.time_budget_minutes, DEFAULT_TIME_BUDGET);
        assert_eq!(back.main_exercises, routine.main_exercises);
    }

    #[test]
    fn test_summary_lists_sections() {
        let mut c = config(&[MuscleGroup::Arms]);
        c.include_core_finisher = true;
        let routine = generate(&c, 30);
        let summary = routine.summary();
        assert!(summary.starts_with("Power Arms Day"));
        assert!(summary.contains("Warm-up (12 min)"));
        assert!(summary.contains("Finishers"));
        assert!(summary.contains("Cool-down (10 min)"));
    }
}
