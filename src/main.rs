//! routine-forge - generate and reshuffle workout routines from the command line

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use routine_forge::exercises::{Catalog, ExperienceLevel, MuscleGroup};
use routine_forge::generator::{ExercisePreference, MovementPattern};
use routine_forge::{GenerationConfig, Routine, RoutineGenerator, StaticCatalog};

#[derive(Parser)]
#[command(name = "routine-forge")]
#[command(author, version, about = "Workout routine generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new routine
    Generate {
        /// Muscle groups, comma separated (chest, back, legs, shoulders, arms, core, cardio)
        #[arg(short, long, value_delimiter = ',', required = true)]
        groups: Vec<MuscleGroup>,

        /// beginner, moderate or advanced
        #[arg(short, long, env = "ROUTINE_LEVEL", default_value = "moderate")]
        level: ExperienceLevel,

        /// compound-focus, balanced or isolation-focus
        #[arg(short, long, env = "ROUTINE_PREFERENCE", default_value = "balanced")]
        preference: ExercisePreference,

        /// push, pull or mixed
        #[arg(long, env = "ROUTINE_PATTERN", default_value = "mixed")]
        pattern: MovementPattern,

        /// Append a cardio finisher
        #[arg(long)]
        cardio: bool,

        /// Append a core finisher
        #[arg(long)]
        core: bool,

        /// Total minutes available
        #[arg(short, long, env = "ROUTINE_TIME_BUDGET", default_value = "65")]
        time_budget: u32,

        /// Seed for a replayable routine
        #[arg(short, long, env = "ROUTINE_SEED")]
        seed: Option<u64>,

        /// Print JSON instead of the text preview
        #[arg(long)]
        json: bool,
    },

    /// Replace one section of a saved routine and print the result as JSON
    Regenerate {
        section: Section,

        /// Routine JSON produced by `generate --json`
        #[arg(short, long)]
        routine: PathBuf,

        #[arg(short, long, env = "ROUTINE_SEED")]
        seed: Option<u64>,
    },

    /// List catalog exercises
    Catalog {
        /// Only this muscle group
        #[arg(short, long)]
        group: Option<MuscleGroup>,

        #[arg(short, long, default_value = "moderate")]
        level: ExperienceLevel,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Section {
    Main,
    Core,
    Cardio,
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // stdout is reserved for routine output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let catalog = StaticCatalog::default();

    match cli.command {
        Commands::Generate {
            groups,
            level,
            preference,
            pattern,
            cardio,
            core,
            time_budget,
            seed,
            json,
        } => {
            let config = GenerationConfig {
                experience_level: level,
                exercise_preference: preference,
                movement_pattern: pattern,
                include_cardio_finisher: cardio,
                include_core_finisher: core,
                time_budget_minutes: time_budget,
                ..GenerationConfig::new(groups)
            };
            config.validate()?;

            let mut generator = RoutineGenerator::new(&catalog, rng(seed));
            let routine = generator.generate(&config);

            if json {
                println!("{}", serde_json::to_string_pretty(&routine)?);
            } else {
                println!("{}", routine.summary());
            }
        }

        Commands::Regenerate { section, routine, seed } => {
            let raw = fs::read_to_string(&routine)
                .with_context(|| format!("reading {}", routine.display()))?;
            let mut routine: Routine = serde_json::from_str(&raw).context("parsing routine JSON")?;
            let mut generator = RoutineGenerator::new(&catalog, rng(seed));

            match section {
                Section::Main => {
                    let main = generator.regenerate_main(&routine);
                    routine.replace_main(main);
                }
                Section::Core => {
                    let core = generator.regenerate_core(routine.level);
                    routine.replace_core_finishers(core);
                }
                Section::Cardio => {
                    let cardio = generator.regenerate_cardio(&routine.muscle_groups, routine.level);
                    routine.replace_cardio_finisher(cardio);
                }
            }

            println!("{}", serde_json::to_string_pretty(&routine)?);
        }

        Commands::Catalog { group, level } => {
            let groups: Vec<MuscleGroup> = match group {
                Some(group) => vec![group],
                None => MuscleGroup::all().to_vec(),
            };

            for group in groups {
                println!("{} ({})", group, level);
                println!("{:-<60}", "");
                for e in catalog.lookup(group, level) {
                    println!(
                        "{:28} | {:18} | {:9} | {:?}",
                        e.name,
                        format!("{:?}", e.tier),
                        e.tier.tag().label(),
                        e.pattern
                    );
                }
                println!();
            }
        }
    }

    Ok(())
}
