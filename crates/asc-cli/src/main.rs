//! CLI frontend for the Ascend character progression engine.

mod commands;
mod store;

use std::path::PathBuf;
use std::process;

use asc_tables::ProgressionTables;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "ascend",
    about = "Ascend: experience, levels, and abilities for RPG characters",
    version,
    propagate_version = true
)]
struct Cli {
    /// Load progression tables from a JSON file instead of the built-in set
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new level-1 character file
    New {
        /// Character name
        name: String,

        /// Character class (e.g. warrior, wizard, rogue)
        #[arg(short, long, default_value = "warrior")]
        class: String,

        /// Output file (default: `<name>.json`)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Owning user id; a fresh one is generated if omitted
        #[arg(long)]
        owner: Option<uuid::Uuid>,
    },

    /// Calculate the XP reward for an action without awarding it
    Reward {
        /// Action type (combat, quest, puzzle, exploration, roleplay, crafting)
        action: String,

        /// Difficulty label
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// The action failed
        #[arg(long)]
        failed: bool,

        /// RNG seed for a reproducible reward
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Award a fixed amount of XP to a character
    Award {
        /// Character file
        file: PathBuf,

        /// XP to add (must be positive)
        #[arg(allow_negative_numbers = true)]
        xp: i64,

        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reward a character for an in-game action
    Act {
        /// Character file
        file: PathBuf,

        /// Action type
        action: String,

        /// Difficulty label
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// The action failed
        #[arg(long)]
        failed: bool,

        /// RNG seed for a reproducible reward
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show progress toward the next level
    NextLevel {
        /// Character file
        file: PathBuf,
    },

    /// List level thresholds, optionally with a class's bonus schedule
    Levels {
        /// Show the bonuses this class gains at each level
        #[arg(short, long)]
        class: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = commands::load_tables(cli.tables.as_deref()).and_then(|tables| {
        let tables: &ProgressionTables = &tables;
        match cli.command {
            Commands::New {
                name,
                class,
                out,
                owner,
            } => commands::new::run(tables, &name, &class, out.as_deref(), owner),
            Commands::Reward {
                action,
                difficulty,
                failed,
                seed,
            } => commands::reward::run(tables, &action, &difficulty, !failed, seed),
            Commands::Award { file, xp, json } => commands::award::run(tables, &file, xp, json),
            Commands::Act {
                file,
                action,
                difficulty,
                failed,
                seed,
                json,
            } => commands::act::run(tables, &file, &action, &difficulty, !failed, seed, json),
            Commands::NextLevel { file } => commands::next_level::run(tables, &file),
            Commands::Levels { class } => commands::levels::run(tables, class.as_deref()),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
