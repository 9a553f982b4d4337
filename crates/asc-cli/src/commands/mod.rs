pub mod act;
pub mod award;
pub mod levels;
pub mod new;
pub mod next_level;
pub mod reward;

use std::borrow::Cow;
use std::path::Path;

use asc_engine::{
    ExperienceResponse, Notification, NotificationSink, SeededJitter, ServiceError,
};
use asc_tables::{ProgressionTables, standard_tables};
use colored::Colorize;

/// Load tables from `path`, or fall back to the built-in set.
pub fn load_tables(path: Option<&Path>) -> Result<Cow<'static, ProgressionTables>, String> {
    match path {
        Some(path) => {
            let tables = ProgressionTables::from_path(path).map_err(|e| e.to_string())?;
            tracing::debug!(version = tables.version(), "loaded tables from {}", path.display());
            Ok(Cow::Owned(tables))
        }
        None => Ok(Cow::Borrowed(standard_tables())),
    }
}

/// A reproducible jitter source when seeded, an OS-seeded one otherwise.
fn jitter(seed: Option<u64>) -> SeededJitter {
    seed.map_or_else(SeededJitter::from_os_rng, SeededJitter::from_seed)
}

fn service_error(err: ServiceError) -> String {
    err.to_string()
}

/// Prints level-up notifications to stdout.
///
/// Silent in JSON mode so stdout stays a single document.
struct ConsoleSink {
    quiet: bool,
}

impl NotificationSink for ConsoleSink {
    fn emit(&mut self, notification: Notification) -> Result<(), String> {
        if self.quiet {
            return Ok(());
        }
        println!();
        println!("  {}", notification.title.bold().yellow());
        for line in notification.message.lines() {
            println!("  {line}");
        }
        Ok(())
    }
}

/// Print an award outcome as text or JSON.
fn print_response(response: &ExperienceResponse, json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(response)
            .map_err(|e| format!("cannot serialize response: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let name = &response.character.name;
    if let Some(action) = &response.action {
        let outcome = if action.success { "success" } else { "failure" };
        println!(
            "  {} ({}, {}): {} XP",
            action.action_type, action.difficulty, outcome, action.xp_awarded
        );
    }
    println!(
        "  {} gained {} XP (total {})",
        name.bold(),
        response.xp_gained,
        response.xp_total
    );
    if response.new_level > response.previous_level {
        println!(
            "  Level {} → {}",
            response.previous_level,
            response.new_level.to_string().green().bold()
        );
    } else {
        println!("  Level {}", response.new_level);
    }
    Ok(())
}
