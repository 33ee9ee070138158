use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use initiative_tracker::{Command, Tracker, TrackerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Track turns in a tabletop combat encounter")]
struct Cli {
    /// TOML file with a starting roster and log filter.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Add a combatant to the starting roster (repeatable).
    #[arg(long = "combatant", short = 'c')]
    combatants: Vec<String>,

    /// Print the current snapshot as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TrackerConfig::from_path(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => TrackerConfig::default(),
    }
    .with_roster(cli.combatants.iter().cloned());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_deref().unwrap_or("warn")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();

    let mut tracker = Tracker::from_config(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    render(&tracker, cli.json, &mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let result = line
            .parse::<Command>()
            .and_then(|command| tracker.apply(command));
        if let Err(err) = result {
            writeln!(stdout, "error: {err}")?;
        }
        render(&tracker, cli.json, &mut stdout)?;
    }
    Ok(())
}

fn render(tracker: &Tracker, json: bool, out: &mut impl Write) -> Result<()> {
    match tracker.encounter() {
        Some(fight) if json => {
            writeln!(out, "{}", serde_json::to_string(fight.current())?)?;
        }
        Some(fight) => {
            write!(out, "{}", fight.current())?;
            writeln!(
                out,
                "  undo: {}  redo: {}",
                fight.can_undo(),
                fight.can_redo()
            )?;
        }
        None if json => {
            writeln!(out, "{}", serde_json::to_string(tracker.roster())?)?;
        }
        None => {
            writeln!(out, "Roster")?;
            for (i, name) in tracker.roster().names().iter().enumerate() {
                writeln!(out, "  [{i}] {name}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
