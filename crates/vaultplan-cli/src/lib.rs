//! Command-line front end for the vaultplan planner.
//!
//! Resolves a [`PlannerConfig`] from the optional config file and flags,
//! runs one plan against the roster file and prints the winning chain.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use vaultplan::{
    plan_roster, save_outcome, PlanOutcome, PlannerConfig, Result, SelectionPolicy,
    VaultPlanError,
};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "vaultplan.toml";

#[derive(Debug, Parser)]
#[command(name = "vaultplan")]
#[command(version)]
#[command(about = "Plan the best sequence of dweller room changes")]
pub struct Cli {
    /// Maximum number of room changes in the plan
    pub depth: Option<String>,

    /// Roster file to read and overwrite
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Planner config file (TOML, or YAML by extension)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Selection policy: first-improvement or penalized
    #[arg(long)]
    pub policy: Option<SelectionPolicy>,

    /// Capacity of every room
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Print the plan without writing the roster
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the effective configuration: file first, then flags.
    pub fn resolve_config(&self) -> Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::load(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
                PlannerConfig::load(DEFAULT_CONFIG_PATH)?
            }
            None => PlannerConfig::default(),
        };

        if let Some(roster) = &self.roster {
            config = config.with_roster_path(roster);
        }
        if let Some(policy) = self.policy {
            config = config.with_selection_policy(policy);
        }
        if let Some(capacity) = self.capacity {
            config = config.with_room_capacity(capacity);
        }
        config.validate()?;
        Ok(config)
    }

    /// Depth from the positional argument, else from the config.
    pub fn resolve_depth(&self, config: &PlannerConfig) -> Result<usize> {
        match (self.depth.as_deref(), config.depth) {
            (None, Some(depth)) => Ok(depth),
            (raw, _) => VaultPlanError::parse_depth(raw),
        }
    }
}

/// Runs one plan, prints it to `out`, then saves the winning roster.
///
/// The plan is fully printed and flushed before the roster is touched.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<PlanOutcome> {
    let config = cli.resolve_config()?;
    let depth = cli.resolve_depth(&config)?;

    let outcome = plan_roster(&config, depth)?;
    print_outcome(&outcome, out)?;
    out.flush()?;

    if !cli.dry_run {
        save_outcome(&config, &outcome)?;
    }
    Ok(outcome)
}

/// Prints one line per move and a closing total.
pub fn print_outcome(outcome: &PlanOutcome, out: &mut impl Write) -> std::io::Result<()> {
    let (Some(vault), Some(score)) = (outcome.vault(), outcome.score()) else {
        return writeln!(out, "No winning move sequence");
    };

    for change in outcome.moves() {
        writeln!(out, "{}", change.display(vault))?;
    }
    writeln!(out, "Total: {}", score)
}
