//! One full planning run against a roster file.

use tracing::{debug, info};
use vaultplan_config::PlannerConfig;
use vaultplan_core::{load_roster, save_roster, Result};
use vaultplan_solver::{PlanOutcome, Planner};

/// Per-run settings that do not belong in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Maximum number of room changes in a chain.
    pub depth: usize,
    /// Skip writing the winning roster back.
    pub dry_run: bool,
}

impl RunOptions {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Loads the roster at `config.roster_path` and plans up to `depth` moves.
///
/// Nothing is written.
///
/// # Errors
///
/// Returns [`VaultPlanError::InputFormat`](vaultplan_core::VaultPlanError::InputFormat)
/// when the roster cannot be read or parsed.
pub fn plan_roster(config: &PlannerConfig, depth: usize) -> Result<PlanOutcome> {
    let path = &config.roster_path;
    let vault = load_roster(path)?;
    debug!(
        event = "roster_loaded",
        path = %path.display(),
        dweller_count = vault.len() as u64,
    );

    Ok(Planner::new(config.clone()).plan(&vault, depth))
}

/// Overwrites `config.roster_path` with the winning vault of `outcome`.
///
/// Returns `false` without touching the file when there is no winner.
/// The write is not atomic.
pub fn save_outcome(config: &PlannerConfig, outcome: &PlanOutcome) -> Result<bool> {
    let Some(best) = outcome.vault() else {
        return Ok(false);
    };

    let path = &config.roster_path;
    save_roster(path, best)?;
    info!(
        event = "roster_saved",
        path = %path.display(),
        dweller_count = best.len() as u64,
    );
    Ok(true)
}

/// Plans against the roster file and saves the winner unless `dry_run` is set.
pub fn plan_roster_file(config: &PlannerConfig, options: RunOptions) -> Result<PlanOutcome> {
    let outcome = plan_roster(config, options.depth)?;
    if !options.dry_run {
        save_outcome(config, &outcome)?;
    }
    Ok(outcome)
}
