//! Configuration system for vaultplan.
//!
//! Load planner configuration from TOML or YAML files to choose room
//! capacities and the selection policy without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use vaultplan_config::{PlannerConfig, SelectionPolicy};
//! use vaultplan_core::Room;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     room_capacity = 4
//!     selection_policy = "first_improvement"
//!     depth = 2
//!
//!     [[capacity_overrides]]
//!     room = "L"
//!     capacity = 2
//! "#).unwrap();
//!
//! assert_eq!(config.selection_policy, SelectionPolicy::FirstImprovement);
//! assert_eq!(config.capacity().get(Room::Strength), 4);
//! assert_eq!(config.capacity().get(Room::Luck), 2);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use vaultplan_config::PlannerConfig;
//!
//! let config = PlannerConfig::load("vaultplan.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vaultplan_core::{Room, RoomCapacity, VaultPlanError};

/// Capacity of every room in the penalized preset.
pub const DEFAULT_ROOM_CAPACITY: usize = 6;

/// Capacity of every room in the first-improvement preset.
pub const FIRST_IMPROVEMENT_ROOM_CAPACITY: usize = 4;

/// Default roster file name.
pub const DEFAULT_ROSTER_PATH: &str = "dwellers.txt";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for VaultPlanError {
    fn from(err: ConfigError) -> Self {
        VaultPlanError::Config(err.to_string())
    }
}

/// Main planner configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Capacity of every room unless overridden.
    pub room_capacity: usize,

    /// Per-room capacity overrides, applied in order.
    pub capacity_overrides: Vec<CapacityOverride>,

    /// How the best chain is picked from the search results.
    pub selection_policy: SelectionPolicy,

    /// Search depth used when none is given on the command line.
    pub depth: Option<usize>,

    /// Roster file read at start and overwritten with the result.
    pub roster_path: PathBuf,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::penalized()
    }
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset: capacity 4, first-improvement selection.
    pub fn first_improvement() -> Self {
        Self {
            room_capacity: FIRST_IMPROVEMENT_ROOM_CAPACITY,
            capacity_overrides: Vec::new(),
            selection_policy: SelectionPolicy::FirstImprovement,
            depth: None,
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
        }
    }

    /// Preset: capacity 6, penalized selection.
    pub fn penalized() -> Self {
        Self {
            room_capacity: DEFAULT_ROOM_CAPACITY,
            capacity_overrides: Vec::new(),
            selection_policy: SelectionPolicy::Penalized,
            depth: None,
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
        }
    }

    /// Loads configuration from a file, YAML for `.yaml`/`.yml` and TOML
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every room can hold at least one dweller by default.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_capacity == 0 {
            return Err(ConfigError::Invalid(
                "room_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the capacity of every room.
    pub fn with_room_capacity(mut self, capacity: usize) -> Self {
        self.room_capacity = capacity;
        self
    }

    /// Overrides the capacity of a single room.
    pub fn with_capacity_override(mut self, room: Room, capacity: usize) -> Self {
        self.capacity_overrides
            .push(CapacityOverride { room, capacity });
        self
    }

    /// Sets the selection policy.
    pub fn with_selection_policy(mut self, policy: SelectionPolicy) -> Self {
        self.selection_policy = policy;
        self
    }

    /// Sets the default search depth.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Sets the roster file path.
    pub fn with_roster_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.roster_path = path.into();
        self
    }

    /// Returns the effective capacity table.
    pub fn capacity(&self) -> RoomCapacity {
        self.capacity_overrides.iter().fold(
            RoomCapacity::uniform(self.room_capacity),
            |capacity, o| capacity.with_room(o.room, o.capacity),
        )
    }
}

/// Capacity of one specific room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CapacityOverride {
    pub room: Room,
    pub capacity: usize,
}

/// Policy used to pick the winning chain from all search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Strictly greatest raw score; any result leaving a dweller maxed is
    /// disqualified. Ties keep the first result found.
    FirstImprovement,

    /// Score minus 100 per maxed dweller, compared against the unchanged
    /// vault. Ties prefer the shorter chain.
    #[default]
    Penalized,
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::FirstImprovement => write!(f, "first-improvement"),
            SelectionPolicy::Penalized => write!(f, "penalized"),
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "first-improvement" => Ok(SelectionPolicy::FirstImprovement),
            "penalized" => Ok(SelectionPolicy::Penalized),
            other => Err(ConfigError::Invalid(format!(
                "unknown selection policy '{}'",
                other
            ))),
        }
    }
}
