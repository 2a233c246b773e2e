//! Error types for vaultplan

use std::num::ParseIntError;

use thiserror::Error;

use crate::roster::RosterError;

/// Main error type for vaultplan operations
#[derive(Debug, Error)]
pub enum VaultPlanError {
    /// Malformed line in the persisted roster
    #[error("Input format error: {0}")]
    InputFormat(#[from] RosterError),

    /// No search depth was supplied
    #[error("Missing search depth argument")]
    MissingDepth,

    /// The search depth could not be parsed as an integer
    #[error("Search depth must be an integer, got '{raw}'")]
    InvalidDepth {
        raw: String,
        #[source]
        source: ParseIntError,
    },

    /// Error in planner configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error outside the roster parser
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VaultPlanError {
    /// Parses a raw depth argument, mapping failures to the depth errors.
    ///
    /// ```
    /// use vaultplan_core::VaultPlanError;
    ///
    /// assert_eq!(VaultPlanError::parse_depth(Some("3")).unwrap(), 3);
    /// assert!(matches!(
    ///     VaultPlanError::parse_depth(None),
    ///     Err(VaultPlanError::MissingDepth)
    /// ));
    /// ```
    pub fn parse_depth(raw: Option<&str>) -> Result<usize> {
        let raw = raw.ok_or(VaultPlanError::MissingDepth)?;
        raw.trim()
            .parse::<usize>()
            .map_err(|source| VaultPlanError::InvalidDepth {
                raw: raw.to_string(),
                source,
            })
    }
}

/// Result type alias for vaultplan operations
pub type Result<T> = std::result::Result<T, VaultPlanError>;
