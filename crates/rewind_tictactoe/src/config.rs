//! Session configuration.

use super::error::ConfigError;
use super::history::HistoryDirection;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the direction flag affects the move list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveListOrder {
    /// The flag is stored and toggled but the list is always oldest first.
    #[default]
    Inert,
    /// A descending direction lists the newest step first.
    FollowDirection,
}

/// Configuration for a game session.
///
/// ```toml
/// move_list_order = "follow_direction"
/// initial_direction = "descending"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Whether the direction flag reorders the move list.
    #[serde(default)]
    move_list_order: MoveListOrder,

    /// Direction the session starts with.
    #[serde(default)]
    initial_direction: HistoryDirection,
}

impl SessionConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(move_list_order: MoveListOrder, initial_direction: HistoryDirection) -> Self {
        Self {
            move_list_order,
            initial_direction,
        }
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        debug!(?config, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        info!(
            move_list_order = ?config.move_list_order,
            initial_direction = ?config.initial_direction,
            "Config loaded successfully"
        );
        Ok(config)
    }
}
