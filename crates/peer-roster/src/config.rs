//! Configuration for the peer roster
//!
//! Loaded from TOML. Every key is optional and falls back to its default.
//!
//! ```toml
//! initial_filter = "connected"
//! initial_query = ""
//!
//! [labels]
//! not_available = "Not available"
//! rosenpass_enabled = "Enabled"
//! rosenpass_disabled = "Disabled"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{ConfigError, StatusFilter};

/// Placeholder and label texts used by the detail view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailLabels {
    /// Shown for empty optional fields
    pub not_available: String,
    pub rosenpass_enabled: String,
    pub rosenpass_disabled: String,
}

impl Default for DetailLabels {
    fn default() -> Self {
        Self {
            not_available: "Not available".to_string(),
            rosenpass_enabled: "Enabled".to_string(),
            rosenpass_disabled: "Disabled".to_string(),
        }
    }
}

/// Roster configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub labels: DetailLabels,
    /// Status filter a new roster starts with
    pub initial_filter: StatusFilter,
    /// Search text a new roster starts with
    pub initial_query: String,
}

impl RosterConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
