// Content Ranker - Settings
// Optional JSON config for the starting state of a session.
// Only configuration lives here; ideas and weights are never written to disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_FILTER;
use crate::error::Result;
use crate::weights::Preset;

/// Settings schema version
const SETTINGS_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub version: u32,
    /// Weights a new session starts with
    pub starting_preset: Preset,
    /// Seed the "Sample Video 1" idea into a new session
    pub seed_sample: bool,
    /// tracing EnvFilter directive, used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            starting_preset: Preset::Balanced,
            seed_sample: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&raw)?;
        if settings.version != SETTINGS_VERSION {
            log::warn!(
                "Settings file {} has version {}, expected {}",
                path.display(),
                settings.version,
                SETTINGS_VERSION
            );
        }
        Ok(settings)
    }

    /// Load from `path` when given, otherwise defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
