use serde::{Deserialize, Serialize};

use crate::tracker::{DEFAULT_SPACES_PER_LEVEL, IndentTracker};

/// Loaded from `.indent-tracker/config.json`, controls how wide each indentation level is.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Spaces per indentation level. Negative values are kept as written and clamp to 0
    /// when a tracker is built.
    #[serde(default = "default_spaces_per_level")]
    pub spaces_per_level: i64,
}

fn default_spaces_per_level() -> i64 {
    DEFAULT_SPACES_PER_LEVEL as i64
}

impl Config {
    /// Largest width per level accepted from a config file or the command line.
    pub const MAX_SPACES_PER_LEVEL: i64 = 1024;
    /// Largest level accepted from the command line.
    pub const MAX_LEVEL: u64 = 1024;

    /// Whether `spaces_per_level` is small enough to format with.
    ///
    /// Negative widths are in bounds since they clamp to 0.
    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        self.spaces_per_level <= Self::MAX_SPACES_PER_LEVEL
    }

    /// Fresh tracker at root level using this configuration.
    #[must_use]
    pub fn tracker(&self) -> IndentTracker {
        IndentTracker::with_spaces_per_level(self.spaces_per_level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spaces_per_level: default_spaces_per_level(),
        }
    }
}
