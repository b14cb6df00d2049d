use anyhow::Result;
use indent_tracker_core::{Config, IndentTracker};
use indent_tracker_utils::get_indent_tracker_config;

/// Effective configuration shared by commands.
pub struct CommandContext {
    pub config: Config,
}

impl CommandContext {
    /// # Errors
    /// Returns error if retrieving the current directory or loading the config fails.
    pub async fn new() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let config = get_indent_tracker_config(&current_dir).await?;
        Ok(Self { config })
    }

    /// Fresh tracker, with `spaces` taking precedence over the configured width.
    #[must_use]
    pub fn tracker(&self, spaces: Option<i64>) -> IndentTracker {
        match spaces {
            Some(spaces) => IndentTracker::with_spaces_per_level(spaces),
            None => self.config.tracker(),
        }
    }
}
