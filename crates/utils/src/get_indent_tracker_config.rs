use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use indent_tracker_core::Config;
use tokio::fs::{metadata, read_to_string};

pub const CONFIG_DIR_NAME: &str = ".indent-tracker";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// `.indent-tracker` directory belonging to `dir`.
pub fn get_indent_tracker_dir(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR_NAME)
}

/// Nearest `.indent-tracker/config.json`, searching `current_dir` and then its ancestors.
pub async fn find_config_path(current_dir: &Path) -> Option<PathBuf> {
    for dir in current_dir.ancestors() {
        let path = get_indent_tracker_dir(dir).join(CONFIG_FILE_NAME);
        if metadata(&path).await.is_ok_and(|meta| meta.is_file()) {
            return Some(path);
        }
    }
    None
}

/// Load the nearest configuration, falling back to [`Config::default`] when none exists.
///
/// # Errors
/// Returns error if the config file exists but cannot be read, is not valid JSON,
/// or sets `spacesPerLevel` above [`Config::MAX_SPACES_PER_LEVEL`].
pub async fn get_indent_tracker_config(current_dir: &Path) -> Result<Config> {
    let Some(config_path) = find_config_path(current_dir).await else {
        tracing::debug!(dir = %current_dir.display(), "no config found, using defaults");
        return Ok(Config::default());
    };
    tracing::debug!(path = %config_path.display(), "loading config");
    let content = read_to_string(&config_path)
        .await
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
    ensure!(
        config.is_within_bounds(),
        "spacesPerLevel {} in {} exceeds the maximum of {}",
        config.spaces_per_level,
        config_path.display(),
        Config::MAX_SPACES_PER_LEVEL
    );
    Ok(config)
}
