use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indent_tracker_core::Config;
use indent_tracker_utils::{CONFIG_FILE_NAME, get_indent_tracker_dir};
use thiserror::Error;
use tokio::fs::{OpenOptions, create_dir_all, try_exists};
use tokio::io::AsyncWriteExt;

/// Returned when `.indent-tracker/config.json` already exists.
#[derive(Debug, Error)]
#[error("indent-tracker already initialized in {}", .0.display())]
pub struct AlreadyInitialized(pub PathBuf);

#[derive(Args, Debug)]
#[command(about = "Initialize indent-tracker configuration in the current directory")]
pub struct InitArgs {
    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

/// Initialize indent-tracker configuration in the current directory
///
/// # Errors
/// Returns error if the configuration already exists or cannot be written.
pub async fn handle_init(args: &InitArgs) -> Result<String> {
    let current_dir = std::env::current_dir()?;
    let config_dir = init_config(&current_dir, args.dry_run).await?;
    Ok(format!(
        "indent-tracker initialized in {}",
        config_dir.display()
    ))
}

/// Write the default config under `dir`, returning the config directory.
///
/// The file is created with `create_new`, so an existing config is never overwritten.
///
/// # Errors
/// Returns [`AlreadyInitialized`] if a config file is present, or an IO error.
pub async fn init_config(dir: &Path, dry_run: bool) -> Result<PathBuf> {
    let config_dir = get_indent_tracker_dir(dir);
    let config_file = config_dir.join(CONFIG_FILE_NAME);
    if dry_run {
        if try_exists(&config_file).await? {
            return Err(AlreadyInitialized(config_dir).into());
        }
        return Ok(config_dir);
    }

    create_dir_all(&config_dir).await?;
    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&config_file)
        .await
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(AlreadyInitialized(config_dir).into());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to create {}", config_file.display()));
        }
    };
    file.write_all(serde_json::to_string_pretty(&Config::default())?.as_bytes())
        .await?;
    file.flush().await?;
    tracing::debug!(path = %config_file.display(), "initialized config");
    Ok(config_dir)
}
