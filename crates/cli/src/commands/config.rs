use anyhow::Result;
use clap::Args;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Show the effective indent-tracker configuration")]
pub struct ConfigArgs {}

/// Display the effective configuration
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(_args: &ConfigArgs) -> Result<String> {
    let context = CommandContext::new().await?;
    Ok(serde_json::to_string_pretty(&context.config)?)
}
