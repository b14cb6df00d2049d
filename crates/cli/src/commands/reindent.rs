use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, value_parser};
use indent_tracker_core::{Config, IndentTracker};
use indent_tracker_utils::{detect_indent, reindent};
use serde_json::json;

use crate::{context::CommandContext, input::read_input, options::FormatOptions};

#[derive(Args, Debug)]
#[command(about = "Re-indent text to the configured width per level")]
pub struct ReindentArgs {
    /// File to read; stdin when omitted
    file: Option<PathBuf>,

    /// Spaces per level, overriding the configured value
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        value_parser = value_parser!(i64).range(..=Config::MAX_SPACES_PER_LEVEL)
    )]
    spaces: Option<i64>,

    #[arg(short, long, default_value = "stdout")]
    format: FormatOptions,
}

/// Re-indent input lines
///
/// # Errors
/// Returns error if the config or the input cannot be read.
pub async fn handle_reindent(args: &ReindentArgs) -> Result<String> {
    let context = CommandContext::new().await?;
    let content = read_input(args.file.as_deref()).await?;
    Ok(render_reindent(
        &content,
        context.tracker(args.spaces),
        &args.format,
    ))
}

/// Re-indented lines joined for the terminal, or a JSON object with both widths.
pub fn render_reindent(content: &str, tracker: IndentTracker, format: &FormatOptions) -> String {
    let spaces_per_level = tracker.spaces_per_level();
    let lines = reindent(content, tracker);
    format.render(
        lines.join("\n"),
        &json!({
            "sourceWidth": detect_indent(content),
            "spacesPerLevel": spaces_per_level,
            "lines": lines,
        }),
    )
}
