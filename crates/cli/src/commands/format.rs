use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, builder::RangedU64ValueParser, value_parser};
use indent_tracker_core::{Config, IndentTracker};
use serde_json::json;

use crate::{context::CommandContext, input::read_input, options::FormatOptions};

#[derive(Args, Debug)]
#[command(about = "Indent every line by a fixed number of levels")]
pub struct FormatArgs {
    /// File to read; stdin when omitted
    file: Option<PathBuf>,

    /// Levels of indentation applied to each line
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=Config::MAX_LEVEL)
    )]
    level: usize,

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

/// Indent input lines
///
/// # Errors
/// Returns error if the config or the input cannot be read.
pub async fn handle_format(args: &FormatArgs) -> Result<String> {
    let context = CommandContext::new().await?;
    let content = read_input(args.file.as_deref()).await?;
    let mut tracker = context.tracker(args.spaces);
    tracker.increment_by(args.level);
    tracing::debug!(
        level = tracker.level(),
        spaces_per_level = tracker.spaces_per_level(),
        "formatting input"
    );
    Ok(render_format(&content, &tracker, &args.format))
}

/// Format each line of `content` at the tracker's current level.
pub fn indent_lines(content: &str, tracker: &IndentTracker) -> Vec<String> {
    content.lines().map(|line| tracker.format(line)).collect()
}

/// Indented lines joined for the terminal, or a JSON object with the tracker state.
pub fn render_format(content: &str, tracker: &IndentTracker, format: &FormatOptions) -> String {
    let lines = indent_lines(content, tracker);
    format.render(
        lines.join("\n"),
        &json!({
            "spacesPerLevel": tracker.spaces_per_level(),
            "level": tracker.level(),
            "lines": lines,
        }),
    )
}
