use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use indent_tracker_utils::detect_indent;
use serde_json::json;

use crate::{input::read_input, options::FormatOptions};

#[derive(Args, Debug)]
#[command(about = "Detect the indentation width used by a file")]
pub struct DetectArgs {
    /// File to inspect; stdin when omitted
    file: Option<PathBuf>,

    #[arg(short, long, default_value = "stdout")]
    format: FormatOptions,
}

/// Report the indentation width of the first indented line
///
/// # Errors
/// Returns error if the input cannot be read.
pub async fn handle_detect(args: &DetectArgs) -> Result<String> {
    let content = read_input(args.file.as_deref()).await?;
    Ok(render_detect(&content, &args.format))
}

pub fn render_detect(content: &str, format: &FormatOptions) -> String {
    let width = detect_indent(content);
    format.render(display_width(width), &json!({ "spacesPerLevel": width }))
}

fn display_width(width: usize) -> String {
    if width == 0 {
        format!("{}", "No indentation found".yellow())
    } else {
        format!(
            "{} {}",
            "Indentation width:".bright_blue().bold(),
            width.to_string().bright_green()
        )
    }
}
