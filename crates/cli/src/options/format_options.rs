use clap::ValueEnum;
use serde_json::Value;

/// CLI output format selection.
///
/// Controls whether commands print human-readable output or JSON for scripting.
#[derive(Debug, Clone, Default, ValueEnum)]
pub enum FormatOptions {
    /// JSON format for scripts and pipelines
    #[value(name = "json")]
    Json,
    /// Human-readable terminal output
    #[default]
    #[value(name = "stdout")]
    Stdout,
}

impl FormatOptions {
    /// Pick the rendering matching this format.
    #[must_use]
    pub fn render(&self, stdout_msg: String, json_msg: &Value) -> String {
        match self {
            Self::Stdout => stdout_msg,
            Self::Json => json_msg.to_string(),
        }
    }
}
