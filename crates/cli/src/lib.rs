use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Once;

use crate::commands::{
    ConfigArgs, DetectArgs, FormatArgs, InitArgs, ReindentArgs, handle_config, handle_detect,
    handle_format, handle_init, handle_reindent,
};
pub mod commands;
pub mod context;
mod input;
pub mod options;

pub use commands::AlreadyInitialized;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only active when `RUST_LOG` is set, e.g. `RUST_LOG=indent_tracker_core=debug`.
/// Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

#[derive(Parser, Debug)]
#[command(
    name = "indent-tracker",
    author,
    version,
    about = "Render nested text with a tracked indentation level",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Init(InitArgs),
    Config(ConfigArgs),
    Format(FormatArgs),
    Detect(DetectArgs),
    Reindent(ReindentArgs),
}

/// Run the CLI and print the command's output.
///
/// # Errors
/// Returns error if the selected command fails.
pub async fn main(args: &[String]) -> Result<()> {
    init_tracing();
    let output = render(args).await?;
    println!("{output}");
    Ok(())
}

/// Run the command selected by `args` and return the text `main` prints.
///
/// # Errors
/// Returns error if the selected command fails.
pub async fn render(args: &[String]) -> Result<String> {
    let cli = Cli::parse_from(args);
    match cli.command {
        Commands::Init(args) => handle_init(&args).await,
        Commands::Config(args) => handle_config(&args).await,
        Commands::Format(args) => handle_format(&args).await,
        Commands::Detect(args) => handle_detect(&args).await,
        Commands::Reindent(args) => handle_reindent(&args).await,
    }
}
