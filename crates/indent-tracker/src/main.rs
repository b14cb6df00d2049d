use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = std::env::args().collect::<Vec<String>>();
    match indent_tracker_cli::main(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // `:#` prints the context chain
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
