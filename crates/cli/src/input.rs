use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Read the whole of `file`, or stdin when no file is given.
///
/// # Errors
/// Returns error if the file or stdin cannot be read as UTF-8.
pub async fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            tokio::io::stdin()
                .read_to_string(&mut content)
                .await
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}
