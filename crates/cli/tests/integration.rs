use indent_tracker_cli::AlreadyInitialized;
use serial_test::serial;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn args(values: &[&str]) -> Vec<String> {
    std::iter::once("indent-tracker")
        .chain(values.iter().copied())
        .map(String::from)
        .collect()
}

/// Run the CLI with `dir` as the working directory, restoring the original afterwards.
async fn run_in(dir: &Path, values: &[&str]) -> anyhow::Result<String> {
    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir).unwrap();
    let result = indent_tracker_cli::render(&args(values)).await;
    std::env::set_current_dir(&original_dir).unwrap();
    result
}

fn write_input(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("input.txt");
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
#[serial]
async fn test_cli_init_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    let output = run_in(temp_path, &["init", "--dry-run"]).await.unwrap();

    assert!(output.starts_with("indent-tracker initialized in"));
    assert!(!temp_path.join(".indent-tracker/config.json").exists());
}

#[tokio::test]
#[serial]
async fn test_cli_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    let output = run_in(temp_path, &["init"]).await.unwrap();

    assert!(output.contains(".indent-tracker"));
    let content = std::fs::read_to_string(temp_path.join(".indent-tracker/config.json")).unwrap();
    assert!(content.contains("\"spacesPerLevel\": 2"));
}

#[tokio::test]
#[serial]
async fn test_cli_init_twice_fails() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    run_in(temp_path, &["init"]).await.unwrap();
    let err = run_in(temp_path, &["init"]).await.unwrap_err();

    assert!(err.downcast_ref::<AlreadyInitialized>().is_some());
}

#[tokio::test]
#[serial]
async fn test_cli_config_without_file() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["config"]).await.unwrap();

    assert_eq!(output, "{\n  \"spacesPerLevel\": 2\n}");
}

#[tokio::test]
#[serial]
async fn test_cli_config_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();
    std::fs::create_dir_all(temp_path.join(".indent-tracker")).unwrap();
    std::fs::write(temp_path.join(".indent-tracker/config.json"), "not json").unwrap();

    let err = run_in(temp_path, &["config"]).await.unwrap_err();

    assert!(err.to_string().contains("Failed to parse config file"));
}

#[tokio::test]
#[serial]
async fn test_cli_format_file_json() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();
    let input = write_input(temp_path, "first\n\nsecond\n");

    let output = run_in(
        temp_path,
        &["format", input.to_str().unwrap(), "--level", "2", "--format", "json"],
    )
    .await
    .unwrap();

    assert_eq!(
        output,
        r#"{"level":2,"lines":["    first","","    second"],"spacesPerLevel":2}"#
    );
}

#[tokio::test]
#[serial]
async fn test_cli_format_uses_configured_width() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();
    std::fs::create_dir_all(temp_path.join(".indent-tracker")).unwrap();
    std::fs::write(
        temp_path.join(".indent-tracker/config.json"),
        r#"{"spacesPerLevel": 4}"#,
    )
    .unwrap();
    let input = write_input(temp_path, "first\n\nsecond\n");

    let configured = run_in(temp_path, &["format", input.to_str().unwrap()])
        .await
        .unwrap();
    let overridden = run_in(
        temp_path,
        &["format", input.to_str().unwrap(), "--spaces", "1"],
    )
    .await
    .unwrap();

    assert_eq!(configured, "    first\n\n    second");
    assert_eq!(overridden, " first\n\n second");
}

#[tokio::test]
#[serial]
async fn test_cli_format_rejects_oversized_config() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();
    std::fs::create_dir_all(temp_path.join(".indent-tracker")).unwrap();
    std::fs::write(
        temp_path.join(".indent-tracker/config.json"),
        r#"{"spacesPerLevel": 9223372036854775807}"#,
    )
    .unwrap();
    let input = write_input(temp_path, "first\n");

    let err = run_in(temp_path, &["format", input.to_str().unwrap()])
        .await
        .unwrap_err();

    assert!(err.to_string().contains("exceeds the maximum"));
}

#[tokio::test]
#[serial]
async fn test_cli_format_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();
    let missing = temp_path.join("missing.txt");

    let result = run_in(temp_path, &["format", missing.to_str().unwrap()]).await;

    assert!(result.is_err());
}

#[tokio::test]
#[serial]
async fn test_cli_detect_file() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();
    let input = write_input(temp_path, "root\n    child\n");

    let output = run_in(
        temp_path,
        &["detect", input.to_str().unwrap(), "--format", "json"],
    )
    .await
    .unwrap();

    assert_eq!(output, r#"{"spacesPerLevel":4}"#);
}

#[tokio::test]
#[serial]
async fn test_cli_reindent_spaces_override_config() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();
    run_in(temp_path, &["init"]).await.unwrap();
    let input = write_input(temp_path, "root\n    child\n        grandchild\n");

    let configured = run_in(temp_path, &["reindent", input.to_str().unwrap()])
        .await
        .unwrap();
    let overridden = run_in(
        temp_path,
        &["reindent", input.to_str().unwrap(), "--spaces", "3"],
    )
    .await
    .unwrap();

    assert_eq!(configured, "root\n  child\n    grandchild");
    assert_eq!(overridden, "root\n   child\n      grandchild");
}
