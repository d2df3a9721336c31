use std::process::Command;
use tempfile::TempDir;

#[test]
fn test_config_command_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_numcalc"))
        .arg("config")
        .current_dir(temp_dir.path())
        .env_remove("NUMCALC_CONFIG")
        .output()
        .expect("Failed to run config command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version = 1"));
    assert!(stdout.contains("on_invalid_token = \"stop\""));
}

#[test]
fn test_config_command_with_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    std::fs::write(&config_path, "version = 2\n[sum]\nprecision = 4\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_numcalc"))
        .arg("config")
        .arg("--config")
        .arg(&config_path)
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run config command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version = 2"));
    assert!(stdout.contains("precision = 4"));
}

#[test]
fn test_corrupted_config_exits_with_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "[sum\nprecision = ").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_numcalc"))
        .arg("--config")
        .arg(&config_path)
        .arg("sum")
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run sum command");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Configuration error"));
}
