use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_numcalc_in(dir: &Path, args: &[&str], stdin: impl AsRef<[u8]>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_numcalc"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("NUMCALC_CONFIG")
        .env_remove("NUMCALC_SUM__PRECISION")
        .env_remove("NUMCALC_SUM__ON_INVALID_TOKEN")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn numcalc");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_ref())
        .unwrap();
    child.wait_with_output().expect("Failed to wait for numcalc")
}

fn run_sum(stdin: impl AsRef<[u8]>) -> String {
    let temp_dir = TempDir::new().unwrap();
    let output = run_numcalc_in(temp_dir.path(), &["sum"], stdin);
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_sum_prints_prompt_and_total() {
    assert_eq!(
        run_sum("1.5 2.5 3\n"),
        "Enter numbers in one line separated by spaces:\nSum of 3 numbers: 7.5\n"
    );
}

#[test]
fn test_sum_empty_line() {
    assert!(run_sum("\n").ends_with("Numbers were not entered.\n"));
}

#[test]
fn test_sum_end_of_input() {
    assert!(run_sum("").ends_with("Numbers were not entered.\n"));
}

#[test]
fn test_sum_stops_at_first_non_number() {
    assert!(run_sum("4 abc 6\n").ends_with("Sum of 1 numbers: 4\n"));
}

#[test]
fn test_sum_uses_workspace_settings() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".numcalc");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("settings.toml"),
        "[sum]\non_invalid_token = \"skip\"\nprecision = 2\n",
    )
    .unwrap();

    let output = run_numcalc_in(temp_dir.path(), &["sum"], "4 abc 6\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("Sum of 2 numbers: 10.00\n"));
}

#[test]
fn test_sum_json_empty() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_numcalc_in(temp_dir.path(), &["sum", "--json"], "abc\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["status"], "empty");
    assert_eq!(value["message"], "Numbers were not entered.");
}

#[test]
fn test_sum_invalid_utf8_stops_like_any_non_number() {
    assert!(run_sum(b"1 2 \xff\n").ends_with("Sum of 2 numbers: 3\n"));
}

#[test]
fn test_sum_overflow_json_keeps_total() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_numcalc_in(temp_dir.path(), &["--json", "sum"], "1e308 1e308\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["data"]["count"], 2);
    assert_eq!(value["data"]["sum"], "inf");
    assert_eq!(value["message"], "Sum of 2 numbers: inf");
}
