use std::{
    fs,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

use tally_backend::DEFAULT_CONFIG_FILE;

fn tally(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tally"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tally");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn log_contents(dir: &Path) -> String {
    fs::read_to_string(dir.join("output.tally.log")).unwrap()
}

#[test]
fn counts_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = tally(dir.path(), &[], "5\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        include_str!("expected/count_5.expected")
    );
    assert!(stderr(&output).is_empty());
}

#[test]
fn number_argument_counts_without_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let output = tally(dir.path(), &["3"], "");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "3, 2, 1\n1, 2, 3\n");
}

#[test]
fn non_positive_input_reports_invalid_range() {
    let dir = tempfile::tempdir().unwrap();
    let output = tally(dir.path(), &[], "0\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Type a number to count to: 0\n");
    assert!(stderr(&output).starts_with("error: invalid range"));
}

#[test]
fn malformed_input_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = tally(dir.path(), &[], "abc\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Type a number to count to: \n");
    assert!(stderr(&output).starts_with("error: `abc` is not a valid integer"));
}

#[test]
fn depth_flag_rejects_deep_counts() {
    let dir = tempfile::tempdir().unwrap();
    let output = tally(dir.path(), &["-d", "3", "--", "5"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: recursion depth 5 exceeds"));
}

#[test]
fn default_config_file_is_loaded_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "max_depth = 2\n").unwrap();

    let output = tally(dir.path(), &[], "3\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: recursion depth 3 exceeds the configured maximum of 2"));
    assert!(log_contents(dir.path())
        .contains("[INFO tally] loaded configuration from tally-config.toml"));
}

#[test]
fn broken_default_config_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "strategy = \"tail\"\n").unwrap();

    let output = tally(dir.path(), &[], "3\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.starts_with("error: cannot use config tally-config.toml"), "{stderr}");
    assert!(stdout(&output).is_empty());
}

#[test]
fn log_records_config_source_and_counts() {
    let dir = tempfile::tempdir().unwrap();
    let output = tally(dir.path(), &[], "2\n");
    assert_eq!(output.status.code(), Some(0));

    let log = log_contents(dir.path());
    assert!(log.contains("[INFO tally] no configuration file, using defaults"), "{log}");
    assert!(log.contains("[INFO tally_frontend::driver] counting with x = 2"), "{log}");
    assert!(log.contains("[DEBUG tally_backend::counter] counting backward from 2"), "{log}");
}
