use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(work_dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_venv-bootstrap"))
        .args(args)
        .current_dir(work_dir.path())
        .env("PATH", "")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_failed_step_exits_with_one() {
    let work_dir = TempDir::new().unwrap();

    let output = run_cli(&work_dir, &["version"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No installations of uv found"), "{}", stdout);
    assert!(stdout.contains("[-] Exiting..."), "{}", stdout);
}

#[test]
fn test_invalid_config_exits_with_two() {
    let work_dir = TempDir::new().unwrap();
    let config_path = work_dir.path().join("broken.toml");
    fs::write(&config_path, "venv_dir = 1\n").unwrap();

    let output = run_cli(&work_dir, &["--config", config_path.to_str().unwrap(), "version"]);

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("[-] Exiting..."), "{}", stdout);
}

#[test]
fn test_invalid_config_value_exits_with_two() {
    let work_dir = TempDir::new().unwrap();
    fs::write(work_dir.path().join("venv-bootstrap.toml"), "tool = \"u v\"\n").unwrap();

    let output = run_cli(&work_dir, &["version"]);

    assert_eq!(output.status.code(), Some(2));
}
