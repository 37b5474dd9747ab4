mod common;

use common::{run_vidsum, TestEnv};

#[test]
fn vidsum_help_shows_usage() {
    let output = run_vidsum(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("serve"));
    assert!(
        !stderr.contains("No config file found"),
        "--help should not log config fallback noise\nstderr:\n{}",
        stderr
    );
}

#[test]
fn vidsum_version_shows_version() {
    let output = run_vidsum(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("vidsum "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_vidsum(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("vidsum"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_show_works() {
    let output = run_vidsum(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[server]"));
    assert!(stdout.contains("status_codes = \"literal\""));
    assert!(stdout.contains("[llm]"));
}

#[test]
fn config_path_returns_valid_path() {
    let output = run_vidsum(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let env = TestEnv::new();

    let first = env.run(&["config", "init"]);
    assert!(
        first.status.success(),
        "config init should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&first.stderr)
    );
    assert!(env.config_path().exists());

    let second = env.run(&["config", "init"]);
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("--force"));

    let forced = env.run(&["config", "init", "--force"]);
    assert!(forced.status.success());
}

#[test]
fn config_file_values_are_shown() {
    let env = TestEnv::new();
    env.write_config("[server]\nport = 4321\n");

    let output = env.run(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("port = 4321"), "stdout:\n{}", stdout);
}
