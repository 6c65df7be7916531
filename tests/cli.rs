use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mixer_cmd() -> Command {
    Command::cargo_bin("rgba-mixer").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    mixer_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Color mixer with live RGBA sliders and preset colors",
        ))
        .stdout(predicate::str::contains("--preset"));
}

#[test]
fn unknown_preset_is_rejected() {
    mixer_cmd()
        .args(["--preset", "purple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset 'purple'"));
}

#[test]
fn print_config_path_honours_xdg_config_home() {
    let temp = TempDir::new().unwrap();
    let expected = temp.path().join("rgba-mixer").join("config.toml");

    mixer_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--print-config-path")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("rgba-mixer").join("config.toml");

    mixer_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[keybindings]"));

    mixer_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_and_print_flags_conflict() {
    mixer_cmd()
        .args(["--init-config", "--print-config-path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn schema_dump_is_json() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"startup\""))
        .stdout(predicate::str::contains("\"keybindings\""));
}
