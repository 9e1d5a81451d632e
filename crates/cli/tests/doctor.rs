use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[parsing]
formats = ["%d.%m.%Y"]

[output]
format = "json"
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agecalc"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   agecalc doctor"))
        .stdout(predicate::str::contains("parsing.formats: %d.%m.%Y"))
        .stdout(predicate::str::contains("output.format: json"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("agecalc").join("config.toml");
    write_file(&cfg_path, "version = 1\n[logging]\nlevel = \"warn\"\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agecalc"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   agecalc doctor"))
        .stdout(predicate::str::contains("logging.level: warn"));
}

#[test]
fn doctor_without_config_reports_defaults() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agecalc"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("path: (defaults, no file at"))
        .stdout(predicate::str::contains("output.format: table"))
        .stdout(predicate::str::contains("logging.level: info"));
}

#[test]
fn doctor_fails_on_bad_version() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(&cfg, "version = 3\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agecalc"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL agecalc doctor"))
        .stdout(predicate::str::contains("version 3 is unsupported"));
}

#[test]
fn doctor_fails_on_missing_config() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("absent.toml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agecalc"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL agecalc doctor"))
        .stdout(predicate::str::contains("config file not found"));
}
