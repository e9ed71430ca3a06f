use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_keys_evaluate() {
    let mut cmd = Command::new(cargo_bin!("calc_cli"));
    cmd.args(["--keys", "5+3="]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Display: 8"))
        .stdout(predicate::str::contains("1. 5 + 3 = 8"));
}

#[test]
fn test_chained_operations() {
    let mut cmd = Command::new(cargo_bin!("calc_cli"));
    cmd.args(["--keys", "5+3-2="]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Display: 6"))
        .stdout(predicate::str::contains("1. 8 − 2 = 6"))
        .stdout(predicate::str::contains("2. 5 + 3 = 8"));
}

#[test]
fn test_divide_by_zero_shows_error() {
    let mut cmd = Command::new(cargo_bin!("calc_cli"));
    cmd.args(["--keys", "6/0="]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Display: Error"))
        .stdout(predicate::str::contains("History").not());
}

#[test]
fn test_action_tags_and_json() {
    let mut cmd = Command::new(cargo_bin!("calc_cli"));
    cmd.args([
        "--action", "number:4",
        "--action", "memory-add",
        "--action", "memory-clear",
        "--action", "memory-recall",
        "--json",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"current\":\"0\""))
        .stdout(predicate::str::contains("\"has_memory\":false"))
        .stdout(predicate::str::contains("\"status\":\"idle\""));
}

#[test]
fn test_unknown_action_tag_fails() {
    let mut cmd = Command::new(cargo_bin!("calc_cli"));
    cmd.args(["--action", "sqrt"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown action"));
}

#[test]
fn test_unrecognized_script_key_fails() {
    let mut cmd = Command::new(cargo_bin!("calc_cli"));
    cmd.args(["--keys", "5?3"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized key '?'"));
}

#[test]
fn test_config_limits_history() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join("tally_cli_test_history.json");
    std::fs::write(&path, r#"{"history_capacity": 1}"#)?;

    let mut cmd = Command::new(cargo_bin!("calc_cli"));
    cmd.arg("--config").arg(&path).args(["--keys", "1+1=c2+2="]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. 2 + 2 = 4"))
        .stdout(predicate::str::contains("1 + 1 = 2").not());

    std::fs::remove_file(path).ok();
    Ok(())
}

#[test]
fn test_init_config_writes_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join("tally_cli_test_init.json");

    let mut cmd = Command::new(cargo_bin!("calc_cli"));
    cmd.arg("--init-config").arg(&path);
    cmd.assert().success().stdout(predicate::str::contains("Wrote default settings"));

    let written = std::fs::read_to_string(&path)?;
    assert!(written.contains("\"history_capacity\": 10"));
    assert!(written.contains("\"error_reset_ms\": 2000"));

    std::fs::remove_file(path).ok();
    Ok(())
}
