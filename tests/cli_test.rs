//! Command-line tests: argument validation, output path and report output.

#![allow(deprecated)] // cargo_bin deprecation

mod common;

use assert_cmd::Command;
use common::fixtures;
use common::Workspace;
use predicates::prelude::*;

fn obamafy() -> Command {
    let mut cmd = Command::cargo_bin("obamafy").unwrap();
    cmd.env_remove("OBAMAFY_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_input_argument() {
    obamafy()
        .assert()
        .failure()
        .stderr(predicate::str::contains("INPUT"));
}

#[test]
fn test_nonexistent_input_fails() {
    obamafy()
        .arg("/nonexistent/photo.jpg")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_threshold_out_of_range_fails() {
    let ws = Workspace::new();
    let input = ws.write_image("portrait.png", &fixtures::portrait(16, 16));

    obamafy()
        .arg(&input)
        .arg("--dark-threshold")
        .arg("100")
        .assert()
        .failure()
        .stderr(predicate::str::contains("dark threshold must be in [0, 100)"));
    assert!(!ws.join("portrait_obamafied.png").exists());
}

#[test]
fn test_posterization_out_of_range_fails() {
    let ws = Workspace::new();
    let input = ws.write_image("portrait.png", &fixtures::portrait(16, 16));

    obamafy()
        .arg(&input)
        .arg("--posterization")
        .arg("9")
        .assert()
        .failure();
}

#[test]
fn test_default_run_writes_poster_and_report() {
    let ws = Workspace::new();
    let input = ws.write_image("portrait.png", &fixtures::portrait(64, 48));
    let expected = ws.join("portrait_obamafied.png");

    let assert = obamafy()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("portrait_obamafied.png"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    common::assert_report_text(&stderr);

    let img = common::assert_png_file(&expected);
    common::assert_dimensions(&img, 64, 48);
}

#[test]
fn test_explicit_output_and_flags() {
    let ws = Workspace::new();
    let input = ws.write_image("portrait.jpg", &fixtures::portrait(32, 32));
    let output = ws.join("out.png");

    obamafy()
        .arg(&input)
        .arg(&output)
        .args(["--posterization", "4", "--median", "4"])
        .args(["--dark-threshold", "20", "--accent-threshold", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("out.png"));

    common::assert_png_file(&output);
}

#[test]
fn test_config_from_environment() {
    let ws = Workspace::new();
    let input = ws.write_image("portrait.png", &fixtures::portrait(32, 32));
    let config = ws.write_file("obamafy.yaml", "palette:\n  dark: \"#000000\"\n");

    obamafy()
        .env("OBAMAFY_CONFIG", &config)
        .arg(&input)
        .assert()
        .success();

    let img = common::assert_png_file(&ws.join("portrait_obamafied.png"));
    assert!(common::count_color(&img, [0, 0, 0]) > 0);
}

#[test]
fn test_missing_config_file_fails() {
    let ws = Workspace::new();
    let input = ws.write_image("portrait.png", &fixtures::portrait(16, 16));

    obamafy()
        .arg(&input)
        .arg("--config")
        .arg(ws.join("absent.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}
