//! End-to-end tests for the vgsales CLI commands.
//!
//! These tests verify that the CLI produces expected output when run
//! against a real data directory.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin for tests

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Test Helpers
// =============================================================================

const SAMPLE_CSV: &str = "\
Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales
1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74
2,Mario Kart Wii,Wii,2008,Racing,Nintendo,15.85,12.88,3.79,3.31,35.82
3,Broken Row,NES,N/A,Platform,Nintendo,1.0,1.0,1.0,1.0,4.0
";

const MODEL_JSON: &str = r#"{
    "model": "linear_regression",
    "intercept": 0.5,
    "coefficients": [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]
}"#;

/// Create a temporary data directory with the dataset and model in place.
struct TestDataDir {
    temp_dir: TempDir,
}

impl TestDataDir {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(
            temp_dir.path().join("video_game_sales_dataset.csv"),
            SAMPLE_CSV,
        )
        .expect("Failed to write dataset");
        fs::write(
            temp_dir.path().join("sales_prediction_model.json"),
            MODEL_JSON,
        )
        .expect("Failed to write model");

        Self { temp_dir }
    }

    fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

fn vgsales() -> Command {
    Command::cargo_bin("vgsales").expect("Failed to find vgsales binary")
}

// =============================================================================
// vgsales summary Tests
// =============================================================================

#[test]
fn test_summary_missing_dataset() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    vgsales()
        .args(["summary", temp_dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset not found"));
}

#[test]
fn test_summary_prints_panels() {
    let data = TestDataDir::new();
    vgsales()
        .args(["summary", data.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 rows uploaded, 2 kept"))
        .stdout(predicate::str::contains("Top 10 games"))
        .stdout(predicate::str::contains("Wii Sports"))
        .stdout(predicate::str::contains("Top 10 platforms"));
}

// =============================================================================
// vgsales predict Tests
// =============================================================================

#[test]
fn test_predict_outputs_estimate_and_history() {
    let data = TestDataDir::new();
    vgsales()
        .args([
            "predict",
            "--data-dir",
            data.path().to_str().unwrap(),
            "--platform",
            "Wii",
            "--genre",
            "Sports",
            "--publisher",
            "Nintendo",
            "--na-sales",
            "1.0",
            "--eu-sales",
            "2.0",
            "--jp-sales",
            "3.0",
            "--other-sales",
            "4.0",
        ])
        .assert()
        .success()
        // intercept 0.5 + regional sales sum 10.0
        .stdout(predicate::str::contains("10.50 million units"))
        .stdout(predicate::str::contains("2006"));
}

#[test]
fn test_predict_reports_missing_history() {
    let data = TestDataDir::new();
    vgsales()
        .args([
            "predict",
            "--data-dir",
            data.path().to_str().unwrap(),
            "--platform",
            "PC",
            "--genre",
            "Strategy",
            "--publisher",
            "Sega",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No historical data"));
}

#[test]
fn test_predict_rejects_unknown_platform() {
    let data = TestDataDir::new();
    vgsales()
        .args([
            "predict",
            "--data-dir",
            data.path().to_str().unwrap(),
            "--platform",
            "Dreamcast 2",
            "--genre",
            "Sports",
            "--publisher",
            "Nintendo",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown platform"));
}

#[test]
fn test_predict_missing_model_is_fatal() {
    let data = TestDataDir::new();
    fs::remove_file(data.path().join("sales_prediction_model.json")).unwrap();
    vgsales()
        .args([
            "predict",
            "--data-dir",
            data.path().to_str().unwrap(),
            "--platform",
            "Wii",
            "--genre",
            "Sports",
            "--publisher",
            "Nintendo",
        ])
        .assert()
        .failure();
}
