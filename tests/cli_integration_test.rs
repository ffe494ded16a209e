//! End-to-end tests for the `impact-dashboard` binary.

mod common;

use common::dashboard_cmd;
use impact_dashboard::config::load_config_from;
use impact_dashboard::config::presets::bridges_config;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

#[test]
fn validate_accepts_builtin_configuration() {
    let temp_dir = TempDir::new().unwrap();

    let output = dashboard_cmd()
        .current_dir(temp_dir.path())
        .arg("validate")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Configuration is valid: 3 tabs, 4 charts, 3 components"),
        "{}",
        stdout
    );
}

#[test]
fn validate_reports_every_problem_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");

    dashboard_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--path"])
        .arg(&config_path)
        .assert()
        .success();

    let mut config = load_config_from(&config_path).unwrap();
    config.dashboard.tabs[2].id = "reporting".into();
    config
        .dashboard
        .charts
        .get_mut("dealsByStage")
        .unwrap()
        .data_keys
        .push("total".into());
    fs::write(&config_path, toml::to_string(&config).unwrap()).unwrap();

    let output = dashboard_cmd()
        .current_dir(temp_dir.path())
        .args(["validate", "--config"])
        .arg(&config_path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No component registered for tab 'reporting'"), "{}", stderr);
    assert!(stderr.contains("dashboard.dealsByStage"), "{}", stderr);
    assert!(stderr.contains("2 data key(s) but 1 color(s)"), "{}", stderr);
}

#[test]
fn config_path_can_come_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("tenant.toml");
    fs::write(
        &config_path,
        indoc! {r#"
            title = "Broken"
            [features]
            reporting = "sometimes"
        "#},
    )
    .unwrap();

    let output = dashboard_cmd()
        .current_dir(temp_dir.path())
        .env("IMPACT_DASHBOARD_CONFIG", &config_path)
        .arg("validate")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse configuration"), "{}", stderr);
}

#[test]
fn validate_fails_on_malformed_discovered_config() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("reports");
    fs::create_dir_all(&nested).unwrap();

    let mut doc = toml::to_string(&bridges_config()).unwrap();
    doc = doc.replace("reporting = true", "reporting = \"yes\"");
    fs::write(temp_dir.path().join(".impact-dashboard.toml"), doc).unwrap();

    let output = dashboard_cmd()
        .current_dir(&nested)
        .arg("validate")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Configuration is valid"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse configuration"), "{}", stderr);
    assert!(stderr.contains(".impact-dashboard.toml"), "{}", stderr);
}

#[test]
fn export_json_uses_camel_case_keys() {
    let temp_dir = TempDir::new().unwrap();

    let output = dashboard_cmd()
        .current_dir(temp_dir.path())
        .args(["export", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["primaryColor"], "#4F46E5");
    assert_eq!(json["config"]["userName"], "Emma Murray");
    assert_eq!(json["config"]["dashboard"]["tabs"][0]["id"], "dealPipeline");
    assert_eq!(
        json["config"]["dashboard"]["charts"]["investmentByIndustry"]["type"],
        "pie"
    );
    assert_eq!(
        json["components"],
        serde_json::json!(["dealPipeline", "impactMetrics", "portfolioPerformance"])
    );
    assert_eq!(json["data"]["industries"][0], "Energy Transition");
}

#[test]
fn export_writes_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("export.toml");

    dashboard_cmd()
        .current_dir(temp_dir.path())
        .args(["export", "--format", "toml", "--output"])
        .arg(&output_path)
        .assert()
        .success();

    let contents = fs::read_to_string(&output_path).unwrap();
    let value: toml::Value = toml::from_str(&contents).unwrap();
    assert_eq!(
        value["config"]["companyName"].as_str(),
        Some("Bridges Fund Management")
    );
}

#[test]
fn init_writes_discoverable_config_and_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();

    dashboard_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();
    assert!(temp_dir.path().join(".impact-dashboard.toml").exists());

    dashboard_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure();

    dashboard_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn discovered_config_is_used_from_subdirectory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("reports/q3");
    fs::create_dir_all(&nested).unwrap();

    dashboard_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    let config_path = temp_dir.path().join(".impact-dashboard.toml");
    let renamed = fs::read_to_string(&config_path)
        .unwrap()
        .replacen("userName = \"Emma Murray\"", "userName = \"Sam Okafor\"", 1);
    fs::write(&config_path, renamed).unwrap();

    let output = dashboard_cmd()
        .current_dir(&nested)
        .args(["render", "--width", "120", "--height", "30"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Sam Okafor"));
}

#[test]
fn render_prints_requested_tab() {
    let temp_dir = TempDir::new().unwrap();

    let output = dashboard_cmd()
        .current_dir(temp_dir.path())
        .args(["render", "--tab", "impactMetrics", "--width", "120", "--height", "30"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CO2 Emissions Reduced"), "{}", stdout);
    assert!(stdout.contains("100 MW"));
}

#[test]
fn render_rejects_unknown_tab() {
    let temp_dir = TempDir::new().unwrap();

    let output = dashboard_cmd()
        .current_dir(temp_dir.path())
        .args(["render", "--tab", "reports"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown tab 'reports'"));
}
