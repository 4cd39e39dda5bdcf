//! End-to-end tests for the `gh-scaffold` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary, isolated from the user's preferences and environment.
fn gh_scaffold(prefs_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gh-scaffold").unwrap();
    cmd.env("GH_SCAFFOLD_PREFS", prefs_dir.join("prefs.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn repo_cmd(temp: &TempDir, args: &[&str]) -> Command {
    let mut cmd = gh_scaffold(temp.path());
    cmd.args(args).arg("--repo").arg(temp.path());
    cmd
}

#[test]
fn help_lists_commands() {
    let temp = TempDir::new().unwrap();
    gh_scaffold(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    gh_scaffold(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── scan ──────────────────────────────────────────────────────────────────────

#[test]
fn scan_reports_missing_essentials() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("CONTRIBUTING.md"), "x\n").unwrap();

    repo_cmd(&temp, &["scan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gh-scaffold scan:"))
        .stdout(predicate::str::contains(
            "Missing essentials: SECURITY, PULL_REQUEST_TEMPLATE, ISSUE_TEMPLATE_BUG, \
             ISSUE_TEMPLATE_FEATURE\n",
        ));
}

#[test]
fn scan_json_is_machine_readable() {
    let temp = TempDir::new().unwrap();
    let output = repo_cmd(&temp, &["scan", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files"].as_array().map(Vec::len), Some(14));
    assert_eq!(json["missing"][0], "CONTRIBUTING");
}

#[test]
fn missing_repo_is_not_found() {
    let temp = TempDir::new().unwrap();
    gh_scaffold(temp.path())
        .args(["scan", "--repo"])
        .arg(temp.path().join("nope"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Repository not found"));
}

// ── apply ─────────────────────────────────────────────────────────────────────

#[test]
fn apply_minimal_writes_essentials() {
    let temp = TempDir::new().unwrap();
    repo_cmd(&temp, &["apply", "--preset", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3, skipped 0."))
        .stdout(predicate::str::contains("- .github/PULL_REQUEST_TEMPLATE.md"));

    assert!(temp.path().join("SECURITY.md").is_file());
    assert!(!temp.path().join(".github/FUNDING.yml").exists());
}

#[test]
fn apply_dry_run_diff_writes_nothing() {
    let temp = TempDir::new().unwrap();
    repo_cmd(&temp, &["apply", "--dry-run", "--diff", "--only", "CONTRIBUTING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CONTRIBUTING.md (dry-run)"))
        .stdout(predicate::str::contains("+++ b/CONTRIBUTING.md"));

    assert!(!temp.path().join("CONTRIBUTING.md").exists());
}

#[test]
fn apply_print_streams_file_contents() {
    let temp = TempDir::new().unwrap();
    repo_cmd(&temp, &["apply", "--dry-run", "--print", "--only", "SECURITY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("===== SECURITY.md ====="))
        .stdout(predicate::str::contains("<INSERT SECURITY EMAIL>"));
}

#[test]
fn apply_warns_about_unknown_keys() {
    let temp = TempDir::new().unwrap();
    repo_cmd(&temp, &["apply", "--only", "SECURITY,NOPE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown target key: NOPE"));
}

#[test]
fn apply_existing_file_is_skipped() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("CONTRIBUTING.md"), "EXISTING\n").unwrap();

    repo_cmd(&temp, &["apply", "--only", "CONTRIBUTING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped:"));

    assert_eq!(
        fs::read_to_string(temp.path().join("CONTRIBUTING.md")).unwrap(),
        "EXISTING\n"
    );
}

#[test]
fn apply_json_output() {
    let temp = TempDir::new().unwrap();
    let output = repo_cmd(
        &temp,
        &["--output-format", "json", "apply", "--only", "SECURITY"],
    )
    .output()
    .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["written"][0], "SECURITY.md");
}

#[test]
fn malformed_config_exits_with_configuration_code() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("gh-scaffold.yml"), "preset: [oops\n").unwrap();

    repo_cmd(&temp, &["apply"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("gh-scaffold.yml"));
}

#[test]
fn invalid_flag_value_is_usage_error() {
    let temp = TempDir::new().unwrap();
    repo_cmd(&temp, &["apply", "--preset", "huge"])
        .assert()
        .code(2);
}

// ── doctor ────────────────────────────────────────────────────────────────────

#[test]
fn doctor_passes_on_empty_repo() {
    let temp = TempDir::new().unwrap();
    repo_cmd(&temp, &["doctor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("doctor: ok"));
}

#[test]
fn doctor_flags_placeholders_with_exit_code_5() {
    let temp = TempDir::new().unwrap();
    repo_cmd(&temp, &["apply", "--only", "SECURITY"])
        .assert()
        .success();

    repo_cmd(&temp, &["doctor"])
        .assert()
        .code(5)
        .stdout(predicate::str::contains("doctor: issues found"))
        .stdout(predicate::str::contains(
            "- SECURITY.md: contains <INSERT SECURITY EMAIL>",
        ));
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_creates_config_and_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    repo_cmd(&temp, &["init"]).assert().success();

    let config = temp.path().join("gh-scaffold.yml");
    let text = fs::read_to_string(&config).unwrap();
    assert!(text.contains("preset: standard"));

    repo_cmd(&temp, &["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    fs::write(&config, "preset: strict\n").unwrap();
    repo_cmd(&temp, &["init", "--force"]).assert().success();
    assert!(fs::read_to_string(&config).unwrap().contains("preset: standard"));
}

// ── config / completions ──────────────────────────────────────────────────────

#[test]
fn config_path_without_file_reports_defaults() {
    let temp = TempDir::new().unwrap();
    repo_cmd(&temp, &["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(none, using defaults)"));
}

#[test]
fn config_show_merges_file_onto_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("gh-scaffold.yml"), "issueTemplates: forms\n").unwrap();

    repo_cmd(&temp, &["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("issueTemplates: forms"))
        .stdout(predicate::str::contains("preset: standard"));
}

#[test]
fn config_prefs_reads_preferences_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("prefs.toml"), "[output]\nformat = \"plain\"\n").unwrap();

    gh_scaffold(temp.path())
        .args(["config", "prefs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prefs.toml"))
        .stdout(predicate::str::contains("format = \"plain\""));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    gh_scaffold(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gh-scaffold"));
}
