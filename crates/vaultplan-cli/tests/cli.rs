//! End-to-end runs of the `vaultplan` binary against temporary rosters.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const TWO_DWELLERS: &str = "Ada 9155555S\nBo 2855555P\n";

fn roster_dir(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dwellers.txt"), contents).unwrap();
    dir
}

fn vaultplan(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vaultplan"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn roster(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("dwellers.txt")).unwrap()
}

#[test]
fn prints_moves_and_rewrites_roster() {
    let dir = roster_dir(TWO_DWELLERS);
    let output = vaultplan(dir.path(), &["2"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Bo: P -> S (6)\nAda: S -> P (8)\nTotal: 14\n"
    );
    assert_eq!(roster(&dir), "Ada 9155555P\nBo 2855555S\n");
}

#[test]
fn dry_run_keeps_roster() {
    let dir = roster_dir(TWO_DWELLERS);
    let output = vaultplan(dir.path(), &["2", "--dry-run"]);

    assert!(output.status.success());
    assert!(stdout(&output).ends_with("Total: 14\n"));
    assert_eq!(roster(&dir), TWO_DWELLERS);
}

#[test]
fn no_winner_leaves_roster() {
    let full = "A 0555555S\nB 5555555P\nC 5555555E\nD 5555555C\n\
                E 5555555I\nF 5555555A\nG 5555555L\n";
    let dir = roster_dir(full);
    let output = vaultplan(
        dir.path(),
        &["1", "--policy", "first-improvement", "--capacity", "1"],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No winning move sequence\n");
    assert_eq!(roster(&dir), full);
}

#[test]
fn penalized_baseline_when_stuck() {
    let full = "A 0555555S\nB 5555555P\nC 5555555E\nD 5555555C\n\
                E 5555555I\nF 5555555A\nG 5555555L\n";
    let dir = roster_dir(full);
    let output = vaultplan(dir.path(), &["1", "--capacity", "1"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Total: -100\n");
}

#[test]
fn missing_depth_fails() {
    let dir = roster_dir(TWO_DWELLERS);
    let output = vaultplan(dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing search depth"));
    assert_eq!(roster(&dir), TWO_DWELLERS);
}

#[test]
fn non_integer_depth_fails() {
    let dir = roster_dir(TWO_DWELLERS);
    let output = vaultplan(dir.path(), &["deep"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("'deep'"));
}

#[test]
fn malformed_roster_fails_with_line_number() {
    let dir = roster_dir("Ada 9155555S\nBo 28X5555P\n");
    let output = vaultplan(dir.path(), &["1"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
}

#[test]
fn config_file_in_working_directory() {
    let dir = roster_dir(TWO_DWELLERS);
    fs::write(
        dir.path().join("vaultplan.toml"),
        "depth = 1\nselection_policy = \"first_improvement\"\n",
    )
    .unwrap();

    let output = vaultplan(dir.path(), &["--dry-run"]);
    assert!(output.status.success());
    // One move only: Ada into Perception gains the most
    assert_eq!(stdout(&output), "Ada: S -> P (8)\nTotal: 8\n");
}

#[test]
fn explicit_roster_path() {
    let dir = roster_dir("");
    let custom = dir.path().join("vault.txt");
    fs::write(&custom, TWO_DWELLERS).unwrap();

    let output = vaultplan(dir.path(), &["1", "--roster", "vault.txt", "--dry-run"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Ada: S -> P (8)\n"));
}

#[test]
fn failed_save_still_prints_plan() {
    let dir = roster_dir(TWO_DWELLERS);
    let path = dir.path().join("dwellers.txt");
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&path, permissions).unwrap();
    if fs::OpenOptions::new().write(true).open(&path).is_ok() {
        // Privileged users ignore the read-only bit
        return;
    }

    let output = vaultplan(dir.path(), &["2"]);

    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Bo: P -> S (6)\nAda: S -> P (8)\nTotal: 14\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("dwellers.txt"));
    assert_eq!(roster(&dir), TWO_DWELLERS);
}

#[test]
fn lateral_moves_keep_unchanged_vault_under_both_policies() {
    for policy in ["first-improvement", "penalized"] {
        let dir = roster_dir("A 5555555S\n");
        let output = vaultplan(dir.path(), &["1", "--policy", policy]);

        assert!(output.status.success(), "{policy}");
        assert_eq!(stdout(&output), "Total: 0\n", "{policy}");
        assert_eq!(roster(&dir), "A 5555555S\n", "{policy}");
    }
}

#[test]
fn saved_roster_is_logged() {
    let dir = roster_dir(TWO_DWELLERS);
    let output = vaultplan(dir.path(), &["1"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Planning complete"));
    assert!(stderr.contains("Saved"));
}
