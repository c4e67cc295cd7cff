//! CLI-level tests that do not require the external binaries

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn split_rejects_an_unrecognized_url_before_any_work() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("reelsplit")
        .unwrap()
        .current_dir(dir.path())
        .args(["split", "--url", "https://example.com/video.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid video URL"));
}

#[test]
fn split_rejects_a_zero_segment_window() {
    Command::cargo_bin("reelsplit")
        .unwrap()
        .args([
            "split",
            "--url",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "--segment-seconds",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--segment-seconds"));
}

#[test]
fn split_requires_a_url() {
    Command::cargo_bin("reelsplit")
        .unwrap()
        .args(["split"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url"));
}

#[test]
fn help_lists_the_split_command() {
    Command::cargo_bin("reelsplit")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("split"));
}
