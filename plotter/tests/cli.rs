use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn plotter() -> Command {
    let mut cmd = Command::cargo_bin("plotter").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_paths_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("out.txt"), "1 2\n3 4\n").unwrap();

    plotter()
        .current_dir(dir.path())
        .arg("--no-show")
        .assert()
        .success()
        .stderr(predicate::str::contains("saved im.jpg"));

    assert!(fs::metadata(dir.path().join("im.jpg")).unwrap().len() > 0);
}

#[test]
fn explicit_paths_and_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("lattice.txt"), "0 0.5\n0.5 1\n").unwrap();
    fs::write(dir.path().join("plotter.toml"), "dpi = 20\nshow = false\n").unwrap();

    plotter()
        .current_dir(dir.path())
        .args(&["lattice.txt", "lattice.png"])
        .assert()
        .success();

    let img = image::open(dir.path().join("lattice.png")).unwrap();
    assert_eq!((img.width(), img.height()), (160, 160));
}

#[test]
fn ragged_input_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("out.txt"), "1 2\n3\n").unwrap();

    plotter()
        .current_dir(dir.path())
        .arg("--no-show")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ParseError"))
        .stderr(predicate::str::contains("expected 2 columns, found 1"));

    assert!(!dir.path().join("im.jpg").exists());
}

#[test]
fn missing_input_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();

    plotter()
        .current_dir(dir.path())
        .arg("--no-show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read out.txt"));
}

#[test]
fn unknown_colormap_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("out.txt"), "1 2\n3 4\n").unwrap();

    plotter()
        .current_dir(dir.path())
        .args(&["--no-show", "--colormap", "viridis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("colormap"));
}
