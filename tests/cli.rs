extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn prints_preview() {
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&["--preview", "-t", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("XXXXXXXXXXXXXXXXXXXXXXXXXXXX"));
}

#[test]
fn preview_has_forty_lines() {
    let output = Command::cargo_bin("mandelbrot")
        .unwrap()
        .arg("--preview")
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text.lines().count(), 40);
    assert!(text.lines().all(|line| line.len() == 50));
}

#[test]
fn writes_png() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mandel.png");
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&["-o", path.to_str().unwrap(), "-s", "64x48", "-t", "3"])
        .assert()
        .success();
    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn accepts_negative_window() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zoom.png");
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&[
            "-o",
            path.to_str().unwrap(),
            "-s",
            "32x32",
            "-w",
            "-0.8,-0.7",
            "-y",
            "-0.1",
            "-p",
            "banded",
        ])
        .assert()
        .success();
    assert!(path.exists());
}

#[test]
fn rejects_inverted_window() {
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&["--preview", "-w", "1.0,-2.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
}

#[test]
fn rejects_zero_threads() {
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&["--preview", "-t", "0"])
        .assert()
        .failure();
}

#[test]
fn requires_a_target() {
    Command::cargo_bin("mandelbrot").unwrap().assert().failure();
}
