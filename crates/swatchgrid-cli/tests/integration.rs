//! Integration tests for swatchgrid CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_swatchgrid"))
}

#[test]
fn scales_command_lists_the_whole_table() {
    let output = binary()
        .args(["scales", "-b", "8"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("base unit: 8px"));
    // Half step and extremes of the table
    assert!(stdout.contains("4px"), "half step of base 8");
    assert!(stdout.contains("8px"));
    assert!(stdout.contains("128px"), "16x step of base 8");

    // Header plus one line per scale step
    let line_count = stdout.lines().count();
    assert!(line_count >= 19, "Should list 18 scale steps, got {} lines", line_count);
}

#[test]
fn scales_command_honors_base_flag() {
    let output = binary()
        .args(["scales", "--base", "5"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("base unit: 5px"));
    assert!(stdout.contains("2.5px"), "half step of base 5");
    assert!(stdout.contains("80px"), "16x step of base 5");
}

#[test]
fn rect_command_prints_svg_to_stdout() {
    let output = binary()
        .args(["rect", "--width", "320", "--height", "80", "-o", "-"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert!(stdout.contains("width=\"320\" height=\"80\""));
    assert!(stdout.contains("320 x 80"), "Should have dimension label");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn rect_command_rejects_bad_width() {
    let output = binary()
        .args(["rect", "--width", "wide", "-o", "-"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--width"));
    // No partial document on stdout
    assert!(!String::from_utf8_lossy(&output.stdout).contains("<svg"));
}

#[test]
fn rect_command_writes_file() {
    let dir = std::env::temp_dir().join("swatchgrid-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("rect.svg");
    let _ = std::fs::remove_file(&path);

    let output = binary()
        .args(["rect", "-o", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let svg = std::fs::read_to_string(&path).expect("output file should exist");
    assert!(svg.contains("width=\"64\" height=\"64\""));
    assert!(svg.contains("64 x 64"));

    let _ = std::fs::remove_file(&path);
}
