//! CLI Smoke Tests
//!
//! Integration tests for the ogcard CLI commands:
//! - `info`: presets and emoji ranges
//! - `segment` / `estimate`: single layout steps
//! - `layout` / `batch`: whole cards as JSON
//!
//! Tests cover both success cases and failure cases (bad input, missing files).

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn ogcard(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ogcard"))
        .args(args)
        .output()
        .expect("Failed to execute ogcard")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Create a temporary file path
fn temp_path(tag: &str, ext: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("ogcard_test_{}_{}_{}.{}", tag, std::process::id(), id, ext));
    path
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_help() {
    let output = ogcard(&["info", "--help"]);
    assert!(output.status.success(), "info --help should succeed");
    assert!(
        stdout(&output).contains("Display the layout presets"),
        "Help should describe the command"
    );
}

#[test]
fn test_info_lists_presets_and_ranges() {
    let output = ogcard(&["info"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("fixed"));
    assert!(text.contains("1200x1300"));
    assert!(text.contains("U+2700..U+27BF"));
    assert!(text.contains("U+FE00..U+FE0F"));
}

// ============================================================================
// Segment / Estimate Command Tests
// ============================================================================

#[test]
fn test_segment_prints_json() {
    let output = ogcard(&["segment", "Hi 🚗 there 🏠!", "--size", "40"]);
    assert!(output.status.success());

    let segments: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    let segments = segments.as_array().unwrap();
    assert_eq!(segments.len(), 5);
    assert_eq!(segments[0]["kind"], "text");
    assert_eq!(segments[0]["value"], "Hi ");
    assert_eq!(segments[1]["kind"], "emoji");
    assert_eq!(segments[1]["value"], "🚗");
    assert_eq!(segments[1]["render_size"], 40);
}

#[test]
fn test_segment_max_emoji() {
    let output = ogcard(&["segment", "🚗🏠🌲", "--max-emoji", "2"]);
    assert!(output.status.success());
    let segments: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(segments.as_array().unwrap().len(), 2);
}

#[test]
fn test_estimate_word_wrap() {
    let output = ogcard(&["estimate", "aaaa bbbb cccc", "-w", "40", "-s", "20"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "60");
}

#[test]
fn test_estimate_character_count_json() {
    let output = ogcard(&[
        "estimate",
        "aaaa bbbb cccc",
        "--width",
        "40",
        "--font-size",
        "20",
        "--strategy",
        "character-count",
        "--json",
    ]);
    assert!(output.status.success());
    let estimate: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(estimate["lines"], 4);
    assert_eq!(estimate["max_chars_per_line"], 4);
    assert_eq!(estimate["height"], 80);
}

#[test]
fn test_estimate_requires_width() {
    let output = ogcard(&["estimate", "text", "--font-size", "20"]);
    assert!(!output.status.success(), "missing --width should fail");
}

// ============================================================================
// Layout Command Tests
// ============================================================================

#[test]
fn test_layout_to_stdout() {
    let output = ogcard(&[
        "layout",
        "-p",
        "title=Road trip",
        "-p",
        "desc=hello world",
        "--variant",
        "dynamic",
        "--compact",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let card: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(card["schema_version"], "1.0");
    assert_eq!(card["width"], 1200);
    assert_eq!(card["height"], 573);
    assert_eq!(card["fonts"].as_array().unwrap().len(), 0);
    assert_eq!(card["root"]["type"], "block");
    assert_eq!(card["root"]["role"], "card");
}

#[test]
fn test_layout_to_file() {
    let out = temp_path("layout", "json");
    let output = ogcard(&["layout", "-o", out.to_str().unwrap()]);
    assert!(output.status.success());

    let card: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(card["height"], 1300);
    let _ = fs::remove_file(out);
}

#[test]
fn test_layout_rejects_bad_param() {
    let output = ogcard(&["layout", "-p", "no-equals-sign"]);
    assert!(!output.status.success());
}

#[test]
fn test_layout_missing_layout_file() {
    let output = ogcard(&["layout", "--layout", "/nonexistent/ogcard-layout.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
}

// ============================================================================
// Batch Command Tests
// ============================================================================

#[test]
fn test_batch_keeps_input_order() {
    let input = temp_path("batch_in", "jsonl");
    let out = temp_path("batch_out", "jsonl");
    fs::write(
        &input,
        "{\"title\":\"First\"}\n\n{\"title\":\"Second\",\"emojis\":\"🌲\"}\n{\"title\":\"Third\"}\n",
    )
    .unwrap();

    let output = ogcard(&[
        "batch",
        "-i",
        input.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "--variant",
        "dynamic",
        "-q",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let lines: Vec<serde_json::Value> = fs::read_to_string(&out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["line"], 1);
    assert_eq!(lines[1]["line"], 3);
    assert_eq!(lines[2]["line"], 4);
    assert_eq!(lines[1]["metrics"]["emoji_images"], 1);
    assert_eq!(lines[2]["card"]["width"], 1200);

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(out);
}

#[test]
fn test_batch_reports_malformed_lines() {
    let input = temp_path("batch_bad_in", "jsonl");
    let out = temp_path("batch_bad_out", "jsonl");
    fs::write(&input, "{\"title\":\"Fine\"}\nthis is not json\n").unwrap();

    let output = ogcard(&[
        "batch",
        "-i",
        input.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    assert!(!output.status.success(), "a failed job should fail the batch");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed: 1"));

    let written = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("\"error\""));

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(out);
}
