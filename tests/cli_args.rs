//! Command line parsing, both through the library and the built binary.

use clap::Parser;
use dsa_arcade::cli::{Cli, Command as CliCommand};
use dsa_arcade::sorting::Algorithm;
use dsa_arcade::ui::Page;
use std::process::Command;

fn dsa_arcade_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dsa-arcade"))
}

#[test]
fn test_help_lists_flags() {
    let output = dsa_arcade_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    for flag in ["--config", "--page", "--seed", "--mute", "--log-file"] {
        assert!(stdout.contains(flag), "missing {flag} in {stdout}");
    }
}

#[test]
fn test_trace_prints_json() {
    let output = dsa_arcade_cmd()
        .args(["trace", "--algorithm", "bubble", "--values", "3,2,1"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["algorithm"], "bubble");
    assert_eq!(json["name"], "Bubble Sort");
    assert_eq!(json["output"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["comparisons"], 3);
    assert!(json.get("frames").is_none());
}

#[test]
fn test_trace_with_frames() {
    let output = dsa_arcade_cmd()
        .args([
            "trace",
            "--algorithm",
            "merge",
            "--length",
            "6",
            "--seed",
            "1",
            "--frames",
        ])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let frames = json["frames"].as_array().unwrap();
    assert_eq!(frames.len() as u64, json["frame_count"].as_u64().unwrap());
    assert_eq!(json["input"].as_array().unwrap().len(), 6);
}

#[test]
fn test_unknown_algorithm_fails() {
    let output = dsa_arcade_cmd()
        .args(["trace", "--algorithm", "bogo"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bogo"));
}

#[test]
fn test_page_and_overrides_parse() {
    let cli = Cli::try_parse_from([
        "dsa-arcade",
        "--page",
        "tictactoe",
        "--mute",
        "--length",
        "12",
        "--disks",
        "5",
        "--seed",
        "9",
    ])
    .unwrap();
    assert_eq!(cli.page, Page::TicTacToe);
    assert_eq!(cli.seed, Some(9));

    let overrides = cli.overrides();
    assert!(overrides.mute);
    assert_eq!(overrides.array_length, Some(12));
    assert_eq!(overrides.disks, Some(5));
}

#[test]
fn test_range_limits() {
    assert!(Cli::try_parse_from(["dsa-arcade", "--length", "4"]).is_err());
    assert!(Cli::try_parse_from(["dsa-arcade", "--length", "19"]).is_err());
    assert!(Cli::try_parse_from(["dsa-arcade", "--disks", "2"]).is_err());
    assert!(Cli::try_parse_from(["dsa-arcade", "--disks", "6"]).is_err());
}

#[test]
fn test_trace_seed_is_reproducible() {
    let parse = || {
        let cli = Cli::try_parse_from([
            "dsa-arcade",
            "trace",
            "--algorithm",
            "shell",
            "--seed",
            "77",
        ])
        .unwrap();
        match cli.command {
            Some(CliCommand::Trace(args)) => args,
            None => panic!("expected trace"),
        }
    };
    let first = parse();
    assert_eq!(first.algorithm, Algorithm::Shell);
    assert_eq!(first.input().unwrap(), parse().input().unwrap());
    assert_eq!(first.input().unwrap().len(), 8);
}

#[test]
fn test_trace_at_largest_length() {
    let output = dsa_arcade_cmd()
        .args(["trace", "--algorithm", "bubble", "--length", "18", "--frames"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["input"].as_array().unwrap().len(), 18);
    assert_eq!(
        json["frames"].as_array().unwrap().len() as u64,
        json["frame_count"].as_u64().unwrap()
    );
}

#[test]
fn test_trace_rejects_oversized_input() {
    let output = dsa_arcade_cmd()
        .args(["trace", "--algorithm", "bubble", "--length", "3000"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));

    let values = vec!["5"; 19].join(",");
    let output = dsa_arcade_cmd()
        .args(["trace", "--algorithm", "bubble", "--values", values.as_str()])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at most 18"), "{stderr}");
}
