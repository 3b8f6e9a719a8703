mod helpers;

use helpers::{EnvGuard, run_cli, smart_module};
use serial_test::serial;

#[test]
#[serial]
fn internal_runs_four_random_players_by_default() {
    let _env = EnvGuard::clean();
    let res = run_cli(&["internal", "--seed", "7"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.starts_with("Running INTERNAL:"));
    for id in 0..4 {
        assert!(res.stdout.contains(&format!("P{id} -> RandomStrategy-{id}")));
    }
    assert!(!res.stdout.contains("RandomStrategy-4"));
    assert!(res.stdout.contains("Final scores after"));
    assert!(res.stdout.contains("Results (lower pts = better):"));
    assert!(res.stdout.contains("  1. RandomStrategy-"));
    assert!(res.stdout.contains("  4. RandomStrategy-"));
}

#[test]
#[serial]
fn demo_mixes_random_and_greedy() {
    let _env = EnvGuard::clean();
    let res = run_cli(&["demo", "--seed", "3"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("P0 -> RandomStrategy-0"));
    assert!(res.stdout.contains("P1 -> RandomStrategy-1"));
    assert!(res.stdout.contains("P2 -> GreedyStrategy-2"));
    assert!(res.stdout.contains("P3 -> GreedyStrategy-3"));
}

#[test]
#[serial]
fn same_seed_prints_same_game() {
    let _env = EnvGuard::clean();
    let a = run_cli(&["demo", "--seed", "11"]);
    let b = run_cli(&["demo", "--seed", "11"]);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
#[serial]
fn final_scores_reach_the_threshold() {
    let _env = EnvGuard::clean();
    let res = run_cli(&["demo", "--seed", "5", "--threshold", "10"]);
    assert_eq!(res.exit_code, 0);
    let scores: Vec<u32> = res
        .stdout
        .lines()
        .skip_while(|l| !l.starts_with("Final scores"))
        .skip(1)
        .take(4)
        .map(|l| {
            let pts = l.rsplit("-> ").next().unwrap();
            pts.trim_end_matches(" pts").parse().unwrap()
        })
        .collect();
    assert_eq!(scores.len(), 4);
    assert!(scores.iter().any(|&s| s >= 10));
}

#[test]
#[serial]
fn missing_mode_prints_usage() {
    let _env = EnvGuard::clean();
    let res = run_cli(&[]);
    assert_eq!(res.exit_code, 1);
    assert!(res.stderr.contains("Usage:"));
    assert!(res.stdout.is_empty());
}

#[test]
#[serial]
fn unknown_mode_prints_usage() {
    let _env = EnvGuard::clean();
    let res = run_cli(&["tournament"]);
    assert_eq!(res.exit_code, 1);
    assert!(res.stderr.contains("sevens competition"));
}

#[test]
#[serial]
fn competition_without_libraries_is_a_usage_error() {
    let _env = EnvGuard::clean();
    let res = run_cli(&["competition"]);
    assert_eq!(res.exit_code, 1);
    assert!(res.stderr.contains("Usage:"));
}

#[test]
#[serial]
fn competition_with_missing_library_fails() {
    let _env = EnvGuard::clean();
    let dir = tempfile::tempdir().unwrap();
    let lib = dir.path().join("libghost.so");
    let res = run_cli(&["competition", lib.to_str().unwrap()]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.contains("Loading strategy from"));
    assert!(!res.stdout.contains("Registered"));
    assert!(res.stderr.contains("Error: Plugin error"));
    assert!(res.stderr.contains("libghost.so"));
}

#[test]
#[serial]
fn competition_seats_loaded_modules() {
    let _env = EnvGuard::apply(&[("SEVENS_MAX_ROUNDS", "5")]);
    let lib = smart_module();
    let lib = lib.to_str().unwrap();
    let res = run_cli(&["competition", lib, lib, "--seed", "8"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Registered SmartSevens-0 successfully."));
    assert!(res.stdout.contains("Registered SmartSevens-1 successfully."));
    assert!(res.stdout.contains("Starting competition with 2 players..."));
    assert!(res.stdout.contains("Competition Results:"));
    assert!(res.stdout.contains("SmartSevens-0 -> Final Rank"));
    assert!(res.stdout.contains("SmartSevens-1 -> Final Rank"));
    // legal-only players shed every card, so nobody ever scores
    assert!(res.stdout.contains("Final scores after 5 rounds:"));
    assert!(res.stdout.contains("  SmartSevens-0 -> 0 pts"));
    assert!(res.stderr.contains("WARNING: no player reached"));
}

#[test]
#[serial]
fn help_goes_to_stdout() {
    let _env = EnvGuard::clean();
    let res = run_cli(&["--help"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("competition"));
}

#[test]
#[serial]
fn binary_exit_codes() {
    let _env = EnvGuard::clean();
    let bin = env!("CARGO_BIN_EXE_sevens");
    let status = std::process::Command::new(bin).status().unwrap();
    assert_eq!(status.code(), Some(1));
    let status = std::process::Command::new(bin)
        .args(["internal", "--seed", "1"])
        .stdout(std::process::Stdio::null())
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(0));
}
