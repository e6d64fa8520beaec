use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use serde_json::Value;

#[test]
fn p1_winning_game_with_fixed_word() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(&["play", "--word", "cat", "--name", "ivy"], "a\nz\na\nc\nt\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let out = res.stdout;
    assert!(out.contains("Player: ivy"));
    assert!(out.contains("Good luck!"));
    assert!(out.contains("Word: - A -"));
    assert!(out.contains("Lives: 6"));
    assert!(out.contains("You already guessed that."));
    assert!(out.contains("Guess: A, Z, C, T"));
    assert!(out.contains("Word: C A T"));
    assert!(out.trim_end().ends_with("You won!"));
}

#[test]
fn p2_losing_game_reveals_word() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(&["play", "--word", "dog"], "x\ny\nz\nq\nw\ne\nr\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Lives: 0"));
    assert!(res.stdout.contains("You lost! The word was: DOG"));
}

#[test]
fn p3_invalid_input_is_skipped_and_eof_abandons() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(&["play", "--word", "cat"], "ab\n7\nc\n");
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout.matches("Guess a single letter.").count(), 2);
    assert!(res.stdout.contains("Word: C - -"));
    assert!(res.stdout.contains("Game abandoned."));
}

#[test]
fn p4_word_list_with_seed_is_reproducible() {
    let tfm = TempFileManager::new().expect("temp dir");
    let words = tfm
        .create_file("words.txt", "apple\nbanana\ncherry\n")
        .expect("words");
    let words = words.to_string_lossy().to_string();
    let cli = CliRunner::new().expect("init");
    let r1 = cli.run_with_input(&["play", "--words", &words, "--seed", "5"], "quit\n");
    let r2 = cli.run_with_input(&["play", "--words", &words, "--seed", "5"], "quit\n");
    assert_eq!(r1.exit_code, 0, "stderr: {}", r1.stderr);
    assert_eq!(r1.stdout, r2.stdout);
}

#[test]
fn p5_missing_word_list_fails() {
    let tfm = TempFileManager::new().expect("temp dir");
    let missing = tfm.path("nope.txt").to_string_lossy().to_string();
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(&["play", "--words", &missing], "a\n");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Word source unavailable"));
}

#[test]
fn p6_game_log_records_finished_game() {
    let tfm = TempFileManager::new().expect("temp dir");
    let log = tfm.path("logs/games.jsonl");
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_env_and_input(
        &["play", "--word", "ox", "--name", "lou"],
        &[("HGM_GAME_LOG", log.to_str().expect("utf-8 path"))],
        "o\nx\n",
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("You won!"));

    let text = std::fs::read_to_string(&log).expect("game log written");
    let records: Vec<Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("jsonl record"))
        .collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["result"], "won");
    assert_eq!(records[0]["word"], "OX");
    assert_eq!(records[0]["participant"], "local");
    assert_eq!(records[0]["lives_left"], 7);
}

#[test]
fn p7_abandoned_game_is_not_logged() {
    let tfm = TempFileManager::new().expect("temp dir");
    let log = tfm.path("games.jsonl");
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_env_and_input(
        &["play", "--word", "ox"],
        &[("HGM_GAME_LOG", log.to_str().expect("utf-8 path"))],
        "o\n",
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Game abandoned."));
    assert!(std::fs::read_to_string(&log).unwrap_or_default().is_empty());
}

#[test]
fn p8_repeated_word_flag_picks_one_of_them() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(
        &["play", "--word", "cat", "--word", "cow", "--seed", "3"],
        "c\n",
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Word: C - -"));

    let res = cli.run_with_input(&["play", "--word", "cat", "--word", "c4t"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid word"));
}
