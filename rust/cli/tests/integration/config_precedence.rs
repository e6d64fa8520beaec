use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use serde_json::Value;

fn cfg_json(stdout: &str) -> Value {
    serde_json::from_str(stdout).expect("cfg prints json")
}

#[test]
fn i1_cfg_shows_defaults() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["cfg"]);
    assert_eq!(res.exit_code, 0);
    let cfg = cfg_json(&res.stdout);
    assert_eq!(cfg["words"], "words.txt");
    assert_eq!(cfg["player"], "player");
    assert!(cfg["seed"].is_null());
    assert!(cfg["game_log"].is_null());
}

#[test]
fn i2_env_overrides_file() {
    let tfm = TempFileManager::new().expect("temp dir");
    let cfg_path = tfm
        .create_file("hgm.toml", "seed = 456\nplayer = \"filey\"\nwords = \"/srv/words.txt\"\n")
        .expect("config file");
    let cfg_path = cfg_path.to_str().expect("utf-8 path");
    let cli = CliRunner::new().expect("init");

    let from_file = cfg_json(&cli.run_with_env(&["cfg"], &[("HGM_CONFIG", cfg_path)]).stdout);
    assert_eq!(from_file["seed"], 456);
    assert_eq!(from_file["player"], "filey");
    assert_eq!(from_file["words"], "/srv/words.txt");

    let from_env = cfg_json(
        &cli.run_with_env(
            &["cfg"],
            &[("HGM_CONFIG", cfg_path), ("HGM_SEED", "123"), ("HGM_PLAYER", "envy")],
        )
        .stdout,
    );
    assert_eq!(from_env["seed"], 123);
    assert_eq!(from_env["player"], "envy");
    assert_eq!(from_env["words"], "/srv/words.txt");
}

#[test]
fn i3_invalid_values_are_rejected() {
    let tfm = TempFileManager::new().expect("temp dir");
    let bad = tfm.create_file("bad.toml", "lives = 9\n").expect("config file");
    let cli = CliRunner::new().expect("init");

    let res = cli.run_with_env(&["cfg"], &[("HGM_CONFIG", bad.to_str().expect("utf-8 path"))]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("failed to parse config"));

    let res = cli.run_with_env(&["cfg"], &[("HGM_SEED", "lots")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid seed"));
}

#[test]
fn i4_cli_flag_overrides_env_player() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_env(&["play", "--word", "a", "--name", "flag"], &[("HGM_PLAYER", "envy")]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Player: flag"));
}
