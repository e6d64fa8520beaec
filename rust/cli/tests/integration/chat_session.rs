use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use serde_json::Value;

fn single_word_list(tfm: &TempFileManager, word: &str) -> String {
    tfm.create_file("words.txt", &format!("{}\n", word))
        .expect("words")
        .to_string_lossy()
        .to_string()
}

#[test]
fn c1_two_players_share_the_bot() {
    let tfm = TempFileManager::new().expect("temp dir");
    let words = single_word_list(&tfm, "ox");
    let script = "\
ann !play_hangman
ben !play_hangman
ann !play_hangman
ann !guess o
ben !guess q
ann !guess x
ann !guess x
";
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(&["chat", "--words", &words], script);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let out = res.stdout;
    assert!(out.contains("[ann] **Hangman**"));
    assert!(out.contains("[ben] **Hangman**"));
    assert!(out.contains("[ann] You are already playing!"));
    assert!(out.contains("You won!"));
    assert!(out.contains("[ann] you have to create a new game first - !play_hangman"));
    assert!(out.contains("Wrong guess."));
}

#[test]
fn c2_mentions_of_subscribers_produce_mail() {
    let tfm = TempFileManager::new().expect("temp dir");
    let words = single_word_list(&tfm, "ox");
    let script = "\
ann !subscribe ann@example.com
ann !subscribe ann@example.org
ben hello <@ann> and <@cid>
ann !unsubscribe
ben hello again <@ann>
ann !unsubscribe
";
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(&["chat", "--words", &words], script);
    assert_eq!(res.exit_code, 0);
    let out = res.stdout;
    assert!(out.contains("[ann] You were added to subscriber list!"));
    assert!(out.contains("[ann] Already in subscriber list, your email was changed!"));
    assert_eq!(out.matches("mail -> ann@example.org: New mention just arrived").count(), 1);
    assert!(!out.contains("ann@example.com:"));
    assert!(out.contains("[ann] You were removed from subscriber list!"));
    assert!(out.contains("[ann] You are not in subscriber list, nothing changed"));
}

#[test]
fn c3_finished_games_are_appended_to_game_log() {
    let tfm = TempFileManager::new().expect("temp dir");
    let words = single_word_list(&tfm, "ox");
    let log = tfm.path("games.jsonl");
    let script = "\
ann !play_hangman
ann !guess o
ann !guess x
ben !play_hangman
ben !guess a
ben !guess b
ben !guess c
ben !guess d
ben !guess e
ben !guess f
ben !guess g
";
    let cli = CliRunner::new().expect("init");
    let res = cli.run_with_input(
        &["chat", "--words", &words, "--game-log", log.to_str().expect("utf-8 path")],
        script,
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    let text = std::fs::read_to_string(&log).expect("game log written");
    let records: Vec<Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("jsonl record"))
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["participant"], "ann");
    assert_eq!(records[0]["result"], "won");
    assert_eq!(records[1]["participant"], "ben");
    assert_eq!(records[1]["result"], "lost");
    assert_eq!(records[1]["lives_left"], 0);
    assert_eq!(records[1]["word"], "OX");
}
