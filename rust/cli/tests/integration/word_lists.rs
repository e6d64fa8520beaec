use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;

#[test]
fn w1_counts_usable_and_skipped_lines() {
    let tfm = TempFileManager::new().expect("temp dir");
    let words = tfm
        .create_file("words.txt", "Apple\n\nice cream\nPEAR\r\nx1\n")
        .expect("words");
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["words", "--words", words.to_str().expect("utf-8 path")]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("usable: 2"));
    assert!(res.stdout.contains("skipped: 2"));
}

#[test]
fn w2_list_without_words_exits_2() {
    let tfm = TempFileManager::new().expect("temp dir");
    let words = tfm.create_file("empty.txt", "\n \n").expect("words");
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["words", "--words", words.to_str().expect("utf-8 path")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.contains("usable: 0"));
    assert!(res.stderr.contains("no usable words"));
}
