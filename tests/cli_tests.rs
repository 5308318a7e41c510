use std::fs;
use std::process::Command;

fn write_wordlist(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("words.txt");
    fs::write(&path, "central\nlance\nbee\nbass\ntrace\nneat\ncordate\n").unwrap();
    path
}

#[test]
fn prints_best_puzzle() {
    let exe = env!("CARGO_BIN_EXE_spelling-bee");
    let dir = tempfile::tempdir().unwrap();
    let words = write_wordlist(&dir);

    let output = Command::new(exe)
        .args([words.to_str().unwrap(), "--letters", "abcdelnort", "--quiet"])
        .output()
        .expect("run failed");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Loaded 5 words from 7 lines"));
    assert!(stdout.contains("New max score: 25; for letters: a,c,e,l,n,r,t; center: a"));
    assert!(stdout.contains("Max score: 25 for letters: a, c, e, l, n, r, t; center: a"));
    assert!(stdout.contains("    central\n"));
    assert!(stdout.contains("Elapsed time:"));
}

#[test]
fn sequential_flag() {
    let exe = env!("CARGO_BIN_EXE_spelling-bee");
    let dir = tempfile::tempdir().unwrap();
    let words = write_wordlist(&dir);

    let output = Command::new(exe)
        .args([words.to_str().unwrap(), "-l", "abcdelnort", "-q", "--sequential"])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Max score: 25"));
}

#[test]
fn missing_wordlist_fails() {
    let exe = env!("CARGO_BIN_EXE_spelling-bee");
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let output = Command::new(exe)
        .args([missing.to_str().unwrap(), "--quiet"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read word list"));
}

#[test]
fn no_pangram_fails() {
    let exe = env!("CARGO_BIN_EXE_spelling-bee");
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.txt");
    fs::write(&words, "lance\ntrace\nneat\n").unwrap();

    let output = Command::new(exe)
        .args([words.to_str().unwrap(), "--letters", "abcdelnort", "--quiet"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no letter combination admits a pangram"));
}

#[test]
fn bad_letters_rejected() {
    let exe = env!("CARGO_BIN_EXE_spelling-bee");
    let dir = tempfile::tempdir().unwrap();
    let words = write_wordlist(&dir);

    let output = Command::new(exe)
        .args([words.to_str().unwrap(), "--letters", "ABC", "--quiet"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid letters"));
}

#[test]
fn min_length_below_four_rejected() {
    let exe = env!("CARGO_BIN_EXE_spelling-bee");
    let dir = tempfile::tempdir().unwrap();
    let words = write_wordlist(&dir);

    let output = Command::new(exe)
        .args([words.to_str().unwrap(), "--min-length", "3", "--quiet"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("minimum word length 3 is below 4"));
}
