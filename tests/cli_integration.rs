// Runs the scriptparse binary against fixture transcripts

use std::process::{Command, Output};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::fixtures::SCREENPLAY;
use test_utils::TestFixture;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scriptparse"))
        .args(args)
        .output()
        .expect("Failed to run scriptparse")
}

#[test]
fn test_csv_output() {
    let fixture = TestFixture::new();
    let path = fixture.create_transcript("scene.txt", SCREENPLAY);

    let output = run(&[
        path.to_str().unwrap(),
        "--speaker", "[A-Z]+",
        "--multi-line",
        "--non-dialogue", r"^\[.*\]$",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("Dialogue ID,Line Number,Speaker,Dialogue"));
    assert_eq!(lines.next(), Some("0,0,,[INT. KITCHEN - NIGHT]"));
    assert_eq!(lines.next(), Some("1,1,ALICE,\"Did you hear that?"));
}

#[test]
fn test_split_lines_output() {
    let fixture = TestFixture::new();
    let path = fixture.create_transcript("scene.txt", SCREENPLAY);

    let output = run(&[path.to_str().unwrap(), "--speaker", "[A-Z]+", "--multi-line", "--split-lines"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    // header plus one row per physical line
    assert_eq!(stdout.lines().count(), 1 + SCREENPLAY.lines().count());
    assert!(stdout.contains("1,1,ALICE,It came from the cellar.\n"));
}

#[test]
fn test_search_found_and_not_found() {
    let fixture = TestFixture::new();
    let path = fixture.create_transcript("scene.txt", SCREENPLAY);
    let path = path.to_str().unwrap();

    let found = run(&[path, "--speaker", "[A-Z]+", "--search", "neighbour*winter", "--match", "wildcard", "--multi-line"]);
    assert!(found.status.success());
    assert!(String::from_utf8(found.stdout).unwrap().starts_with("6\tBOB\t"));

    let missing = run(&[path, "--speaker", "[A-Z]+", "--search", "dog"]);
    assert_eq!(missing.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&missing.stderr).contains("no match"));
}

#[test]
fn test_wildcard_rejects_alphabet_only() {
    let fixture = TestFixture::new();
    let path = fixture.create_transcript("scene.txt", SCREENPLAY);
    let path = path.to_str().unwrap();

    let output = run(&[path, "--speaker", "[A-Z]+", "--search", "neighbour*winter", "--match", "wildcard", "--alphabet-only"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--alphabet-only cannot be combined"));

    // the same flag is fine for the other match modes
    let subset = run(&[path, "--speaker", "[A-Z]+", "--search", "cellar", "--alphabet-only", "--multi-line"]);
    assert!(subset.status.success(), "stderr: {}", String::from_utf8_lossy(&subset.stderr));
}

#[test]
fn test_capture_group_in_flags_fails() {
    let fixture = TestFixture::new();
    let path = fixture.create_transcript("scene.txt", SCREENPLAY);

    let output = run(&[path.to_str().unwrap(), "--speaker", r"(\w+)"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid parser settings"));
}

#[test]
fn test_missing_transcript_fails() {
    let fixture = TestFixture::new();
    let path = fixture.root_path.join("missing.txt");

    let output = run(&[path.to_str().unwrap()]);
    assert!(!output.status.success());
}
