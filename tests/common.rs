#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwh() -> Command {
    cargo_bin_cmd!("rworkhours")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkhours.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add an entry through the CLI and return its id, parsed from "#<id>".
pub fn add_entry(db_path: &str, date: &str, start: &str, end: &str, note: &str, bonus: &str) -> i64 {
    let out = rwh()
        .args([
            "--db", db_path, "add", "--date", date, "--start", start, "--end", end, "--note", note,
            "--bonus", bonus,
        ])
        .output()
        .expect("run add");
    assert!(out.status.success(), "add failed: {:?}", out);

    let stdout = String::from_utf8_lossy(&out.stdout);
    let after = stdout.split('#').nth(1).expect("id in add output");
    after
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .expect("numeric id")
}

/// Initialize the DB and add two January 2024 entries (8.5h and 10h).
pub fn init_db_with_data(db_path: &str) -> (i64, i64) {
    rwh()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let a = add_entry(db_path, "2024-01-05", "07:00", "15:30", "shift", "20");
    let b = add_entry(db_path, "2024-01-08", "07:00", "17:00", "", "0");
    (a, b)
}
