use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;
fn cmd() -> Command {
    Command::cargo_bin("flatdump").unwrap()
}
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join("README.md"), "# skipped").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "pub fn test() {}").unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/dep.js"), "skipped").unwrap();
    let output = out.path().join("dump.txt");
    cmd().arg(dir.path()).arg(&output).assert().success();
    let dumped = fs::read_to_string(&output).unwrap();
    let expected = format!(
        "'{}'\n'fn main() {{}}'\n\n\n\n'{}'\n'pub fn test() {{}}'\n\n\n\n",
        dir.path().join("main.rs").display(),
        dir.path().join("src/lib.rs").display()
    );
    assert_eq!(dumped, expected);
}
#[test]
fn integration_missing_root_fails() {
    let out = tempdir().unwrap();
    let output = out.path().join("dump.txt");
    cmd()
        .arg(out.path().join("missing"))
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Path not found"));
    assert!(!output.exists());
}
#[test]
fn integration_exclusion_flags() {
    let dir = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "kept").unwrap();
    fs::write(dir.path().join("Cargo.lock"), "dropped").unwrap();
    fs::create_dir(dir.path().join("target")).unwrap();
    fs::write(dir.path().join("target/build.log"), "dropped").unwrap();
    let config = out.path().join("exclusions.json");
    fs::write(&config, r#"{"files": ["Cargo.lock"]}"#).unwrap();
    let output = out.path().join("dump.txt");
    cmd()
        .arg(dir.path())
        .arg(&output)
        .arg("--exclusions")
        .arg(&config)
        .args(["--exclude-dir", "target"])
        .assert()
        .success();
    let dumped = fs::read_to_string(&output).unwrap();
    assert!(dumped.contains("'kept'"));
    assert!(!dumped.contains("dropped"));
}
#[test]
fn integration_bad_exclusions_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("exclusions.json");
    fs::write(&config, "not json").unwrap();
    cmd()
        .arg(dir.path())
        .arg(dir.path().join("dump.txt"))
        .arg("--exclusions")
        .arg(&config)
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
