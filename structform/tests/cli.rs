use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const MODEL: &str = r#"
pub struct M {
    /// parameter a
    pub a: i64,
    /// d is anonymous struct
    pub d: D,
    /// h with slice
    pub h: Vec<String>,
}

pub struct D {
    /// e value
    pub e: u16,
}

pub struct P {
    /// boxed
    pub p: Box<D>,
}
"#;

fn structform(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_structform"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run structform")
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("model.rs"), MODEL).unwrap();
    dir
}

#[test]
fn test_generate_writes_file() {
    let dir = workspace();
    let output = structform(
        dir.path(),
        &["generate", "-i", "model.rs", "-r", "M", "-o", "out/form_gen.rs", "--no-format"],
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let generated = std::fs::read_to_string(dir.path().join("out/form_gen.rs")).unwrap();
    assert!(generated.starts_with("// Code generated by structform. DO NOT EDIT.\n"));
    assert!(generated.contains("impl M {"));
    assert!(generated.contains("M.d.e"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated: "));
}

#[test]
fn test_generate_uses_config_file() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("structform.toml"),
        "[generate]\ninputs = [\"model.rs\"]\nrecords = [\"M\"]\noutput = \"form_gen.rs\"\nformat = false\n",
    )
    .unwrap();

    let output = structform(dir.path(), &["generate"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(dir.path().join("form_gen.rs").is_file());
}

#[test]
fn test_strict_unsupported_type_fails() {
    let dir = workspace();
    let output = structform(dir.path(), &["generate", "-i", "model.rs", "-r", "P", "--strict", "--dry-run"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: record 'P' has 1 error(s) (not generated)"));
    assert!(stderr.contains("unsupported type 'Box<D>'"));
}

#[test]
fn test_soft_unsupported_type_is_skipped() {
    let dir = workspace();
    let output = structform(dir.path(), &["generate", "-i", "model.rs", "-r", "P", "--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("structform: skipped field 'P.p'"));
}

#[test]
fn test_missing_arguments_are_reported_together() {
    let dir = TempDir::new().unwrap();
    let output = structform(dir.path(), &["generate"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no input file given"));
    assert!(stderr.contains("no record given"));
    assert!(stderr.contains("no output file given"));
}

#[test]
fn test_unknown_record_fails() {
    let dir = workspace();
    let output = structform(dir.path(), &["check", "-i", "model.rs", "-r", "Nope"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Nope"));
}

#[test]
fn test_check_json() {
    let dir = workspace();
    let output = structform(dir.path(), &["check", "-i", "model.rs", "-r", "M", "--json"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["records"][0]["name"], "M");
    assert_eq!(report["records"][0]["fields"], 3);
    assert_eq!(report["errors"].as_array().unwrap().len(), 0);
}
