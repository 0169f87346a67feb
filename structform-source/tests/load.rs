//! Loading records and configuration from disk.

use std::fs;

use structform_ir::{FieldType, PrimitiveKind};
use structform_source::{Config, Error, SourceSet};
use tempfile::TempDir;

const MODEL: &str = r#"
/// Server parameters.
pub struct M {
    /// parameter a
    pub a: i64,
    /// d is anonymous struct
    pub d: D,
    /// h with slice
    pub h: Vec<String>,
}

pub struct D {
    pub e: u16,
}
"#;

#[test]
fn test_open_and_lower() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.rs");
    fs::write(&path, MODEL).unwrap();

    let set = SourceSet::open_all(&[&path]).unwrap();
    let record = set.record("M").unwrap();

    assert_eq!(record.fields.len(), 3);
    assert_eq!(record.fields[0].docs, vec!["/// parameter a"]);
    assert_eq!(record.fields[0].ty, FieldType::primitive(PrimitiveKind::I64));
    match &record.fields[1].ty {
        FieldType::Record(d) => {
            assert_eq!(d.name, "D");
            assert_eq!(d.fields[0].ty, FieldType::primitive(PrimitiveKind::U16));
        }
        other => panic!("expected nested record, got {:?}", other),
    }
    assert_eq!(
        record.fields[2].ty,
        FieldType::slice(FieldType::primitive(PrimitiveKind::String))
    );
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = SourceSet::open_all(&[dir.path().join("nope.rs")]).err().unwrap();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_config_paths_are_relative_to_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("structform.toml");
    fs::write(
        &path,
        r#"
        [generate]
        inputs = ["src/model.rs"]
        records = ["M"]
        output = "src/form_gen.rs"
        "#,
    )
    .unwrap();

    let config = Config::open(&path).unwrap();
    assert_eq!(config.generate.inputs, vec![dir.path().join("src/model.rs")]);
    assert_eq!(config.generate.output, Some(dir.path().join("src/form_gen.rs")));
    assert_eq!(config.generate.records, vec!["M"]);
}
