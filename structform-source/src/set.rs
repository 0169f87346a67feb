use std::path::Path;

use indexmap::IndexMap;
use structform_ir::RecordDecl;
use tracing::{debug, warn};

use crate::file::SourceFile;
use crate::lower::{Lowerer, doc_lines};
use crate::{Error, Result};

/// All loaded source files; records are looked up across every file.
#[derive(Default)]
pub struct SourceSet {
    files: Vec<SourceFile>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open and parse every path, stopping at the first failure.
    pub fn open_all<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut set = Self::new();
        for path in paths {
            set.add(SourceFile::open(path)?);
        }
        Ok(set)
    }

    pub fn add(&mut self, file: SourceFile) {
        self.files.push(file);
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Names of every struct in the set, in file then declaration order.
    pub fn struct_names(&self) -> Vec<String> {
        self.index().keys().cloned().collect()
    }

    /// Lower the requested records, in the requested order.
    pub fn records(&self, names: &[impl AsRef<str>]) -> Result<Vec<RecordDecl>> {
        let index = self.index();
        let structs: IndexMap<String, &syn::ItemStruct> =
            index.iter().map(|(name, (_, item))| (name.clone(), *item)).collect();

        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let Some((file, item)) = index.get(name) else {
                    return Err(Box::new(Error::RecordNotFound {
                        name: name.to_string(),
                        available: structs.keys().cloned().collect::<Vec<_>>().join(", "),
                    }));
                };

                let fields = Lowerer::new(&structs)
                    .lower_struct(item)
                    .ok_or_else(|| file.not_named_struct(item))?;
                debug!(record = name, fields = fields.len(), "lowered record");

                Ok(RecordDecl {
                    name: name.to_string(),
                    docs: doc_lines(&item.attrs),
                    fields,
                })
            })
            .collect()
    }

    /// Lower a single record.
    pub fn record(&self, name: &str) -> Result<RecordDecl> {
        let mut records = self.records(&[name])?;
        Ok(records.remove(0))
    }

    fn index(&self) -> IndexMap<String, (&SourceFile, &syn::ItemStruct)> {
        let mut index = IndexMap::new();
        for file in &self.files {
            for item in file.structs() {
                let name = item.ident.to_string();
                if index.contains_key(&name) {
                    warn!(name, file = %file.path().display(), "duplicate struct ignored");
                    continue;
                }
                index.insert(name, (file, item));
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use structform_ir::{FieldType, PrimitiveKind};

    fn set(sources: &[(&str, &str)]) -> SourceSet {
        let mut set = SourceSet::new();
        for (name, src) in sources {
            set.add(SourceFile::parse(*src, name).unwrap());
        }
        set
    }

    #[test]
    fn test_records_across_files() {
        let set = set(&[
            ("a.rs", "/// The model\nstruct M { d: D, n: u8 }"),
            ("b.rs", "struct D { e: u16 }"),
        ]);

        let records = set.records(&["M", "D"]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "M");
        assert_eq!(records[0].docs, vec!["/// The model"]);
        assert!(matches!(records[0].fields[0].ty, FieldType::Record(_)));
        assert_eq!(records[1].fields[0].ty, FieldType::primitive(PrimitiveKind::U16));
    }

    #[test]
    fn test_record_not_found_lists_available() {
        let set = set(&[("a.rs", "struct A { x: u8 } struct B { y: u8 }")]);
        let err = set.record("C").unwrap_err();

        match *err {
            Error::RecordNotFound { name, available } => {
                assert_eq!(name, "C");
                assert_eq!(available, "A, B");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_tuple_struct_is_rejected() {
        let set = set(&[("a.rs", "struct T(u8);")]);
        let err = set.record("T").unwrap_err();
        assert!(matches!(*err, Error::NotNamedStruct { ref name, .. } if name == "T"));
    }

    #[test]
    fn test_first_declaration_wins() {
        let set = set(&[("a.rs", "struct A { x: u8 }"), ("b.rs", "struct A { y: bool }")]);
        let record = set.record("A").unwrap();
        assert_eq!(record.fields[0].names, vec!["x"]);
        assert_eq!(set.struct_names(), vec!["A"]);
    }
}
