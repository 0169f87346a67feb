use std::path::{Path, PathBuf};

use miette::NamedSource;
use syn::spanned::Spanned;
use tracing::debug;

use crate::error::span_of;
use crate::{Error, Result};

/// A parsed Rust source file and the structs declared in it.
pub struct SourceFile {
    path: PathBuf,
    content: String,
    structs: Vec<syn::ItemStruct>,
}

impl SourceFile {
    /// Open and parse a Rust source file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let mut file = Self::parse(content, &filename)?;
        file.path = path;
        Ok(file)
    }

    /// Parse Rust source held in memory.
    pub fn parse(content: impl Into<String>, filename: &str) -> Result<Self> {
        let content = content.into();
        let ast = syn::parse_file(&content).map_err(|e| Error::parse(e, &content, filename))?;

        let mut structs = Vec::new();
        collect_structs(ast.items, &mut structs);
        debug!(file = filename, structs = structs.len(), "parsed source file");

        Ok(Self {
            path: PathBuf::from(filename),
            content,
            structs,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Structs in declaration order, inline modules included.
    pub fn structs(&self) -> &[syn::ItemStruct] {
        &self.structs
    }

    /// Error for a struct of this file that has no named fields.
    pub(crate) fn not_named_struct(&self, item: &syn::ItemStruct) -> Box<Error> {
        let span = span_of(
            &self.content,
            item.ident.span().start(),
            item.ident.span().end(),
        )
        .or_else(|| span_of(&self.content, item.span().start(), item.span().end()));

        Box::new(Error::NotNamedStruct {
            src: NamedSource::new(self.path.display().to_string(), self.content.clone()),
            span,
            name: item.ident.to_string(),
        })
    }
}

fn collect_structs(items: Vec<syn::Item>, out: &mut Vec<syn::ItemStruct>) {
    for item in items {
        match item {
            syn::Item::Struct(item) => out.push(item),
            syn::Item::Mod(module) => {
                if let Some((_, items)) = module.content {
                    collect_structs(items, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_structs_in_inline_modules() {
        let file = SourceFile::parse(
            r#"
            struct A { x: u8 }
            fn helper() {}
            mod inner {
                pub struct B { y: String }
                mod deeper { struct C(u8); }
            }
            "#,
            "model.rs",
        )
        .unwrap();

        let names: Vec<String> = file.structs().iter().map(|s| s.ident.to_string()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(file.path(), Path::new("model.rs"));
    }

    #[test]
    fn test_parse_error() {
        let err = SourceFile::parse("struct {", "bad.rs").err().unwrap();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
