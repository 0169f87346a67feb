//! Lowering of `syn` structs into the declaration IR.

use indexmap::IndexMap;
use quote::ToTokens;
use structform_ir::{FieldDecl, FieldType, PrimitiveFamily, PrimitiveKind};
use syn::ext::IdentExt;
use tracing::{debug, trace};

/// Lowers struct fields, expanding named structs of the source set into
/// nested records.
///
/// Structs currently being expanded are kept on a stack; a reference back
/// to one of them lowers to an unsupported type.
pub(crate) struct Lowerer<'a> {
    structs: &'a IndexMap<String, &'a syn::ItemStruct>,
    stack: Vec<String>,
}

impl<'a> Lowerer<'a> {
    pub(crate) fn new(structs: &'a IndexMap<String, &'a syn::ItemStruct>) -> Self {
        Self {
            structs,
            stack: Vec::new(),
        }
    }

    /// Lower the named fields of a struct. `None` for tuple and unit structs.
    pub(crate) fn lower_struct(&mut self, item: &syn::ItemStruct) -> Option<Vec<FieldDecl>> {
        let syn::Fields::Named(fields) = &item.fields else {
            return None;
        };

        self.stack.push(item.ident.to_string());
        let lowered = fields.named.iter().map(|f| self.lower_field(f)).collect();
        self.stack.pop();
        Some(lowered)
    }

    fn lower_field(&mut self, field: &syn::Field) -> FieldDecl {
        let names = field.ident.iter().map(|i| i.unraw().to_string()).collect();
        FieldDecl {
            names,
            docs: doc_lines(&field.attrs),
            ty: self.lower_type(&field.ty),
        }
    }

    fn lower_type(&mut self, ty: &syn::Type) -> FieldType {
        match ty {
            syn::Type::Paren(inner) => self.lower_type(&inner.elem),
            syn::Type::Group(inner) => self.lower_type(&inner.elem),
            syn::Type::Path(path) if path.qself.is_none() => self.lower_path(path, ty),
            _ => FieldType::unsupported(type_name(ty)),
        }
    }

    fn lower_path(&mut self, path: &syn::TypePath, ty: &syn::Type) -> FieldType {
        let Some(last) = path.path.segments.last() else {
            return FieldType::unsupported(type_name(ty));
        };
        let ident = last.ident.to_string();

        match &last.arguments {
            syn::PathArguments::None => {
                let bare = path.path.segments.len() == 1;
                // Complex types are emitted unqualified, so only the bare name is accepted.
                if let Some(kind) = PrimitiveKind::from_type_name(&ident)
                    .filter(|kind| bare || kind.family() != PrimitiveFamily::Complex)
                {
                    return FieldType::primitive(kind);
                }
                if bare {
                    return self.lower_named(&ident);
                }
                FieldType::unsupported(type_name(ty))
            }
            syn::PathArguments::AngleBracketed(args) if ident == "Vec" && args.args.len() == 1 => {
                match args.args.first() {
                    Some(syn::GenericArgument::Type(element)) => {
                        FieldType::slice(self.lower_type(element))
                    }
                    _ => FieldType::unsupported(type_name(ty)),
                }
            }
            _ => FieldType::unsupported(type_name(ty)),
        }
    }

    fn lower_named(&mut self, name: &str) -> FieldType {
        if self.stack.iter().any(|s| s == name) {
            debug!(name, "recursive struct reference");
            return FieldType::unsupported(name);
        }

        let Some(item) = self.structs.get(name).copied() else {
            return FieldType::unsupported(name);
        };

        trace!(name, "expanding nested struct");
        match self.lower_struct(item) {
            Some(fields) => FieldType::record(name, fields),
            None => FieldType::unsupported(name),
        }
    }
}

/// Doc attributes as comment lines (`///text`).
pub(crate) fn doc_lines(attrs: &[syn::Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(syn::MetaNameValue {
                value:
                    syn::Expr::Lit(syn::ExprLit {
                        lit: syn::Lit::Str(text),
                        ..
                    }),
                ..
            }) => Some(format!("///{}", text.value())),
            _ => None,
        })
        .collect()
}

/// A type as written, with the token spacing tightened.
fn type_name(ty: &syn::Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
}
