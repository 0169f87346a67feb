//! The kind table: per-primitive behavior in one place.
//!
//! Adding a primitive kind means adding one arm to [`kind_spec`]; the
//! transformer and the population pass only ever consult the returned
//! [`KindSpec`].

use structform_ir::PrimitiveKind;

/// How submitted text is turned back into a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// `raw.parse::<T>()`, failures are collected.
    FromStr,
    /// The submitted text is the value (`raw.clone()`).
    Assign,
}

/// Generation behavior of one primitive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSpec {
    /// Rust type name used as the parse turbofish.
    pub type_name: &'static str,
    /// Format spec that renders a value as text.
    pub format: &'static str,
    pub parse: ParseStrategy,
}

/// Look up the generation behavior of a primitive kind.
pub fn kind_spec(kind: PrimitiveKind) -> KindSpec {
    let parse = match kind {
        PrimitiveKind::String => ParseStrategy::Assign,
        PrimitiveKind::Bool
        | PrimitiveKind::I8
        | PrimitiveKind::I16
        | PrimitiveKind::I32
        | PrimitiveKind::I64
        | PrimitiveKind::I128
        | PrimitiveKind::Isize
        | PrimitiveKind::U8
        | PrimitiveKind::U16
        | PrimitiveKind::U32
        | PrimitiveKind::U64
        | PrimitiveKind::U128
        | PrimitiveKind::Usize
        | PrimitiveKind::F32
        | PrimitiveKind::F64
        | PrimitiveKind::Complex32
        | PrimitiveKind::Complex64
        | PrimitiveKind::Char => ParseStrategy::FromStr,
    };

    KindSpec {
        type_name: kind.as_str(),
        format: "{}",
        parse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_formats_as_text() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(kind_spec(kind).format, "{}");
        }
    }

    #[test]
    fn test_only_strings_are_assigned() {
        let assigned: Vec<PrimitiveKind> = PrimitiveKind::ALL
            .into_iter()
            .filter(|kind| kind_spec(*kind).parse == ParseStrategy::Assign)
            .collect();
        assert_eq!(assigned, vec![PrimitiveKind::String]);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(kind_spec(PrimitiveKind::U16).type_name, "u16");
        assert_eq!(kind_spec(PrimitiveKind::Complex64).type_name, "Complex64");
    }
}
