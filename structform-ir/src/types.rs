//! Primitive type classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Family a primitive kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimitiveFamily {
    Boolean,
    Integer,
    Float,
    Complex,
    String,
    /// `u8` and `char`.
    ByteOrChar,
}

/// A primitive field type.
///
/// Every primitive can be formatted as text and parsed back, which is what
/// makes it representable as a single text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Complex32,
    Complex64,
    String,
    Char,
}

impl PrimitiveKind {
    /// All primitive kinds, in declaration order.
    pub const ALL: [PrimitiveKind; 19] = [
        PrimitiveKind::Bool,
        PrimitiveKind::I8,
        PrimitiveKind::I16,
        PrimitiveKind::I32,
        PrimitiveKind::I64,
        PrimitiveKind::I128,
        PrimitiveKind::Isize,
        PrimitiveKind::U8,
        PrimitiveKind::U16,
        PrimitiveKind::U32,
        PrimitiveKind::U64,
        PrimitiveKind::U128,
        PrimitiveKind::Usize,
        PrimitiveKind::F32,
        PrimitiveKind::F64,
        PrimitiveKind::Complex32,
        PrimitiveKind::Complex64,
        PrimitiveKind::String,
        PrimitiveKind::Char,
    ];

    /// The Rust type name of this kind as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::I8 => "i8",
            PrimitiveKind::I16 => "i16",
            PrimitiveKind::I32 => "i32",
            PrimitiveKind::I64 => "i64",
            PrimitiveKind::I128 => "i128",
            PrimitiveKind::Isize => "isize",
            PrimitiveKind::U8 => "u8",
            PrimitiveKind::U16 => "u16",
            PrimitiveKind::U32 => "u32",
            PrimitiveKind::U64 => "u64",
            PrimitiveKind::U128 => "u128",
            PrimitiveKind::Usize => "usize",
            PrimitiveKind::F32 => "f32",
            PrimitiveKind::F64 => "f64",
            PrimitiveKind::Complex32 => "Complex32",
            PrimitiveKind::Complex64 => "Complex64",
            PrimitiveKind::String => "String",
            PrimitiveKind::Char => "char",
        }
    }

    /// Look up a kind by its type name (`u16`, `String`, ...).
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// The family this kind belongs to.
    pub fn family(&self) -> PrimitiveFamily {
        match self {
            PrimitiveKind::Bool => PrimitiveFamily::Boolean,
            PrimitiveKind::I8
            | PrimitiveKind::I16
            | PrimitiveKind::I32
            | PrimitiveKind::I64
            | PrimitiveKind::I128
            | PrimitiveKind::Isize
            | PrimitiveKind::U16
            | PrimitiveKind::U32
            | PrimitiveKind::U64
            | PrimitiveKind::U128
            | PrimitiveKind::Usize => PrimitiveFamily::Integer,
            PrimitiveKind::F32 | PrimitiveKind::F64 => PrimitiveFamily::Float,
            PrimitiveKind::Complex32 | PrimitiveKind::Complex64 => PrimitiveFamily::Complex,
            PrimitiveKind::String => PrimitiveFamily::String,
            PrimitiveKind::U8 | PrimitiveKind::Char => PrimitiveFamily::ByteOrChar,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
