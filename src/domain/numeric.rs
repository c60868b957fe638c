//! Syntactic classification of declared types
//!
//! The scanner only sees source text, so classification is by type name.
//! Aliases and generic parameters cannot be resolved and classify as
//! `Unknown`; the linter gives those the benefit of the doubt.

/// What a declared type can be told to be from its spelling alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericClass {
    /// A primitive integer type, wide enough for an epoch-millisecond count
    Integer,
    /// A floating point primitive
    Float,
    /// `bool`
    Bool,
    /// `String`, `str`, `char`
    Text,
    /// The unit type `()`
    Unit,
    /// Anything the scanner cannot resolve syntactically
    Unknown,
}

impl NumericClass {
    /// Classify a rendered type string
    pub fn classify(declared_type: &str) -> NumericClass {
        let trimmed = declared_type.trim();
        if trimmed == "()" || trimmed.is_empty() {
            return NumericClass::Unit;
        }

        // Strip reference sigils and lifetimes so "&'a mut str" classifies
        // like "str".
        let mut base = trimmed.trim_start_matches('&').trim_start();
        if base.starts_with('\'') {
            base = base
                .split_once(char::is_whitespace)
                .map_or("", |(_, rest)| rest);
        }
        let base = base.trim_start_matches("mut ").trim_start();

        // Only the last path segment matters: std::primitive::u64 is u64.
        let name = base.rsplit("::").next().unwrap_or(base).trim();

        match name {
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
            | "u128" | "usize" => NumericClass::Integer,
            "f32" | "f64" => NumericClass::Float,
            "bool" => NumericClass::Bool,
            "String" | "str" | "char" => NumericClass::Text,
            _ => NumericClass::Unknown,
        }
    }

    /// Whether the type can hold an epoch-millisecond count
    ///
    /// `Unknown` counts as compatible: a type alias may well be an integer.
    pub fn is_integer_like(self) -> bool {
        matches!(self, NumericClass::Integer | NumericClass::Unknown)
    }
}
