//! Catalog of supported configuration value types.
//!
//! The catalog is fixed: four semantic types, each with a canonical fallback
//! value, a manifest bundle getter, and a Java literal rendering for resolved
//! defaults. Everything else is rejected during validation.

use std::fmt;

/// A supported configuration value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigType {
    /// Signed 32-bit integer (`int` / `java.lang.Integer`).
    Integer,
    /// Boolean (`boolean` / `java.lang.Boolean`).
    Boolean,
    /// 32-bit float (`float` / `java.lang.Float`).
    Float,
    /// String (`java.lang.String`).
    String,
}

impl ConfigType {
    /// Resolves a declared return type to a catalog entry.
    ///
    /// Both primitive and boxed spellings are accepted. Returns `None` for
    /// any type outside the catalog.
    #[must_use]
    pub fn from_declared(declared: &str) -> Option<Self> {
        match declared {
            "int" | "Integer" | "java.lang.Integer" => Some(Self::Integer),
            "boolean" | "Boolean" | "java.lang.Boolean" => Some(Self::Boolean),
            "float" | "Float" | "java.lang.Float" => Some(Self::Float),
            "String" | "java.lang.String" => Some(Self::String),
            _ => None,
        }
    }

    /// Canonical name used in diagnostic messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::String => "String",
        }
    }

    /// Bundle getter invoked by the emitted accessor body.
    #[must_use]
    pub const fn bundle_getter(self) -> &'static str {
        match self {
            Self::Integer => "getInt",
            Self::Boolean => "getBoolean",
            Self::Float => "getFloat",
            Self::String => "getString",
        }
    }

    /// Fallback default used when no default literal is declared.
    #[must_use]
    pub const fn canonical_default(self) -> ResolvedDefault {
        match self {
            Self::Integer => ResolvedDefault::Integer(-1),
            Self::Boolean => ResolvedDefault::Boolean(false),
            Self::Float => ResolvedDefault::Float(-1.0),
            Self::String => ResolvedDefault::String(std::string::String::new()),
        }
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A default value resolved to its declared type.
///
/// The variant always matches the method's [`ConfigType`]; a default is never
/// left unresolved.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedDefault {
    /// Integer default.
    Integer(i32),
    /// Boolean default.
    Boolean(bool),
    /// Float default.
    Float(f32),
    /// Verbatim string default.
    String(String),
}

impl ResolvedDefault {
    /// Catalog type this default belongs to.
    #[must_use]
    pub const fn config_type(&self) -> ConfigType {
        match self {
            Self::Integer(_) => ConfigType::Integer,
            Self::Boolean(_) => ConfigType::Boolean,
            Self::Float(_) => ConfigType::Float,
            Self::String(_) => ConfigType::String,
        }
    }

    /// Renders the default as a Java literal for the emitted accessor.
    #[must_use]
    pub fn java_literal(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Boolean(value) => value.to_string(),
            Self::Float(value) => float_literal(*value),
            Self::String(value) => java_string_literal(value),
        }
    }
}

/// Renders a Java `float` literal with an `f` suffix and a decimal point.
fn float_literal(value: f32) -> String {
    let mut text = value.to_string();
    // `f32::to_string` drops the fraction for whole values ("-1" for -1.0).
    if text.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        text.push_str(".0");
    }
    text.push('f');
    text
}

/// Renders a quoted Java string literal, escaping characters that would
/// otherwise break the emitted source.
#[must_use]
pub fn java_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
