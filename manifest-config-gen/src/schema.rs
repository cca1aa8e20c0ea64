//! Raw interface schema model and schema file loading.
//!
//! The schema is plain data handed to the generator by the host; the
//! generator never inspects a live type system. Files load from TOML or
//! JSON, selected by extension.

use camino::Utf8Path;
use serde::Deserialize;

use crate::error::GeneratorError;

/// Declaration kind of the construct carrying the annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// An interface declaration; the only kind the generator accepts.
    #[default]
    Interface,
    /// A concrete class declaration.
    Class,
    /// An enum declaration.
    Enum,
    /// An annotation declaration.
    Annotation,
}

/// A batch of interface schemas parsed from one schema file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaFile {
    /// Interfaces in file order.
    #[serde(default, rename = "interface")]
    pub interfaces: Vec<InterfaceSchema>,
}

/// Raw description of one annotated interface.
#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceSchema {
    /// Simple name of the interface.
    pub name: String,
    /// Java package the interface and generated class belong to.
    pub package: String,
    /// Kind of the annotated declaration.
    #[serde(default)]
    pub kind: DeclarationKind,
    /// Abstract methods in declaration order.
    #[serde(default, rename = "method")]
    pub methods: Vec<MethodSchema>,
}

/// Raw description of one accessor method.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodSchema {
    /// Method name as declared on the interface.
    pub name: String,
    /// Declared Java return type.
    pub returns: String,
    /// Optional per-method metadata annotation.
    #[serde(default)]
    pub meta: Option<MetaSchema>,
}

/// Per-method metadata: key override and default-value literal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaSchema {
    /// Explicit manifest key, used verbatim when non-blank.
    #[serde(default)]
    pub key: Option<String>,
    /// Default-value literal, parsed against the declared return type.
    #[serde(default)]
    pub value: Option<String>,
}

/// Loads a schema file, selecting the parser from the file extension.
///
/// # Errors
///
/// Returns [`GeneratorError::Io`] when the file cannot be read,
/// [`GeneratorError::SchemaToml`] / [`GeneratorError::SchemaJson`] when it
/// does not parse, and [`GeneratorError::UnsupportedExtension`] for any
/// extension other than `.toml` or `.json`.
pub fn load_schema(path: &Utf8Path) -> Result<SchemaFile, GeneratorError> {
    let text = std::fs::read_to_string(path).map_err(|io_err| GeneratorError::Io {
        path: path.to_path_buf(),
        source: io_err,
    })?;

    match path.extension() {
        Some("toml") => toml::from_str(&text).map_err(|parse_err| GeneratorError::SchemaToml {
            path: path.to_path_buf(),
            source: Box::new(parse_err),
        }),
        Some("json") => serde_json::from_str(&text).map_err(GeneratorError::SchemaJson),
        other => Err(GeneratorError::UnsupportedExtension {
            path: path.to_path_buf(),
            extension: other.unwrap_or("").to_owned(),
        }),
    }
}
