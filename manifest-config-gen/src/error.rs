//! Error types for the `manifest-config-gen` pipeline.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::diagnostics::DiagnosticReport;

/// Errors surfaced by the `manifest-config-gen` pipeline.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The annotated declaration is not an interface; fatal to the whole
    /// batch, no output is produced for any interface in it.
    #[error("Only interfaces can be annotated with @ManifestConfig")]
    NotAnInterface {
        /// Name of the offending declaration.
        name: String,
    },

    /// Failed to parse a JSON schema file.
    #[error("failed to parse schema JSON: {0}")]
    SchemaJson(#[from] serde_json::Error),

    /// Failed to parse a TOML schema file.
    #[error("failed to parse schema TOML in '{path}': {source}")]
    SchemaToml {
        /// Schema file that failed to parse.
        path: Utf8PathBuf,
        /// Underlying TOML parser error.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// Schema file extension does not map to a supported format.
    #[error("unsupported schema extension '{extension}' for '{path}'; use .toml or .json")]
    UnsupportedExtension {
        /// Schema file with the unsupported extension.
        path: Utf8PathBuf,
        /// Extension found on the file.
        extension: String,
    },

    /// Validation diagnostics were raised during the round.
    #[error("schema validation failed:\n{0}")]
    Validation(DiagnosticReport),

    /// I/O error reading a schema or writing generated output.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path involved in the failed operation.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
