//! Build-time generator for manifest-backed configuration accessors.
//!
//! The generator consumes *interface schemas*: declarative descriptions of
//! accessor interfaces whose methods each represent a typed configuration
//! value (method name, declared return type, optional key override and
//! default-value literal). For every valid interface it emits deterministic
//! Java source for a class implementing the interface by reading the
//! application's manifest metadata bundle, falling back to per-type defaults
//! when a value is absent or the bundle cannot be obtained.
//!
//! Validation failures are reported as structured [`Diagnostic`]s scoped to
//! the offending method and interface; a failing interface is skipped while
//! its siblings in the same batch still generate. Annotating a non-interface
//! declaration is the one structural error that aborts a batch outright.

pub mod cli;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod generator;
pub mod key;
pub mod model;
pub mod schema;
pub mod types;
pub mod value;
pub mod writer;

pub use diagnostics::{
    Diagnostic, DiagnosticKind, DiagnosticReport, Diagnostics, SourceLocation, ValidationError,
};
pub use error::GeneratorError;
pub use generator::{GeneratedClass, Generation, generate};
pub use schema::{DeclarationKind, InterfaceSchema, MetaSchema, MethodSchema, SchemaFile};
pub use types::{ConfigType, ResolvedDefault};
