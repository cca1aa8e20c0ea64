//! Validated interface model building.
//!
//! Turns a raw [`InterfaceSchema`] into a [`ClassModel`] ready for emission,
//! running the key resolver and default-value parser over every method and
//! recording failures against the round's diagnostic collector.

use crate::diagnostics::{Diagnostics, ValidationError};
use crate::error::GeneratorError;
use crate::key;
use crate::schema::{DeclarationKind, InterfaceSchema, MethodSchema};
use crate::types::{ConfigType, ResolvedDefault};
use crate::value;

/// Fixed suffix appended to the interface name for the generated class.
pub const CLASS_SUFFIX: &str = "ManifestConfig";

/// One generated accessor, 1:1 with an interface method.
#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
    /// Method name as declared on the interface.
    pub method_name: String,
    /// Declared return type, preserved verbatim for the emitted signature.
    pub returns: String,
    /// Catalog type backing the accessor.
    pub config_type: ConfigType,
    /// Validated manifest lookup key.
    pub key: String,
    /// Default passed to the bundle getter.
    pub default: ResolvedDefault,
}

/// A validated interface ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassModel {
    /// Java package of the interface and the generated class.
    pub package: String,
    /// Simple name of the implemented interface.
    pub interface_name: String,
    /// Accessors in interface declaration order.
    pub accessors: Vec<Accessor>,
}

impl ClassModel {
    /// Name of the generated implementing class.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("{}{CLASS_SUFFIX}", self.interface_name)
    }
}

/// Builds the validated model for one interface schema.
///
/// Method-scoped failures are recorded against the collector and drop the
/// interface (`Ok(None)`) without affecting the rest of the batch. Every
/// method is still validated so one round surfaces all failures.
///
/// # Errors
///
/// Returns [`GeneratorError::NotAnInterface`] when the annotated declaration
/// is not an interface; this is fatal to the whole batch.
pub fn build_interface(
    schema: &InterfaceSchema,
    diagnostics: &mut Diagnostics,
) -> Result<Option<ClassModel>, GeneratorError> {
    if schema.kind != DeclarationKind::Interface {
        return Err(GeneratorError::NotAnInterface {
            name: schema.name.clone(),
        });
    }

    let mut accessors = Vec::with_capacity(schema.methods.len());
    let mut failed = false;
    for method in &schema.methods {
        match build_accessor(method) {
            Ok(accessor) => accessors.push(accessor),
            Err(validation_err) => {
                diagnostics.record(&schema.name, Some(&method.name), validation_err);
                failed = true;
            }
        }
    }

    if failed {
        return Ok(None);
    }
    Ok(Some(ClassModel {
        package: schema.package.clone(),
        interface_name: schema.name.clone(),
        accessors,
    }))
}

fn build_accessor(method: &MethodSchema) -> Result<Accessor, ValidationError> {
    // The unsupported-type check precedes any key or literal handling.
    let config_type = ConfigType::from_declared(&method.returns)
        .ok_or_else(|| ValidationError::UnsupportedType(method.returns.clone()))?;

    let meta = method.meta.as_ref();
    let resolved_key = key::resolve_key(&method.name, meta.and_then(|m| m.key.as_deref()))?;
    let default = value::resolve_default(config_type, meta.and_then(|m| m.value.as_deref()))?;

    Ok(Accessor {
        method_name: method.name.clone(),
        returns: method.returns.clone(),
        config_type,
        key: resolved_key,
        default,
    })
}
