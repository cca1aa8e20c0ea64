//! Batch generation driver.
//!
//! One call processes one batch; the diagnostic collector is constructed
//! fresh per call and returned with the result, so nothing persists between
//! rounds.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::emit;
use crate::error::GeneratorError;
use crate::model;
use crate::schema::InterfaceSchema;

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    /// Java package of the generated class.
    pub package: String,
    /// Simple name of the generated class.
    pub class_name: String,
    /// Complete Java source text.
    pub source: String,
}

/// Result of one generation round.
#[derive(Debug, Default)]
pub struct Generation {
    /// Successfully generated classes, in batch order.
    pub classes: Vec<GeneratedClass>,
    /// Validation diagnostics for skipped interfaces.
    pub diagnostics: Vec<Diagnostic>,
}

/// Processes a batch of interface schemas.
///
/// Interfaces are handled in batch order. A method-scoped validation failure
/// records a diagnostic and skips the owning interface; sibling interfaces
/// still generate.
///
/// # Errors
///
/// Returns [`GeneratorError::NotAnInterface`] when any schema in the batch
/// describes a non-interface declaration; the whole batch is aborted with no
/// output.
pub fn generate(batch: &[InterfaceSchema]) -> Result<Generation, GeneratorError> {
    let mut diagnostics = Diagnostics::default();
    let mut classes = Vec::with_capacity(batch.len());

    for schema in batch {
        match model::build_interface(schema, &mut diagnostics)? {
            Some(class_model) => {
                classes.push(GeneratedClass {
                    package: class_model.package.clone(),
                    class_name: class_model.class_name(),
                    source: emit::render_class(&class_model),
                });
            }
            None => {
                tracing::warn!(
                    interface = %schema.name,
                    "skipping interface with validation failures"
                );
            }
        }
    }

    Ok(Generation {
        classes,
        diagnostics: diagnostics.into_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DeclarationKind, MetaSchema, MethodSchema};

    fn interface(name: &str, methods: Vec<MethodSchema>) -> InterfaceSchema {
        InterfaceSchema {
            name: name.to_owned(),
            package: "com.example.app".to_owned(),
            kind: DeclarationKind::Interface,
            methods,
        }
    }

    fn int_method(name: &str, default: Option<&str>) -> MethodSchema {
        MethodSchema {
            name: name.to_owned(),
            returns: "int".to_owned(),
            meta: default.map(|value| MetaSchema {
                key: None,
                value: Some(value.to_owned()),
            }),
        }
    }

    #[test]
    fn failing_interface_does_not_suppress_siblings() {
        let batch = vec![
            interface("Broken", vec![int_method("getCount", Some("abc"))]),
            interface("Healthy", vec![int_method("getCount", None)]),
        ];
        let generation = generate(&batch).expect("no structural errors");

        assert_eq!(generation.classes.len(), 1);
        assert_eq!(
            generation.classes.first().map(|c| c.class_name.as_str()),
            Some("HealthyManifestConfig")
        );
        assert_eq!(generation.diagnostics.len(), 1);
        assert_eq!(
            generation.diagnostics.first().map(|d| d.location.to_string()),
            Some("Broken.getCount".to_owned())
        );
    }

    #[test]
    fn structural_error_aborts_the_whole_batch() {
        let batch = vec![
            interface("Healthy", vec![int_method("getCount", None)]),
            InterfaceSchema {
                name: "NotAnInterface".to_owned(),
                package: "com.example.app".to_owned(),
                kind: DeclarationKind::Enum,
                methods: vec![],
            },
        ];
        let result = generate(&batch);
        assert!(matches!(result, Err(GeneratorError::NotAnInterface { .. })));
    }

    #[test]
    fn generation_is_idempotent() {
        let batch = vec![interface(
            "Sample",
            vec![int_method("getCount", Some("5")), int_method("getLimit", None)],
        )];
        let first = generate(&batch).expect("generate once");
        let second = generate(&batch).expect("generate twice");

        assert_eq!(first.classes, second.classes);
        assert!(first.diagnostics.is_empty());
    }

    #[test]
    fn accessor_count_matches_method_count_in_order() {
        let methods: Vec<_> = (0..5)
            .map(|i| int_method(&format!("getValue{i}"), None))
            .collect();
        let batch = vec![interface("Wide", methods)];
        let generation = generate(&batch).expect("generate");

        let source = &generation.classes.first().expect("one class").source;
        for i in 0..5 {
            assert!(source.contains(&format!("public int getValue{i}()")));
        }
        let first_pos = source.find("getValue0").expect("first accessor");
        let last_pos = source.find("getValue4").expect("last accessor");
        assert!(first_pos < last_pos);
    }
}
