//! Default value parsing against a method's declared type.

use crate::diagnostics::ValidationError;
use crate::types::{ConfigType, ResolvedDefault};

/// Resolves a method's default value from its optional literal.
///
/// An absent or empty literal resolves to the type's canonical fallback with
/// no error. Otherwise the literal is parsed strictly: base-10 signed
/// integers, `true`/`false` (case-insensitive) booleans, decimal floats, and
/// verbatim strings. There is no truthy/falsy coercion.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidValue`] when the literal does not parse
/// as the declared type.
pub fn resolve_default(
    ty: ConfigType,
    literal: Option<&str>,
) -> Result<ResolvedDefault, ValidationError> {
    let Some(text) = literal.filter(|value| !value.is_empty()) else {
        return Ok(ty.canonical_default());
    };

    match ty {
        ConfigType::Integer => text
            .parse::<i32>()
            .map(ResolvedDefault::Integer)
            .map_err(|_| invalid(ty, text)),
        ConfigType::Boolean => parse_boolean(text)
            .map(ResolvedDefault::Boolean)
            .ok_or_else(|| invalid(ty, text)),
        // Non-finite floats parse in Rust but have no Java literal form.
        ConfigType::Float => text
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .map(ResolvedDefault::Float)
            .ok_or_else(|| invalid(ty, text)),
        ConfigType::String => Ok(ResolvedDefault::String(text.to_owned())),
    }
}

fn parse_boolean(literal: &str) -> Option<bool> {
    if literal.eq_ignore_ascii_case("true") {
        Some(true)
    } else if literal.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn invalid(ty: ConfigType, literal: &str) -> ValidationError {
    ValidationError::InvalidValue {
        ty,
        literal: literal.to_owned(),
    }
}
