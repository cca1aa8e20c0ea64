//! Manifest key resolution for accessor methods.

use crate::diagnostics::ValidationError;

/// Resolves the manifest lookup key for a method.
///
/// An explicit, non-blank key is used verbatim; otherwise the key is derived
/// from the method name by capitalizing only its first character. The chosen
/// key is validated regardless of origin: it must be non-empty and contain
/// no whitespace. No other transformation is applied.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyKey`] or
/// [`ValidationError::WhitespaceKey`] when the chosen key fails validation.
pub fn resolve_key(method_name: &str, explicit: Option<&str>) -> Result<String, ValidationError> {
    let chosen = explicit
        .filter(|key| !key.trim().is_empty())
        .map_or_else(|| capitalize_first(method_name), str::to_owned);

    if chosen.is_empty() {
        return Err(ValidationError::EmptyKey);
    }
    if chosen.chars().any(char::is_whitespace) {
        return Err(ValidationError::WhitespaceKey);
    }
    Ok(chosen)
}

/// Upper-cases the first character only; the rest of the name is untouched.
fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out: String = first.to_uppercase().collect();
        out.push_str(chars.as_str());
        out
    })
}
