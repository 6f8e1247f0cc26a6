// Input validation shared by project specs and template configuration

use std::path::{Component, Path};
use crate::utils::error::{PyboxError, Result};

/// Describe why `value` is unusable, if it is
fn describe_violation(label: &str, value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(format!("{label} cannot be empty"));
    }

    if value.chars().any(char::is_whitespace) {
        return Some(format!("{label} '{value}' cannot contain spaces"));
    }

    None
}

/// Check that every `(label, value)` pair is non-empty and free of whitespace.
///
/// All offending values are reported together, so a caller passing both a bad
/// name and a bad path sees both in one error.
pub fn validate_no_whitespace(fields: &[(&str, &str)]) -> Result<()> {
    let violations: Vec<String> = fields
        .iter()
        .filter_map(|(label, value)| describe_violation(label, value))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(PyboxError::ValidationError(violations.join("; ")))
    }
}

/// Check that `value` stays below whatever directory it is joined onto.
///
/// Absolute paths, roots, drive prefixes and `.`/`..` segments are rejected;
/// `Path::join` would otherwise discard or climb out of the base directory.
pub fn validate_relative_name(label: &str, value: &str) -> Result<()> {
    let escapes = Path::new(value)
        .components()
        .any(|component| !matches!(component, Component::Normal(_)));

    if escapes {
        return Err(PyboxError::ValidationError(
            format!("{label} '{value}' must be a relative name without '.' or '..' segments")
        ));
    }

    Ok(())
}
