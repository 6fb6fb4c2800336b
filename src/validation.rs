use crate::error::{FixError, Result};

/// Checks that `name` is a single Kotlin package segment.
pub fn validate_segment(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(FixError::InvalidIdentifier(
            name.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    if !name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    {
        return Err(FixError::InvalidIdentifier(
            name.to_string(),
            "must start with a letter or underscore".to_string(),
        ));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(FixError::InvalidIdentifier(
            name.to_string(),
            "can only contain letters, numbers, and underscores".to_string(),
        ));
    }

    Ok(())
}

/// Checks a dot-separated namespace such as `com.zeroscam`.
pub fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty() {
        return Err(FixError::InvalidIdentifier(
            namespace.to_string(),
            "namespace cannot be empty".to_string(),
        ));
    }

    for segment in namespace.split('.') {
        validate_segment(segment).map_err(|_| {
            FixError::InvalidIdentifier(
                namespace.to_string(),
                format!("'{}' is not a valid package segment", segment),
            )
        })?;
    }

    Ok(())
}

/// Checks the candidate file extension (given without the leading dot).
pub fn validate_extension(extension: &str) -> Result<()> {
    if extension.is_empty() {
        return Err(FixError::InvalidIdentifier(
            extension.to_string(),
            "extension cannot be empty".to_string(),
        ));
    }

    if extension.contains(['.', '/', '\\']) {
        return Err(FixError::InvalidIdentifier(
            extension.to_string(),
            "extension must not contain '.' or path separators".to_string(),
        ));
    }

    Ok(())
}

/// Runs every check on the values a rule set is built from.
pub fn preflight_checks(namespace: &str, old: &str, new: &str, extension: &str) -> Result<()> {
    validate_namespace(namespace)?;
    validate_segment(old)?;
    validate_segment(new)?;
    validate_extension(extension)?;

    if old == new {
        return Err(FixError::InvalidIdentifier(
            new.to_string(),
            "new identifier is identical to the old one".to_string(),
        ));
    }

    Ok(())
}
