//! Field-level validation shared by the API handlers.

use crate::error::CoreError;

/// Maximum length for project and task names.
pub const MAX_NAME_LEN: usize = 64;

/// Validate a project or task name: required, non-blank, at most
/// [`MAX_NAME_LEN`] characters.
pub fn validate_entity_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name is required".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name cannot be longer than {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a username: required and non-blank.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.trim().is_empty() {
        return Err(CoreError::Validation("Username is required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        assert!(validate_entity_name("").is_err());
        assert!(validate_entity_name("   ").is_err());
    }

    #[test]
    fn test_name_length_boundary() {
        let at_limit = "x".repeat(MAX_NAME_LEN);
        assert!(validate_entity_name(&at_limit).is_ok());

        let over_limit = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_entity_name(&over_limit).unwrap_err();
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn test_username_required() {
        assert!(validate_username("").is_err());
        assert!(validate_username("  ").is_err());
        assert!(validate_username("alice").is_ok());
    }
}
