//! Validation helpers for DTOs.

use validator::ValidationError;

/// Longest display name accepted when joining a session.
const MAX_NAME_LENGTH: usize = 64;

/// Validates that a player display name is non-empty (ignoring surrounding
/// whitespace) and reasonably short.
pub fn validate_player_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("player_name_empty");
        err.message = Some("Name is required".into());
        return Err(err);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        let mut err = ValidationError::new("player_name_length");
        err.message =
            Some(format!("Name must be at most {MAX_NAME_LENGTH} characters").into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(validate_player_name("Ada").is_ok());
        assert!(validate_player_name("Grace Hopper").is_ok());
        assert!(validate_player_name("é").is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace_only_names() {
        assert!(validate_player_name("").is_err());
        assert!(validate_player_name("   ").is_err());
        assert!(validate_player_name("\t\n").is_err());
    }

    #[test]
    fn rejects_names_over_the_length_limit() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_player_name(&long).is_err());
        let max = "x".repeat(MAX_NAME_LENGTH);
        assert!(validate_player_name(&max).is_ok());
    }
}
