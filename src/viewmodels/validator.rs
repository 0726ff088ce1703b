// ============================================================================
// VALIDADOR - Reglas de campo antes de enviar (función pura)
// ============================================================================

use crate::models::{Credentials, CredentialsInput, Field, ValidationResult};
use crate::utils::constants::{
    PASSWORD_MIN_LEN, PASSWORD_TOO_SHORT_MESSAGE, USERNAME_MIN_LEN, USERNAME_TOO_SHORT_MESSAGE,
};

fn rule(field: Field) -> (usize, &'static str) {
    match field {
        Field::Username => (USERNAME_MIN_LEN, USERNAME_TOO_SHORT_MESSAGE),
        Field::Password => (PASSWORD_MIN_LEN, PASSWORD_TOO_SHORT_MESSAGE),
    }
}

/// Validar los valores crudos. Sin efectos secundarios: misma entrada, mismo resultado.
pub fn validate(candidate: &CredentialsInput) -> ValidationResult {
    let mut result = ValidationResult::new();
    for field in Field::ALL {
        let (min_len, message) = rule(field);
        if candidate.value(field).trim().chars().count() < min_len {
            result.insert(field, message);
        }
    }
    result
}

/// Credenciales recortadas si todo es válido, o los errores por campo
pub fn validated_credentials(candidate: &CredentialsInput) -> Result<Credentials, ValidationResult> {
    let result = validate(candidate);
    if !result.is_valid() {
        return Err(result);
    }
    Ok(Credentials::from_trimmed(
        candidate.value(Field::Username).trim(),
        candidate.value(Field::Password).trim(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_valid_input_passes() {
        let result = validate(&CredentialsInput::new("ab", "abcdef"));
        assert!(result.is_valid());
    }

    #[test]
    fn short_username_reports_only_username() {
        let result = validate(&CredentialsInput::new("a", "abcdef"));
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.get(Field::Username),
            Some("Username must be at least 2 characters.")
        );
    }

    #[test]
    fn short_password_reports_password() {
        let result = validate(&CredentialsInput::new("alice", "abcde"));
        assert_eq!(
            result.get(Field::Password),
            Some("Password must be at least 6 characters.")
        );
        assert_eq!(result.get(Field::Username), None);
    }

    #[test]
    fn whitespace_is_trimmed_before_counting() {
        let result = validate(&CredentialsInput::new("  a  ", "  abcde \t"));
        assert_eq!(result.len(), 2);

        let result = validate(&CredentialsInput::new("  ab  ", "\nabcdef\n"));
        assert!(result.is_valid());
    }

    #[test]
    fn absent_values_fail_both_rules() {
        let result = validate(&CredentialsInput::default());
        assert_eq!(result.fields().collect::<Vec<_>>(), vec![Field::Username, Field::Password]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate(&CredentialsInput::new("éé", "ññññññ")).is_valid());
        assert!(!validate(&CredentialsInput::new("é", "ñññññ")).is_valid());
    }

    #[test]
    fn short_usernames_always_rejected() {
        for username in ["", " ", "a", "  z  ", "\t\n", " x"] {
            let result = validate(&CredentialsInput::new(username, "longenough"));
            assert!(result.get(Field::Username).is_some(), "{:?} should fail", username);
            assert!(validated_credentials(&CredentialsInput::new(username, "longenough")).is_err());
        }
    }

    #[test]
    fn short_passwords_always_rejected() {
        for password in ["", "12345", "     abc   ", "\t12345\t"] {
            let result = validate(&CredentialsInput::new("alice", password));
            assert!(result.get(Field::Password).is_some());
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let inputs = [
            CredentialsInput::new("a", "b"),
            CredentialsInput::new("ab", "abcdef"),
            CredentialsInput::new(" ab ", "abc"),
            CredentialsInput::default(),
        ];
        for input in &inputs {
            assert_eq!(validate(input), validate(input));
        }
    }

    #[test]
    fn validated_credentials_are_trimmed() {
        let creds = validated_credentials(&CredentialsInput::new("  alice ", " secret1 "))
            .expect("input should be valid");
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "secret1");
    }
}
