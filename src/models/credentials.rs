// ============================================================================
// CREDENCIALES - Valores crudos del formulario y credenciales validadas
// ============================================================================

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Campos del formulario de login
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Password,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Username, Field::Password];

    /// Nombre del campo tal como aparece en el formulario
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Valores tal como los escribe el usuario: sin recortar y posiblemente ausentes
#[derive(Clone, Default, PartialEq)]
pub struct CredentialsInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialsInput {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Valor crudo de un campo; un campo ausente cuenta como vacío
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => self.username.as_deref().unwrap_or(""),
            Field::Password => self.password.as_deref().unwrap_or(""),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = Some(value),
            Field::Password => self.password = Some(value),
        }
    }
}

// Nunca imprimir lo que el usuario escribió
impl fmt::Debug for CredentialsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsInput")
            .field("username", &self.username.as_ref().map(|_| "<redacted>"))
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Credenciales recortadas que ya pasaron el validador.
/// Solo viven durante la llamada de envío; se borran de memoria al soltarse.
#[derive(Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub(crate) fn from_trimmed(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &"<redacted>")
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_read_as_empty() {
        let input = CredentialsInput::default();
        assert_eq!(input.value(Field::Username), "");
        assert_eq!(input.value(Field::Password), "");
    }

    #[test]
    fn debug_output_never_contains_secrets() {
        let creds = Credentials::from_trimmed("alice", "hunter22");
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("alice"));
        assert!(!printed.contains("hunter22"));

        let input = CredentialsInput::new("alice", "hunter22");
        let printed = format!("{:?}", input);
        assert!(!printed.contains("alice"));
        assert!(!printed.contains("hunter22"));
    }

    #[test]
    fn field_names_match_form_keys() {
        assert_eq!(Field::Username.to_string(), "username");
        assert_eq!(Field::Password.name(), "password");
    }
}
