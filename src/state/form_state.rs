// ============================================================================
// FORM STATE - Estado de un formulario de login montado
// ============================================================================

use std::collections::BTreeSet;

use crate::models::{CredentialsInput, Field, SubmissionOutcome, ValidationResult};

/// Estado completo del formulario; cada instancia montada tiene el suyo
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub credentials: CredentialsInput,
    /// Campos que el usuario ya modificó (o todos, tras un intento de envío)
    pub touched: BTreeSet<Field>,
    /// Errores visibles (solo de campos tocados)
    pub validation: ValidationResult,
    pub outcome: Option<SubmissionOutcome>,
    pub pending: bool,
    /// Mensaje del banner del formulario
    pub error_message: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.validation.get(field)
    }

    pub fn banner(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// El botón de envío solo está activo si no hay petición en curso
    pub fn can_submit(&self) -> bool {
        !self.pending
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounted_form_starts_empty() {
        let state = FormState::new();
        assert_eq!(state.credentials, CredentialsInput::default());
        assert!(state.validation.is_valid());
        assert_eq!(state.outcome, None);
        assert!(!state.pending);
        assert!(state.can_submit());
        assert_eq!(state.banner(), None);
    }

    #[test]
    fn pending_disables_submit() {
        let state = FormState {
            pending: true,
            ..FormState::new()
        };
        assert!(!state.can_submit());
    }
}
