use std::collections::BTreeMap;

use super::credentials::Field;

/// Resultado de validación: mensaje por campo que falla.
/// Un mapa vacío significa que el formulario es válido.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Conservar solo los errores de los campos indicados
    pub fn restricted_to<'a, I>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = &'a Field>,
    {
        let mut visible = Self::new();
        for field in fields {
            if let Some(message) = self.errors.get(field) {
                visible.insert(*field, message.clone());
            }
        }
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert_eq!(result.get(Field::Username), None);
    }

    #[test]
    fn restricted_to_drops_untouched_fields() {
        let mut result = ValidationResult::new();
        result.insert(Field::Username, "u");
        result.insert(Field::Password, "p");

        let visible = result.restricted_to(&[Field::Password]);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.get(Field::Password), Some("p"));
        assert_eq!(visible.get(Field::Username), None);
    }
}
