// ============================================================================
// VALIDATION ERRORS - Mapa ordenado campo → mensaje localizado
// ============================================================================

/// Errores de validación a nivel de campo. Se recuperan localmente
/// re-renderizando el formulario con los mensajes; nunca se propagan más allá.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<(String, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agregar error para un campo. Solo se conserva el primer error por campo
    pub fn add(&mut self, field: &str, message: String) {
        if !self.has(field) {
            self.errors.push((field.to_string(), message));
        }
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|(f, _)| f == field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// Convertir en Result: Ok(()) si no hay errores
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primer_error_por_campo_gana() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "primero".to_string());
        errors.add("email", "segundo".to_string());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("primero"));
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());
        let mut errors = ValidationErrors::new();
        errors.add("phone", "mal".to_string());
        assert!(errors.into_result().is_err());
    }
}
