// ============================================================================
// PASSWORD SCHEMAS - Fuerza de contraseña y cambio/reset
// ============================================================================

use crate::utils::i18n::t;
use crate::validation::errors::ValidationErrors;

const MIN_PASSWORD_LEN: usize = 8;

/// Conjunto fijo de símbolos aceptados
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.?";

/// Datos planos del formulario de cambio de contraseña
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Reglas de fuerza: mínimo 8, una mayúscula, una minúscula, un dígito y un
/// símbolo del conjunto fijo. Agrega a lo sumo un error al campo `field`.
pub fn validate_password_strength(
    errors: &mut ValidationErrors,
    field: &str,
    password: &str,
    lang: &str,
) {
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(field, t("password_corta", lang));
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.add(field, t("password_mayuscula", lang));
    } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.add(field, t("password_minuscula", lang));
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.add(field, t("password_digito", lang));
    } else if !password.chars().any(|c| SYMBOLS.contains(c)) {
        errors.add(field, t("password_simbolo", lang));
    }
}

/// Validar cambio de contraseña. El error de confirmación se adjunta a
/// `confirm_password`, nunca a `new_password`.
pub fn validate_password_change(
    form: &PasswordChangeForm,
    lang: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if form.current_password.is_empty() {
        errors.add("current_password", t("campo_requerido", lang));
    }

    validate_password_strength(&mut errors, "new_password", &form.new_password, lang);

    if form.new_password != form.confirm_password {
        errors.add("confirm_password", t("passwords_no_coinciden", lang));
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength_error(password: &str) -> Option<String> {
        let mut errors = ValidationErrors::new();
        validate_password_strength(&mut errors, "new_password", password, "ES");
        errors.get("new_password").map(|m| m.to_string())
    }

    #[test]
    fn test_password_fuerte_pasa() {
        assert_eq!(strength_error("Abcdef1!"), None);
        assert_eq!(strength_error("Otra.Clave9"), None);
    }

    #[test]
    fn test_cada_regla_de_fuerza() {
        assert_eq!(strength_error("Ab1!"), Some("La contraseña debe tener al menos 8 caracteres".to_string()));
        assert_eq!(strength_error("abcdef1!"), Some("La contraseña debe contener una mayúscula".to_string()));
        assert_eq!(strength_error("ABCDEF1!"), Some("La contraseña debe contener una minúscula".to_string()));
        assert_eq!(strength_error("Abcdefg!"), Some("La contraseña debe contener un dígito".to_string()));
        assert_eq!(strength_error("Abcdefg1"), Some("La contraseña debe contener un símbolo".to_string()));
    }

    #[test]
    fn test_mismatch_se_adjunta_a_confirm_password() {
        let form = PasswordChangeForm {
            current_password: "Vieja#123".to_string(),
            new_password: "Nueva#123".to_string(),
            confirm_password: "Distinta#123".to_string(),
        };
        let errors = validate_password_change(&form, "ES").unwrap_err();
        assert_eq!(errors.get("confirm_password"), Some("Las contraseñas no coinciden"));
        assert!(!errors.has("new_password"));
    }

    #[test]
    fn test_cambio_valido_pasa() {
        let form = PasswordChangeForm {
            current_password: "Vieja#123".to_string(),
            new_password: "Nueva#123".to_string(),
            confirm_password: "Nueva#123".to_string(),
        };
        assert!(validate_password_change(&form, "ES").is_ok());
    }
}
