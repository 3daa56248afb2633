// ============================================================================
// REGISTER / PROFILE SCHEMAS - Validación de registro y edición de perfil
// ============================================================================
// La edad se calcula por resta de fecha calendario, no por aproximación de
// duración. Los umbrales divergen entre registro (13) y edición de perfil
// (14).
// ============================================================================

use chrono::{Datelike, NaiveDate, Utc};

use crate::utils::i18n::t;
use crate::validation::errors::ValidationErrors;
use crate::validation::password::validate_password_strength;

const MIN_AGE_REGISTER: i32 = 13;
const MIN_AGE_PROFILE_EDIT: i32 = 14;

/// Datos planos del formulario de registro
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// YYYY-MM-DD
    pub birth_date: String,
    pub password: String,
    pub confirm_password: String,
}

/// Datos planos del formulario de edición de perfil
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileEditForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    /// YYYY-MM-DD
    pub birth_date: String,
}

/// Edad en años cumplidos en la fecha `today` (resta calendario)
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

fn check_birth_date(
    errors: &mut ValidationErrors,
    raw: &str,
    min_age: i32,
    age_error_key: &str,
    today: NaiveDate,
    lang: &str,
) {
    if raw.trim().is_empty() {
        errors.add("birth_date", t("campo_requerido", lang));
        return;
    }
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(birth) => {
            if age_on(birth, today) < min_age {
                errors.add("birth_date", t(age_error_key, lang));
            }
        }
        Err(_) => errors.add("birth_date", t("fecha_invalida", lang)),
    }
}

/// Forma mínima de un email: algo@algo.algo, sin espacios
fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.contains(' ') {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn require(errors: &mut ValidationErrors, field: &str, value: &str, lang: &str) {
    if value.trim().is_empty() {
        errors.add(field, t("campo_requerido", lang));
    }
}

/// Validar registro con una fecha "hoy" inyectada (testeable)
pub fn validate_register_on(
    form: &RegisterForm,
    today: NaiveDate,
    lang: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    require(&mut errors, "first_name", &form.first_name, lang);
    require(&mut errors, "last_name", &form.last_name, lang);

    if !is_valid_email(&form.email) {
        errors.add("email", t("email_invalido", lang));
    }

    check_birth_date(
        &mut errors,
        &form.birth_date,
        MIN_AGE_REGISTER,
        "edad_minima_registro",
        today,
        lang,
    );

    validate_password_strength(&mut errors, "password", &form.password, lang);
    if errors.get("password").is_none() && form.password != form.confirm_password {
        errors.add("confirm_password", t("passwords_no_coinciden", lang));
    }

    errors.into_result()
}

/// Validar registro contra la fecha actual
pub fn validate_register(form: &RegisterForm, lang: &str) -> Result<(), ValidationErrors> {
    validate_register_on(form, Utc::now().date_naive(), lang)
}

/// Validar edición de perfil con una fecha "hoy" inyectada (testeable)
pub fn validate_profile_edit_on(
    form: &ProfileEditForm,
    today: NaiveDate,
    lang: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    require(&mut errors, "first_name", &form.first_name, lang);
    require(&mut errors, "last_name", &form.last_name, lang);

    check_birth_date(
        &mut errors,
        &form.birth_date,
        MIN_AGE_PROFILE_EDIT,
        "edad_minima_perfil",
        today,
        lang,
    );

    errors.into_result()
}

/// Validar edición de perfil contra la fecha actual
pub fn validate_profile_edit(form: &ProfileEditForm, lang: &str) -> Result<(), ValidationErrors> {
    validate_profile_edit_on(form, Utc::now().date_naive(), lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_register() -> RegisterForm {
        RegisterForm {
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+584121234567".to_string(),
            birth_date: "2000-05-10".to_string(),
            password: "Segura#123".to_string(),
            confirm_password: "Segura#123".to_string(),
        }
    }

    #[test]
    fn test_edad_resta_calendario() {
        let birth = date(2010, 6, 15);
        // Un día antes del cumpleaños todavía no cumple
        assert_eq!(age_on(birth, date(2023, 6, 14)), 12);
        // El día del cumpleaños ya cumple
        assert_eq!(age_on(birth, date(2023, 6, 15)), 13);
    }

    #[test]
    fn test_registro_valido_pasa() {
        assert!(validate_register_on(&valid_register(), date(2024, 1, 1), "ES").is_ok());
    }

    #[test]
    fn test_registro_exige_13_anos() {
        let mut form = valid_register();
        form.birth_date = "2012-06-15".to_string();
        // 12 años el día anterior al cumpleaños: rechazado
        let errors = validate_register_on(&form, date(2025, 6, 14), "ES").unwrap_err();
        assert_eq!(errors.get("birth_date"), Some("Debes tener al menos 13 años para registrarte"));
        // 13 años exactos: aceptado
        assert!(validate_register_on(&form, date(2025, 6, 15), "ES").is_ok());
    }

    #[test]
    fn test_perfil_exige_14_anos() {
        // El umbral de edición de perfil diverge del de registro (14 vs 13)
        let form = ProfileEditForm {
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            phone: "".to_string(),
            birth_date: "2012-06-15".to_string(),
        };
        // Con 13 años: rechazado en perfil
        let errors = validate_profile_edit_on(&form, date(2025, 6, 15), "ES").unwrap_err();
        assert!(errors.has("birth_date"));
        // Con 14 años: aceptado
        assert!(validate_profile_edit_on(&form, date(2026, 6, 15), "ES").is_ok());
    }

    #[test]
    fn test_fecha_invalida() {
        let mut form = valid_register();
        form.birth_date = "15/06/2000".to_string();
        let errors = validate_register_on(&form, date(2024, 1, 1), "ES").unwrap_err();
        assert_eq!(errors.get("birth_date"), Some("Fecha inválida"));
    }

    #[test]
    fn test_email_invalido() {
        let mut form = valid_register();
        for bad in ["sin-arroba", "a@b", "a @b.com", "@x.com"] {
            form.email = bad.to_string();
            let errors = validate_register_on(&form, date(2024, 1, 1), "ES").unwrap_err();
            assert!(errors.has("email"), "debió rechazar: {}", bad);
        }
    }

    #[test]
    fn test_confirmacion_distinta_marca_confirm_password() {
        let mut form = valid_register();
        form.confirm_password = "Otra#1234".to_string();
        let errors = validate_register_on(&form, date(2024, 1, 1), "ES").unwrap_err();
        assert!(errors.has("confirm_password"));
        assert!(!errors.has("password"));
    }
}
