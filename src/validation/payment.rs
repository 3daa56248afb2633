// ============================================================================
// PAYMENT SCHEMA - Validación del paso de pago
// ============================================================================

use crate::models::checkout::PaymentMethod;
use crate::utils::i18n::t;
use crate::validation::errors::ValidationErrors;

/// Datos planos del formulario de pago
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentInfoForm {
    pub payment_method: Option<PaymentMethod>,
    /// Número de referencia de la operación (transferencia / pago móvil)
    pub reference: String,
    /// Documento de identidad del pagador
    pub document_id: String,
    /// Teléfono asociado al pago
    pub phone: String,
}

fn is_digits_only(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Teléfono: `+` seguido de 8 a 15 dígitos
fn is_valid_phone(value: &str) -> bool {
    match value.strip_prefix('+') {
        Some(rest) => (8..=15).contains(&rest.len()) && rest.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

/// Validar el formulario de pago. Referencia y documento deben ser
/// numéricos; el teléfono debe cumplir el patrón +dígitos(8-15).
pub fn validate_payment(form: &PaymentInfoForm, lang: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if form.payment_method.is_none() {
        errors.add("payment_method", t("metodo_pago_requerido", lang));
    }

    if form.reference.trim().is_empty() {
        errors.add("reference", t("campo_requerido", lang));
    } else if !is_digits_only(form.reference.trim()) {
        errors.add("reference", t("referencia_solo_digitos", lang));
    }

    if form.document_id.trim().is_empty() {
        errors.add("document_id", t("campo_requerido", lang));
    } else if !is_digits_only(form.document_id.trim()) {
        errors.add("document_id", t("documento_solo_digitos", lang));
    }

    if !is_valid_phone(form.phone.trim()) {
        errors.add("phone", t("telefono_invalido", lang));
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PaymentInfoForm {
        PaymentInfoForm {
            payment_method: Some(PaymentMethod::Mobile),
            reference: "123456".to_string(),
            document_id: "20456789".to_string(),
            phone: "+584121234567".to_string(),
        }
    }

    #[test]
    fn test_formulario_valido_pasa() {
        assert!(validate_payment(&valid_form(), "ES").is_ok());
    }

    #[test]
    fn test_referencia_con_letras_rechazada_con_mensaje_de_campo() {
        let mut form = valid_form();
        form.reference = "12AB34".to_string();
        let errors = validate_payment(&form, "ES").unwrap_err();
        assert_eq!(errors.get("reference"), Some("La referencia debe contener solo dígitos"));
        assert!(!errors.has("document_id"));
        assert!(!errors.has("phone"));
    }

    #[test]
    fn test_documento_con_guiones_rechazado() {
        let mut form = valid_form();
        form.document_id = "20.456-789".to_string();
        let errors = validate_payment(&form, "ES").unwrap_err();
        assert!(errors.has("document_id"));
    }

    #[test]
    fn test_telefono_limites_del_patron() {
        let mut form = valid_form();

        // 8 dígitos: válido
        form.phone = "+12345678".to_string();
        assert!(validate_payment(&form, "ES").is_ok());

        // 15 dígitos: válido
        form.phone = format!("+{}", "1".repeat(15));
        assert!(validate_payment(&form, "ES").is_ok());

        // 7 dígitos: inválido
        form.phone = "+1234567".to_string();
        assert!(validate_payment(&form, "ES").unwrap_err().has("phone"));

        // 16 dígitos: inválido
        form.phone = format!("+{}", "1".repeat(16));
        assert!(validate_payment(&form, "ES").unwrap_err().has("phone"));

        // Sin '+': inválido
        form.phone = "584121234567".to_string();
        assert!(validate_payment(&form, "ES").unwrap_err().has("phone"));
    }

    #[test]
    fn test_referencia_vacia_usa_mensaje_requerido() {
        let mut form = valid_form();
        form.reference = "".to_string();
        let errors = validate_payment(&form, "ES").unwrap_err();
        assert_eq!(errors.get("reference"), Some("Este campo es obligatorio"));
    }
}
