// ============================================================================
// SHIPPING SCHEMA - Validación del paso de envío
// ============================================================================

use crate::models::checkout::CheckoutDraft;
use crate::utils::i18n::t;
use crate::validation::errors::ValidationErrors;

/// Validar el paso de envío sobre el borrador actual.
/// Predicado puro: el método debe estar elegido y la sucursal/dirección
/// no puede quedar vacía.
pub fn validate_shipping(draft: &CheckoutDraft, lang: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if draft.shipping_method.is_none() {
        errors.add("shipping_method", t("metodo_envio_requerido", lang));
    }

    if draft.branch_or_address_id.trim().is_empty() {
        errors.add("branch_or_address_id", t("sucursal_direccion_requerida", lang));
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::checkout::ShippingMethod;

    #[test]
    fn test_envio_completo_pasa() {
        let draft = CheckoutDraft {
            shipping_method: Some(ShippingMethod::Pickup),
            branch_or_address_id: "branch-1".to_string(),
            payment_method: None,
        };
        assert!(validate_shipping(&draft, "ES").is_ok());
    }

    #[test]
    fn test_sin_metodo_ni_destino_falla_con_ambos_campos() {
        let errors = validate_shipping(&CheckoutDraft::new(), "ES").unwrap_err();
        assert!(errors.has("shipping_method"));
        assert!(errors.has("branch_or_address_id"));
    }

    #[test]
    fn test_delivery_sin_direccion_bloquea() {
        let draft = CheckoutDraft {
            shipping_method: Some(ShippingMethod::Delivery),
            branch_or_address_id: "".to_string(),
            payment_method: None,
        };
        let errors = validate_shipping(&draft, "ES").unwrap_err();
        assert!(!errors.has("shipping_method"));
        assert_eq!(
            errors.get("branch_or_address_id"),
            Some("Elige una sucursal o dirección de entrega")
        );
    }
}
