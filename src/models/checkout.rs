// ============================================================================
// CHECKOUT MODELS - Borrador de pedido y métodos de envío/pago
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::models::cart::CartItem;

/// Método de envío seleccionado en el paso de envío
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    Pickup,
    Delivery,
}

impl ShippingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Pickup => "pickup",
            ShippingMethod::Delivery => "delivery",
        }
    }
}

/// Método de pago seleccionado en el paso de pago
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Pos,
    Bank,
    Mobile,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Pos => "pos",
            PaymentMethod::Bank => "bank",
            PaymentMethod::Mobile => "mobile",
        }
    }
}

/// Borrador del pedido en curso (no enviado todavía).
/// Vive solo durante el flujo de checkout: se crea vacío al montar y se
/// descarta al navegar fuera. No se persiste entre recargas de página.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutDraft {
    pub shipping_method: Option<ShippingMethod>,
    /// Id de sucursal (pickup) o de dirección (delivery). La regla cruzada
    /// pickup⇒sucursal no se valida en el cliente; decide el backend.
    pub branch_or_address_id: String,
    pub payment_method: Option<PaymentMethod>,
}

impl CheckoutDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// El borrador está listo para enviarse solo cuando los tres campos
    /// están completos
    pub fn is_submit_ready(&self) -> bool {
        self.shipping_method.is_some()
            && !self.branch_or_address_id.trim().is_empty()
            && self.payment_method.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub shipping_method: ShippingMethod,
    pub branch_or_address_id: String,
    pub payment_method: PaymentMethod,
    pub items: Vec<CartItem>,
    /// Clave generada en el cliente; el backend deduplica reenvíos
    pub idempotency_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order_id: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrador_vacio_no_esta_listo() {
        assert!(!CheckoutDraft::new().is_submit_ready());
    }

    #[test]
    fn test_delivery_sin_direccion_no_esta_listo() {
        let draft = CheckoutDraft {
            shipping_method: Some(ShippingMethod::Delivery),
            branch_or_address_id: "".to_string(),
            payment_method: Some(PaymentMethod::Cash),
        };
        assert!(!draft.is_submit_ready());
    }

    #[test]
    fn test_pickup_con_sucursal_esta_listo() {
        let draft = CheckoutDraft {
            shipping_method: Some(ShippingMethod::Pickup),
            branch_or_address_id: "branch-42".to_string(),
            payment_method: Some(PaymentMethod::Mobile),
        };
        assert!(draft.is_submit_ready());
    }

    #[test]
    fn test_direccion_solo_espacios_no_cuenta() {
        let draft = CheckoutDraft {
            shipping_method: Some(ShippingMethod::Delivery),
            branch_or_address_id: "   ".to_string(),
            payment_method: Some(PaymentMethod::Pos),
        };
        assert!(!draft.is_submit_ready());
    }

    #[test]
    fn test_serializacion_snake_case() {
        assert_eq!(serde_json::to_string(&ShippingMethod::Pickup).unwrap(), "\"pickup\"");
        assert_eq!(serde_json::to_string(&PaymentMethod::Mobile).unwrap(), "\"mobile\"");
    }
}
