// ============================================================================
// CHECKOUT VIEWMODEL - Secuenciador de pasos del checkout
// ============================================================================
// Un único secuenciador para todo el flujo. Las decisiones de paso son
// funciones puras; los efectos (navegación, timers, HTTP) viven en los
// métodos del viewmodel.
// ============================================================================

use gloo_timers::callback::Timeout;

use crate::config::CONFIG;
use crate::models::checkout::{CheckoutDraft, CreateOrderRequest};
use crate::services::ApiClient;
use crate::state::{AppState, Route};
use crate::validation::payment::PaymentInfoForm;
use crate::validation::{validate_payment, validate_shipping, ValidationErrors};

/// Estados del secuenciador de checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    /// Sin token de sesión: redirigir a login (terminal para el flujo)
    Unauthenticated,
    /// Carrito vacío: re-verificar tras el delay fijo antes de expulsar
    EmptyCart,
    Shipping,
    Payment,
    Confirmation,
}

/// Paso de entrada al montar el checkout. Puro: decide solo con la sesión
/// y el tamaño del carrito.
pub fn entry_step(token: Option<&str>, cart_len: usize) -> CheckoutStep {
    if token.is_none() {
        CheckoutStep::Unauthenticated
    } else if cart_len == 0 {
        CheckoutStep::EmptyCart
    } else {
        CheckoutStep::Shipping
    }
}

/// Resolución del estado EmptyCart tras el delay: si el carrito sigue vacío
/// el flujo termina (redirect a home); si se llenó durante la hidratación,
/// continúa en Shipping.
pub fn resolve_empty_cart(cart_len: usize) -> Option<CheckoutStep> {
    if cart_len == 0 {
        None
    } else {
        Some(CheckoutStep::Shipping)
    }
}

/// Destino del re-check del carrito vacío. El timer sobrevive a la
/// navegación, así que si el usuario ya salió del flujo de checkout durante
/// la ventana no se navega a ningún lado.
pub fn empty_cart_recheck_route(in_checkout: bool, cart_len: usize) -> Option<Route> {
    if !in_checkout {
        return None;
    }
    match resolve_empty_cart(cart_len) {
        Some(step) => route_for_step(step),
        None => Some(Route::Home),
    }
}

/// Ruta a la que redirige cada paso renderizable
pub fn route_for_step(step: CheckoutStep) -> Option<Route> {
    match step {
        CheckoutStep::Unauthenticated => Some(Route::Login),
        CheckoutStep::EmptyCart => None, // espera el re-check, sin redirect
        CheckoutStep::Shipping => Some(Route::CheckoutShipping),
        CheckoutStep::Payment => Some(Route::CheckoutPayment),
        CheckoutStep::Confirmation => Some(Route::CheckoutConfirmation),
    }
}

/// Completar el paso de envío: valida el esquema y avanza a Payment.
/// Cualquier campo incompleto bloquea el avance.
pub fn advance_from_shipping(
    draft: &CheckoutDraft,
    lang: &str,
) -> Result<CheckoutStep, ValidationErrors> {
    validate_shipping(draft, lang)?;
    Ok(CheckoutStep::Payment)
}

/// Completar el paso de pago: valida el formulario y avanza a Confirmation
pub fn advance_from_payment(
    form: &PaymentInfoForm,
    lang: &str,
) -> Result<CheckoutStep, ValidationErrors> {
    validate_payment(form, lang)?;
    Ok(CheckoutStep::Confirmation)
}

/// ViewModel del checkout - efectos del secuenciador
pub struct CheckoutViewModel {
    api_client: ApiClient,
}

impl CheckoutViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Decidir el paso de entrada al montar el layout de checkout y navegar.
    /// Con carrito vacío programa el re-check (debounce contra estados
    /// vacíos transitorios durante la hidratación, no un retry).
    pub fn enter(&self, state: &AppState) {
        let step = entry_step(state.session.token().as_deref(), state.cart.item_count());

        match step {
            CheckoutStep::Unauthenticated => {
                log::info!("🔒 [CHECKOUT] Sin sesión, redirigiendo a login");
                crate::app::navigate(&Route::Login);
            }
            CheckoutStep::EmptyCart => {
                log::info!(
                    "🛒 [CHECKOUT] Carrito vacío, re-verificando en {}ms",
                    CONFIG.checkout_config.empty_cart_recheck_ms
                );
                let state = state.clone();
                Timeout::new(CONFIG.checkout_config.empty_cart_recheck_ms, move || {
                    let in_checkout = state.current_route().is_checkout();
                    match empty_cart_recheck_route(in_checkout, state.cart.item_count()) {
                        Some(Route::Home) => {
                            log::info!("🛒 [CHECKOUT] Carrito sigue vacío, volviendo a home");
                            crate::app::navigate(&Route::Home);
                        }
                        Some(route) => {
                            // El carrito se llenó dentro de la ventana
                            crate::app::navigate(&route);
                        }
                        None => {
                            // El usuario abandonó el flujo durante la espera
                        }
                    }
                })
                .forget();
            }
            step => {
                if let Some(route) = route_for_step(step) {
                    crate::app::navigate(&route);
                }
            }
        }
    }

    /// Completar el paso de envío y navegar al de pago
    pub fn complete_shipping(&self, state: &AppState) -> Result<(), ValidationErrors> {
        let Some(checkout) = state.checkout_state() else {
            // Sin contexto de checkout montado no hay paso que completar
            crate::app::navigate(&Route::Home);
            return Ok(());
        };
        let step = advance_from_shipping(&checkout.get_draft(), &state.language())?;
        if let Some(route) = route_for_step(step) {
            crate::app::navigate(&route);
        }
        Ok(())
    }

    /// Completar el paso de pago y navegar a la confirmación
    pub fn complete_payment(
        &self,
        state: &AppState,
        form: &PaymentInfoForm,
    ) -> Result<(), ValidationErrors> {
        let step = advance_from_payment(form, &state.language())?;
        if let Some(method) = form.payment_method {
            if let Some(checkout) = state.checkout_state() {
                checkout.set_payment_method(method);
            }
        }
        if let Some(route) = route_for_step(step) {
            crate::app::navigate(&route);
        }
        Ok(())
    }

    /// Enviar el borrador acumulado + items del carrito al backend.
    /// Transición de una sola vía: un fallo deja al usuario en la
    /// confirmación con el borrador intacto (sin rollback) y muestra el
    /// error genérico.
    pub async fn submit_order(&self, state: AppState) {
        let Some(checkout) = state.checkout_state() else {
            return;
        };
        let draft = checkout.get_draft();

        if checkout.is_submitted() {
            log::warn!("⚠️ [CHECKOUT] Pedido ya enviado, ignorando reenvío");
            return;
        }
        if !draft.is_submit_ready() {
            log::warn!("⚠️ [CHECKOUT] Borrador incompleto, no se envía");
            return;
        }
        let Some(token) = state.session.token() else {
            crate::app::navigate(&Route::Login);
            return;
        };
        let Some(cart) = state.cart.get_cart() else {
            return;
        };

        let request = CreateOrderRequest {
            // is_submit_ready() garantiza ambos métodos presentes
            shipping_method: draft.shipping_method.unwrap(),
            branch_or_address_id: draft.branch_or_address_id.clone(),
            payment_method: draft.payment_method.unwrap(),
            items: cart.items.clone(),
            idempotency_key: uuid::Uuid::new_v4().to_string(),
        };

        state.set_loading(true);
        let result = self.api_client.create_order(&token, &request).await;
        state.set_loading(false);

        match result {
            Ok(response) if response.success => {
                let order_id = response.order_id.unwrap_or_default();
                log::info!("✅ [CHECKOUT] Pedido {} creado", order_id);
                checkout.mark_submitted(order_id);
                // El carrito ahora le pertenece al pedido; refrescar snapshot
                state.cart.set_cart(None);
                state.notify_subscribers();
            }
            Ok(response) => {
                log::error!("❌ [CHECKOUT] Backend rechazó el pedido: {:?}", response.error);
                state.set_error(Some(crate::utils::t("error_generico", &state.language())));
            }
            Err(e) => {
                log::error!("❌ [CHECKOUT] Error enviando pedido: {}", e);
                state.set_error(Some(crate::utils::t("error_generico", &state.language())));
            }
        }
    }
}

impl Default for CheckoutViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::checkout::{PaymentMethod, ShippingMethod};

    #[test]
    fn test_sin_token_siempre_redirige_a_login() {
        // Antes de renderizar cualquier paso
        assert_eq!(entry_step(None, 0), CheckoutStep::Unauthenticated);
        assert_eq!(entry_step(None, 5), CheckoutStep::Unauthenticated);
        assert_eq!(route_for_step(CheckoutStep::Unauthenticated), Some(Route::Login));
    }

    #[test]
    fn test_carrito_vacio_entra_en_debounce() {
        assert_eq!(entry_step(Some("tok"), 0), CheckoutStep::EmptyCart);
        // Sin redirect inmediato: espera el re-check
        assert_eq!(route_for_step(CheckoutStep::EmptyCart), None);
    }

    #[test]
    fn test_recheck_expulsa_solo_si_sigue_vacio() {
        assert_eq!(resolve_empty_cart(0), None);
        assert_eq!(resolve_empty_cart(3), Some(CheckoutStep::Shipping));
    }

    #[test]
    fn test_recheck_dentro_del_flujo_navega() {
        // Sigue vacío: expulsa a home; se llenó: continúa en shipping
        assert_eq!(empty_cart_recheck_route(true, 0), Some(Route::Home));
        assert_eq!(empty_cart_recheck_route(true, 2), Some(Route::CheckoutShipping));
    }

    #[test]
    fn test_recheck_no_navega_si_el_usuario_salio_del_flujo() {
        // El timer dispara igual, pero ya no hay checkout montado: el
        // resultado no depende del carrito
        assert_eq!(empty_cart_recheck_route(false, 0), None);
        assert_eq!(empty_cart_recheck_route(false, 2), None);
    }

    #[test]
    fn test_con_sesion_y_carrito_entra_en_shipping() {
        assert_eq!(entry_step(Some("tok"), 2), CheckoutStep::Shipping);
        assert_eq!(
            route_for_step(CheckoutStep::Shipping),
            Some(Route::CheckoutShipping)
        );
    }

    #[test]
    fn test_envio_incompleto_bloquea_avance() {
        // delivery con dirección vacía: el secuenciador se queda en Shipping
        let draft = CheckoutDraft {
            shipping_method: Some(ShippingMethod::Delivery),
            branch_or_address_id: "".to_string(),
            payment_method: Some(PaymentMethod::Cash),
        };
        assert!(!draft.is_submit_ready());
        let errors = advance_from_shipping(&draft, "ES").unwrap_err();
        assert!(errors.has("branch_or_address_id"));
    }

    #[test]
    fn test_envio_completo_avanza_a_pago() {
        let draft = CheckoutDraft {
            shipping_method: Some(ShippingMethod::Pickup),
            branch_or_address_id: "branch-42".to_string(),
            payment_method: None,
        };
        assert_eq!(advance_from_shipping(&draft, "ES").unwrap(), CheckoutStep::Payment);
    }

    #[test]
    fn test_pago_valido_avanza_a_confirmacion() {
        let form = PaymentInfoForm {
            payment_method: Some(PaymentMethod::Mobile),
            reference: "998877".to_string(),
            document_id: "12345678".to_string(),
            phone: "+584140000000".to_string(),
        };
        assert_eq!(advance_from_payment(&form, "ES").unwrap(), CheckoutStep::Confirmation);
    }

    #[test]
    fn test_pago_con_referencia_no_numerica_bloquea() {
        let form = PaymentInfoForm {
            payment_method: Some(PaymentMethod::Bank),
            reference: "REF-001".to_string(),
            document_id: "12345678".to_string(),
            phone: "+584140000000".to_string(),
        };
        let errors = advance_from_payment(&form, "ES").unwrap_err();
        assert!(errors.has("reference"));
    }

    #[test]
    fn test_borrador_pickup_completo_listo_para_confirmar() {
        // Escenario end-to-end del borrador: pickup + branch-42 + mobile
        let draft = CheckoutDraft {
            shipping_method: Some(ShippingMethod::Pickup),
            branch_or_address_id: "branch-42".to_string(),
            payment_method: Some(PaymentMethod::Mobile),
        };
        assert!(draft.is_submit_ready());
        assert_eq!(advance_from_shipping(&draft, "ES").unwrap(), CheckoutStep::Payment);
    }
}
