// ============================================================================
// CHECKOUT VIEWS - Layout del flujo y dispatch por paso
// ============================================================================
// Un solo layout para los tres pasos. El guard de secuencia vive aquí: un
// deep-link a un paso cuyos pasos previos no están completos rebota al paso
// de envío.
// ============================================================================

pub mod confirmation;
pub mod payment_info;
pub mod shipping_info;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::{AppState, Route};
use crate::utils::t;

/// Renderizar el layout de checkout con el paso actual
pub fn render_checkout(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let container = ElementBuilder::new("div")?.class("checkout-view").build();

    let Some(checkout) = state.checkout_state() else {
        // El draft store se monta en set_route; si no está, el flujo no
        // aplica (se llegó aquí fuera de una ruta de checkout)
        return Ok(container);
    };

    let route = state.current_route();
    let draft = checkout.get_draft();

    // Guard de secuencia para deep-links
    if route == Route::CheckoutPayment && draft.shipping_method.is_none() {
        crate::app::navigate(&Route::CheckoutShipping);
        return Ok(container);
    }
    if route == Route::CheckoutConfirmation && !draft.is_submit_ready() && !checkout.is_submitted()
    {
        crate::app::navigate(&Route::CheckoutShipping);
        return Ok(container);
    }

    append_child(&container, &render_step_indicator(&route, &lang)?)?;

    let step_view = match route {
        Route::CheckoutShipping => shipping_info::render_shipping_info(state, &checkout)?,
        Route::CheckoutPayment => payment_info::render_payment_info(state, &checkout)?,
        _ => confirmation::render_confirmation(state, &checkout)?,
    };
    append_child(&container, &step_view)?;

    Ok(container)
}

/// Indicador de progreso: envío → pago → confirmación
fn render_step_indicator(route: &Route, lang: &str) -> Result<Element, JsValue> {
    let indicator = ElementBuilder::new("div")?.class("checkout-steps").build();

    let steps = [
        (Route::CheckoutShipping, t("envio", lang)),
        (Route::CheckoutPayment, t("pago", lang)),
        (Route::CheckoutConfirmation, t("confirmacion", lang)),
    ];

    for (step_route, label) in steps {
        let class = if step_route == *route {
            "checkout-step active"
        } else {
            "checkout-step"
        };
        let step = ElementBuilder::new("div")?.class(class).text(&label).build();
        append_child(&indicator, &step)?;
    }

    Ok(indicator)
}
