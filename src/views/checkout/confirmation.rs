// ============================================================================
// CONFIRMATION - Paso final del checkout
// ============================================================================
// Resumen de solo lectura del borrador + items del carrito. Confirmar es una
// transición de una sola vía: tras el éxito se muestra el número de pedido y
// el botón desaparece.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::checkout::{PaymentMethod, ShippingMethod};
use crate::state::checkout_state::CheckoutState;
use crate::state::{AppState, Route};
use crate::utils::t;
use crate::viewmodels::CheckoutViewModel;

fn shipping_label(method: ShippingMethod, lang: &str) -> String {
    match method {
        ShippingMethod::Pickup => t("retiro_sucursal", lang),
        ShippingMethod::Delivery => t("envio_domicilio", lang),
    }
}

fn payment_label(method: PaymentMethod, lang: &str) -> String {
    match method {
        PaymentMethod::Cash => t("efectivo", lang),
        PaymentMethod::Pos => t("pos", lang),
        PaymentMethod::Bank => t("transferencia", lang),
        PaymentMethod::Mobile => t("pago_movil", lang),
    }
}

/// Renderizar el paso de confirmación
pub fn render_confirmation(
    state: &AppState,
    checkout: &CheckoutState,
) -> Result<Element, JsValue> {
    let lang = state.language();
    let draft = checkout.get_draft();
    let container = ElementBuilder::new("div")?.class("confirmation-step").build();

    let title = ElementBuilder::new("h2")?
        .text(&t("confirmacion", &lang))
        .build();
    append_child(&container, &title)?;

    // Pedido ya enviado: mostrar el resultado y salir
    if let Some(order_id) = checkout.submitted_order_id() {
        let success = ElementBuilder::new("div")?
            .class("order-success")
            .text(&format!(
                "✅ {} ({}: {})",
                t("pedido_creado", &lang),
                t("numero_pedido", &lang),
                order_id
            ))
            .build();
        append_child(&container, &success)?;

        let to_orders = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .text(&t("mis_pedidos", &lang))
            .build();
        on_click(&to_orders, move |_| {
            crate::app::navigate(&Route::Orders);
        })?;
        append_child(&container, &to_orders)?;
        return Ok(container);
    }

    // Resumen del borrador
    let summary = ElementBuilder::new("div")?.class("order-summary").build();
    if let Some(method) = draft.shipping_method {
        let row = ElementBuilder::new("p")?
            .text(&format!("{}: {}", t("envio", &lang), shipping_label(method, &lang)))
            .build();
        append_child(&summary, &row)?;
    }
    if let Some(method) = draft.payment_method {
        let row = ElementBuilder::new("p")?
            .text(&format!("{}: {}", t("pago", &lang), payment_label(method, &lang)))
            .build();
        append_child(&summary, &row)?;
    }
    append_child(&container, &summary)?;

    // Items del carrito (solo lectura)
    if let Some(cart) = state.cart.get_cart() {
        let items = ElementBuilder::new("div")?.class("summary-items").build();
        for item in &cart.items {
            let row = ElementBuilder::new("div")?
                .class("summary-item")
                .text(&format!("{} x{} = ${:.2}", item.name, item.quantity, item.subtotal()))
                .build();
            append_child(&items, &row)?;
        }
        append_child(&container, &items)?;

        let total = ElementBuilder::new("div")?
            .class("summary-total")
            .text(&format!("{}: ${:.2}", t("total", &lang), cart.total()))
            .build();
        append_child(&container, &total)?;
    }

    let confirm_btn = ElementBuilder::new("button")?
        .class("btn btn-primary btn-confirm")
        .text(&t("confirmar_pedido", &lang))
        .build();
    {
        let state_clone = state.clone();
        on_click(&confirm_btn, move |_| {
            let state_inner = state_clone.clone();
            spawn_local(async move {
                CheckoutViewModel::new().submit_order(state_inner).await;
            });
        })?;
    }
    append_child(&container, &confirm_btn)?;

    Ok(container)
}
