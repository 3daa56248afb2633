// ============================================================================
// CART VIEW - Snapshot del carrito remoto
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};
use crate::utils::t;
use crate::viewmodels::CatalogViewModel;

/// Renderizar el carrito
pub fn render_cart(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let container = ElementBuilder::new("div")?.class("cart-view").build();

    let title = ElementBuilder::new("h2")?.text("🛒").build();
    append_child(&container, &title)?;

    let Some(cart) = state.cart.get_cart() else {
        // Snapshot aún no hidratado: o el fetch sigue en vuelo o falló
        let message = if state.cart.get_error().is_some() && !state.cart.is_loading() {
            t("error_generico", &lang)
        } else {
            t("cargando", &lang)
        };
        let status = ElementBuilder::new("p")?
            .class("cart-empty")
            .text(&message)
            .build();
        append_child(&container, &status)?;
        return Ok(container);
    };

    if cart.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("cart-empty")
            .text(&t("carrito_vacio", &lang))
            .build();
        append_child(&container, &empty)?;

        let back = ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .text(&t("seguir_comprando", &lang))
            .build();
        on_click(&back, move |_| {
            crate::app::navigate(&Route::Home);
        })?;
        append_child(&container, &back)?;
        return Ok(container);
    }

    let list = ElementBuilder::new("div")?.class("cart-items").build();
    for item in &cart.items {
        let row = ElementBuilder::new("div")?.class("cart-item").build();

        let name = ElementBuilder::new("span")?
            .class("cart-item-name")
            .text(&item.name)
            .build();
        let quantity = ElementBuilder::new("span")?
            .class("cart-item-qty")
            .text(&format!("x{}", item.quantity))
            .build();
        let subtotal = ElementBuilder::new("span")?
            .class("cart-item-subtotal")
            .text(&format!("${:.2}", item.subtotal()))
            .build();

        let remove_btn = ElementBuilder::new("button")?
            .class("btn btn-link")
            .text(&t("quitar", &lang))
            .build();
        {
            let state_clone = state.clone();
            let product_id = item.product_id.clone();
            on_click(&remove_btn, move |_| {
                let state_inner = state_clone.clone();
                let id = product_id.clone();
                spawn_local(async move {
                    CatalogViewModel::new().remove_from_cart(state_inner, id).await;
                });
            })?;
        }

        append_child(&row, &name)?;
        append_child(&row, &quantity)?;
        append_child(&row, &subtotal)?;
        append_child(&row, &remove_btn)?;
        append_child(&list, &row)?;
    }
    append_child(&container, &list)?;

    let total = ElementBuilder::new("div")?
        .class("cart-total")
        .text(&format!("{}: ${:.2}", t("total", &lang), cart.total()))
        .build();
    append_child(&container, &total)?;

    // Entrar al flujo de checkout: el secuenciador decide el paso de entrada
    let checkout_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text(&t("finalizar_compra", &lang))
        .build();
    on_click(&checkout_btn, move |_| {
        crate::app::navigate(&Route::CheckoutShipping);
    })?;
    append_child(&container, &checkout_btn)?;

    Ok(container)
}
