// ============================================================================
// APP VIEW - Composición principal y dispatch por ruta
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::{AppState, Route};
use crate::utils::t;
use crate::views;

/// Renderizar la aplicación completa según la ruta actual
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let root = ElementBuilder::new("div")?.class("app").build();

    crate::dom::append_child(&root, &views::render_header(state)?)?;

    // Banner de error genérico (red/remote); los errores de validación se
    // muestran campo a campo en cada formulario
    if let Some(error) = state.error_message.borrow().as_ref() {
        let banner = ElementBuilder::new("div")?
            .class("error-banner")
            .text(error)
            .build();
        crate::dom::append_child(&root, &banner)?;
    }

    let content = match state.current_route() {
        Route::Home => views::render_home(state)?,
        Route::Login => views::render_login(state)?,
        Route::Register => views::render_register(state)?,
        Route::Cart => views::render_cart(state)?,
        Route::CheckoutShipping | Route::CheckoutPayment | Route::CheckoutConfirmation => {
            views::checkout::render_checkout(state)?
        }
        Route::Orders => views::render_orders(state)?,
        Route::OrderDetail(order_id) => views::render_order_detail(state, &order_id)?,
        Route::Profile => views::render_profile(state)?,
        Route::Notifications => views::render_notifications(state)?,
    };
    crate::dom::append_child(&root, &content)?;

    if *state.loading.borrow() {
        let overlay = ElementBuilder::new("div")?
            .class("loading-overlay")
            .text(&t("cargando", &lang))
            .build();
        crate::dom::append_child(&root, &overlay)?;
    }

    Ok(root)
}
