// ============================================================================
// HEADER VIEW - Barra de navegación
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};
use crate::utils::t;
use crate::viewmodels::SessionViewModel;

fn nav_link(label: &str, route: Route) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("button")?
        .class("nav-link")
        .text(label)
        .build();
    on_click(&link, move |_| {
        crate::app::navigate(&route);
    })?;
    Ok(link)
}

/// Renderizar la barra de navegación según la sesión actual
pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let header = ElementBuilder::new("header")?.class("app-header").build();

    let brand = ElementBuilder::new("div")?
        .class("brand")
        .text("💊 Farmacia Online")
        .build();
    on_click(&brand, move |_| {
        crate::app::navigate(&Route::Home);
    })?;
    append_child(&header, &brand)?;

    let nav = ElementBuilder::new("nav")?.class("main-nav").build();

    // Carrito con contador de líneas
    let cart_label = format!("🛒 ({})", state.cart.item_count());
    append_child(&nav, &nav_link(&cart_label, Route::Cart)?)?;

    if state.session.is_logged_in() {
        append_child(&nav, &nav_link(&t("mis_pedidos", &lang), Route::Orders)?)?;
        append_child(&nav, &nav_link(&t("notificaciones", &lang), Route::Notifications)?)?;
        append_child(&nav, &nav_link(&t("mi_perfil", &lang), Route::Profile)?)?;

        let logout_btn = ElementBuilder::new("button")?
            .class("nav-link nav-logout")
            .text(&t("cerrar_sesion", &lang))
            .build();
        let state_clone = state.clone();
        on_click(&logout_btn, move |_| {
            SessionViewModel::new().logout(&state_clone);
        })?;
        append_child(&nav, &logout_btn)?;
    } else {
        append_child(&nav, &nav_link(&t("iniciar_sesion", &lang), Route::Login)?)?;
        append_child(&nav, &nav_link(&t("registrarse", &lang), Route::Register)?)?;
    }

    append_child(&header, &nav)?;
    Ok(header)
}
