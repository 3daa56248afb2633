// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, input_value_by_id, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::utils::t;
use crate::viewmodels::SessionViewModel;
use crate::views::forms::form_group;

/// Renderizar formulario de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let container = ElementBuilder::new("div")?.class("auth-view").build();

    let title = ElementBuilder::new("h2")?
        .text(&t("iniciar_sesion", &lang))
        .build();
    append_child(&container, &title)?;

    let form = ElementBuilder::new("form")?.class("auth-form").build();
    append_child(
        &form,
        &form_group("login-email", &t("email", &lang), "email", "correo@ejemplo.com")?,
    )?;
    append_child(
        &form,
        &form_group("login-password", &t("contrasena", &lang), "password", "••••••••")?,
    )?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text(&t("iniciar_sesion", &lang))
        .build();
    append_child(&form, &submit)?;

    {
        let state_clone = state.clone();
        on_submit(&form, move || {
            let email = input_value_by_id("login-email");
            let password = input_value_by_id("login-password");
            let state_inner = state_clone.clone();
            spawn_local(async move {
                SessionViewModel::new().login(state_inner, email, password).await;
            });
        })?;
    }

    append_child(&container, &form)?;
    Ok(container)
}
