// ============================================================================
// REGISTER VIEW - Formulario de registro con validación por campo
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, input_value_by_id, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::utils::t;
use crate::validation::RegisterForm;
use crate::viewmodels::SessionViewModel;
use crate::views::forms::{clear_validation_errors, form_group, show_validation_errors};

const REGISTER_FIELDS: [&str; 7] = [
    "first_name",
    "last_name",
    "email",
    "phone",
    "birth_date",
    "password",
    "confirm_password",
];

fn read_form() -> RegisterForm {
    RegisterForm {
        first_name: input_value_by_id("first_name"),
        last_name: input_value_by_id("last_name"),
        email: input_value_by_id("email"),
        phone: input_value_by_id("phone"),
        birth_date: input_value_by_id("birth_date"),
        password: input_value_by_id("password"),
        confirm_password: input_value_by_id("confirm_password"),
    }
}

/// Renderizar formulario de registro
pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let container = ElementBuilder::new("div")?.class("auth-view").build();

    let title = ElementBuilder::new("h2")?
        .text(&t("registrarse", &lang))
        .build();
    append_child(&container, &title)?;

    let form = ElementBuilder::new("form")?.class("auth-form").build();
    append_child(&form, &form_group("first_name", &t("nombre", &lang), "text", "")?)?;
    append_child(&form, &form_group("last_name", &t("apellido", &lang), "text", "")?)?;
    append_child(
        &form,
        &form_group("email", &t("email", &lang), "email", "correo@ejemplo.com")?,
    )?;
    append_child(&form, &form_group("phone", &t("telefono", &lang), "tel", "+58414...")?)?;
    append_child(
        &form,
        &form_group("birth_date", &t("fecha_nacimiento", &lang), "date", "")?,
    )?;
    append_child(
        &form,
        &form_group("password", &t("contrasena", &lang), "password", "")?,
    )?;
    append_child(
        &form,
        &form_group(
            "confirm_password",
            &t("confirmar_contrasena", &lang),
            "password",
            "",
        )?,
    )?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text(&t("registrarse", &lang))
        .build();
    append_child(&form, &submit)?;

    {
        let state_clone = state.clone();
        on_submit(&form, move || {
            clear_validation_errors(&REGISTER_FIELDS);
            let form_data = read_form();
            let state_inner = state_clone.clone();
            spawn_local(async move {
                if let Err(errors) =
                    SessionViewModel::new().register(state_inner, form_data).await
                {
                    show_validation_errors(&errors);
                }
            });
        })?;
    }

    append_child(&container, &form)?;
    Ok(container)
}
