// ============================================================================
// PROFILE VIEW - Edición de perfil y cambio de contraseña
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, input_value_by_id, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::utils::t;
use crate::validation::{PasswordChangeForm, ProfileEditForm};
use crate::viewmodels::ProfileViewModel;
use crate::views::forms::{clear_validation_errors, form_group, show_validation_errors};

const PROFILE_FIELDS: [&str; 4] = ["first_name", "last_name", "phone", "birth_date"];
const PASSWORD_FIELDS: [&str; 3] = ["current_password", "new_password", "confirm_password"];

// El fragment todavía no está en el document, así que se busca dentro del
// propio subtree en lugar de por get_element_by_id
fn set_input_value(root: &Element, id: &str, value: &str) {
    use wasm_bindgen::JsCast;
    if let Ok(Some(element)) = root.query_selector(&format!("#{}", id)) {
        if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
            input.set_value(value);
        }
    }
}

/// Renderizar el perfil del usuario con sus dos formularios
pub fn render_profile(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let container = ElementBuilder::new("div")?.class("profile-view").build();

    let title = ElementBuilder::new("h2")?
        .text(&t("mi_perfil", &lang))
        .build();
    append_child(&container, &title)?;

    let profile = state.profile.borrow().clone();
    let Some(profile) = profile else {
        let loading = ElementBuilder::new("p")?
            .text(&t("cargando", &lang))
            .build();
        append_child(&container, &loading)?;
        return Ok(container);
    };

    let email = ElementBuilder::new("p")?
        .class("profile-email")
        .text(&profile.email)
        .build();
    append_child(&container, &email)?;

    // -------- Formulario de datos personales --------
    let form = ElementBuilder::new("form")?.class("profile-form").build();
    append_child(&form, &form_group("first_name", &t("nombre", &lang), "text", "")?)?;
    append_child(&form, &form_group("last_name", &t("apellido", &lang), "text", "")?)?;
    append_child(&form, &form_group("phone", &t("telefono", &lang), "tel", "+58414...")?)?;
    append_child(
        &form,
        &form_group("birth_date", &t("fecha_nacimiento", &lang), "date", "")?,
    )?;

    let save = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text(&t("guardar", &lang))
        .build();
    append_child(&form, &save)?;

    {
        let state_clone = state.clone();
        on_submit(&form, move || {
            clear_validation_errors(&PROFILE_FIELDS);
            let form_data = ProfileEditForm {
                first_name: input_value_by_id("first_name"),
                last_name: input_value_by_id("last_name"),
                phone: input_value_by_id("phone"),
                birth_date: input_value_by_id("birth_date"),
            };
            let state_inner = state_clone.clone();
            spawn_local(async move {
                if let Err(errors) =
                    ProfileViewModel::new().save_profile(state_inner, form_data).await
                {
                    show_validation_errors(&errors);
                }
            });
        })?;
    }
    append_child(&container, &form)?;

    // -------- Formulario de cambio de contraseña --------
    let password_title = ElementBuilder::new("h3")?
        .text(&t("cambiar_contrasena", &lang))
        .build();
    append_child(&container, &password_title)?;

    let password_form = ElementBuilder::new("form")?.class("password-form").build();
    append_child(
        &password_form,
        &form_group("current_password", &t("contrasena_actual", &lang), "password", "")?,
    )?;
    append_child(
        &password_form,
        &form_group("new_password", &t("contrasena_nueva", &lang), "password", "")?,
    )?;
    append_child(
        &password_form,
        &form_group(
            "confirm_password",
            &t("confirmar_contrasena", &lang),
            "password",
            "",
        )?,
    )?;

    let change = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .attr("type", "submit")?
        .text(&t("cambiar_contrasena", &lang))
        .build();
    append_child(&password_form, &change)?;

    {
        let state_clone = state.clone();
        on_submit(&password_form, move || {
            clear_validation_errors(&PASSWORD_FIELDS);
            let form_data = PasswordChangeForm {
                current_password: input_value_by_id("current_password"),
                new_password: input_value_by_id("new_password"),
                confirm_password: input_value_by_id("confirm_password"),
            };
            let state_inner = state_clone.clone();
            spawn_local(async move {
                if let Err(errors) =
                    ProfileViewModel::new().change_password(state_inner, form_data).await
                {
                    show_validation_errors(&errors);
                }
            });
        })?;
    }
    append_child(&container, &password_form)?;

    // Prellenar con los datos actuales
    set_input_value(&container, "first_name", &profile.first_name);
    set_input_value(&container, "last_name", &profile.last_name);
    set_input_value(&container, "phone", profile.phone.as_deref().unwrap_or(""));
    set_input_value(
        &container,
        "birth_date",
        profile.birth_date.as_deref().unwrap_or(""),
    );

    Ok(container)
}
