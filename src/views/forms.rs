// ============================================================================
// FORM HELPERS - Grupos label/input y errores de validación por campo
// ============================================================================
// Los errores de validación se pintan en el div `error-<campo>` de cada
// grupo, sin re-render completo (así los inputs conservan su valor).
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{get_element_by_id, set_text_content, ElementBuilder};
use crate::validation::ValidationErrors;

/// Crear un grupo de formulario: label + input + slot de error
pub fn form_group(
    field: &str,
    label: &str,
    input_type: &str,
    placeholder: &str,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label_el = ElementBuilder::new("label")?
        .attr("for", field)?
        .text(label)
        .build();

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .id(field)?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .build();

    let error_slot = ElementBuilder::new("div")?
        .class("field-error")
        .id(&format!("error-{}", field))?
        .build();

    crate::dom::append_child(&group, &label_el)?;
    crate::dom::append_child(&group, &input)?;
    crate::dom::append_child(&group, &error_slot)?;
    Ok(group)
}

/// Slot de error para un campo que no usa form_group (selects, radios)
pub fn error_slot(field: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("field-error")
        .id(&format!("error-{}", field))?
        .build())
}

/// Pintar los errores de validación en sus slots `error-<campo>`
pub fn show_validation_errors(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        if let Some(slot) = get_element_by_id(&format!("error-{}", field)) {
            set_text_content(&slot, message);
        } else {
            log::warn!("⚠️ Sin slot de error para el campo {}", field);
        }
    }
}

/// Limpiar todos los slots de error de los campos dados
pub fn clear_validation_errors(fields: &[&str]) {
    for field in fields {
        if let Some(slot) = get_element_by_id(&format!("error-{}", field)) {
            set_text_content(&slot, "");
        }
    }
}
