// ============================================================================
// PAYMENT INFO - Paso de pago del checkout
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, input_value, input_value_by_id, on_submit, ElementBuilder};
use crate::models::checkout::PaymentMethod;
use crate::state::checkout_state::CheckoutState;
use crate::state::AppState;
use crate::utils::t;
use crate::validation::payment::PaymentInfoForm;
use crate::viewmodels::CheckoutViewModel;
use crate::views::forms::{clear_validation_errors, error_slot, form_group, show_validation_errors};

const PAYMENT_FIELDS: [&str; 4] = ["payment_method", "reference", "document_id", "phone"];

const METHODS: [(PaymentMethod, &str); 4] = [
    (PaymentMethod::Cash, "efectivo"),
    (PaymentMethod::Pos, "pos"),
    (PaymentMethod::Bank, "transferencia"),
    (PaymentMethod::Mobile, "pago_movil"),
];

fn parse_method(value: &str) -> Option<PaymentMethod> {
    METHODS
        .iter()
        .find(|(m, _)| m.as_str() == value)
        .map(|(m, _)| *m)
}

/// Renderizar el paso de pago
pub fn render_payment_info(
    state: &AppState,
    checkout: &CheckoutState,
) -> Result<Element, JsValue> {
    let lang = state.language();
    let draft = checkout.get_draft();
    let container = ElementBuilder::new("div")?.class("payment-step").build();

    let title = ElementBuilder::new("h2")?.text(&t("pago", &lang)).build();
    append_child(&container, &title)?;

    let form = ElementBuilder::new("form")?.class("payment-form").build();

    // Método de pago
    let method_group = ElementBuilder::new("div")?.class("form-group").build();
    let method_label = ElementBuilder::new("label")?
        .attr("for", "payment_method")?
        .text(&t("metodo_pago", &lang))
        .build();
    append_child(&method_group, &method_label)?;

    let select = ElementBuilder::new("select")?
        .class("form-input")
        .id("payment_method")?
        .build();
    let placeholder = ElementBuilder::new("option")?.attr("value", "")?.text("--").build();
    append_child(&select, &placeholder)?;
    for (method, label_key) in METHODS {
        let option = ElementBuilder::new("option")?
            .attr("value", method.as_str())?
            .text(&t(label_key, &lang))
            .build();
        if draft.payment_method == Some(method) {
            crate::dom::set_attribute(&option, "selected", "selected")?;
        }
        append_child(&select, &option)?;
    }
    append_child(&method_group, &select)?;
    append_child(&method_group, &error_slot("payment_method")?)?;
    append_child(&form, &method_group)?;

    // Datos de la operación
    append_child(&form, &form_group("reference", &t("referencia", &lang), "text", "00012345")?)?;
    append_child(
        &form,
        &form_group("document_id", &t("documento", &lang), "text", "12345678")?,
    )?;
    append_child(&form, &form_group("phone", &t("telefono", &lang), "tel", "+58414...")?)?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text(&t("continuar", &lang))
        .build();
    append_child(&form, &submit)?;

    {
        let state_clone = state.clone();
        let select_clone = select.clone();
        on_submit(&form, move || {
            clear_validation_errors(&PAYMENT_FIELDS);
            let form_data = PaymentInfoForm {
                payment_method: parse_method(&input_value(&select_clone)),
                reference: input_value_by_id("reference"),
                document_id: input_value_by_id("document_id"),
                phone: input_value_by_id("phone"),
            };
            if let Err(errors) =
                CheckoutViewModel::new().complete_payment(&state_clone, &form_data)
            {
                show_validation_errors(&errors);
            }
        })?;
    }

    append_child(&container, &form)?;
    Ok(container)
}
