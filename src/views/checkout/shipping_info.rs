// ============================================================================
// SHIPPING INFO - Paso de envío del checkout
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, input_value, on_change, on_click, ElementBuilder};
use crate::models::checkout::ShippingMethod;
use crate::state::checkout_state::CheckoutState;
use crate::state::AppState;
use crate::utils::t;
use crate::viewmodels::CheckoutViewModel;
use crate::views::forms::{clear_validation_errors, error_slot, show_validation_errors};

const SHIPPING_FIELDS: [&str; 2] = ["shipping_method", "branch_or_address_id"];

fn method_radio(
    checkout: &CheckoutState,
    method: ShippingMethod,
    label: &str,
    selected: bool,
) -> Result<Element, JsValue> {
    let wrapper = ElementBuilder::new("label")?.class("radio-option").build();

    let radio = ElementBuilder::new("input")?
        .attr("type", "radio")?
        .attr("name", "shipping_method")?
        .attr("value", method.as_str())?
        .build();
    if selected {
        crate::dom::set_attribute(&radio, "checked", "checked")?;
    }
    {
        let checkout = checkout.clone();
        on_change(&radio, move |_| {
            // Cambiar de método invalida la selección anterior de
            // sucursal/dirección
            checkout.set_branch_or_address(String::new());
            checkout.set_shipping_method(method);
        })?;
    }

    let text = ElementBuilder::new("span")?.text(label).build();
    append_child(&wrapper, &radio)?;
    append_child(&wrapper, &text)?;
    Ok(wrapper)
}

/// Renderizar el paso de envío
pub fn render_shipping_info(
    state: &AppState,
    checkout: &CheckoutState,
) -> Result<Element, JsValue> {
    let lang = state.language();
    let draft = checkout.get_draft();
    let container = ElementBuilder::new("div")?.class("shipping-step").build();

    let title = ElementBuilder::new("h2")?.text(&t("envio", &lang)).build();
    append_child(&container, &title)?;

    // Método de envío
    let methods = ElementBuilder::new("div")?.class("shipping-methods").build();
    append_child(
        &methods,
        &method_radio(
            checkout,
            ShippingMethod::Pickup,
            &t("retiro_sucursal", &lang),
            draft.shipping_method == Some(ShippingMethod::Pickup),
        )?,
    )?;
    append_child(
        &methods,
        &method_radio(
            checkout,
            ShippingMethod::Delivery,
            &t("envio_domicilio", &lang),
            draft.shipping_method == Some(ShippingMethod::Delivery),
        )?,
    )?;
    append_child(&methods, &error_slot("shipping_method")?)?;
    append_child(&container, &methods)?;

    // Destino según el método elegido
    match draft.shipping_method {
        Some(ShippingMethod::Pickup) => {
            append_child(&container, &render_branch_select(state, checkout, &lang)?)?;
        }
        Some(ShippingMethod::Delivery) => {
            append_child(&container, &render_address_select(state, checkout, &lang)?)?;
        }
        None => {}
    }
    append_child(&container, &error_slot("branch_or_address_id")?)?;

    // Continuar al paso de pago
    let continue_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text(&t("continuar", &lang))
        .build();
    {
        let state_clone = state.clone();
        on_click(&continue_btn, move |_| {
            clear_validation_errors(&SHIPPING_FIELDS);
            if let Err(errors) = CheckoutViewModel::new().complete_shipping(&state_clone) {
                show_validation_errors(&errors);
            }
        })?;
    }
    append_child(&container, &continue_btn)?;

    Ok(container)
}

/// Select de sucursales (pickup)
fn render_branch_select(
    state: &AppState,
    checkout: &CheckoutState,
    lang: &str,
) -> Result<Element, JsValue> {
    let draft = checkout.get_draft();
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?.text(&t("sucursal", lang)).build();
    append_child(&group, &label)?;

    let select = ElementBuilder::new("select")?
        .class("form-input")
        .id("branch_or_address_id")?
        .build();

    let placeholder = ElementBuilder::new("option")?.attr("value", "")?.text("--").build();
    append_child(&select, &placeholder)?;

    for branch in state.branches.borrow().iter() {
        let option = ElementBuilder::new("option")?
            .attr("value", &branch.id)?
            .text(&format!("{} ({})", branch.name, branch.address))
            .build();
        if branch.id == draft.branch_or_address_id {
            crate::dom::set_attribute(&option, "selected", "selected")?;
        }
        append_child(&select, &option)?;
    }

    {
        let checkout = checkout.clone();
        let select_clone = select.clone();
        on_change(&select, move |_| {
            checkout.set_branch_or_address(input_value(&select_clone));
        })?;
    }

    append_child(&group, &select)?;
    Ok(group)
}

/// Select de direcciones del perfil (delivery)
fn render_address_select(
    state: &AppState,
    checkout: &CheckoutState,
    lang: &str,
) -> Result<Element, JsValue> {
    let draft = checkout.get_draft();
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?.text(&t("direccion", lang)).build();
    append_child(&group, &label)?;

    let select = ElementBuilder::new("select")?
        .class("form-input")
        .id("branch_or_address_id")?
        .build();

    let placeholder = ElementBuilder::new("option")?.attr("value", "")?.text("--").build();
    append_child(&select, &placeholder)?;

    if let Some(profile) = state.profile.borrow().as_ref() {
        for address in &profile.addresses {
            let option = ElementBuilder::new("option")?
                .attr("value", &address.id)?
                .text(&format!("{}: {}, {}", address.label, address.street, address.city))
                .build();
            if address.id == draft.branch_or_address_id {
                crate::dom::set_attribute(&option, "selected", "selected")?;
            }
            append_child(&select, &option)?;
        }
    }

    {
        let checkout = checkout.clone();
        let select_clone = select.clone();
        on_change(&select, move |_| {
            checkout.set_branch_or_address(input_value(&select_clone));
        })?;
    }

    append_child(&group, &select)?;
    Ok(group)
}
