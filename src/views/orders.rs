// ============================================================================
// ORDERS VIEW - Historial de pedidos y detalle
// ============================================================================
// El badge de estado se deriva en cada render con status_view(); el pedido
// remoto es la única fuente de verdad.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::order::Order;
use crate::state::{AppState, Route};
use crate::utils::t;

fn status_badge(order: &Order, lang: &str) -> Result<Element, JsValue> {
    let view = order.status_view();
    Ok(ElementBuilder::new("span")?
        .class(&format!("status-badge {}", view.css_class()))
        .text(&t(view.label_key(), lang))
        .build())
}

/// Renderizar el historial de pedidos
pub fn render_orders(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let container = ElementBuilder::new("div")?.class("orders-view").build();

    let title = ElementBuilder::new("h2")?
        .text(&t("mis_pedidos", &lang))
        .build();
    append_child(&container, &title)?;

    let orders = state.orders.borrow();
    if orders.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("orders-empty")
            .text(&t("sin_pedidos", &lang))
            .build();
        append_child(&container, &empty)?;
        return Ok(container);
    }

    let list = ElementBuilder::new("div")?.class("orders-list").build();
    for order in orders.iter() {
        let row = ElementBuilder::new("div")?.class("order-row").build();

        let id_label = ElementBuilder::new("span")?
            .class("order-id")
            .text(&format!("#{}", order.id))
            .build();
        let total = ElementBuilder::new("span")?
            .class("order-total")
            .text(&format!("${:.2}", order.total))
            .build();

        append_child(&row, &id_label)?;
        append_child(&row, &status_badge(order, &lang)?)?;
        append_child(&row, &total)?;

        if let Some(created_at) = &order.created_at {
            let date = ElementBuilder::new("span")?
                .class("order-date")
                .text(created_at)
                .build();
            append_child(&row, &date)?;
        }

        {
            let order_id = order.id.clone();
            on_click(&row, move |_| {
                crate::app::navigate(&Route::OrderDetail(order_id.clone()));
            })?;
        }
        append_child(&list, &row)?;
    }
    append_child(&container, &list)?;

    Ok(container)
}

/// Renderizar el detalle de un pedido
pub fn render_order_detail(state: &AppState, order_id: &str) -> Result<Element, JsValue> {
    let lang = state.language();
    let container = ElementBuilder::new("div")?.class("order-detail-view").build();

    let back = ElementBuilder::new("button")?
        .class("btn btn-link")
        .text(&format!("← {}", t("mis_pedidos", &lang)))
        .build();
    on_click(&back, move |_| {
        crate::app::navigate(&Route::Orders);
    })?;
    append_child(&container, &back)?;

    let orders = state.orders.borrow();
    let Some(order) = orders.iter().find(|o| o.id == order_id) else {
        // Aún no hidratado (deep-link directo al detalle)
        let loading = ElementBuilder::new("p")?
            .text(&t("cargando", &lang))
            .build();
        append_child(&container, &loading)?;
        return Ok(container);
    };

    let title = ElementBuilder::new("h2")?
        .text(&format!("{} #{}", t("numero_pedido", &lang), order.id))
        .build();
    append_child(&container, &title)?;
    append_child(&container, &status_badge(order, &lang)?)?;

    let items = ElementBuilder::new("div")?.class("order-items").build();
    for item in &order.items {
        let row = ElementBuilder::new("div")?
            .class("order-item")
            .text(&format!(
                "{} x{} = ${:.2}",
                item.name,
                item.quantity,
                item.subtotal()
            ))
            .build();
        append_child(&items, &row)?;
    }
    append_child(&container, &items)?;

    let total = ElementBuilder::new("div")?
        .class("order-total")
        .text(&format!("{}: ${:.2}", t("total", &lang), order.total))
        .build();
    append_child(&container, &total)?;

    Ok(container)
}
