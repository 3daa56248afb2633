// ============================================================================
// NOTIFICATIONS VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::utils::t;
use crate::viewmodels::NotificationsViewModel;

/// Renderizar la lista de notificaciones
pub fn render_notifications(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let container = ElementBuilder::new("div")?.class("notifications-view").build();

    let title = ElementBuilder::new("h2")?
        .text(&t("notificaciones", &lang))
        .build();
    append_child(&container, &title)?;

    let notifications = state.notifications.borrow();
    if notifications.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("notifications-empty")
            .text(&t("sin_notificaciones", &lang))
            .build();
        append_child(&container, &empty)?;
        return Ok(container);
    }

    let list = ElementBuilder::new("div")?.class("notifications-list").build();
    for notification in notifications.iter() {
        let class = if notification.read {
            "notification-card read"
        } else {
            "notification-card unread"
        };
        let card = ElementBuilder::new("div")?.class(class).build();

        let card_title = ElementBuilder::new("h4")?
            .text(&notification.title)
            .build();
        let body = ElementBuilder::new("p")?.text(&notification.body).build();
        append_child(&card, &card_title)?;
        append_child(&card, &body)?;

        if let Some(created_at) = &notification.created_at {
            let date = ElementBuilder::new("span")?
                .class("notification-date")
                .text(created_at)
                .build();
            append_child(&card, &date)?;
        }

        // Marcado optimista al tocar la card
        if !notification.read {
            let state_clone = state.clone();
            let notification_id = notification.id.clone();
            on_click(&card, move |_| {
                let state_inner = state_clone.clone();
                let id = notification_id.clone();
                spawn_local(async move {
                    NotificationsViewModel::new().mark_read(state_inner, id).await;
                });
            })?;
        }

        append_child(&list, &card)?;
    }
    append_child(&container, &list)?;

    Ok(container)
}
