// ============================================================================
// NOTIFICATIONS VIEWMODEL - Notificaciones del usuario
// ============================================================================

use crate::services::{ApiClient, FetchGuard};
use crate::state::{AppState, Route};

pub struct NotificationsViewModel {
    api_client: ApiClient,
}

impl NotificationsViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Cargar notificaciones
    pub async fn load_notifications(&self, state: AppState) {
        let Some(token) = state.session.token() else {
            crate::app::navigate(&Route::Login);
            return;
        };

        let guard = FetchGuard::new();
        let signal = guard.signal();
        state.track_fetch(guard);

        state.set_loading(true);
        let result = self.api_client.get_notifications(&token, signal.as_ref()).await;
        state.set_loading(false);

        match result {
            Ok(response) if response.success => {
                *state.notifications.borrow_mut() = response.notifications;
                state.notify_subscribers();
            }
            Ok(response) => {
                log::error!("❌ Error cargando notificaciones: {:?}", response.error);
                *state.notifications.borrow_mut() = Vec::new();
                state.notify_subscribers();
            }
            Err(e) => {
                log::warn!("⚠️ Fetch de notificaciones terminó con error: {}", e);
            }
        }
    }

    /// Marcar como leída (optimistic UI: se marca local y se notifica al
    /// backend; si falla queda el log, sin rollback)
    pub async fn mark_read(&self, state: AppState, notification_id: String) {
        let Some(token) = state.session.token() else {
            return;
        };

        {
            let mut notifications = state.notifications.borrow_mut();
            if let Some(notification) =
                notifications.iter_mut().find(|n| n.id == notification_id)
            {
                notification.read = true;
            }
        }
        state.notify_subscribers();

        if let Err(e) = self
            .api_client
            .mark_notification_read(&token, &notification_id)
            .await
        {
            log::error!("❌ Error marcando notificación {}: {}", notification_id, e);
        }
    }
}

impl Default for NotificationsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
