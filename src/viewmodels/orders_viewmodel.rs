// ============================================================================
// ORDERS VIEWMODEL - Historial de pedidos
// ============================================================================
// El estado de cada pedido se deriva en cada render con order_status_view();
// aquí solo se hidrata la lista desde el backend.
// ============================================================================

use crate::services::{ApiClient, FetchGuard};
use crate::state::{AppState, Route};

pub struct OrdersViewModel {
    api_client: ApiClient,
}

impl OrdersViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Cargar el historial de pedidos del usuario
    pub async fn load_orders(&self, state: AppState) {
        let Some(token) = state.session.token() else {
            crate::app::navigate(&Route::Login);
            return;
        };

        let guard = FetchGuard::new();
        let signal = guard.signal();
        state.track_fetch(guard);

        state.set_loading(true);
        let result = self.api_client.get_orders(&token, signal.as_ref()).await;
        state.set_loading(false);

        match result {
            Ok(response) if response.success => {
                log::info!("🧾 {} pedidos cargados", response.orders.len());
                *state.orders.borrow_mut() = response.orders;
                state.notify_subscribers();
            }
            Ok(response) => {
                log::error!("❌ Error cargando pedidos: {:?}", response.error);
                *state.orders.borrow_mut() = Vec::new();
                state.notify_subscribers();
            }
            Err(e) => {
                log::warn!("⚠️ Fetch de pedidos terminó con error: {}", e);
            }
        }
    }

    /// Refrescar un pedido puntual (vista de detalle)
    pub async fn load_order(&self, state: AppState, order_id: String) {
        let Some(token) = state.session.token() else {
            crate::app::navigate(&Route::Login);
            return;
        };

        let guard = FetchGuard::new();
        let signal = guard.signal();
        state.track_fetch(guard);

        match self.api_client.get_order(&token, &order_id, signal.as_ref()).await {
            Ok(order) => {
                let mut orders = state.orders.borrow_mut();
                if let Some(existing) = orders.iter_mut().find(|o| o.id == order.id) {
                    *existing = order;
                } else {
                    orders.push(order);
                }
                drop(orders);
                state.notify_subscribers();
            }
            Err(e) => {
                log::error!("❌ Error cargando pedido {}: {}", order_id, e);
                state.set_error(Some(crate::utils::t("error_generico", &state.language())));
            }
        }
    }
}

impl Default for OrdersViewModel {
    fn default() -> Self {
        Self::new()
    }
}
