// ============================================================================
// CATALOG VIEWMODEL - Catálogo de productos y carrito
// ============================================================================

use crate::services::{ApiClient, FetchGuard};
use crate::state::AppState;

pub struct CatalogViewModel {
    api_client: ApiClient,
}

impl CatalogViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Cargar productos según la búsqueda/filtro actual. El fetch queda
    /// ligado a la vista: si el usuario navega, el guard se dropea y la
    /// request se aborta. Una búsqueda nueva aborta a la anterior.
    pub async fn load_products(&self, state: AppState) {
        state.cancel_view_fetches();
        let guard = FetchGuard::new();
        let signal = guard.signal();
        state.track_fetch(guard);

        state.set_loading(true);
        let query = state.product_query.borrow().clone();
        let result = self.api_client.get_products(&query, signal.as_ref()).await;
        state.set_loading(false);

        match result {
            Ok(response) if response.success => {
                log::info!("📦 {} productos cargados", response.products.len());
                *state.products.borrow_mut() = response.products;
                state.notify_subscribers();
            }
            Ok(response) => {
                log::error!("❌ Error cargando productos: {:?}", response.error);
                // Degradar en silencio: la vista muestra el catálogo vacío
                *state.products.borrow_mut() = Vec::new();
                state.notify_subscribers();
            }
            Err(e) => {
                // Una request abortada por navegación también cae aquí;
                // no pisar el estado de la vista entrante
                log::warn!("⚠️ Fetch de productos terminó con error: {}", e);
            }
        }
    }

    /// Hidratar el snapshot del carrito desde el backend
    pub async fn load_cart(&self, state: AppState) {
        let Some(token) = state.session.token() else {
            return;
        };

        let guard = FetchGuard::new();
        let signal = guard.signal();
        state.track_fetch(guard);

        state.cart.set_loading(true);
        let result = self.api_client.get_cart(&token, signal.as_ref()).await;
        state.cart.set_loading(false);

        match result {
            Ok(response) if response.success => {
                state.cart.set_cart(response.cart);
                state.cart.set_error(None);
                state.notify_subscribers();
            }
            Ok(response) => {
                log::error!("❌ Error cargando carrito: {:?}", response.error);
                state.cart.set_error(response.error);
                state.notify_subscribers();
            }
            Err(e) => {
                log::warn!("⚠️ Fetch de carrito terminó con error: {}", e);
            }
        }
    }

    /// Agregar un producto al carrito y refrescar el snapshot
    pub async fn add_to_cart(&self, state: AppState, product_id: String, quantity: u32) {
        let Some(token) = state.session.token() else {
            crate::app::navigate(&crate::state::Route::Login);
            return;
        };

        match self.api_client.add_to_cart(&token, &product_id, quantity).await {
            Ok(response) if response.success => {
                log::info!("🛒 Producto {} agregado al carrito", product_id);
                state.cart.set_cart(response.cart);
                state.notify_subscribers();
            }
            Ok(response) => {
                log::error!("❌ No se pudo agregar al carrito: {:?}", response.error);
                state.set_error(Some(crate::utils::t("error_generico", &state.language())));
            }
            Err(e) => {
                log::error!("❌ Error agregando al carrito: {}", e);
                state.set_error(Some(crate::utils::t("error_generico", &state.language())));
            }
        }
    }

    /// Quitar un producto del carrito y refrescar el snapshot
    pub async fn remove_from_cart(&self, state: AppState, product_id: String) {
        let Some(token) = state.session.token() else {
            return;
        };

        match self.api_client.remove_from_cart(&token, &product_id).await {
            Ok(response) if response.success => {
                state.cart.set_cart(response.cart);
                state.notify_subscribers();
            }
            Ok(response) => {
                log::error!("❌ No se pudo quitar del carrito: {:?}", response.error);
            }
            Err(e) => {
                log::error!("❌ Error quitando del carrito: {}", e);
            }
        }
    }

    /// Cargar sucursales para el paso de envío (con cache local)
    pub async fn load_branches(&self, state: AppState) {
        use crate::utils::{load_from_storage, save_to_storage, BRANCHES_CACHE_KEY};
        use crate::models::user::Branch;

        // Cache primero: las sucursales cambian poco
        if let Some(cached) = load_from_storage::<Vec<Branch>>(BRANCHES_CACHE_KEY) {
            if !cached.is_empty() {
                *state.branches.borrow_mut() = cached;
                state.notify_subscribers();
                return;
            }
        }

        match self.api_client.get_branches(None).await {
            Ok(response) if response.success => {
                if let Err(e) = save_to_storage(BRANCHES_CACHE_KEY, &response.branches) {
                    log::warn!("⚠️ No se pudo cachear sucursales: {}", e);
                }
                *state.branches.borrow_mut() = response.branches;
                state.notify_subscribers();
            }
            Ok(response) => {
                log::error!("❌ Error cargando sucursales: {:?}", response.error);
            }
            Err(e) => {
                log::error!("❌ Error cargando sucursales: {}", e);
            }
        }
    }
}

impl Default for CatalogViewModel {
    fn default() -> Self {
        Self::new()
    }
}
