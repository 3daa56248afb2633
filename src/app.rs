// ============================================================================
// APP - Aplicación principal (raíz del árbol MVVM)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{get_element_by_id, set_inner_html};
use crate::state::{AppState, Route};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear la aplicación montada sobre el elemento #app
    pub fn new(state: AppState) -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        // Re-render completo ante cualquier cambio de estado, batcheado con
        // un Timeout(0) para colapsar ráfagas de notificaciones
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Renderizar el árbol completo en el root
    pub fn render(&mut self) -> Result<(), JsValue> {
        let view = render_app(&self.state)?;
        // Destruir el subtree anterior limpia también sus listeners
        set_inner_html(&self.root, "");
        crate::dom::append_child(&self.root, &view)?;
        Ok(())
    }
}

/// Navegar a una ruta cambiando el hash; el listener de hashchange hace el
/// resto (set_route + carga de datos)
pub fn navigate(route: &Route) {
    if let Some(window) = crate::dom::window() {
        let location = window.location();
        if let Err(e) = location.set_hash(&route.path()) {
            log::error!("❌ [NAV] No se pudo navegar a {}: {:?}", route.path(), e);
        }
    }
}

/// Disparar las cargas de datos de la ruta entrante. Cada fetch guarda su
/// guard en el estado, así que navegar de nuevo aborta lo que quede en vuelo.
pub fn load_route_data(state: &AppState, route: &Route) {
    use crate::viewmodels::{
        CatalogViewModel, NotificationsViewModel, OrdersViewModel, ProfileViewModel,
    };
    use wasm_bindgen_futures::spawn_local;

    match route {
        Route::Home => {
            let state = state.clone();
            spawn_local(async move {
                CatalogViewModel::new().load_products(state).await;
            });
        }
        Route::Cart => {
            let state = state.clone();
            spawn_local(async move {
                CatalogViewModel::new().load_cart(state).await;
            });
        }
        Route::CheckoutShipping | Route::CheckoutPayment | Route::CheckoutConfirmation => {
            // El paso de envío necesita carrito, sucursales y direcciones.
            // Sin token no se carga nada: el secuenciador ya redirige a login.
            if state.session.is_logged_in() {
                let state_cart = state.clone();
                spawn_local(async move {
                    let vm = CatalogViewModel::new();
                    if state_cart.cart.get_cart().is_none() {
                        vm.load_cart(state_cart.clone()).await;
                    }
                    vm.load_branches(state_cart).await;
                });
                if state.profile.borrow().is_none() {
                    let state_profile = state.clone();
                    spawn_local(async move {
                        ProfileViewModel::new().load_profile(state_profile).await;
                    });
                }
            }
        }
        Route::Orders => {
            let state = state.clone();
            spawn_local(async move {
                OrdersViewModel::new().load_orders(state).await;
            });
        }
        Route::OrderDetail(order_id) => {
            let state = state.clone();
            let order_id = order_id.clone();
            spawn_local(async move {
                OrdersViewModel::new().load_order(state, order_id).await;
            });
        }
        Route::Profile => {
            let state = state.clone();
            spawn_local(async move {
                ProfileViewModel::new().load_profile(state).await;
            });
        }
        Route::Notifications => {
            let state = state.clone();
            spawn_local(async move {
                NotificationsViewModel::new().load_notifications(state).await;
            });
        }
        Route::Login | Route::Register => {}
    }
}
