// ============================================================================
// APP STATE - Estado global de la aplicación y rutas
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::notification::Notification;
use crate::models::order::Order;
use crate::models::product::{Product, ProductQuery};
use crate::models::user::{Branch, UserProfile};
use crate::services::fetch_guard::FetchGuard;
use crate::state::cart_state::CartState;
use crate::state::checkout_state::CheckoutState;
use crate::state::reactivity::Subscribers;
use crate::state::session_state::{SessionState, TokenStore};
use crate::utils::constants::*;

/// Rutas de la aplicación (hash-based). Única fuente de verdad para los
/// nombres de ruta: parse() y path() son inversas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Cart,
    CheckoutShipping,
    CheckoutPayment,
    CheckoutConfirmation,
    Orders,
    OrderDetail(String),
    Profile,
    Notifications,
}

impl Route {
    /// Parsear un path (sin el '#') a una ruta. Lo desconocido cae en Home.
    pub fn parse(path: &str) -> Route {
        let path = path.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        let path = if path.is_empty() { "/" } else { path };

        match path {
            ROUTE_HOME => Route::Home,
            ROUTE_LOGIN => Route::Login,
            ROUTE_REGISTER => Route::Register,
            ROUTE_CART => Route::Cart,
            ROUTE_CHECKOUT_SHIPPING => Route::CheckoutShipping,
            ROUTE_CHECKOUT_PAYMENT => Route::CheckoutPayment,
            ROUTE_CHECKOUT_CONFIRMATION => Route::CheckoutConfirmation,
            ROUTE_ORDERS => Route::Orders,
            ROUTE_PROFILE => Route::Profile,
            ROUTE_NOTIFICATIONS => Route::Notifications,
            _ => {
                if let Some(id) = path.strip_prefix("/orders/") {
                    if !id.is_empty() {
                        return Route::OrderDetail(id.to_string());
                    }
                }
                Route::Home
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => ROUTE_HOME.to_string(),
            Route::Login => ROUTE_LOGIN.to_string(),
            Route::Register => ROUTE_REGISTER.to_string(),
            Route::Cart => ROUTE_CART.to_string(),
            Route::CheckoutShipping => ROUTE_CHECKOUT_SHIPPING.to_string(),
            Route::CheckoutPayment => ROUTE_CHECKOUT_PAYMENT.to_string(),
            Route::CheckoutConfirmation => ROUTE_CHECKOUT_CONFIRMATION.to_string(),
            Route::Orders => ROUTE_ORDERS.to_string(),
            Route::OrderDetail(id) => format!("{}/{}", ROUTE_ORDERS, id),
            Route::Profile => ROUTE_PROFILE.to_string(),
            Route::Notifications => ROUTE_NOTIFICATIONS.to_string(),
        }
    }

    /// Una ruta de checkout monta el layout de checkout (y su draft store)
    pub fn is_checkout(&self) -> bool {
        matches!(
            self,
            Route::CheckoutShipping | Route::CheckoutPayment | Route::CheckoutConfirmation
        )
    }
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub cart: CartState,
    /// Draft store del checkout; existe solo mientras el layout de checkout
    /// está montado
    pub checkout: Rc<RefCell<Option<CheckoutState>>>,

    pub route: Rc<RefCell<Route>>,
    pub language: Rc<RefCell<String>>,

    // Datos de vistas (hidratados por los viewmodels)
    pub products: Rc<RefCell<Vec<Product>>>,
    pub product_query: Rc<RefCell<ProductQuery>>,
    pub branches: Rc<RefCell<Vec<Branch>>>,
    pub orders: Rc<RefCell<Vec<Order>>>,
    pub profile: Rc<RefCell<Option<UserProfile>>>,
    pub notifications: Rc<RefCell<Vec<Notification>>>,

    // Flags de UI
    pub loading: Rc<RefCell<bool>>,
    pub error_message: Rc<RefCell<Option<String>>>,

    /// Guards de los fetches en vuelo de la vista actual. Una misma
    /// navegación puede disparar varios fetches (checkout carga carrito,
    /// sucursales y perfil); al navegar se dropean todos juntos y las
    /// requests pendientes se abortan
    pub active_fetch: Rc<RefCell<Vec<FetchGuard>>>,

    // Reactivity: callbacks para re-render
    pub change_subscribers: Subscribers,
}

impl AppState {
    /// Crear el estado con el token store inyectado
    pub fn new(token_store: Rc<dyn TokenStore>) -> Self {
        Self {
            session: SessionState::new(token_store),
            cart: CartState::new(),
            checkout: Rc::new(RefCell::new(None)),
            route: Rc::new(RefCell::new(Route::Home)),
            language: Rc::new(RefCell::new("ES".to_string())),
            products: Rc::new(RefCell::new(Vec::new())),
            product_query: Rc::new(RefCell::new(ProductQuery::default())),
            branches: Rc::new(RefCell::new(Vec::new())),
            orders: Rc::new(RefCell::new(Vec::new())),
            profile: Rc::new(RefCell::new(None)),
            notifications: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(RefCell::new(false)),
            error_message: Rc::new(RefCell::new(None)),
            active_fetch: Rc::new(RefCell::new(Vec::new())),
            change_subscribers: Subscribers::new(),
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.borrow().clone()
    }

    /// Cambiar de ruta: aborta el fetch en vuelo de la vista saliente y
    /// monta/desmonta el contexto de checkout según corresponda
    pub fn set_route(&self, route: Route) {
        // Dropear los guards aborta las requests pendientes de la vista
        // anterior
        self.cancel_view_fetches();

        let was_checkout = self.current_route().is_checkout();
        let is_checkout = route.is_checkout();

        if is_checkout && !was_checkout {
            // Montar el draft store vacío al entrar al flujo; sus cambios
            // también disparan el re-render global
            let checkout = CheckoutState::new();
            let subscribers = self.change_subscribers.clone();
            checkout.subscribe(move || subscribers.notify());
            *self.checkout.borrow_mut() = Some(checkout);
        } else if !is_checkout && was_checkout {
            // Abandonar el checkout descarta el borrador sin limpieza remota
            *self.checkout.borrow_mut() = None;
        }

        *self.route.borrow_mut() = route;
        *self.error_message.borrow_mut() = None;
        self.change_subscribers.notify();
    }

    /// Draft store actual; None fuera del flujo de checkout
    pub fn checkout_state(&self) -> Option<CheckoutState> {
        self.checkout.borrow().clone()
    }

    /// Registrar el guard de un fetch ligado a la vista actual. Los guards
    /// conviven: un fetch nunca aborta a su hermano de la misma vista.
    pub fn track_fetch(&self, guard: FetchGuard) {
        self.active_fetch.borrow_mut().push(guard);
    }

    /// Abortar todos los fetches en vuelo de la vista actual
    pub fn cancel_view_fetches(&self) {
        self.active_fetch.borrow_mut().clear();
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
        self.change_subscribers.notify();
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error_message.borrow_mut() = error;
        self.change_subscribers.notify();
    }

    pub fn language(&self) -> String {
        self.language.borrow().clone()
    }

    /// Suscribirse a cambios de estado (re-render completo)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.subscribe(callback);
    }

    pub fn notify_subscribers(&self) {
        self.change_subscribers.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session_state::MemoryTokenStore;

    fn state() -> AppState {
        AppState::new(Rc::new(MemoryTokenStore::new()))
    }

    #[test]
    fn test_rutas_parse_path_ida_y_vuelta() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::Cart,
            Route::CheckoutShipping,
            Route::CheckoutPayment,
            Route::CheckoutConfirmation,
            Route::Orders,
            Route::OrderDetail("ord-9".to_string()),
            Route::Profile,
            Route::Notifications,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_parse_tolera_hash_y_vacio() {
        assert_eq!(Route::parse("#/login"), Route::Login);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/ruta/desconocida"), Route::Home);
    }

    #[test]
    fn test_ruta_checkout_usa_casing_unificado() {
        // Una sola fuente de verdad para los nombres de ruta
        assert_eq!(Route::CheckoutShipping.path(), "/checkout/shippinginfo");
        assert_eq!(Route::CheckoutPayment.path(), "/checkout/paymentinfo");
    }

    #[test]
    fn test_fetches_de_la_misma_vista_conviven() {
        // Entrar al checkout dispara carrito, sucursales y perfil en
        // paralelo; registrar el segundo guard no debe dropear (y abortar)
        // al primero
        let state = state();
        state.track_fetch(FetchGuard::noop());
        state.track_fetch(FetchGuard::noop());
        assert_eq!(state.active_fetch.borrow().len(), 2);
    }

    #[test]
    fn test_navegar_dropea_los_guards_de_la_vista_saliente() {
        let state = state();
        state.track_fetch(FetchGuard::noop());
        state.track_fetch(FetchGuard::noop());
        state.set_route(Route::Orders);
        assert!(state.active_fetch.borrow().is_empty());
    }

    #[test]
    fn test_entrar_al_checkout_monta_draft_store() {
        let state = state();
        assert!(state.checkout_state().is_none());

        state.set_route(Route::CheckoutShipping);
        assert!(state.checkout_state().is_some());

        // Navegar entre pasos conserva el mismo draft store
        state
            .checkout_state()
            .unwrap()
            .set_branch_or_address("branch-1".to_string());
        state.set_route(Route::CheckoutPayment);
        assert_eq!(
            state.checkout_state().unwrap().get_draft().branch_or_address_id,
            "branch-1"
        );

        // Salir del flujo descarta el borrador
        state.set_route(Route::Home);
        assert!(state.checkout_state().is_none());

        // Volver a entrar arranca con un borrador vacío
        state.set_route(Route::CheckoutShipping);
        assert_eq!(
            state.checkout_state().unwrap().get_draft().branch_or_address_id,
            ""
        );
    }
}
