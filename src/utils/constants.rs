// ============================================================================
// CONSTANTES - URLs, claves de storage y rutas
// ============================================================================
// Las rutas de checkout viven SOLO aquí: una única fuente de verdad para
// los nombres de ruta.
// ============================================================================

use crate::config::CONFIG;

lazy_static::lazy_static! {
    pub static ref BACKEND_URL: String = CONFIG.backend_url().to_string();
}

/// Clave única del bearer token (se escribe en localStorage Y sessionStorage)
pub const SESSION_TOKEN_KEY: &str = "pharma_session_token";

/// Cache local del catálogo de sucursales
pub const BRANCHES_CACHE_KEY: &str = "pharmaStore_branches";

// Rutas (hash-based)
pub const ROUTE_HOME: &str = "/";
pub const ROUTE_LOGIN: &str = "/login";
pub const ROUTE_REGISTER: &str = "/register";
pub const ROUTE_CART: &str = "/cart";
pub const ROUTE_CHECKOUT_SHIPPING: &str = "/checkout/shippinginfo";
pub const ROUTE_CHECKOUT_PAYMENT: &str = "/checkout/paymentinfo";
pub const ROUTE_CHECKOUT_CONFIRMATION: &str = "/checkout/confirmation";
pub const ROUTE_ORDERS: &str = "/orders";
pub const ROUTE_PROFILE: &str = "/profile";
pub const ROUTE_NOTIFICATIONS: &str = "/notifications";
