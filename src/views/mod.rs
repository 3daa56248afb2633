// ============================================================================
// VIEWS MODULE - Vistas en Rust puro (render functions sobre el DOM)
// ============================================================================

pub mod app;
pub mod cart;
pub mod checkout;
pub mod forms;
pub mod header;
pub mod home;
pub mod login;
pub mod notifications;
pub mod orders;
pub mod profile;
pub mod register;

pub use app::render_app;
pub use cart::render_cart;
pub use header::render_header;
pub use home::render_home;
pub use login::render_login;
pub use notifications::render_notifications;
pub use orders::{render_order_detail, render_orders};
pub use profile::render_profile;
pub use register::render_register;
