pub mod session_viewmodel;
pub mod checkout_viewmodel;
pub mod catalog_viewmodel;
pub mod orders_viewmodel;
pub mod profile_viewmodel;
pub mod notifications_viewmodel;

pub use session_viewmodel::SessionViewModel;
pub use checkout_viewmodel::{CheckoutStep, CheckoutViewModel};
pub use catalog_viewmodel::CatalogViewModel;
pub use orders_viewmodel::OrdersViewModel;
pub use profile_viewmodel::ProfileViewModel;
pub use notifications_viewmodel::NotificationsViewModel;
