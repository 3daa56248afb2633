pub mod reactivity;
pub mod session_state;
pub mod cart_state;
pub mod checkout_state;
pub mod app_state;

pub use reactivity::{Subscribers, SubscriptionId};
pub use session_state::{MemoryTokenStore, SessionState, TokenStore, WebTokenStore};
pub use cart_state::CartState;
pub use checkout_state::CheckoutState;
pub use app_state::{AppState, Route};
