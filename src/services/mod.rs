pub mod api_client;
pub mod fetch_guard;

pub use api_client::ApiClient;
pub use fetch_guard::FetchGuard;
