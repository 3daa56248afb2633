pub mod auth;
pub mod product;
pub mod cart;
pub mod checkout;
pub mod order;
pub mod user;
pub mod notification;

pub use auth::*;
pub use product::*;
pub use cart::*;
pub use checkout::*;
pub use order::*;
pub use user::*;
pub use notification::*;
