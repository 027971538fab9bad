pub mod auth;
pub mod cors;

pub use auth::{AuthMiddleware, CurrentAccount, get_current_account_id};
pub use cors::create_cors;
