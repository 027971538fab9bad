pub mod account_service;
pub mod auth_service;
pub mod client_service;
pub mod client_subscription_service;
pub mod course_service;
pub mod lesson_service;
mod lookup;
pub mod profile_service;
pub mod subscription_service;
#[cfg(test)]
pub(crate) mod testing;

pub use account_service::*;
pub use auth_service::*;
pub use client_service::*;
pub use client_subscription_service::*;
pub use course_service::*;
pub use lesson_service::*;
pub use profile_service::*;
pub use subscription_service::*;
