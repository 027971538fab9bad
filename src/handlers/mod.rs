pub mod account;
pub mod admin;
pub mod auth;
pub mod client;
pub mod client_subscription;
pub mod course;
pub mod lesson;
pub mod profile;
pub mod subscription;

pub use account::account_config;
pub use admin::admin_config;
pub use auth::auth_config;
pub use client::client_config;
pub use client_subscription::client_subscription_config;
pub use course::course_config;
pub use lesson::lesson_config;
pub use profile::profile_config;
pub use subscription::subscription_config;
