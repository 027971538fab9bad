pub mod account;
pub mod auth;
pub mod client;
pub mod client_subscription;
pub mod common;
pub mod course;
pub mod lesson;
pub mod pagination;
pub mod profile;
pub mod subscription;

pub use account::*;
pub use auth::*;
pub use client::*;
pub use client_subscription::*;
pub use common::*;
pub use course::*;
pub use lesson::*;
pub use pagination::*;
pub use profile::*;
pub use subscription::*;
