pub mod experience;
pub mod jwt;
pub mod password;
pub mod phone;

pub use experience::*;
pub use jwt::*;
pub use password::*;
pub use phone::*;
