use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

pub const PHONE_FORMAT_MESSAGE: &str = "Формат ввода: '+71234567890'. От 9 до 15 символов.";

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^\+\d{9,15}$").expect("phone pattern is valid"))
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// Validates a client phone number. Blank numbers are allowed.
pub fn validate_phone(phone: &str) -> AppResult<()> {
    if phone.is_empty() || is_valid_phone(phone) {
        return Ok(());
    }
    Err(AppError::field("phone_number", PHONE_FORMAT_MESSAGE))
}
