use crate::error::{AppError, AppResult};
use bcrypt::{DEFAULT_COST, hash, verify};

const MIN_CHARS: usize = 8;
// bcrypt ignores everything past 72 bytes
const MAX_BYTES: usize = 72;

/// Staff password policy, reported on the `password` field.
pub fn validate_password(password: &str, username: &str) -> AppResult<()> {
    let reject = |message: String| Err(AppError::field("password", message));

    if password.chars().count() < MIN_CHARS {
        return reject(format!(
            "Введённый пароль слишком короткий. Он должен содержать как минимум {MIN_CHARS} символов."
        ));
    }
    if password.len() > MAX_BYTES {
        return reject(format!("Пароль не может быть длиннее {MAX_BYTES} байт."));
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        return reject("Введённый пароль состоит только из цифр.".to_string());
    }
    let username = username.trim().to_lowercase();
    if username.chars().count() >= 3 && password.to_lowercase().contains(&username) {
        return reject("Введённый пароль слишком похож на имя пользователя.".to_string());
    }

    Ok(())
}

pub fn hash_password(password: &str) -> AppResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("failed to hash password: {e}")))
}

pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    verify(password, hash)
        .map_err(|e| AppError::InternalError(format!("failed to verify password: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(password: &str, username: &str) -> bool {
        matches!(
            validate_password(password, username),
            Err(AppError::FieldError { ref field, .. }) if field == "password"
        )
    }

    #[test]
    fn test_password_policy() {
        assert!(validate_password("Password123", "anna").is_ok());
        assert!(validate_password("пароль-клуба", "anna").is_ok());
        assert!(rejected("Пароль1", "anna"));
        assert!(rejected("12345678901", "anna"));
        assert!(rejected("anna.petrova2024", "Anna"));
        assert!(rejected(&"ж".repeat(40), "anna"));
        // short usernames are not compared
        assert!(validate_password("ab-secret-1", "ab").is_ok());
    }

    #[test]
    fn test_hash_and_verify_password() {
        let hashed = hash_password("Password123").unwrap();
        assert!(verify_password("Password123", &hashed).unwrap());
        assert!(!verify_password("WrongPassword", &hashed).unwrap());
    }
}
