use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Validation error on {field}: {message}")]
    FieldError { field: String, message: String },

    #[error("Auth error: {0}")]
    AuthError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        AppError::FieldError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            AppError::ValidationError(_) | AppError::FieldError { .. } => StatusCode::BAD_REQUEST,
            AppError::AuthError(_) | AppError::JwtError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let body = match self {
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                json!({ "code": "VALIDATION_ERROR", "message": msg })
            }
            AppError::FieldError { field, message } => {
                log::warn!("Validation error on {field}: {message}");
                json!({ "code": "VALIDATION_ERROR", "message": message, "field": field })
            }
            AppError::AuthError(msg) => {
                log::warn!("Authentication error: {msg}");
                json!({ "code": "AUTH_ERROR", "message": msg })
            }
            AppError::JwtError(err) => {
                log::warn!("JWT error: {err}");
                json!({ "code": "AUTH_ERROR", "message": "Invalid token" })
            }
            AppError::NotFound(msg) => json!({ "code": "NOT_FOUND", "message": msg }),
            AppError::Forbidden => {
                log::warn!("Forbidden access");
                json!({ "code": "FORBIDDEN", "message": "Forbidden" })
            }
            AppError::DatabaseError(err) => {
                log::error!("Database error: {err}");
                json!({ "code": "DATABASE_ERROR", "message": "Database error" })
            }
            _ => {
                log::error!("Internal error: {self}");
                json!({ "code": "INTERNAL_ERROR", "message": "Internal server error" })
            }
        };

        HttpResponse::build(status_code).json(json!({
            "success": false,
            "error": body
        }))
    }
}
