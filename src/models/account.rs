use crate::entities::account_entity as accounts;
use crate::error::{AppError, AppResult};
use crate::models::validate_required_text;
use crate::utils::validate_password;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountRequest {
    #[schema(example = "coach.anna")]
    pub username: String,
    /// Required when creating an account; keeps the current password on change when omitted.
    #[schema(example = "Password123")]
    pub password: Option<String>,
    #[serde(default = "default_true")]
    pub is_staff: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl AccountRequest {
    pub fn validate(&self, creating: bool) -> AppResult<()> {
        validate_required_text("username", &self.username, 150)?;
        match &self.password {
            Some(password) => validate_password(password, &self.username),
            None if creating => Err(AppError::field("password", "Обязательное поле.")),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub id: i64,
    pub username: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<accounts::Model> for AccountResponse {
    fn from(m: accounts::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            is_staff: m.is_staff,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}
