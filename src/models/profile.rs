use crate::entities::profile_entity as profiles;
use crate::error::AppResult;
use crate::models::validate_required_text;
use crate::utils::validate_experience_year;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileRequest {
    pub user_id: i64,
    #[schema(example = "Анна")]
    pub first_name: String,
    #[schema(example = "Петрова")]
    pub last_name: String,
    #[schema(example = "1990-05-17")]
    pub birthday: NaiveDate,
    /// Year the staff member started working
    #[schema(example = 2012)]
    pub experience: i32,
}

impl ProfileRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text("first_name", &self.first_name, 30)?;
        validate_required_text("last_name", &self.last_name, 30)?;
        validate_experience_year(self.experience)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub experience: i32,
    pub display: String,
}

impl From<profiles::Model> for ProfileResponse {
    fn from(m: profiles::Model) -> Self {
        let display = m.display_name();
        Self {
            id: m.id,
            user_id: m.user_id,
            first_name: m.first_name,
            last_name: m.last_name,
            birthday: m.birthday,
            experience: m.experience,
            display,
        }
    }
}
