use crate::entities::client_entity as clients;
use crate::error::AppResult;
use crate::models::{validate_max_len, validate_required_text};
use crate::utils::validate_phone;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientRequest {
    #[schema(example = "Иван")]
    pub first_name: String,
    #[schema(example = "Смирнов")]
    pub last_name: String,
    #[schema(example = "1995-03-02")]
    pub birthday: NaiveDate,
    #[serde(default)]
    #[schema(example = "+71234567890")]
    pub phone_number: String,
    /// The club brought this client in
    #[serde(default = "default_true")]
    pub is_from_club: bool,
}

impl ClientRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text("first_name", &self.first_name, 30)?;
        validate_required_text("last_name", &self.last_name, 30)?;
        validate_max_len("phone_number", &self.phone_number, 17)?;
        validate_phone(&self.phone_number)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub phone_number: String,
    pub is_from_club: bool,
    pub display: String,
}

impl From<clients::Model> for ClientResponse {
    fn from(m: clients::Model) -> Self {
        let display = m.display_name();
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            birthday: m.birthday,
            phone_number: m.phone_number,
            is_from_club: m.is_from_club,
            display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn request(phone: &str) -> ClientRequest {
        ClientRequest {
            first_name: "Иван".into(),
            last_name: "Смирнов".into(),
            birthday: NaiveDate::from_ymd_opt(1995, 3, 2).unwrap(),
            phone_number: phone.into(),
            is_from_club: true,
        }
    }

    #[test]
    fn test_phone_is_validated_before_saving() {
        assert!(request("+71234567890").validate().is_ok());
        assert!(request("").validate().is_ok());
        assert!(matches!(
            request("+123").validate(),
            Err(AppError::FieldError { ref field, .. }) if field == "phone_number"
        ));
    }

    #[test]
    fn test_is_from_club_defaults_to_true() {
        let req: ClientRequest = serde_json::from_str(
            r#"{"first_name":"A","last_name":"B","birthday":"2000-01-01"}"#,
        )
        .unwrap();
        assert!(req.is_from_club);
        assert_eq!(req.phone_number, "");
    }
}
