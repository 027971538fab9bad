use crate::entities::{SubscriptionType, subscription_entity as subscriptions};
use crate::error::{AppError, AppResult};
use crate::models::validate_required_text;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionRequest {
    #[schema(example = "8 занятий")]
    pub name: String,
    pub subscription_type: SubscriptionType,
    /// Days of validity after first use, 0 = never expires
    #[schema(example = 30)]
    pub duration: i32,
    /// 0 = unlimited
    #[schema(example = 8)]
    pub num_sessions: i32,
    #[serde(default)]
    #[schema(value_type = String, example = "3500.00")]
    pub price: Decimal,
}

impl SubscriptionRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text("name", &self.name, 100)?;
        if self.duration < 0 {
            return Err(AppError::field(
                "duration",
                "Убедитесь, что это значение больше либо равно 0.",
            ));
        }
        if self.num_sessions < 0 {
            return Err(AppError::field(
                "num_sessions",
                "Убедитесь, что это значение больше либо равно 0.",
            ));
        }
        price_to_kopecks(self.price).map(|_| ())
    }
}

/// Converts a non-negative price with at most 8 integer and 2 fraction
/// digits to kopecks.
pub fn price_to_kopecks(price: Decimal) -> AppResult<i64> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::field(
            "price",
            "Убедитесь, что это значение больше либо равно 0.",
        ));
    }
    if price.normalize().scale() > 2 {
        return Err(AppError::field(
            "price",
            "Убедитесь, что в дробной части не более 2 цифр.",
        ));
    }
    if price >= Decimal::from(100_000_000) {
        return Err(AppError::field(
            "price",
            "Убедитесь, что в целой части не более 8 цифр.",
        ));
    }
    (price * Decimal::ONE_HUNDRED)
        .trunc()
        .to_i64()
        .ok_or_else(|| AppError::field("price", "Введите число."))
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionResponse {
    pub id: i64,
    pub name: String,
    pub subscription_type: SubscriptionType,
    pub subscription_type_display: String,
    pub duration: i32,
    pub num_sessions: i32,
    #[schema(value_type = String, example = "3500.00")]
    pub price: Decimal,
    pub display: String,
}

impl From<subscriptions::Model> for SubscriptionResponse {
    fn from(m: subscriptions::Model) -> Self {
        let display = m.display_name();
        let price = m.price();
        Self {
            id: m.id,
            name: m.name,
            subscription_type: m.subscription_type,
            subscription_type_display: m.subscription_type.display_name().to_string(),
            duration: m.duration,
            num_sessions: m.num_sessions,
            price,
            display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_price_to_kopecks() {
        assert_eq!(price_to_kopecks(dec("0")).unwrap(), 0);
        assert_eq!(price_to_kopecks(dec("3500.00")).unwrap(), 350_000);
        assert_eq!(price_to_kopecks(dec("12.5")).unwrap(), 1_250);
        assert_eq!(price_to_kopecks(dec("99999999.99")).unwrap(), 9_999_999_999);
        assert!(price_to_kopecks(dec("12.505")).is_err());
        assert!(price_to_kopecks(dec("100000000")).is_err());
        assert!(price_to_kopecks(dec("-1")).is_err());
    }

    #[test]
    fn test_negative_counts_are_rejected() {
        let req = SubscriptionRequest {
            name: "Месяц".into(),
            subscription_type: SubscriptionType::Unlimited,
            duration: -1,
            num_sessions: 0,
            price: Decimal::ZERO,
        };
        assert!(matches!(
            req.validate(),
            Err(AppError::FieldError { ref field, .. }) if field == "duration"
        ));
    }

    #[test]
    fn test_response_from_stored_plan() {
        let response = SubscriptionResponse::from(subscriptions::Model {
            id: 7,
            name: "8 занятий".into(),
            subscription_type: SubscriptionType::Limited,
            duration: 30,
            num_sessions: 8,
            price_kopecks: 350_050,
        });
        assert_eq!(response.name, "8 занятий");
        assert_eq!(response.price, dec("3500.50"));
        assert_eq!(response.subscription_type_display, "Ограниченный");
        assert_eq!(response.display, "Абонемент: 8 занятий, Тип: Ограниченный");
    }

    #[test]
    fn test_subscription_type_wire_format() {
        let req: SubscriptionRequest = serde_json::from_str(
            r#"{"name":"Безлимит","subscription_type":"unlimited","duration":30,"num_sessions":0,"price":"4500.00"}"#,
        )
        .unwrap();
        assert_eq!(req.subscription_type, SubscriptionType::Unlimited);
        assert_eq!(req.price, dec("4500.00"));
    }
}
