use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(10))")]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionType {
    #[sea_orm(string_value = "limited")]
    Limited,
    #[sea_orm(string_value = "unlimited")]
    Unlimited,
}

impl SubscriptionType {
    pub fn display_name(self) -> &'static str {
        match self {
            SubscriptionType::Limited => "Ограниченный",
            SubscriptionType::Unlimited => "Безлимитный",
        }
    }
}

impl std::fmt::Display for SubscriptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionType::Limited => write!(f, "limited"),
            SubscriptionType::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// Purchasable plan template.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub subscription_type: SubscriptionType,
    /// Validity in days after first use, 0 means it never expires.
    pub duration: i32,
    /// 0 means unlimited sessions.
    pub num_sessions: i32,
    /// Price in kopecks.
    pub price_kopecks: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Price with two fraction digits.
    pub fn price(&self) -> Decimal {
        Decimal::new(self.price_kopecks, 2)
    }

    pub fn display_name(&self) -> String {
        format!(
            "Абонемент: {}, Тип: {}",
            self.name,
            self.subscription_type.display_name()
        )
    }
}
