use chrono::{Duration, NaiveDate};
use sea_orm::entity::prelude::*;

/// A client's purchase of a subscription plan.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "client_subscriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub client_id: i64,
    pub subscription_id: i64,
    /// Only meaningful for limited plans.
    pub course_id: Option<i64>,
    pub purchase_date: NaiveDate,
    pub first_used_date: Option<NaiveDate>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clients::Entity",
        from = "Column::ClientId",
        to = "super::clients::Column::Id",
        on_delete = "Cascade"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::subscriptions::Entity",
        from = "Column::SubscriptionId",
        to = "super::subscriptions::Column::Id",
        on_delete = "Cascade"
    )]
    Subscription,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::subscriptions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscription.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Derived on every read from the plan duration, never stored.
    pub fn expiration_date(&self, plan: &super::subscriptions::Model) -> Option<NaiveDate> {
        expiration_date(self.first_used_date, plan.duration)
    }
}

/// `first_used + duration` days; `None` for plans without a duration or
/// subscriptions that were never used.
pub fn expiration_date(first_used: Option<NaiveDate>, duration: i32) -> Option<NaiveDate> {
    if duration <= 0 {
        return None;
    }
    first_used.and_then(|d| d.checked_add_signed(Duration::days(i64::from(duration))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expiration_adds_duration_days() {
        assert_eq!(
            expiration_date(Some(date(2024, 1, 1)), 30),
            Some(date(2024, 1, 31))
        );
        assert_eq!(
            expiration_date(Some(date(2024, 2, 20)), 10),
            Some(date(2024, 3, 1))
        );
    }

    #[test]
    fn test_zero_duration_never_expires() {
        assert_eq!(expiration_date(Some(date(2024, 1, 1)), 0), None);
        assert_eq!(expiration_date(None, 0), None);
    }

    #[test]
    fn test_unused_subscription_has_no_expiration() {
        assert_eq!(expiration_date(None, 30), None);
    }
}
