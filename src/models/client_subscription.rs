use crate::entities::{
    client_entity as clients, client_subscription_entity as client_subscriptions,
    subscription_entity as subscriptions,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientSubscriptionRequest {
    pub client_id: i64,
    pub subscription_id: i64,
    /// Course the plan is bound to, for limited plans
    pub course_id: Option<i64>,
    pub first_used_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientSubscriptionResponse {
    pub id: i64,
    pub client_id: i64,
    pub subscription_id: i64,
    pub course_id: Option<i64>,
    pub purchase_date: NaiveDate,
    pub first_used_date: Option<NaiveDate>,
    /// Absent for plans without duration or before first use
    pub expiration_date: Option<NaiveDate>,
    pub display: String,
}

impl ClientSubscriptionResponse {
    pub fn new(
        m: client_subscriptions::Model,
        client: &clients::Model,
        plan: &subscriptions::Model,
    ) -> Self {
        Self {
            expiration_date: m.expiration_date(plan),
            display: format!(
                "{} {}, {}",
                client.first_name, client.last_name, plan.name
            ),
            id: m.id,
            client_id: m.client_id,
            subscription_id: m.subscription_id,
            course_id: m.course_id,
            purchase_date: m.purchase_date,
            first_used_date: m.first_used_date,
        }
    }
}
