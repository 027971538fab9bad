use crate::entities::subscription_entity as subscriptions;
use crate::error::AppResult;
use crate::models::*;
use crate::services::lookup::{ensure_deleted, find_or_not_found};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct SubscriptionService {
    pool: DatabaseConnection,
}

impl SubscriptionService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_subscriptions(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<SubscriptionResponse>> {
        let total = subscriptions::Entity::find().count(&self.pool).await?;
        let items = subscriptions::Entity::find()
            .order_by_asc(subscriptions::Column::Id)
            .limit(params.get_limit())
            .offset(params.get_offset())
            .all(&self.pool)
            .await?
            .into_iter()
            .map(SubscriptionResponse::from)
            .collect();
        Ok(PaginatedResponse::new(items, params, total))
    }

    pub async fn get_subscription(&self, id: i64) -> AppResult<SubscriptionResponse> {
        let plan =
            find_or_not_found::<subscriptions::Entity, _>(&self.pool, id, "Subscription").await?;
        Ok(plan.into())
    }

    pub async fn create_subscription(
        &self,
        request: SubscriptionRequest,
    ) -> AppResult<SubscriptionResponse> {
        request.validate()?;
        let price_kopecks = price_to_kopecks(request.price)?;

        let plan = subscriptions::ActiveModel {
            name: Set(request.name),
            subscription_type: Set(request.subscription_type),
            duration: Set(request.duration),
            num_sessions: Set(request.num_sessions),
            price_kopecks: Set(price_kopecks),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Created subscription plan {} ({})", plan.id, plan.subscription_type);
        Ok(plan.into())
    }

    pub async fn update_subscription(
        &self,
        id: i64,
        request: SubscriptionRequest,
    ) -> AppResult<SubscriptionResponse> {
        request.validate()?;
        let price_kopecks = price_to_kopecks(request.price)?;
        let plan =
            find_or_not_found::<subscriptions::Entity, _>(&self.pool, id, "Subscription").await?;

        let mut model = plan.into_active_model();
        model.name = Set(request.name);
        model.subscription_type = Set(request.subscription_type);
        model.duration = Set(request.duration);
        model.num_sessions = Set(request.num_sessions);
        model.price_kopecks = Set(price_kopecks);
        let updated = model.update(&self.pool).await?;

        log::info!("Updated subscription plan {id}");
        Ok(updated.into())
    }

    /// Also deletes every client purchase of this plan.
    pub async fn delete_subscription(&self, id: i64) -> AppResult<()> {
        let result = subscriptions::Entity::delete_by_id(id)
            .exec(&self.pool)
            .await?;
        ensure_deleted(result.rows_affected, "Subscription", id)?;
        log::info!("Deleted subscription plan {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory_pool;
    use crate::entities::SubscriptionType;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_create_and_display_plan() {
        let service = SubscriptionService::new(memory_pool().await);
        let plan = service
            .create_subscription(SubscriptionRequest {
                name: "8 занятий".into(),
                subscription_type: SubscriptionType::Limited,
                duration: 30,
                num_sessions: 8,
                price: Decimal::new(350000, 2),
            })
            .await
            .unwrap();

        assert_eq!(plan.display, "Абонемент: 8 занятий, Тип: Ограниченный");
        assert_eq!(plan.price.to_string(), "3500.00");

        let loaded = service.get_subscription(plan.id).await.unwrap();
        assert_eq!(loaded.subscription_type, SubscriptionType::Limited);
        assert_eq!(loaded.num_sessions, 8);
    }
}
