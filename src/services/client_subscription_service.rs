use crate::entities::{
    client_entity as clients, client_subscription_entity as client_subscriptions,
    course_entity as courses, subscription_entity as subscriptions,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::lookup::{ensure_deleted, find_or_not_found, find_referenced};
use chrono::Local;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::collections::HashMap;

#[derive(Clone)]
pub struct ClientSubscriptionService {
    pool: DatabaseConnection,
}

impl ClientSubscriptionService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_client_subscriptions(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<ClientSubscriptionResponse>> {
        let total = client_subscriptions::Entity::find().count(&self.pool).await?;
        let page = client_subscriptions::Entity::find()
            .order_by_asc(client_subscriptions::Column::Id)
            .limit(params.get_limit())
            .offset(params.get_offset())
            .all(&self.pool)
            .await?;

        let client_ids: Vec<i64> = page.iter().map(|p| p.client_id).collect();
        let plan_ids: Vec<i64> = page.iter().map(|p| p.subscription_id).collect();
        let clients: HashMap<i64, clients::Model> = clients::Entity::find()
            .filter(clients::Column::Id.is_in(client_ids))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let plans: HashMap<i64, subscriptions::Model> = subscriptions::Entity::find()
            .filter(subscriptions::Column::Id.is_in(plan_ids))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let mut items = Vec::with_capacity(page.len());
        for purchase in page {
            let (Some(client), Some(plan)) = (
                clients.get(&purchase.client_id),
                plans.get(&purchase.subscription_id),
            ) else {
                return Err(AppError::InternalError(format!(
                    "client subscription {} references missing rows",
                    purchase.id
                )));
            };
            items.push(ClientSubscriptionResponse::new(purchase, client, plan));
        }
        Ok(PaginatedResponse::new(items, params, total))
    }

    pub async fn get_client_subscription(&self, id: i64) -> AppResult<ClientSubscriptionResponse> {
        let purchase = find_or_not_found::<client_subscriptions::Entity, _>(
            &self.pool,
            id,
            "Client subscription",
        )
        .await?;
        self.to_response(purchase).await
    }

    /// The purchase date is set to today.
    pub async fn create_client_subscription(
        &self,
        request: ClientSubscriptionRequest,
    ) -> AppResult<ClientSubscriptionResponse> {
        self.check_references(&request).await?;

        let purchase = client_subscriptions::ActiveModel {
            client_id: Set(request.client_id),
            subscription_id: Set(request.subscription_id),
            course_id: Set(request.course_id),
            purchase_date: Set(Local::now().date_naive()),
            first_used_date: Set(request.first_used_date),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Client {} bought subscription plan {} (purchase {})",
            purchase.client_id,
            purchase.subscription_id,
            purchase.id
        );
        self.to_response(purchase).await
    }

    /// The purchase date is never changed.
    pub async fn update_client_subscription(
        &self,
        id: i64,
        request: ClientSubscriptionRequest,
    ) -> AppResult<ClientSubscriptionResponse> {
        let purchase = find_or_not_found::<client_subscriptions::Entity, _>(
            &self.pool,
            id,
            "Client subscription",
        )
        .await?;
        self.check_references(&request).await?;

        let mut model = purchase.into_active_model();
        model.client_id = Set(request.client_id);
        model.subscription_id = Set(request.subscription_id);
        model.course_id = Set(request.course_id);
        model.first_used_date = Set(request.first_used_date);
        let updated = model.update(&self.pool).await?;

        log::info!("Updated client subscription {id}");
        self.to_response(updated).await
    }

    pub async fn delete_client_subscription(&self, id: i64) -> AppResult<()> {
        let result = client_subscriptions::Entity::delete_by_id(id)
            .exec(&self.pool)
            .await?;
        ensure_deleted(result.rows_affected, "Client subscription", id)?;
        log::info!("Deleted client subscription {id}");
        Ok(())
    }

    async fn check_references(&self, request: &ClientSubscriptionRequest) -> AppResult<()> {
        find_referenced::<clients::Entity, _>(&self.pool, request.client_id, "client_id").await?;
        find_referenced::<subscriptions::Entity, _>(
            &self.pool,
            request.subscription_id,
            "subscription_id",
        )
        .await?;
        if let Some(course_id) = request.course_id {
            find_referenced::<courses::Entity, _>(&self.pool, course_id, "course_id").await?;
        }
        Ok(())
    }

    async fn to_response(
        &self,
        purchase: client_subscriptions::Model,
    ) -> AppResult<ClientSubscriptionResponse> {
        let client =
            find_or_not_found::<clients::Entity, _>(&self.pool, purchase.client_id, "Client")
                .await?;
        let plan = find_or_not_found::<subscriptions::Entity, _>(
            &self.pool,
            purchase.subscription_id,
            "Subscription",
        )
        .await?;
        Ok(ClientSubscriptionResponse::new(purchase, &client, &plan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory_pool;
    use crate::services::testing::{create_client, create_course, create_plan, create_teacher};
    use crate::services::{ClientService, CourseService, SubscriptionService};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_expiration_is_derived_from_plan_duration() {
        let pool = memory_pool().await;
        let client = create_client(&pool, "Иван").await;
        let monthly = create_plan(&pool, "Месяц", 30).await;
        let forever = create_plan(&pool, "Бессрочный", 0).await;
        let service = ClientSubscriptionService::new(pool.clone());

        let unused = service
            .create_client_subscription(ClientSubscriptionRequest {
                client_id: client,
                subscription_id: monthly,
                course_id: None,
                first_used_date: None,
            })
            .await
            .unwrap();
        assert_eq!(unused.expiration_date, None);
        assert_eq!(unused.purchase_date, Local::now().date_naive());
        assert_eq!(unused.display, "Иван Тестов, Месяц");

        let used = service
            .update_client_subscription(
                unused.id,
                ClientSubscriptionRequest {
                    client_id: client,
                    subscription_id: monthly,
                    course_id: None,
                    first_used_date: Some(date(2024, 1, 1)),
                },
            )
            .await
            .unwrap();
        assert_eq!(used.expiration_date, Some(date(2024, 1, 31)));
        assert_eq!(used.purchase_date, unused.purchase_date);

        let unlimited = service
            .create_client_subscription(ClientSubscriptionRequest {
                client_id: client,
                subscription_id: forever,
                course_id: None,
                first_used_date: Some(date(2024, 1, 1)),
            })
            .await
            .unwrap();
        assert_eq!(unlimited.expiration_date, None);

        // expiration follows the plan on every read
        SubscriptionService::new(pool.clone())
            .update_subscription(
                monthly,
                SubscriptionRequest {
                    name: "Месяц".into(),
                    subscription_type: crate::entities::SubscriptionType::Limited,
                    duration: 10,
                    num_sessions: 8,
                    price: rust_decimal::Decimal::new(350_000, 2),
                },
            )
            .await
            .unwrap();
        let reread = service.get_client_subscription(used.id).await.unwrap();
        assert_eq!(reread.expiration_date, Some(date(2024, 1, 11)));
    }

    #[tokio::test]
    async fn test_purchases_cascade_with_client_plan_and_course() {
        let pool = memory_pool().await;
        let teacher = create_teacher(&pool, "anna").await;
        let course = create_course(&pool, teacher, "Йога").await;
        let client = create_client(&pool, "Иван").await;
        let plan = create_plan(&pool, "Месяц", 30).await;
        let service = ClientSubscriptionService::new(pool.clone());

        let mut ids = Vec::new();
        for course_id in [None, Some(course)] {
            let purchase = service
                .create_client_subscription(ClientSubscriptionRequest {
                    client_id: client,
                    subscription_id: plan,
                    course_id,
                    first_used_date: None,
                })
                .await
                .unwrap();
            ids.push(purchase.id);
        }

        CourseService::new(pool.clone())
            .delete_course(course)
            .await
            .unwrap();
        let page = service
            .list_client_subscriptions(&PaginationParams::default())
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].id, ids[0]);

        ClientService::new(pool.clone())
            .delete_client(client)
            .await
            .unwrap();
        let page = service
            .list_client_subscriptions(&PaginationParams::default())
            .await
            .unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_unknown_plan_is_a_field_error() {
        let pool = memory_pool().await;
        let client = create_client(&pool, "Иван").await;
        let service = ClientSubscriptionService::new(pool);
        assert!(matches!(
            service
                .create_client_subscription(ClientSubscriptionRequest {
                    client_id: client,
                    subscription_id: 9,
                    course_id: None,
                    first_used_date: None,
                })
                .await,
            Err(AppError::FieldError { ref field, .. }) if field == "subscription_id"
        ));
    }
}
