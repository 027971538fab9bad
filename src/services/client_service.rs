use crate::entities::client_entity as clients;
use crate::error::AppResult;
use crate::models::*;
use crate::services::lookup::{ensure_deleted, find_or_not_found};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct ClientService {
    pool: DatabaseConnection,
}

impl ClientService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_clients(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<ClientResponse>> {
        let total = clients::Entity::find().count(&self.pool).await?;
        let items = clients::Entity::find()
            .order_by_asc(clients::Column::Id)
            .limit(params.get_limit())
            .offset(params.get_offset())
            .all(&self.pool)
            .await?
            .into_iter()
            .map(ClientResponse::from)
            .collect();
        Ok(PaginatedResponse::new(items, params, total))
    }

    pub async fn get_client(&self, id: i64) -> AppResult<ClientResponse> {
        let client = find_or_not_found::<clients::Entity, _>(&self.pool, id, "Client").await?;
        Ok(client.into())
    }

    pub async fn create_client(&self, request: ClientRequest) -> AppResult<ClientResponse> {
        request.validate()?;

        let client = clients::ActiveModel {
            first_name: Set(request.first_name),
            last_name: Set(request.last_name),
            birthday: Set(request.birthday),
            phone_number: Set(request.phone_number),
            is_from_club: Set(request.is_from_club),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Created client {}", client.id);
        Ok(client.into())
    }

    pub async fn update_client(&self, id: i64, request: ClientRequest) -> AppResult<ClientResponse> {
        request.validate()?;
        let client = find_or_not_found::<clients::Entity, _>(&self.pool, id, "Client").await?;

        let mut model = client.into_active_model();
        model.first_name = Set(request.first_name);
        model.last_name = Set(request.last_name);
        model.birthday = Set(request.birthday);
        model.phone_number = Set(request.phone_number);
        model.is_from_club = Set(request.is_from_club);
        let updated = model.update(&self.pool).await?;

        log::info!("Updated client {id}");
        Ok(updated.into())
    }

    /// Also deletes the client's subscriptions and lesson attendance.
    pub async fn delete_client(&self, id: i64) -> AppResult<()> {
        let result = clients::Entity::delete_by_id(id).exec(&self.pool).await?;
        ensure_deleted(result.rows_affected, "Client", id)?;
        log::info!("Deleted client {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory_pool;
    use crate::error::AppError;
    use chrono::NaiveDate;

    fn request(phone: &str) -> ClientRequest {
        ClientRequest {
            first_name: "Иван".into(),
            last_name: "Смирнов".into(),
            birthday: NaiveDate::from_ymd_opt(1995, 3, 2).unwrap(),
            phone_number: phone.into(),
            is_from_club: false,
        }
    }

    #[tokio::test]
    async fn test_phone_format_is_enforced() {
        let service = ClientService::new(memory_pool().await);

        let created = service.create_client(request("+71234567890")).await.unwrap();
        assert_eq!(created.phone_number, "+71234567890");
        assert_eq!(created.display, "Иван Смирнов");

        for bad in ["71234567890", "+123"] {
            assert!(matches!(
                service.create_client(request(bad)).await,
                Err(AppError::FieldError { ref field, .. }) if field == "phone_number"
            ));
        }
        assert!(matches!(
            service.update_client(created.id, request("+1")).await,
            Err(AppError::FieldError { .. })
        ));
    }

    #[tokio::test]
    async fn test_phone_is_not_unique() {
        let service = ClientService::new(memory_pool().await);
        service.create_client(request("+71234567890")).await.unwrap();
        service.create_client(request("+71234567890")).await.unwrap();

        let page = service
            .list_clients(&PaginationParams::default())
            .await
            .unwrap();
        assert_eq!(page.total, 2);
    }
}
