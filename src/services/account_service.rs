use crate::entities::account_entity as accounts;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::lookup::{ensure_deleted, find_or_not_found};
use crate::utils::hash_password;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct AccountService {
    pool: DatabaseConnection,
}

impl AccountService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_accounts(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<AccountResponse>> {
        let total = accounts::Entity::find().count(&self.pool).await?;
        let items = accounts::Entity::find()
            .order_by_asc(accounts::Column::Id)
            .limit(params.get_limit())
            .offset(params.get_offset())
            .all(&self.pool)
            .await?
            .into_iter()
            .map(AccountResponse::from)
            .collect();
        Ok(PaginatedResponse::new(items, params, total))
    }

    pub async fn get_account(&self, id: i64) -> AppResult<AccountResponse> {
        let account = find_or_not_found::<accounts::Entity, _>(&self.pool, id, "Account").await?;
        Ok(account.into())
    }

    pub async fn create_account(&self, request: AccountRequest) -> AppResult<AccountResponse> {
        request.validate(true)?;
        self.ensure_username_free(&request.username, None).await?;

        let password = request
            .password
            .as_deref()
            .ok_or_else(|| AppError::field("password", "Обязательное поле."))?;
        let account = accounts::ActiveModel {
            username: Set(request.username.clone()),
            password_hash: Set(hash_password(password)?),
            is_staff: Set(request.is_staff),
            is_active: Set(request.is_active),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Created account {} ({})", account.id, account.username);
        Ok(account.into())
    }

    pub async fn update_account(
        &self,
        id: i64,
        request: AccountRequest,
    ) -> AppResult<AccountResponse> {
        request.validate(false)?;
        let account = find_or_not_found::<accounts::Entity, _>(&self.pool, id, "Account").await?;
        self.ensure_username_free(&request.username, Some(id))
            .await?;

        let mut model = account.into_active_model();
        model.username = Set(request.username.clone());
        if let Some(password) = &request.password {
            model.password_hash = Set(hash_password(password)?);
        }
        model.is_staff = Set(request.is_staff);
        model.is_active = Set(request.is_active);
        let updated = model.update(&self.pool).await?;

        log::info!("Updated account {id}");
        Ok(updated.into())
    }

    /// Deleting an account also deletes its profile.
    pub async fn delete_account(&self, id: i64) -> AppResult<()> {
        let result = accounts::Entity::delete_by_id(id).exec(&self.pool).await?;
        ensure_deleted(result.rows_affected, "Account", id)?;
        log::info!("Deleted account {id}");
        Ok(())
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<accounts::Model>> {
        Ok(accounts::Entity::find()
            .filter(accounts::Column::Username.eq(username))
            .one(&self.pool)
            .await?)
    }

    async fn ensure_username_free(&self, username: &str, except_id: Option<i64>) -> AppResult<()> {
        let mut query = accounts::Entity::find().filter(accounts::Column::Username.eq(username));
        if let Some(id) = except_id {
            query = query.filter(accounts::Column::Id.ne(id));
        }
        if query.one(&self.pool).await?.is_some() {
            return Err(AppError::field(
                "username",
                "Пользователь с таким именем уже существует.",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory_pool;

    fn request(username: &str, password: Option<&str>) -> AccountRequest {
        AccountRequest {
            username: username.to_string(),
            password: password.map(str::to_string),
            is_staff: true,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_create_requires_password_and_unique_username() {
        let service = AccountService::new(memory_pool().await);

        assert!(matches!(
            service.create_account(request("anna", None)).await,
            Err(AppError::FieldError { ref field, .. }) if field == "password"
        ));

        let created = service
            .create_account(request("anna", Some("Password123")))
            .await
            .unwrap();
        assert_eq!(created.username, "anna");

        assert!(matches!(
            service.create_account(request("anna", Some("Password123"))).await,
            Err(AppError::FieldError { ref field, .. }) if field == "username"
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_password_when_omitted() {
        let service = AccountService::new(memory_pool().await);
        let created = service
            .create_account(request("anna", Some("Password123")))
            .await
            .unwrap();
        let before = service.find_by_username("anna").await.unwrap().unwrap();

        let mut change = request("anna.p", None);
        change.is_active = false;
        let updated = service.update_account(created.id, change).await.unwrap();
        assert_eq!(updated.username, "anna.p");
        assert!(!updated.is_active);

        let after = service.find_by_username("anna.p").await.unwrap().unwrap();
        assert_eq!(before.password_hash, after.password_hash);
    }

    #[tokio::test]
    async fn test_delete_missing_account_is_not_found() {
        let service = AccountService::new(memory_pool().await);
        assert!(matches!(
            service.delete_account(404).await,
            Err(AppError::NotFound(_))
        ));
    }
}
