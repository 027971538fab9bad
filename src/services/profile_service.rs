use crate::entities::{account_entity as accounts, profile_entity as profiles};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::lookup::{ensure_deleted, find_or_not_found, find_referenced};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct ProfileService {
    pool: DatabaseConnection,
}

impl ProfileService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_profiles(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<ProfileResponse>> {
        let total = profiles::Entity::find().count(&self.pool).await?;
        let items = profiles::Entity::find()
            .order_by_asc(profiles::Column::Id)
            .limit(params.get_limit())
            .offset(params.get_offset())
            .all(&self.pool)
            .await?
            .into_iter()
            .map(ProfileResponse::from)
            .collect();
        Ok(PaginatedResponse::new(items, params, total))
    }

    pub async fn get_profile(&self, id: i64) -> AppResult<ProfileResponse> {
        let profile = find_or_not_found::<profiles::Entity, _>(&self.pool, id, "Profile").await?;
        Ok(profile.into())
    }

    pub async fn create_profile(&self, request: ProfileRequest) -> AppResult<ProfileResponse> {
        request.validate()?;
        self.check_account(request.user_id, None).await?;

        let profile = profiles::ActiveModel {
            user_id: Set(request.user_id),
            first_name: Set(request.first_name),
            last_name: Set(request.last_name),
            birthday: Set(request.birthday),
            experience: Set(request.experience),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Created profile {} for account {}", profile.id, profile.user_id);
        Ok(profile.into())
    }

    pub async fn update_profile(
        &self,
        id: i64,
        request: ProfileRequest,
    ) -> AppResult<ProfileResponse> {
        request.validate()?;
        let profile = find_or_not_found::<profiles::Entity, _>(&self.pool, id, "Profile").await?;
        self.check_account(request.user_id, Some(id)).await?;

        let mut model = profile.into_active_model();
        model.user_id = Set(request.user_id);
        model.first_name = Set(request.first_name);
        model.last_name = Set(request.last_name);
        model.birthday = Set(request.birthday);
        model.experience = Set(request.experience);
        let updated = model.update(&self.pool).await?;

        log::info!("Updated profile {id}");
        Ok(updated.into())
    }

    /// Deletes the profile together with its courses; its lessons lose their teacher.
    pub async fn delete_profile(&self, id: i64) -> AppResult<()> {
        let result = profiles::Entity::delete_by_id(id).exec(&self.pool).await?;
        ensure_deleted(result.rows_affected, "Profile", id)?;
        log::info!("Deleted profile {id}");
        Ok(())
    }

    /// The account must exist and must not own another profile.
    async fn check_account(&self, user_id: i64, profile_id: Option<i64>) -> AppResult<()> {
        find_referenced::<accounts::Entity, _>(&self.pool, user_id, "user_id").await?;

        let mut query = profiles::Entity::find().filter(profiles::Column::UserId.eq(user_id));
        if let Some(id) = profile_id {
            query = query.filter(profiles::Column::Id.ne(id));
        }
        if query.one(&self.pool).await?.is_some() {
            return Err(AppError::field(
                "user_id",
                "Профиль с таким Пользователь уже существует.",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory_pool;
    use crate::services::AccountService;
    use crate::utils::EXPERIENCE_YEAR_MESSAGE;
    use chrono::NaiveDate;

    async fn setup() -> (ProfileService, i64) {
        let pool = memory_pool().await;
        let account = AccountService::new(pool.clone())
            .create_account(AccountRequest {
                username: "anna".into(),
                password: Some("Password123".into()),
                is_staff: true,
                is_active: true,
            })
            .await
            .unwrap();
        (ProfileService::new(pool), account.id)
    }

    fn request(user_id: i64, experience: i32) -> ProfileRequest {
        ProfileRequest {
            user_id,
            first_name: "Анна".into(),
            last_name: "Петрова".into(),
            birthday: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            experience,
        }
    }

    #[tokio::test]
    async fn test_experience_year_must_have_four_digits() {
        let (service, user_id) = setup().await;

        for year in [99, 19999] {
            match service.create_profile(request(user_id, year)).await {
                Err(AppError::ValidationError(msg)) => assert_eq!(msg, EXPERIENCE_YEAR_MESSAGE),
                other => panic!("{year}: unexpected result {other:?}"),
            }
        }
        // nothing was written
        let page = service
            .list_profiles(&PaginationParams::default())
            .await
            .unwrap();
        assert_eq!(page.total, 0);

        let created = service.create_profile(request(user_id, 1999)).await.unwrap();
        assert_eq!(created.experience, 1999);
        assert_eq!(created.display, "Анна Петрова");
    }

    #[tokio::test]
    async fn test_bad_year_on_update_leaves_row_unchanged() {
        let (service, user_id) = setup().await;
        let created = service.create_profile(request(user_id, 2010)).await.unwrap();

        assert!(service.update_profile(created.id, request(user_id, 210)).await.is_err());
        assert_eq!(service.get_profile(created.id).await.unwrap().experience, 2010);
    }

    #[tokio::test]
    async fn test_one_profile_per_account() {
        let (service, user_id) = setup().await;
        service.create_profile(request(user_id, 2010)).await.unwrap();

        assert!(matches!(
            service.create_profile(request(user_id, 2011)).await,
            Err(AppError::FieldError { ref field, .. }) if field == "user_id"
        ));
        assert!(matches!(
            service.create_profile(request(user_id + 100, 2011)).await,
            Err(AppError::FieldError { ref field, .. }) if field == "user_id"
        ));
    }

    #[tokio::test]
    async fn test_deleting_account_deletes_profile() {
        let (service, user_id) = setup().await;
        let created = service.create_profile(request(user_id, 2010)).await.unwrap();

        AccountService::new(service.pool.clone())
            .delete_account(user_id)
            .await
            .unwrap();
        assert!(matches!(
            service.get_profile(created.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
