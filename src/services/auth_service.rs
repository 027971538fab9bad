use crate::config::AdminConfig;
use crate::entities::account_entity as accounts;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::AccountService;
use crate::utils::{JwtService, verify_password};
use sea_orm::{DatabaseConnection, EntityTrait};

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    jwt_service: JwtService,
    account_service: AccountService,
}

impl AuthService {
    pub fn new(pool: DatabaseConnection, jwt_service: JwtService) -> Self {
        let account_service = AccountService::new(pool.clone());
        Self {
            pool,
            jwt_service,
            account_service,
        }
    }

    /// Only active staff accounts may use the admin API.
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let invalid = || AppError::AuthError("Invalid username or password".to_string());

        let account = self
            .account_service
            .find_by_username(&request.username)
            .await?
            .ok_or_else(invalid)?;

        if !verify_password(&request.password, &account.password_hash)? {
            return Err(invalid());
        }
        Self::ensure_admin_access(&account)?;

        log::info!("Account {} logged in", account.username);
        self.issue_tokens(account)
    }

    pub async fn refresh_token(&self, request: RefreshTokenRequest) -> AppResult<AuthResponse> {
        let claims = self
            .jwt_service
            .verify_refresh_token(&request.refresh_token)?;
        let account = self.authorize(claims.account_id()?).await?;
        self.issue_tokens(account)
    }

    /// Resolves a bearer access token to the account behind it. The account
    /// is re-read on every call so deactivation and deletion take effect
    /// before the token expires.
    pub async fn authenticate(&self, access_token: &str) -> AppResult<accounts::Model> {
        let claims = self.jwt_service.verify_access_token(access_token)?;
        self.authorize(claims.account_id()?).await
    }

    async fn authorize(&self, account_id: i64) -> AppResult<accounts::Model> {
        let account = accounts::Entity::find_by_id(account_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Account no longer exists".to_string()))?;
        Self::ensure_admin_access(&account)?;
        Ok(account)
    }

    /// Creates the configured staff account unless that username is taken.
    pub async fn ensure_bootstrap_admin(&self, admin: &AdminConfig) -> AppResult<()> {
        let (Some(username), Some(password)) = (&admin.username, &admin.password) else {
            return Ok(());
        };
        if self.account_service.find_by_username(username).await?.is_some() {
            return Ok(());
        }

        self.account_service
            .create_account(AccountRequest {
                username: username.clone(),
                password: Some(password.clone()),
                is_staff: true,
                is_active: true,
            })
            .await?;
        log::info!("Bootstrap admin account {username} created");
        Ok(())
    }

    fn ensure_admin_access(account: &accounts::Model) -> AppResult<()> {
        if !account.is_active || !account.is_staff {
            return Err(AppError::AuthError(
                "Account is not allowed to use the admin interface".to_string(),
            ));
        }
        Ok(())
    }

    fn issue_tokens(&self, account: accounts::Model) -> AppResult<AuthResponse> {
        let access_token = self
            .jwt_service
            .generate_access_token(account.id, &account.username)?;
        let refresh_token = self
            .jwt_service
            .generate_refresh_token(account.id, &account.username)?;

        Ok(AuthResponse {
            account: account.into(),
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory_pool;

    async fn service() -> AuthService {
        AuthService::new(memory_pool().await, JwtService::new("test", 60, 120))
    }

    fn admin() -> AdminConfig {
        AdminConfig {
            username: Some("admin".into()),
            password: Some("Password123".into()),
        }
    }

    #[tokio::test]
    async fn test_bootstrap_admin_can_log_in_and_refresh() {
        let auth = service().await;
        auth.ensure_bootstrap_admin(&admin()).await.unwrap();
        // second run is a no-op
        auth.ensure_bootstrap_admin(&admin()).await.unwrap();

        let tokens = auth
            .login(LoginRequest {
                username: "admin".into(),
                password: "Password123".into(),
            })
            .await
            .unwrap();
        assert_eq!(tokens.account.username, "admin");

        let refreshed = auth
            .refresh_token(RefreshTokenRequest {
                refresh_token: tokens.refresh_token,
            })
            .await
            .unwrap();
        assert_eq!(refreshed.account.id, tokens.account.id);
    }

    #[tokio::test]
    async fn test_wrong_password_and_non_staff_are_rejected() {
        let auth = service().await;
        auth.ensure_bootstrap_admin(&admin()).await.unwrap();
        assert!(matches!(
            auth.login(LoginRequest {
                username: "admin".into(),
                password: "Wrong12345".into(),
            })
            .await,
            Err(AppError::AuthError(_))
        ));

        auth.account_service
            .create_account(AccountRequest {
                username: "visitor".into(),
                password: Some("Password123".into()),
                is_staff: false,
                is_active: true,
            })
            .await
            .unwrap();
        assert!(matches!(
            auth.login(LoginRequest {
                username: "visitor".into(),
                password: "Password123".into(),
            })
            .await,
            Err(AppError::AuthError(_))
        ));
    }

    #[tokio::test]
    async fn test_access_token_stops_working_after_deactivation() {
        let auth = service().await;
        auth.ensure_bootstrap_admin(&admin()).await.unwrap();
        let tokens = auth
            .login(LoginRequest {
                username: "admin".into(),
                password: "Password123".into(),
            })
            .await
            .unwrap();
        let account = auth.authenticate(&tokens.access_token).await.unwrap();
        assert_eq!(account.username, "admin");

        auth.account_service
            .update_account(
                account.id,
                AccountRequest {
                    username: "admin".into(),
                    password: None,
                    is_staff: true,
                    is_active: false,
                },
            )
            .await
            .unwrap();
        assert!(matches!(
            auth.authenticate(&tokens.access_token).await,
            Err(AppError::AuthError(_))
        ));
        assert!(matches!(
            auth.refresh_token(RefreshTokenRequest {
                refresh_token: tokens.refresh_token,
            })
            .await,
            Err(AppError::AuthError(_))
        ));
    }
}
