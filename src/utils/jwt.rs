use crate::error::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const ACCESS: &str = "access";
const REFRESH: &str = "refresh";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // account id
    pub username: String,
    pub exp: i64,
    pub iat: i64,
    pub token_type: String, // "access" or "refresh"
}

impl Claims {
    pub fn account_id(&self) -> AppResult<i64> {
        self.sub
            .parse()
            .map_err(|_| AppError::AuthError("Malformed token subject".to_string()))
    }
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expires_in: i64,
    refresh_token_expires_in: i64,
}

impl JwtService {
    pub fn new(secret: &str, access_expires_in: i64, refresh_expires_in: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expires_in: access_expires_in,
            refresh_token_expires_in: refresh_expires_in,
        }
    }

    fn generate(
        &self,
        account_id: i64,
        username: &str,
        token_type: &str,
        expires_in: i64,
    ) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(expires_in);

        let claims = Claims {
            sub: account_id.to_string(),
            username: username.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            token_type: token_type.to_string(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    pub fn generate_access_token(&self, account_id: i64, username: &str) -> AppResult<String> {
        self.generate(account_id, username, ACCESS, self.access_token_expires_in)
    }

    pub fn generate_refresh_token(&self, account_id: i64, username: &str) -> AppResult<String> {
        self.generate(account_id, username, REFRESH, self.refresh_token_expires_in)
    }

    pub fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        Ok(decode::<Claims>(token, &self.decoding_key, &validation)?.claims)
    }

    pub fn verify_access_token(&self, token: &str) -> AppResult<Claims> {
        let claims = self.verify_token(token)?;

        if claims.token_type != ACCESS {
            return Err(AppError::AuthError("Invalid access token type".to_string()));
        }

        Ok(claims)
    }

    pub fn verify_refresh_token(&self, token: &str) -> AppResult<Claims> {
        let claims = self.verify_token(token)?;

        if claims.token_type != REFRESH {
            return Err(AppError::AuthError("Invalid refresh token type".to_string()));
        }

        Ok(claims)
    }

    pub fn get_access_token_expires_in(&self) -> i64 {
        self.access_token_expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_round_trip() {
        let jwt = JwtService::new("secret", 60, 120);
        let token = jwt.generate_access_token(42, "admin").unwrap();
        let claims = jwt.verify_access_token(&token).unwrap();
        assert_eq!(claims.account_id().unwrap(), 42);
        assert_eq!(claims.username, "admin");
    }

    #[test]
    fn test_token_types_are_not_interchangeable() {
        let jwt = JwtService::new("secret", 60, 120);
        let refresh = jwt.generate_refresh_token(1, "admin").unwrap();
        let access = jwt.generate_access_token(1, "admin").unwrap();
        assert!(jwt.verify_access_token(&refresh).is_err());
        assert!(jwt.verify_refresh_token(&access).is_err());
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let issuer = JwtService::new("one", 60, 120);
        let verifier = JwtService::new("two", 60, 120);
        let token = issuer.generate_access_token(1, "admin").unwrap();
        assert!(verifier.verify_access_token(&token).is_err());
    }
}
