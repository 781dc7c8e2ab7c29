use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError, model::User};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

/// Session token lifetime. The login cookie uses the same window.
pub const SESSION_TTL_DAYS: i64 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub email: String,
    pub role: i32,
    pub active: bool,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

#[async_trait]
impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user: &User) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + Duration::days(SESSION_TTL_DAYS)).timestamp() as usize;

        let claims = Claims {
            sub: user.user_id,
            email: user.email.clone(),
            role: user.role,
            active: user.active,
            iat,
            exp,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());

        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default()).map_err(
            |err| match err.kind() {
                ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
                _ => ServiceError::InvalidToken,
            },
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ROLE_ADMIN;

    fn sample_user() -> User {
        User {
            user_id: 7,
            name: "Alice Example".into(),
            email: "alice@example.com".into(),
            cpf: "12345678901".into(),
            password: "hashed".into(),
            role: ROLE_ADMIN,
            active: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_token_roundtrip() {
        let jwt = JwtConfig::new("test-secret");

        let token = jwt.generate_token(&sample_user()).unwrap();
        let claims = jwt.verify_token(&token).unwrap();

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, ROLE_ADMIN);
        assert!(claims.active);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let jwt = JwtConfig::new("test-secret");
        let other = JwtConfig::new("other-secret");

        let token = jwt.generate_token(&sample_user()).unwrap();
        let err = other.verify_token(&token).unwrap_err();

        assert!(matches!(err, ServiceError::InvalidToken));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let jwt = JwtConfig::new("test-secret");

        let now = Utc::now();
        let claims = Claims {
            sub: 7,
            email: "alice@example.com".into(),
            role: ROLE_ADMIN,
            active: true,
            iat: (now - Duration::days(3)).timestamp() as usize,
            exp: (now - Duration::days(1)).timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_ref()),
        )
        .unwrap();

        let err = jwt.verify_token(&token).unwrap_err();

        assert!(matches!(err, ServiceError::TokenExpired));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let jwt = JwtConfig::new("test-secret");

        let err = jwt.verify_token("not-a-token").unwrap_err();

        assert!(matches!(err, ServiceError::InvalidToken));
    }
}
