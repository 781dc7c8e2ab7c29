use crate::{
    abstract_trait::{AuthServiceTrait, DynUserCommandRepository, DynUserQueryRepository},
    domain::{
        requests::{
            auth::{LoginRequest, RegisterRequest},
            user::CreateUserRecord,
        },
        response::{auth::TokenResponse, user::UserResponse},
    },
};
use async_trait::async_trait;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    errors::ServiceError,
};
use tracing::{error, info};

pub struct AuthService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

pub struct AuthServiceDeps {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
    pub hashing: DynHashing,
    pub jwt: DynJwtService,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            query,
            command,
            hashing,
            jwt,
        } = deps;

        Self {
            query,
            command,
            hashing,
            jwt,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(&self, req: &RegisterRequest) -> Result<UserResponse, ServiceError> {
        info!("🏗️ Registering new user: {}", req.email);

        if self.query.find_by_cpf(&req.cpf).await?.is_some() {
            return Err(ServiceError::Conflict("This CPF is already in use".into()));
        }

        if self.query.find_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::Conflict(
                "This email is already in use".into(),
            ));
        }

        let hashed_password = match self.hashing.hash_password(&req.password).await {
            Ok(hash) => hash,
            Err(e) => {
                error!("❌ Failed to hash password: {:?}", e);
                return Err(ServiceError::Internal("Failed to hash password".into()));
            }
        };

        let record = CreateUserRecord {
            name: req.name.clone(),
            email: req.email.clone(),
            cpf: req.cpf.clone(),
            password: hashed_password,
        };

        let user = self
            .command
            .create_user(&record)
            .await
            .map_err(ServiceError::Repo)?;

        info!("✅ User registered: {} (ID: {})", user.email, user.user_id);

        Ok(UserResponse::from(user))
    }

    async fn login(&self, req: &LoginRequest) -> Result<TokenResponse, ServiceError> {
        info!("🔐 Attempting login for email: {}", req.email);

        let user = match self.query.find_by_email(&req.email).await? {
            Some(user) => user,
            None => {
                error!("❌ Login failed, unknown email: {}", req.email);
                return Err(ServiceError::NotFound(
                    "This email is not registered".into(),
                ));
            }
        };

        self.hashing
            .compare_password(&user.password, &req.password)
            .await?;

        if !user.active {
            error!("❌ Login rejected, inactive account: {}", req.email);
            return Err(ServiceError::InactiveAccount);
        }

        let token = self.jwt.generate_token(&user)?;

        info!("✅ Login successful for email: {}", req.email);

        Ok(TokenResponse { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testsupport::MemoryStore;
    use shared::{
        abstract_trait::JwtServiceTrait,
        config::{Hashing, JwtConfig},
        model::{ROLE_ADMIN, ROLE_STANDARD},
    };
    use std::sync::Arc;

    fn make_service(store: &Arc<MemoryStore>) -> AuthService {
        AuthService::new(AuthServiceDeps {
            query: store.clone(),
            command: store.clone(),
            hashing: Arc::new(Hashing::new()),
            jwt: Arc::new(JwtConfig::new("test-secret")),
        })
    }

    fn register_request(email: &str, cpf: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.into(),
            password: "secret-pass".into(),
            cpf: cpf.into(),
            name: "Test User".into(),
            role: ROLE_STANDARD,
        }
    }

    #[tokio::test]
    async fn test_first_user_becomes_active_admin() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let first = service
            .register(&register_request("first@example.com", "11111111111"))
            .await
            .unwrap();

        assert_eq!(first.role, ROLE_ADMIN);
        assert!(first.active);

        let second = service
            .register(&register_request("second@example.com", "22222222222"))
            .await
            .unwrap();

        assert_eq!(second.role, ROLE_STANDARD);
        assert!(!second.active);
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email_and_cpf() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        service
            .register(&register_request("dup@example.com", "11111111111"))
            .await
            .unwrap();

        let same_email = service
            .register(&register_request("dup@example.com", "22222222222"))
            .await
            .unwrap_err();
        assert!(matches!(same_email, ServiceError::Conflict(_)));

        let same_cpf = service
            .register(&register_request("other@example.com", "11111111111"))
            .await
            .unwrap_err();
        assert!(matches!(same_cpf, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_never_returns_password() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let user = service
            .register(&register_request("safe@example.com", "11111111111"))
            .await
            .unwrap();

        let body = serde_json::to_string(&user).unwrap();
        assert!(!body.contains("password"));
        assert!(!body.contains("secret-pass"));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let err = service
            .login(&LoginRequest {
                email: "ghost@example.com".into(),
                password: "whatever-pass".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        service
            .register(&register_request("user@example.com", "11111111111"))
            .await
            .unwrap();

        let err = service
            .login(&LoginRequest {
                email: "user@example.com".into(),
                password: "wrong-pass".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_inactive_account() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        // First user bootstraps as admin; the second stays inactive.
        service
            .register(&register_request("admin@example.com", "11111111111"))
            .await
            .unwrap();
        service
            .register(&register_request("pending@example.com", "22222222222"))
            .await
            .unwrap();

        let err = service
            .login(&LoginRequest {
                email: "pending@example.com".into(),
                password: "secret-pass".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InactiveAccount));
    }

    #[tokio::test]
    async fn test_login_issues_token_with_claims() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let user = service
            .register(&register_request("admin@example.com", "11111111111"))
            .await
            .unwrap();

        let response = service
            .login(&LoginRequest {
                email: "admin@example.com".into(),
                password: "secret-pass".into(),
            })
            .await
            .unwrap();

        let jwt = JwtConfig::new("test-secret");
        let claims = jwt.verify_token(&response.token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.role, ROLE_ADMIN);
        assert!(claims.active);
    }
}
