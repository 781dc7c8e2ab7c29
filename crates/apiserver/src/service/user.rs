use crate::{
    abstract_trait::{DynUserCommandRepository, DynUserQueryRepository, UserServiceTrait},
    domain::{
        requests::user::{UpdateUserRecord, UpdateUserRequest},
        response::user::UserResponse,
    },
};
use async_trait::async_trait;
use shared::{abstract_trait::DynHashing, errors::ServiceError};
use tracing::{error, info};

pub struct UserService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
}

pub struct UserServiceDeps {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
    pub hashing: DynHashing,
}

impl UserService {
    pub fn new(deps: UserServiceDeps) -> Self {
        let UserServiceDeps {
            query,
            command,
            hashing,
        } = deps;

        Self {
            query,
            command,
            hashing,
        }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn get_user(&self, id: i32) -> Result<UserResponse, ServiceError> {
        let user = match self.query.find_by_id(id).await? {
            Some(user) => user,
            None => return Err(ServiceError::NotFound("User not found".into())),
        };

        Ok(UserResponse::from(user))
    }

    async fn update_user(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<UserResponse, ServiceError> {
        info!("✏️ Updating user ID {}", id);

        let existing = match self.query.find_by_id(id).await? {
            Some(user) => user,
            None => return Err(ServiceError::NotFound("User not found".into())),
        };

        let mut new_email = existing.email.clone();

        if let Some(email) = &req.email {
            if *email != existing.email {
                info!("🔄 Email is changed: {} → {}", existing.email, email);

                if self.query.find_by_email(email).await?.is_some() {
                    return Err(ServiceError::Conflict(
                        "This email is already in use".into(),
                    ));
                }

                new_email = email.clone();
            }
        }

        let new_password = match &req.password {
            Some(password) => match self.hashing.hash_password(password).await {
                Ok(hash) => hash,
                Err(e) => {
                    error!("❌ Failed to hash password: {:?}", e);
                    return Err(ServiceError::Internal("Failed to hash password".into()));
                }
            },
            None => existing.password.clone(),
        };

        let record = UpdateUserRecord {
            user_id: id,
            name: req.name.clone().unwrap_or(existing.name),
            email: new_email,
            password: new_password,
        };

        let updated = self
            .command
            .update_user(&record)
            .await
            .map_err(ServiceError::Repo)?;

        info!("✅ User updated: {}", updated.email);

        Ok(UserResponse::from(updated))
    }

    async fn approve(
        &self,
        target_id: i32,
        acting_user_id: i32,
    ) -> Result<UserResponse, ServiceError> {
        info!(
            "✔️ User ID {} approving user ID {}",
            acting_user_id, target_id
        );

        let actor = match self.query.find_by_id(acting_user_id).await? {
            Some(user) => user,
            None => return Err(ServiceError::NotFound("Acting user not found".into())),
        };

        if !actor.is_admin() {
            error!(
                "❌ User ID {} is not allowed to approve users",
                acting_user_id
            );
            return Err(ServiceError::Forbidden(
                "Only administrators can approve users".into(),
            ));
        }

        let user = match self.command.set_active(target_id, true).await? {
            Some(user) => user,
            None => return Err(ServiceError::NotFound("User not found".into())),
        };

        info!("✅ User approved: {} (ID: {})", user.email, user.user_id);

        Ok(UserResponse::from(user))
    }

    async fn deactivate(
        &self,
        target_id: i32,
        acting_user_id: i32,
    ) -> Result<UserResponse, ServiceError> {
        info!(
            "🚫 User ID {} deactivating user ID {}",
            acting_user_id, target_id
        );

        let actor = match self.query.find_by_id(acting_user_id).await? {
            Some(user) => user,
            None => return Err(ServiceError::NotFound("Acting user not found".into())),
        };

        // Self-deactivation is open to every role; deactivating someone else
        // requires the admin role.
        if !actor.is_admin() && target_id != acting_user_id {
            error!(
                "❌ User ID {} is not allowed to deactivate user ID {}",
                acting_user_id, target_id
            );
            return Err(ServiceError::Forbidden(
                "Only administrators can deactivate other users".into(),
            ));
        }

        let user = match self.command.set_active(target_id, false).await? {
            Some(user) => user,
            None => return Err(ServiceError::NotFound("User not found".into())),
        };

        info!("✅ User deactivated: {} (ID: {})", user.email, user.user_id);

        Ok(UserResponse::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::UserCommandRepositoryTrait, service::testsupport::MemoryStore};
    use shared::config::Hashing;
    use std::sync::Arc;

    fn make_service(store: &Arc<MemoryStore>) -> UserService {
        UserService::new(UserServiceDeps {
            query: store.clone(),
            command: store.clone(),
            hashing: Arc::new(Hashing::new()),
        })
    }

    #[tokio::test]
    async fn test_admin_can_approve_other_user() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let admin = store.seed_user("Admin", "admin@example.com", "11111111111", true);
        let pending = store.seed_user("Pending", "pending@example.com", "22222222222", false);
        store.set_active(pending.user_id, false).await.unwrap();

        let approved = service
            .approve(pending.user_id, admin.user_id)
            .await
            .unwrap();

        assert!(approved.active);
    }

    #[tokio::test]
    async fn test_non_admin_cannot_approve() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let standard = store.seed_user("Standard", "std@example.com", "11111111111", false);
        let other = store.seed_user("Other", "other@example.com", "22222222222", false);

        let err = service
            .approve(other.user_id, standard.user_id)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_self_deactivation_allowed_for_any_role() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let standard = store.seed_user("Standard", "std@example.com", "11111111111", false);

        let deactivated = service
            .deactivate(standard.user_id, standard.user_id)
            .await
            .unwrap();

        assert!(!deactivated.active);
    }

    #[tokio::test]
    async fn test_non_admin_cannot_deactivate_others() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let standard = store.seed_user("Standard", "std@example.com", "11111111111", false);
        let other = store.seed_user("Other", "other@example.com", "22222222222", false);

        let err = service
            .deactivate(other.user_id, standard.user_id)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_admin_can_deactivate_other_user() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let admin = store.seed_user("Admin", "admin@example.com", "11111111111", true);
        let other = store.seed_user("Other", "other@example.com", "22222222222", false);

        let deactivated = service
            .deactivate(other.user_id, admin.user_id)
            .await
            .unwrap();

        assert!(!deactivated.active);
    }

    #[tokio::test]
    async fn test_approve_missing_target_fails() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let admin = store.seed_user("Admin", "admin@example.com", "11111111111", true);

        let err = service.approve(999, admin.user_id).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_user_merges_missing_fields() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let user = store.seed_user("Original", "orig@example.com", "11111111111", false);

        let updated = service
            .update_user(
                user.user_id,
                &UpdateUserRequest {
                    name: Some("Renamed".into()),
                    email: None,
                    password: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.email, "orig@example.com");
    }

    #[tokio::test]
    async fn test_update_user_rejects_taken_email() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let user = store.seed_user("One", "one@example.com", "11111111111", false);
        store.seed_user("Two", "two@example.com", "22222222222", false);

        let err = service
            .update_user(
                user.user_id,
                &UpdateUserRequest {
                    name: None,
                    email: Some("two@example.com".into()),
                    password: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }
}
