use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{hash, verify};

const HASH_COST: u32 = 10;

#[derive(Clone)]
pub struct Hashing;

impl Hashing {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let hashed = hash(password, HASH_COST).map_err(ServiceError::Bcrypt)?;
        Ok(hashed)
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        verify(password, hashed_password)
            .map_err(ServiceError::Bcrypt)
            .and_then(|is_valid| {
                if is_valid {
                    Ok(())
                } else {
                    Err(ServiceError::InvalidCredentials)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::HashingTrait;

    #[tokio::test]
    async fn test_hash_and_compare() {
        let hashing = Hashing::new();

        let hashed = hashing.hash_password("s3cret-pass").await.unwrap();
        assert_ne!(hashed, "s3cret-pass");

        assert!(hashing.compare_password(&hashed, "s3cret-pass").await.is_ok());
    }

    #[tokio::test]
    async fn test_compare_rejects_wrong_password() {
        let hashing = Hashing::new();

        let hashed = hashing.hash_password("s3cret-pass").await.unwrap();

        let err = hashing
            .compare_password(&hashed, "wrong-pass")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }
}
