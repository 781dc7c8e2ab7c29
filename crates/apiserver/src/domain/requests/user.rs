use serde::{Deserialize, Serialize};
use validator::Validate;

/// Partial profile update. Only these fields are mutable; anything else in
/// the payload is rejected at deserialization time.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct UserIdRequest {
    pub id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateUserRecord {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct UpdateUserRecord {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}
