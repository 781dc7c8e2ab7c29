use serde::{Deserialize, Serialize};
use shared::model::User as UserModel;

/// Public projection of a user. The password hash is never serialized.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub role: i32,
    pub active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl From<UserModel> for UserResponse {
    fn from(value: UserModel) -> Self {
        UserResponse {
            id: value.user_id,
            name: value.name,
            email: value.email,
            cpf: value.cpf,
            role: value.role,
            active: value.active,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
