use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(equal = 11, message = "CPF must be exactly 11 digits"))]
    pub cpf: String,

    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: String,

    // Accepted for wire compatibility; the stored role is decided by the
    // admin-bootstrap rule, never by the caller.
    pub role: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}
