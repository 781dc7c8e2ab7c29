use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CategoryNameRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}
