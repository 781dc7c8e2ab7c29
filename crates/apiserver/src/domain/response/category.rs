use serde::{Deserialize, Serialize};
use shared::model::Category as CategoryModel;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl From<CategoryModel> for CategoryResponse {
    fn from(value: CategoryModel) -> Self {
        CategoryResponse {
            id: value.category_id,
            name: value.name,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
