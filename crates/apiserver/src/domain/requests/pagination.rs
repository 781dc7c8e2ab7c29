use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    pub take: Option<i64>,
    pub skip: Option<i64>,
    pub order: Option<SortOrder>,
}

impl ListQuery {
    pub fn take_or_default(&self) -> i64 {
        self.take.unwrap_or(20).max(0)
    }

    pub fn skip_or_default(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    pub fn order_or_default(&self) -> SortOrder {
        self.order.unwrap_or_default()
    }
}
