mod category;
mod product;
mod sale;
mod user;

pub use self::category::Category;
pub use self::product::Product;
pub use self::sale::{Sale, SaleWithRelations};
pub use self::user::{ROLE_ADMIN, ROLE_STANDARD, User};
