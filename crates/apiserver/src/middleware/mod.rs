pub mod jwt;
pub mod validate;

pub use self::jwt::{AuthUser, auth_middleware};
pub use self::validate::SimpleValidatedJson;
