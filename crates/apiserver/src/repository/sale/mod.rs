mod command;
mod query;

pub use self::command::SaleCommandRepository;
pub use self::query::SaleQueryRepository;
