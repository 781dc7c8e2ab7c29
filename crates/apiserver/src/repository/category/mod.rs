mod command;
mod query;

pub use self::command::CategoryCommandRepository;
pub use self::query::CategoryQueryRepository;
