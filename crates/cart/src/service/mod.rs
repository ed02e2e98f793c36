mod command;
mod query;

pub use self::command::CartCommandService;
pub use self::query::CartQueryService;
