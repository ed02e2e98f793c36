mod json_file;
mod memory;

pub use self::json_file::{JsonFileStore, RecoveryMode};
pub use self::memory::MemoryStore;
