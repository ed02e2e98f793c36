mod id_generator;
mod store;

pub use self::id_generator::{DynIdGenerator, IdGeneratorTrait};
pub use self::store::{DurableStoreTrait, DynDurableStore};
