use std::sync::Arc;

pub type DynIdGenerator = Arc<dyn IdGeneratorTrait + Send + Sync>;

pub trait IdGeneratorTrait {
    fn generate(&self) -> String;
}
