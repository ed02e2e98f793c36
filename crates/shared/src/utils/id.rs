use crate::abstract_trait::IdGeneratorTrait;
use uuid::Uuid;

/// Random (v4) UUIDs rendered in hyphenated lowercase form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGeneratorTrait for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_distinct_parseable_ids() {
        let generator = UuidGenerator;
        let ids: HashSet<String> = (0..1_000).map(|_| generator.generate()).collect();

        assert_eq!(ids.len(), 1_000);
        assert!(ids.iter().all(|id| Uuid::parse_str(id).is_ok()));
    }
}
