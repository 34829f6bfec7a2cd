/// Collected relation fragments for one document-generation call.
///
/// Each list holds pre-rendered XML fragments (e.g. `<id>other.app</id>`
/// or `<control>touch</control>`) that the document builder wraps in the
/// corresponding relation tag. The set is never persisted; its lifetime
/// is a single builder invocation.
#[derive(Debug, Clone, Default)]
pub struct RelationSet {
    pub extends: Vec<String>,
    pub requires: Vec<String>,
    pub recommends: Vec<String>,
    pub supports: Vec<String>,
}

impl RelationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.extends.is_empty()
            && self.requires.is_empty()
            && self.recommends.is_empty()
            && self.supports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_set_empty() {
        assert!(RelationSet::new().is_empty());
    }

    #[test]
    fn test_relation_set_non_empty() {
        let mut relations = RelationSet::new();
        relations.supports.push("<control>touch</control>".to_string());
        assert!(!relations.is_empty());
    }
}
