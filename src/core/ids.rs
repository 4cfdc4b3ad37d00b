use std::collections::HashMap;

pub type NodeId = usize;

/// Interns node values to dense ids, keeping the reverse mapping for export
/// and lookups.
#[derive(Default)]
pub struct NodeRegistry {
    map: HashMap<String, NodeId>,
    labels: Vec<String>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_insert(&mut self, value: &str) -> NodeId {
        if let Some(id) = self.map.get(value) {
            return *id;
        }
        let id = self.labels.len();
        self.map.insert(value.to_string(), id);
        self.labels.push(value.to_string());
        id
    }

    pub fn get(&self, value: &str) -> Option<NodeId> {
        self.map.get(value).copied()
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_dense_and_stable() {
        let mut reg = NodeRegistry::new();
        assert_eq!(0, reg.get_or_insert("Beijing"));
        assert_eq!(1, reg.get_or_insert("Hainan"));
        assert_eq!(0, reg.get_or_insert("Beijing"));
        assert_eq!(2, reg.len());
        assert_eq!(Some(1), reg.get("Hainan"));
        assert_eq!(Some("Hainan"), reg.label(1));
        assert_eq!(None, reg.get("Sichuan"));
        assert_eq!(None, reg.label(2));
    }
}
