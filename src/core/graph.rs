use crate::core::ids::{NodeId, NodeRegistry};
use std::collections::HashSet;

/// Collects nodes and undirected edges keyed by value. Repeated nodes and
/// edges collapse, so the frozen graph is simple.
#[derive(Default)]
pub struct GraphBuilder {
    registry: NodeRegistry,
    edges: Vec<(NodeId, NodeId)>,
    seen: HashSet<(NodeId, NodeId)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, value: &str) -> NodeId {
        self.registry.get_or_insert(value)
    }

    pub fn add_nodes<'a>(&mut self, values: impl IntoIterator<Item = &'a String>) {
        for value in values {
            self.add_node(value);
        }
    }

    /// Unknown endpoints are inserted as new nodes.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        let u = self.registry.get_or_insert(a);
        let v = self.registry.get_or_insert(b);
        if u == v {
            return;
        }
        let key = (u.min(v), u.max(v));
        if self.seen.insert(key) {
            self.edges.push(key);
        }
    }

    pub fn add_edges<'a>(&mut self, pairs: impl IntoIterator<Item = &'a (String, String)>) {
        for (a, b) in pairs {
            self.add_edge(a, b);
        }
    }

    pub fn freeze(self) -> Graph {
        let node_count = self.registry.len();
        let mut offsets = vec![0; node_count + 1];
        let mut neighbors = vec![0; self.edges.len() * 2];
        if self.edges.is_empty() {
            return Graph {
                registry: self.registry,
                edge_count: 0,
                offsets,
                neighbors,
            };
        }

        let mut buf = vec![0; node_count];

        // store degree per node
        for (u, v) in &self.edges {
            buf[*u] += 1;
            buf[*v] += 1;
        }

        // compute neighbor offsets per node
        let mut next = 0;
        for (i, deg) in buf.iter().enumerate() {
            let from = next;
            let to = from + deg;
            offsets[i] = from;
            offsets[i + 1] = to;
            next = to;
        }

        buf.fill(0);
        for (u, v) in &self.edges {
            neighbors[offsets[*u] + buf[*u]] = *v;
            buf[*u] += 1;
            neighbors[offsets[*v] + buf[*v]] = *u;
            buf[*v] += 1;
        }

        Graph {
            registry: self.registry,
            edge_count: self.edges.len(),
            offsets,
            neighbors,
        }
    }
}

/// Undirected simple graph in adjacency-offset form.
pub struct Graph {
    registry: NodeRegistry,
    edge_count: usize,
    offsets: Vec<usize>,
    neighbors: Vec<NodeId>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }

    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.neighbors[self.offsets[node]..self.offsets[node + 1]]
    }

    pub fn node_id(&self, value: &str) -> Option<NodeId> {
        self.registry.get(value)
    }

    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.registry.label(node)
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        match (self.node_id(a), self.node_id(b)) {
            (Some(u), Some(v)) => self.neighbors(u).contains(&v),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_edges() {
        let mut gb = GraphBuilder::new();
        gb.add_node("a");
        gb.add_node("b");
        let g = gb.freeze();

        assert_eq!(2, g.node_count());
        assert_eq!(0, g.edge_count());
        assert_eq!(0, g.degree(0));
        assert!(g.neighbors(1).is_empty());
    }

    #[test]
    fn test_duplicate_nodes_collapse() {
        let mut gb = GraphBuilder::new();
        let values = vec!["x".to_string(), "y".to_string(), "x".to_string()];
        gb.add_nodes(&values);
        let g = gb.freeze();

        assert_eq!(2, g.node_count());
    }

    #[test]
    fn test_edge_inserts_missing_nodes() {
        let mut gb = GraphBuilder::new();
        gb.add_node("id");
        gb.add_edge("id", "Beijing");
        let g = gb.freeze();

        assert_eq!(2, g.node_count());
        assert_eq!(1, g.edge_count());
        assert!(g.contains_edge("id", "Beijing"));
        assert!(g.contains_edge("Beijing", "id"));
    }

    #[test]
    fn test_duplicate_and_reversed_edges_collapse() {
        let mut gb = GraphBuilder::new();
        let pairs = vec![
            ("a".to_string(), "b".to_string()),
            ("b".to_string(), "a".to_string()),
            ("a".to_string(), "b".to_string()),
            ("a".to_string(), "c".to_string()),
        ];
        gb.add_edges(&pairs);
        gb.add_edge("c", "c");
        let g = gb.freeze();

        assert_eq!(2, g.edge_count());
        let a = g.node_id("a").unwrap();
        assert_eq!(2, g.degree(a));
        let b = g.node_id("b").unwrap();
        assert_eq!(&[a], g.neighbors(b));
        let c = g.node_id("c").unwrap();
        assert_eq!(1, g.degree(c));
        assert_eq!(Some("c"), g.label(c));
        assert!(!g.contains_edge("b", "c"));
        assert!(!g.contains_edge("a", "missing"));
    }
}
