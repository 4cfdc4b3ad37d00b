use crate::core::graph::Graph;
use std::collections::HashMap;

struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            size: vec![1; size],
        }
    }

    fn find(&mut self, u: usize) -> usize {
        let mut ru = u;
        while ru != self.parent[ru] {
            ru = self.parent[ru];
        }
        let mut v = u;
        while v != self.parent[v] {
            let w = v;
            v = self.parent[v];
            self.parent[w] = ru;
        }
        ru
    }

    fn union(&mut self, u: usize, v: usize) {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return;
        }
        if self.size[ru] > self.size[rv] {
            self.parent[rv] = ru;
            self.size[ru] += self.size[rv];
        } else {
            self.parent[ru] = rv;
            self.size[rv] += self.size[ru];
        }
    }
}

/// Component id per node, numbered from 0 in node order.
pub fn connected_components(graph: &Graph) -> Vec<u32> {
    let mut clusters = HashMap::new();
    let mut dsu = DisjointSet::new(graph.node_count());
    for u in 0..graph.node_count() {
        for &v in graph.neighbors(u) {
            dsu.union(u, v);
        }
    }
    let mut result = vec![0; graph.node_count()];
    for u in 0..graph.node_count() {
        let ru = dsu.find(u);
        let next = clusters.len() as u32;
        result[u] = *clusters.entry(ru).or_insert(next);
    }
    result
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ComponentSummary {
    pub components: usize,
    pub isolated: usize,
    pub largest: usize,
}

pub fn summarize_components(graph: &Graph) -> ComponentSummary {
    let labels = connected_components(graph);
    let mut sizes = HashMap::new();
    for label in &labels {
        *sizes.entry(*label).or_insert(0usize) += 1;
    }
    ComponentSummary {
        components: sizes.len(),
        isolated: (0..graph.node_count())
            .filter(|n| graph.degree(*n) == 0)
            .count(),
        largest: sizes.values().copied().max().unwrap_or(0),
    }
}
