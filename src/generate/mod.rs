pub mod edges;
pub mod sampler;

use crate::config::{GeneratorConfig, Layout};
use crate::core::entity::EntityClass;
use crate::core::graph::{Graph, GraphBuilder};
use edges::synthesize_edges;
use rand::Rng;
use sampler::{NodeSample, sample_nodes};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Host,
    Client,
}

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::Host => "host",
            Side::Client => "client",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Edges between identities and one attribute class.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSet {
    pub left: EntityClass,
    pub right: EntityClass,
    pub pairs: Vec<(String, String)>,
}

impl EdgeSet {
    pub fn file_stem(&self) -> String {
        format!("edge_{}_{}", self.left, self.right)
    }
}

/// One side of the fixture: raw node draws, edges and the resulting graph.
pub struct SideFixture {
    pub side: Side,
    pub nodes: BTreeMap<EntityClass, Vec<String>>,
    pub edges: Vec<EdgeSet>,
    pub graph: Graph,
}

impl SideFixture {
    pub fn nodes_of(&self, class: EntityClass) -> &[String] {
        self.nodes.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edges_to(&self, class: EntityClass) -> Option<&EdgeSet> {
        self.edges.iter().find(|e| e.right == class)
    }
}

pub struct Fixture {
    pub samples: Vec<NodeSample>,
    pub host: SideFixture,
    pub client: Option<SideFixture>,
}

impl Fixture {
    pub fn sides(&self) -> impl Iterator<Item = &SideFixture> {
        std::iter::once(&self.host).chain(self.client.as_ref())
    }
}

/// Samples every entity class, then synthesizes edges and builds the graph
/// for host and, in paired layout, client. Client draws are taken in single
/// layout too so a seed yields the same host output in both layouts.
pub fn generate_fixture<R: Rng + ?Sized>(cfg: &GeneratorConfig, rng: &mut R) -> Fixture {
    let samples = EntityClass::ALL
        .iter()
        .map(|class| sample_nodes(*class, cfg.node_num, cfg.prob, rng))
        .collect::<Vec<_>>();

    let host = build_side(Side::Host, &samples, cfg.prob, rng);
    let client = match cfg.layout {
        Layout::Paired => Some(build_side(Side::Client, &samples, cfg.prob, rng)),
        Layout::Single => None,
    };

    Fixture {
        samples,
        host,
        client,
    }
}

fn build_side<R: Rng + ?Sized>(
    side: Side,
    samples: &[NodeSample],
    prob: f64,
    rng: &mut R,
) -> SideFixture {
    let nodes = samples
        .iter()
        .map(|s| {
            let draw = match side {
                Side::Host => &s.host,
                Side::Client => &s.client,
            };
            (s.class, draw.clone())
        })
        .collect::<BTreeMap<_, _>>();

    let empty = Vec::new();
    let identities = nodes.get(&EntityClass::Identity).unwrap_or(&empty);
    let edges = EntityClass::ATTRIBUTES
        .iter()
        .map(|attr| EdgeSet {
            left: EntityClass::Identity,
            right: *attr,
            pairs: synthesize_edges(
                identities,
                nodes.get(attr).unwrap_or(&empty),
                prob,
                rng,
            ),
        })
        .collect::<Vec<_>>();

    let mut gb = GraphBuilder::new();
    for class in EntityClass::ALL {
        if let Some(values) = nodes.get(&class) {
            gb.add_nodes(values);
        }
    }
    for edge_set in &edges {
        gb.add_edges(&edge_set.pairs);
    }
    let graph = gb.freeze();

    tracing::info!(
        side = %side,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        identity_email = edges[0].pairs.len(),
        identity_telephone = edges[1].pairs.len(),
        identity_province = edges[2].pairs.len(),
        "built side graph"
    );

    SideFixture {
        side,
        nodes,
        edges,
        graph,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::PROVINCES;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn paired(node_num: usize, prob: f64) -> GeneratorConfig {
        GeneratorConfig::new(node_num, prob, Layout::Paired).unwrap()
    }

    #[test]
    fn test_full_prob_end_to_end() {
        let mut rng = StdRng::seed_from_u64(42);
        let fixture = generate_fixture(&paired(5, 1.0), &mut rng);

        let provinces = fixture
            .samples
            .iter()
            .find(|s| s.class == EntityClass::Province)
            .unwrap();
        assert!(provinces.pool.len() <= PROVINCES.len());

        for side in fixture.sides() {
            for sample in &fixture.samples {
                assert_eq!(sample.pool.len(), side.nodes_of(sample.class).len());
            }

            let edges = side.edges_to(EntityClass::Province).unwrap();
            for id in side.nodes_of(EntityClass::Identity) {
                for province in side.nodes_of(EntityClass::Province) {
                    assert!(edges.pairs.contains(&(id.clone(), province.clone())));
                    assert!(side.graph.contains_edge(id, province));
                }
            }
        }
    }

    #[test]
    fn test_zero_prob_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let fixture = generate_fixture(&paired(10, 0.0), &mut rng);
        for side in fixture.sides() {
            assert!(side.nodes.values().all(Vec::is_empty));
            assert!(side.edges.iter().all(|e| e.pairs.is_empty()));
            assert_eq!(0, side.graph.node_count());
        }
    }

    #[test]
    fn test_graph_collapses_duplicate_draws() {
        let mut rng = StdRng::seed_from_u64(3);
        let fixture = generate_fixture(&paired(30, 0.9), &mut rng);
        for side in fixture.sides() {
            let distinct = side
                .nodes
                .values()
                .flatten()
                .collect::<std::collections::HashSet<_>>();
            assert_eq!(distinct.len(), side.graph.node_count());
            let raw = side.nodes.values().map(Vec::len).sum::<usize>();
            assert!(side.graph.node_count() <= raw);
        }
    }

    #[test]
    fn test_edge_sets_per_attribute() {
        let mut rng = StdRng::seed_from_u64(4);
        let fixture = generate_fixture(&paired(10, 0.5), &mut rng);
        let stems = fixture
            .host
            .edges
            .iter()
            .map(EdgeSet::file_stem)
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                "edge_identity_email",
                "edge_identity_telephone",
                "edge_identity_province"
            ],
            stems
        );
    }

    #[test]
    fn test_single_layout_has_no_client() {
        let mut rng = StdRng::seed_from_u64(5);
        let cfg = GeneratorConfig::new(10, 0.5, Layout::Single).unwrap();
        let fixture = generate_fixture(&cfg, &mut rng);
        assert!(fixture.client.is_none());
        assert_eq!(1, fixture.sides().count());
    }

    #[test]
    fn test_single_matches_paired_host() {
        let single = GeneratorConfig::new(12, 0.6, Layout::Single).unwrap();
        let a = generate_fixture(&single, &mut StdRng::seed_from_u64(6));
        let b = generate_fixture(&paired(12, 0.6), &mut StdRng::seed_from_u64(6));
        assert_eq!(a.host.nodes, b.host.nodes);
        assert_eq!(a.host.edges, b.host.edges);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_fixture(&paired(15, 0.7), &mut StdRng::seed_from_u64(7));
        let b = generate_fixture(&paired(15, 0.7), &mut StdRng::seed_from_u64(7));
        assert_eq!(a.samples, b.samples);
        for (x, y) in a.sides().zip(b.sides()) {
            assert_eq!(x.nodes, y.nodes);
            assert_eq!(x.edges, y.edges);
        }
    }
}
