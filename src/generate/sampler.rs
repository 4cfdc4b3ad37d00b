use crate::core::entity::EntityClass;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;

/// Pool of one entity class and the two independent draws taken from it.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSample {
    pub class: EntityClass,
    pub pool: Vec<String>,
    pub host: Vec<String>,
    pub client: Vec<String>,
}

/// Synthesizes `node_num` values of `class`, dedupes them into a pool and
/// draws `floor(pool.len() * prob)` values with replacement for host, then
/// for client. Draws keep duplicates.
pub fn sample_nodes<R: Rng + ?Sized>(
    class: EntityClass,
    node_num: usize,
    prob: f64,
    rng: &mut R,
) -> NodeSample {
    let pool = build_pool(class, node_num, rng);
    let k = draw_size(pool.len(), prob);
    let host = draw(&pool, k, rng);
    let client = draw(&pool, k, rng);

    tracing::debug!(
        class = %class,
        pool = pool.len(),
        draw = k,
        "sampled entity class"
    );

    NodeSample {
        class,
        pool,
        host,
        client,
    }
}

pub fn draw_size(pool_size: usize, prob: f64) -> usize {
    (pool_size as f64 * prob).floor() as usize
}

// first-occurrence order keeps seeded runs reproducible
fn build_pool<R: Rng + ?Sized>(class: EntityClass, node_num: usize, rng: &mut R) -> Vec<String> {
    let mut seen = HashSet::with_capacity(node_num);
    let mut pool = Vec::with_capacity(node_num);
    for _ in 0..node_num {
        let value = class.synthesize(rng);
        if seen.insert(value.clone()) {
            pool.push(value);
        }
    }
    pool
}

fn draw<R: Rng + ?Sized>(pool: &[String], k: usize, rng: &mut R) -> Vec<String> {
    (0..k).filter_map(|_| pool.choose(rng).cloned()).collect()
}
