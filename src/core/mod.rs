pub mod entity;
pub mod graph;
pub mod ids;
