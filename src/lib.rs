//! Multipath SSSP - Single-Source Shortest Paths With Tied-Path Enumeration
//!
//! This library computes, over a directed graph with positive integer edge
//! weights, the shortest distance from a source node to every other node while
//! tracking *all* tying predecessors, and can enumerate every minimal-cost
//! path between a source and a destination up to a configurable bound.
//!
//! Nodes are caller-supplied values of any `Eq + Hash + Clone` type; the
//! algorithm never fabricates node identities.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::path_finder::PathFinder;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::edge::Edge;
pub use graph::Graph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("node already present in the graph: {0}")]
    DuplicateNode(String),

    #[error("edge weight is less than one")]
    WeightBelowOne,

    #[error("self-loop edge is not allowed: {0}")]
    SelfLoop(String),

    #[error("edge already present: {0} -> {1}")]
    DuplicateEdge(String, String),

    #[error("node not found in the graph: {0}")]
    NodeNotFound(String),

    #[error("source is equal to destination: {0}")]
    SourceIsDestination(String),

    #[error("distances not computed yet: call find_path first")]
    NotComputed,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
