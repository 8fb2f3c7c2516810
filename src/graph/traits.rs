use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{PrimInt, Unsigned};

use crate::graph::edge::Edge;

/// Trait representing the read-only view of a weighted directed graph.
///
/// Shortest-path computations only ever read through this trait, so a graph
/// is never mutated while an algorithm borrows it.
pub trait Graph<N, W>: Debug
where
    N: Eq + Hash + Clone + Debug,
    W: PrimInt + Unsigned + Debug,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the nodes of the graph, in no defined order
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns the outbound edges of a node, or an empty slice if the node
    /// does not exist
    fn outbound_edges(&self, node: &N) -> &[Edge<N, W>];

    /// Returns true if the node exists in the graph
    fn contains_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn contains_edge(&self, source: &N, destination: &N) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, source: &N, destination: &N) -> Option<W>;
}
