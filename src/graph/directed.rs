use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{PrimInt, Unsigned};

use crate::graph::edge::Edge;
use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists keyed by node.
///
/// Nodes are caller-supplied identities; the graph enforces uniqueness. Both
/// node and edge sets are append-only: there is no removal operation, and
/// every mutation validates before touching any state, so a failed call
/// leaves the graph exactly as it was.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: PrimInt + Unsigned + Debug,
{
    /// Outbound edges for each node
    edges: HashMap<N, Vec<Edge<N, W>>>,
}

impl<N, W> DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: PrimInt + Unsigned + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            edges: HashMap::new(),
        }
    }

    /// Creates a new directed graph with capacity for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            edges: HashMap::with_capacity(nodes),
        }
    }

    /// Adds a node to the graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if the graph already contains a node
    /// with the same identity.
    pub fn add_node(&mut self, node: N) -> Result<()> {
        if self.edges.contains_key(&node) {
            return Err(Error::DuplicateNode(format!("{:?}", node)));
        }

        self.edges.insert(node, Vec::new());
        Ok(())
    }

    /// Adds a directed edge between two previously added nodes.
    ///
    /// # Errors
    ///
    /// - [`Error::WeightBelowOne`] if `weight` is less than one
    /// - [`Error::SelfLoop`] if `source` equals `destination`
    /// - [`Error::NodeNotFound`] if either endpoint was not added before
    /// - [`Error::DuplicateEdge`] if an edge with the same ordered
    ///   `(source, destination)` pair already exists
    pub fn add_edge(&mut self, source: N, destination: N, weight: W) -> Result<()> {
        if weight < W::one() {
            return Err(Error::WeightBelowOne);
        }

        if source == destination {
            return Err(Error::SelfLoop(format!("{:?}", source)));
        }

        if !self.edges.contains_key(&source) {
            return Err(Error::NodeNotFound(format!("{:?}", source)));
        }

        if !self.edges.contains_key(&destination) {
            return Err(Error::NodeNotFound(format!("{:?}", destination)));
        }

        if self.contains_edge(&source, &destination) {
            return Err(Error::DuplicateEdge(
                format!("{:?}", source),
                format!("{:?}", destination),
            ));
        }

        let edge = Edge::new(source.clone(), destination, weight);
        if let Some(outbound) = self.edges.get_mut(&source) {
            outbound.push(edge);
        }
        Ok(())
    }
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: PrimInt + Unsigned + Debug,
{
    fn default() -> Self {
        DirectedGraph::new()
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: PrimInt + Unsigned + Debug,
{
    fn node_count(&self) -> usize {
        self.edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.values().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.edges.keys())
    }

    fn outbound_edges(&self, node: &N) -> &[Edge<N, W>] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn contains_node(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    fn contains_edge(&self, source: &N, destination: &N) -> bool {
        if let Some(edges) = self.edges.get(source) {
            edges.iter().any(|edge| edge.destination() == destination)
        } else {
            false
        }
    }

    fn edge_weight(&self, source: &N, destination: &N) -> Option<W> {
        if let Some(edges) = self.edges.get(source) {
            edges
                .iter()
                .find(|edge| edge.destination() == destination)
                .map(|edge| edge.weight())
        } else {
            None
        }
    }
}
