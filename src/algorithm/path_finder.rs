use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use num_traits::{PrimInt, Unsigned};

use crate::data_structures::MinPriorityQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Default bound on the number of paths returned by [`PathFinder::paths`].
const DEFAULT_PATH_LIMIT: usize = 10;

/// Distance and predecessor tables produced by one shortest-path computation.
#[derive(Debug, Clone)]
struct SearchState<N, W> {
    /// Maps each node to its distance from the source, `None` when unreachable
    dist: HashMap<N, Option<W>>,

    /// Maps each node to the set of predecessors lying one edge back on some
    /// shortest path from the source
    prev: HashMap<N, HashSet<N>>,
}

/// Searches the shortest paths from a source node to all the other nodes of a
/// directed weighted graph.
///
/// Unlike a plain shortest-path tree, the finder records *every* tying
/// predecessor of each node, so the computed state describes the full
/// shortest-path DAG and [`PathFinder::paths`] can enumerate all minimal-cost
/// paths to a destination.
///
/// A finder starts out uncomputed; [`PathFinder::find_path`] rebuilds the
/// distance and predecessor tables from scratch on every call, and a failed
/// call leaves any previously computed tables untouched.
#[derive(Debug, Clone)]
pub struct PathFinder<N, W> {
    /// Tables of the last successful computation, `None` before the first
    state: Option<SearchState<N, W>>,

    /// Bound on the number of paths collected by path enumeration
    path_limit: usize,
}

impl<N, W> PathFinder<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: PrimInt + Unsigned + Debug,
{
    /// Creates a new path finder with the default enumeration bound of 10
    /// paths.
    pub fn new() -> Self {
        PathFinder {
            state: None,
            path_limit: DEFAULT_PATH_LIMIT,
        }
    }

    /// Sets the bound on the number of paths collected by
    /// [`PathFinder::paths`].
    ///
    /// On graphs with many tied shortest paths the enumeration stops
    /// expanding once the bound is reached; the excess paths are silently
    /// dropped.
    pub fn with_path_limit(mut self, limit: usize) -> Self {
        self.path_limit = limit;
        self
    }

    /// Computes the shortest paths from a source node to all the other nodes
    /// of a directed weighted graph.
    ///
    /// Distances and predecessor sets can be retrieved afterwards through
    /// [`PathFinder::dist`] and [`PathFinder::prev`]. Nodes unreachable from
    /// the source keep an infinite distance and an empty predecessor set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the graph does not contain the
    /// source node; previously computed state is left untouched.
    pub fn find_path<G>(&mut self, graph: &G, source: &N) -> Result<()>
    where
        G: Graph<N, W>,
    {
        if !graph.contains_node(source) {
            return Err(Error::NodeNotFound(format!("{:?}", source)));
        }

        self.state = Some(compute(graph, source));
        Ok(())
    }

    /// Returns the distance from the source of the last computation to the
    /// given node, or `None` if the node is unreachable.
    ///
    /// # Errors
    ///
    /// - [`Error::NotComputed`] if no [`PathFinder::find_path`] call has
    ///   succeeded yet
    /// - [`Error::NodeNotFound`] if the node was not part of the graph used
    ///   in the last computation
    pub fn dist(&self, node: &N) -> Result<Option<W>> {
        let state = self.state.as_ref().ok_or(Error::NotComputed)?;

        state
            .dist
            .get(node)
            .copied()
            .ok_or_else(|| Error::NodeNotFound(format!("{:?}", node)))
    }

    /// Returns the predecessors of the given node on the shortest paths from
    /// the source of the last computation.
    ///
    /// The set is empty for the source itself and for unreachable nodes, and
    /// holds more than one node when several incoming paths tie for minimal
    /// distance.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PathFinder::dist`].
    pub fn prev(&self, node: &N) -> Result<&HashSet<N>> {
        let state = self.state.as_ref().ok_or(Error::NotComputed)?;

        state
            .prev
            .get(node)
            .ok_or_else(|| Error::NodeNotFound(format!("{:?}", node)))
    }

    /// Gets all the shortest paths from source to destination.
    ///
    /// Runs a full [`PathFinder::find_path`] for the given source, replacing
    /// any previously computed state, then reconstructs every minimal-cost
    /// path by walking the predecessor relation backward from the
    /// destination. Each returned path lists its nodes in order from source
    /// to destination; the collection itself has no defined order and holds
    /// at most the configured path limit. An unreachable destination yields
    /// an empty collection.
    ///
    /// # Errors
    ///
    /// - [`Error::SourceIsDestination`] if `source` equals `destination`
    /// - [`Error::NodeNotFound`] if either endpoint is missing from the graph
    pub fn paths<G>(&mut self, graph: &G, source: &N, destination: &N) -> Result<Vec<Vec<N>>>
    where
        G: Graph<N, W>,
    {
        if source == destination {
            return Err(Error::SourceIsDestination(format!("{:?}", source)));
        }

        if !graph.contains_node(source) {
            return Err(Error::NodeNotFound(format!("{:?}", source)));
        }

        if !graph.contains_node(destination) {
            return Err(Error::NodeNotFound(format!("{:?}", destination)));
        }

        let state = compute(graph, source);
        let paths = collect_paths(&state, destination, self.path_limit);
        self.state = Some(state);

        Ok(paths)
    }
}

impl<N, W> Default for PathFinder<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: PrimInt + Unsigned + Debug,
{
    fn default() -> Self {
        PathFinder::new()
    }
}

/// Runs the shortest-path computation for a source known to be in the graph.
fn compute<N, W, G>(graph: &G, source: &N) -> SearchState<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: PrimInt + Unsigned + Debug,
    G: Graph<N, W>,
{
    let n = graph.node_count();
    let mut dist: HashMap<N, Option<W>> = HashMap::with_capacity(n);
    let mut prev: HashMap<N, HashSet<N>> = HashMap::with_capacity(n);
    let mut unvisited: HashSet<N> = HashSet::with_capacity(n);

    for node in graph.nodes() {
        dist.insert(node.clone(), None);
        prev.insert(node.clone(), HashSet::new());
        unvisited.insert(node.clone());
    }

    // Source is at distance zero
    dist.insert(source.clone(), Some(W::zero()));

    let mut queue = MinPriorityQueue::new();
    queue.push(source.clone(), W::zero());

    while let Some((min, dist_min)) = queue.pop() {
        // Relaxation pushes a fresh entry instead of decreasing a key, so a
        // node already settled at a smaller distance may come up again
        if !unvisited.remove(&min) {
            continue;
        }

        trace!("settled {:?} at distance {:?}", min, dist_min);

        for edge in graph.outbound_edges(&min) {
            let destination = edge.destination();
            let alt = dist_min + edge.weight();
            let current = dist.get(destination).copied().flatten();

            let is_shorter = match current {
                None => true,
                Some(current) => alt < current,
            };

            if is_shorter {
                // A shorter path was found: earlier predecessors no longer
                // lie on a shortest path
                dist.insert(destination.clone(), Some(alt));
                if let Some(preds) = prev.get_mut(destination) {
                    preds.clear();
                    preds.insert(min.clone());
                }
                queue.push(destination.clone(), alt);
            } else if current == Some(alt) {
                // Another path of the same length was found
                if let Some(preds) = prev.get_mut(destination) {
                    preds.insert(min.clone());
                }
            }
        }
    }

    SearchState { dist, prev }
}

/// Enumerates every shortest path to `destination`, walking the predecessor
/// relation backward with an explicit worklist.
///
/// Paths are kept destination-first while under construction and reversed on
/// completion. Non-branching predecessor chains are prepended without
/// spawning new work items; a branching node spawns one item per predecessor.
/// Expansion stops once `limit` paths have been collected.
fn collect_paths<N, W>(state: &SearchState<N, W>, destination: &N, limit: usize) -> Vec<Vec<N>>
where
    N: Eq + Hash + Clone + Debug,
    W: PrimInt + Unsigned + Debug,
{
    let mut paths = Vec::new();

    if state.prev[destination].is_empty() {
        // Unreachable destination: nothing to reconstruct
        return paths;
    }

    let mut worklist = vec![vec![destination.clone()]];

    while let Some(mut path) = worklist.pop() {
        if paths.len() >= limit {
            debug!(
                "path enumeration to {:?} truncated at {} paths",
                destination, limit
            );
            return paths;
        }

        let mut head = path[path.len() - 1].clone();

        // Unzip the non-branching chain leading into the current head
        while let Some(pred) = single_predecessor(state, &head) {
            path.push(pred.clone());
            head = pred;
        }

        let preds = &state.prev[&head];

        if preds.is_empty() {
            // Chaining reached the source: the path is complete
            path.reverse();
            paths.push(path);
        } else {
            for pred in preds {
                let mut extended = path.clone();
                extended.push(pred.clone());
                worklist.push(extended);
            }
        }
    }

    paths
}

/// Returns the predecessor of a node that sits on a non-branching chain, or
/// `None` if the node has zero or several predecessors.
fn single_predecessor<N, W>(state: &SearchState<N, W>, node: &N) -> Option<N>
where
    N: Eq + Hash + Clone + Debug,
    W: PrimInt + Unsigned + Debug,
{
    let preds = &state.prev[node];

    if preds.len() == 1 {
        preds.iter().next().cloned()
    } else {
        None
    }
}
