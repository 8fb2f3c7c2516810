use std::collections::HashSet;

use multipath_sssp::graph::generators::generate_grid;
use multipath_sssp::{DirectedGraph, Error, Graph, PathFinder};

// Seven-node graph with two shortest paths from 1 to 6, both of weight 5:
// 1 -> 2 -> 4 -> 6 and 1 -> 7 -> 6.
fn tied_graph() -> DirectedGraph<u32, u32> {
    let mut graph = DirectedGraph::new();

    for node in 1..=7 {
        graph.add_node(node).unwrap();
    }

    graph.add_edge(1, 2, 2).unwrap();
    graph.add_edge(1, 3, 1).unwrap();
    graph.add_edge(2, 4, 1).unwrap();
    graph.add_edge(3, 4, 3).unwrap();
    graph.add_edge(3, 5, 4).unwrap();
    graph.add_edge(4, 6, 2).unwrap();
    graph.add_edge(5, 6, 2).unwrap();
    graph.add_edge(1, 7, 2).unwrap();
    graph.add_edge(7, 6, 3).unwrap();

    graph
}

// Checks that a path runs source to destination over existing edges without
// revisiting a node, and returns its total weight.
fn path_weight(graph: &DirectedGraph<usize, u32>, path: &[usize], source: usize, destination: usize) -> u32 {
    assert_eq!(*path.first().unwrap(), source);
    assert_eq!(*path.last().unwrap(), destination);

    let distinct: HashSet<usize> = path.iter().copied().collect();
    assert_eq!(distinct.len(), path.len(), "path revisits a node: {path:?}");

    path.windows(2)
        .map(|pair| graph.edge_weight(&pair[0], &pair[1]).expect("missing edge"))
        .sum()
}

#[test]
fn test_all_tied_paths_are_enumerated() {
    let graph = tied_graph();
    let mut finder = PathFinder::new();

    let paths = finder.paths(&graph, &1, &6).unwrap();
    let paths: HashSet<Vec<u32>> = paths.into_iter().collect();

    let expected: HashSet<Vec<u32>> =
        [vec![1, 2, 4, 6], vec![1, 7, 6]].into_iter().collect();
    assert_eq!(paths, expected);
}

#[test]
fn test_paths_recomputes_state_for_its_source() {
    let graph = tied_graph();
    let mut finder = PathFinder::new();

    finder.paths(&graph, &1, &6).unwrap();

    // paths() performs a full computation for its source
    assert_eq!(finder.dist(&6).unwrap(), Some(5));
    assert_eq!(finder.dist(&1).unwrap(), Some(0));
}

#[test]
fn test_grid_paths_are_exactly_the_minimal_ones() {
    // 3x3 two-way grid with uniform weight 1: six 4-hop monotone paths
    // connect opposite corners
    let graph = generate_grid(3, 3);
    let mut finder = PathFinder::new();

    let paths = finder.paths(&graph, &0, &8).unwrap();

    assert_eq!(paths.len(), 6);
    assert_eq!(finder.dist(&8).unwrap(), Some(4));

    let distinct: HashSet<Vec<usize>> = paths.iter().cloned().collect();
    assert_eq!(distinct.len(), 6);

    for path in &paths {
        assert_eq!(path.len(), 5);
        assert_eq!(path_weight(&graph, path, 0, 8), 4);
    }
}

#[test]
fn test_enumeration_is_capped() {
    // 4x4 two-way grid: twenty tied 6-hop paths between opposite corners,
    // twice the default cap
    let graph = generate_grid(4, 4);
    let mut finder = PathFinder::new();

    let paths = finder.paths(&graph, &0, &15).unwrap();

    assert_eq!(paths.len(), 10);
    for path in &paths {
        assert_eq!(path_weight(&graph, path, 0, 15), 6);
    }
}

#[test]
fn test_path_limit_is_configurable() {
    let graph = generate_grid(4, 4);

    let mut small = PathFinder::new().with_path_limit(3);
    assert_eq!(small.paths(&graph, &0, &15).unwrap().len(), 3);

    let mut large = PathFinder::new().with_path_limit(100);
    let paths = large.paths(&graph, &0, &15).unwrap();
    assert_eq!(paths.len(), 20);

    let distinct: HashSet<Vec<usize>> = paths.into_iter().collect();
    assert_eq!(distinct.len(), 20);
}

#[test]
fn test_unreachable_destination_yields_no_paths() {
    let graph = tied_graph();
    let mut finder = PathFinder::new();

    // Node 6 is a sink, so node 1 is unreachable from it
    let paths = finder.paths(&graph, &6, &1).unwrap();

    assert!(paths.is_empty());
}

#[test]
fn test_paths_with_equal_endpoints_rejected() {
    let graph = tied_graph();
    let mut finder = PathFinder::new();

    let result = finder.paths(&graph, &1, &1);

    assert!(matches!(result, Err(Error::SourceIsDestination(_))));
}

#[test]
fn test_paths_with_unknown_endpoint_rejected() {
    let graph = tied_graph();
    let mut finder = PathFinder::new();

    assert!(matches!(
        finder.paths(&graph, &42, &6),
        Err(Error::NodeNotFound(_))
    ));
    assert!(matches!(
        finder.paths(&graph, &1, &42),
        Err(Error::NodeNotFound(_))
    ));
}

#[test]
fn test_single_path_through_long_chain() {
    // A long non-branching chain exercises the worklist unzip without any
    // combinatorial growth
    let mut graph: DirectedGraph<u32, u32> = DirectedGraph::new();
    for node in 0..1_000 {
        graph.add_node(node).unwrap();
    }
    for node in 0..999 {
        graph.add_edge(node, node + 1, 1).unwrap();
    }

    let mut finder = PathFinder::new();
    let paths = finder.paths(&graph, &0, &999).unwrap();

    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), 1_000);
    assert_eq!(finder.dist(&999).unwrap(), Some(999));
}
