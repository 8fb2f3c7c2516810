use rand::prelude::*;

use crate::graph::{DirectedGraph, Graph};

/// Generates a two-way grid graph with the given dimensions.
///
/// Nodes are numbered row-major from 0. Every pair of horizontally or
/// vertically adjacent cells is connected by an edge in each direction with
/// uniform weight 1, so the grid has many tied shortest paths between
/// diagonally opposite corners.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, u32> {
    assert!(width > 0, "width must be positive");
    assert!(height > 0, "height must be positive");

    let mut graph = DirectedGraph::with_capacity(width * height);

    for node in 0..(width * height) {
        graph
            .add_node(node)
            .expect("grid nodes are constructed unique");
    }

    let index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);

            if x + 1 < width {
                let neighbor = index(x + 1, y);
                graph.add_edge(current, neighbor, 1).unwrap();
                graph.add_edge(neighbor, current, 1).unwrap();
            }
            if y + 1 < height {
                let neighbor = index(x, y + 1);
                graph.add_edge(current, neighbor, 1).unwrap();
                graph.add_edge(neighbor, current, 1).unwrap();
            }
        }
    }

    graph
}

/// Generates a random directed graph with `n` nodes and roughly
/// `edges_per_node * n` edges, with weights drawn uniformly from
/// `1..=max_weight`.
///
/// The generator is seeded so repeated calls with the same arguments produce
/// the same graph.
pub fn generate_random(
    n: usize,
    edges_per_node: usize,
    max_weight: u32,
    seed: u64,
) -> DirectedGraph<usize, u32> {
    assert!(n > 1, "n must be greater than one");
    assert!(max_weight >= 1, "max_weight must be at least one");

    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for node in 0..n {
        graph
            .add_node(node)
            .expect("random graph nodes are constructed unique");
    }

    let target_edges = n * edges_per_node;
    let mut added = 0;
    // The attempt bound keeps the loop finite on dense requests where most
    // candidate pairs are already taken.
    let mut attempts = 0;
    let max_attempts = target_edges * 20;

    while added < target_edges && attempts < max_attempts {
        attempts += 1;

        let source = rng.gen_range(0..n);
        let destination = rng.gen_range(0..n);

        if source == destination || graph.contains_edge(&source, &destination) {
            continue;
        }

        let weight = rng.gen_range(1..=max_weight);
        graph.add_edge(source, destination, weight).unwrap();
        added += 1;
    }

    graph
}
