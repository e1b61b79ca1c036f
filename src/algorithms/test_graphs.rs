use proptest::prelude::*;

use crate::graph::{DirectedGraph, Graph, Orientation, UndirectedGraph};

/// 0 - 1, 1 - 2, 1 - 3, 2 - 4
pub fn traversal_demo() -> UndirectedGraph {
    UndirectedGraph::from_edges(5, [(0, 1), (1, 2), (1, 3), (2, 4)]).unwrap()
}

/// 0 -> 1, 1 -> 2, 1 -> 3, 2 -> 4
pub fn small_dag() -> DirectedGraph {
    DirectedGraph::from_edges(5, [(0, 1), (1, 2), (1, 3), (2, 4)]).unwrap()
}

/// 0 -> 1 -> ... -> n-1
pub fn path_graph<O: Orientation>(n: usize) -> Graph<O> {
    Graph::from_edges(n, (1..n).map(|i| (i - 1, i))).unwrap()
}

/// Vertex count plus an edge list over `0..n`, loops and repeats allowed.
pub fn edge_list(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_vertices).prop_flat_map(move |n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n), 0..=max_edges),
        )
    })
}

/// Edge lists that only point from lower to higher ids, hence acyclic.
pub fn dag_edge_list(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    edge_list(max_vertices, max_edges).prop_map(|(n, edges)| {
        let edges = edges
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        (n, edges)
    })
}

/// Runs `f` on a freshly spawned thread, which gets the platform's default
/// spawn stack rather than the main thread's.
pub fn on_spawned_thread<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::spawn(f).join().unwrap()
}
