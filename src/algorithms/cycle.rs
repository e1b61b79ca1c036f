//! Cycle detection by depth-first search.
//!
//! Both detectors walk every vertex like the other whole-graph queries and
//! stop at the first back edge they meet. They differ in what counts as one:
//!
//! - undirected: an edge to any visited vertex other than the one we came
//!   from. The edge back to the parent is the mirrored copy of the tree edge.
//! - directed: an edge to a vertex that is still on the current path.
//!   Vertices are taken off the path once all their neighbours are done, so
//!   reaching an already finished vertex (a cross or forward edge) is fine.
//!
//! Self-loops are cycles under both rules.

use bitvec::vec::BitVec;
use tracing::debug;

use crate::{
    config::TraversalConfig,
    graph::{Directed, Graph, Orientation, Undirected, VertexId},
};

use super::{CallStack, Step, TraversalError};

struct UndirectedSearch<'a> {
    graph: &'a Graph<Undirected>,
    visited: BitVec,
    calls: CallStack,
}

impl UndirectedSearch<'_> {
    fn enter(&mut self, vertex: VertexId) -> Result<(), TraversalError> {
        self.calls.enter(vertex)?;
        self.visited.set(vertex.0, true);
        Ok(())
    }

    fn walk(&mut self, source: VertexId) -> Result<bool, TraversalError> {
        self.enter(source)?;
        while let Some(step) = self.calls.step(self.graph) {
            let Step::Edge { from, to } = step else {
                continue;
            };
            if !self.visited[to.0] {
                self.enter(to)?;
            } else if Some(to) != self.calls.parent() {
                debug!(from = from.0, to = to.0, "undirected back edge");
                return Ok(true);
            }
        }
        Ok(false)
    }
}

struct DirectedSearch<'a, O: Orientation> {
    graph: &'a Graph<O>,
    visited: BitVec,
    on_path: BitVec,
    path: Vec<VertexId>,
    calls: CallStack,
}

impl<O: Orientation> DirectedSearch<'_, O> {
    fn enter(&mut self, vertex: VertexId) -> Result<(), TraversalError> {
        self.calls.enter(vertex)?;
        self.visited.set(vertex.0, true);
        self.on_path.set(vertex.0, true);
        self.path.push(vertex);
        Ok(())
    }

    /// Returns the cycle closed by the first back edge found below `source`,
    /// listed from the vertex the back edge points at.
    fn walk(&mut self, source: VertexId) -> Result<Option<Vec<VertexId>>, TraversalError> {
        self.enter(source)?;
        while let Some(step) = self.calls.step(self.graph) {
            match step {
                Step::Edge { to, .. } if !self.visited[to.0] => self.enter(to)?,
                Step::Edge { from, to } => {
                    if self.on_path[to.0] {
                        debug!(from = from.0, to = to.0, "directed back edge");
                        let start = self.path.iter().rposition(|v| *v == to).unwrap_or(0);
                        return Ok(Some(self.path[start..].to_vec()));
                    }
                }
                Step::Exit(vertex) => {
                    self.on_path.set(vertex.0, false);
                    self.path.pop();
                }
            }
        }
        Ok(None)
    }
}

impl<O: Orientation> Graph<O> {
    /// Whether the stored edges, read as arrows, contain a cycle.
    ///
    /// On an undirected graph every edge is stored both ways, so any edge
    /// forms a two-vertex cycle under this reading; use
    /// [`Graph::has_cycle_undirected`] there instead.
    pub fn has_cycle_directed(&self) -> Result<bool, TraversalError> {
        self.has_cycle_directed_with(&TraversalConfig::default())
    }

    pub fn has_cycle_directed_with(&self, config: &TraversalConfig) -> Result<bool, TraversalError> {
        Ok(self.find_cycle_directed_with(config)?.is_some())
    }

    /// The first directed cycle found, as the vertices along it in edge
    /// order. `None` for acyclic graphs.
    pub fn find_cycle_directed(&self) -> Result<Option<Vec<VertexId>>, TraversalError> {
        self.find_cycle_directed_with(&TraversalConfig::default())
    }

    pub fn find_cycle_directed_with(
        &self,
        config: &TraversalConfig,
    ) -> Result<Option<Vec<VertexId>>, TraversalError> {
        let mut search = DirectedSearch {
            graph: self,
            visited: BitVec::repeat(false, self.vertex_count()),
            on_path: BitVec::repeat(false, self.vertex_count()),
            path: Vec::new(),
            calls: CallStack::new(config.recursion_limit),
        };
        for source in self.vertices() {
            if search.visited[source.0] {
                continue;
            }
            if let Some(cycle) = search.walk(source)? {
                return Ok(Some(cycle));
            }
        }
        Ok(None)
    }
}

impl Graph<Undirected> {
    /// Whether the graph contains a cycle.
    ///
    /// Parallel edges count: the second copy of `u - v` reaches `v` from `u`
    /// after `v` is finished, and `v` is not `u`'s parent.
    pub fn has_cycle_undirected(&self) -> Result<bool, TraversalError> {
        self.has_cycle_undirected_with(&TraversalConfig::default())
    }

    pub fn has_cycle_undirected_with(
        &self,
        config: &TraversalConfig,
    ) -> Result<bool, TraversalError> {
        let mut search = UndirectedSearch {
            graph: self,
            visited: BitVec::repeat(false, self.vertex_count()),
            calls: CallStack::new(config.recursion_limit),
        };
        for source in self.vertices() {
            if !search.visited[source.0] && search.walk(source)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn has_cycle(&self) -> Result<bool, TraversalError> {
        self.has_cycle_undirected()
    }
}

impl Graph<Directed> {
    pub fn has_cycle(&self) -> Result<bool, TraversalError> {
        self.has_cycle_directed()
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::algorithms::test_graphs::*;
    use crate::config::DEFAULT_RECURSION_LIMIT;
    use crate::graph::{DirectedGraph, UndirectedGraph};

    fn ids(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId).collect()
    }

    #[test]
    fn triangle_is_cyclic() {
        let graph = UndirectedGraph::from_edges(5, [(1, 2), (1, 3), (2, 3)]).unwrap();
        assert!(graph.has_cycle_undirected().unwrap());
    }

    #[test]
    fn tree_is_acyclic() {
        let graph = UndirectedGraph::from_edges(5, [(1, 2), (1, 3), (2, 4)]).unwrap();
        assert!(!graph.has_cycle_undirected().unwrap());
        assert!(!traversal_demo().has_cycle().unwrap());
    }

    #[test]
    fn undirected_self_loop_and_parallel_edge_are_cycles() {
        let mut graph = UndirectedGraph::new(3);
        graph.add_edge(2, 2).unwrap();
        assert!(graph.has_cycle().unwrap());

        let graph = UndirectedGraph::from_edges(3, [(0, 1), (1, 0)]).unwrap();
        assert!(graph.has_cycle().unwrap());
    }

    #[test]
    fn cycle_in_later_component_is_found() {
        let graph = UndirectedGraph::from_edges(7, [(0, 1), (4, 5), (5, 6), (6, 4)]).unwrap();
        assert!(graph.has_cycle().unwrap());
    }

    #[test]
    fn directed_triangle_is_cyclic() {
        let graph = DirectedGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        assert!(graph.has_cycle_directed().unwrap());
        assert_eq!(graph.find_cycle_directed().unwrap(), Some(ids(&[0, 1, 2])));
    }

    #[test]
    fn directed_fan_out_is_acyclic() {
        let graph = DirectedGraph::from_edges(3, [(0, 1), (0, 2)]).unwrap();
        assert!(!graph.has_cycle_directed().unwrap());
        assert_eq!(graph.find_cycle_directed().unwrap(), None);
    }

    #[test]
    fn directed_diamond_is_not_a_cycle() {
        // 3 is reached twice but is finished before the second visit.
        let graph = DirectedGraph::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        assert!(!graph.has_cycle().unwrap());
        // Read without direction the same edges do close a loop.
        let graph = UndirectedGraph::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        assert!(graph.has_cycle().unwrap());
    }

    #[test]
    fn directed_self_loop_is_cyclic() {
        let mut graph = DirectedGraph::new(4);
        graph.add_edge(0, 1).unwrap().add_edge(3, 3).unwrap();
        assert!(graph.has_cycle_directed().unwrap());
        assert_eq!(graph.find_cycle_directed().unwrap(), Some(ids(&[3])));
    }

    #[test]
    fn cycle_witness_starts_at_back_edge_target() {
        let graph = DirectedGraph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 1), (3, 4)]).unwrap();
        assert_eq!(graph.find_cycle_directed().unwrap(), Some(ids(&[1, 2, 3])));
    }

    #[test]
    fn removing_the_closing_edge_breaks_the_cycle() {
        let mut graph = DirectedGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        graph.remove_edge(2, 0).unwrap();
        assert!(!graph.has_cycle().unwrap());
    }

    #[test]
    fn deep_path_respects_recursion_limit() {
        let graph = path_graph::<Directed>(50);
        let config = TraversalConfig::default().with_recursion_limit(10);
        assert!(matches!(
            graph.has_cycle_directed_with(&config),
            Err(TraversalError::RecursionLimitExceeded { limit: 10, .. })
        ));
        let graph = path_graph::<Undirected>(50);
        assert!(graph.has_cycle_undirected_with(&config).is_err());
        assert!(!graph
            .has_cycle_undirected_with(&TraversalConfig::unbounded())
            .unwrap());
    }

    #[test]
    fn default_limit_holds_on_a_spawned_thread() {
        let limit = DEFAULT_RECURSION_LIMIT;
        let (directed, undirected) = on_spawned_thread(move || {
            let within = path_graph::<Directed>(limit);
            let beyond = path_graph::<Directed>(limit + 1);
            let directed = (
                within.has_cycle_directed(),
                within.find_cycle_directed(),
                beyond.has_cycle_directed(),
            );
            let within = path_graph::<Undirected>(limit);
            let beyond = path_graph::<Undirected>(limit + 1);
            (directed, (within.has_cycle_undirected(), beyond.has_cycle_undirected()))
        });

        let exceeded = Err(TraversalError::RecursionLimitExceeded {
            limit,
            vertex: VertexId(limit),
        });
        assert_eq!(directed.0, Ok(false));
        assert_eq!(directed.1, Ok(None));
        assert_eq!(directed.2, exceeded);
        assert_eq!(undirected.0, Ok(false));
        assert_eq!(undirected.1, exceeded);
    }

    #[test]
    fn long_cycle_is_found_at_full_depth() {
        let limit = DEFAULT_RECURSION_LIMIT;
        let cycle = on_spawned_thread(move || {
            let mut graph = path_graph::<Directed>(limit);
            graph.add_edge(limit - 1, 0).unwrap();
            graph.find_cycle_directed()
        })
        .unwrap()
        .unwrap();
        assert_eq!(cycle.len(), limit);
        assert_eq!(cycle.first(), Some(&VertexId(0)));
        assert_eq!(cycle.last(), Some(&VertexId(limit - 1)));
    }

    fn components(n: usize, edges: &[(usize, usize)]) -> usize {
        fn root(parent: &mut [usize], mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }
        let mut parent: Vec<usize> = (0..n).collect();
        let mut count = n;
        for &(a, b) in edges {
            let (ra, rb) = (root(&mut parent, a), root(&mut parent, b));
            if ra != rb {
                parent[ra] = rb;
                count -= 1;
            }
        }
        count
    }

    proptest! {
        #[test]
        fn undirected_cycle_iff_more_edges_than_a_forest((n, edges) in edge_list(12, 16)) {
            let graph = UndirectedGraph::from_edges(n, edges.iter().copied()).unwrap();
            let forest_edges = n - components(n, &edges);
            prop_assert_eq!(graph.has_cycle().unwrap(), edges.len() > forest_edges);
        }

        #[test]
        fn directed_detector_agrees_with_kahn((n, edges) in edge_list(10, 14)) {
            let graph = DirectedGraph::from_edges(n, edges).unwrap();
            prop_assert_eq!(
                graph.has_cycle().unwrap(),
                graph.topological_order_checked().is_err()
            );
        }

        #[test]
        fn found_cycle_is_closed((n, edges) in edge_list(10, 14)) {
            let graph = DirectedGraph::from_edges(n, edges).unwrap();
            if let Some(cycle) = graph.find_cycle_directed().unwrap() {
                for (a, b) in cycle.iter().zip(cycle.iter().cycle().skip(1)) {
                    prop_assert!(graph.has_edge(a.0, b.0).unwrap());
                }
            }
        }

        #[test]
        fn dags_are_acyclic((n, edges) in dag_edge_list(12, 20)) {
            let graph = DirectedGraph::from_edges(n, edges).unwrap();
            prop_assert!(!graph.has_cycle().unwrap());
        }
    }
}
