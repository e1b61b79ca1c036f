use bitvec::vec::BitVec;
use tracing::trace;

use crate::{
    config::TraversalConfig,
    frontier::{Frontier, Queue, Stack},
    graph::{Graph, GraphError, Orientation, VertexId},
};

use super::{CallStack, Step, TraversalError};

/// Drives an iterative search with a caller-chosen [`Frontier`].
///
/// Vertices are marked visited when they are *discovered* (pushed), not when
/// they are expanded, so nothing is ever pushed twice. The visited bits live
/// across calls to [`FrontierWalk::drain_from`], which is what lets
/// whole-graph searches skip vertices reached from an earlier source.
pub(crate) struct FrontierWalk<'a, O: Orientation, F> {
    graph: &'a Graph<O>,
    frontier: F,
    visited: BitVec,
}

impl<'a, O: Orientation, F: Frontier<VertexId>> FrontierWalk<'a, O, F> {
    pub(crate) fn new(graph: &'a Graph<O>, frontier: F) -> Self {
        FrontierWalk {
            graph,
            frontier,
            visited: BitVec::repeat(false, graph.vertex_count()),
        }
    }

    pub(crate) fn is_visited(&self, vertex: VertexId) -> bool {
        self.visited[vertex.0]
    }

    /// Seeds the frontier with `source` (if unvisited) and expands until it is
    /// empty, appending vertices to `order` as they are popped.
    pub(crate) fn drain_from(&mut self, source: VertexId, order: &mut Vec<VertexId>) {
        if self.is_visited(source) {
            return;
        }
        self.visited.set(source.0, true);
        self.frontier.push(source);

        while let Some(vertex) = self.frontier.pop() {
            trace!(vertex = vertex.0, "expanding");
            order.push(vertex);
            for next in self.graph.adjacency(vertex) {
                if !self.visited[next.0] {
                    self.visited.set(next.0, true);
                    self.frontier.push(next);
                }
            }
        }
    }

    fn drain_all(mut self) -> Vec<VertexId> {
        let mut order = Vec::with_capacity(self.graph.vertex_count());
        for source in self.graph.vertices() {
            self.drain_from(source, &mut order);
        }
        order
    }
}

struct RecursiveDfs<'a, O: Orientation> {
    graph: &'a Graph<O>,
    visited: BitVec,
    order: Vec<VertexId>,
    calls: CallStack,
}

impl<O: Orientation> RecursiveDfs<'_, O> {
    fn enter(&mut self, vertex: VertexId) -> Result<(), TraversalError> {
        self.calls.enter(vertex)?;
        self.visited.set(vertex.0, true);
        self.order.push(vertex);
        Ok(())
    }

    fn walk(&mut self, source: VertexId) -> Result<(), TraversalError> {
        self.enter(source)?;
        while let Some(step) = self.calls.step(self.graph) {
            if let Step::Edge { to, .. } = step {
                if !self.visited[to.0] {
                    self.enter(to)?;
                }
            }
        }
        Ok(())
    }
}

impl<O: Orientation> Graph<O> {
    /// Depth-first order driven by an explicit [`Stack`].
    ///
    /// Neighbours are pushed in adjacency order, so the *last* unvisited
    /// neighbour of a vertex is expanded first. Every vertex appears exactly once.
    ///
    /// ```
    /// use adjwalk::graph::UndirectedGraph;
    ///
    /// let mut g = UndirectedGraph::new(4);
    /// g.add_edge(0, 1)?.add_edge(0, 2)?;
    /// let order: Vec<usize> = g.dfs_iterative().into_iter().map(usize::from).collect();
    /// assert_eq!(order, vec![0, 2, 1, 3]);
    /// # Ok::<(), adjwalk::graph::GraphError>(())
    /// ```
    pub fn dfs_iterative(&self) -> Vec<VertexId> {
        FrontierWalk::new(self, Stack::with_capacity(self.vertex_count())).drain_all()
    }

    /// Breadth-first order driven by a [`Queue`]. Within a component seeded
    /// from its lowest id, every vertex at distance `k` comes before any at
    /// distance `k + 1`.
    pub fn bfs(&self) -> Vec<VertexId> {
        FrontierWalk::new(self, Queue::with_capacity(self.vertex_count())).drain_all()
    }

    /// Pre-order depth-first traversal that descends into each unvisited
    /// neighbour as soon as it is met, using [`TraversalConfig::default`].
    ///
    /// This is the recursive definition run on an explicit call stack, so
    /// deep graphs fail with [`TraversalError::RecursionLimitExceeded`]
    /// rather than exhausting the thread's stack.
    pub fn dfs_recursive(&self) -> Result<Vec<VertexId>, TraversalError> {
        self.dfs_recursive_with(&TraversalConfig::default())
    }

    pub fn dfs_recursive_with(
        &self,
        config: &TraversalConfig,
    ) -> Result<Vec<VertexId>, TraversalError> {
        let mut dfs = RecursiveDfs {
            graph: self,
            visited: BitVec::repeat(false, self.vertex_count()),
            order: Vec::with_capacity(self.vertex_count()),
            calls: CallStack::new(config.recursion_limit),
        };
        for source in self.vertices() {
            if !dfs.visited[source.0] {
                dfs.walk(source)?;
            }
        }
        Ok(dfs.order)
    }

    /// Vertices reachable from `source` (itself included), in iterative DFS order.
    pub fn reachable_from(&self, source: usize) -> Result<Vec<VertexId>, GraphError> {
        let source = self.vertex(source)?;
        let mut order = Vec::new();
        FrontierWalk::new(self, Stack::new()).drain_from(source, &mut order);
        Ok(order)
    }
}
