use bitvec::vec::BitVec;
use thiserror::Error;

use crate::{
    config::TraversalConfig,
    frontier::{Frontier, Queue, Stack},
    graph::{Graph, Orientation, VertexId, VertexVec},
};

use super::{CallStack, Step, TraversalError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopoError {
    #[error("Not a DAG: {vertices_processed} vertices processed out of {total_vertices} total vertices. Remaining vertices with non-zero in-degrees: {remaining_vertices:?}")]
    NotDag {
        vertices_processed: usize,
        total_vertices: usize,
        remaining_vertices: Vec<(VertexId, usize)>,
    },
    #[error(transparent)]
    Traversal(#[from] TraversalError),
}

struct PostOrder<'a, O: Orientation> {
    graph: &'a Graph<O>,
    visited: BitVec,
    finished: Stack<VertexId>,
    calls: CallStack,
}

impl<O: Orientation> PostOrder<'_, O> {
    fn enter(&mut self, vertex: VertexId) -> Result<(), TraversalError> {
        self.calls.enter(vertex)?;
        self.visited.set(vertex.0, true);
        Ok(())
    }

    fn walk(&mut self, source: VertexId) -> Result<(), TraversalError> {
        self.enter(source)?;
        while let Some(step) = self.calls.step(self.graph) {
            match step {
                Step::Edge { to, .. } if !self.visited[to.0] => self.enter(to)?,
                Step::Edge { .. } => {}
                Step::Exit(vertex) => self.finished.push(vertex),
            }
        }
        Ok(())
    }
}

impl<O: Orientation> Graph<O> {
    /// Topological order by depth-first post-order: a vertex is pushed once
    /// everything below it is done, and the pushes are read back newest first.
    ///
    /// On an acyclic graph every edge `u -> v` has `u` before `v`. On a cyclic
    /// graph the call still terminates but the order means nothing; use
    /// [`Graph::topological_order_checked`] when that must be detected.
    pub fn topological_order(&self) -> Result<Vec<VertexId>, TraversalError> {
        self.topological_order_with(&TraversalConfig::default())
    }

    pub fn topological_order_with(
        &self,
        config: &TraversalConfig,
    ) -> Result<Vec<VertexId>, TraversalError> {
        let mut post = PostOrder {
            graph: self,
            visited: BitVec::repeat(false, self.vertex_count()),
            finished: Stack::with_capacity(self.vertex_count()),
            calls: CallStack::new(config.recursion_limit),
        };
        for source in self.vertices() {
            if !post.visited[source.0] {
                post.walk(source)?;
            }
        }
        Ok(post.finished.drain().collect())
    }

    /// Kahn's algorithm: repeatedly emits vertices whose remaining in-degree
    /// is zero, lowest id first among those ready at the same time. Fails
    /// with [`TopoError::NotDag`] when some vertices can never become ready.
    pub fn topological_order_checked(&self) -> Result<Vec<VertexId>, TopoError> {
        let mut indeg: VertexVec<usize> = VertexVec::from_fn(self.vertex_count(), |_| 0);
        for vertex in self.vertices() {
            for next in self.adjacency(vertex) {
                indeg[next] += 1;
            }
        }

        let mut ready = Queue::with_capacity(self.vertex_count());
        for (vertex, d) in &indeg {
            if *d == 0 {
                ready.push(vertex);
            }
        }

        let mut order = Vec::with_capacity(self.vertex_count());
        while let Some(vertex) = ready.pop() {
            order.push(vertex);
            for next in self.adjacency(vertex) {
                indeg[next] -= 1;
                if indeg[next] == 0 {
                    ready.push(next);
                }
            }
        }

        if order.len() != indeg.len() {
            let remaining_vertices: Vec<(VertexId, usize)> = indeg
                .iter()
                .filter_map(|(vertex, &degree)| {
                    if degree > 0 {
                        Some((vertex, degree))
                    } else {
                        None
                    }
                })
                .collect();

            return Err(TopoError::NotDag {
                vertices_processed: order.len(),
                total_vertices: indeg.len(),
                remaining_vertices,
            });
        }
        Ok(order)
    }
}
