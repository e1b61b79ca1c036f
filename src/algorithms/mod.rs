//! # Graph Algorithms
//!
//! Read-only queries over a [`Graph`](crate::graph::Graph). Each query owns
//! its bookkeeping (visited bits, frontiers, on-path bits, output buffers) for
//! the duration of one call and drops it afterwards, so nothing is cached on
//! the graph and repeated calls on an unchanged graph give identical results.
//!
//! ## Available Algorithms
//!
//! ### Traversal
//! - [`traversal`]: iterative DFS, recursive DFS and BFS over every vertex,
//!   plus single-source reachability
//!
//! ### Structure
//! - [`cycle`]: cycle detection with the undirected (parent) and directed
//!   (on-path) back-edge rules
//! - [`topological_order`]: DFS post-order topological sort and a checked
//!   variant using Kahn's algorithm
//! - [`components`]: connected components
//!
//! ## Visit order
//!
//! Whole-graph queries start from vertex `0` and move to the next unvisited
//! id whenever a search runs dry, so disconnected graphs are covered.
//! Neighbours are considered in adjacency order.
//!
//! ## Recursion
//!
//! The depth-first queries that follow the recursive definition (recursive
//! DFS, both cycle detectors, the DFS topological order) keep their call
//! frames on the heap, so graph depth never touches the thread stack. They
//! take a [`TraversalConfig`](crate::config::TraversalConfig) and fail with
//! [`TraversalError::RecursionLimitExceeded`] once the number of nested
//! frames would pass its limit. The frontier-driven queries cannot fail.

use thiserror::Error;

use crate::graph::{Graph, Orientation, VertexId};

pub mod components;
pub mod cycle;
pub mod topological_order;
pub mod traversal;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TraversalError {
    #[error("recursion limit of {limit} frames exceeded when entering vertex {vertex}")]
    RecursionLimitExceeded { limit: usize, vertex: VertexId },
}

/// Frame of a depth-first walk: the vertex and how far through its
/// adjacency the walk has got.
#[derive(Clone, Copy, Debug)]
struct Frame {
    vertex: VertexId,
    cursor: usize,
}

/// What the walk did on one call to [`CallStack::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// The top frame looked at its next stored edge.
    Edge { from: VertexId, to: VertexId },
    /// The top frame ran out of edges and was popped.
    Exit(VertexId),
}

/// Explicit call stack for the depth-first queries.
///
/// Each frame stands for one nested call of the textbook recursion, so the
/// walk sees the same pre-order, post-order and parent links while living
/// on the heap. Frame count is checked against the configured limit on
/// every [`CallStack::enter`].
#[derive(Clone, Debug)]
pub(crate) struct CallStack {
    frames: Vec<Frame>,
    limit: usize,
}

impl CallStack {
    pub(crate) fn new(limit: usize) -> Self {
        CallStack {
            frames: Vec::new(),
            limit,
        }
    }

    /// Pushes a frame for `vertex`. A source is depth 1.
    pub(crate) fn enter(&mut self, vertex: VertexId) -> Result<(), TraversalError> {
        if self.frames.len() >= self.limit {
            tracing::warn!(limit = self.limit, vertex = vertex.0, "recursion limit exceeded");
            return Err(TraversalError::RecursionLimitExceeded {
                limit: self.limit,
                vertex,
            });
        }
        self.frames.push(Frame { vertex, cursor: 0 });
        Ok(())
    }

    /// Advances the top frame by one edge, or pops it when it has none left.
    /// `None` once the stack is empty.
    pub(crate) fn step<O: Orientation>(&mut self, graph: &Graph<O>) -> Option<Step> {
        let frame = self.frames.last_mut()?;
        match graph.adjacency(frame.vertex).as_slice().get(frame.cursor) {
            Some(&to) => {
                frame.cursor += 1;
                Some(Step::Edge {
                    from: frame.vertex,
                    to,
                })
            }
            None => self.frames.pop().map(|frame| Step::Exit(frame.vertex)),
        }
    }

    /// The vertex whose frame sits below the top one.
    pub(crate) fn parent(&self) -> Option<VertexId> {
        let below = self.frames.len().checked_sub(2)?;
        Some(self.frames[below].vertex)
    }
}

#[cfg(test)]
pub(crate) mod test_graphs;
