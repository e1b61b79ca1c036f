//! # Adjwalk
//!
//! Adjwalk is a small library for adjacency-list graphs over dense vertex ids
//! and the classic structural queries on them: depth-first and breadth-first
//! traversal, cycle detection for directed and undirected graphs, and
//! topological ordering.
//!
//! Graphs have a fixed number of vertex slots `0..n` chosen at construction.
//! Edges are stored per vertex in insertion order, so every query is a
//! deterministic function of the order in which edges were added.
//!
//! ```
//! use adjwalk::graph::{DirectedGraph, VertexId};
//!
//! let mut graph = DirectedGraph::new(5);
//! graph.add_edge(0, 1)?.add_edge(1, 2)?.add_edge(1, 3)?.add_edge(2, 4)?;
//!
//! assert!(!graph.has_cycle()?);
//! let order = graph.topological_order()?;
//! assert_eq!(order[0], VertexId(0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Queries only read the graph and allocate their own bookkeeping, so any
//! number of them may run against a shared `&Graph`. Mutation requires
//! `&mut Graph` and therefore cannot overlap a running query.

pub mod adjacency;
pub mod algorithms;
pub mod config;
pub mod frontier;
pub mod graph;
pub mod typed_vec;
