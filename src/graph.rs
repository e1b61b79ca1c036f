use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;

use itertools::Itertools;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

use crate::adjacency::Adjacency;
use crate::define_indexed_vec;

pub mod builder;

define_indexed_vec!(
    /// Dense identifier of a vertex slot, always in `0..vertex_count` of the
    /// graph it came from.
    pub struct VertexId;

    /// A vector indexed by [`VertexId`].
    pub struct VertexVec;
);

/// How an edge is stored.
///
/// Undirected graphs record `u - v` in both `u`'s and `v`'s adjacency,
/// directed graphs record `u -> v` in `u`'s only.
pub trait Orientation: Copy + Default + Debug + 'static {
    const SYMMETRIC: bool;
    const NAME: &'static str;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Directed;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl Orientation for Directed {
    const SYMMETRIC: bool = false;
    const NAME: &'static str = "directed";
}

impl Orientation for Undirected {
    const SYMMETRIC: bool = true;
    const NAME: &'static str = "undirected";
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex count must be a non-negative integer, got {count}")]
    InvalidArgument { count: i64 },
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },
}

/// An adjacency-list graph with a fixed number of vertex slots.
///
/// Every vertex `0..vertex_count` always has an adjacency sequence, possibly
/// empty. Edges keep their insertion order; self-loops and parallel edges are
/// stored like any other edge.
///
/// All mutators check every vertex id before touching the graph, so an
/// [`GraphError::OutOfRange`] leaves it exactly as it was. They return
/// `&mut Self` for chaining:
///
/// ```
/// use adjwalk::graph::UndirectedGraph;
///
/// let mut g = UndirectedGraph::new(4);
/// g.add_edge(0, 1)?.add_edge(1, 2)?.add_edge(2, 0)?;
/// assert_eq!(g.edge_count(), 3);
/// assert!(g.add_edge(0, 4).is_err());
/// # Ok::<(), adjwalk::graph::GraphError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Graph<O: Orientation = Undirected> {
    adjacency: VertexVec<Adjacency>,
    orientation: PhantomData<O>,
}

pub type DirectedGraph = Graph<Directed>;
pub type UndirectedGraph = Graph<Undirected>;

impl<O: Orientation> Graph<O> {
    /// A graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Graph {
            adjacency: VertexVec::from_fn(vertex_count, |_| Adjacency::new()),
            orientation: PhantomData,
        }
    }

    /// Like [`Graph::new`], for counts that arrive as signed integers.
    pub fn try_new(vertex_count: i64) -> Result<Self, GraphError> {
        let count = usize::try_from(vertex_count).map_err(|_| GraphError::InvalidArgument {
            count: vertex_count,
        })?;
        Ok(Self::new(count))
    }

    /// Builds a graph from an edge list, rejecting the whole list if any
    /// endpoint is out of range.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        builder::GraphBuilder::new(vertex_count).edges(edges).build()
    }

    /// A graph on `vertices` vertices with `edges` edges whose endpoints are
    /// drawn uniformly (self-loops and repeats included). Same seed, same graph.
    pub fn random(vertices: usize, edges: usize, seed: u64) -> Self {
        let mut graph = Self::new(vertices);
        if vertices == 0 {
            return graph;
        }
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..edges {
            let source = VertexId(rng.gen_range(0..vertices));
            let destination = VertexId(rng.gen_range(0..vertices));
            graph.link(source, destination);
        }
        graph
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored edges. An undirected edge counts once even though it
    /// is recorded at both endpoints.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(|(_, a)| a.len()).sum();
        if O::SYMMETRIC {
            entries / 2
        } else {
            entries
        }
    }

    pub fn is_directed(&self) -> bool {
        !O::SYMMETRIC
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + Clone {
        self.adjacency.ids()
    }

    /// Checks that `vertex` names one of this graph's slots.
    pub fn vertex(&self, vertex: usize) -> Result<VertexId, GraphError> {
        let id = VertexId(vertex);
        if self.adjacency.contains_id(id) {
            Ok(id)
        } else {
            Err(GraphError::OutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    pub fn neighbors(&self, vertex: usize) -> Result<&Adjacency, GraphError> {
        let id = self.vertex(vertex)?;
        Ok(&self.adjacency[id])
    }

    /// Number of adjacency entries of `vertex`. An undirected self-loop counts twice.
    pub fn degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.neighbors(vertex).map(Adjacency::len)
    }

    pub fn has_edge(&self, source: usize, destination: usize) -> Result<bool, GraphError> {
        let destination = self.vertex(destination)?;
        Ok(self.neighbors(source)?.contains(destination))
    }

    /// Resets `vertex`'s adjacency to empty. The slot itself always exists, so
    /// this is an idempotent reset rather than an insertion.
    ///
    /// Edges pointing *to* `vertex` from elsewhere are left alone; use
    /// [`Graph::remove_vertex`] to detach an undirected vertex completely.
    pub fn add_vertex(&mut self, vertex: usize) -> Result<&mut Self, GraphError> {
        let id = self.vertex(vertex)?;
        self.adjacency[id].clear();
        debug!(vertex = id.0, "reset vertex");
        Ok(self)
    }

    pub fn add_edge(&mut self, source: usize, destination: usize) -> Result<&mut Self, GraphError> {
        let source = self.vertex(source)?;
        let destination = self.vertex(destination)?;
        self.link(source, destination);
        debug!(
            source = source.0,
            destination = destination.0,
            orientation = O::NAME,
            "added edge"
        );
        Ok(self)
    }

    /// Removes one stored copy of the edge. Removing an edge that is not
    /// there changes nothing.
    pub fn remove_edge(
        &mut self,
        source: usize,
        destination: usize,
    ) -> Result<&mut Self, GraphError> {
        let source = self.vertex(source)?;
        let destination = self.vertex(destination)?;
        let removed = self.adjacency[source].remove_value(destination);
        if O::SYMMETRIC {
            self.adjacency[destination].remove_value(source);
        }
        debug!(
            source = source.0,
            destination = destination.0,
            removed,
            "removed edge"
        );
        Ok(self)
    }

    /// Clears `vertex`'s own adjacency. On an undirected graph the first
    /// occurrence of `vertex` is also removed from every other adjacency.
    ///
    /// On a directed graph only the outgoing edges go: incoming edges from
    /// other vertices stay in place and still point at the slot.
    pub fn remove_vertex(&mut self, vertex: usize) -> Result<&mut Self, GraphError> {
        let id = self.vertex(vertex)?;
        self.adjacency[id].clear();
        if O::SYMMETRIC {
            for (_, adjacency) in self.adjacency.iter_mut() {
                adjacency.remove_value(id);
            }
        }
        debug!(vertex = id.0, orientation = O::NAME, "removed vertex");
        Ok(self)
    }

    pub(crate) fn adjacency(&self, vertex: VertexId) -> &Adjacency {
        &self.adjacency[vertex]
    }

    fn link(&mut self, source: VertexId, destination: VertexId) {
        self.adjacency[source].append(destination);
        if O::SYMMETRIC {
            self.adjacency[destination].append(source);
        }
    }
}

impl Graph<Directed> {
    /// The same edges stored both ways, in the order the arrows are found
    /// scanning sources by id.
    pub fn to_undirected(&self) -> Graph<Undirected> {
        let mut undirected = Graph::new(self.vertex_count());
        for (source, adjacency) in &self.adjacency {
            for destination in adjacency {
                undirected.link(source, destination);
            }
        }
        undirected
    }
}

impl<O: Orientation> Display for Graph<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, adjacency) in &self.adjacency {
            writeln!(f, "{vertex}: {}", adjacency.iter().join(" -> "))?;
        }
        Ok(())
    }
}

impl<O: Orientation> Debug for Graph<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("orientation", &O::NAME)
            .field("adjacency", &self.adjacency.raw())
            .finish()
    }
}

impl<O: Orientation> TryFrom<i64> for Graph<O> {
    type Error = GraphError;

    fn try_from(vertex_count: i64) -> Result<Self, Self::Error> {
        Self::try_new(vertex_count)
    }
}
