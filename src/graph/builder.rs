use std::marker::PhantomData;

use super::{Graph, GraphError, Orientation};

/// Collects an edge list and turns it into a [`Graph`] in one validated step.
///
/// Edges are added to the finished graph in the order they were given, so
/// the resulting adjacency order is the builder's edge order.
#[derive(Clone, Debug)]
pub struct GraphBuilder<O: Orientation> {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
    orientation: PhantomData<O>,
}

impl<O: Orientation> GraphBuilder<O> {
    pub fn new(vertex_count: usize) -> Self {
        GraphBuilder {
            vertex_count,
            edges: Vec::new(),
            orientation: PhantomData,
        }
    }

    pub fn add_edge(&mut self, source: usize, destination: usize) -> &mut Self {
        self.edges.push((source, destination));
        self
    }

    pub fn edges(mut self, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.edges.extend(edges);
        self
    }

    pub fn build(self) -> Result<Graph<O>, GraphError> {
        let mut graph = Graph::new(self.vertex_count);
        for (source, destination) in self.edges {
            graph.add_edge(source, destination)?;
        }
        Ok(graph)
    }
}
