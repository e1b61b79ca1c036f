use crate::{
    frontier::Queue,
    graph::{Directed, Graph, Undirected, VertexId},
};

use super::traversal::FrontierWalk;

impl Graph<Undirected> {
    /// Vertex sets of the connected components, each in BFS order from its
    /// lowest id. Components are listed by their lowest id.
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let mut walk = FrontierWalk::new(self, Queue::new());
        let mut components = Vec::new();
        for source in self.vertices() {
            if walk.is_visited(source) {
                continue;
            }
            let mut component = Vec::new();
            walk.drain_from(source, &mut component);
            components.push(component);
        }
        components
    }

    pub fn count_connected_components(&self) -> usize {
        self.connected_components().len()
    }
}

impl Graph<Directed> {
    /// Components of the graph with edge directions ignored.
    pub fn weakly_connected_components(&self) -> Vec<Vec<VertexId>> {
        self.to_undirected().connected_components()
    }
}
