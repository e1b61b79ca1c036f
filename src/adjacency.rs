//! Ordered neighbour sequences.
//!
//! Every vertex owns one [`Adjacency`]: the ids it points to, in the order the
//! edges were added. Duplicates are kept, so a parallel edge shows up as a
//! repeated id and removing it takes out one copy at a time.

use derive_more::{From, Into};

use crate::graph::VertexId;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, From, Into)]
pub struct Adjacency(Vec<VertexId>);

impl Adjacency {
    pub fn new() -> Self {
        Adjacency(Vec::new())
    }

    pub fn append(&mut self, vertex: VertexId) -> &mut Self {
        self.0.push(vertex);
        self
    }

    /// The neighbour added first, if any.
    pub fn head(&self) -> Option<VertexId> {
        self.0.first().copied()
    }

    /// Removes the first occurrence of `vertex`. Returns whether anything was removed.
    pub fn remove_value(&mut self, vertex: VertexId) -> bool {
        match self.0.iter().position(|v| *v == vertex) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes every occurrence of `vertex`, returning how many were removed.
    pub fn remove_all(&mut self, vertex: VertexId) -> usize {
        let before = self.0.len();
        self.0.retain(|v| *v != vertex);
        before - self.0.len()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.0.contains(&vertex)
    }

    pub fn count(&self, vertex: VertexId) -> usize {
        self.0.iter().filter(|v| **v == vertex).count()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = VertexId> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[VertexId] {
        &self.0
    }
}

impl FromIterator<VertexId> for Adjacency {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        Adjacency(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Adjacency {
    type Item = VertexId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, VertexId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
