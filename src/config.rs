//! Knobs for the recursive queries.

/// Deepest recursion the recursive queries allow unless told otherwise.
pub const DEFAULT_RECURSION_LIMIT: usize = 10_000;

/// Settings shared by every recursive query (recursive DFS, both cycle
/// detectors and the DFS topological order).
///
/// ```
/// use adjwalk::config::TraversalConfig;
///
/// let config = TraversalConfig::default().with_recursion_limit(64);
/// assert_eq!(config.recursion_limit, 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Maximum number of nested frames. A query that would descend further
    /// fails with `TraversalError::RecursionLimitExceeded` instead.
    pub recursion_limit: usize,
}

impl TraversalConfig {
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// No limit besides available memory; frames live on the heap.
    pub fn unbounded() -> Self {
        TraversalConfig {
            recursion_limit: usize::MAX,
        }
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        TraversalConfig {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}
