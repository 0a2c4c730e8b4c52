/// Counters reported after each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of trained statements (root passage count)
    pub statements: u64,
    /// Aggregate passage-weighted frequency of the whole trie
    pub total_frequency: u64,
    /// Number of live nodes, root included
    pub nodes: usize,
}

/// Statistics about one compression pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Merge budget the pass was given
    pub budget: usize,
    /// Merges actually performed
    pub merges: usize,
    /// Budget left unused when the traversal finished
    pub remaining: usize,
    /// Node count before the pass
    pub nodes_before: usize,
    /// Node count after the pass
    pub nodes_after: usize,
}

impl CompressionStats {
    /// Returns the node reduction as a percentage of the node count before the pass.
    pub fn reduction_percent(&self) -> f64 {
        if self.nodes_before == 0 {
            0.0
        } else {
            (self.merges as f64 / self.nodes_before as f64) * 100.0
        }
    }

    /// True if the pass ran out of budget before the traversal finished.
    pub fn exhausted(&self) -> bool {
        self.remaining == 0 && self.budget > 0
    }
}
