use crate::graph::StatementGraph;
use slotmap::DefaultKey;

impl StatementGraph {
    /// Sums the passage counts of every internal node in the subtree at `key`.
    ///
    /// Leaves contribute nothing, so on the root this is the number of
    /// character transitions observed during training. Returns 0 for a key
    /// that is no longer alive.
    pub fn total_frequency(&self, key: DefaultKey) -> u64 {
        let mut total = 0;
        let mut stack = vec![key];

        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };
            if node.is_leaf() {
                continue;
            }
            total += node.passage_count;
            stack.extend(node.children.iter().map(|edge| edge.target));
        }

        total
    }
}
