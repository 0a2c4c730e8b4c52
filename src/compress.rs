//! Budgeted path compression.
//!
//! A node with a single outgoing edge whose target still has children can
//! absorb that target: the target's edges move up to the node, each label
//! prefixed with the label of the absorbed edge. Repeating this turns
//! single-child chains into multi-character edges, radix-tree style, without
//! changing which root-to-leaf strings the trie spells or the passage count
//! of any node that survives.

use crate::graph::StatementGraph;
use crate::node::{Edge, Label};
use crate::stats::CompressionStats;
use slotmap::DefaultKey;
use tracing::{debug, trace};

impl StatementGraph {
    /// Performs at most `budget` merges, depth first from the root.
    ///
    /// At each node merges repeat while the node stays compressible, then the
    /// children are visited in ascending label order. Once the budget runs out
    /// the remaining subtrees are left as they are. Unused budget is reported
    /// in the returned stats.
    pub fn compress(&mut self, budget: usize) -> CompressionStats {
        let nodes_before = self.node_count();
        let remaining = self.compress_from(self.root, budget);
        if remaining < budget {
            self.compressed = true;
        }

        let stats = CompressionStats {
            budget,
            merges: budget - remaining,
            remaining,
            nodes_before,
            nodes_after: self.node_count(),
        };
        debug!(
            budget,
            merges = stats.merges,
            remaining,
            nodes = stats.nodes_after,
            "compression finished"
        );
        stats
    }

    /// Compresses the subtree at `key` and returns the budget left over.
    fn compress_from(&mut self, key: DefaultKey, mut budget: usize) -> usize {
        while budget > 0 && self.is_compressible(key) {
            self.merge(key);
            budget -= 1;
        }
        if budget == 0 {
            return 0;
        }

        // Visiting order decides which subtrees are compressed when the
        // budget runs out part way.
        let node = &self.nodes[key];
        let mut edges: Vec<(&Label, DefaultKey)> = node
            .children
            .iter()
            .map(|edge| (&edge.label, edge.target))
            .collect();
        edges.sort_by(|a, b| a.0.cmp(b.0));
        let targets: Vec<DefaultKey> = edges.into_iter().map(|(_, target)| target).collect();

        for target in targets {
            budget = self.compress_from(target, budget);
            if budget == 0 {
                break;
            }
        }
        budget
    }

    /// Returns true if the node at `key` has exactly one edge and that edge
    /// leads to a node that is not a leaf.
    pub fn is_compressible(&self, key: DefaultKey) -> bool {
        match self.nodes.get(key).map(|node| node.children.as_slice()) {
            Some([only]) => !self.nodes[only.target].is_leaf(),
            _ => false,
        }
    }

    /// Number of merges a pass with unlimited budget would perform.
    ///
    /// Every non-leaf node that is the only child of its parent gets absorbed
    /// exactly once, and a merge never creates a new such node.
    pub fn available_merges(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self.root];

        while let Some(key) = stack.pop() {
            let node = &self.nodes[key];
            if let [only] = node.children.as_slice() {
                if !self.nodes[only.target].is_leaf() {
                    count += 1;
                }
            }
            stack.extend(node.children.iter().map(|edge| edge.target));
        }

        count
    }

    /// Absorbs the single child of a compressible node.
    fn merge(&mut self, key: DefaultKey) {
        let edge = self.nodes[key]
            .children
            .pop()
            .expect("compressible node should have one edge");
        debug_assert!(self.nodes[key].children.is_empty());

        let absorbed = self.remove_node(edge.target);
        trace!(
            node = self.nodes[key].id,
            absorbed = absorbed.id,
            label = %edge.label,
            "merging single-child chain"
        );

        self.nodes[key].children = absorbed
            .children
            .into_iter()
            .map(|child| Edge::new(edge.label.concat(&child.label), child.target))
            .collect();
    }
}
