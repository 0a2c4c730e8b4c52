use crate::graph::StatementGraph;
use slotmap::DefaultKey;

/// Iterator over the root-to-leaf strings spelled by the trie.
///
/// Paths are produced depth first in child insertion order. Uses an explicit
/// stack, so deep tries do not grow the call stack.
pub struct PathIter<'a> {
    graph: &'a StatementGraph,
    stack: Vec<(DefaultKey, String)>,
}

impl<'a> PathIter<'a> {
    pub(crate) fn new(graph: &'a StatementGraph) -> Self {
        let stack = if graph.is_empty() {
            Vec::new()
        } else {
            vec![(graph.root, String::new())]
        };
        Self { graph, stack }
    }
}

impl Iterator for PathIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, prefix)) = self.stack.pop() {
            let node = &self.graph.nodes[key];
            if node.is_leaf() {
                return Some(prefix);
            }

            // Reverse so the first child is popped first.
            for edge in node.children.iter().rev() {
                let mut path = prefix.clone();
                path.extend(edge.label.chars());
                self.stack.push((edge.target, path));
            }
        }
        None
    }
}

impl StatementGraph {
    /// Returns an iterator over every root-to-leaf string.
    pub fn paths(&self) -> PathIter<'_> {
        PathIter::new(self)
    }

    /// Returns true if `statement` spells a complete root-to-leaf path.
    pub fn accepts(&self, statement: &str) -> bool {
        let mut node = self.root;
        let mut pos = 0;

        for c in statement.chars() {
            let Some(edge) = self.nodes[node].find_edge(c, pos) else {
                return false;
            };
            if pos + 1 < edge.label.len() {
                pos += 1;
            } else {
                node = edge.target;
                pos = 0;
            }
        }

        pos == 0 && !statement.is_empty() && self.nodes[node].is_leaf()
    }
}
