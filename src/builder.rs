use crate::graph::StatementGraph;
use crate::node::Label;
use tracing::{debug, trace};

impl StatementGraph {
    /// Adds one statement to the trie.
    ///
    /// Every node on the path, including the one the statement ends at, gains
    /// one passage. Missing edges are created on the way, each carrying a
    /// single character. An empty statement leaves the graph untouched.
    ///
    /// Must be called before `compress()` merges any edges.
    pub fn expand<I: IntoIterator<Item = char>>(&mut self, statement: I) {
        assert!(
            !self.compressed,
            "Cannot add statements after compression has merged edges"
        );

        let mut chars = statement.into_iter().peekable();
        if chars.peek().is_none() {
            trace!("ignoring empty statement");
            return;
        }

        let mut current = self.root;
        let mut created = 0usize;
        for c in chars {
            self.nodes[current].passage_count += 1;

            let existing = self.nodes[current].find_edge(c, 0).map(|edge| edge.target);
            current = match existing {
                Some(next) => next,
                None => {
                    created += 1;
                    self.add_child(current, Label::single(c))
                }
            };
        }
        // The terminal traversal counts as a passage too.
        self.nodes[current].passage_count += 1;

        trace!(created, nodes = self.node_count(), "expanded statement");
    }

    /// Adds every statement of `statements` in order.
    pub fn extend<I, S>(&mut self, statements: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.statements();
        for statement in statements {
            self.expand(statement.as_ref().chars());
        }
        debug!(
            trained = self.statements() - before,
            nodes = self.node_count(),
            "trained statements"
        );
    }
}
