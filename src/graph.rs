use crate::id_gen::IdGenerator;
use crate::node::{Edge, Label, Node};
use crate::stats::GraphStats;
use ahash::AHashMap as HashMap;
use slotmap::{DefaultKey, SlotMap};

/// Prefix trie of trained statements.
///
/// Nodes live in a generational arena and are addressed by `DefaultKey`.
/// Every node except the root is owned by exactly one edge, so the structure
/// is a tree and dropping the graph tears it down without any manual walk.
#[derive(Debug)]
pub struct StatementGraph {
    /// Storage for all live nodes
    pub(crate) nodes: SlotMap<DefaultKey, Node>,

    /// Maps node ids to their arena keys
    pub(crate) id_index: HashMap<u32, DefaultKey>,

    id_gen: IdGenerator,

    /// Key of the root node (id 0)
    pub(crate) root: DefaultKey,

    /// Whether a compression pass has merged any edges
    pub(crate) compressed: bool,
}

impl StatementGraph {
    /// Creates a graph holding only the root node.
    pub fn new() -> Self {
        let mut id_gen = IdGenerator::new();
        let mut nodes = SlotMap::new();

        let root_id = id_gen.get();
        debug_assert_eq!(root_id, 0, "Root should have ID 0");
        let root = nodes.insert(Node::new(root_id));

        let mut id_index = HashMap::default();
        id_index.insert(root_id, root);

        Self {
            nodes,
            id_index,
            id_gen,
            root,
            compressed: false,
        }
    }

    /// Arena key of the root node.
    pub fn root(&self) -> DefaultKey {
        self.root
    }

    /// Returns the node stored under `key`, if it is still alive.
    pub fn node(&self, key: DefaultKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Looks a node up by its id.
    ///
    /// ```
    /// use stategraph::StatementGraph;
    ///
    /// let mut graph = StatementGraph::new();
    /// graph.extend(["ab"]);
    /// assert_eq!(graph.node_by_id(2).map(|n| n.passage_count()), Some(2));
    /// assert!(graph.node_by_id(3).is_none());
    /// ```
    pub fn node_by_id(&self, id: u32) -> Option<&Node> {
        self.id_index.get(&id).map(|&key| &self.nodes[key])
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of trained statements (the root's passage count).
    pub fn statements(&self) -> u64 {
        self.nodes[self.root].passage_count
    }

    /// Returns true if nothing has been trained yet.
    pub fn is_empty(&self) -> bool {
        self.nodes[self.root].is_leaf()
    }

    /// Returns true once compression has merged at least one chain.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Returns the statement, frequency and node counters.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            statements: self.statements(),
            total_frequency: self.total_frequency(self.root),
            nodes: self.node_count(),
        }
    }

    /// Creates a fresh node below `parent`, reached through `label`.
    ///
    /// The new edge is appended after the existing children.
    pub(crate) fn add_child(&mut self, parent: DefaultKey, label: Label) -> DefaultKey {
        let id = self.id_gen.get();
        let child = self.nodes.insert(Node::new(id));
        self.id_index.insert(id, child);
        self.nodes[parent].children.push(Edge::new(label, child));
        child
    }

    /// Detaches a node from the arena and returns it.
    ///
    /// The caller is responsible for the edge that pointed to it.
    pub(crate) fn remove_node(&mut self, key: DefaultKey) -> Node {
        let node = self
            .nodes
            .remove(key)
            .expect("removed node should be alive");
        self.id_index.remove(&node.id);
        node
    }
}

impl Default for StatementGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let graph = StatementGraph::new();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.statements(), 0);
        assert!(graph.is_empty());
        assert!(!graph.is_compressed());

        let root = graph.node(graph.root()).expect("Root should exist");
        assert_eq!(root.id(), 0);
        assert!(root.is_leaf());
        assert_eq!(graph.node_by_id(0).map(Node::id), Some(0));
    }

    #[test]
    fn test_add_child_preserves_order() {
        let mut graph = StatementGraph::new();
        let root = graph.root();
        let b = graph.add_child(root, Label::single('b'));
        let a = graph.add_child(root, Label::single('a'));

        let children = graph.node(root).unwrap().children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].target(), b);
        assert_eq!(children[1].target(), a);
        assert_eq!(graph.node(b).unwrap().id(), 1);
        assert_eq!(graph.node(a).unwrap().id(), 2);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_remove_node_updates_index() {
        let mut graph = StatementGraph::new();
        let root = graph.root();
        let child = graph.add_child(root, Label::single('x'));

        let removed = graph.remove_node(child);
        graph.nodes[root].children.clear();
        assert_eq!(removed.id(), 1);
        assert!(graph.node(child).is_none());
        assert!(graph.node_by_id(1).is_none());
        assert_eq!(graph.node_count(), 1);

        // Ids are never reused.
        let next = graph.add_child(root, Label::single('y'));
        assert_eq!(graph.node(next).unwrap().id(), 2);
    }
}
