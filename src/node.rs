use slotmap::DefaultKey;
use std::fmt;

/// Character sequence carried by an edge.
///
/// Exactly one character after training; compression concatenates labels
/// along merged chains. Labels are never empty. Ordering is lexicographic by
/// code point, with a proper prefix sorting first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(Vec<char>);

impl Label {
    pub(crate) fn single(c: char) -> Self {
        Label(vec![c])
    }

    /// Concatenates `self` and `suffix` into a new label.
    pub(crate) fn concat(&self, suffix: &Label) -> Self {
        let mut chars = Vec::with_capacity(self.0.len() + suffix.0.len());
        chars.extend_from_slice(&self.0);
        chars.extend_from_slice(&suffix.0);
        Label(chars)
    }

    /// Number of characters in the label.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for labels stored in a graph.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Character at offset `pos`, if the label is long enough.
    #[inline]
    pub fn at(&self, pos: usize) -> Option<char> {
        self.0.get(pos).copied()
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    /// Characters from offset `pos` onwards (empty past the end).
    pub fn tail(&self, pos: usize) -> &[char] {
        self.0.get(pos..).unwrap_or(&[])
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label(s.chars().collect())
    }
}

/// An outgoing edge, exclusively owning its target node.
#[derive(Debug, Clone)]
pub struct Edge {
    pub(crate) label: Label,
    pub(crate) target: DefaultKey,
}

impl Edge {
    pub(crate) fn new(label: Label, target: DefaultKey) -> Self {
        Self { label, target }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Arena key of the child node.
    pub fn target(&self) -> DefaultKey {
        self.target
    }
}

/// A trie node.
///
/// `passage_count` records how many statement traversals passed through or
/// terminated at this node during training.
#[derive(Debug)]
pub struct Node {
    pub(crate) id: u32,
    pub(crate) passage_count: u64,
    pub(crate) children: Vec<Edge>,
}

impl Node {
    pub(crate) fn new(id: u32) -> Self {
        Self {
            id,
            passage_count: 0,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn passage_count(&self) -> u64 {
        self.passage_count
    }

    /// Outgoing edges in insertion order.
    pub fn children(&self) -> &[Edge] {
        &self.children
    }

    /// A node with no outgoing edges marks the end of a trained statement.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Finds the first edge whose label has `c` at offset `pos`.
    #[inline]
    pub fn find_edge(&self, c: char, pos: usize) -> Option<&Edge> {
        self.children.iter().find(|edge| edge.label.at(pos) == Some(c))
    }
}
