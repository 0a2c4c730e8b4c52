//! Greedy prefix completion.
//!
//! A prompt is first matched against the trie character by character, which
//! may end part way through a multi-character edge. The completion then
//! follows, at every node, the edge whose target saw the most passages until
//! a leaf is reached or the output cap is hit.

use crate::graph::StatementGraph;
use crate::node::{Edge, Node};
use slotmap::DefaultKey;
use tracing::trace;

/// Default cap on visible characters per inference, ellipsis included.
pub const DEFAULT_MAX_OUTPUT: usize = 37;

const ELLIPSIS: &str = "...";

/// Result of one inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inference {
    /// Echoed prompt, ellipsis and completion, at most `max_output` characters
    pub text: String,
    /// False if the prompt left the trie or ran into the output cap
    pub supported: bool,
}

/// Completion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predictor {
    max_output: usize,
}

impl Predictor {
    pub fn new() -> Self {
        Self {
            max_output: DEFAULT_MAX_OUTPUT,
        }
    }

    /// Sets the output cap. A cap below one is raised to one.
    pub fn with_max_output(mut self, max_output: usize) -> Self {
        self.max_output = max_output.max(1);
        self
    }

    pub fn max_output(&self) -> usize {
        self.max_output
    }

    /// Echoes `prompt`, then completes it along the most travelled edges.
    ///
    /// The prompt is unsupported if one of its characters has no matching
    /// edge (the echo is followed by a truncated ellipsis) or if echoing it
    /// alone fills the output cap (no ellipsis).
    pub fn infer(&self, graph: &StatementGraph, prompt: &str) -> Inference {
        let mut out = Output::new(self.max_output);
        let mut node = graph.root;
        let mut pos = 0;

        for c in prompt.chars() {
            out.push(c);
            if out.budget == 0 {
                trace!(prompt, "output cap reached while echoing prompt");
                return out.finish(false);
            }

            let Some(edge) = graph.nodes[node].find_edge(c, pos) else {
                out.push_truncated(ELLIPSIS.chars());
                trace!(prompt, "prompt not supported");
                return out.finish(false);
            };

            if pos + 1 < edge.label.len() {
                pos += 1;
            } else {
                node = edge.target;
                pos = 0;
            }
        }

        out.push_truncated(ELLIPSIS.chars());
        self.complete(graph, node, pos, &mut out);
        out.finish(true)
    }

    fn complete(
        &self,
        graph: &StatementGraph,
        mut node: DefaultKey,
        mut pos: usize,
        out: &mut Output,
    ) {
        while out.budget > 0 {
            let Some(edge) = best_edge(graph, &graph.nodes[node]) else {
                break;
            };
            node = edge.target;
            out.push_truncated(edge.label.tail(pos).iter().copied());
            pos = 0;
        }
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the edge whose target has the highest passage count, preferring the
/// lexicographically greater label on a tie. `None` for a leaf.
fn best_edge<'a>(graph: &StatementGraph, node: &'a Node) -> Option<&'a Edge> {
    node.children.iter().max_by(|a, b| {
        let count_a = graph.nodes[a.target].passage_count;
        let count_b = graph.nodes[b.target].passage_count;
        count_a.cmp(&count_b).then_with(|| a.label.cmp(&b.label))
    })
}

/// Output text with the number of characters it may still take.
struct Output {
    text: String,
    budget: usize,
}

impl Output {
    fn new(budget: usize) -> Self {
        Self {
            text: String::new(),
            budget,
        }
    }

    fn push(&mut self, c: char) {
        self.text.push(c);
        self.budget -= 1;
    }

    fn push_truncated<I: IntoIterator<Item = char>>(&mut self, chars: I) {
        for c in chars.into_iter().take(self.budget) {
            self.push(c);
        }
    }

    fn finish(self, supported: bool) -> Inference {
        Inference {
            text: self.text,
            supported,
        }
    }
}

impl StatementGraph {
    /// Completes `prompt` with the default output cap.
    pub fn infer(&self, prompt: &str) -> Inference {
        Predictor::new().infer(self, prompt)
    }
}
