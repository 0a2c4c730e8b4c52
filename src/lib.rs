//! # stategraph - Statement Tries with Budgeted Compression
//!
//! Builds a prefix trie (the statement graph) from short text statements,
//! counting how many statements pass through every node, and uses it to:
//! 1. **Complete prompts**: echo a prefix and extend it greedily along the
//!    most travelled edges, within a fixed output cap
//! 2. **Compress**: merge single-child chains into multi-character edges,
//!    radix-tree style, spending at most a given number of merges
//!
//! ## Example
//!
//! ```
//! use stategraph::StatementGraph;
//!
//! let mut graph = StatementGraph::new();
//! graph.extend(["the cat", "the car", "the car"]);
//!
//! let completion = graph.infer("the c");
//! assert_eq!(completion.text, "the c...ar");
//! assert!(completion.supported);
//!
//! let stats = graph.compress(10);
//! println!("{} merges, {} nodes left", stats.merges, stats.nodes_after);
//!
//! // Completions do not depend on edge granularity.
//! assert_eq!(graph.infer("the c").text, "the c...ar");
//! ```
//!
//! ## Staged protocol
//!
//! [`Session`] drives the line-oriented train / generate / compress stages
//! over any `BufRead` and `Write` pair; the `stategraph` binary wires it to
//! standard input and output.

mod builder;
mod compress;
mod error;
mod frequency;
mod graph;
mod id_gen;
mod iter;
mod node;
mod predict;
mod session;
mod stats;

#[cfg(test)]
mod tests;

pub use error::{SessionError, SessionResult};
pub use graph::StatementGraph;
pub use iter::PathIter;
pub use node::{Edge, Label, Node};
pub use predict::{Inference, Predictor, DEFAULT_MAX_OUTPUT};
pub use session::{Session, SessionReport};
pub use stats::{CompressionStats, GraphStats};
