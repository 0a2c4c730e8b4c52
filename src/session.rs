//! Staged line-oriented driver.
//!
//! Input is read in three stages: training statements up to a blank line,
//! prompts up to a blank line, then one line holding the compression budget
//! followed by a second run of prompts. Every stage reports to the output in
//! a fixed banner format.

use crate::error::{SessionError, SessionResult};
use crate::graph::StatementGraph;
use crate::predict::Predictor;
use crate::stats::{CompressionStats, GraphStats};
use std::io::{BufRead, Write};
use tracing::debug;

const THE_END: &str = "==THE END============================";
const DIVIDER: &str = "-------------------------------------";

fn stage_banner(stage: u32) -> String {
    format!("==STAGE {stage}============================")
}

/// Counters collected over a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// Graph counters right after training
    pub trained: GraphStats,
    /// Outcome of the compression stage
    pub compression: CompressionStats,
    /// Graph counters after compression
    pub compressed: GraphStats,
}

/// Runs the staged protocol between a reader and a writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    graph: StatementGraph,
    predictor: Predictor,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            graph: StatementGraph::new(),
            predictor: Predictor::new(),
        }
    }

    /// Replaces the completion settings used by the generate stages.
    pub fn with_predictor(mut self, predictor: Predictor) -> Self {
        self.predictor = predictor;
        self
    }

    pub fn graph(&self) -> &StatementGraph {
        &self.graph
    }

    /// Consumes the session and returns the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs all stages and prints their banners and counters.
    pub fn run(&mut self) -> SessionResult<SessionReport> {
        writeln!(self.output, "{}", stage_banner(0))?;
        self.train()?;
        let trained = self.graph.stats();
        writeln!(self.output, "Number of statements: {}", trained.statements)?;
        writeln!(self.output, "Number of characters: {}", trained.total_frequency)?;
        writeln!(self.output, "Number of states: {}", trained.nodes)?;

        writeln!(self.output, "{}", stage_banner(1))?;
        self.generate()?;

        writeln!(self.output, "{}", stage_banner(2))?;
        let compression = self.compress()?;
        let compressed = self.graph.stats();
        writeln!(self.output, "Number of states: {}", compressed.nodes)?;
        writeln!(self.output, "Total frequency: {}", compressed.total_frequency)?;
        writeln!(self.output, "{DIVIDER}")?;
        self.generate()?;

        writeln!(self.output, "{THE_END}")?;
        self.output.flush()?;

        debug!(
            statements = trained.statements,
            nodes_before = trained.nodes,
            nodes_after = compressed.nodes,
            "session finished"
        );
        Ok(SessionReport {
            trained,
            compression,
            compressed,
        })
    }

    /// Trains on statements until a blank line or end of input.
    ///
    /// Returns the number of statements read.
    pub fn train(&mut self) -> SessionResult<usize> {
        let mut count = 0;
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                break;
            }
            self.graph.expand(line.chars());
            count += 1;
        }
        debug!(
            statements = count,
            nodes = self.graph.node_count(),
            "training stage done"
        );
        Ok(count)
    }

    /// Answers prompts until a blank line or end of input, one output line
    /// per prompt.
    ///
    /// Returns the number of prompts answered.
    pub fn generate(&mut self) -> SessionResult<usize> {
        let mut count = 0;
        let mut unsupported = 0;
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                break;
            }
            // An unsupported prompt drops the rest of its line, which is
            // already consumed here.
            let inference = self.predictor.infer(&self.graph, &line);
            if !inference.supported {
                unsupported += 1;
            }
            writeln!(self.output, "{}", inference.text)?;
            count += 1;
        }
        debug!(prompts = count, unsupported, "generate stage done");
        Ok(count)
    }

    /// Reads the merge budget and compresses the graph.
    ///
    /// Leading whitespace and blank lines before the number are skipped, and
    /// so is any whitespace after it. End of input means a budget of zero.
    pub fn compress(&mut self) -> SessionResult<CompressionStats> {
        self.skip_whitespace()?;
        let budget = match self.read_line()? {
            None => 0,
            Some(line) => match line.trim().parse::<usize>() {
                Ok(budget) => budget,
                Err(_) => return Err(SessionError::InvalidBudget { line }),
            },
        };
        self.skip_whitespace()?;

        Ok(self.graph.compress(budget))
    }

    /// Reads one line without its terminator. `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the
    /// stage.
    fn read_line(&mut self) -> SessionResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn skip_whitespace(&mut self) -> SessionResult<()> {
        loop {
            let buf = self.input.fill_buf()?;
            let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            if skip == 0 {
                return Ok(());
            }
            self.input.consume(skip);
        }
    }
}
