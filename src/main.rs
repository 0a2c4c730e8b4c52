//! stategraph CLI entrypoint

use anyhow::{Context, Result};
use clap::Parser;
use stategraph::{Predictor, Session, DEFAULT_MAX_OUTPUT};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stategraph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Train a statement trie, complete prompts and compress it")]
#[command(long_about = r#"
Reads three stages from the input:

  1. training statements, one per line, ended by a blank line
  2. prompts to complete, one per line, ended by a blank line
  3. a merge budget on one line, then prompts to complete again

Logs go to stderr and are controlled by RUST_LOG (default: warn).
"#)]
struct Cli {
    /// Input file (default: standard input)
    input: Option<PathBuf>,

    /// Maximum number of characters in a generated line
    #[arg(long, default_value_t = DEFAULT_MAX_OUTPUT)]
    max_output: usize,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("File \"{}\" not found", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    let output = BufWriter::new(io::stdout().lock());

    let predictor = Predictor::new().with_max_output(cli.max_output);
    let mut session = Session::new(input, output).with_predictor(predictor);
    let report = session.run().context("Session failed")?;

    debug!(
        merges = report.compression.merges,
        remaining = report.compression.remaining,
        reduction = report.compression.reduction_percent(),
        "done"
    );
    Ok(())
}
