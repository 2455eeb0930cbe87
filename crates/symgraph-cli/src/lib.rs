//! symgraph command-line interface.
//!
pub mod config;
pub mod output;
pub mod pipeline;
pub mod profile;

use std::path::PathBuf;

use anyhow::Result;

pub use config::Config;
pub use output::{GraphvizCommand, OutputFormat, generate_output};
pub use pipeline::build_graph;
pub use profile::profile_phase;

/// Options for running symgraph.
#[derive(Debug, Clone, Default)]
pub struct SymgraphOptions {
    pub input: PathBuf,
    pub lang: Option<String>,
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub dot_command: Option<String>,
}

/// Main entry point: fact sheet in, rendered graph out.
pub fn run_main(opts: &SymgraphOptions) -> Result<String> {
    let config = match &opts.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    let sheet = pipeline::load_fact_sheet(&opts.input)?;
    let graph = build_graph(opts, &config, sheet)?;

    let engine = opts
        .dot_command
        .as_deref()
        .map(GraphvizCommand::new)
        .unwrap_or_default();
    Ok(generate_output(&graph, opts.format, &config.render, &engine)?)
}
