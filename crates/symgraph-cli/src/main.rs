use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use symgraph::{OutputFormat, SymgraphOptions, run_main};

#[derive(Parser, Debug)]
#[command(
    name = "symgraph",
    about = "symgraph: call graphs from language-server facts",
    version
)]
pub struct Cli {
    /// JSON fact sheet with file outlines and call hierarchy replies
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: PathBuf,

    /// Language: 'typescript' (or 'ts'), 'go', 'java', 'python' (or 'py'), 'rust' (or 'rs')
    #[arg(long, value_name = "LANG")]
    lang: Option<String>,

    /// Directory that clusters are relative to
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// TOML config with [graph] and [render] sections
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Dot)]
    format: OutputFormat,

    /// Shorthand for --format svg
    #[arg(long, default_value_t = false, conflicts_with = "format")]
    svg: bool,

    /// Graphviz executable used for SVG output
    #[arg(long = "dot-command", value_name = "PROGRAM")]
    dot_command: Option<String>,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = SymgraphOptions {
        input: args.input,
        lang: args.lang,
        root: args.root,
        config: args.config,
        format: if args.svg { OutputFormat::Svg } else { args.format },
        dot_command: args.dot_command,
    };

    let output = run_main(&opts).inspect_err(|e| {
        tracing::error!(error = %e, "execution failed");
    })?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!(path = %path.display(), "output written");
    } else {
        print!("{output}");
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
