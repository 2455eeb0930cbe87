//! Output generation: DOT, SVG through Graphviz, or the graph as JSON.

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Instant;

use clap::ValueEnum;
use tracing::info;

use symgraph_core::Graph;
use symgraph_dot::{DotOptions, LayoutEngine, render_graph_with_options, render_svg};
use symgraph_error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Graphviz DOT source
    #[default]
    Dot,
    /// SVG laid out by the Graphviz `dot` command
    Svg,
    /// The assembled graph as JSON
    Json,
}

/// Lays out DOT by piping it through a Graphviz executable.
#[derive(Debug, Clone)]
pub struct GraphvizCommand {
    program: String,
}

impl GraphvizCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GraphvizCommand {
    fn default() -> Self {
        Self::new("dot")
    }
}

impl LayoutEngine for GraphvizCommand {
    fn render_svg(&self, dot: &str) -> Result<String> {
        let failed = |msg: String| {
            Error::render_failed(msg)
                .with_operation("GraphvizCommand::render_svg")
                .with_context("program", self.program.clone())
        };

        let mut child = Command::new(&self.program)
            .arg("-Tsvg")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| failed(format!("failed to start: {err}")).set_source(err))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(dot.as_bytes())
                .map_err(|err| failed(format!("failed to write input: {err}")).set_source(err))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|err| failed(format!("failed to wait: {err}")).set_source(err))?;
        if !output.status.success() {
            return Err(failed(format!(
                "exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        String::from_utf8(output.stdout)
            .map_err(|err| failed("output is not UTF-8".to_string()).set_source(err))
    }
}

/// Produce the requested output for `graph`.
pub fn generate_output(
    graph: &Graph,
    format: OutputFormat,
    options: &DotOptions,
    engine: &impl LayoutEngine,
) -> Result<String> {
    let render_start = Instant::now();
    let result = match format {
        OutputFormat::Dot => render_graph_with_options(graph, options),
        OutputFormat::Svg => render_svg(graph, options, engine)?,
        OutputFormat::Json => serde_json::to_string_pretty(graph).map_err(|err| {
            Error::unexpected(format!("failed to serialize graph: {err}"))
                .with_operation("generate_output")
                .set_source(err)
        })?,
    };
    info!(
        "Graph rendering ({:?}): {:.2}s",
        format,
        render_start.elapsed().as_secs_f64()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symgraph_error::ErrorKind;

    struct Fixed;

    impl LayoutEngine for Fixed {
        fn render_svg(&self, _dot: &str) -> Result<String> {
            Ok("<svg/>".to_string())
        }
    }

    #[test]
    fn test_formats() {
        let graph = Graph::default();
        let options = DotOptions::default();
        let dot = generate_output(&graph, OutputFormat::Dot, &options, &Fixed).unwrap();
        assert!(dot.starts_with("digraph {"));
        let svg = generate_output(&graph, OutputFormat::Svg, &options, &Fixed).unwrap();
        assert_eq!(svg, "<svg/>");
        let json = generate_output(&graph, OutputFormat::Json, &options, &Fixed).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["nodes"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_missing_graphviz_is_render_error() {
        let engine = GraphvizCommand::new("symgraph-no-such-layout-program");
        let err = engine.render_svg("digraph {}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RenderFailed);
        assert_eq!(
            err.context_value("program"),
            Some("symgraph-no-such-layout-program")
        );
    }
}
