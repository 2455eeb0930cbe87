//! Graphviz DOT rendering for symgraph.
//!
//! # Module Structure
//!
//! - [`dot`]: DOT builder and escaping helpers
//! - [`table`]: HTML-like table labels for file nodes
//!
//! Rendering is a pure function of the [`Graph`]: nodes, clusters and edges
//! are written in the order the graph holds them, nothing is sorted.
//! Turning DOT into an image is left to a [`LayoutEngine`].

pub mod dot;
pub mod table;

use serde::Deserialize;
use tracing::debug;

use symgraph_core::{Edge, Graph, Subgraph, graph::join_classes};
use symgraph_error::Result;

pub use dot::{DotBuilder, escape_html, quoted};

const CLUSTER_STYLE: &[(&str, &str)] = &[
    ("style", "rounded"),
    ("bgcolor", "#f0f0f0"),
    ("color", "#666666"),
    ("fontcolor", "#333333"),
    ("margin", "16"),
];

/// Graph-wide layout attributes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DotOptions {
    pub rankdir: String,
    pub ranksep: f64,
    pub fontname: String,
    pub fontsize: u32,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            rankdir: "LR".to_string(),
            ranksep: 2.0,
            fontname: "Arial".to_string(),
            fontsize: 16,
        }
    }
}

/// Lays out DOT source into SVG.
pub trait LayoutEngine {
    fn render_svg(&self, dot: &str) -> Result<String>;
}

/// Render `graph` to DOT with default options.
pub fn render_graph(graph: &Graph) -> String {
    render_graph_with_options(graph, &DotOptions::default())
}

pub fn render_graph_with_options(graph: &Graph, options: &DotOptions) -> String {
    let mut dot = DotBuilder::new();

    let fontname = quoted(&escape_html(&options.fontname));
    dot.defaults(
        "graph",
        &[
            ("rankdir", quoted(&escape_html(&options.rankdir))),
            ("ranksep", format!("{:?}", options.ranksep)),
            ("fontname", fontname.clone()),
            ("compound", "true".to_string()),
            ("newrank", "true".to_string()),
        ],
    );
    dot.defaults(
        "node",
        &[
            ("fontsize", quoted(&options.fontsize.to_string())),
            ("fontname", fontname),
            ("shape", quoted("plaintext")),
            ("style", quoted("rounded, filled")),
        ],
    );
    dot.defaults("edge", &[("label", quoted(" "))]);

    if !graph.nodes.is_empty() {
        dot.blank();
    }
    for node in &graph.nodes {
        let label = table::render_table(node, dot.indent() + 1);
        dot.html_node(&node.id.to_string(), &label);
    }

    if !graph.subgraphs.is_empty() {
        dot.blank();
    }
    for subgraph in &graph.subgraphs {
        render_subgraph(&mut dot, subgraph);
    }

    if !graph.edges.is_empty() {
        dot.blank();
    }
    for edge in &graph.edges {
        render_edge(&mut dot, edge);
    }

    debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        subgraphs = graph.subgraphs.len(),
        "rendered dot"
    );
    dot.build()
}

fn render_subgraph(dot: &mut DotBuilder, subgraph: &Subgraph) {
    dot.start_cluster(&subgraph.title, CLUSTER_STYLE);
    for id in &subgraph.nodes {
        dot.node_ref(&id.to_string());
    }
    for child in &subgraph.subgraphs {
        render_subgraph(dot, child);
    }
    dot.end_cluster();
}

fn render_edge(dot: &mut DotBuilder, edge: &Edge) {
    let from_file = edge.from.file_id.to_string();
    let to_file = edge.to.file_id.to_string();
    let from_port = edge.from.port();
    let to_port = edge.to.port();

    let mut attrs = vec![("id", format!("{} -> {}", edge.from, edge.to))];
    if !edge.classes.is_empty() {
        attrs.push(("class", join_classes(&edge.classes, " ")));
    }
    dot.port_edge((&from_file, &from_port), (&to_file, &to_port), &attrs);
}

/// Render `graph` and lay it out with `engine`.
pub fn render_svg(graph: &Graph, options: &DotOptions, engine: &impl LayoutEngine) -> Result<String> {
    let source = render_graph_with_options(graph, options);
    engine.render_svg(&source)
}
