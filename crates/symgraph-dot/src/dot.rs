//! DOT format utilities.

use std::fmt::Write;

/// Escape text for use inside an HTML-like label or a quoted DOT string.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// Attribute list in `key = value` form, values written verbatim.
fn write_attr_block(output: &mut String, attrs: &[(&str, String)]) {
    output.push('[');
    for (i, (key, value)) in attrs.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        let _ = write!(output, "{key} = {value}");
    }
    output.push(']');
}

/// Quote a DOT string value.
pub fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
    clusters: usize,
}

impl DotBuilder {
    /// Start an anonymous directed graph.
    pub fn new() -> Self {
        let mut output = String::with_capacity(4096);
        output.push_str("digraph {\n");
        Self {
            output,
            indent: 1,
            clusters: 0,
        }
    }

    /// Add a default attribute statement: `graph`, `node` or `edge`.
    pub fn defaults(&mut self, target: &str, attrs: &[(&str, String)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{target} ");
        write_attr_block(&mut self.output, attrs);
        self.output.push_str(";\n");
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node with an HTML-like label. `label` is written as is and must
    /// already be escaped.
    pub fn html_node(&mut self, id: &str, label: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "\"{id}\" [id=\"{id}\", label=<");
        self.output.push_str(label);
        write_indent(&mut self.output, self.indent);
        self.output.push_str(">];\n");
        self
    }

    /// Reference an already declared node, e.g. inside a cluster.
    pub fn node_ref(&mut self, id: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "\"{id}\";");
        self
    }

    /// Add an edge between two node ports. Attribute values are quoted as is.
    pub fn port_edge(
        &mut self,
        from: (&str, &str),
        to: (&str, &str),
        attrs: &[(&str, String)],
    ) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(
            self.output,
            "{}:\"{}\" -> {}:\"{}\"",
            from.0, from.1, to.0, to.1
        );
        if !attrs.is_empty() {
            self.output.push_str(" [");
            for (i, (key, value)) in attrs.iter().enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                let _ = write!(self.output, "{key}=\"{value}\"");
            }
            self.output.push(']');
        }
        self.output.push_str(";\n");
        self
    }

    /// Start a subgraph cluster. Ids come from a running counter, so clusters
    /// with equal titles stay distinct.
    pub fn start_cluster(&mut self, label: &str, style: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "subgraph \"cluster_{}\" {{", self.clusters);
        self.clusters += 1;
        self.indent += 1;
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "label = \"{}\";", escape_html(label));
        for (key, value) in style {
            write_indent(&mut self.output, self.indent);
            let _ = writeln!(self.output, "{key} = \"{value}\";");
        }
        self
    }

    /// End the current subgraph cluster.
    pub fn end_cluster(&mut self) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        write_indent(&mut self.output, self.indent);
        self.output.push_str("}\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }

    /// Get current indent level.
    pub fn indent(&self) -> usize {
        self.indent
    }
}

impl Default for DotBuilder {
    fn default() -> Self {
        Self::new()
    }
}
