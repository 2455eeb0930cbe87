//! HTML-like table labels for file nodes.

use std::fmt::Write;

use symgraph_core::{Cell, FileId, Style, TableNode, graph::join_classes};

use crate::dot::{escape_html, write_indent};

const HREF_PREFIX: &str = "remove_me_url.";

/// Render the label of one file node, each line indented by `level`.
pub fn render_table(node: &TableNode, level: usize) -> String {
    let mut out = String::with_capacity(256);

    line(
        &mut out,
        level,
        r#"<TABLE BORDER="0" CELLBORDER="1" CELLSPACING="8" CELLPADDING="4">"#,
    );
    line(
        &mut out,
        level,
        &format!(
            r#"<TR><TD WIDTH="230" BORDER="0" CELLPADDING="6" HREF="{HREF_PREFIX}title">{}</TD></TR>"#,
            escape_html(&node.label)
        ),
    );
    for cell in node.cells() {
        render_cell(&mut out, node.id, cell, level);
    }
    line(
        &mut out,
        level,
        r#"<TR><TD CELLSPACING="0" HEIGHT="1" WIDTH="1" FIXEDSIZE="TRUE" STYLE="invis"></TD></TR>"#,
    );
    line(&mut out, level, "</TABLE>");
    out
}

fn line(out: &mut String, level: usize, text: &str) {
    write_indent(out, level);
    out.push_str(text);
    out.push('\n');
}

fn render_cell(out: &mut String, file: FileId, cell: &Cell, level: usize) {
    let port = cell.identity.port();
    let title = cell_title(cell);

    if cell.is_leaf() {
        write_indent(out, level);
        let _ = writeln!(
            out,
            r#"<TR><TD PORT="{port}" ID="{file}:{port}"{}{}>{title}</TD></TR>"#,
            shape_attrs(&cell.style),
            href(&cell.style),
        );
        return;
    }

    line(out, level, r#"<TR><TD BORDER="0" CELLPADDING="0">"#);
    write_indent(out, level + 1);
    let _ = writeln!(
        out,
        r#"<TABLE ID="{file}:{port}" CELLSPACING="8" CELLPADDING="4" CELLBORDER="1"{} BGCOLOR="green"{}>"#,
        shape_attrs(&cell.style),
        href(&cell.style),
    );
    line(
        out,
        level + 1,
        &format!(r#"<TR><TD PORT="{port}" BORDER="0">{title}</TD></TR>"#),
    );
    for child in &cell.children {
        render_cell(out, file, child, level + 1);
    }
    line(out, level + 1, "</TABLE>");
    line(out, level, "</TD></TR>");
}

fn cell_title(cell: &Cell) -> String {
    let title = escape_html(&cell.title);
    match cell.style.icon {
        Some(icon) => format!("<B>{}</B>  {title}", escape_html(&icon.to_string())),
        None => title,
    }
}

fn shape_attrs(style: &Style) -> String {
    let mut attrs = String::new();
    if let Some(border) = style.border {
        let _ = write!(attrs, r#" BORDER="{border}""#);
    }
    if style.rounded {
        attrs.push_str(r#" STYLE="ROUNDED""#);
    }
    attrs
}

fn href(style: &Style) -> String {
    if style.classes.is_empty() {
        return String::new();
    }
    format!(
        r#" HREF="{HREF_PREFIX}{}""#,
        join_classes(&style.classes, ".")
    )
}
