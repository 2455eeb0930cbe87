//! Renderable graph value model.
//!
//! A [`Graph`] is built once by the assembler and then only read by
//! renderers. Trees here own their children outright; cells refer to their
//! file by [`FileId`] and subgraphs list node ids, nothing points back up.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::symbol::Position;

/// Identifier of a registered file, dense from 1 in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FileId(pub u32);

impl FileId {
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `(file, line, character)` of a symbol's selection start.
///
/// The set of identities collected from all rendered cells decides which
/// edges survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CellIdentity {
    pub file_id: FileId,
    pub line: u32,
    pub character: u32,
}

impl CellIdentity {
    pub fn new(file_id: FileId, line: u32, character: u32) -> Self {
        Self {
            file_id,
            line,
            character,
        }
    }

    pub fn at(file_id: FileId, position: Position) -> Self {
        Self::new(file_id, position.line, position.character)
    }

    /// Port name of the cell inside its table, `line_character`.
    pub fn port(&self) -> String {
        format!("{}_{}", self.line, self.character)
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.character)
    }
}

impl fmt::Display for CellIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}_{}", self.file_id, self.line, self.character)
    }
}

/// Semantic tags carried by cells and edges.
///
/// Declaration order is the order tags are listed in rendered attributes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    Display,
    IntoStaticStr,
    Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CssClass {
    Cell,
    Module,
    Interface,
    Type,
    Function,
    Method,
    Constructor,
    Property,
    Clickable,
    Highlight,
    Impl,
    Graph,
}

impl CssClass {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Join class names with `sep`, in declaration order.
pub fn join_classes(classes: &BTreeSet<CssClass>, sep: &str) -> String {
    classes
        .iter()
        .map(CssClass::as_str)
        .collect::<Vec<_>>()
        .join(sep)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Style {
    pub classes: BTreeSet<CssClass>,
    pub rounded: bool,
    pub border: Option<u8>,
    pub icon: Option<char>,
}

impl Style {
    /// The style every symbol starts from: just the `cell` tag.
    pub fn cell() -> Self {
        Self {
            classes: BTreeSet::from([CssClass::Cell]),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: CssClass) -> Self {
        self.classes.insert(class);
        self
    }

    pub fn with_classes(mut self, classes: &[CssClass]) -> Self {
        self.classes.extend(classes.iter().copied());
        self
    }

    pub fn rounded(mut self) -> Self {
        self.rounded = true;
        self
    }

    pub fn with_border(mut self, border: u8) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn has_class(&self, class: CssClass) -> bool {
        self.classes.contains(&class)
    }
}

/// One rendered symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub title: String,
    pub style: Style,
    pub children: Vec<Cell>,
    pub identity: CellIdentity,
}

impl Cell {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Visit this cell and all descendants, parents first.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Cell)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Cell)) {
        f(self);
        for child in &mut self.children {
            child.walk_mut(f);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSection {
    pub id: String,
    pub label: String,
    pub cells: Vec<Cell>,
}

/// The node drawn for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableNode {
    pub id: FileId,
    pub label: String,
    pub sections: Vec<TableSection>,
}

impl TableNode {
    /// A table with the single `Main` section holding `cells`.
    pub fn new(id: FileId, label: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            id,
            label: label.into(),
            sections: vec![TableSection {
                id: format!("{}_main", id),
                label: "Main".to_string(),
                cells,
            }],
        }
    }

    /// Top-level cells across all sections.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.sections.iter().flat_map(|section| section.cells.iter())
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.sections
            .iter_mut()
            .flat_map(|section| section.cells.iter_mut())
    }

    /// Every cell at any depth, parents first.
    pub fn all_cells(&self) -> Vec<&Cell> {
        let mut out = Vec::new();
        for cell in self.cells() {
            cell.walk(&mut |c| out.push(c));
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: CellIdentity,
    pub to: CellIdentity,
    pub classes: BTreeSet<CssClass>,
}

impl Edge {
    /// A plain call edge, no classes.
    pub fn call(from: CellIdentity, to: CellIdentity) -> Self {
        Self {
            from,
            to,
            classes: BTreeSet::new(),
        }
    }

    /// An implementer-to-interface edge, tagged `impl`.
    pub fn implementation(from: CellIdentity, to: CellIdentity) -> Self {
        Self {
            from,
            to,
            classes: BTreeSet::from([CssClass::Impl]),
        }
    }
}

/// A directory cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subgraph {
    pub title: String,
    pub nodes: Vec<FileId>,
    pub subgraphs: Vec<Subgraph>,
}

impl Subgraph {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: Vec::new(),
            subgraphs: Vec::new(),
        }
    }

    pub fn child(&self, title: &str) -> Option<&Subgraph> {
        self.subgraphs.iter().find(|s| s.title == title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Graph {
    pub nodes: Vec<TableNode>,
    pub edges: Vec<Edge>,
    pub subgraphs: Vec<Subgraph>,
}

impl Graph {
    pub fn node(&self, id: FileId) -> Option<&TableNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Identities of every cell of every node.
    pub fn cell_identities(&self) -> HashSet<CellIdentity> {
        let mut ids = HashSet::new();
        for node in &self.nodes {
            for cell in node.all_cells() {
                ids.insert(cell.identity);
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(title: &str, line: u32, children: Vec<Cell>) -> Cell {
        Cell {
            title: title.to_string(),
            style: Style::cell(),
            children,
            identity: CellIdentity::new(FileId(1), line, 0),
        }
    }

    #[test]
    fn test_identity_port_and_display() {
        let id = CellIdentity::new(FileId(3), 12, 4);
        assert_eq!(id.port(), "12_4");
        assert_eq!(id.to_string(), "3:12_4");
    }

    #[test]
    fn test_class_join_follows_declaration_order() {
        let style = Style::cell()
            .with_class(CssClass::Clickable)
            .with_class(CssClass::Function);
        assert_eq!(join_classes(&style.classes, "."), "cell.function.clickable");
        assert_eq!(join_classes(&BTreeSet::new(), " "), "");
    }

    #[test]
    fn test_all_cells_walks_depth_first() {
        let table = TableNode::new(
            FileId(1),
            "main",
            vec![
                cell("a", 1, vec![cell("a1", 2, vec![cell("a1x", 3, vec![])])]),
                cell("b", 4, vec![]),
            ],
        );
        let titles: Vec<_> = table.all_cells().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "a1", "a1x", "b"]);
        assert_eq!(table.sections[0].id, "1_main");
    }

    #[test]
    fn test_graph_cell_identities() {
        let graph = Graph {
            nodes: vec![TableNode::new(
                FileId(1),
                "main",
                vec![cell("a", 1, vec![cell("a1", 2, vec![])])],
            )],
            ..Graph::default()
        };
        let ids = graph.cell_identities();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&CellIdentity::new(FileId(1), 2, 0)));
    }
}
