//! Converts file outlines into cell trees.

use std::collections::HashSet;

use tracing::trace;

use crate::graph::{Cell, CellIdentity, FileId, TableNode};
use crate::lang::LanguageRules;
use crate::symbol::{SourceSymbol, SymbolKind};
use symgraph_error::Result;

/// Build the cell for `symbol` and its retained descendants.
///
/// Children of an interface are all kept so that every member can be the
/// target of an implementation edge. Everywhere else children go through
/// the same `include_symbol` filter as top-level symbols.
pub fn build_cell(rules: &LanguageRules, file_id: FileId, symbol: &SourceSymbol) -> Cell {
    let bypass = symbol.kind == SymbolKind::Interface;
    let children = symbol
        .children
        .iter()
        .filter(|child| bypass || rules.include_symbol(child))
        .map(|child| build_cell(rules, file_id, child))
        .collect();

    Cell {
        title: rules.symbol_title(symbol),
        style: rules.symbol_style(symbol.kind),
        children,
        identity: CellIdentity::at(file_id, symbol.identity_position()),
    }
}

/// Build the table node for one file.
pub fn build_table(
    rules: &LanguageRules,
    file_id: FileId,
    path: &str,
    symbols: &[SourceSymbol],
) -> Result<TableNode> {
    let label = rules.file_title(path)?;
    let cells: Vec<Cell> = symbols
        .iter()
        .filter(|symbol| rules.include_symbol(symbol))
        .map(|symbol| build_cell(rules, file_id, symbol))
        .collect();
    trace!(
        path,
        kept = cells.len(),
        dropped = symbols.len() - cells.len(),
        "top-level symbols filtered"
    );
    Ok(TableNode::new(file_id, label, cells))
}

/// Add the identity of every cell in `table` to `out`.
pub fn collect_identities(table: &TableNode, out: &mut HashSet<CellIdentity>) {
    for cell in table.cells() {
        cell.walk(&mut |c| {
            out.insert(c.identity);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CssClass;
    use crate::lang::Language;
    use pretty_assertions::assert_eq;

    fn titles(cells: &[Cell]) -> Vec<&str> {
        cells.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_filters_top_level_and_nested() {
        let rules = Language::TypeScript.rules();
        let class = SourceSymbol::new("Widget", SymbolKind::Class, 2, 6).with_children(vec![
            SourceSymbol::new("size", SymbolKind::Field, 3, 4),
            SourceSymbol::new("render", SymbolKind::Method, 5, 4),
        ]);
        let symbols = vec![
            SourceSymbol::new("LIMIT", SymbolKind::Constant, 0, 6),
            class,
        ];

        let table = build_table(rules, FileId(1), "/w/src/widget.ts", &symbols).unwrap();
        assert_eq!(table.label, "widget");
        assert_eq!(table.sections.len(), 1);
        assert_eq!(table.sections[0].id, "1_main");

        let cells = &table.sections[0].cells;
        assert_eq!(titles(cells), vec!["Widget"]);
        assert_eq!(titles(&cells[0].children), vec!["render"]);
        assert_eq!(cells[0].children[0].identity, CellIdentity::new(FileId(1), 5, 4));
    }

    #[test]
    fn test_only_the_function_survives_values() {
        let rules = Language::TypeScript.rules();
        let symbols = vec![
            SourceSymbol::new("LIMIT", SymbolKind::Constant, 0, 6),
            SourceSymbol::new("count", SymbolKind::Variable, 1, 4),
            SourceSymbol::new("render", SymbolKind::Function, 3, 9),
        ];

        let table = build_table(rules, FileId(1), "/w/src/view.ts", &symbols).unwrap();
        let cells = &table.sections[0].cells;
        assert_eq!(titles(cells), vec!["render"]);
        assert_eq!(cells[0].identity, CellIdentity::new(FileId(1), 3, 9));
        assert!(cells[0].style.has_class(CssClass::Function));
        assert!(cells[0].children.is_empty());
    }

    #[test]
    fn test_interface_children_bypass_filter() {
        let rules = Language::TypeScript.rules();
        let iface = SourceSymbol::new("Shape", SymbolKind::Interface, 0, 10).with_children(vec![
            SourceSymbol::new("area", SymbolKind::Field, 1, 2),
            SourceSymbol::new("id", SymbolKind::Constant, 2, 2),
        ]);

        let cell = build_cell(rules, FileId(3), &iface);
        assert_eq!(titles(&cell.children), vec!["area", "id"]);
        assert!(cell.style.has_class(CssClass::Interface));
    }

    #[test]
    fn test_identity_uses_selection_start() {
        let rules = Language::Rust.rules();
        let mut symbol = SourceSymbol::new("parse", SymbolKind::Function, 10, 7);
        symbol.range.start.character = 0;

        let cell = build_cell(rules, FileId(2), &symbol);
        assert_eq!(cell.identity.port(), "10_7");
        assert_eq!(cell.title, "fn parse");
    }

    #[test]
    fn test_empty_outline_and_identities() {
        let rules = Language::Go.rules();
        let empty = build_table(rules, FileId(1), "/w/main.go", &[]).unwrap();
        assert!(empty.sections[0].cells.is_empty());

        let symbols = vec![SourceSymbol::new("Server", SymbolKind::Struct, 4, 5).with_children(
            vec![SourceSymbol::new("(*Server).Serve", SymbolKind::Method, 8, 18)],
        )];
        let table = build_table(rules, FileId(2), "/w/server.go", &symbols).unwrap();
        let mut ids = HashSet::new();
        collect_identities(&table, &mut ids);
        collect_identities(&empty, &mut ids);
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&CellIdentity::new(FileId(2), 8, 18)));
    }

    #[test]
    fn test_bad_path_fails_with_policy_error() {
        let rules = Language::Python.rules();
        let err = build_table(rules, FileId(1), "", &[]).unwrap_err();
        assert_eq!(err.kind(), symgraph_error::ErrorKind::PolicyFailed);
    }
}
