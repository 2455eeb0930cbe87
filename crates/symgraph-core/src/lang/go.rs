use std::path::{Component, Path};

use super::{LanguageRules, base, file_name_lower};
use crate::symbol::{SourceSymbol, SymbolKind};

pub(super) static RULES: LanguageRules = LanguageRules {
    name: "Go",
    extensions: &["go"],
    excluded_file,
    file_title: base::file_title,
    include_symbol,
    symbol_style: base::symbol_style,
    symbol_title,
};

/// Function name prefixes `go test` picks up.
const TEST_PREFIXES: &[&str] = &["Test", "Benchmark", "Example", "Fuzz"];

fn excluded_file(path: &Path) -> bool {
    file_name_lower(path).ends_with("_test.go")
        || path
            .components()
            .any(|c| matches!(c, Component::Normal(name) if name == "vendor"))
}

fn include_symbol(symbol: &SourceSymbol) -> bool {
    if !base::include_symbol(symbol) {
        return false;
    }
    !(symbol.kind == SymbolKind::Function
        && TEST_PREFIXES
            .iter()
            .any(|prefix| symbol.name.starts_with(prefix)))
}

/// gopls already spells methods as `(*T).Name`, so the receiver is kept as is.
fn symbol_title(symbol: &SourceSymbol) -> String {
    match symbol.kind {
        SymbolKind::Function | SymbolKind::Method => format!("func {}", symbol.name),
        SymbolKind::Struct | SymbolKind::Interface | SymbolKind::Class => {
            format!("type {}", symbol.name)
        }
        _ => symbol.name.clone(),
    }
}
