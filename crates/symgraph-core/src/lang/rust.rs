use std::path::Path;

use super::{LanguageRules, base, file_name_lower};
use crate::symbol::{SourceSymbol, SymbolKind};

pub(super) static RULES: LanguageRules = LanguageRules {
    name: "Rust",
    extensions: &["rs"],
    excluded_file,
    file_title: base::file_title,
    include_symbol,
    symbol_style: base::symbol_style,
    symbol_title,
};

fn excluded_file(path: &Path) -> bool {
    let name = file_name_lower(path);
    name.starts_with("test_") || name.ends_with("_test.rs") || name == "lib.rs"
}

fn include_symbol(symbol: &SourceSymbol) -> bool {
    if !base::include_symbol(symbol) {
        return false;
    }
    match symbol.kind {
        SymbolKind::Module | SymbolKind::Function => {
            !symbol.name.to_lowercase().contains("test")
        }
        _ => true,
    }
}

/// rust-analyzer puts the impl target of a method in its detail.
fn symbol_title(symbol: &SourceSymbol) -> String {
    let name = &symbol.name;
    match symbol.kind {
        SymbolKind::Module => format!("mod {name}"),
        SymbolKind::Struct => format!("struct {name}"),
        SymbolKind::Enum => format!("enum {name}"),
        SymbolKind::Interface | SymbolKind::TypeParameter => format!("type {name}"),
        SymbolKind::Function => format!("fn {name}"),
        SymbolKind::Method if symbol.detail.is_empty() => format!("fn {name}"),
        SymbolKind::Method => format!("impl {} fn {name}", symbol.detail),
        _ => name.clone(),
    }
}
