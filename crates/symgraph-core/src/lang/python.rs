use std::path::Path;

use super::{LanguageRules, base, file_name_lower};
use crate::graph::{CssClass, Style};
use crate::symbol::{SourceSymbol, SymbolKind};

pub(super) static RULES: LanguageRules = LanguageRules {
    name: "Python",
    extensions: &["py"],
    excluded_file,
    file_title: base::file_title,
    include_symbol,
    symbol_style,
    symbol_title,
};

fn excluded_file(path: &Path) -> bool {
    let name = file_name_lower(path);
    name.starts_with("test_") || name.ends_with("_test.py") || name == "__init__.py"
}

fn include_symbol(symbol: &SourceSymbol) -> bool {
    match symbol.kind {
        SymbolKind::Variable | SymbolKind::Constant | SymbolKind::Field => false,
        SymbolKind::Function | SymbolKind::Class | SymbolKind::Module => {
            !symbol.name.to_lowercase().contains("test")
        }
        _ => true,
    }
}

fn symbol_style(kind: SymbolKind) -> Style {
    let style = Style::cell();
    match kind {
        SymbolKind::Module => style.with_class(CssClass::Module).rounded(),
        SymbolKind::Function => style
            .with_classes(&[CssClass::Function, CssClass::Clickable])
            .rounded(),
        SymbolKind::Method => style
            .with_classes(&[CssClass::Method, CssClass::Clickable])
            .rounded(),
        SymbolKind::Constructor => style
            .with_classes(&[CssClass::Constructor, CssClass::Clickable])
            .rounded(),
        SymbolKind::Class => style.with_class(CssClass::Type).with_icon('C'),
        SymbolKind::Property => style.with_class(CssClass::Property).with_icon('p'),
        _ => style.rounded(),
    }
}

fn symbol_title(symbol: &SourceSymbol) -> String {
    match symbol.kind {
        SymbolKind::Class => format!("class {}", symbol.name),
        SymbolKind::Function | SymbolKind::Method => format!("def {}", symbol.name),
        SymbolKind::Constructor => "def __init__".to_string(),
        _ => symbol.name.clone(),
    }
}
