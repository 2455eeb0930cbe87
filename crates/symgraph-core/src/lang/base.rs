//! Defaults shared by every language.

use std::path::Path;

use crate::graph::{CssClass, Style};
use crate::symbol::{SourceSymbol, SymbolKind};

/// Value-like kinds that never get a row of their own.
pub fn is_value_kind(kind: SymbolKind) -> bool {
    matches!(
        kind,
        SymbolKind::Constant | SymbolKind::Variable | SymbolKind::Field | SymbolKind::EnumMember
    )
}

pub fn include_symbol(symbol: &SourceSymbol) -> bool {
    !is_value_kind(symbol.kind)
}

pub fn symbol_style(kind: SymbolKind) -> Style {
    let style = Style::cell();
    match kind {
        SymbolKind::Module | SymbolKind::Package | SymbolKind::Namespace => {
            style.with_class(CssClass::Module).rounded()
        }
        SymbolKind::Interface => style
            .with_classes(&[CssClass::Interface, CssClass::Clickable])
            .with_border(0)
            .rounded(),
        SymbolKind::Function => style
            .with_classes(&[CssClass::Function, CssClass::Clickable])
            .rounded(),
        SymbolKind::Method => style
            .with_classes(&[CssClass::Method, CssClass::Clickable])
            .rounded(),
        SymbolKind::Constructor => style
            .with_classes(&[CssClass::Constructor, CssClass::Clickable])
            .rounded(),
        SymbolKind::Property => style.with_classes(&[CssClass::Property, CssClass::Clickable]),
        SymbolKind::Class => style.with_class(CssClass::Type).with_icon('C'),
        SymbolKind::Enum => style.with_class(CssClass::Type).with_icon('E'),
        SymbolKind::Struct => style.with_class(CssClass::Type).with_icon('S'),
        _ => style,
    }
}

pub fn symbol_title(symbol: &SourceSymbol) -> String {
    symbol.name.clone()
}

/// File name without its last extension.
pub fn file_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn excluded_file(_path: &Path) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kinds_are_excluded() {
        for kind in [
            SymbolKind::Constant,
            SymbolKind::Variable,
            SymbolKind::Field,
            SymbolKind::EnumMember,
        ] {
            assert!(!include_symbol(&SourceSymbol::new("x", kind, 0, 0)), "{kind}");
        }
        assert!(include_symbol(&SourceSymbol::new("f", SymbolKind::Function, 0, 0)));
        assert!(include_symbol(&SourceSymbol::new("T", SymbolKind::Class, 0, 0)));
    }

    #[test]
    fn test_every_style_carries_cell() {
        use strum::IntoEnumIterator;
        for kind in SymbolKind::iter() {
            assert!(symbol_style(kind).has_class(CssClass::Cell), "{kind}");
        }
    }

    #[test]
    fn test_kind_specific_styles() {
        let interface = symbol_style(SymbolKind::Interface);
        assert!(interface.has_class(CssClass::Interface));
        assert_eq!(interface.border, Some(0));
        assert!(interface.rounded);

        let class = symbol_style(SymbolKind::Class);
        assert_eq!(class.icon, Some('C'));
        assert!(!class.rounded);

        assert_eq!(symbol_style(SymbolKind::Struct).icon, Some('S'));
        assert!(symbol_style(SymbolKind::Namespace).has_class(CssClass::Module));
    }

    #[test]
    fn test_file_title_drops_extension() {
        assert_eq!(file_title(Path::new("/root/src/app.ts")), "app");
        assert_eq!(file_title(Path::new("/root/src/types.d.ts")), "types.d");
    }
}
