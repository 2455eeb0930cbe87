use std::path::{Component, Path};

use super::{LanguageRules, base, file_name_lower};
use crate::graph::{CssClass, Style};
use crate::symbol::{SourceSymbol, SymbolKind};

pub(super) static RULES: LanguageRules = LanguageRules {
    name: "Java",
    extensions: &["java"],
    excluded_file,
    file_title,
    include_symbol,
    symbol_style,
    symbol_title,
};

const EXCLUDED_SUFFIXES: &[&str] = &["test.java", "tests.java", "testcase.java", "suite.java"];
const EXCLUDED_NAMES: &[&str] = &["package-info.java", "module-info.java"];

/// Directory names that sit above the package root.
const SOURCE_ROOTS: &[&str] = &["src", "main", "java"];

fn excluded_file(path: &Path) -> bool {
    let name = file_name_lower(path);
    EXCLUDED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
        || EXCLUDED_NAMES.contains(&name.as_str())
}

/// `com.acme.Widget` for `.../src/main/java/com/acme/Widget.java`.
fn file_title(path: &Path) -> String {
    let stem = base::file_title(path);
    match package_name(path) {
        Some(package) => format!("{package}.{stem}"),
        None => stem,
    }
}

fn package_name(path: &Path) -> Option<String> {
    let dirs: Vec<&str> = path
        .parent()?
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => name.to_str(),
            _ => None,
        })
        .collect();
    let root = dirs.iter().rposition(|d| SOURCE_ROOTS.contains(d))?;
    let package = dirs[root + 1..].join(".");
    (!package.is_empty()).then_some(package)
}

fn include_symbol(symbol: &SourceSymbol) -> bool {
    if symbol.detail.contains("private") {
        return false;
    }
    match symbol.kind {
        SymbolKind::Variable | SymbolKind::Constant | SymbolKind::EnumMember => false,
        SymbolKind::Class | SymbolKind::Method => {
            let name = symbol.name.to_lowercase();
            !name.contains("test") && !name.ends_with("suite")
        }
        _ => true,
    }
}

fn symbol_style(kind: SymbolKind) -> Style {
    match kind {
        SymbolKind::Interface => Style::cell()
            .with_classes(&[CssClass::Interface, CssClass::Clickable])
            .with_border(0)
            .rounded()
            .with_icon('I'),
        other => base::symbol_style(other),
    }
}

const ACCESS: &[&str] = &["private", "protected", "public"];
const MODIFIERS: &[&str] = &["static", "final", "abstract"];

/// Access keyword first, then `static`, `final` and `abstract` when present.
fn modifiers(detail: &str) -> Vec<&'static str> {
    let words: Vec<&str> = detail.split_whitespace().collect();
    let access = ACCESS.iter().find(|m| words.contains(*m)).copied();
    access
        .into_iter()
        .chain(MODIFIERS.iter().filter(|m| words.contains(*m)).copied())
        .collect()
}

/// The detail with modifier keywords removed.
fn signature(detail: &str) -> String {
    detail
        .split_whitespace()
        .filter(|w| !ACCESS.contains(w) && !MODIFIERS.contains(w))
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    words
        .into_iter()
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn symbol_title(symbol: &SourceSymbol) -> String {
    let mods: Vec<&str> = modifiers(&symbol.detail);
    let keyword = |keyword: &str| {
        join_words(mods.iter().copied().chain([keyword, symbol.name.as_str()]))
    };

    match symbol.kind {
        SymbolKind::Package => format!("package {}", symbol.name),
        SymbolKind::Class => keyword("class"),
        SymbolKind::Interface => keyword("interface"),
        SymbolKind::Enum => keyword("enum"),
        SymbolKind::Method => {
            let head = format!("{}{}", symbol.name, signature(&symbol.detail));
            join_words(mods.iter().copied().chain([head.as_str()]))
        }
        SymbolKind::Constructor => {
            let head = format!("{}{}", symbol.name, signature(&symbol.detail));
            let access = mods.iter().copied().filter(|m| ACCESS.contains(m));
            join_words(access.chain([head.as_str()]))
        }
        SymbolKind::Field => join_words(mods.iter().copied().chain([symbol.name.as_str()])),
        _ => symbol.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_files() {
        assert!(RULES.is_valid_file("/p/src/main/java/com/acme/Widget.java").unwrap());
        assert!(!RULES.is_valid_file("/p/src/test/java/com/acme/WidgetTest.java").unwrap());
        assert!(!RULES.is_valid_file("/p/src/main/java/com/acme/package-info.java").unwrap());
        assert!(!RULES.is_valid_file("/p/src/main/java/module-info.java").unwrap());
    }

    #[test]
    fn test_file_title_uses_package() {
        assert_eq!(
            file_title(Path::new("/p/src/main/java/com/acme/Widget.java")),
            "com.acme.Widget"
        );
        assert_eq!(file_title(Path::new("/p/lib/Widget.java")), "Widget");
        assert_eq!(file_title(Path::new("/p/src/Widget.java")), "Widget");
    }

    #[test]
    fn test_private_and_test_members_are_excluded() {
        let private = SourceSymbol::new("helper", SymbolKind::Method, 0, 0).with_detail("private");
        assert!(!include_symbol(&private));
        assert!(!include_symbol(&SourceSymbol::new("testLoad", SymbolKind::Method, 0, 0)));
        assert!(!include_symbol(&SourceSymbol::new("LoaderSuite", SymbolKind::Class, 0, 0)));
        assert!(include_symbol(&SourceSymbol::new("load", SymbolKind::Method, 0, 0)));
        assert!(include_symbol(&SourceSymbol::new("size", SymbolKind::Field, 0, 0)));
    }

    #[test]
    fn test_titles() {
        let class = SourceSymbol::new("Widget", SymbolKind::Class, 0, 0).with_detail("public final");
        assert_eq!(symbol_title(&class), "public final class Widget");

        let plain = SourceSymbol::new("Widget", SymbolKind::Class, 0, 0);
        assert_eq!(symbol_title(&plain), "class Widget");

        let method = SourceSymbol::new("render", SymbolKind::Method, 0, 0)
            .with_detail("public static (int) : void");
        assert_eq!(symbol_title(&method), "public static render(int) : void");

        let ctor = SourceSymbol::new("Widget", SymbolKind::Constructor, 0, 0)
            .with_detail("public final (String)");
        assert_eq!(symbol_title(&ctor), "public Widget(String)");

        let field = SourceSymbol::new("size", SymbolKind::Field, 0, 0).with_detail("protected");
        assert_eq!(symbol_title(&field), "protected size");
    }

    #[test]
    fn test_interface_icon() {
        assert_eq!(symbol_style(SymbolKind::Interface).icon, Some('I'));
        assert_eq!(symbol_style(SymbolKind::Class).icon, Some('C'));
    }
}
