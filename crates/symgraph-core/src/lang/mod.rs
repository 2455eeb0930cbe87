//! Per-language display policy.
//!
//! The set of supported languages is closed: [`Language`] is a plain enum and
//! [`Language::rules`] is the one place that dispatches on it. Each language
//! contributes a static [`LanguageRules`] table of function pointers, built
//! from the shared defaults in [`base`] plus its own overrides.

pub mod base;
mod go;
mod java;
mod python;
mod rust;
mod typescript;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use strum_macros::EnumIter;

use symgraph_error::{Error, Result};

use crate::graph::Style;
use crate::symbol::{SourceSymbol, SymbolKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Language {
    TypeScript,
    Go,
    Java,
    Python,
    Rust,
}

impl Language {
    /// Look up a language by name or common alias, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "typescript" | "ts" | "typescriptreact" => Ok(Self::TypeScript),
            "go" | "golang" => Ok(Self::Go),
            "java" => Ok(Self::Java),
            "python" | "py" => Ok(Self::Python),
            "rust" | "rs" => Ok(Self::Rust),
            _ => Err(Error::unsupported_language(name).with_operation("Language::from_name")),
        }
    }

    pub fn rules(self) -> &'static LanguageRules {
        match self {
            Self::TypeScript => &typescript::RULES,
            Self::Go => &go::RULES,
            Self::Java => &java::RULES,
            Self::Python => &python::RULES,
            Self::Rust => &rust::RULES,
        }
    }

    pub fn name(self) -> &'static str {
        self.rules().name
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusion, styling and titling policy for one language.
///
/// The raw function pointers assume well-formed input; go through the
/// methods, which validate paths and attach the language and method name to
/// any failure.
pub struct LanguageRules {
    pub name: &'static str,
    /// Extensions without the leading dot.
    pub extensions: &'static [&'static str],
    pub excluded_file: fn(&Path) -> bool,
    pub file_title: fn(&Path) -> String,
    pub include_symbol: fn(&SourceSymbol) -> bool,
    pub symbol_style: fn(SymbolKind) -> Style,
    pub symbol_title: fn(&SourceSymbol) -> String,
}

impl fmt::Debug for LanguageRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageRules")
            .field("name", &self.name)
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}

impl LanguageRules {
    /// Whether a file belongs in the graph: right extension and not excluded
    /// by the language's test/generated-file conventions.
    pub fn is_valid_file(&self, path: &str) -> Result<bool> {
        let path = self.checked_path("is_valid_file", path)?;
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.contains(&ext));
        Ok(has_extension && !(self.excluded_file)(path))
    }

    pub fn file_title(&self, path: &str) -> Result<String> {
        let path = self.checked_path("file_title", path)?;
        Ok((self.file_title)(path))
    }

    pub fn include_symbol(&self, symbol: &SourceSymbol) -> bool {
        (self.include_symbol)(symbol)
    }

    pub fn symbol_style(&self, kind: SymbolKind) -> Style {
        (self.symbol_style)(kind)
    }

    pub fn symbol_title(&self, symbol: &SourceSymbol) -> String {
        (self.symbol_title)(symbol)
    }

    fn checked_path<'p>(&self, method: &'static str, path: &'p str) -> Result<&'p Path> {
        if path.is_empty() {
            return Err(Error::policy_failed(self.name, method, "path is empty"));
        }
        let path = Path::new(path);
        if path.file_name().is_none() {
            return Err(Error::policy_failed(self.name, method, "path has no file name")
                .with_context("path", path.display().to_string()));
        }
        Ok(path)
    }
}

/// Lower-cased file name of `path`, empty if it has none.
pub(crate) fn file_name_lower(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use symgraph_error::ErrorKind;

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(Language::from_name("TS").unwrap(), Language::TypeScript);
        assert_eq!(Language::from_name("py").unwrap(), Language::Python);
        assert_eq!("Rust".parse::<Language>().unwrap(), Language::Rust);
        assert_eq!(Language::from_name(" golang ").unwrap(), Language::Go);
    }

    #[test]
    fn test_unknown_language() {
        let err = Language::from_name("cobol").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedLanguage);
        assert_eq!(err.context_value("language"), Some("cobol"));
    }

    #[test]
    fn test_every_language_has_rules() {
        for lang in Language::iter() {
            let rules = lang.rules();
            assert!(!rules.extensions.is_empty(), "{lang} has no extensions");
            assert_eq!(lang.to_string(), rules.name);
        }
    }

    #[test]
    fn test_empty_path_is_policy_error() {
        let rules = Language::Java.rules();
        let err = rules.file_title("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PolicyFailed);
        assert_eq!(err.operation(), "file_title");
        assert_eq!(err.context_value("language"), Some("Java"));

        let err = rules.is_valid_file("/").unwrap_err();
        assert_eq!(err.operation(), "is_valid_file");
    }

    #[test]
    fn test_extension_check() {
        let rules = Language::TypeScript.rules();
        assert!(rules.is_valid_file("/root/src/app.ts").unwrap());
        assert!(rules.is_valid_file("/root/src/view.tsx").unwrap());
        assert!(!rules.is_valid_file("/root/src/app.js").unwrap());
        assert!(!rules.is_valid_file("/root/src/Makefile").unwrap());
    }
}
