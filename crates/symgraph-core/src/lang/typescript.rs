use std::path::Path;

use super::{LanguageRules, base, file_name_lower};

pub(super) static RULES: LanguageRules = LanguageRules {
    name: "TypeScript",
    extensions: &["ts", "tsx"],
    excluded_file,
    file_title: base::file_title,
    include_symbol: base::include_symbol,
    symbol_style: base::symbol_style,
    symbol_title: base::symbol_title,
};

const EXCLUDED_SUFFIXES: &[&str] = &[
    ".d.ts",
    ".test.ts",
    ".test.tsx",
    ".spec.ts",
    ".spec.tsx",
];

/// Declaration files and test suites.
fn excluded_file(path: &Path) -> bool {
    let name = file_name_lower(path);
    EXCLUDED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excludes_declarations_and_tests() {
        assert!(RULES.is_valid_file("/root/src/app.ts").unwrap());
        assert!(RULES.is_valid_file("/root/test.ts").unwrap());
        assert!(!RULES.is_valid_file("/root/src/app.test.ts").unwrap());
        assert!(!RULES.is_valid_file("/root/src/App.spec.tsx").unwrap());
        assert!(!RULES.is_valid_file("/root/types/index.d.ts").unwrap());
    }
}
