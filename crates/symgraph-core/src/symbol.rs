//! Symbol facts as reported by a language server.
//!
//! These mirror the LSP `DocumentSymbol`, `CallHierarchyItem` and `Location`
//! shapes closely enough that a JSON dump of the server replies can be fed in
//! unchanged (camelCase field names, numeric symbol kinds).

use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Zero-based position in a text document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A range covering a single line from `start` to `end` characters.
    pub fn on_line(line: u32, start: u32, end: u32) -> Self {
        Self::new(Position::new(line, start), Position::new(line, end))
    }
}

/// Kind of a symbol, numbered as in the LSP specification.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    FromRepr,
    Display,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum SymbolKind {
    File = 1,
    Module = 2,
    Namespace = 3,
    Package = 4,
    Class = 5,
    Method = 6,
    Property = 7,
    Field = 8,
    Constructor = 9,
    Enum = 10,
    Interface = 11,
    Function = 12,
    Variable = 13,
    Constant = 14,
    String = 15,
    Number = 16,
    Boolean = 17,
    Array = 18,
    Object = 19,
    Key = 20,
    Null = 21,
    EnumMember = 22,
    Struct = 23,
    Event = 24,
    Operator = 25,
    TypeParameter = 26,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// LSP numeric code of this kind.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl Serialize for SymbolKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SymbolKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum KindRepr {
            Code(u8),
            Name(String),
        }

        match KindRepr::deserialize(deserializer)? {
            KindRepr::Code(code) => SymbolKind::from_repr(code)
                .ok_or_else(|| D::Error::custom(format!("unknown symbol kind code {code}"))),
            KindRepr::Name(name) => name
                .parse()
                .map_err(|_| D::Error::custom(format!("unknown symbol kind '{name}'"))),
        }
    }
}

/// One node of a file outline (`textDocument/documentSymbol`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSymbol {
    pub name: String,
    pub kind: SymbolKind,
    #[serde(default)]
    pub detail: String,
    pub range: Range,
    pub selection_range: Range,
    #[serde(default)]
    pub children: Vec<SourceSymbol>,
}

impl SourceSymbol {
    /// Create a childless symbol whose name starts at `(line, character)`.
    pub fn new(name: impl Into<String>, kind: SymbolKind, line: u32, character: u32) -> Self {
        let name = name.into();
        let end = character + name.chars().count() as u32;
        Self {
            name,
            kind,
            detail: String::new(),
            range: Range::on_line(line, character, end),
            selection_range: Range::on_line(line, character, end),
            children: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn with_children(mut self, children: Vec<SourceSymbol>) -> Self {
        self.children = children;
        self
    }

    /// The position that identifies this symbol.
    pub fn identity_position(&self) -> Position {
        self.selection_range.start
    }
}

/// A call-hierarchy item (`callHierarchy/prepare` and friends).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallItem {
    #[serde(default)]
    pub name: String,
    pub kind: SymbolKind,
    #[serde(default)]
    pub detail: String,
    /// File reference, either a path or a `file://` URI.
    pub uri: String,
    pub range: Range,
    pub selection_range: Range,
}

impl CallItem {
    pub fn new(
        name: impl Into<String>,
        kind: SymbolKind,
        uri: impl Into<String>,
        line: u32,
        character: u32,
    ) -> Self {
        let name = name.into();
        let end = character + name.chars().count() as u32;
        Self {
            name,
            kind,
            detail: String::new(),
            uri: uri.into(),
            range: Range::new(Position::new(line, character), Position::new(line + 1, 0)),
            selection_range: Range::on_line(line, character, end),
        }
    }

    /// The position that identifies the called or calling symbol.
    ///
    /// This is the selection start, the same position a [`SourceSymbol`]
    /// outline reports for the symbol.
    pub fn identity_position(&self) -> Position {
        self.selection_range.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingCall {
    pub from: CallItem,
    #[serde(default)]
    pub from_ranges: Vec<Range>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingCall {
    pub to: CallItem,
    #[serde(default)]
    pub from_ranges: Vec<Range>,
}

/// A source location, as returned by `textDocument/implementation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub uri: String,
    pub range: Range,
}

impl Location {
    pub fn new(uri: impl Into<String>, line: u32, character: u32) -> Self {
        Self {
            uri: uri.into(),
            range: Range::on_line(line, character, character),
        }
    }
}
