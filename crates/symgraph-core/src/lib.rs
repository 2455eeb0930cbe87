//! Core types for symgraph.
//!
//! - [`symbol`]: what a language server reports (outlines, call items, locations)
//! - [`path`]: file reference canonicalization
//! - [`graph`]: the renderable graph value model
//! - [`lang`]: per-language inclusion, styling and titling rules
//! - [`cell`]: symbol outline to cell tree conversion

pub mod cell;
pub mod graph;
pub mod lang;
pub mod path;
pub mod symbol;

pub use cell::{build_cell, build_table, collect_identities};
pub use graph::{
    Cell, CellIdentity, CssClass, Edge, FileId, Graph, Style, Subgraph, TableNode, TableSection,
};
pub use lang::{Language, LanguageRules};
pub use path::{canonical_path, normalize_path};
pub use symbol::{
    CallItem, IncomingCall, Location, OutgoingCall, Position, Range, SourceSymbol, SymbolKind,
};
pub use symgraph_error::{Error, ErrorKind, Result};
