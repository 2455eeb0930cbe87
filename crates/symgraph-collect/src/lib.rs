//! Graph assembly for symgraph.
//!
//! - [`assembler`]: registers file outlines and cross-reference facts, then
//!   resolves them into a [`Graph`](symgraph_core::Graph)
//! - [`cluster`]: groups file nodes into nested directory subgraphs
//! - [`facts`]: JSON fact sheets fed into an assembler in one go

pub mod assembler;
pub mod cluster;
pub mod facts;

pub use assembler::{FileEntry, GraphAssembler};
pub use cluster::cluster_directories;
pub use facts::{ApplyStats, FactSheet, FileFacts, HighlightFact, ImplementationFacts, SiteFacts};
