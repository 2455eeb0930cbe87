//! JSON fact sheets: a dump of everything gathered from a language server
//! for one graph.

use serde::{Deserialize, Serialize};
use tracing::debug;

use symgraph_core::{IncomingCall, Location, OutgoingCall, Position, SourceSymbol};
use symgraph_error::{Error, Result};

use crate::assembler::GraphAssembler;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub files: Vec<FileFacts>,
    #[serde(default)]
    pub incoming_calls: Vec<SiteFacts<IncomingCall>>,
    #[serde(default)]
    pub outgoing_calls: Vec<SiteFacts<OutgoingCall>>,
    #[serde(default)]
    pub implementations: Vec<ImplementationFacts>,
    #[serde(default)]
    pub highlights: Vec<HighlightFact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFacts {
    pub path: String,
    #[serde(default)]
    pub symbols: Vec<SourceSymbol>,
}

/// Call-hierarchy replies for the symbol at `position` in `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteFacts<C> {
    pub path: String,
    pub position: Position,
    #[serde(default = "Vec::new")]
    pub calls: Vec<C>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementationFacts {
    pub path: String,
    pub position: Position,
    #[serde(default)]
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightFact {
    pub path: String,
    pub position: Position,
}

/// What [`FactSheet::apply`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    pub files_accepted: usize,
    pub files_skipped: usize,
    pub call_sites: usize,
    pub implementation_sites: usize,
    pub highlights_applied: usize,
}

impl FactSheet {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| {
            Error::deserialization_failed(format!("invalid fact sheet: {err}"))
                .with_operation("FactSheet::from_json")
                .set_source(err)
        })
    }

    /// Feed every fact into `assembler`, files first.
    pub fn apply(self, assembler: &mut GraphAssembler) -> Result<ApplyStats> {
        let mut stats = ApplyStats::default();

        for file in self.files {
            if assembler.add_file(&file.path, file.symbols)? {
                stats.files_accepted += 1;
            } else {
                stats.files_skipped += 1;
            }
        }
        for site in self.incoming_calls {
            assembler.add_incoming_calls(&site.path, site.position, site.calls)?;
            stats.call_sites += 1;
        }
        for site in self.outgoing_calls {
            assembler.add_outgoing_calls(&site.path, site.position, site.calls)?;
            stats.call_sites += 1;
        }
        for site in self.implementations {
            assembler.add_interface_implementations(&site.path, site.position, site.locations)?;
            stats.implementation_sites += 1;
        }
        for mark in self.highlights {
            if assembler.highlight(&mark.path, mark.position)? {
                stats.highlights_applied += 1;
            }
        }

        debug!(?stats, "applied fact sheet");
        Ok(stats)
    }
}
