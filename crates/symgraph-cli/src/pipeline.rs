//! Core processing pipeline: read facts → assemble → generate graph.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use symgraph_collect::{FactSheet, GraphAssembler};
use symgraph_core::{Graph, Language};
use symgraph_error::Error;

use crate::SymgraphOptions;
use crate::config::Config;
use crate::profile::profile_phase;

/// Where clustering is relative to when nothing names a root.
const DEFAULT_ROOT: &str = "/";

pub fn load_fact_sheet(path: &Path) -> Result<FactSheet> {
    let text = fs::read_to_string(path)
        .map_err(Error::from)
        .with_context(|| format!("failed to read fact sheet {}", path.display()))?;
    let sheet = FactSheet::from_json(&text)
        .with_context(|| format!("failed to parse fact sheet {}", path.display()))?;
    Ok(sheet)
}

/// Command line first, then the config file, then the fact sheet itself.
pub fn resolve_language(
    opts: &SymgraphOptions,
    config: &Config,
    sheet: &FactSheet,
) -> Result<Language> {
    let name = opts
        .lang
        .as_deref()
        .or(config.graph.language.as_deref())
        .or(sheet.language.as_deref())
        .ok_or_else(|| {
            Error::invalid_argument("no language given on the command line, in the config or in the fact sheet")
                .with_operation("resolve_language")
        })?;
    Ok(Language::from_name(name)?)
}

/// Same precedence as [`resolve_language`], falling back to `/`.
pub fn resolve_root(opts: &SymgraphOptions, config: &Config, sheet: &FactSheet) -> PathBuf {
    opts.root
        .clone()
        .or_else(|| config.graph.root.clone())
        .or_else(|| sheet.root.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
}

/// Feed a fact sheet into a fresh assembler and generate the graph.
pub fn build_graph(
    opts: &SymgraphOptions,
    config: &Config,
    sheet: FactSheet,
) -> Result<Graph> {
    let language = resolve_language(opts, config, &sheet)?;
    let root = resolve_root(opts, config, &sheet);
    info!(
        "Assembling {} graph rooted at {}",
        language,
        root.display()
    );

    let apply_start = Instant::now();
    let mut assembler = GraphAssembler::new(&root, language);
    let stats = profile_phase("apply_facts", || sheet.apply(&mut assembler))?;
    info!(
        "Applied facts: {} files accepted, {} skipped, {} call sites, {} implementation sites ({:.2}s)",
        stats.files_accepted,
        stats.files_skipped,
        stats.call_sites,
        stats.implementation_sites,
        apply_start.elapsed().as_secs_f64()
    );

    let generate_start = Instant::now();
    let graph = profile_phase("generate_graph", || assembler.generate_graph())?;
    info!(
        "Graph generation: {} nodes, {} edges ({:.2}s)",
        graph.nodes.len(),
        graph.edges.len(),
        generate_start.elapsed().as_secs_f64()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symgraph_error::ErrorKind;

    fn sheet(language: Option<&str>, root: Option<&str>) -> FactSheet {
        FactSheet {
            language: language.map(str::to_string),
            root: root.map(str::to_string),
            ..FactSheet::default()
        }
    }

    #[test]
    fn test_language_precedence() {
        let mut opts = SymgraphOptions::default();
        let mut config = Config::default();
        let facts = sheet(Some("go"), None);
        assert_eq!(resolve_language(&opts, &config, &facts).unwrap(), Language::Go);

        config.graph.language = Some("java".into());
        assert_eq!(resolve_language(&opts, &config, &facts).unwrap(), Language::Java);

        opts.lang = Some("py".into());
        assert_eq!(resolve_language(&opts, &config, &facts).unwrap(), Language::Python);
    }

    #[test]
    fn test_missing_or_unknown_language() {
        let opts = SymgraphOptions::default();
        let config = Config::default();

        let err = resolve_language(&opts, &config, &sheet(None, None)).unwrap_err();
        let err = err.downcast_ref::<Error>().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = resolve_language(&opts, &config, &sheet(Some("cobol"), None)).unwrap_err();
        let err = err.downcast_ref::<Error>().unwrap();
        assert_eq!(err.kind(), ErrorKind::UnsupportedLanguage);
    }

    #[test]
    fn test_root_precedence() {
        let mut opts = SymgraphOptions::default();
        let config = Config::default();
        assert_eq!(resolve_root(&opts, &config, &sheet(None, None)), PathBuf::from("/"));
        assert_eq!(
            resolve_root(&opts, &config, &sheet(None, Some("/w"))),
            PathBuf::from("/w")
        );
        opts.root = Some(PathBuf::from("/cli"));
        assert_eq!(
            resolve_root(&opts, &config, &sheet(None, Some("/w"))),
            PathBuf::from("/cli")
        );
    }
}
