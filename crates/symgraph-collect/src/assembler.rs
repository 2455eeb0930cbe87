//! Accumulates file outlines and cross-reference facts into a [`Graph`].

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use symgraph_core::{
    CellIdentity, CssClass, Edge, FileId, Graph, IncomingCall, Language, LanguageRules, Location,
    OutgoingCall, Position, SourceSymbol, build_table, canonical_path, collect_identities,
    normalize_path,
};
use symgraph_error::Result;

use crate::cluster::cluster_directories;

/// A registered file and its outline.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub id: FileId,
    /// Canonical path.
    pub path: String,
    pub symbols: Vec<SourceSymbol>,
}

/// The symbol a fact is about: canonical file path plus position.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Site {
    path: String,
    position: Position,
}

impl Site {
    fn key(&self) -> String {
        format!("{}:{}:{}", self.path, self.position.line, self.position.character)
    }
}

/// Facts keyed by site. A later insert for the same site replaces the
/// earlier value but keeps its original slot.
#[derive(Debug)]
struct FactTable<T> {
    entries: Vec<(Site, T)>,
    index: HashMap<String, usize>,
}

impl<T> Default for FactTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> FactTable<T> {
    fn insert(&mut self, site: Site, value: T) {
        let key = site.key();
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot] = (site, value),
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((site, value));
            }
        }
    }

    fn iter(&self) -> impl Iterator<Item = &(Site, T)> {
        self.entries.iter()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Edges in first-seen order, each emitted once.
#[derive(Default)]
struct EdgeSet {
    edges: Vec<Edge>,
    seen: HashSet<Edge>,
}

impl EdgeSet {
    fn push(&mut self, edge: Edge) {
        if self.seen.insert(edge.clone()) {
            self.edges.push(edge);
        }
    }
}

/// Builds one call graph for one language.
///
/// Facts can be fed in any order and at any time before
/// [`generate_graph`](Self::generate_graph); references to files that were
/// never registered, or to symbols the language rules filtered out, are
/// dropped when the graph is generated.
#[derive(Debug)]
pub struct GraphAssembler {
    root: PathBuf,
    language: Language,
    files: Vec<FileEntry>,
    ids: HashMap<String, FileId>,
    incoming: FactTable<Vec<IncomingCall>>,
    outgoing: FactTable<Vec<OutgoingCall>>,
    implementations: FactTable<Vec<Location>>,
    highlights: HashMap<FileId, HashSet<Position>>,
}

impl GraphAssembler {
    pub fn new(root: impl AsRef<Path>, language: Language) -> Self {
        Self {
            root: normalize_path(root.as_ref()),
            language,
            files: Vec::new(),
            ids: HashMap::new(),
            incoming: FactTable::default(),
            outgoing: FactTable::default(),
            implementations: FactTable::default(),
            highlights: HashMap::new(),
        }
    }

    /// Create an assembler for a language given by name.
    pub fn for_language(root: impl AsRef<Path>, language: &str) -> Result<Self> {
        Ok(Self::new(root, Language::from_name(language)?))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn rules(&self) -> &'static LanguageRules {
        self.language.rules()
    }

    /// Register a file outline.
    ///
    /// Returns `Ok(false)` without touching the registry when the language
    /// does not accept the file or it is already registered.
    pub fn add_file(&mut self, path: &str, symbols: Vec<SourceSymbol>) -> Result<bool> {
        let path = canonical_path(path)?;
        if !self.rules().is_valid_file(&path)? {
            debug!(path = %path, language = %self.language, "file rejected by language rules");
            return Ok(false);
        }
        if self.ids.contains_key(&path) {
            debug!(path = %path, "file already registered");
            return Ok(false);
        }

        let id = FileId(self.files.len() as u32 + 1);
        debug!(path = %path, id = %id, symbols = symbols.len(), "registered file");
        self.ids.insert(path.clone(), id);
        self.files.push(FileEntry { id, path, symbols });
        Ok(true)
    }

    /// Record the callers of the symbol at `position` in `path`.
    pub fn add_incoming_calls(
        &mut self,
        path: &str,
        position: Position,
        calls: Vec<IncomingCall>,
    ) -> Result<()> {
        let site = self.site(path, position)?;
        self.incoming.insert(site, calls);
        Ok(())
    }

    /// Record the callees of the symbol at `position` in `path`.
    pub fn add_outgoing_calls(
        &mut self,
        path: &str,
        position: Position,
        calls: Vec<OutgoingCall>,
    ) -> Result<()> {
        let site = self.site(path, position)?;
        self.outgoing.insert(site, calls);
        Ok(())
    }

    /// Record the implementations of the interface at `position` in `path`.
    pub fn add_interface_implementations(
        &mut self,
        path: &str,
        position: Position,
        locations: Vec<Location>,
    ) -> Result<()> {
        let site = self.site(path, position)?;
        self.implementations.insert(site, locations);
        Ok(())
    }

    /// Mark the symbol at `position` for highlighting. Returns `false` when
    /// the file is not registered.
    pub fn highlight(&mut self, path: &str, position: Position) -> Result<bool> {
        let path = canonical_path(path)?;
        let Some(&id) = self.ids.get(&path) else {
            trace!(path = %path, "highlight for unregistered file ignored");
            return Ok(false);
        };
        self.highlights.entry(id).or_default().insert(position);
        Ok(true)
    }

    pub fn file_id(&self, path: &str) -> Option<FileId> {
        let path = canonical_path(path).ok()?;
        self.ids.get(&path).copied()
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Build the graph from everything fed so far.
    ///
    /// The assembler is left untouched, so calling this twice yields equal
    /// graphs.
    pub fn generate_graph(&self) -> Result<Graph> {
        let rules = self.rules();

        let mut nodes = Vec::with_capacity(self.files.len());
        let mut identities = HashSet::new();
        for file in &self.files {
            let table = build_table(rules, file.id, &file.path, &file.symbols)?;
            collect_identities(&table, &mut identities);
            nodes.push(table);
        }

        for node in &mut nodes {
            let Some(marks) = self.highlights.get(&node.id) else {
                continue;
            };
            for cell in node.cells_mut() {
                cell.walk_mut(&mut |c| {
                    if marks.contains(&c.identity.position()) {
                        c.style.classes.insert(CssClass::Highlight);
                    }
                });
            }
        }

        let mut edges = EdgeSet::default();
        let resolve = |path: &str, position: Position| self.resolve(&identities, path, position);

        for (site, calls) in self.incoming.iter() {
            let Some(target) = resolve(&site.path, site.position) else {
                trace!(site = %site.key(), "incoming target not rendered");
                continue;
            };
            for call in calls {
                match resolve(&call.from.uri, call.from.identity_position()) {
                    Some(caller) => edges.push(Edge::call(caller, target)),
                    None => trace!(caller = %call.from.name, "caller not rendered"),
                }
            }
        }

        for (site, calls) in self.outgoing.iter() {
            let Some(source) = resolve(&site.path, site.position) else {
                trace!(site = %site.key(), "outgoing source not rendered");
                continue;
            };
            for call in calls {
                match resolve(&call.to.uri, call.to.identity_position()) {
                    Some(callee) => edges.push(Edge::call(source, callee)),
                    None => trace!(callee = %call.to.name, "callee not rendered"),
                }
            }
        }

        for (site, locations) in self.implementations.iter() {
            let Some(interface) = resolve(&site.path, site.position) else {
                trace!(site = %site.key(), "interface not rendered");
                continue;
            };
            for location in locations {
                match resolve(&location.uri, location.range.start) {
                    Some(implementer) => edges.push(Edge::implementation(implementer, interface)),
                    None => trace!(uri = %location.uri, "implementation not rendered"),
                }
            }
        }

        let entries: Vec<(PathBuf, FileId)> = self
            .files
            .iter()
            .map(|file| (PathBuf::from(&file.path), file.id))
            .collect();
        let subgraphs = cluster_directories(&self.root, &entries);

        debug!(
            nodes = nodes.len(),
            edges = edges.edges.len(),
            subgraphs = subgraphs.len(),
            call_sites = self.incoming.len() + self.outgoing.len(),
            implementation_sites = self.implementations.len(),
            "generated graph"
        );

        Ok(Graph {
            nodes,
            edges: edges.edges,
            subgraphs,
        })
    }

    fn site(&self, path: &str, position: Position) -> Result<Site> {
        Ok(Site {
            path: canonical_path(path)?,
            position,
        })
    }

    /// The rendered cell at `position` in the file `reference`, if any.
    fn resolve(
        &self,
        identities: &HashSet<CellIdentity>,
        reference: &str,
        position: Position,
    ) -> Option<CellIdentity> {
        let path = canonical_path(reference).ok()?;
        let id = *self.ids.get(&path)?;
        let identity = CellIdentity::at(id, position);
        identities.contains(&identity).then_some(identity)
    }
}
