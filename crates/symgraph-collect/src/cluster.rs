//! Directory-based clustering of file nodes.

use std::path::{Component, Path, PathBuf};

use symgraph_core::{FileId, Subgraph, normalize_path};

/// Directory trie, one level per path segment. Children keep the order in
/// which their directory was first seen.
#[derive(Default)]
struct DirTree {
    nodes: Vec<FileId>,
    children: Vec<(String, DirTree)>,
}

impl DirTree {
    fn insert(&mut self, segments: &[String], id: FileId) {
        let Some((first, rest)) = segments.split_first() else {
            self.nodes.push(id);
            return;
        };
        let index = match self.children.iter().position(|(name, _)| name == first) {
            Some(index) => index,
            None => {
                self.children.push((first.clone(), DirTree::default()));
                self.children.len() - 1
            }
        };
        self.children[index].1.insert(rest, id);
    }
}

fn into_subgraphs(children: Vec<(String, DirTree)>) -> Vec<Subgraph> {
    children
        .into_iter()
        .map(|(title, tree)| Subgraph {
            title,
            nodes: tree.nodes,
            subgraphs: into_subgraphs(tree.children),
        })
        .collect()
}

/// Group file ids into nested directory subgraphs.
///
/// Files directly under `root` stay at the top level. Each subgraph is titled
/// with a single path segment relative to its parent; directories that only
/// hold other directories become subgraphs without nodes. Files outside
/// `root` are clustered by their full directory path in a forest of their
/// own, placed after the one for `root`, so `/src` never merges with
/// `<root>/src`.
pub fn cluster_directories(root: &Path, entries: &[(PathBuf, FileId)]) -> Vec<Subgraph> {
    let root = normalize_path(root);
    let mut inside = DirTree::default();
    let mut outside = DirTree::default();

    for (path, id) in entries {
        let Some(dir) = path.parent().map(normalize_path) else {
            continue;
        };
        let (tree, rel) = match dir.strip_prefix(&root) {
            Ok(rel) => (&mut inside, rel),
            Err(_) => (&mut outside, dir.as_path()),
        };
        let parts = segments(rel);
        if parts.is_empty() {
            continue;
        }
        tree.insert(&parts, *id);
    }

    let mut subgraphs = into_subgraphs(inside.children);
    subgraphs.extend(into_subgraphs(outside.children));
    subgraphs
}

/// Normal components of `dir`. Empty for the root itself and for `/` or `.`.
fn segments(dir: &Path) -> Vec<String> {
    dir.components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(path: &str, id: u32) -> (PathBuf, FileId) {
        (PathBuf::from(path), FileId(id))
    }

    fn shape(subgraphs: &[Subgraph]) -> Vec<String> {
        subgraphs
            .iter()
            .map(|s| {
                let nodes: Vec<String> = s.nodes.iter().map(|n| n.to_string()).collect();
                format!("{}[{}]{{{}}}", s.title, nodes.join(","), shape(&s.subgraphs).join(" "))
            })
            .collect()
    }

    #[test]
    fn test_intermediate_directory_becomes_subgraph() {
        let entries = [entry("/root/a/b/X.ts", 1), entry("/root/a/c/Y.ts", 2)];
        let clusters = cluster_directories(Path::new("/root"), &entries);
        assert_eq!(shape(&clusters), vec!["a[]{b[1]{} c[2]{}}"]);
    }

    #[test]
    fn test_root_files_are_not_clustered() {
        let entries = [entry("/root/main.ts", 1), entry("/root/lib/util.ts", 2)];
        let clusters = cluster_directories(Path::new("/root"), &entries);
        assert_eq!(shape(&clusters), vec!["lib[2]{}"]);
    }

    #[test]
    fn test_parent_and_child_directories_share_subgraph() {
        let entries = [
            entry("/root/src/deep/inner.ts", 1),
            entry("/root/src/outer.ts", 2),
            entry("/root/src/deep/more.ts", 3),
        ];
        let clusters = cluster_directories(Path::new("/root/"), &entries);
        assert_eq!(shape(&clusters), vec!["src[2]{deep[1,3]{}}"]);
    }

    #[test]
    fn test_paths_outside_root_keep_full_directory() {
        let entries = [entry("/opt/vendor/x.ts", 1)];
        let clusters = cluster_directories(Path::new("/root"), &entries);
        assert_eq!(shape(&clusters), vec!["opt[]{vendor[1]{}}"]);
    }

    #[test]
    fn test_outside_directory_with_same_name_stays_separate() {
        let entries = [entry("/root/src/x.ts", 1), entry("/src/y.ts", 2)];
        let clusters = cluster_directories(Path::new("/root"), &entries);
        assert_eq!(shape(&clusters), vec!["src[1]{}", "src[2]{}"]);
    }

    #[test]
    fn test_siblings_follow_registration_order() {
        let entries = [
            entry("/root/zeta/z.ts", 1),
            entry("/root/alpha/a.ts", 2),
            entry("/root/zeta/inner/i.ts", 3),
        ];
        let clusters = cluster_directories(Path::new("/root"), &entries);
        assert_eq!(shape(&clusters), vec!["zeta[1]{inner[3]{}}", "alpha[2]{}"]);
    }

    #[test]
    fn test_top_level_files_without_directory() {
        let entries = [entry("/x.ts", 1), entry("y.ts", 2)];
        assert!(cluster_directories(Path::new("/root"), &entries).is_empty());
    }
}
