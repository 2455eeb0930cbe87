//! File reference canonicalization.
//!
//! Language servers hand back `file://` URIs while callers usually register
//! plain paths. Every reference goes through [`canonical_path`] before it is
//! compared, so both spellings of the same file meet at one key.

use std::path::{Component, Path, PathBuf};

use url::Url;

use symgraph_error::{Error, Result};

const FILE_SCHEME: &str = "file:";

/// Map a path or `file://` URI to the registry key for that file.
///
/// The result is lexically normalized; the filesystem is never consulted, so
/// files that no longer exist still canonicalize.
pub fn canonical_path(reference: &str) -> Result<String> {
    if reference.is_empty() {
        return Err(Error::invalid_reference(reference).with_operation("canonical_path"));
    }

    let path = if reference.starts_with(FILE_SCHEME) {
        let url = Url::parse(reference).map_err(|err| {
            Error::invalid_reference(reference)
                .with_operation("canonical_path")
                .set_source(err)
        })?;
        url.to_file_path()
            .map_err(|_| Error::invalid_reference(reference).with_operation("canonical_path"))?
    } else {
        PathBuf::from(reference)
    };

    Ok(normalize_path(&path).to_string_lossy().into_owned())
}

/// Lexically normalize a path: drop `.`, fold `..`, collapse separators.
///
/// `..` never climbs above the root of an absolute path.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_is_normalized() {
        assert_eq!(canonical_path("/root/./src//a.ts").unwrap(), "/root/src/a.ts");
        assert_eq!(canonical_path("/root/src/../lib/b.ts").unwrap(), "/root/lib/b.ts");
    }

    #[test]
    fn test_uri_and_path_meet() {
        let from_uri = canonical_path("file:///root/src/a.ts").unwrap();
        let from_path = canonical_path("/root/src/a.ts").unwrap();
        assert_eq!(from_uri, from_path);
    }

    #[test]
    fn test_uri_is_percent_decoded() {
        assert_eq!(
            canonical_path("file:///root/my%20dir/a.ts").unwrap(),
            "/root/my dir/a.ts"
        );
    }

    #[test]
    fn test_rejects_empty_and_foreign_uris() {
        assert!(canonical_path("").is_err());
        let err = canonical_path("file://remote-host/share/a.ts");
        // A remote host cannot be mapped to a local path on unix.
        if cfg!(unix) {
            assert!(err.is_err());
        }
    }

    #[test]
    fn test_parent_never_climbs_above_root() {
        assert_eq!(normalize_path(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize_path(Path::new("../a/./b")), PathBuf::from("../a/b"));
        assert_eq!(normalize_path(Path::new("./")), PathBuf::from("."));
    }
}
