//! Apparent-to-canonical repository name translation
//!
//! Two repositories may depend on the same third repository under
//! different apparent names. The build system records the translation in
//! the `_repo_mapping` runfile as comma-separated triples, one per line:
//!
//! ```text
//! <source canonical name>,<apparent name>,<target canonical name>
//! ```
//!
//! Resolution rewrites the first segment of a logical path through this
//! table, keyed by the repository the request originated from. Paths whose
//! first segment has no mapping entry pass through unchanged; that is the
//! common case for the main repository and for single-repository builds.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::backend::{Backend, Lookup};
use crate::constants::REPO_MAPPING_RUNFILE;
use crate::error::{Error, Result};

/// Repository mapping table: source repository, then apparent name, to
/// canonical name. Immutable after load.
#[derive(Debug, Default)]
pub(crate) struct RepoMapping {
    map: HashMap<String, HashMap<String, String>>,
}

impl RepoMapping {
    /// Load the mapping table through a backend.
    ///
    /// A backend that does not know the `_repo_mapping` runfile yields an
    /// empty table: binaries built without bzlmod have no mapping, and
    /// every apparent name is already canonical.
    pub(crate) fn load(backend: &Backend) -> Result<Self> {
        let path = match backend.lookup(REPO_MAPPING_RUNFILE) {
            Lookup::Found(path) => path,
            Lookup::Empty | Lookup::Missing => {
                tracing::debug!("no repository mapping runfile, apparent names are canonical");
                return Ok(Self::default());
            }
        };
        Self::parse(&path)
    }

    fn parse(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            // Listed in a stale manifest but never staged: same as absent.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::repo_mapping_read(path, e)),
        };

        let mut map: HashMap<String, HashMap<String, String>> = HashMap::new();
        for (index, line) in content.lines().enumerate() {
            let mut fields = line.split(',');
            // Exactly three comma-separated fields per line.
            let (Some(source), Some(apparent), Some(canonical), None) =
                (fields.next(), fields.next(), fields.next(), fields.next())
            else {
                return Err(Error::RepoMappingParse {
                    path: path.to_path_buf(),
                    line: index + 1,
                    text: line.to_string(),
                });
            };
            map.entry(source.to_string())
                .or_default()
                .insert(apparent.to_string(), canonical.to_string());
        }

        tracing::debug!(?path, repositories = map.len(), "loaded repository mapping");
        Ok(Self { map })
    }

    /// Rewrite the first path segment from the apparent name used by
    /// `source_repo` to the canonical name stored in the backend.
    ///
    /// Unmapped paths are returned borrowed; single-segment paths are
    /// never rewritten.
    pub(crate) fn canonicalize<'p>(&self, source_repo: &str, path: &'p str) -> Cow<'p, str> {
        let Some((apparent, rest)) = path.split_once('/') else {
            return Cow::Borrowed(path);
        };
        match self.map.get(source_repo).and_then(|m| m.get(apparent)) {
            Some(canonical) => Cow::Owned(format!("{canonical}/{rest}")),
            None => Cow::Borrowed(path),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: &[(&str, &str, &str)]) -> Self {
        let mut map: HashMap<String, HashMap<String, String>> = HashMap::new();
        for (source, apparent, canonical) in entries {
            map.entry(source.to_string())
                .or_default()
                .insert(apparent.to_string(), canonical.to_string());
        }
        Self { map }
    }
}
