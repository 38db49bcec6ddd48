//! Manifest-backed runfiles lookup
//!
//! A runfiles manifest is a line-oriented text file mapping logical paths
//! to absolute paths, one entry per line, separated by a single space:
//!
//! ```text
//! my_repo/files/a /home/user/.cache/bazel/.../files/a
//! my_repo/files/empty
//! ```
//!
//! A line whose target portion is empty declares a runfile with no
//! filesystem presence; it is remembered rather than dropped so lookups
//! can distinguish "declared empty" from "never declared".

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::backend::Lookup;
use crate::constants::{DIR_SUFFIX, MANIFEST_SUFFIX};
use crate::error::{Error, Result};

/// Target of a single manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ManifestEntry {
    /// Maps to a real file at this absolute path.
    Present(PathBuf),
    /// Declared by the build graph but intentionally absent on disk.
    Empty,
}

/// Parsed runfiles manifest: the file's path plus its lookup table.
///
/// The table is built once at construction and read-only afterwards.
#[derive(Debug)]
pub(crate) struct Manifest {
    path: PathBuf,
    entries: HashMap<String, ManifestEntry>,
}

impl Manifest {
    /// Parse a manifest file into a lookup table.
    ///
    /// Each line must contain at least one space; everything before the
    /// first space is the logical path, everything after it (including
    /// further spaces) is the target. An empty target marks the entry as
    /// [`ManifestEntry::Empty`]. When the same logical path appears on
    /// several lines, the last line wins.
    pub(crate) fn parse(path: PathBuf) -> Result<Self> {
        let file = File::open(&path).map_err(|e| Error::manifest_read(&path, e))?;
        let reader = BufReader::new(file);

        let mut entries = HashMap::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::manifest_read(&path, e))?;
            let Some((logical, target)) = line.split_once(' ') else {
                return Err(Error::ManifestParse {
                    path,
                    line: index + 1,
                    text: line,
                });
            };
            if logical.is_empty() {
                return Err(Error::ManifestParse {
                    path,
                    line: index + 1,
                    text: line,
                });
            }
            let entry = if target.is_empty() {
                ManifestEntry::Empty
            } else {
                ManifestEntry::Present(PathBuf::from(target))
            };
            entries.insert(logical.to_string(), entry);
        }

        tracing::debug!(?path, entries = entries.len(), "parsed runfiles manifest");
        Ok(Self { path, entries })
    }

    /// Exact-match lookup; no prefix or directory expansion happens here.
    pub(crate) fn lookup(&self, path: &str) -> Lookup {
        match self.entries.get(path) {
            Some(ManifestEntry::Present(target)) => Lookup::Found(target.clone()),
            Some(ManifestEntry::Empty) => Lookup::Empty,
            None => Lookup::Missing,
        }
    }

    /// The manifest file's own path.
    pub(crate) fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Derive the runfiles directory sitting next to this manifest, when
    /// the manifest follows one of the staged naming conventions
    /// (`<name>.runfiles_manifest` or `<name>.runfiles/MANIFEST`).
    pub(crate) fn sibling_runfiles_dir(&self) -> Option<PathBuf> {
        let path = self.path.to_string_lossy();
        if let Some(stem) = path.strip_suffix(MANIFEST_SUFFIX) {
            return Some(PathBuf::from(format!("{stem}{DIR_SUFFIX}")));
        }
        for suffix in ["/MANIFEST", "\\MANIFEST"] {
            if let Some(dir) = path.strip_suffix(suffix) {
                if dir.ends_with(DIR_SUFFIX) {
                    return Some(PathBuf::from(dir));
                }
            }
        }
        None
    }
}
