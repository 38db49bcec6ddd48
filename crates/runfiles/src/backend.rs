//! Backing strategies for runfiles resolution
//!
//! Exactly two strategies exist, selected once at construction: a parsed
//! manifest table or a staged directory tree. The set is closed by the
//! domain, so the backend is a tagged enum rather than a trait object.

use std::path::PathBuf;

use crate::constants::{DIR_VAR, LEGACY_DIR_VAR, MANIFEST_FILE_VAR};
use crate::directory::RunfilesDir;
use crate::manifest::Manifest;

/// Outcome of a single backend lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lookup {
    /// The logical path resolves to this absolute path.
    Found(PathBuf),
    /// Declared by the build graph, intentionally absent on disk.
    Empty,
    /// Unknown to the backend.
    Missing,
}

/// The two interchangeable backing strategies.
#[derive(Debug)]
pub(crate) enum Backend {
    Manifest(Manifest),
    Directory(RunfilesDir),
}

impl Backend {
    /// Resolve a canonical logical path against the backing data.
    pub(crate) fn lookup(&self, path: &str) -> Lookup {
        match self {
            Backend::Manifest(manifest) => manifest.lookup(path),
            Backend::Directory(dir) => dir.lookup(path),
        }
    }

    /// Environment pairs a child process needs to resolve against the same
    /// backing data. For a manifest staged under one of the conventional
    /// names, the sibling runfiles directory is exported too, so children
    /// may pick either strategy.
    pub(crate) fn env_vars(&self) -> Vec<(&'static str, String)> {
        match self {
            Backend::Manifest(manifest) => {
                let mut vars = vec![(
                    MANIFEST_FILE_VAR,
                    manifest.path().to_string_lossy().into_owned(),
                )];
                if let Some(dir) = manifest.sibling_runfiles_dir() {
                    let dir = dir.to_string_lossy().into_owned();
                    vars.push((DIR_VAR, dir.clone()));
                    vars.push((LEGACY_DIR_VAR, dir));
                }
                vars
            }
            Backend::Directory(dir) => {
                let root = dir.root().to_string_lossy().into_owned();
                vec![(DIR_VAR, root.clone()), (LEGACY_DIR_VAR, root)]
            }
        }
    }
}
