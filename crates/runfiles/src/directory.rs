//! Directory-backed runfiles lookup
//!
//! The directory backend resolves logical paths against a staged runfiles
//! tree whose layout mirrors the logical paths themselves. No table is
//! materialized, so there is no "declared empty" concept here; a logical
//! path without a file is simply not found.

use std::path::PathBuf;

use crate::backend::Lookup;
use crate::error::{Error, Result};

/// Root of a staged runfiles directory tree.
#[derive(Debug)]
pub(crate) struct RunfilesDir {
    root: PathBuf,
}

impl RunfilesDir {
    /// Wrap a runfiles root, failing when it is not an existing directory.
    pub(crate) fn new(root: PathBuf) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::DirectoryMissing { path: root });
        }
        Ok(Self { root })
    }

    /// Join the root with a logical path and check existence eagerly.
    ///
    /// The existence check keeps the not-found taxonomy aligned with the
    /// manifest backend: callers learn about an unstaged runfile at
    /// resolution time, not when they later open the returned path.
    pub(crate) fn lookup(&self, path: &str) -> Lookup {
        let full = self.root.join(path);
        if full.exists() {
            Lookup::Found(full)
        } else {
            Lookup::Missing
        }
    }

    /// The runfiles root directory.
    pub(crate) fn root(&self) -> &PathBuf {
        &self.root
    }
}
