//! Process-wide resolver and the free lookup functions built on it.
//!
//! Most binaries want exactly one resolver for their whole lifetime, so
//! the free functions here locate it once on first use and memoize the
//! outcome, success or failure alike. Later calls never re-run
//! discovery, even after the environment changes.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::repo::current_repository;
use crate::resolver::Runfiles;

/// One-shot cell holding the discovery outcome.
pub(crate) struct Global {
    cell: OnceLock<std::result::Result<Runfiles, Error>>,
}

impl Global {
    pub(crate) const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Run `init` at most once, ever; on every call return the memoized
    /// outcome, cloning the error so a failed first discovery stays the
    /// stable answer for the whole process.
    pub(crate) fn get_or_init_with(
        &self,
        init: impl FnOnce() -> std::result::Result<Runfiles, Error>,
    ) -> Result<&Runfiles> {
        self.cell.get_or_init(init).as_ref().map_err(Error::clone)
    }

    fn get(&self) -> Result<&Runfiles> {
        self.get_or_init_with(Runfiles::from_env)
    }
}

static GLOBAL: Global = Global::new();

/// Resolve one logical runfile path with the process-wide resolver.
///
/// The lookup is attributed to the repository that compiled the calling
/// source file, so apparent repository names in `path` mean what they
/// meant in the caller's own build file.
#[track_caller]
pub fn rlocation(path: &str) -> Result<PathBuf> {
    rlocation_from(path, current_repository())
}

/// Like [`rlocation`], but attributed to an explicit source repository
/// instead of the calling source file's.
pub fn rlocation_from(path: &str, source_repo: &str) -> Result<PathBuf> {
    GLOBAL.get()?.with_source_repo(source_repo).rlocation(path)
}

/// Resolve several space-separated logical paths with the process-wide
/// resolver, attributed to the calling source file's repository.
#[track_caller]
pub fn rlocations(paths: &str) -> Result<HashMap<String, PathBuf>> {
    rlocations_from(paths, current_repository())
}

/// Like [`rlocations`], but attributed to an explicit source repository.
pub fn rlocations_from(paths: &str, source_repo: &str) -> Result<HashMap<String, PathBuf>> {
    GLOBAL.get()?.with_source_repo(source_repo).rlocations(paths)
}

/// Environment variables, as `KEY=VALUE` strings, that let a child
/// process resolve the same runfiles the process-wide resolver found.
pub fn env() -> Result<Vec<String>> {
    GLOBAL.get().map(Runfiles::env)
}
