//! The runfiles resolver façade
//!
//! A [`Runfiles`] value owns one backend and one repository-mapping table,
//! both immutable after construction, plus the source repository the
//! current view is bound to. Rebinding the source repository produces a
//! new value over the same shared core, so views are cheap and safe to
//! hand across threads.

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::sync::Arc;

use crate::backend::{Backend, Lookup};
use crate::constants::{DIR_SUFFIX, DIR_VAR, MAIN_REPOSITORY, MANIFEST_FILE_VAR, MANIFEST_SUFFIX};
use crate::directory::RunfilesDir;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::mapping::RepoMapping;
use crate::paths;

/// Resolves logical runfile paths to absolute filesystem paths.
///
/// Construct one with [`Runfiles::from_env`] in Bazel-launched processes,
/// or explicitly with [`Runfiles::from_manifest`] /
/// [`Runfiles::from_directory`]. The value starts bound to the main
/// repository; [`Runfiles::with_source_repo`] rebinds it.
#[derive(Debug, Clone)]
pub struct Runfiles {
    shared: Arc<Shared>,
    source_repo: String,
}

/// Immutable core shared by every rebound view.
#[derive(Debug)]
struct Shared {
    backend: Backend,
    repo_mapping: RepoMapping,
    env: Vec<(&'static str, String)>,
}

impl Runfiles {
    /// Locate runfiles from process context.
    ///
    /// Strategy order: `RUNFILES_MANIFEST_FILE`, then `RUNFILES_DIR`, then
    /// probing next to the binary for `<argv0>.runfiles_manifest` and
    /// `<argv0>.runfiles`. Fails with [`Error::NoRunfilesStrategy`] when
    /// none applies.
    pub fn from_env() -> Result<Self> {
        Self::discover(
            env::var_os(MANIFEST_FILE_VAR),
            env::var_os(DIR_VAR),
            env::args_os().next(),
        )
    }

    /// Deterministic strategy selection from explicit inputs. `from_env`
    /// supplies process state; tests supply their own.
    fn discover(
        manifest: Option<OsString>,
        directory: Option<OsString>,
        argv0: Option<OsString>,
    ) -> Result<Self> {
        if let Some(manifest) = manifest.filter(|v| !v.is_empty()) {
            tracing::debug!(path = ?manifest, "runfiles strategy: manifest from environment");
            return Self::from_manifest(PathBuf::from(manifest));
        }
        if let Some(directory) = directory.filter(|v| !v.is_empty()) {
            tracing::debug!(path = ?directory, "runfiles strategy: directory from environment");
            return Self::from_directory(PathBuf::from(directory));
        }
        if let Some(argv0) = argv0 {
            let manifest = suffixed(&argv0, MANIFEST_SUFFIX);
            if manifest.is_file() {
                tracing::debug!(path = ?manifest, "runfiles strategy: manifest next to binary");
                return Self::from_manifest(manifest);
            }
            let directory = suffixed(&argv0, DIR_SUFFIX);
            if directory.is_dir() {
                tracing::debug!(path = ?directory, "runfiles strategy: directory next to binary");
                return Self::from_directory(directory);
            }
        }
        Err(Error::NoRunfilesStrategy)
    }

    /// Build a manifest-backed resolver from a manifest file path.
    pub fn from_manifest(path: impl Into<PathBuf>) -> Result<Self> {
        let manifest = Manifest::parse(path.into())?;
        Self::from_backend(Backend::Manifest(manifest))
    }

    /// Build a directory-backed resolver from a runfiles root.
    pub fn from_directory(root: impl Into<PathBuf>) -> Result<Self> {
        let dir = RunfilesDir::new(root.into())?;
        Self::from_backend(Backend::Directory(dir))
    }

    fn from_backend(backend: Backend) -> Result<Self> {
        let env = backend.env_vars();
        let repo_mapping = RepoMapping::load(&backend)?;
        Ok(Self {
            shared: Arc::new(Shared {
                backend,
                repo_mapping,
                env,
            }),
            source_repo: MAIN_REPOSITORY.to_string(),
        })
    }

    /// Resolve one logical runfile path to an absolute path.
    ///
    /// The path must be relative and forward-slash separated; anything
    /// else is an [`Error::InvalidPath`] usage error. A path the backend
    /// declares empty fails with [`Error::EmptyRunfile`]; an unknown path
    /// fails with [`Error::RunfileNotFound`].
    pub fn rlocation(&self, path: &str) -> Result<PathBuf> {
        paths::validate_logical_path(path)?;
        let mapped = self
            .shared
            .repo_mapping
            .canonicalize(&self.source_repo, path);
        match self.shared.backend.lookup(&mapped) {
            Lookup::Found(resolved) => Ok(resolved),
            Lookup::Empty => Err(Error::EmptyRunfile {
                path: path.to_string(),
            }),
            Lookup::Missing => Err(Error::RunfileNotFound {
                path: path.to_string(),
            }),
        }
    }

    /// Resolve several logical paths given as one string, separated by
    /// single spaces, the shape produced by the build system's
    /// `$(rlocationpaths ...)` expansion.
    ///
    /// Returns a freshly built map from each logical path to its absolute
    /// path. Fails as a whole on the first path that does not resolve; no
    /// partial map is returned.
    pub fn rlocations(&self, paths: &str) -> Result<HashMap<String, PathBuf>> {
        let mut locations = HashMap::new();
        for path in paths.split(' ') {
            let resolved = self.rlocation(path)?;
            locations.insert(path.to_string(), resolved);
        }
        Ok(locations)
    }

    /// A view of the same runfiles bound to a different source repository.
    ///
    /// The backend and mapping table are shared, not copied; the receiver
    /// is untouched. Views may be used concurrently without
    /// synchronization because the shared core never changes after
    /// construction.
    pub fn with_source_repo(&self, source_repo: impl Into<String>) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            source_repo: source_repo.into(),
        }
    }

    /// The source repository this view is bound to.
    pub fn source_repo(&self) -> &str {
        &self.source_repo
    }

    /// Environment variables, as newly allocated `KEY=VALUE` strings, that
    /// let a child process resolve the same runfiles with its own
    /// resolver.
    pub fn env(&self) -> Vec<String> {
        self.shared
            .env
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect()
    }
}

fn suffixed(argv0: &OsStr, suffix: &str) -> PathBuf {
    let mut path = argv0.to_os_string();
    path.push(suffix);
    PathBuf::from(path)
}
