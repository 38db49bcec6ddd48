//! Error types for runfiles resolution

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Result type for runfiles operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating or resolving runfiles.
///
/// The enum is `Clone`: the process-wide resolver memoizes its
/// initialization outcome, and every later caller receives the same
/// failure. I/O sources are therefore held behind `Arc`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The runfile is declared in the manifest but intentionally has no
    /// presence on disk. Distinct from [`Error::RunfileNotFound`] so
    /// callers can treat "declared empty" as a non-fatal condition.
    #[error("runfile {path} is declared empty and has no file on disk")]
    EmptyRunfile { path: String },

    /// The logical path is unknown to the backend.
    #[error("runfile not found: {path}")]
    RunfileNotFound { path: String },

    /// The caller supplied a malformed logical path. A usage error, not a
    /// data error.
    #[error("invalid runfile path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    /// The manifest file could not be opened or read.
    #[error("cannot read runfiles manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    /// A manifest line does not match `<logical-path> <absolute-path>`.
    #[error("bad runfiles manifest line {line} in {path}: {text:?}")]
    ManifestParse {
        path: PathBuf,
        line: usize,
        text: String,
    },

    /// The repository mapping runfile exists but could not be read.
    #[error("cannot read repository mapping {path}: {source}")]
    RepoMappingRead {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    /// A repository mapping line does not hold three comma-separated fields.
    #[error("bad repository mapping line {line} in {path}: {text:?}")]
    RepoMappingParse {
        path: PathBuf,
        line: usize,
        text: String,
    },

    /// The runfiles directory root does not exist or is not a directory.
    #[error("runfiles directory {path} does not exist")]
    DirectoryMissing { path: PathBuf },

    /// No way to locate runfiles in this process: neither environment
    /// variable is set and nothing was staged next to the binary.
    #[error(
        "no runfiles strategy available: set RUNFILES_MANIFEST_FILE or RUNFILES_DIR, \
         or stage a .runfiles_manifest file or .runfiles directory next to the binary"
    )]
    NoRunfilesStrategy,
}

impl Error {
    pub(crate) fn manifest_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ManifestRead {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn repo_mapping_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::RepoMappingRead {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn invalid_path(path: &str, reason: &str) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}
