//! [`RunfilesFixture`] builder for runfiles test scenarios.
//!
//! Lays out the on-disk shape Bazel stages next to a built binary: an
//! `app.runfiles/` tree, an `app.runfiles_manifest` file, or both.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory shaped like a Bazel output tree, with helper
/// methods for staging runfiles and writing manifests.
///
/// # Example
///
/// ```rust,no_run
/// use runfiles_test_utils::fixture::RunfilesFixture;
///
/// let fixture = RunfilesFixture::new();
/// let staged = fixture.stage("my_repo/data/greeting.txt", "hello");
/// fixture.write_manifest(&[("my_repo/data/greeting.txt", staged.to_str().unwrap())]);
/// ```
pub struct RunfilesFixture {
    temp_dir: TempDir,
}

impl Default for RunfilesFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl RunfilesFixture {
    /// Create a temporary directory holding an empty `app.runfiles/` tree.
    pub fn new() -> Self {
        let fixture = Self {
            temp_dir: TempDir::new().expect("RunfilesFixture::new: failed to create temp dir"),
        };
        fs::create_dir(fixture.runfiles_dir())
            .expect("RunfilesFixture::new: failed to create runfiles dir");
        fixture
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The runfiles directory root, `<root>/app.runfiles`.
    pub fn runfiles_dir(&self) -> PathBuf {
        self.root().join("app.runfiles")
    }

    /// The manifest path, `<root>/app.runfiles_manifest`. The file exists
    /// only after a `write_manifest*` call.
    pub fn manifest_path(&self) -> PathBuf {
        self.root().join("app.runfiles_manifest")
    }

    /// A plausible `argv[0]` for binary-adjacent discovery, `<root>/app`.
    pub fn argv0(&self) -> PathBuf {
        self.root().join("app")
    }

    /// Write `content` to `logical` inside the runfiles directory,
    /// creating parent directories as needed. Returns the absolute path
    /// of the staged file, ready to be used as a manifest target.
    pub fn stage(&self, logical: &str, content: &str) -> PathBuf {
        let full = self.runfiles_dir().join(logical);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .expect("RunfilesFixture::stage: failed to create parent dirs");
        }
        fs::write(&full, content).expect("RunfilesFixture::stage: failed to write runfile");
        full
    }

    /// Write a manifest mapping each logical path to its target. An empty
    /// target produces the trailing-space form Bazel uses for
    /// intentionally empty runfiles.
    pub fn write_manifest(&self, entries: &[(&str, &str)]) -> PathBuf {
        let text = entries
            .iter()
            .map(|(logical, target)| format!("{logical} {target}\n"))
            .collect::<String>();
        self.write_manifest_raw(&text)
    }

    /// Write manifest content verbatim, for malformed-input scenarios.
    pub fn write_manifest_raw(&self, text: &str) -> PathBuf {
        let path = self.manifest_path();
        fs::write(&path, text).expect("RunfilesFixture::write_manifest: failed to write manifest");
        path
    }

    /// Stage a `_repo_mapping` runfile from `(source, apparent, canonical)`
    /// triples. Returns the staged absolute path so manifest-backed tests
    /// can list it as an entry.
    pub fn write_repo_mapping(&self, entries: &[(&str, &str, &str)]) -> PathBuf {
        let text = entries
            .iter()
            .map(|(source, apparent, canonical)| format!("{source},{apparent},{canonical}\n"))
            .collect::<String>();
        self.stage("_repo_mapping", &text)
    }
}
