//! Well-known names of the runfiles contract

/// Environment variable holding the path of a runfiles manifest file.
///
/// When set and non-empty, it selects the manifest backend.
pub const MANIFEST_FILE_VAR: &str = "RUNFILES_MANIFEST_FILE";

/// Environment variable holding the path of a runfiles directory root.
///
/// Consulted when [`MANIFEST_FILE_VAR`] is unset; selects the directory
/// backend.
pub const DIR_VAR: &str = "RUNFILES_DIR";

/// Legacy alias for [`DIR_VAR`], still exported for subprocesses that
/// predate the current variable name.
pub const LEGACY_DIR_VAR: &str = "JAVA_RUNFILES";

/// Canonical name of the main repository.
pub const MAIN_REPOSITORY: &str = "";

/// Logical path of the repository mapping runfile.
///
/// Binaries built without bzlmod do not declare it; its absence simply
/// means apparent repository names are already canonical.
pub(crate) const REPO_MAPPING_RUNFILE: &str = "_repo_mapping";

/// Suffix of a manifest staged next to the binary (`<argv0>.runfiles_manifest`).
pub(crate) const MANIFEST_SUFFIX: &str = ".runfiles_manifest";

/// Suffix of a runfiles directory staged next to the binary (`<argv0>.runfiles`).
pub(crate) const DIR_SUFFIX: &str = ".runfiles";
