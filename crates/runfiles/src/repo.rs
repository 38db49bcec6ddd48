//! Repository attribution from compiled source-file paths
//!
//! The same compiled library is linked into binaries across many
//! repositories, so "which repository asked?" cannot come from global
//! process state. It is derived from the source location of the call
//! site instead: paths compiled under a legacy external-repository layout
//! carry the repository name in a recognizable prefix, everything else
//! belongs to the main repository.

use std::panic::Location;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MAIN_REPOSITORY;

/// Generated-output layout of legacy external repositories:
/// `bazel-out/<config>/bin/external/<repo>/...`
static LEGACY_EXTERNAL_GENERATED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^bazel-out/[^/]+/bin/external/([^/]+)/").unwrap());

/// Source layout of legacy external repositories: `external/<repo>/...`
static LEGACY_EXTERNAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^external/([^/]+)/").unwrap());

/// Canonical name of the repository a compiled source-file path belongs to.
///
/// Files outside both legacy external layouts are in the main repository,
/// whose canonical name is the empty string.
pub(crate) fn repository_from_file(file: &str) -> &str {
    if let Some(caps) = LEGACY_EXTERNAL_GENERATED.captures(file) {
        if let Some(repo) = caps.get(1) {
            return repo.as_str();
        }
    }
    if let Some(caps) = LEGACY_EXTERNAL.captures(file) {
        if let Some(repo) = caps.get(1) {
            return repo.as_str();
        }
    }
    MAIN_REPOSITORY
}

/// Canonical name of the repository containing the source file that calls
/// this function.
#[track_caller]
pub fn current_repository() -> &'static str {
    repository_from_file(Location::caller().file())
}

/// Canonical name of the repository containing the source file that calls
/// the function which itself calls `caller_repository`.
///
/// Meant for public entry points that resolve runfiles on behalf of their
/// callers: mark the entry point `#[track_caller]` and the location (and
/// with it the repository) of *its* call site propagates down to here. An
/// entry point without `#[track_caller]` is attributed to itself, exactly
/// as [`current_repository`] would.
#[track_caller]
pub fn caller_repository() -> &'static str {
    current_repository()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("bazel-out/k8-fastbuild/bin/external/foo/pkg/file.rs", "foo")]
    #[case("bazel-out/darwin_arm64-opt/bin/external/my~dep~v2/lib.rs", "my~dep~v2")]
    #[case("external/bar/pkg/file.rs", "bar")]
    #[case("pkg/file.rs", "")]
    #[case("src/main.rs", "")]
    // The generated-output prefix must be anchored: a path merely
    // mentioning external/ deeper down is still the main repository.
    #[case("pkg/external-ish/file.rs", "")]
    #[case("some/external/bar/file.rs", "")]
    // A bare `external/<repo>` with no trailing segment names no file.
    #[case("external/bar", "")]
    #[case("bazel-out/k8-fastbuild/bin/pkg/file.rs", "")]
    fn attributes_files_to_repositories(#[case] file: &str, #[case] repo: &str) {
        assert_eq!(repository_from_file(file), repo);
    }

    #[test]
    fn current_repository_in_this_build_is_the_main_repository() {
        // This test file is compiled from a plain workspace path, not a
        // legacy external layout.
        assert_eq!(current_repository(), "");
    }

    #[test]
    fn caller_repository_attributes_through_a_tracked_entry_point() {
        #[track_caller]
        fn entry_point() -> &'static str {
            caller_repository()
        }
        assert_eq!(entry_point(), "");
    }
}
