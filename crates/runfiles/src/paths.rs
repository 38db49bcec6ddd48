//! Logical runfile path validation
//!
//! Logical paths are relative, forward-slash separated identifiers whose
//! first segment is conventionally a repository name. The checks here
//! reject input no resolution table could contain, before any backend
//! work happens.

use crate::error::{Error, Result};

/// Validate a logical runfile path.
///
/// Accepted paths are non-empty, relative, forward-slash separated, and
/// free of `.` segments, `..` segments, and empty segments. Anything else
/// is reported as [`Error::InvalidPath`].
pub fn validate_logical_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(Error::invalid_path(path, "path may not be empty"));
    }
    if path.contains('\\') {
        return Err(Error::invalid_path(
            path,
            "path must not contain backslashes; use forward slashes",
        ));
    }
    if is_absolute(path) {
        return Err(Error::invalid_path(path, "path must be relative"));
    }
    if path == ".." || path.starts_with("../") || path.contains("/../") || path.ends_with("/..") {
        return Err(Error::invalid_path(
            path,
            "path must not contain '..' segments",
        ));
    }
    if path == "." || path.starts_with("./") || path.contains("/./") || path.ends_with("/.") {
        return Err(Error::invalid_path(
            path,
            "path must not contain '.' segments",
        ));
    }
    if path.contains("//") {
        return Err(Error::invalid_path(
            path,
            "path must not contain empty segments",
        ));
    }
    Ok(())
}

/// Absolute-path markers: a leading slash or a Windows drive prefix.
fn is_absolute(path: &str) -> bool {
    if path.starts_with('/') {
        return true;
    }
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("my_repo/files/a")]
    #[case("_main/pkg/data.txt")]
    #[case("single_segment")]
    #[case("repo/deeply/nested/tree/leaf")]
    #[case("repo/with space/file")]
    fn accepts_well_formed_paths(#[case] path: &str) {
        assert!(validate_logical_path(path).is_ok(), "rejected {path:?}");
    }

    #[rstest]
    #[case("", "empty")]
    #[case("repo\\files\\a", "backslashes")]
    #[case("/etc/passwd", "relative")]
    #[case("C:/data/file", "relative")]
    #[case("c:file", "relative")]
    #[case("..", "'..' segments")]
    #[case("../escape", "'..' segments")]
    #[case("repo/../other", "'..' segments")]
    #[case("repo/files/..", "'..' segments")]
    #[case(".", "'.' segments")]
    #[case("./repo/file", "'.' segments")]
    #[case("repo/./file", "'.' segments")]
    #[case("repo/files/.", "'.' segments")]
    #[case("repo//file", "empty segments")]
    fn rejects_malformed_paths(#[case] path: &str, #[case] reason_fragment: &str) {
        match validate_logical_path(path) {
            Err(Error::InvalidPath { reason, .. }) => {
                assert!(
                    reason.contains(reason_fragment),
                    "reason {reason:?} for {path:?} should mention {reason_fragment:?}"
                );
            }
            other => panic!("expected InvalidPath for {path:?}, got {other:?}"),
        }
    }

    #[test]
    fn drive_prefix_requires_letter() {
        // "1:foo" is not a drive prefix; it is a legal (if odd) file name.
        assert!(validate_logical_path("1:foo").is_ok());
    }

    #[test]
    fn trailing_slash_is_an_empty_segment_at_lookup_time_not_rejected_here() {
        // Kept permissive: a trailing slash never matches a table entry, so
        // lookup reports it as not found rather than as a usage error.
        assert!(validate_logical_path("repo/dir/").is_ok());
    }
}
