//! Runfiles resolution for Bazel-built binaries
//!
//! Maps logical runfile paths (`repository/package/file`) to absolute
//! filesystem paths, over either a runfiles manifest or a runfiles
//! directory. [`Runfiles`] is the explicit resolver; [`rlocation`] and
//! friends share one process-wide resolver located on first use.

mod backend;
pub mod constants;
mod directory;
pub mod error;
mod global;
mod manifest;
mod mapping;
pub mod paths;
mod repo;
mod resolver;

pub use constants::{DIR_VAR, LEGACY_DIR_VAR, MAIN_REPOSITORY, MANIFEST_FILE_VAR};
pub use error::{Error, Result};
pub use global::{env, rlocation, rlocation_from, rlocations, rlocations_from};
pub use paths::validate_logical_path;
pub use repo::{caller_repository, current_repository};
pub use resolver::Runfiles;
