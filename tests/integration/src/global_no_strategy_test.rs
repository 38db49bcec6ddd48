//! Discovery failure is the memoized answer for the whole process

use runfiles::{DIR_VAR, Error, MANIFEST_FILE_VAR};
use runfiles_test_utils::env::ScopedEnv;
use runfiles_test_utils::fixture::RunfilesFixture;

#[test]
fn discovery_failure_is_stable_for_the_process() {
    let mut env = ScopedEnv::new();
    env.remove(MANIFEST_FILE_VAR);
    env.remove(DIR_VAR);

    // A cargo test binary has no .runfiles_manifest or .runfiles sibling,
    // so with both variables unset there is nothing to discover.
    let first = runfiles::rlocation("repo/f.txt").unwrap_err();
    assert!(matches!(first, Error::NoRunfilesStrategy));

    // Even once the environment would allow discovery, the first outcome
    // stands: later calls must not silently switch resolvers mid-process.
    let fixture = RunfilesFixture::new();
    env.set(DIR_VAR, fixture.runfiles_dir());

    let second = runfiles::env().unwrap_err();
    assert!(matches!(second, Error::NoRunfilesStrategy));
    assert_eq!(first.to_string(), second.to_string());

    let third = runfiles::rlocations("repo/f.txt").unwrap_err();
    assert!(matches!(third, Error::NoRunfilesStrategy));
}
