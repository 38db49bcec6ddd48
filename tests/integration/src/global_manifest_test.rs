//! Process-global resolution through `RUNFILES_MANIFEST_FILE`
//!
//! The free functions memoize their first discovery, so this binary
//! holds exactly one scenario, staged before any lookup runs.

use runfiles::{DIR_VAR, Error, MANIFEST_FILE_VAR, Runfiles};
use runfiles_test_utils::env::ScopedEnv;
use runfiles_test_utils::fixture::RunfilesFixture;
use runfiles_test_utils::logging;

#[test]
fn global_functions_resolve_through_the_manifest_environment() {
    logging::init();

    let fixture = RunfilesFixture::new();
    let mapping = fixture.write_repo_mapping(&[("", "lib", "lib~v1")]);
    let mapped = fixture.stage("lib~v1/data/f.txt", "payload");
    let plain = fixture.stage("my_repo/plain.txt", "plain");
    let manifest = fixture.write_manifest(&[
        ("_repo_mapping", mapping.to_str().unwrap()),
        ("lib~v1/data/f.txt", mapped.to_str().unwrap()),
        ("my_repo/plain.txt", plain.to_str().unwrap()),
    ]);

    let mut env = ScopedEnv::new();
    env.set(MANIFEST_FILE_VAR, &manifest);
    env.remove(DIR_VAR);

    // This file is not compiled out of any external repository, so the
    // implicit attribution is the main repository and its mapping row.
    assert_eq!(runfiles::current_repository(), "");
    assert_eq!(runfiles::rlocation("lib/data/f.txt").unwrap(), mapped);
    assert_eq!(runfiles::rlocation("my_repo/plain.txt").unwrap(), plain);

    // An explicit source repository with no mapping row gets no rewrite,
    // and the apparent name alone is not in the manifest.
    assert!(matches!(
        runfiles::rlocation_from("lib/data/f.txt", "other~repo"),
        Err(Error::RunfileNotFound { .. })
    ));

    let all = runfiles::rlocations("lib/data/f.txt my_repo/plain.txt").unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all["lib/data/f.txt"], mapped);
    assert_eq!(all["my_repo/plain.txt"], plain);

    // A child handed env() can rebuild an equivalent resolver.
    let child_env = runfiles::env().unwrap();
    let manifest_for_child = child_env
        .iter()
        .find_map(|kv| kv.strip_prefix(&format!("{MANIFEST_FILE_VAR}=")))
        .expect("env() must name the manifest");
    let child = Runfiles::from_manifest(manifest_for_child).unwrap();
    assert_eq!(child.rlocation("my_repo/plain.txt").unwrap(), plain);

    // Discovery already happened; changing the environment afterwards
    // does not change the process-wide resolver.
    env.set(MANIFEST_FILE_VAR, "/nonexistent/MANIFEST");
    assert_eq!(runfiles::rlocation("my_repo/plain.txt").unwrap(), plain);
}
