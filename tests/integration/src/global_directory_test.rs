//! Process-global resolution through `RUNFILES_DIR`

use runfiles::{DIR_VAR, Error, LEGACY_DIR_VAR, MANIFEST_FILE_VAR};
use runfiles_test_utils::env::ScopedEnv;
use runfiles_test_utils::fixture::RunfilesFixture;
use runfiles_test_utils::logging;

#[test]
fn global_functions_resolve_through_the_directory_environment() {
    logging::init();

    let fixture = RunfilesFixture::new();
    fixture.write_repo_mapping(&[("", "dep", "dep~v2")]);
    let staged = fixture.stage("dep~v2/cfg.toml", "retries = 3\n");

    let mut env = ScopedEnv::new();
    env.remove(MANIFEST_FILE_VAR);
    env.set(DIR_VAR, fixture.runfiles_dir());

    // Apparent and canonical spellings land on the same file.
    assert_eq!(runfiles::rlocation("dep/cfg.toml").unwrap(), staged);
    assert_eq!(runfiles::rlocation("dep~v2/cfg.toml").unwrap(), staged);

    assert!(matches!(
        runfiles::rlocation("dep/absent.toml"),
        Err(Error::RunfileNotFound { .. })
    ));

    let vars = runfiles::env().unwrap();
    let root = fixture.runfiles_dir();
    assert!(vars.contains(&format!("{DIR_VAR}={}", root.to_str().unwrap())));
    assert!(vars.contains(&format!("{LEGACY_DIR_VAR}={}", root.to_str().unwrap())));
}
