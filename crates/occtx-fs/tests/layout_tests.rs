use assert_fs::prelude::*;
use occtx_fs::{OcctxPath, Paths, Scope};
use predicates::prelude::*;
use rstest::rstest;

fn sandbox() -> (assert_fs::TempDir, Paths) {
    let temp = assert_fs::TempDir::new().unwrap();
    let home = temp.path().join("home");
    let cwd = temp.path().join("project");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&cwd).unwrap();
    let paths = Paths::from_roots(&home, &cwd);
    (temp, paths)
}

#[rstest]
#[case(Scope::Global)]
#[case(Scope::Project)]
fn scope_paths_are_under_scope_root(#[case] scope: Scope) {
    let (_temp, paths) = sandbox();
    let root = paths.config_dir(scope);

    assert!(paths.contexts_dir(scope).starts_with(root));
    assert!(paths.state_file(scope).starts_with(paths.contexts_dir(scope)));
    assert!(paths.state_file(scope).ends_with(OcctxPath::StateFile));
    assert!(paths.active_config(scope).ends_with(OcctxPath::ActiveConfig));
}

#[rstest]
#[case(Scope::Global)]
#[case(Scope::Project)]
fn ensure_directories_is_idempotent(#[case] scope: Scope) {
    let (_temp, paths) = sandbox();

    paths.ensure_directories(scope).unwrap();
    paths.ensure_directories(scope).unwrap();

    assert!(predicate::path::is_dir().eval(paths.config_dir(scope)));
    assert!(predicate::path::is_dir().eval(paths.contexts_dir(scope)));
}

#[test]
fn has_contexts_false_when_directory_missing() {
    let (_temp, paths) = sandbox();
    assert!(!paths.has_contexts(Scope::Project));
}

#[test]
fn has_contexts_ignores_state_and_other_files() {
    let (temp, paths) = sandbox();
    paths.ensure_directories(Scope::Project).unwrap();

    let settings = temp.child("project/opencode/settings");
    settings.child(".occtx-state.json").write_str("{}").unwrap();
    settings.child("notes.txt").write_str("hi").unwrap();
    settings.child("nested.json").create_dir_all().unwrap();
    assert!(!paths.has_contexts(Scope::Project));

    settings.child("work.jsonc").write_str("{}").unwrap();
    assert!(paths.has_contexts(Scope::Project));
    assert!(!paths.has_contexts(Scope::Global));
}

#[cfg(unix)]
#[test]
fn has_contexts_follows_symlinks_to_files_only() {
    use std::os::unix::fs::symlink;

    let (temp, paths) = sandbox();
    paths.ensure_directories(Scope::Project).unwrap();
    let settings = temp.child("project/opencode/settings");
    let elsewhere = temp.child("elsewhere");
    elsewhere.create_dir_all().unwrap();

    symlink(elsewhere.path(), settings.child("dir-link.json").path()).unwrap();
    assert!(!paths.has_contexts(Scope::Project));

    let target = temp.child("shared.json");
    target.write_str("{}").unwrap();
    symlink(target.path(), settings.child("linked.json").path()).unwrap();
    assert!(paths.has_contexts(Scope::Project));
}
