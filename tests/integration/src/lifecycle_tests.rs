//! Multi-step workflows across occtx-fs and occtx-core
//!
//! Each step builds a fresh `ContextManager`, the way separate `occtx`
//! invocations would, so nothing survives between steps except the files.

use occtx_core::{ContextFormat, ContextManager, ErrorKind, Scope};
use occtx_test_utils::{Sandbox, sample_config};
use pretty_assertions::assert_eq;
use serde_json::json;

fn fresh(sandbox: &Sandbox, scope: Scope) -> ContextManager {
    ContextManager::new(sandbox.paths(), scope)
}

fn names(sandbox: &Sandbox, scope: Scope) -> Vec<String> {
    fresh(sandbox, scope)
        .list_all()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect()
}

#[test]
fn test_context_management_workflow() {
    let sandbox = Sandbox::new();
    sandbox.write_active(Scope::Global, &sample_config());

    for name in ["dev", "staging", "prod"] {
        fresh(&sandbox, Scope::Global)
            .create(name, ContextFormat::Json)
            .unwrap();
    }
    assert_eq!(names(&sandbox, Scope::Global), vec!["dev", "prod", "staging"]);

    fresh(&sandbox, Scope::Global).switch("staging").unwrap();
    fresh(&sandbox, Scope::Global).switch("prod").unwrap();
    assert_eq!(
        fresh(&sandbox, Scope::Global).switch_to_previous().unwrap(),
        "staging"
    );

    fresh(&sandbox, Scope::Global).rename("dev", "development").unwrap();
    assert_eq!(
        names(&sandbox, Scope::Global),
        vec!["development", "prod", "staging"]
    );

    let err = fresh(&sandbox, Scope::Global).delete("staging").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CurrentContextProtected);

    fresh(&sandbox, Scope::Global).switch("development").unwrap();
    fresh(&sandbox, Scope::Global).delete("staging").unwrap();
    assert_eq!(names(&sandbox, Scope::Global), vec!["development", "prod"]);

    let err = fresh(&sandbox, Scope::Global).delete("non-existent").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_state_survives_between_invocations() {
    let sandbox = Sandbox::new();
    sandbox.write_active(Scope::Global, &sample_config());
    fresh(&sandbox, Scope::Global).create("context1", ContextFormat::Json).unwrap();
    fresh(&sandbox, Scope::Global).create("context2", ContextFormat::Jsonc).unwrap();

    fresh(&sandbox, Scope::Global).switch("context1").unwrap();
    fresh(&sandbox, Scope::Global).switch("context2").unwrap();
    fresh(&sandbox, Scope::Global).switch_to_previous().unwrap();
    assert_eq!(
        fresh(&sandbox, Scope::Global).current().unwrap().as_deref(),
        Some("context1")
    );

    fresh(&sandbox, Scope::Global).unset().unwrap();
    assert_eq!(fresh(&sandbox, Scope::Global).current().unwrap(), None);
    assert!(!sandbox.paths().active_config(Scope::Global).exists());
}

#[test]
fn test_format_support_side_by_side() {
    let sandbox = Sandbox::new();
    sandbox.write_active(Scope::Global, &json!({"flavor": "plain"}));
    fresh(&sandbox, Scope::Global).create("plain", ContextFormat::Json).unwrap();
    sandbox.write_active(Scope::Global, &json!({"flavor": "commented"}));
    fresh(&sandbox, Scope::Global).create("commented", ContextFormat::Jsonc).unwrap();

    let contexts = fresh(&sandbox, Scope::Global).list_all().unwrap();
    let formats: Vec<_> = contexts.iter().map(|c| (c.name.as_str(), c.format)).collect();
    assert_eq!(
        formats,
        vec![
            ("commented", ContextFormat::Jsonc),
            ("plain", ContextFormat::Json),
        ]
    );

    // Switching copies bytes verbatim, so the JSONC header lands in the active file
    fresh(&sandbox, Scope::Global).switch("commented").unwrap();
    let active = std::fs::read_to_string(sandbox.paths().active_config(Scope::Global)).unwrap();
    assert!(active.starts_with("// opencode context: commented\n"));

    fresh(&sandbox, Scope::Global).switch("plain").unwrap();
    assert_eq!(sandbox.read_active(Scope::Global), json!({"flavor": "plain"}));
}

#[test]
fn test_scopes_keep_separate_histories() {
    let sandbox = Sandbox::new();
    sandbox.write_context_file(Scope::Global, "g.json", r#"{"scope": "global"}"#);
    sandbox.write_context_file(Scope::Project, "p.json", r#"{"scope": "project"}"#);

    fresh(&sandbox, Scope::Global).switch("g").unwrap();
    fresh(&sandbox, Scope::Project).switch("p").unwrap();

    assert_eq!(sandbox.read_active(Scope::Global), json!({"scope": "global"}));
    assert_eq!(sandbox.read_active(Scope::Project), json!({"scope": "project"}));
    assert_eq!(
        fresh(&sandbox, Scope::Global).current().unwrap().as_deref(),
        Some("g")
    );
    assert_eq!(
        fresh(&sandbox, Scope::Project).current().unwrap().as_deref(),
        Some("p")
    );
    assert!(matches!(
        fresh(&sandbox, Scope::Project).switch("g").unwrap_err().kind(),
        ErrorKind::NotFound
    ));
}

#[test]
fn test_missing_active_config_cannot_be_saved() {
    let sandbox = Sandbox::new();
    let err = fresh(&sandbox, Scope::Global)
        .create("work", ContextFormat::Json)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceInvalid);
    assert!(names(&sandbox, Scope::Global).is_empty());
}

#[test]
fn test_name_collision_across_formats() {
    let sandbox = Sandbox::new();
    sandbox.write_active(Scope::Global, &sample_config());
    let manager = fresh(&sandbox, Scope::Global);
    manager.create("work", ContextFormat::Jsonc).unwrap();
    manager.create("other", ContextFormat::Json).unwrap();

    assert_eq!(
        manager.create("work", ContextFormat::Json).unwrap_err().kind(),
        ErrorKind::AlreadyExists
    );
    assert_eq!(
        manager.rename("other", "work").unwrap_err().kind(),
        ErrorKind::AlreadyExists
    );
    assert_eq!(
        manager.import("work", b"{}").unwrap_err().kind(),
        ErrorKind::AlreadyExists
    );
}
