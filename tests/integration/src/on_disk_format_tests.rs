//! Byte-level checks of the files occtx leaves behind

use occtx_core::{ContextFormat, ContextManager, Scope, State};
use occtx_fs::OcctxPath;
use occtx_test_utils::{Sandbox, sample_config};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_state_file_layout() {
    let sandbox = Sandbox::new();
    sandbox.write_context_file(Scope::Global, "work.json", "{}");
    sandbox.write_context_file(Scope::Global, "home.json", "{}");
    let manager = ContextManager::new(sandbox.paths(), Scope::Global);
    manager.switch("home").unwrap();
    manager.switch("work").unwrap();

    let state_path = sandbox.paths().state_file(Scope::Global).to_path_buf();
    assert_eq!(
        state_path,
        sandbox
            .home
            .join(OcctxPath::GlobalConfigDir)
            .join(OcctxPath::SettingsDir)
            .join(OcctxPath::StateFile)
    );
    assert_eq!(
        fs::read_to_string(&state_path).unwrap(),
        "{\n  \"current\": \"work\",\n  \"previous\": \"home\"\n}"
    );

    manager.unset().unwrap();
    assert_eq!(
        fs::read_to_string(&state_path).unwrap(),
        "{\n  \"previous\": \"work\"\n}"
    );
}

#[test]
fn test_plain_json_context_is_pretty_printed() {
    let sandbox = Sandbox::new();
    sandbox.write_active_raw(Scope::Global, r#"{"theme":"dark","n":1}"#);
    let manager = ContextManager::new(sandbox.paths(), Scope::Global);

    let context = manager.create("work", ContextFormat::Json).unwrap();

    let raw = fs::read_to_string(&context.file_path).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(reparsed, serde_json::json!({"theme": "dark", "n": 1}));
    assert!(raw.contains("\n  \"theme\": \"dark\""));
}

#[test]
fn test_jsonc_header_then_body() {
    let sandbox = Sandbox::new();
    sandbox.write_active(Scope::Global, &sample_config());
    let manager = ContextManager::new(sandbox.paths(), Scope::Global);

    let context = manager.create("work", ContextFormat::Jsonc).unwrap();

    let raw = fs::read_to_string(&context.file_path).unwrap();
    let mut lines = raw.lines();
    assert_eq!(lines.next(), Some("// opencode context: work"));
    assert_eq!(lines.next(), Some("// Format: JSONC"));
    assert!(lines.next().unwrap().starts_with("// Created: "));
    let body: String = lines.collect::<Vec<_>>().join("\n");
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed, sample_config());
}

#[test]
fn test_corrupt_state_file_is_recovered() {
    let sandbox = Sandbox::new();
    sandbox.write_context_file(Scope::Global, ".occtx-state.json", "{{{{");
    sandbox.write_context_file(Scope::Global, "work.json", "{}");
    let manager = ContextManager::new(sandbox.paths(), Scope::Global);

    assert_eq!(manager.state().unwrap(), State::default());
    manager.switch("work").unwrap();
    assert_eq!(manager.current().unwrap().as_deref(), Some("work"));
}

#[test]
fn test_project_active_config_lives_in_working_directory() {
    let sandbox = Sandbox::new();
    sandbox.write_context_file(Scope::Project, "p.json", r#"{"p": true}"#);
    ContextManager::new(sandbox.paths(), Scope::Project)
        .switch("p")
        .unwrap();

    assert!(sandbox.project.join("opencode.json").is_file());
    assert!(!sandbox.project.join("opencode").join("opencode.json").exists());
}
