//! Tests for the config module

use super::*;
use crate::domain::value_objects::EntryMode;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.entry.mode(), EntryMode::Template);
    assert_eq!(config.workspace.dir, PathBuf::from(".skeleton"));
    assert_eq!(config.bundler.program, "npx");
    assert_eq!(config.bundler.args, vec!["--no-install", "webpack"]);
    assert_eq!(config.renderer.program, "node");
    assert!(config.html.template.is_none());
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[entry]
copy_template = true
template = "tpl/entry.js"

[workspace]
dir = "build/skeleton"

[bundler]
program = "node"
args = ["node_modules/webpack/bin/webpack.js"]

[html]
template = "public/skeleton.html"

[output]
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.entry.mode(), EntryMode::Copy);
    assert_eq!(config.entry.template, Some(PathBuf::from("tpl/entry.js")));
    assert_eq!(config.workspace.dir, PathBuf::from("build/skeleton"));
    assert_eq!(config.bundler.program, "node");
    assert_eq!(config.bundler.args.len(), 1);
    assert_eq!(config.renderer.program, "node");
    assert_eq!(config.html.template, Some(PathBuf::from("public/skeleton.html")));
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_partial_section_keeps_defaults() {
    let config: Config = toml::from_str("[bundler]\nprogram = \"pnpm\"\n").unwrap();
    assert_eq!(config.bundler.program, "pnpm");
    assert_eq!(config.bundler.args, vec!["--no-install", "webpack"]);
}

#[test]
fn test_unknown_key_warns_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("skeleton.toml");
    fs::write(&path, "[entry]\ncopy_templat = true\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.entry.mode(), EntryMode::Template);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "copy_templat");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("copy_template"));
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("skeleton.toml");
    fs::write(&path, "[entry\ncopy_template = ").unwrap();

    let err = load_with_warnings(&path).unwrap_err();
    assert!(matches!(err, crate::error::SkeletonError::InvalidConfig { .. }));
}

#[test]
fn test_load_layered_prefers_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "[workspace]\ndir = \"tmp/sk\"\n",
    )
    .unwrap();

    let loaded = load_layered(dir.path(), None).unwrap();
    assert_eq!(loaded.source, Some(dir.path().join(PROJECT_CONFIG_FILE)));
    assert_eq!(loaded.config.workspace.dir, PathBuf::from("tmp/sk"));
}

#[test]
fn test_load_layered_explicit_missing_file_fails() {
    let dir = tempdir().unwrap();
    let result = load_layered(dir.path(), Some(std::path::Path::new("nope.toml")));
    assert!(result.is_err());
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides_from(
        Config::default(),
        env(&[
            ("SKELETON_COPY_TEMPLATE", "true"),
            ("SKELETON_WORKSPACE", "/tmp/ws"),
            ("SKELETON_BUNDLER", "node ./webpack.js --mode production"),
            ("SKELETON_NODE", "/usr/local/bin/node"),
            ("SKELETON_NO_COLOR", "1"),
        ]),
    );

    assert_eq!(config.entry.mode(), EntryMode::Copy);
    assert_eq!(config.workspace.dir, PathBuf::from("/tmp/ws"));
    assert_eq!(config.bundler.program, "node");
    assert_eq!(config.bundler.args, vec!["./webpack.js", "--mode", "production"]);
    assert_eq!(config.renderer.program, "/usr/local/bin/node");
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_env_copy_template_false_values() {
    let mut base = Config::default();
    base.entry.copy_template = true;

    for falsy in ["0", "false", "FALSE", "no", ""] {
        let config =
            with_env_overrides_from(base.clone(), env(&[("SKELETON_COPY_TEMPLATE", falsy)]));
        assert_eq!(config.entry.mode(), EntryMode::Template, "value {falsy:?}");
    }
}

#[test]
fn test_empty_env_values_do_not_clobber() {
    let config = with_env_overrides_from(
        Config::default(),
        env(&[("SKELETON_WORKSPACE", " "), ("SKELETON_BUNDLER", "")]),
    );
    assert_eq!(config.workspace.dir, PathBuf::from(".skeleton"));
    assert_eq!(config.bundler.program, "npx");
}
