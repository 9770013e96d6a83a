//! Tests for configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::*;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.paths.dist, PathBuf::from("dist"));
    assert_eq!(settings.paths.images, PathBuf::from("images"));
    assert_eq!(settings.paths.templates, PathBuf::from("templates"));
    assert_eq!(settings.pdf.program, "pdflatex");
    assert_eq!(settings.pdf.args, vec!["-interaction=nonstopmode"]);
}

#[test]
fn test_partial_toml() {
    let settings = Settings::from_toml_str(
        r#"
[pdf]
program = "xelatex"
"#,
    )
    .unwrap();
    assert_eq!(settings.pdf.program, "xelatex");
    // Unspecified values keep their defaults
    assert_eq!(settings.pdf.args, vec!["-interaction=nonstopmode"]);
    assert_eq!(settings.paths.dist, PathBuf::from("dist"));
}

#[test]
fn test_invalid_toml() {
    assert!(Settings::from_toml_str("[pdf\nprogram = 1").is_err());
}

#[test]
fn test_resolved_against_keeps_absolute_paths() {
    let settings = Settings::from_toml_str(
        r#"
[paths]
dist = "/var/out"
images = "img"
"#,
    )
    .unwrap()
    .resolved_against(Path::new("/work"));

    assert_eq!(settings.paths.dist, PathBuf::from("/var/out"));
    assert_eq!(settings.paths.images, PathBuf::from("/work/img"));
    assert_eq!(settings.paths.templates, PathBuf::from("/work/templates"));
}

#[test]
fn test_load_without_config_file() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load(None, dir.path()).unwrap();
    assert_eq!(settings.paths.dist, dir.path().join("dist"));
}

#[test]
fn test_load_from_cwd() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        "[paths]\ntemplates = \"tpl\"\n",
    )
    .unwrap();
    let settings = Settings::load(None, dir.path()).unwrap();
    assert_eq!(settings.paths.templates, dir.path().join("tpl"));
}

#[test]
fn test_load_explicit_resolves_against_file_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("conf");
    fs::create_dir_all(&nested).unwrap();
    let file = nested.join("custom.toml");
    fs::write(&file, "[paths]\ndist = \"build\"\n").unwrap();

    let settings = Settings::load(Some(file.as_path()), dir.path()).unwrap();
    assert_eq!(settings.paths.dist, nested.join("build"));
}

#[test]
fn test_load_explicit_missing() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = Settings::load(Some(missing.as_path()), dir.path()).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}
