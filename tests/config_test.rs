// tests/config_test.rs
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};
use version_stamp::config::{load_config, Config, CONFIG_FILE_NAME};
use version_stamp::StampError;

#[test]
fn test_default_config() {
    let config = Config::default();
    let paths: Vec<&str> = config.targets.iter().map(|t| t.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "build.bat",
            "build.sh",
            "wix/make-wix-installer.bat",
            "wix/Product.wxs",
            "src/version.h",
        ]
    );
    assert_eq!(config.templates.dir, "templates");
    assert_eq!(config.templates.output_dir, ".");
    assert_eq!(config.templates.placeholder, "{VERSION}");
    assert!(!config.behavior.verify);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[[targets]]
path = "Cargo.toml"
pattern = '^version = "[0-9]+\.[0-9]+\.[0-9]+"'
replacement = 'version = "{version}"'

[templates]
placeholder = "@VERSION@"

[behavior]
verify = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path()), Path::new(".")).unwrap();
    assert_eq!(config.targets.len(), 1);
    assert_eq!(config.targets[0].path, "Cargo.toml");
    assert!(!config.targets[0].replace_all);
    assert_eq!(config.templates.placeholder, "@VERSION@");
    assert_eq!(config.templates.dir, "templates");
    assert!(config.behavior.verify);
}

#[test]
fn test_load_from_project_root() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[templates]\ndir = \"release-templates\"\n",
    )
    .unwrap();

    let config = load_config(None, dir.path()).unwrap();
    assert_eq!(config.templates.dir, "release-templates");
    assert_eq!(config.targets.len(), 5);
}

#[test]
fn test_invalid_pattern_rejected_at_load() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[[targets]]\npath = \"a\"\npattern = \"([0-9]+\"\nreplacement = \"{version}\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path()), Path::new(".")).unwrap_err();
    assert!(matches!(err, StampError::Pattern { .. }));
}

#[test]
fn test_replacement_without_placeholder_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[[targets]]\npath = \"a\"\npattern = \"x\"\nreplacement = \"1.0.0\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path()), Path::new(".")).unwrap_err();
    assert!(matches!(err, StampError::Config(_)));
}

#[test]
fn test_malformed_toml_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[[targets]\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path()), Path::new(".")).unwrap_err();
    assert!(matches!(err, StampError::Toml(_)));
}

#[test]
fn test_missing_custom_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = load_config(Some(missing.as_path()), dir.path()).unwrap_err();
    assert!(matches!(err, StampError::Io { .. }));
}
