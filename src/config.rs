use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::TargetRule;
use crate::error::{Result, StampError};

/// Name of the per-project configuration file, looked up in the project root
pub const CONFIG_FILE_NAME: &str = "versionstamp.toml";

/// Represents the complete configuration for version-stamp.
///
/// Contains the ordered target table, template expansion settings and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_targets")]
    pub targets: Vec<TargetConfig>,

    #[serde(default)]
    pub templates: TemplatesConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// One row of the target table: which file, what to match, what to write.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TargetConfig {
    /// Path relative to the project root
    pub path: String,

    /// Regular expression matching the embedded old version
    pub pattern: String,

    /// Replacement template containing {version}
    pub replacement: String,

    /// Replace every match instead of the first one
    #[serde(default)]
    pub replace_all: bool,
}

impl TargetConfig {
    fn new(path: &str, pattern: &str, replacement: &str, replace_all: bool) -> Self {
        TargetConfig {
            path: path.to_string(),
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            replace_all,
        }
    }

    /// Compile this row into a rule
    pub fn compile(&self) -> Result<TargetRule> {
        TargetRule::new(
            &self.path,
            &self.pattern,
            &self.replacement,
            self.replace_all,
        )
    }
}

/// Returns the default target table of the ImageToMapMC build pipeline.
fn default_targets() -> Vec<TargetConfig> {
    vec![
        TargetConfig::new(
            "build.bat",
            r"ImageToMapMC-[0-9]+\.[0-9]+\.[0-9]+-Windows-x64\.zip",
            "ImageToMapMC-{version}-Windows-x64.zip",
            true,
        ),
        TargetConfig::new(
            "build.sh",
            r"ImageToMapMC-[0-9]+\.[0-9]+\.[0-9]+-linux-x64\.tar\.gz",
            "ImageToMapMC-{version}-linux-x64.tar.gz",
            true,
        ),
        TargetConfig::new(
            "wix/make-wix-installer.bat",
            r"ImageToMapMC-[0-9]+\.[0-9]+\.[0-9]+-x64\.msi",
            "ImageToMapMC-{version}-x64.msi",
            true,
        ),
        TargetConfig::new(
            "wix/Product.wxs",
            r#"Name="ImageToMapMC" Version="[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+""#,
            r#"Name="ImageToMapMC" Version="{version}.0""#,
            false,
        ),
        TargetConfig::new(
            "src/version.h",
            r#"APP_VERSION\s"[0-9]+\.[0-9]+\.[0-9]+""#,
            r#"APP_VERSION "{version}""#,
            false,
        ),
    ]
}

fn default_template_dir() -> String {
    "templates".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_placeholder() -> String {
    "{VERSION}".to_string()
}

/// Configuration for template expansion.
///
/// Both directories are relative to the project root.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TemplatesConfig {
    #[serde(default = "default_template_dir")]
    pub dir: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        TemplatesConfig {
            dir: default_template_dir(),
            output_dir: default_output_dir(),
            placeholder: default_placeholder(),
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Check every target before writing any of them
    #[serde(default)]
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            targets: default_targets(),
            templates: TemplatesConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Config {
    /// Compile the target table in order, failing on the first invalid row
    pub fn rules(&self) -> Result<Vec<TargetRule>> {
        self.targets.iter().map(TargetConfig::compile).collect()
    }

    /// Check everything that can be checked without touching target files
    pub fn validate(&self) -> Result<()> {
        self.rules()?;
        if self.templates.placeholder.is_empty() {
            return Err(StampError::config("Template placeholder must not be empty"));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionstamp.toml` in the project root
/// 3. `.versionstamp.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration, validated
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    let config = match find_config_file(config_path, root) {
        Some(path) => {
            let config_str = fs::read_to_string(&path).map_err(|e| StampError::io(&path, e))?;
            toml::from_str::<Config>(&config_str)?
        }
        None => Config::default(),
    };

    config.validate()?;
    Ok(config)
}

fn find_config_file(config_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let project_config = root.join(CONFIG_FILE_NAME);
    if project_config.exists() {
        return Some(project_config);
    }

    let user_config = dirs::config_dir()?.join(format!(".{}", CONFIG_FILE_NAME));
    user_config.exists().then_some(user_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_compile() {
        let rules = Config::default().rules().unwrap();
        assert_eq!(rules.len(), 5);
        assert_eq!(rules[0].path(), Path::new("build.bat"));
        assert_eq!(rules[4].path(), Path::new("src/version.h"));
    }

    #[test]
    fn test_default_replace_all_flags() {
        let flags: Vec<bool> = Config::default()
            .targets
            .iter()
            .map(|t| t.replace_all)
            .collect();
        assert_eq!(flags, vec![true, true, true, false, false]);
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let mut config = Config::default();
        config.templates.placeholder = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[behavior]\nverify = true\n").unwrap();
        assert!(config.behavior.verify);
        assert_eq!(config.targets.len(), 5);
        assert_eq!(config.templates, TemplatesConfig::default());
    }
}
