use std::path::{Path, PathBuf};

use regex::{NoExpand, Regex};

use crate::domain::version::Version;
use crate::error::{Result, StampError};

/// Placeholder in a replacement template that receives the version string
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Replacement shape for an embedded version
/// (e.g., "ImageToMapMC-{version}-x64.msi", "Version=\"{version}.0\"")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub template: String,
}

impl Replacement {
    /// Create a replacement, rejecting templates without a {version} placeholder
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(VERSION_PLACEHOLDER) {
            return Err(StampError::config(format!(
                "Replacement '{}' must contain {{version}} placeholder",
                template
            )));
        }
        Ok(Replacement { template })
    }

    /// Render the replacement for a version
    /// Example: template="APP_VERSION \"{version}\"", version=1.2.3 -> "APP_VERSION \"1.2.3\""
    pub fn render(&self, version: &Version) -> String {
        self.template
            .replace(VERSION_PLACEHOLDER, &version.to_string())
    }
}

/// Result of applying a target rule to file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    /// The pattern matched and the content now differs
    Changed(String),
    /// The pattern matched but the content already carries the version
    Current,
    /// The pattern did not match anywhere
    NoMatch,
}

impl Substitution {
    pub fn is_changed(&self) -> bool {
        matches!(self, Substitution::Changed(_))
    }
}

/// A file whose content embeds the version in a fixed textual pattern
#[derive(Debug, Clone)]
pub struct TargetRule {
    path: PathBuf,
    pattern: Regex,
    replacement: Replacement,
    replace_all: bool,
}

impl TargetRule {
    /// Compile a rule; `path` is relative to the project root
    pub fn new(
        path: impl Into<PathBuf>,
        pattern: &str,
        replacement: impl Into<String>,
        replace_all: bool,
    ) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|source| StampError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(TargetRule {
            path: path.into(),
            pattern: compiled,
            replacement: Replacement::new(replacement)?,
            replace_all,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Substitute the embedded version in `content`.
    ///
    /// The rendered replacement is inserted literally, so `$` in a template is
    /// never treated as a capture reference.
    pub fn apply(&self, content: &str, version: &Version) -> Substitution {
        if !self.pattern.is_match(content) {
            return Substitution::NoMatch;
        }

        let rendered = self.replacement.render(version);
        let updated = if self.replace_all {
            self.pattern.replace_all(content, NoExpand(&rendered))
        } else {
            self.pattern.replace(content, NoExpand(&rendered))
        };

        if updated == content {
            Substitution::Current
        } else {
            Substitution::Changed(updated.into_owned())
        }
    }
}
