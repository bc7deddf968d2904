//! Template-expansion updater.
//!
//! Every regular file in the template directory is copied to the output
//! directory under the same file name, with each placeholder occurrence
//! replaced by the plain version string.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Version;
use crate::error::{Result, StampError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandReport {
    pub template: PathBuf,
    pub output: PathBuf,
    /// Number of placeholder occurrences replaced
    pub replacements: usize,
}

/// A template and the output it expands to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExpansion {
    pub template: PathBuf,
    pub output: PathBuf,
}

pub struct TemplateExpander {
    template_dir: PathBuf,
    output_dir: PathBuf,
    placeholder: String,
}

impl TemplateExpander {
    pub fn new(
        template_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        placeholder: impl Into<String>,
    ) -> Self {
        TemplateExpander {
            template_dir: template_dir.into(),
            output_dir: output_dir.into(),
            placeholder: placeholder.into(),
        }
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// List the templates in file-name order
    pub fn templates(&self) -> Result<Vec<PathBuf>> {
        let entries =
            fs::read_dir(&self.template_dir).map_err(|e| StampError::io(&self.template_dir, e))?;

        let mut templates = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StampError::io(&self.template_dir, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| StampError::io(entry.path(), e))?;
            if file_type.is_file() {
                templates.push(entry.path());
            }
        }

        templates.sort();
        Ok(templates)
    }

    /// Validate the directories and pair each template with its output.
    /// Writes nothing.
    pub fn plan(&self) -> Result<Vec<PlannedExpansion>> {
        self.check_dirs()?;

        let mut plan = Vec::new();
        for template in self.templates()? {
            let output = self.output_path(&template)?;
            plan.push(PlannedExpansion { template, output });
        }
        Ok(plan)
    }

    /// Expand every template for `version`.
    ///
    /// Stops at the first unreadable template or failed write; outputs
    /// already written are left on disk.
    pub fn expand(
        &self,
        version: &Version,
        mut on_report: impl FnMut(&ExpandReport),
    ) -> Result<Vec<ExpandReport>> {
        let version = version.to_string();
        let mut reports = Vec::new();

        for PlannedExpansion { template, output } in self.plan()? {
            let content = fs::read_to_string(&template).map_err(|e| StampError::io(&template, e))?;
            let replacements = content.matches(self.placeholder.as_str()).count();
            let expanded = content.replace(self.placeholder.as_str(), &version);

            fs::write(&output, expanded).map_err(|e| StampError::io(&output, e))?;

            let report = ExpandReport {
                template,
                output,
                replacements,
            };
            on_report(&report);
            reports.push(report);
        }

        Ok(reports)
    }

    /// Where the expansion of `template` is written
    pub fn output_path(&self, template: &Path) -> Result<PathBuf> {
        let file_name = template.file_name().ok_or_else(|| {
            StampError::config(format!("Template '{}' has no file name", template.display()))
        })?;
        Ok(self.output_dir.join(file_name))
    }

    fn check_dirs(&self) -> Result<()> {
        if self.placeholder.is_empty() {
            return Err(StampError::config("Template placeholder must not be empty"));
        }

        let template_dir = self
            .template_dir
            .canonicalize()
            .map_err(|e| StampError::io(&self.template_dir, e))?;
        let output_dir = self
            .output_dir
            .canonicalize()
            .map_err(|e| StampError::io(&self.output_dir, e))?;

        if template_dir == output_dir {
            return Err(StampError::config(format!(
                "Output directory '{}' must differ from the template directory",
                self.output_dir.display()
            )));
        }
        Ok(())
    }
}
