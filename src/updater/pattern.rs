//! Pattern-substitution updater.
//!
//! Walks the target table in order and rewrites the embedded version in each
//! file. The default `run` is sequential and non-atomic: an I/O failure stops
//! the run and files already written stay modified. `plan` + `apply` split
//! the same work so every target can be checked before anything is written.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Substitution, TargetRule, Version};
use crate::error::{Result, StampError};

/// What happened to one target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The file was rewritten with the new version
    Updated,
    /// The file already carried the version and was not rewritten
    Current,
    /// The pattern matched nothing and the file was not rewritten
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub path: PathBuf,
    pub pattern: String,
    pub status: UpdateStatus,
}

/// Outcome computed for one target without writing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedUpdate {
    pub path: PathBuf,
    pub pattern: String,
    pub substitution: Substitution,
}

impl PlannedUpdate {
    pub fn status(&self) -> UpdateStatus {
        match self.substitution {
            Substitution::Changed(_) => UpdateStatus::Updated,
            Substitution::Current => UpdateStatus::Current,
            Substitution::NoMatch => UpdateStatus::NoMatch,
        }
    }

    pub fn report(&self) -> UpdateReport {
        UpdateReport {
            path: self.path.clone(),
            pattern: self.pattern.clone(),
            status: self.status(),
        }
    }
}

pub struct PatternUpdater {
    root: PathBuf,
    rules: Vec<TargetRule>,
}

impl PatternUpdater {
    /// Create an updater whose rule paths resolve against `root`
    pub fn new(root: impl Into<PathBuf>, rules: Vec<TargetRule>) -> Self {
        PatternUpdater {
            root: root.into(),
            rules,
        }
    }

    /// Read, substitute and write each target in order.
    ///
    /// `on_report` is called after each file is handled, so progress made
    /// before a failure is already visible to the caller.
    pub fn run(
        &self,
        version: &Version,
        mut on_report: impl FnMut(&UpdateReport),
    ) -> Result<Vec<UpdateReport>> {
        let mut reports = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let planned = self.plan_one(rule, version)?;
            write_planned(&planned)?;

            let report = planned.report();
            on_report(&report);
            reports.push(report);
        }

        Ok(reports)
    }

    /// Read every target and compute its outcome. Writes nothing.
    pub fn plan(&self, version: &Version) -> Result<Vec<PlannedUpdate>> {
        self.rules
            .iter()
            .map(|rule| self.plan_one(rule, version))
            .collect()
    }

    /// Write a plan produced by [`PatternUpdater::plan`].
    pub fn apply(
        &self,
        plan: Vec<PlannedUpdate>,
        mut on_report: impl FnMut(&UpdateReport),
    ) -> Result<Vec<UpdateReport>> {
        let mut reports = Vec::with_capacity(plan.len());

        for planned in plan {
            write_planned(&planned)?;

            let report = planned.report();
            on_report(&report);
            reports.push(report);
        }

        Ok(reports)
    }

    /// Plan every target and refuse to write anything unless all patterns match.
    pub fn run_verified(
        &self,
        version: &Version,
        on_report: impl FnMut(&UpdateReport),
    ) -> Result<Vec<UpdateReport>> {
        let plan = self.plan(version)?;
        check_plan(&plan)?;
        self.apply(plan, on_report)
    }

    fn plan_one(&self, rule: &TargetRule, version: &Version) -> Result<PlannedUpdate> {
        let path = self.root.join(rule.path());
        let content = read_target(&path)?;

        Ok(PlannedUpdate {
            substitution: rule.apply(&content, version),
            pattern: rule.pattern().to_string(),
            path,
        })
    }
}

/// Fail if any planned target would be left with its old value
pub fn check_plan(plan: &[PlannedUpdate]) -> Result<()> {
    let unmatched: Vec<String> = plan
        .iter()
        .filter(|p| p.substitution == Substitution::NoMatch)
        .map(|p| p.path.display().to_string())
        .collect();

    if unmatched.is_empty() {
        Ok(())
    } else {
        Err(StampError::verify(format!(
            "pattern not found in {}; no files were written",
            unmatched.join(", ")
        )))
    }
}

fn read_target(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| StampError::io(path, e))
}

fn write_planned(planned: &PlannedUpdate) -> Result<()> {
    if let Substitution::Changed(content) = &planned.substitution {
        fs::write(&planned.path, content).map_err(|e| StampError::io(&planned.path, e))?;
    }
    Ok(())
}
