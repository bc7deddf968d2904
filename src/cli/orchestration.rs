//! Main workflow orchestration logic
//!
//! Runs one of the two updaters for an already-validated version and prints
//! progress as files are handled. Kept apart from `main.rs` so the workflow
//! can be driven without clap.

use std::path::PathBuf;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::Version;
use crate::error::Result;
use crate::ui;
use crate::updater::{
    check_plan, PatternUpdater, PlannedUpdate, TemplateExpander, UpdateReport, UpdateStatus,
};

/// Which updater a run drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Regex substitution over the target table
    #[default]
    Patterns,
    /// Placeholder expansion of the template directory
    Templates,
}

/// Arguments for the stamp workflow
///
/// Mirrors the CLI Args after validation, so the version is already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct StampWorkflowArgs {
    /// Version to stamp
    pub version: Version,

    /// Project root the configured paths resolve against
    pub root: PathBuf,

    pub mode: Mode,

    /// Report what would change without writing
    pub dry_run: bool,

    /// Check every target before writing any of them
    pub verify: bool,
}

/// Result of a successful stamp workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowResult {
    /// Files written (or that would be written, on a dry run)
    pub written: Vec<PathBuf>,

    /// Non-fatal conditions reported during the run
    pub warnings: Vec<BoundaryWarning>,
}

/// Main stamp workflow
///
/// # Arguments
///
/// * `args` - Validated workflow arguments
/// * `config` - Target table and template settings
///
/// # Returns
///
/// The files written and the warnings raised. A filesystem error aborts the
/// run; outside verify mode, files written before it stay modified.
pub fn run_stamp_workflow(args: &StampWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    match args.mode {
        Mode::Patterns => run_patterns(args, config),
        Mode::Templates => run_templates(args, config),
    }
}

fn run_patterns(args: &StampWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let updater = PatternUpdater::new(&args.root, config.rules()?);
    let version = &args.version;
    let verify = args.verify || config.behavior.verify;

    if args.dry_run {
        let plan = updater.plan(version)?;
        if verify {
            check_plan(&plan)?;
        }
        let mut result = WorkflowResult::default();
        for planned in &plan {
            ui::display_planned_update(planned);
            match planned_warning(planned, version) {
                Some(warning) => {
                    ui::display_boundary_warning(&warning);
                    result.warnings.push(warning);
                }
                None => result.written.push(planned.path.clone()),
            }
        }
        ui::display_success("Dry run: no files were written");
        return Ok(result);
    }

    let show = |report: &UpdateReport| match report_warning(report, version) {
        Some(warning) => ui::display_boundary_warning(&warning),
        None => ui::display_update_report(report),
    };

    let reports = if verify {
        updater.run_verified(version, show)?
    } else {
        updater.run(version, show)?
    };

    let mut result = WorkflowResult::default();
    for report in reports {
        match report_warning(&report, version) {
            Some(warning) => result.warnings.push(warning),
            None => result.written.push(report.path),
        }
    }
    Ok(result)
}

fn run_templates(args: &StampWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let settings = &config.templates;
    let expander = TemplateExpander::new(
        args.root.join(&settings.dir),
        args.root.join(&settings.output_dir),
        settings.placeholder.as_str(),
    );

    let mut result = WorkflowResult::default();

    // Templates always expand whole; only the target table has a verify pass
    if args.verify {
        let warning = BoundaryWarning::VerifyIgnored {
            mode: "template expansion".to_string(),
        };
        ui::display_boundary_warning(&warning);
        result.warnings.push(warning);
    }

    if args.dry_run {
        for planned in expander.plan()? {
            ui::display_planned_expansion(&planned.template, &planned.output);
            result.written.push(planned.output);
        }
    } else {
        let placeholder = expander.placeholder();
        let reports = expander.expand(&args.version, |report| {
            ui::display_expand_report(report);
            if report.replacements == 0 {
                ui::display_boundary_warning(&BoundaryWarning::PlaceholderMissing {
                    path: report.template.clone(),
                    placeholder: placeholder.to_string(),
                });
            }
        })?;

        for report in reports {
            if report.replacements == 0 {
                result.warnings.push(BoundaryWarning::PlaceholderMissing {
                    path: report.template,
                    placeholder: placeholder.to_string(),
                });
            }
            result.written.push(report.output);
        }
    }

    if result.written.is_empty() {
        let warning = BoundaryWarning::EmptyTemplateDir {
            dir: expander.template_dir().to_path_buf(),
        };
        ui::display_boundary_warning(&warning);
        result.warnings.push(warning);
    }

    Ok(result)
}

fn report_warning(report: &UpdateReport, version: &Version) -> Option<BoundaryWarning> {
    match report.status {
        UpdateStatus::Updated => None,
        UpdateStatus::Current => Some(BoundaryWarning::AlreadyCurrent {
            path: report.path.clone(),
            version: version.to_string(),
        }),
        UpdateStatus::NoMatch => Some(BoundaryWarning::PatternNotFound {
            path: report.path.clone(),
            pattern: report.pattern.clone(),
        }),
    }
}

fn planned_warning(planned: &PlannedUpdate, version: &Version) -> Option<BoundaryWarning> {
    report_warning(&planned.report(), version)
}
