//! Pure formatting functions for UI output.
//!
//! Everything the tool prints goes through here: progress lines to stdout,
//! warnings and errors to stderr.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::Version;
use crate::updater::{ExpandReport, PlannedUpdate, UpdateReport, UpdateStatus};

/// Usage line printed on a missing or malformed version argument
pub const USAGE: &str = "Usage: version-stamp A.B.C";

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print the usage line.
pub fn display_usage() {
    println!("{}", USAGE);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Header line naming the version and the (UTC) release date.
pub fn version_change_line(version: &Version, date: NaiveDate) -> String {
    format!(
        "Changing version to {} | Date: {}",
        version,
        date.format("%Y-%m-%d")
    )
}

/// Announce the version about to be stamped, dated today.
pub fn display_version_change(version: &Version) {
    println!(
        "{}",
        style(version_change_line(version, Utc::now().date_naive())).bold()
    );
}

/// Print the line for a file that was rewritten.
pub fn display_updated(path: &Path) {
    println!("{} {}", style("UPDATED:").green(), path.display());
}

/// Print the line for one handled target; only rewritten files get a line.
pub fn display_update_report(report: &UpdateReport) {
    if report.status == UpdateStatus::Updated {
        display_updated(&report.path);
    }
}

/// Print the line for one expanded template.
pub fn display_expand_report(report: &ExpandReport) {
    println!(
        "{} {} ({} replacement{})",
        style("UPDATED:").green(),
        report.output.display(),
        report.replacements,
        if report.replacements == 1 { "" } else { "s" }
    );
}

/// Dry-run line for a planned target.
pub fn display_planned_update(planned: &PlannedUpdate) {
    if planned.substitution.is_changed() {
        display_status(&format!("Would update: {}", planned.path.display()));
    }
}

/// Dry-run line for a planned template expansion.
pub fn display_planned_expansion(template: &Path, output: &Path) {
    display_status(&format!(
        "Would expand: {} -> {}",
        template.display(),
        output.display()
    ));
}

/// Print the completion message.
pub fn display_done() {
    println!("{}", style("DONE!").bold());
}
