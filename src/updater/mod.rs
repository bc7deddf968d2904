//! File updaters - the only code that touches target files on disk

pub mod pattern;
pub mod template;

pub use pattern::{check_plan, PatternUpdater, PlannedUpdate, UpdateReport, UpdateStatus};
pub use template::{ExpandReport, PlannedExpansion, TemplateExpander};
