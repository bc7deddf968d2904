//! User interface module - console output for stamping runs.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_done, display_error, display_expand_report,
    display_planned_expansion, display_planned_update, display_status, display_success,
    display_update_report, display_updated, display_usage, display_version_change,
    version_change_line, USAGE,
};
