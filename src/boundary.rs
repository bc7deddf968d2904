use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions met while stamping files.
/// These are reported to the user but never abort a run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The target's pattern matched nothing, so its old value is left in place
    PatternNotFound { path: PathBuf, pattern: String },
    /// The target already carries the requested version
    AlreadyCurrent { path: PathBuf, version: String },
    /// A template has no placeholder and was copied verbatim
    PlaceholderMissing { path: PathBuf, placeholder: String },
    /// The template directory holds no files
    EmptyTemplateDir { dir: PathBuf },
    /// `--verify` was requested for a run that has no verify pass
    VerifyIgnored { mode: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::PatternNotFound { path, pattern } => write!(
                f,
                "Pattern '{}' not found in '{}', file left unchanged",
                pattern,
                path.display()
            ),
            BoundaryWarning::AlreadyCurrent { path, version } => {
                write!(f, "'{}' is already at version {}", path.display(), version)
            }
            BoundaryWarning::PlaceholderMissing { path, placeholder } => write!(
                f,
                "Template '{}' contains no '{}' placeholder",
                path.display(),
                placeholder
            ),
            BoundaryWarning::EmptyTemplateDir { dir } => {
                write!(f, "Template directory '{}' is empty", dir.display())
            }
            BoundaryWarning::VerifyIgnored { mode } => {
                write!(f, "--verify has no effect on {}", mode)
            }
        }
    }
}
