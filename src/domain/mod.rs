//! Domain logic - versions and substitution rules, independent of the filesystem

pub mod target;
pub mod version;

pub use target::{Replacement, Substitution, TargetRule, VERSION_PLACEHOLDER};
pub use version::Version;
