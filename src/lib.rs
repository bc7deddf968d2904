pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod updater;

pub use domain::Version;
pub use error::{Result, StampError};
