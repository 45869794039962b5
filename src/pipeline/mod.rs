//! Pipeline orchestration for verdicts.
//!
//! This module provides the load → evaluate → write workflow shared by the
//! command handlers, with the [`VerdictEngine`] at its center.

mod engine;
mod input;
mod output;

pub use engine::{Verdict, VerdictEngine, ENGINE_VERSION};
pub use input::{load_analyses, parse_analyses};
pub use output::{write_output, Envelope, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
