//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod evaluate;
mod industries;

pub use evaluate::{run_evaluate, EvaluateConfig};
pub use industries::run_industries;
