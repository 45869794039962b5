//! Input records produced by the page analyzers.
//!
//! These types are immutable once handed to the scoring core. Analyzers (DOM
//! probing, performance APIs, screenshot capture) live outside this crate and
//! only meet it through [`PageAnalysis`].

mod analysis;
mod category;
mod issue;
mod opportunity;

pub use analysis::PageAnalysis;
pub use category::{Category, CategoryResult, CategoryResults};
pub use issue::{Issue, IssueCounts, IssueSeverity};
pub use opportunity::{Effort, Opportunity};
