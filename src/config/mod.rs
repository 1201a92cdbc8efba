//! Configuration module for the stock decider.

// Can all be private now because we have a public re-export.
mod debug;
mod decision;
mod report;

// Re-export commonly used items
pub use debug::DF;
pub use decision::{DECISION, DecisionConfig, FORM_DEFAULTS, FormDefaults};
pub use report::{REPORT, ReportConfig};
