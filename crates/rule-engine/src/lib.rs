//! Site Tracking Rule Engine
//!
//! Checks clinical-trial site tracking records against six fixed date and
//! status rules, producing the identifiers of violating sites per rule.

mod activation;
mod dates;
mod engine;
mod error;
mod report;
mod rules;

pub use activation::overdue_days;
pub use dates::parse_date;
pub use engine::{evaluate, evaluate_now, REQUIRED_COLUMNS};
pub use error::EvaluationError;
pub use report::{SiteNumber, ViolationReport};
pub use rules::Rule;

/// Column names read by the rules
pub mod columns {
    pub const SITE_NUMBER: &str = "SITE NUMBER";
    pub const ACTIVATION_COMPLETE: &str = "ACTIVATION COMPLETE";
    pub const PSV_COMPLETE: &str = "PSV COMPLETE";
    pub const SELECTED: &str = "SELECTED";
    pub const FIRST_SUBMISSION_PLANNED: &str = "FIRST SUBMISSION PLANNED";
    pub const ALL_APPROVALS_PLANNED: &str = "ALL APPROVALS PLANNED";
    pub const FIRST_SUBMISSION_COMPLETE: &str = "FIRST SUBMISSION COMPLETE";
    pub const ALL_APPROVALS_COMPLETE: &str = "ALL APPROVALS COMPLETE";
    pub const SITE_STATUS: &str = "SITE STATUS";
    pub const SITE_STATUS_EFFECTIVE_DATE: &str = "SITE STATUS EFFECTIVE DATE";
}
