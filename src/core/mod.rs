//! Core business logic: pure computations over the studio's project,
//! proposal and payment data. Nothing in here performs I/O.

pub mod config;
pub mod financials;
pub mod log;
pub mod payment;
pub mod progress;
pub mod scope;

// Re-export main types for cleaner imports
pub use config::{AppConfig, Objective, Project, Proposal, ScopeItem, SubTask, TaskStatus};
pub use financials::{FinancialSummary, summarize_project};
pub use scope::{ScopeTotals, scope_totals};
