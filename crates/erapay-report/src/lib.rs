//! # erapay-report
//!
//! Run summary formatting and delivery.
//!
//! ## Modules
//!
//! - [`summary`] — Pure tabular formatting of the per-era outcome log
//! - [`notify`] — Notification sink interface and swallow-on-failure delivery

pub mod notify;
pub mod summary;

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The notification collaborator could not deliver the report.
    #[error("notification delivery failed: {0}")]
    Notification(String),
}

/// Convenience result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
