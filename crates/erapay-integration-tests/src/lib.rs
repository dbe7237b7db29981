//! Integration test crate for the erapay payout pipeline.
//!
//! This crate has no library code — it only contains integration tests
//! that exercise the full aggregate → resolve → batch → submit → report
//! flow across the workspace crates.
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p erapay-integration-tests
//! ```
