//! # Snapshot Testing Support
//!
//! Utilities for testing the partitioner via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Converts a content tree into a stable, indented text form
//!   for `insta` snapshot testing
//! - **`invariants`**: Structural checks for partitioned trees (container
//!   layout, hidden marker text, line-break boundaries)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
