//! Range-set algorithms.
//!
//! This module contains the algorithms behind [`crate::models::RangeSet`]:
//! - [`decompose`] - Splitting a range into minimal CIDR blocks
//! - [`sweep`] - Endpoint sweep for merging and subtracting ranges

mod decompose;
mod sweep;

// Re-export public functions
pub use decompose::decompose;
pub use sweep::{sweep, Polarity};
