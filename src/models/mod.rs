//! Domain models for CIDR set arithmetic.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`AddressRange`] - Half-open IPv4 interval parsed from CIDR notation
//! - [`RangeSet`] - Collection of ranges with union, difference and simplify

mod ipv4;
mod range_set;

// Re-export public types
pub use ipv4::{block_size, AddressRange, ADDRESS_SPACE_END, MAX_LENGTH};
pub use range_set::RangeSet;
