//! Set arithmetic on IPv4 addresses written as CIDR blocks.
//!
//! Blocks parse into [`AddressRange`]s, collect into [`RangeSet`]s, and
//! combine with union, difference and simplification. Results come back as
//! the shortest list of CIDR blocks.
//!
//! ```
//! use cidr_calc::RangeSet;
//! let a = RangeSet::from_cidrs(&["10.0.0.0/24"]).unwrap();
//! let b = RangeSet::from_cidrs(&["10.0.0.128/25"]).unwrap();
//! assert_eq!(a.subtract(&b).to_cidrs(), vec!["10.0.0.0/25"]);
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CalcError, CidrError};
pub use models::{AddressRange, RangeSet};
