//! Output formatting for calculator results.
//!
//! - [`terminal`] - Plain-text report of stray input and stack contents

mod terminal;

pub use terminal::write_report;
