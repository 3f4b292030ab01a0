//! Terminal output of the end-of-input report.

use crate::models::RangeSet;
use std::io::{self, Write};

/// Write any uncommitted CIDR lines, then each operand's CIDR blocks.
///
/// Operands are listed bottom of the stack first, each preceded by an empty
/// line, one block per line.
pub fn write_report<W: Write>(
    out: &mut W,
    stray: &[String],
    operands: &[RangeSet],
) -> io::Result<()> {
    if !stray.is_empty() {
        writeln!(out, "{} stray CIDRs.", stray.len())?;
        for cidr in stray {
            writeln!(out, "{cidr}")?;
        }
    }

    writeln!(out, "{} ranges in stack.", operands.len())?;
    for operand in operands {
        writeln!(out)?;
        for cidr in operand.to_cidrs() {
            writeln!(out, "{cidr}")?;
        }
    }
    Ok(())
}
