//! Line-oriented stack calculator over [`RangeSet`]s.
//!
//! Lines that are not keywords collect as pending CIDR text; `commit` turns
//! them into one operand on the stack. `add` and `subtract` pop two operands
//! and push the result, `simplify` rewrites the top operand.

use crate::error::CalcError;
use crate::models::RangeSet;
use crate::output::write_report;
use colored::Colorize;
use std::io::{BufRead, Write};

/// A stack operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Push(RangeSet),
    Add,
    Subtract,
    Simplify,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Push(_) => "commit",
            Command::Add => "add",
            Command::Subtract => "subtract",
            Command::Simplify => "simplify",
        }
    }
}

/// Operand stack plus the CIDR lines waiting for `commit`.
#[derive(Debug, Default)]
pub struct Calculator {
    stack: Vec<RangeSet>,
    pending: Vec<String>,
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator::default()
    }

    /// Handle one input line.
    pub fn feed(&mut self, line: &str) -> Result<(), CalcError> {
        match line {
            "commit" => {
                let set = RangeSet::from_cidrs(self.pending.as_slice())?;
                self.pending.clear();
                self.apply(Command::Push(set))
            }
            "add" => self.apply(Command::Add),
            "subtract" => self.apply(Command::Subtract),
            "simplify" => self.apply(Command::Simplify),
            _ => {
                self.pending.push(line.to_string());
                Ok(())
            }
        }
    }

    pub fn apply(&mut self, command: Command) -> Result<(), CalcError> {
        let name = command.name();
        match command {
            Command::Push(set) => self.stack.push(set),
            Command::Add => {
                let (a, b) = self.pop_pair(name)?;
                self.stack.push(a.union(&b));
            }
            Command::Subtract => {
                let (a, b) = self.pop_pair(name)?;
                self.stack.push(a.subtract(&b));
            }
            Command::Simplify => {
                let top = self
                    .stack
                    .last_mut()
                    .ok_or(CalcError::StackUnderflow {
                        command: name,
                        needed: 1,
                        available: 0,
                    })?;
                *top = top.simplify();
            }
        }
        log::debug!("{} (stack={})", name.on_blue(), self.stack.len());
        Ok(())
    }

    /// Pop the top two operands as `(below, top)`.
    fn pop_pair(&mut self, command: &'static str) -> Result<(RangeSet, RangeSet), CalcError> {
        let available = self.stack.len();
        if available < 2 {
            return Err(CalcError::StackUnderflow {
                command,
                needed: 2,
                available,
            });
        }
        match (self.stack.pop(), self.stack.pop()) {
            (Some(top), Some(below)) => Ok((below, top)),
            _ => unreachable!("stack held {available} operands"),
        }
    }

    /// Operands, bottom first.
    pub fn stack(&self) -> &[RangeSet] {
        &self.stack
    }

    /// CIDR lines not yet committed.
    pub fn pending(&self) -> &[String] {
        &self.pending
    }
}

/// Run the calculator over `input` and write results to `out`.
///
/// The first parse or stack error is written to `out` and ends the run
/// without the final report.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<(), CalcError> {
    let mut calc = Calculator::new();

    for (i, line) in input.lines().enumerate() {
        let line = line?;
        if let Err(err) = calc.feed(&line) {
            log::error!("line {}: {}", i + 1, err.to_string().red());
            writeln!(out, "{err}")?;
            return Ok(());
        }
    }

    if !calc.pending().is_empty() {
        log::warn!("{} CIDR line(s) never committed", calc.pending().len());
    }
    write_report(out, calc.pending(), calc.stack())?;
    Ok(())
}
