//! Error types for CIDR parsing and the calculator.

use thiserror::Error;

/// Convenience type alias for Results using [`CidrError`].
pub type Result<T, E = CidrError> = std::result::Result<T, E>;

/// Failures while turning CIDR text into address ranges.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CidrError {
    /// Text is not `address/prefix`, or one of the two halves is malformed.
    #[error("invalid CIDR {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// Address parsed, but it is not IPv4.
    #[error("prefix {input:?} is not IPv4")]
    AddressFamily { input: String },
}

impl CidrError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        CidrError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors that stop the stack calculator.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error(transparent)]
    Cidr(#[from] CidrError),

    /// A keyword needed more operands than the stack holds.
    #[error("{command}: needs {needed} operand(s), stack has {available}")]
    StackUnderflow {
        command: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
