//! Errors raised by constructors, conversions, exact division and the strict parser.

use thiserror::Error;

/// The three failure classes of the numeric tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed arguments, or a conversion that would drop a non zero part.
    Type,
    /// Division by an exact zero.
    ZeroDivision,
    /// Strict parsing failed.
    Format,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("not a complex")]
    NotComplex,
    #[error("not a real")]
    NotReal,
    #[error("not a 3-D vector")]
    NotVector3,
    #[error("wrong number of arguments (given {given}, expected 1..4)")]
    ArgumentCount { given: usize },
    #[error("{from} can't be coerced into {into}")]
    Coercion { from: &'static str, into: &'static str },
    #[error("can't convert {value} into {target}")]
    Conversion { value: String, target: &'static str },
    #[error("divided by 0")]
    ZeroDivision,
    #[error("invalid value for convert(): {input:?}")]
    InvalidFormat { input: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ZeroDivision => ErrorKind::ZeroDivision,
            Error::InvalidFormat { .. } => ErrorKind::Format,
            _ => ErrorKind::Type,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
