//! Errors raised at the host calling-convention boundary.
use std::error::Error;
use std::fmt;

/// Failure to call into the layer at all. OS failures are never reported
/// this way; they come back as ordinary negative results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Argument `position` (1-based) of `func` failed its type or range check.
    BadArgument {
        func: String,
        position: usize,
        message: String,
    },
    /// The module exports no function of this name.
    NoSuchFunction(String),
    /// The receiver has no method of this name.
    NoSuchMethod(String),
}

impl HostError {
    pub fn bad_argument(func: &str, position: usize, message: impl Into<String>) -> HostError {
        HostError::BadArgument {
            func: func.to_string(),
            position,
            message: message.into(),
        }
    }

    /// `expected` type missing at `position`; `got` names what was there.
    pub fn expected(func: &str, position: usize, expected: &str, got: &str) -> HostError {
        HostError::bad_argument(func, position, format!("{} expected, got {}", expected, got))
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::BadArgument {
                func,
                position,
                message,
            } => write!(f, "bad argument #{} to '{}' ({})", position, func, message),
            HostError::NoSuchFunction(name) => write!(f, "no function '{}' in module", name),
            HostError::NoSuchMethod(name) => write!(f, "no method '{}' on receiver", name),
        }
    }
}

impl Error for HostError {}
