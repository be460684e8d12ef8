//! Error taxonomy for the entry point.
//!
//! - [`InvocationError`] - the call itself was malformed. Returned as `Err`
//!   from [`run`](crate::run) before anything is parsed or written, never
//!   turned into an exit code.
//! - [`ParseError`] - the command line was rejected. Reported on stderr and
//!   turned into a non-zero exit code.
//!
//! Operation failures are opaque [`anyhow::Error`]s and never surface here.

use thiserror::Error;

use crate::types::EXIT_FAILURE;

/// A violated call contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    #[error("args must hold at least 2 items (got {len})")]
    TooFewArgs { len: usize },

    #[error("args[{index}] is not valid UTF-8")]
    NonUnicodeArg { index: usize },

    #[error("io context must provide a readable stdin")]
    MissingStdin,

    #[error("io context must provide a writable stdout")]
    MissingStdout,

    #[error("io context must provide a writable stderr")]
    MissingStderr,
}

/// A rejected command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error(
        "too many arguments. Expected {expected} argument{} but got {received}.",
        plural(.expected)
    )]
    TooManyArguments { expected: usize, received: usize },
}

impl ParseError {
    /// Exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::UnknownOption(_) | ParseError::TooManyArguments { .. } => EXIT_FAILURE,
        }
    }
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 { "" } else { "s" }
}
