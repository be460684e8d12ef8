//! # scaffold
//!
//! **Command-line tool scaffold** - the entry point of a CLI, with the actual
//! work left pluggable.
//!
//! The crate maps an invocation (argv plus caller-owned I/O streams) to side
//! effects on stdout/stderr and a numeric exit code, without spawning a
//! process. That makes the whole command-line contract testable in-process.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,no_run
//! use scaffold::{EntryOptions, IoContext, run};
//!
//! # async fn demo() -> Result<(), scaffold::InvocationError> {
//! let mut stdin = tokio::io::empty();
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let mut io = IoContext::new()
//!     .with_stdin(&mut stdin)
//!     .with_stdout(&mut stdout)
//!     .with_stderr(&mut stderr);
//!
//! let code = run(["launcher", "scaffold", "-v", "notes.txt"], &mut io, &EntryOptions::default()).await?;
//! assert_eq!(code, 0);
//! # Ok(())
//! # }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! scaffold [options] [file...]
//! scaffold -vv input.txt     # verbosity 2
//! scaffold --version         # print version
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Command-line interface: option grammar, parser, dispatcher and entry point.
pub mod cli;

/// The tool's unit of work, invoked once parsing succeeds.
pub mod command;

/// Caller-owned I/O streams and environment.
pub mod context;

/// Error taxonomy for contract violations and parse failures.
pub mod error;

/// `tracing-subscriber` setup for the binary.
pub mod logging;

/// The pluggable operation seam.
pub mod operation;

/// Common types shared by the entry point and the operation.
///
/// # Key Types
///
/// - [`CommandOptions`] - Options handed to the operation
/// - [`EXIT_SUCCESS`](types::EXIT_SUCCESS) / [`EXIT_FAILURE`](types::EXIT_FAILURE) - Exit codes
pub mod types;

// ============================================================================
// Re-exports for convenience
// ============================================================================

/// Entry point and its options.
pub use cli::entrypoint::{EntryOptions, run};

/// I/O context injected by the caller.
pub use context::IoContext;

/// Error types.
pub use error::{InvocationError, ParseError};

/// Operation trait.
pub use operation::Operation;

/// Parsed options handed to the operation.
pub use types::CommandOptions;
