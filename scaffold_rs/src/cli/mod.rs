//! CLI module: the command-line entry-point contract.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │              argv + IoContext (stdin, stdout, stderr, env)      │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//!                                  ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Validating: args ≥ 2 and UTF-8, all three streams present      │
//! │  (failures return Err(InvocationError), nothing is written)     │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//!                                  ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Parsing args[2..] (token scanner)               │
//! │   ShowHelp ──► stdout, 0     ShowVersion ──► stdout, 0          │
//! │   ParseError ──► "error: ..." on stderr, 1                      │
//! └─────────────────────────────────┬───────────────────────────────┘
//!                                   │ Run(CommandOptions)
//!                                   ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │           Dispatching: await the injected Operation             │
//! │   Ok ──► 0 (no output)     Err / panic ──► message on stderr, 1 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`command`] - Flag table, operand slot, help text, parse result
//! - [`parser`] - Token scanner producing a [`ParsedCommand`]
//! - [`dispatch`] - Runs the operation and captures its outcome
//! - [`entrypoint`] - The `run` function tying it all together

pub mod command;
pub mod dispatch;
pub mod entrypoint;
pub mod parser;

pub use command::{Flag, Operands, ParsedCommand, format_help};
pub use dispatch::{DispatchResult, dispatch_operation};
pub use parser::parse_command;
