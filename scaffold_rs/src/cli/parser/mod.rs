//! Command-line parser.
//!
//! A left-to-right token scanner over the arguments that follow the two
//! reserved leading elements of argv.
//!
//! # Module Structure
//!
//! - [`core`] - The scanner and its precedence rules
//! - [`helpers`] - Token classification
//!
//! # Usage
//!
//! ```
//! use scaffold::cli::{Operands, ParsedCommand, parse_command};
//!
//! let args = vec!["-vv".to_string(), "notes.txt".to_string()];
//! match parse_command(&args, Operands::default()) {
//!     Ok(ParsedCommand::Run(opts)) => assert_eq!(opts.verbosity, 2),
//!     other => panic!("unexpected parse: {other:?}"),
//! }
//! ```

mod core;
mod helpers;

pub use self::core::parse_command;
