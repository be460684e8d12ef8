//! Core scanning logic.
//!
//! The scanner is a two-state machine:
//!
//! - `Options`: tokens are classified; flags update the options, operands are
//!   collected, `--` switches state.
//! - `OperandsOnly`: every token is an operand.
//!
//! Help and version end the scan the moment they are recognized, and so does
//! the first unknown option. Precedence is therefore first-come in token
//! order: `--version --bogus` prints the version, `--bogus --version` is an
//! error. The operand count is only checked once the scan completes.

use tracing::trace;

use super::helpers::{Token, classify};
use crate::cli::command::{Flag, Operands, ParsedCommand};
use crate::error::ParseError;
use crate::types::CommandOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Options,
    OperandsOnly,
}

/// Parse the user-supplied arguments (argv without its two leading elements).
pub fn parse_command(args: &[String], operands: Operands) -> Result<ParsedCommand, ParseError> {
    let mut options = CommandOptions::default();
    let mut state = ScanState::Options;

    for arg in args {
        if state == ScanState::OperandsOnly {
            options.files.push(arg.clone());
            continue;
        }

        match classify(arg) {
            Token::EndOfOptions => state = ScanState::OperandsOnly,
            Token::Operand => options.files.push(arg.clone()),
            Token::Long(name) => {
                let flag =
                    Flag::from_long(name).ok_or_else(|| ParseError::UnknownOption(arg.clone()))?;
                if let Some(stop) = apply(flag, &mut options) {
                    return Ok(stop);
                }
            }
            Token::Shorts(letters) => {
                // Clustered letters expand in place: `-vvq` is `-v -v -q`.
                for (pos, letter) in letters.chars().enumerate() {
                    let flag = Flag::from_short(letter).ok_or_else(|| {
                        ParseError::UnknownOption(if pos == 0 {
                            arg.clone()
                        } else {
                            format!("-{letter}")
                        })
                    })?;
                    if let Some(stop) = apply(flag, &mut options) {
                        return Ok(stop);
                    }
                }
            }
        }
    }

    match operands.max() {
        Some(max) if options.files.len() > max => {
            return Err(ParseError::TooManyArguments {
                expected: max,
                received: options.files.len(),
            });
        }
        _ => {}
    }

    trace!(
        verbosity = options.verbosity,
        files = options.files.len(),
        "scan complete"
    );
    Ok(ParsedCommand::Run(options))
}

/// Apply one flag. Returns the short-circuit result for help/version.
fn apply(flag: Flag, options: &mut CommandOptions) -> Option<ParsedCommand> {
    if flag.short_circuits() {
        trace!(?flag, "stopping scan");
    }
    match flag {
        Flag::Quiet => {
            options.less_output();
            None
        }
        Flag::Verbose => {
            options.more_output();
            None
        }
        Flag::Version => Some(ParsedCommand::ShowVersion),
        Flag::Help => Some(ParsedCommand::ShowHelp),
    }
}
