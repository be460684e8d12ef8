//! ParsedCommand - result of command-line argument parsing.

use crate::types::CommandOptions;

/// What a successful parse asks the entry point to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Invoke the operation with these options.
    Run(CommandOptions),
    /// Print usage and exit 0.
    ShowHelp,
    /// Print the version and exit 0.
    ShowVersion,
}

impl ParsedCommand {
    /// Whether parsing stopped early on help or version.
    pub fn is_short_circuit(&self) -> bool {
        !matches!(self, ParsedCommand::Run(_))
    }
}
