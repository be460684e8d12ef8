//! CLI grammar definitions and help text.
//!
//! - `global`: the flag table shared by parser and help output
//! - `options`: the operand slot declaration
//! - `help`: help text rendering
//! - `help_texts`: static text constants
//! - `parsed`: `ParsedCommand` result type

mod global;
mod help;
mod help_texts;
mod options;
mod parsed;

pub use global::{FLAGS, Flag, FlagSpec};
pub use help::format_help;
pub use help_texts::DEFAULT_DESCRIPTION;
pub use options::Operands;
pub use parsed::ParsedCommand;
