//! Static help text constants.

/// Paragraph shown under the usage line.
pub const DEFAULT_DESCRIPTION: &str = "Command description.";

pub(super) const OPTIONS_HEADING: &str = "Options:";

/// Spaces before each flag column.
pub(super) const INDENT: usize = 2;

/// Spaces between the widest flag column and its description.
pub(super) const GUTTER: usize = 2;
