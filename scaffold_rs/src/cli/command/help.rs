//! Help text generation.

use super::global::FLAGS;
use super::help_texts::{GUTTER, INDENT, OPTIONS_HEADING};
use super::options::Operands;

/// Render the usage synopsis.
///
/// ```text
/// Usage: <program> [options] [file...]
///
/// <description>
///
/// Options:
///   -q, --quiet    Print less output
///   ...
/// ```
///
/// Flag columns are padded to the widest one so descriptions line up.
pub fn format_help(program: &str, description: &str, operands: Operands) -> String {
    let mut out = format!("Usage: {program} [options]");
    if let Some(fragment) = operands.usage() {
        out.push(' ');
        out.push_str(&fragment);
    }
    out.push_str("\n\n");

    if !description.is_empty() {
        out.push_str(description);
        out.push_str("\n\n");
    }

    out.push_str(OPTIONS_HEADING);
    out.push('\n');

    let columns: Vec<String> = FLAGS.iter().map(|spec| spec.synopsis()).collect();
    let width = columns.iter().map(String::len).max().unwrap_or(0);
    for (column, spec) in columns.iter().zip(FLAGS) {
        out.push_str(&format!(
            "{:indent$}{column:<width$}{:gutter$}{}\n",
            "",
            "",
            spec.description,
            indent = INDENT,
            gutter = GUTTER,
        ));
    }

    out
}
