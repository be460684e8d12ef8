//! Token classification for the scanner.

/// Terminates option scanning; every later token is an operand.
pub(super) const END_OF_OPTIONS: &str = "--";

/// Shape of one command-line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Token<'a> {
    /// `--`
    EndOfOptions,
    /// `--name` (name without the dashes, may contain `=`)
    Long(&'a str),
    /// `-abc` (the letters after the dash)
    Shorts(&'a str),
    /// Anything else, including a lone `-`.
    Operand,
}

pub(super) fn classify(arg: &str) -> Token<'_> {
    if arg == END_OF_OPTIONS {
        return Token::EndOfOptions;
    }
    if let Some(name) = arg.strip_prefix("--") {
        return Token::Long(name);
    }
    match arg.strip_prefix('-') {
        Some(letters) if !letters.is_empty() => Token::Shorts(letters),
        _ => Token::Operand,
    }
}
