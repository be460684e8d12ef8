//! Operand slot declaration.

/// How many positional arguments the command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    /// No positional arguments.
    None,
    /// At most one, shown as `[name]`.
    Optional(&'static str),
    /// Any number, shown as `[name...]`.
    Variadic(&'static str),
}

impl Default for Operands {
    fn default() -> Self {
        Operands::Variadic("file")
    }
}

impl Operands {
    /// Upper bound on positional arguments, `None` when unbounded.
    pub fn max(self) -> Option<usize> {
        match self {
            Operands::None => Some(0),
            Operands::Optional(_) => Some(1),
            Operands::Variadic(_) => None,
        }
    }

    /// Usage-line fragment, if any.
    pub fn usage(self) -> Option<String> {
        match self {
            Operands::None => None,
            Operands::Optional(name) => Some(format!("[{name}]")),
            Operands::Variadic(name) => Some(format!("[{name}...]")),
        }
    }
}
