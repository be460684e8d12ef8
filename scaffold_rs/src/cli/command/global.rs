//! Flags accepted by the command.
//!
//! The table order is the order flags appear in help output.

/// A recognized flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// `-q`, `--quiet`: one step less output (repeatable).
    Quiet,
    /// `-v`, `--verbose`: one step more output (repeatable).
    Verbose,
    /// `-V`, `--version`: print the version and stop.
    Version,
    /// `-h`, `--help`: print usage and stop.
    Help,
}

/// Spelling and help line of one flag.
#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    pub flag: Flag,
    pub short: char,
    pub long: &'static str,
    pub description: &'static str,
}

impl FlagSpec {
    /// The flag column of the help line, e.g. `-q, --quiet`.
    pub fn synopsis(&self) -> String {
        format!("-{}, --{}", self.short, self.long)
    }
}

/// All flags, in declaration order.
pub const FLAGS: &[FlagSpec] = &[
    FlagSpec {
        flag: Flag::Quiet,
        short: 'q',
        long: "quiet",
        description: "Print less output",
    },
    FlagSpec {
        flag: Flag::Verbose,
        short: 'v',
        long: "verbose",
        description: "Print more output",
    },
    FlagSpec {
        flag: Flag::Version,
        short: 'V',
        long: "version",
        description: "output the version number",
    },
    FlagSpec {
        flag: Flag::Help,
        short: 'h',
        long: "help",
        description: "display help for command",
    },
];

impl Flag {
    /// Look up a short flag letter (case-sensitive: `-v` and `-V` differ).
    pub fn from_short(letter: char) -> Option<Flag> {
        FLAGS.iter().find(|spec| spec.short == letter).map(|spec| spec.flag)
    }

    /// Look up a long flag name, without the leading `--`.
    pub fn from_long(name: &str) -> Option<Flag> {
        FLAGS.iter().find(|spec| spec.long == name).map(|spec| spec.flag)
    }

    /// Whether recognizing this flag ends parsing.
    pub fn short_circuits(self) -> bool {
        matches!(self, Flag::Version | Flag::Help)
    }
}
