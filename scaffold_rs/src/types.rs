/// Exit code for successful runs, including help and version requests.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for parse errors and failed operations.
pub const EXIT_FAILURE: i32 = 1;

/// Options handed to the operation once parsing succeeds.
///
/// Built fresh for every invocation and consumed by the operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandOptions {
    /// Positional arguments, in command-line order.
    pub files: Vec<String>,
    /// Net verbosity: one up per `--verbose`, one down per `--quiet`.
    pub verbosity: i32,
}

impl CommandOptions {
    /// Record one `-v`/`--verbose` occurrence.
    pub fn more_output(&mut self) {
        self.verbosity = self.verbosity.saturating_add(1);
    }

    /// Record one `-q`/`--quiet` occurrence.
    pub fn less_output(&mut self) {
        self.verbosity = self.verbosity.saturating_sub(1);
    }
}
