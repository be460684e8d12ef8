//! Shared CLI entry point.
//!
//! [`run`] is the whole `main()` body, minus process wiring: it takes argv and
//! an [`IoContext`], and resolves to an exit code. The binary in
//! `src/bin/scaffold.rs` only builds those inputs from the real process.

use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::command::{DEFAULT_DESCRIPTION, Operands, ParsedCommand, format_help};
use super::dispatch::{DispatchResult, dispatch_operation};
use super::parser::parse_command;
use crate::command::run_command;
use crate::context::IoContext;
use crate::error::InvocationError;
use crate::operation::Operation;
use crate::types::EXIT_SUCCESS;

/// Number of leading argv elements reserved for the launcher and program path.
pub const RESERVED_ARGS: usize = 2;

/// Options controlling the command's identity and behavior.
pub struct EntryOptions {
    /// Program name for the usage line when `args[1]` has no usable file stem.
    pub fallback_name: &'static str,
    /// Paragraph shown under the usage line in `--help`.
    pub description: &'static str,
    /// Printed by `--version`. Only read when version output is requested.
    pub version: &'static str,
    /// Positional argument slot.
    pub operands: Operands,
    /// The work to run after a successful parse.
    pub operation: Arc<dyn Operation>,
}

impl Default for EntryOptions {
    fn default() -> Self {
        Self {
            fallback_name: env!("CARGO_PKG_NAME"),
            description: DEFAULT_DESCRIPTION,
            version: env!("CARGO_PKG_VERSION"),
            operands: Operands::default(),
            operation: Arc::new(run_command),
        }
    }
}

/// Run one invocation.
///
/// `args` is the full command line: `args[0]` is the launcher, `args[1]` the
/// program path (its file stem names the program), the rest is parsed.
///
/// Returns `Err` only for a malformed call (see [`InvocationError`]), before
/// anything is written or the operation is called. Every other outcome is an
/// exit code:
///
/// - `0` after help, version, or a successful operation;
/// - the parse error's code after writing `error: <message>` to stderr;
/// - `1` after writing the operation's error to stderr.
///
/// A stream that rejects a diagnostic does not change the exit code; the
/// failure is logged.
pub async fn run<I, S>(
    args: I,
    io: &mut IoContext<'_>,
    opts: &EntryOptions,
) -> Result<i32, InvocationError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let args = collect_args(args)?;
    let mut streams = io.streams()?;

    let program = program_name(&args[1], opts.fallback_name);
    let parsed = parse_command(&args[RESERVED_ARGS..], opts.operands);
    debug!(
        program,
        short_circuit = parsed.as_ref().is_ok_and(ParsedCommand::is_short_circuit),
        ?parsed,
        "parsed invocation"
    );

    match parsed {
        Ok(ParsedCommand::ShowHelp) => {
            let help = format_help(program, opts.description, opts.operands);
            streams.write_out(&help).await;
            Ok(EXIT_SUCCESS)
        }
        Ok(ParsedCommand::ShowVersion) => {
            streams.write_out(&format!("{}\n", opts.version)).await;
            Ok(EXIT_SUCCESS)
        }
        Ok(ParsedCommand::Run(options)) => {
            let result = dispatch_operation(opts.operation.as_ref(), options).await;
            if let DispatchResult::Failed(message) = &result {
                streams.write_err(&format!("{message}\n")).await;
            }
            Ok(result.exit_code())
        }
        Err(err) => {
            streams.write_err(&format!("error: {err}\n")).await;
            Ok(err.exit_code())
        }
    }
}

/// Collect argv, enforcing the length and encoding preconditions.
fn collect_args<I, S>(args: I) -> Result<Vec<String>, InvocationError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let raw: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if raw.len() < RESERVED_ARGS {
        return Err(InvocationError::TooFewArgs { len: raw.len() });
    }

    raw.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.into_string()
                .map_err(|_| InvocationError::NonUnicodeArg { index })
        })
        .collect()
}

/// File stem of the program path, e.g. `scaffold` for `/usr/bin/scaffold.exe`.
fn program_name<'a>(path: &'a str, fallback: &'a str) -> &'a str {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(fallback)
}
