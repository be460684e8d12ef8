use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use scaffold::cli::entrypoint::{EntryOptions, run};
use scaffold::types::EXIT_FAILURE;
use scaffold::{InvocationError, IoContext, logging};

/// Exit code when the entry point itself was called incorrectly.
const EXIT_CONTRACT: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    // Non-UTF-8 variables are skipped rather than failing the whole run.
    let env: HashMap<String, String> = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect();
    logging::init(&env);
    logging::install_panic_hook();

    // args[0] is the launcher (the resolved executable), args[1] the program
    // path as invoked; user arguments start at args[2].
    let launcher = std::env::current_exe()
        .map(PathBuf::into_os_string)
        .unwrap_or_default();
    let args: Vec<OsString> = std::iter::once(launcher)
        .chain(std::env::args_os())
        .collect();

    let mut stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut stderr = tokio::io::stderr();
    let mut io = IoContext::new()
        .with_stdin(&mut stdin)
        .with_stdout(&mut stdout)
        .with_stderr(&mut stderr)
        .with_env(env);

    let result = run(args, &mut io, &EntryOptions::default()).await;
    if let Err(err) = &result {
        eprintln!("[scaffold] {err}");
    }
    ExitCode::from(exit_status(&result))
}

/// Process status for an entry-point result.
///
/// A broken stdout never reaches here as an error: `run` drops the write and
/// keeps its exit code, so `scaffold --help | head -1` still exits 0.
fn exit_status(result: &Result<i32, InvocationError>) -> u8 {
    match result {
        Ok(code) => u8::try_from(*code).unwrap_or(EXIT_FAILURE as u8),
        Err(_) => EXIT_CONTRACT,
    }
}
