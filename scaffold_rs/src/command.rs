//! The tool's unit of work.
//!
//! This is where the real behavior of a tool built on the scaffold goes. The
//! entry point calls [`run_command`] with the parsed options and maps its
//! outcome to an exit code.

use tracing::{debug, info};

use crate::types::CommandOptions;

/// Run the command.
///
/// Currently records the invocation and succeeds.
pub async fn run_command(options: CommandOptions) -> anyhow::Result<()> {
    debug!(
        files = ?options.files,
        verbosity = options.verbosity,
        "running command"
    );

    if options.verbosity > 0 {
        info!(count = options.files.len(), "no work configured for input files");
    }

    Ok(())
}
