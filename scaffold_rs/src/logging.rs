//! Logging setup for the binary.
//!
//! Library code only emits `tracing` events; the binary installs a
//! `tracing-subscriber` fmt layer on the process stderr. The filter comes
//! from `SCAFFOLD_LOG`, then `RUST_LOG`, read from the invocation's
//! environment map. Entry-point events are at debug level, so the default
//! filter keeps runs silent.
//!
//! The binary also installs a panic hook so an operation panic, which dispatch
//! already reports on the caller's stderr, is not printed a second time.

use std::collections::HashMap;
use std::panic;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::dispatch::capturing_panics;

/// Tool-specific filter variable, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "SCAFFOLD_LOG";

const FALLBACK_ENV: &str = "RUST_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Pick the filter directive from the environment map.
pub fn filter_directive(env: &HashMap<String, String>) -> &str {
    [LOG_ENV, FALLBACK_ENV]
        .iter()
        .filter_map(|key| env.get(*key))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVE)
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(env: &HashMap<String, String>) {
    let directive = filter_directive(env);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("[scaffold][warn] invalid log filter '{directive}': {e}");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    });

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Keep operation panics to the one line dispatch writes.
///
/// Panics raised while dispatch is polling the operation are only logged at
/// debug level; any other panic goes to the previous hook.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if capturing_panics() {
            debug!(panic = %info, "operation panic captured");
        } else {
            previous(info);
        }
    }));
}
