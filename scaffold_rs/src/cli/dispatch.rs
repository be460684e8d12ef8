//! Dispatcher: runs the operation and captures its outcome.
//!
//! Whatever the operation does (returns an error, or panics while being
//! called or polled) ends up as a [`DispatchResult`]. Nothing escapes.
//!
//! While the operation is polled the current thread is marked as capturing,
//! so a process panic hook can keep quiet about panics that will be reported
//! through the dispatch result (see [`crate::logging::install_panic_hook`]).

use std::any::Any;
use std::cell::Cell;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::pin;

use futures::FutureExt;
use futures::future::poll_fn;
use tracing::debug;

use crate::operation::Operation;
use crate::types::{CommandOptions, EXIT_FAILURE, EXIT_SUCCESS};

/// Outcome of one operation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// The operation completed. Its value, if any, is ignored.
    Success,
    /// The operation failed; carries the message for stderr.
    Failed(String),
}

impl DispatchResult {
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchResult::Success => EXIT_SUCCESS,
            DispatchResult::Failed(_) => EXIT_FAILURE,
        }
    }
}

/// Invoke the operation and await it to completion.
pub async fn dispatch_operation(
    operation: &dyn Operation,
    options: CommandOptions,
) -> DispatchResult {
    debug!(
        verbosity = options.verbosity,
        files = options.files.len(),
        "dispatching operation"
    );

    // The call itself sits inside the future so a panic before the first
    // await is caught the same way as one during polling.
    let mut guarded = pin!(
        AssertUnwindSafe(async move { operation.call(options).await }).catch_unwind()
    );
    let outcome = poll_fn(|cx| {
        let _capturing = CaptureGuard::enter();
        guarded.as_mut().poll(cx)
    })
    .await;

    match outcome {
        Ok(Ok(())) => DispatchResult::Success,
        Ok(Err(err)) => {
            debug!(error = %err, "operation failed");
            DispatchResult::Failed(format!("{err:#}"))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            debug!(%message, "operation panicked");
            DispatchResult::Failed(format!("operation panicked: {message}"))
        }
    }
}

thread_local! {
    static CAPTURING: Cell<usize> = const { Cell::new(0) };
}

/// Whether a panic on this thread right now would be caught by dispatch.
pub fn capturing_panics() -> bool {
    CAPTURING.with(|depth| depth.get() > 0)
}

struct CaptureGuard;

impl CaptureGuard {
    fn enter() -> Self {
        CAPTURING.with(|depth| depth.set(depth.get() + 1));
        CaptureGuard
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        CAPTURING.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
