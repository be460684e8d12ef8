//! The pluggable operation seam.
//!
//! The entry point only knows that an operation takes [`CommandOptions`] and
//! eventually succeeds or fails. The binary wires in
//! [`run_command`](crate::command::run_command); tests swap in doubles through
//! [`EntryOptions::operation`](crate::EntryOptions::operation).

use std::future::Future;

use futures::future::BoxFuture;

use crate::types::CommandOptions;

/// A unit of work invoked once per successful parse.
pub trait Operation: Send + Sync {
    fn call(&self, options: CommandOptions) -> BoxFuture<'_, anyhow::Result<()>>;
}

impl<F, Fut> Operation for F
where
    F: Fn(CommandOptions) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    fn call(&self, options: CommandOptions) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(self(options))
    }
}
