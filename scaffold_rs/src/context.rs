//! Caller-owned I/O context.
//!
//! The entry point borrows the streams for the duration of one call. It never
//! closes or replaces them and never reads stdin; stdin is carried for the
//! operation's benefit.

use std::collections::HashMap;
use std::fmt;
use std::io;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::error::InvocationError;

/// Readable stream slot.
pub type Reader<'a> = &'a mut (dyn AsyncRead + Unpin + Send);
/// Writable stream slot.
pub type Writer<'a> = &'a mut (dyn AsyncWrite + Unpin + Send);

/// Streams and environment for one invocation.
///
/// Every stream slot is optional so a malformed context can be represented
/// and rejected by [`run`](crate::run).
#[derive(Default)]
pub struct IoContext<'a> {
    /// Stream from which input is read.
    pub stdin: Option<Reader<'a>>,
    /// Stream to which output is written.
    pub stdout: Option<Writer<'a>>,
    /// Stream to which errors and status messages are written.
    pub stderr: Option<Writer<'a>>,
    /// Environment variables.
    pub env: HashMap<String, String>,
}

impl<'a> IoContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdin<R>(mut self, stdin: &'a mut R) -> Self
    where
        R: AsyncRead + Unpin + Send,
    {
        self.stdin = Some(stdin);
        self
    }

    pub fn with_stdout<W>(mut self, stdout: &'a mut W) -> Self
    where
        W: AsyncWrite + Unpin + Send,
    {
        self.stdout = Some(stdout);
        self
    }

    pub fn with_stderr<W>(mut self, stderr: &'a mut W) -> Self
    where
        W: AsyncWrite + Unpin + Send,
    {
        self.stderr = Some(stderr);
        self
    }

    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// Check that all three streams are present and hand out the writers.
    ///
    /// Checks run in stdin, stdout, stderr order so each missing slot maps to
    /// its own error.
    pub(crate) fn streams(&mut self) -> Result<Streams<'_, 'a>, InvocationError> {
        if self.stdin.is_none() {
            return Err(InvocationError::MissingStdin);
        }
        let stdout = self
            .stdout
            .as_deref_mut()
            .ok_or(InvocationError::MissingStdout)?;
        let stderr = self
            .stderr
            .as_deref_mut()
            .ok_or(InvocationError::MissingStderr)?;
        Ok(Streams { stdout, stderr })
    }
}

impl fmt::Debug for IoContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IoContext")
            .field("stdin", &self.stdin.is_some())
            .field("stdout", &self.stdout.is_some())
            .field("stderr", &self.stderr.is_some())
            .field("env", &self.env.len())
            .finish()
    }
}

/// Validated writers borrowed from an [`IoContext`].
///
/// Writes never fail the invocation: once the context is validated the exit
/// code is decided by parsing and the operation alone. A stream that rejects
/// a diagnostic is logged and the write is dropped.
pub(crate) struct Streams<'s, 'a> {
    pub stdout: &'s mut (dyn AsyncWrite + Unpin + Send + 'a),
    pub stderr: &'s mut (dyn AsyncWrite + Unpin + Send + 'a),
}

impl Streams<'_, '_> {
    pub async fn write_out(&mut self, text: &str) {
        report_write("stdout", write_text(&mut *self.stdout, text).await);
    }

    pub async fn write_err(&mut self, text: &str) {
        report_write("stderr", write_text(&mut *self.stderr, text).await);
    }
}

async fn write_text(
    writer: &mut (dyn AsyncWrite + Unpin + Send + '_),
    text: &str,
) -> io::Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.flush().await
}

fn report_write(stream: &'static str, result: io::Result<()>) {
    match result {
        Ok(()) => {}
        // Downstream closed the pipe (e.g. piping to `head`): expected, stay quiet.
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!(stream, "stream closed by reader, output dropped");
        }
        Err(err) => warn!(stream, error = %err, "failed to write to caller stream"),
    }
}
