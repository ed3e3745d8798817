//! Destination of the stdout print family.
//!
//! [`print`](crate::print), [`println`](crate::println),
//! [`printf`](crate::printf) and the [`Tag`](crate::Tag) print methods
//! write to the process stdout unless another writer has been installed
//! with [`set_output`]. Redirection is process-wide.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

type Sink = Box<dyn Write + Send>;

static OUTPUT: Lazy<Mutex<Option<Sink>>> = Lazy::new(|| Mutex::new(None));

fn slot() -> MutexGuard<'static, Option<Sink>> {
    OUTPUT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sends the stdout print family to `writer` instead of stdout.
pub fn set_output<W: Write + Send + 'static>(writer: W) {
    *slot() = Some(Box::new(writer));
}

/// Goes back to writing to stdout, returning the writer that was installed.
pub fn reset_output() -> Option<Box<dyn Write + Send>> {
    slot().take()
}

/// Writes already-rendered text to the current destination.
///
/// Write failures are logged, not returned.
pub(crate) fn write_stdout(text: &str) {
    let mut guard = slot();
    let result = match guard.as_mut() {
        Some(writer) => writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush()),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
        }
    };

    if let Err(err) = result {
        tracing::warn!(error = %err, bytes = text.len(), "Failed to write colored output");
    }
}
