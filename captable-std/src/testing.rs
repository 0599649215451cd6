//! Testing utilities for captable.
//!
//! - [`SharedBuffer`]: an in-memory writer whose contents stay readable after
//!   the writer has been moved into a [`Console`](crate::Console)
//! - [`FailingWriter`]: a writer whose every write fails

use std::{
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

/// A clonable in-memory writer. Clones share the same buffer.
///
/// # Example
///
/// ```rust,ignore
/// let buffer = SharedBuffer::new();
/// let console = Console::with_writer(buffer.clone());
/// console.write("hi")?;
/// assert_eq!(buffer.contents(), "hi\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// Everything written so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer that fails every write with [`io::ErrorKind::BrokenPipe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
