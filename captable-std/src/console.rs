//! The `Console`: one concrete type implementing both standard contracts.

use crate::{
    capabilities::Capabilities,
    contracts::{Readable, Writable},
};
use captable_core::{CapResult, DispatchTable, Implements};
use std::{
    fmt,
    io::{self, Stdout, Write},
    sync::{Mutex, PoisonError},
};

/// The text `Console::read` produces.
pub const GREETING: &str = "hello";

/// A console that reads a fixed greeting and writes lines to `W`.
///
/// The console's own [`read`](Console::read) and [`write`](Console::write)
/// are the implementations; its dispatch tables start empty and are populated
/// with [`bind`](captable_core::bind) or [`Console::bind_defaults`].
pub struct Console<W: 'static = Stdout> {
    out: Mutex<W>,
    readable: DispatchTable<Console<W>, Readable>,
    writable: DispatchTable<Console<W>, Writable>,
}

impl Console<Stdout> {
    /// A console writing to standard output.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for Console<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send + 'static> Console<W> {
    /// A console writing to `out`.
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            readable: DispatchTable::new(),
            writable: DispatchTable::new(),
        }
    }

    /// Always returns [`GREETING`].
    pub fn read(&self) -> String {
        GREETING.to_string()
    }

    /// Write `message` and a newline, then flush.
    pub fn write(&self, message: &str) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{message}")?;
        out.flush()?;

        #[cfg(feature = "tracing")]
        tracing::trace!(bytes = message.len() + 1, "console wrote line");

        Ok(())
    }

    /// Bind this console's own `read` and `write` into its tables.
    pub fn bind_defaults(&mut self) -> CapResult<()> {
        self.readable
            .bind("read", |console: &Self, (): ()| console.read())?;
        self.writable
            .bind("write", |console: &Self, (message,): (String,)| {
                console.write(&message)
            })?;
        Ok(())
    }

    /// The contracts whose tables are completely bound.
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::READABLE, self.readable.is_complete());
        caps.set(Capabilities::WRITABLE, self.writable.is_complete());
        caps
    }

    /// Consume the console, returning its writer.
    pub fn into_writer(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: 'static> Implements<Readable> for Console<W> {
    fn dispatch_table(&self) -> &DispatchTable<Self, Readable> {
        &self.readable
    }

    fn dispatch_table_mut(&mut self) -> &mut DispatchTable<Self, Readable> {
        &mut self.readable
    }
}

impl<W: 'static> Implements<Writable> for Console<W> {
    fn dispatch_table(&self) -> &DispatchTable<Self, Writable> {
        &self.writable
    }

    fn dispatch_table_mut(&mut self) -> &mut DispatchTable<Self, Writable> {
        &mut self.writable
    }
}

impl<W: 'static> fmt::Debug for Console<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("readable", &self.readable)
            .field("writable", &self.writable)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingWriter, SharedBuffer};

    #[test]
    fn native_methods_work_without_bindings() {
        let buffer = SharedBuffer::new();
        let console = Console::with_writer(buffer.clone());
        assert_eq!(console.read(), "hello");
        console.write("direct").unwrap();
        assert_eq!(buffer.contents(), "direct\n");
        assert!(console.capabilities().is_empty());
    }

    #[test]
    fn bind_defaults_completes_both_tables() {
        let mut console = Console::with_writer(Vec::new());
        console.bind_defaults().unwrap();
        assert_eq!(console.capabilities(), Capabilities::all());

        assert_eq!(Readable::read(&console).unwrap(), "hello");
        Writable::write(&console, "through the table".into())
            .unwrap()
            .unwrap();
        assert_eq!(console.into_writer(), b"through the table\n");
    }

    #[test]
    fn write_failure_is_reported() {
        let mut console = Console::with_writer(FailingWriter);
        console.bind_defaults().unwrap();
        let err = Writable::write(&console, "lost".into()).unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn debug_shows_bound_slots() {
        let mut console = Console::with_writer(Vec::new());
        console.bind_defaults().unwrap();
        let rendered = format!("{console:?}");
        assert!(rendered.contains(r#"contract: "Readable", bound: ["read"]"#));
        assert!(rendered.contains(r#"contract: "Writable", bound: ["write"]"#));
    }
}
