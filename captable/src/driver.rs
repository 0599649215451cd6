//! The driver: wire a console's tables, then use them.

use captable_core::{CapResult, Implements, bind};
use captable_std::{Console, Readable, Writable};
use std::io::Write;

/// Settings for [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Appended to whatever `read` returns.
    pub suffix: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            suffix: " world!".to_string(),
        }
    }
}

/// Bind `console`'s own `read` and `write` into its tables, then [`greet`].
///
/// Returns the line written, without its newline.
pub fn run<W>(console: &mut Console<W>, config: &DriverConfig) -> CapResult<String>
where
    W: Write + Send + 'static,
{
    wire(console)?;
    greet(&*console, config)
}

/// Bind `console`'s `read` and `write` through the free `bind` operation.
pub fn wire<W>(console: &mut Console<W>) -> CapResult<()>
where
    W: Write + Send + 'static,
{
    bind(console, Readable, "read", |c: &Console<W>, (): ()| c.read())?;
    bind(console, Writable, "write", |c: &Console<W>, (message,): (String,)| {
        c.write(&message)
    })?;
    tracing::debug!(capabilities = ?console.capabilities(), "console wired");
    Ok(())
}

/// Read through the `Readable` table, append the suffix and write the
/// result through the `Writable` table.
pub fn greet<T>(instance: &T, config: &DriverConfig) -> CapResult<String>
where
    T: Implements<Readable> + Implements<Writable>,
{
    let mut line = Readable::read(instance)?;
    line.push_str(&config.suffix);

    Writable::write(instance, line.clone())??;
    tracing::info!(len = line.len(), "driver wrote line");
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use captable_std::testing::SharedBuffer;

    #[test]
    fn default_suffix() {
        assert_eq!(DriverConfig::default().suffix, " world!");
    }

    #[test]
    fn run_writes_hello_world() {
        let buffer = SharedBuffer::new();
        let mut console = Console::with_writer(buffer.clone());
        let line = run(&mut console, &DriverConfig::default()).unwrap();
        assert_eq!(line, "hello world!");
        assert_eq!(buffer.contents(), "hello world!\n");
    }

    #[test]
    fn custom_suffix() {
        let buffer = SharedBuffer::new();
        let mut console = Console::with_writer(buffer.clone());
        let config = DriverConfig {
            suffix: ", again".to_string(),
        };
        run(&mut console, &config).unwrap();
        assert_eq!(buffer.contents(), "hello, again\n");
    }
}
