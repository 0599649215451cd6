//! The standard Console through its dispatch tables.

use captable::{
    Capabilities, Console, Readable, Writable, bind,
    testing::{FailingWriter, SharedBuffer},
};
use std::io::ErrorKind;

fn wired(buffer: &SharedBuffer) -> Console<SharedBuffer> {
    let mut console = Console::with_writer(buffer.clone());
    console.bind_defaults().unwrap();
    console
}

#[test]
fn test_read_is_hello() {
    let console = wired(&SharedBuffer::new());
    for _ in 0..3 {
        assert_eq!(Readable::read(&console).unwrap(), "hello");
    }
}

#[test]
fn test_write_emits_message_and_newline_only() {
    for message in ["", "x", "hello world!", "with\ttab", "ünïcødé", "line\nbreak"] {
        let buffer = SharedBuffer::new();
        let console = wired(&buffer);
        Writable::write(&console, message.to_string()).unwrap().unwrap();
        assert_eq!(buffer.bytes(), format!("{message}\n").into_bytes());
    }
}

#[test]
fn test_capabilities_follow_bindings() {
    let mut console = Console::with_writer(SharedBuffer::new());
    assert_eq!(console.capabilities(), Capabilities::empty());

    bind(&mut console, Readable, "read", |c: &Console<SharedBuffer>, (): ()| c.read()).unwrap();
    assert_eq!(console.capabilities(), Capabilities::READABLE);

    console.bind_defaults().unwrap();
    assert_eq!(
        console.capabilities(),
        Capabilities::READABLE | Capabilities::WRITABLE
    );
}

#[test]
fn test_unwired_console_reports_unbound() {
    let console = Console::with_writer(SharedBuffer::new());
    assert!(Readable::read(&console).unwrap_err().is_unbound());
    assert!(Writable::write(&console, "x".into()).unwrap_err().is_unbound());
}

#[test]
fn test_io_error_propagates() {
    let mut console = Console::with_writer(FailingWriter);
    console.bind_defaults().unwrap();
    let err = Writable::write(&console, "dropped".into())
        .unwrap()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BrokenPipe);
}
