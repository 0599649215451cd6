//! The standard contracts: a text source and a line sink.

use captable_core::define_contract;

define_contract! {
    /// Something that produces text.
    pub contract Readable {
        /// Produce the source's text.
        fn read() -> String;
    }
}

define_contract! {
    /// Something that accepts lines of text.
    pub contract Writable {
        /// Emit `message` followed by a newline.
        fn write(message: String) -> std::io::Result<()>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use captable_core::{Contract, Signature};

    #[test]
    fn readable_declares_read() {
        assert_eq!(Readable::NAME, "Readable");
        assert_eq!(Readable::OPERATIONS, &["read"]);
        let sig = Readable::signature("read").unwrap();
        assert!(sig.matches(&Signature::of::<(), String>()));
    }

    #[test]
    fn writable_declares_write() {
        assert_eq!(Writable::OPERATIONS, &["write"]);
        let sig = Writable::signature("write").unwrap();
        assert!(sig.matches(&Signature::of::<(String,), std::io::Result<()>>()));
        assert!(Writable::signature("read").is_none());
    }
}
