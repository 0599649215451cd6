//! Capability sets.

use bitflags::bitflags;

bitflags! {
    /// The standard contracts an instance has completely bound.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Every [`Readable`](crate::Readable) operation is bound.
        const READABLE = 1;
        /// Every [`Writable`](crate::Writable) operation is bound.
        const WRITABLE = 1 << 1;
    }
}
