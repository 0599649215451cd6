//! # captable-std
//!
//! Standard contracts and implementations for captable.
//!
//! This crate provides:
//! - **Contracts**: [`Readable`] (`read() -> String`) and [`Writable`]
//!   (`write(String) -> io::Result<()>`)
//! - **Console**: [`Console`], a concrete type implementing both
//! - **Capability sets**: [`Capabilities`]
//! - **Testing**: in-memory and failing writers in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use captable_core;

// Modules
pub mod capabilities;
pub mod console;
pub mod contracts;
pub mod testing;

pub use capabilities::Capabilities;
pub use console::{Console, GREETING};
pub use contracts::{Readable, Writable};
