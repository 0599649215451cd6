//! # captable-core
//!
//! Core types for capability dispatch tables.
//!
//! This crate has minimal dependencies and holds the whole dispatch
//! mechanism; `captable-std` adds the standard contracts and `Console`.
//!
//! # Model
//!
//! - A **contract** ([`Contract`]) is a named, fixed set of operation
//!   signatures, declared with [`define_contract!`].
//! - A **dispatch table** ([`DispatchTable`]) maps each declared operation of
//!   one contract to an implementation bound to a specific instance.
//! - A concrete type embeds one table per contract and exposes it through
//!   [`Implements`].
//! - [`bind`] installs an implementation into a slot; [`invoke`] resolves a
//!   call by contract and operation name.
//!
//! Every slot moves one way, unbound to bound. Invoking an undeclared
//! operation or an unbound slot is a checked error, never a crash.
//!
//! # Error Types
//!
//! - [`CapError`] - all dispatch failures and propagated I/O errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod contract;
mod dispatch;
mod error;
mod table;

// Re-exports
pub use contract::{Contract, Signature};
pub use dispatch::{Implements, bind, invoke};
pub use error::{CapError, CapResult};
pub use table::DispatchTable;
