//! # captable - Capability Dispatch Tables
//!
//! `captable` makes dynamic dispatch visible. A concrete type embeds one
//! dispatch table per contract it supports; each operation slot is bound to
//! an implementation and every call is resolved by contract and operation
//! name. Undeclared operations and unbound slots are checked errors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use captable::prelude::*;
//!
//! let mut console = Console::new();
//! bind(&mut console, Readable, "read", |c: &Console, (): ()| c.read())?;
//! bind(&mut console, Writable, "write", |c: &Console, (m,): (String,)| c.write(&m))?;
//!
//! let text = Readable::read(&console)?;
//! Writable::write(&console, format!("{text} world!"))??;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use captable_core::{
    CapError, CapResult, Contract, DispatchTable, Implements, Signature, bind, define_contract,
    invoke,
};

pub use captable_std::{Capabilities, Console, GREETING, Readable, Writable};

pub mod driver;
pub mod logging;

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use captable_std::testing::*;
}

/// Prelude module - common imports for captable.
///
/// # Usage
///
/// ```rust,ignore
/// use captable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        CapError, CapResult, Console, Contract, DispatchTable, Implements, Readable, Writable,
        bind, define_contract, invoke,
    };
}
