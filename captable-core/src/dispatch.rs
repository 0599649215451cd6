//! # Bind and Invoke
//!
//! The free operations over instances that embed dispatch tables.
//!
//! A concrete type embeds one [`DispatchTable`] per contract it supports and
//! exposes it through [`Implements`]. Callers then go through [`bind`] and
//! [`invoke`] (or the per-operation functions `define_contract!` generates)
//! instead of calling the type's own methods.

use crate::{contract::Contract, error::CapResult, table::DispatchTable};

/// A type that carries a dispatch table for contract `C`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no dispatch table for `{C}`",
    label = "missing `Implements<{C}>`",
    note = "Embed a `DispatchTable<Self, {C}>` and expose it through `Implements<{C}>`."
)]
pub trait Implements<C: Contract>: Sized + 'static {
    /// The table for `C`.
    fn dispatch_table(&self) -> &DispatchTable<Self, C>;

    /// The table for `C`, mutably.
    fn dispatch_table_mut(&mut self) -> &mut DispatchTable<Self, C>;
}

/// Install `f` into `instance`'s table for `contract` at `operation`.
///
/// `f` receives the instance as its first argument and the operation's
/// parameters as a tuple. Rebinding a slot replaces the old implementation.
pub fn bind<T, C, A, R, F>(instance: &mut T, _contract: C, operation: &str, f: F) -> CapResult<()>
where
    T: Implements<C>,
    C: Contract,
    A: 'static,
    R: 'static,
    F: Fn(&T, A) -> R + Send + Sync + 'static,
{
    instance.dispatch_table_mut().bind(operation, f)
}

/// Call `operation` of `contract` on `instance` through its dispatch table.
pub fn invoke<T, C, A, R>(instance: &T, _contract: C, operation: &str, args: A) -> CapResult<R>
where
    T: Implements<C>,
    C: Contract,
    A: 'static,
    R: 'static,
{
    instance.dispatch_table().call(instance, operation, args)
}
