//! Per-instance dispatch tables.
//!
//! A [`DispatchTable`] has one slot per operation its contract declares.
//! Slots start unbound; [`DispatchTable::bind`] installs an implementation
//! and [`DispatchTable::call`] resolves a call through it.

use crate::{
    contract::{Contract, Signature},
    error::{CapError, CapResult},
};
use std::{any::Any, fmt, marker::PhantomData};

/// A bound implementation: receives the instance plus the parameter tuple.
type Binding<T, A, R> = Box<dyn Fn(&T, A) -> R + Send + Sync>;

/// A type-erased [`Binding`].
type Slot = Box<dyn Any + Send + Sync>;

/// Operation slots of contract `C` for instances of type `T`.
pub struct DispatchTable<T: 'static, C: Contract> {
    slots: Vec<Option<Slot>>,
    _marker: PhantomData<fn(&T, C)>,
}

impl<T: 'static, C: Contract> DispatchTable<T, C> {
    /// Create a table with every slot unbound.
    pub fn new() -> Self {
        Self {
            slots: C::OPERATIONS.iter().map(|_| None).collect(),
            _marker: PhantomData,
        }
    }

    /// Install `f` as the implementation of `operation`.
    ///
    /// A previous binding of the same slot is replaced.
    pub fn bind<A, R, F>(&mut self, operation: &str, f: F) -> CapResult<()>
    where
        A: 'static,
        R: 'static,
        F: Fn(&T, A) -> R + Send + Sync + 'static,
    {
        let (index, name) = resolve::<C>(operation)?;
        check_signature::<C, A, R>(name)?;

        let binding: Binding<T, A, R> = Box::new(f);
        let replaced = self.slots[index].replace(Box::new(binding)).is_some();

        #[cfg(feature = "tracing")]
        tracing::debug!(contract = C::NAME, operation = name, replaced, "bound capability");
        #[cfg(not(feature = "tracing"))]
        let _ = replaced;

        Ok(())
    }

    /// Call the implementation bound to `operation` on `instance`.
    pub fn call<A, R>(&self, instance: &T, operation: &str, args: A) -> CapResult<R>
    where
        A: 'static,
        R: 'static,
    {
        let result = self.lookup::<A, R>(operation);

        #[cfg(feature = "tracing")]
        match &result {
            Ok(_) => tracing::trace!(contract = C::NAME, operation, "invoking capability"),
            Err(error) => tracing::debug!(contract = C::NAME, operation, %error, "invocation rejected"),
        }

        let binding = result?;
        Ok(binding(instance, args))
    }

    fn lookup<A: 'static, R: 'static>(&self, operation: &str) -> CapResult<&Binding<T, A, R>> {
        let (index, name) = resolve::<C>(operation)?;
        let slot = self.slots[index]
            .as_ref()
            .ok_or(CapError::UnboundCapability {
                contract: C::NAME,
                operation: name,
            })?;
        check_signature::<C, A, R>(name)?;

        // Only `bind` writes slots and it has checked the same signature.
        slot.downcast_ref::<Binding<T, A, R>>()
            .ok_or_else(|| mismatch::<C, A, R>(name, "<unknown>".to_string()))
    }

    /// Whether `operation` has an implementation bound.
    pub fn is_bound(&self, operation: &str) -> CapResult<bool> {
        let (index, _) = resolve::<C>(operation)?;
        Ok(self.slots[index].is_some())
    }

    /// Names of the operations that currently have a binding.
    pub fn bound_operations(&self) -> impl Iterator<Item = &'static str> + '_ {
        C::OPERATIONS
            .iter()
            .zip(&self.slots)
            .filter(|(_, slot)| slot.is_some())
            .map(|(name, _)| *name)
    }

    /// Whether every declared operation is bound.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of slots (declared operations).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the contract declares no operations.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T: 'static, C: Contract> Default for DispatchTable<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static, C: Contract> fmt::Debug for DispatchTable<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("contract", &C::NAME)
            .field("bound", &self.bound_operations().collect::<Vec<_>>())
            .finish()
    }
}

/// Slot index and static name of a declared operation.
fn resolve<C: Contract>(operation: &str) -> CapResult<(usize, &'static str)> {
    C::OPERATIONS
        .iter()
        .enumerate()
        .find(|(_, name)| **name == operation)
        .map(|(index, name)| (index, *name))
        .ok_or_else(|| CapError::contract_violation(C::NAME, operation))
}

fn check_signature<C: Contract, A: 'static, R: 'static>(name: &'static str) -> CapResult<()> {
    let declared =
        C::signature(name).ok_or_else(|| CapError::contract_violation(C::NAME, name))?;
    if declared.matches(&Signature::of::<A, R>()) {
        Ok(())
    } else {
        Err(mismatch::<C, A, R>(name, declared.to_string()))
    }
}

fn mismatch<C: Contract, A: 'static, R: 'static>(name: &'static str, expected: String) -> CapError {
    CapError::SignatureMismatch {
        contract: C::NAME,
        operation: name,
        expected,
        found: Signature::of::<A, R>().to_string(),
    }
}
