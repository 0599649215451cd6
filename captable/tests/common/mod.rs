#![allow(dead_code)]

use captable::{DispatchTable, Implements, define_contract};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Contracts
// ============================================================================

define_contract! {
    pub contract Counter {
        fn increment(by: usize) -> usize;
        fn current() -> usize;
    }
}

define_contract! {
    pub contract Empty {}
}

// ============================================================================
// Test Types
// ============================================================================

/// A type with a shared counter and one table per test contract.
pub struct Tally {
    pub hits: Arc<AtomicUsize>,
    counter: DispatchTable<Tally, Counter>,
    empty: DispatchTable<Tally, Empty>,
}

impl Tally {
    pub fn new() -> Self {
        Self {
            hits: Arc::new(AtomicUsize::new(0)),
            counter: DispatchTable::new(),
            empty: DispatchTable::new(),
        }
    }

    pub fn increment(&self, by: usize) -> usize {
        self.hits.fetch_add(by, Ordering::SeqCst) + by
    }

    pub fn current(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Implements<Counter> for Tally {
    fn dispatch_table(&self) -> &DispatchTable<Self, Counter> {
        &self.counter
    }

    fn dispatch_table_mut(&mut self) -> &mut DispatchTable<Self, Counter> {
        &mut self.counter
    }
}

impl Implements<Empty> for Tally {
    fn dispatch_table(&self) -> &DispatchTable<Self, Empty> {
        &self.empty
    }

    fn dispatch_table_mut(&mut self) -> &mut DispatchTable<Self, Empty> {
        &mut self.empty
    }
}
