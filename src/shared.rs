//! Thread-safe counterparts of the generators.
//!
//! Clones share one `Arc<AtomicI64>`; every mutation is a single atomic
//! read-modify-write, so concurrent increments are never lost.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// A counter that can be cloned into other threads.
#[derive(Debug, Clone)]
pub struct SharedCounter {
    count: Arc<AtomicI64>,
}

impl SharedCounter {
    pub fn new(start: i64) -> Self {
        SharedCounter {
            count: Arc::new(AtomicI64::new(start)),
        }
    }

    /// Increments by one and returns the post-increment value.
    pub fn next_value(&self) -> i64 {
        // fetch_add wraps on overflow and returns the previous value
        self.count.fetch_add(1, Ordering::SeqCst).wrapping_add(1)
    }

    pub fn current(&self) -> i64 {
        self.count.load(Ordering::SeqCst)
    }
}

/// An accumulator whose `add`/`subtract`/`get` may be called from any thread.
#[derive(Debug, Clone)]
pub struct SharedAccumulator {
    cell: Arc<AtomicI64>,
}

impl SharedAccumulator {
    pub fn new(initial: i64) -> Self {
        SharedAccumulator {
            cell: Arc::new(AtomicI64::new(initial)),
        }
    }

    pub fn add(&self, delta: i64) {
        self.cell.fetch_add(delta, Ordering::SeqCst);
    }

    pub fn subtract(&self, delta: i64) {
        self.cell.fetch_sub(delta, Ordering::SeqCst);
    }

    pub fn get(&self) -> i64 {
        self.cell.load(Ordering::SeqCst)
    }
}
