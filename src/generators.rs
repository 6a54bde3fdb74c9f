//! Stateful generators built from closures that capture a private cell.
//!
//! Each factory comes in two shapes: a closure form (`make_*`) that owns or
//! shares its captured state, and a struct form with named methods. The
//! struct form makes the shared cell visible in the type: an
//! [`Accumulator`] and every handle split from it hold the same
//! `Rc<Cell<i64>>`.
//!
//! These types are single-threaded (`Rc` and `Cell` are `!Sync`). For cells
//! shared between threads see [`crate::shared`].

use std::cell::Cell;
use std::rc::Rc;
use tracing::trace;

// ============================================================================
// Counter
// ============================================================================

/// Returns a closure that increments a private count and yields the new value.
///
/// ```
/// use closure_combinators::generators::make_counter;
///
/// let mut next = make_counter(5);
/// assert_eq!([next(), next(), next()], [6, 7, 8]);
/// ```
pub fn make_counter(start: i64) -> impl FnMut() -> i64 {
    let mut count = start;
    move || {
        count = count.wrapping_add(1);
        count
    }
}

/// Struct form of [`make_counter`].
///
/// Takes `&self` for increments; the count lives in a `Cell`.
#[derive(Debug)]
pub struct Counter {
    count: Cell<i64>,
}

impl Counter {
    pub fn new(start: i64) -> Self {
        Counter {
            count: Cell::new(start),
        }
    }

    /// Increments by one and returns the post-increment value.
    pub fn next_value(&self) -> i64 {
        let next = self.count.get().wrapping_add(1);
        self.count.set(next);
        next
    }

    pub fn current(&self) -> i64 {
        self.count.get()
    }
}

// ============================================================================
// Multiplier
// ============================================================================

/// Returns `x -> x * factor`. Captures `factor` by value; no shared state.
pub fn make_multiplier(factor: i64) -> impl Fn(i64) -> i64 {
    move |x| x.wrapping_mul(factor)
}

// ============================================================================
// Accumulator
// ============================================================================

/// Returns `(add, subtract, get)` closures over one shared cell.
///
/// ```
/// use closure_combinators::generators::make_accumulator;
///
/// let (add, subtract, get) = make_accumulator(100);
/// add(50);
/// assert_eq!(get(), 150);
/// subtract(30);
/// assert_eq!(get(), 120);
/// ```
pub fn make_accumulator(initial: i64) -> (impl Fn(i64), impl Fn(i64), impl Fn() -> i64) {
    let cell = Rc::new(Cell::new(initial));

    let add_cell = Rc::clone(&cell);
    let add = move |delta: i64| add_cell.set(add_cell.get().wrapping_add(delta));

    let sub_cell = Rc::clone(&cell);
    let subtract = move |delta: i64| sub_cell.set(sub_cell.get().wrapping_sub(delta));

    let get = move || cell.get();

    (add, subtract, get)
}

/// Owning form of [`make_accumulator`].
#[derive(Debug, Clone)]
pub struct Accumulator {
    cell: Rc<Cell<i64>>,
}

impl Accumulator {
    pub fn new(initial: i64) -> Self {
        Accumulator {
            cell: Rc::new(Cell::new(initial)),
        }
    }

    pub fn add(&self, delta: i64) {
        self.cell.set(self.cell.get().wrapping_add(delta));
    }

    pub fn subtract(&self, delta: i64) {
        self.cell.set(self.cell.get().wrapping_sub(delta));
    }

    pub fn get(&self) -> i64 {
        self.cell.get()
    }

    /// Splits off one handle per operation, all bound to this accumulator's cell.
    pub fn handles(&self) -> (AddHandle, SubtractHandle, GetHandle) {
        trace!(
            holders = Rc::strong_count(&self.cell),
            "splitting accumulator handles"
        );
        (
            AddHandle(Rc::clone(&self.cell)),
            SubtractHandle(Rc::clone(&self.cell)),
            GetHandle(Rc::clone(&self.cell)),
        )
    }

    /// Number of live owners of the cell (this accumulator, its clones and handles).
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.cell)
    }

    /// True if both accumulators mutate the same cell.
    pub fn shares_cell_with(&self, other: &Accumulator) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

#[derive(Debug, Clone)]
pub struct AddHandle(Rc<Cell<i64>>);

impl AddHandle {
    pub fn call(&self, delta: i64) {
        self.0.set(self.0.get().wrapping_add(delta));
    }
}

#[derive(Debug, Clone)]
pub struct SubtractHandle(Rc<Cell<i64>>);

impl SubtractHandle {
    pub fn call(&self, delta: i64) {
        self.0.set(self.0.get().wrapping_sub(delta));
    }
}

#[derive(Debug, Clone)]
pub struct GetHandle(Rc<Cell<i64>>);

impl GetHandle {
    pub fn call(&self) -> i64 {
        self.0.get()
    }
}
