//! # Closures & Combinators
//!
//! Small examples of recursion, closures, higher-order functions and shared
//! state, plus a `tour` binary that prints each of them.
//!
//! ## Modules
//!
//! 1. **numeric** - `factorial`, `factorial_recursive`, `is_prime`, `power`
//! 2. **generators** - closures that capture a private cell
//!    - `make_counter` / `Counter`
//!    - `make_multiplier`
//!    - `make_accumulator` / `Accumulator` with split handles
//! 3. **shared** - atomic counter and accumulator for use across threads
//! 4. **transforms** - `apply`, `filter`, `reduce`, `compose`
//! 5. **parallel** - the same transforms on the rayon pool
//! 6. **introspect** - pid, executable, arguments of the running process
//! 7. **tour** / **config** - the demonstration driver and its TOML config
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin tour
//! cargo run --bin tour -- --section closures --section accumulator
//! cargo run --bin tour -- --config tour.toml --no-color
//! RUST_LOG=debug cargo run --bin tour
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enums
//! - `serde` + `toml` - tour configuration
//! - `rayon` - parallel transforms
//! - `colored` / `itertools` - tour output
//! - `clap` / `tracing` - command line and logging for the binary

pub mod config;
pub mod error;
pub mod generators;
pub mod introspect;
pub mod numeric;
pub mod parallel;
pub mod shared;
pub mod tour;
pub mod transforms;

pub use error::{ConfigError, NumericError};
pub use generators::{make_accumulator, make_counter, make_multiplier, Accumulator, Counter};
pub use numeric::{factorial, factorial_recursive, is_prime, power};
pub use transforms::{apply, compose, filter, identity, reduce};
