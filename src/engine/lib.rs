/* ************************************************************************ **
** This file is part of gauss-trace, and is licensed under EITHER the MIT   **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Elimination engine for small dense systems `A x = b`.
//!
//! Besides the solution, every solve produces an ordered trace of [`Step`]s:
//! one rounded snapshot of the augmented system per mutation, starting with
//! the untouched input at index 0.  The trace is meant to be replayed by
//! something that displays the computation step by step.
//!
//! The entry point is [`solve`].  It never fails; problems are reported
//! through the [`Status`] of the returned [`SolutionResult`].

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;
extern crate serde;
extern crate itertools;
extern crate rayon;

#[cfg(test)] #[macro_use] extern crate gauss_trace_assert_close;
#[cfg(test)] #[macro_use] extern crate serde_json;
#[cfg(test)] #[macro_use] extern crate pretty_assertions;
#[cfg(test)] extern crate env_logger;

pub mod numeric;

mod errors;
mod matrix;
mod system;
mod step;
mod pivot;
mod gauss;
mod gauss_jordan;
mod dispatch;
mod background;

pub use crate::errors::{EliminationError, ShapeError, UnknownMethod};
pub use crate::matrix::Matrix;
pub use crate::system::AugmentedSystem;
pub use crate::step::{Step, StepRecorder};
pub use crate::dispatch::{solve, Method, Status, SolutionResult};
pub use crate::background::{spawn_solve, PendingSolve};

#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::Builder::new()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}
