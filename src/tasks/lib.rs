/* ************************************************************************ **
** This file is part of gauss-trace, and is licensed under EITHER the MIT   **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#![deny(unused_must_use)]

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate clap;
extern crate serde;
extern crate serde_json;
extern crate serde_yaml;
extern crate serde_ignored;
extern crate fern;
extern crate ansi_term;
extern crate itertools;
extern crate path_abs;
extern crate gauss_trace_engine;

#[cfg(test)] #[macro_use] extern crate gauss_trace_assert_close;
#[cfg(test)] #[macro_use] extern crate pretty_assertions;
#[cfg(test)] extern crate tempdir;

pub type FailResult<T> = Result<T, failure::Error>;

pub mod entry_points;
pub mod config;
pub mod session;
pub mod validation;

mod cmd;
mod ui;
