/* ************************************************************************ **
** This file is part of gauss-trace, and is licensed under EITHER the MIT   **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// NOTE: This draws heavily off of assert-cli (MIT 2.0/Apache)

extern crate failure;
extern crate path_abs;
extern crate tempdir;
extern crate log;
extern crate env_logger;
#[cfg(feature = "test-diff")]
#[macro_use]
extern crate pretty_assertions;


pub use crate::cli_test::{CliTest, CheckFile, DirChecker, Environment, Result};
pub use crate::cli_test::{STDOUT_FILE, STDERR_FILE};
