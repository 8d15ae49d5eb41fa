/* ************************************************************************ **
** This file is part of gauss-trace, and is licensed under EITHER the MIT   **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

extern crate gauss_trace_tasks;

fn main() { gauss_trace_tasks::entry_points::gauss_trace() }
