/* ************************************************************************ **
** This file is part of gauss-trace, and is licensed under EITHER the MIT   **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use gauss_trace_engine::{AugmentedSystem, ShapeError};

/// Problems with an input that are caught before it reaches the engine.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum InputError {
    #[fail(display = "{}", _0)]
    Shape(#[cause] ShapeError),

    #[fail(display = "Matrix cannot be all zeros")]
    AllZeroMatrix,

    #[fail(display = "All inputs must be valid numbers (found {} at {})", value, location)]
    InvalidNumber { value: f64, location: String },
}

/// Checked in order: shape, then an all-zero matrix, then non-finite entries.
pub fn validate(matrix: &[Vec<f64>], vector: &[f64]) -> Result<(), InputError> {
    AugmentedSystem::from_parts(matrix, vector).map_err(InputError::Shape)?;

    if matrix.iter().flatten().all(|&x| x == 0.0) {
        return Err(InputError::AllZeroMatrix);
    }

    let coeffs = matrix.iter().enumerate().flat_map(|(r, row)| {
        row.iter().enumerate().map(move |(c, &x)| (x, format!("matrix[{}][{}]", r, c)))
    });
    let constants = vector.iter().enumerate().map(|(i, &x)| (x, format!("vector[{}]", i)));
    for (value, location) in coeffs.chain(constants) {
        if !value.is_finite() {
            return Err(InputError::InvalidNumber { value, location });
        }
    }
    Ok(())
}
