//! Gauss elimination: forward elimination to upper-triangular form, then
//! back substitution.

use crate::errors::EliminationError;
use crate::numeric::{cleanup, format_number, format_vector, is_zero};
use crate::pivot::partial_pivot;
use crate::step::StepRecorder;
use crate::system::AugmentedSystem;

pub(crate) fn solve(
    system: &mut AugmentedSystem,
    recorder: &mut StepRecorder,
) -> Result<Vec<f64>, EliminationError> {
    forward_elimination(system, recorder)?;
    check_diagonal(system)?;
    Ok(back_substitution(system, recorder))
}

fn forward_elimination(
    system: &mut AugmentedSystem,
    recorder: &mut StepRecorder,
) -> Result<(), EliminationError> {
    let n = system.dim();
    for i in 0..n {
        partial_pivot(system, i, recorder)?;

        let pivot = system.coeff(i, i);
        for k in i + 1..n {
            let factor = system.coeff(k, i) / pivot;
            // a no-op elimination leaves no trace
            if is_zero(factor) {
                continue;
            }

            // everything left of column i is already zero in both rows
            system.subtract_row_multiple(k, i, factor, i..n);
            recorder.record(
                system,
                format!("Eliminate column {} in row {}", i + 1, k + 1),
                format!("R{} = R{} - {} × R{}", k + 1, k + 1, format_number(factor), i + 1),
                Some((i, i)),
            );
        }
    }
    Ok(())
}

// Second guard, independent of pivot selection.
fn check_diagonal(system: &AugmentedSystem) -> Result<(), EliminationError> {
    match system.matrix().diagonal().position(is_zero) {
        Some(row) => {
            warn!("diagonal entry {} vanished during elimination", row + 1);
            Err(EliminationError::PostEliminationSingularity { row })
        },
        None => Ok(()),
    }
}

fn back_substitution(system: &AugmentedSystem, recorder: &mut StepRecorder) -> Vec<f64> {
    let n = system.dim();
    let mut solution = vec![0.0; n];
    for i in (0..n).rev() {
        // no intermediate rounding inside the sum
        let mut sum = system.vector()[i];
        for j in i + 1..n {
            sum -= system.coeff(i, j) * solution[j];
        }
        solution[i] = cleanup(sum / system.coeff(i, i));

        // the last unknown resolved is reported by the final step instead
        if i > 0 {
            recorder.record(
                system,
                format!("Back substitution: solve for x{}", i + 1),
                format!("x{} = {}", i + 1, format_number(solution[i])),
                None,
            );
        }
    }

    recorder.record(
        system,
        "Final solution obtained",
        format!("Solution: {}", format_vector(&solution)),
        None,
    );
    solution
}
