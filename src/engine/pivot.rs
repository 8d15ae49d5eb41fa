use crate::errors::EliminationError;
use crate::numeric::EPSILON;
use crate::step::StepRecorder;
use crate::system::AugmentedSystem;

/// Partial pivoting for `column`, shared by both methods.
///
/// Picks the row at or below `column` with the largest magnitude in that
/// column (the first one wins ties), refuses anything sub-epsilon, and swaps
/// it into place.  A swap is recorded as its own step; no step is recorded
/// when the pivot is already in place.
pub(crate) fn partial_pivot(
    system: &mut AugmentedSystem,
    column: usize,
    recorder: &mut StepRecorder,
) -> Result<(), EliminationError> {
    let (pivot_row, magnitude) = select_pivot(system, column);
    debug!("column {}: pivot row {} (|a| = {:e})", column + 1, pivot_row + 1, magnitude);

    // (negated so that NaN also counts as unusable)
    if !(magnitude >= EPSILON) {
        warn!("column {}: no usable pivot (largest |a| = {:e})", column + 1, magnitude);
        return Err(EliminationError::PivotTooSmall { column });
    }

    if pivot_row != column {
        system.swap_rows(column, pivot_row);
        recorder.record(
            system,
            format!("Partial pivoting: Swap row {} with row {}", column + 1, pivot_row + 1),
            format!("R{} ↔ R{}", column + 1, pivot_row + 1),
            Some((column, column)),
        );
    }
    Ok(())
}

fn select_pivot(system: &AugmentedSystem, column: usize) -> (usize, f64) {
    let mut best = (column, system.coeff(column, column).abs());
    for row in column + 1..system.dim() {
        let magnitude = system.coeff(row, column).abs();
        if magnitude > best.1 {
            best = (row, magnitude);
        }
    }
    best
}
