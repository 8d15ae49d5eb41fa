//! Gauss-Jordan elimination straight to reduced row echelon form.  The
//! constants column ends up holding the solution, so there is no back
//! substitution.

use crate::errors::EliminationError;
use crate::numeric::{cleanup, format_number, format_vector, is_zero};
use crate::pivot::partial_pivot;
use crate::step::StepRecorder;
use crate::system::AugmentedSystem;

pub(crate) fn solve(
    system: &mut AugmentedSystem,
    recorder: &mut StepRecorder,
) -> Result<Vec<f64>, EliminationError> {
    let n = system.dim();
    for i in 0..n {
        partial_pivot(system, i, recorder)?;

        let pivot = system.coeff(i, i);
        system.divide_row(i, pivot);
        recorder.record(
            system,
            format!("Scale row {} to make pivot = 1", i + 1),
            format!("R{} = R{} / {}", i + 1, i + 1, format_number(pivot)),
            Some((i, i)),
        );

        // above *and* below the pivot
        for k in (0..n).filter(|&k| k != i) {
            let factor = system.coeff(k, i);
            if is_zero(factor) {
                continue;
            }

            system.subtract_row_multiple(k, i, factor, 0..n);
            recorder.record(
                system,
                format!("Eliminate column {} in row {}", i + 1, k + 1),
                format!("R{} = R{} - {} × R{}", k + 1, k + 1, format_number(factor), i + 1),
                Some((i, i)),
            );
        }
    }

    let solution: Vec<f64> = system.vector().iter().cloned().map(cleanup).collect();
    recorder.record(
        system,
        "Reduced row echelon form achieved - solution obtained",
        format!("Solution: {}", format_vector(&solution)),
        None,
    );
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(matrix: &[Vec<f64>], vector: &[f64]) -> (Result<Vec<f64>, EliminationError>, StepRecorder) {
        crate::init_test_logger();
        let mut system = AugmentedSystem::from_parts(matrix, vector).unwrap();
        let mut recorder = StepRecorder::new();
        let result = solve(&mut system, &mut recorder);
        (result, recorder)
    }

    fn operations(recorder: &StepRecorder) -> Vec<&str> {
        recorder.steps().iter().map(|s| s.operation()).collect()
    }

    #[test]
    fn textbook_3x3() {
        let (result, recorder) = run(
            &[vec![2.0, 1.0, -1.0], vec![-3.0, -1.0, 2.0], vec![-2.0, 1.0, 2.0]],
            &[8.0, -11.0, -3.0],
        );
        assert_eq!(result.unwrap(), vec![2.0, 3.0, -1.0]);
        assert_eq!(&operations(&recorder)[..4], &[
            "R1 ↔ R2",
            "R1 = R1 / -3.000000",
            "R2 = R2 - 2.000000 × R1",
            "R3 = R3 - -2.000000 × R1",
        ]);
        assert_eq!(
            *operations(&recorder).last().unwrap(),
            "Solution: [2.000000, 3.000000, -1.000000]",
        );
    }

    #[test]
    fn ends_in_reduced_row_echelon_form() {
        let (_, recorder) = run(
            &[vec![2.0, 1.0, -1.0], vec![-3.0, -1.0, 2.0], vec![-2.0, 1.0, 2.0]],
            &[8.0, -11.0, -3.0],
        );
        let last = recorder.steps().last().unwrap();
        assert_eq!(last.matrix(), &[
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ][..]);
        assert_eq!(last.vector(), &[2.0, 3.0, -1.0]);
        assert_eq!(last.description(), "Reduced row echelon form achieved - solution obtained");
    }

    #[test]
    fn every_column_gets_a_scale_step() {
        let (_, recorder) = run(&[vec![1.0, 0.0], vec![0.0, 1.0]], &[5.0, -3.0]);
        assert_eq!(operations(&recorder), vec![
            "R1 = R1 / 1.000000",
            "R2 = R2 / 1.000000",
            "Solution: [5.000000, -3.000000]",
        ]);
        let pivots: Vec<_> = recorder.steps().iter().map(|s| s.pivot()).collect();
        assert_eq!(pivots, vec![Some((0, 0)), Some((1, 1)), None]);
    }

    #[test]
    fn eliminates_above_the_pivot() {
        let (result, recorder) = run(&[vec![1.0, 1.0], vec![0.0, 2.0]], &[3.0, 4.0]);
        assert_eq!(result.unwrap(), vec![1.0, 2.0]);
        assert_eq!(operations(&recorder), vec![
            "R1 = R1 / 1.000000",
            "R2 = R2 / 2.000000",
            "R1 = R1 - 1.000000 × R2",
            "Solution: [1.000000, 2.000000]",
        ]);
    }

    #[test]
    fn zero_matrix_fails_immediately() {
        let (result, recorder) = run(&[vec![0.0, 0.0], vec![0.0, 0.0]], &[1.0, 1.0]);
        assert_eq!(result, Err(EliminationError::PivotTooSmall { column: 0 }));
        assert!(recorder.is_empty());
    }
}
