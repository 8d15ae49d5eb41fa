/* ************************************************************************ **
** This file is part of gauss-trace, and is licensed under EITHER the MIT   **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Plain-text rendering of a solve: the original system, one block per
//! recorded step, then the outcome.

use crate::ui::color::{self, ColorByRange, NullPainter, PaintAs};

use ansi_term::Style;
use gauss_trace_engine::numeric::format_number;
use gauss_trace_engine::{SolutionResult, Step};
use itertools::{EitherOrBoth, Itertools};

const CELL_WIDTH: usize = 12;

pub struct Renderer {
    cells: Box<dyn PaintAs<String, f64>>,
    pivot: Option<Style>,
}

impl Renderer {
    pub fn new(color: bool, heatmap: bool) -> Self {
        let cells: Box<dyn PaintAs<String, f64>> = match color && heatmap {
            true => Box::new(ColorByRange::heatmap()),
            false => Box::new(NullPainter),
        };
        let pivot = match color {
            true => Some(color::pivot_style()),
            false => None,
        };
        Renderer { cells, pivot }
    }

    pub fn result(&self, result: &SolutionResult) -> String {
        let mut out = format!("=== {} ===\n", result.method().title());
        if let Some(first) = result.steps().first() {
            out += "Original system:\n";
            out += &equations(first.matrix(), first.vector());
            out += "\n";
        }
        for step in result.steps() {
            out += &self.step(step);
            out += "\n";
        }
        out += &format!("Status: {}\n", result.status());
        if let Some(message) = result.message() {
            out += message;
            out += "\n";
        }
        if let Some(solution) = result.solution() {
            for (i, &x) in solution.iter().enumerate() {
                out += &format!("x{} = {}\n", i + 1, format_number(x));
            }
        }
        out
    }

    pub fn step(&self, step: &Step) -> String {
        let mut out = format!("Step {}: {}\n", step.index(), step.description());
        out += &format!("Operation: {}\n", step.operation());

        let matrix_scale = Intensity::over(step.matrix().iter().flat_map(|row| row.iter()));
        let vector_scale = Intensity::over(step.vector());

        // error snapshots hold the input as given, which may be ragged
        for (r, pair) in step.matrix().iter().zip_longest(step.vector()).enumerate() {
            let (coeffs, constant) = match pair {
                EitherOrBoth::Both(row, &b) => (&row[..], Some(b)),
                EitherOrBoth::Left(row) => (&row[..], None),
                EitherOrBoth::Right(&b) => (&[][..], Some(b)),
            };

            let cells = coeffs.iter().enumerate().map(|(c, &x)| {
                let text = pad(format_number(x));
                match self.pivot {
                    Some(style) if step.pivot() == Some((r, c)) => color::paint(style, text).to_string(),
                    _ => self.cells.paint_as(&matrix_scale.of(x), text),
                }
            }).join(" ");

            let constant = match constant {
                Some(b) => self.cells.paint_as(&vector_scale.of(b), pad(format_number(b))),
                None => pad(String::new()),
            };
            out += &format!("[{} | {}]\n", cells, constant);
        }
        out
    }
}

fn pad(text: String) -> String { format!("{:>width$}", text, width = CELL_WIDTH) }

/// `|v| / max|v|` over one snapshot, or zero everywhere when the max is zero.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Intensity { max: f64 }

impl Intensity {
    fn over<'a>(values: impl IntoIterator<Item = &'a f64>) -> Self {
        let max = values.into_iter().map(|v| v.abs()).fold(0.0, f64::max);
        Intensity { max }
    }

    fn of(&self, value: f64) -> f64 {
        match self.max == 0.0 {
            true => 0.0,
            false => value.abs() / self.max,
        }
    }
}

/// The input written out as equations, e.g. `2x1 +1x2 -1x3 = 8`.
pub fn equations(matrix: &[Vec<f64>], vector: &[f64]) -> String {
    let mut out = String::new();
    for (row, b) in matrix.iter().zip(vector) {
        let lhs = row.iter().enumerate().map(|(j, &coef)| {
            let sign = if coef >= 0.0 && j > 0 { "+" } else { "" };
            format!("{}{}x{}", sign, coef, j + 1)
        }).join(" ");
        out += &format!("{} = {}\n", lhs, b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauss_trace_engine::{solve, Method};

    impl Renderer {
        fn plain() -> Self { Renderer::new(false, false) }
    }

    fn textbook() -> SolutionResult {
        solve(
            &[vec![2.0, 1.0, -1.0], vec![-3.0, -1.0, 2.0], vec![-2.0, 1.0, 2.0]],
            &[8.0, -11.0, -3.0],
            Method::Gauss,
        )
    }

    #[test]
    fn initial_step_block() {
        let result = textbook();
        assert_eq!(Renderer::plain().step(&result.steps()[0]), "\
Step 0: Initial augmented matrix
Operation: Starting configuration
[    2.000000     1.000000    -1.000000 |     8.000000]
[   -3.000000    -1.000000     2.000000 |   -11.000000]
[   -2.000000     1.000000     2.000000 |    -3.000000]
");
    }

    #[test]
    fn whole_result() {
        let text = Renderer::plain().result(&textbook());
        assert!(text.starts_with("=== Gauss Elimination ===\nOriginal system:\n2x1 +1x2 -1x3 = 8\n"));
        assert!(text.contains("Step 1: Partial pivoting: Swap row 1 with row 2\nOperation: R1 ↔ R2\n"));
        assert!(text.ends_with("\
Status: solved
System solved successfully using Gauss Elimination with partial pivoting
x1 = 2.000000
x2 = 3.000000
x3 = -1.000000
"));
    }

    #[test]
    fn failed_result_has_no_solution_lines() {
        let result = solve(&[vec![0.0, 0.0], vec![0.0, 0.0]], &[1.0, 1.0], Method::GaussJordan);
        let text = Renderer::plain().result(&result);
        assert!(text.contains("Status: error\nNear-singular matrix detected."));
        assert!(!text.contains("x1 = "));
    }

    #[test]
    fn ragged_snapshot() {
        let result = solve(&[vec![1.0, 2.0], vec![3.0]], &[1.0, 2.0, 3.0], Method::Gauss);
        let text = Renderer::plain().step(&result.steps()[0]);
        let rows: Vec<_> = text.lines().skip(2).collect();
        assert_eq!(rows, vec![
            "[    1.000000     2.000000 |     1.000000]",
            "[    3.000000 |     2.000000]",
            "[ |     3.000000]",
        ]);
    }

    #[test]
    fn pivot_cell_is_highlighted() {
        let result = textbook();
        let swap = &result.steps()[1];
        assert_eq!(swap.pivot(), Some((0, 0)));

        let text = Renderer::new(true, false).step(swap);
        let first_row = text.lines().nth(2).unwrap();
        assert!(first_row.starts_with(&format!("[{}", color::paint(color::pivot_style(), "   -3.000000"))));
        // nothing else is colored without a heatmap
        let second_row = text.lines().nth(3).unwrap();
        assert!(!second_row.contains('\x1b'));
    }

    #[test]
    fn heatmap_colors_every_cell() {
        let result = textbook();
        let text = Renderer::new(true, true).step(&result.steps()[0]);
        let row = text.lines().nth(2).unwrap();
        assert_eq!(row.matches("\x1b[0m").count(), 4);
    }

    #[test]
    fn intensity_scale() {
        let scale = Intensity::over(&[1.0, -4.0, 2.0]);
        assert_eq!(scale.of(-4.0), 1.0);
        assert_eq!(scale.of(2.0), 0.5);
        assert_eq!(Intensity::over(&[0.0, 0.0]).of(0.0), 0.0);
        assert_eq!(Intensity::over(&[] as &[f64]).of(5.0), 0.0);
    }

    #[test]
    fn equation_text() {
        assert_eq!(
            equations(&[vec![1.5, -2.0], vec![0.0, 1.0]], &[3.0, -1.0]),
            "1.5x1 -2x2 = 3\n0x1 +1x2 = -1\n",
        );
    }
}
