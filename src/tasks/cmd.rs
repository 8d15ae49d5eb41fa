/* ************************************************************************ **
** This file is part of gauss-trace, and is licensed under EITHER the MIT   **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::config::{MethodChoice, SystemFile};
use crate::session::{entry_actions, Action, SolverState};
use crate::ui::render::Renderer;
use crate::validation::validate;

use gauss_trace_engine::{spawn_solve, SolutionResult};
use path_abs::{FileWrite, PathFile};
use std::path::PathBuf;

/// Solutions from different methods that differ by more than this get a warning.
pub const AGREEMENT_TOL: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct SolveArgs {
    pub input: PathBuf,
    /// Overrides the method named in the input file.
    pub method: Option<MethodChoice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayArgs {
    pub output: Option<PathBuf>,
    pub heatmap: bool,
    pub color: bool,
}

pub fn run(args: &SolveArgs, display: &DisplayArgs) -> FailResult<()> {
    let input = SystemFile::load(&PathFile::new(&args.input)?)?;
    let choice = args.method.or(input.method).unwrap_or_default();
    info!("read {}x{} system from {}", input.matrix.len(), input.matrix.len(), args.input.display());

    validate(&input.matrix, &input.vector)?;

    let entered = entry_actions(&input.matrix, &input.vector)
        .into_iter()
        .fold(SolverState::default(), SolverState::reduce);

    let sessions = solve_sessions(&entered, choice);
    let results: Vec<&SolutionResult> = sessions.iter().filter_map(|s| s.result()).collect();

    let renderer = Renderer::new(display.color, display.heatmap);
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", renderer.result(result));
    }

    if let [a, b] = &results[..] {
        check_agreement(a, b);
    }

    if let Some(path) = &display.output {
        let file = FileWrite::create(path)?;
        match &results[..] {
            [single] => serde_json::to_writer_pretty(file, single)?,
            all => serde_json::to_writer_pretty(file, all)?,
        }
        info!("wrote {}", path.display());
    }

    for result in &results {
        if !result.is_solved() {
            bail!(
                "{} did not produce a solution: {}",
                result.method().title(),
                result.message().unwrap_or("unknown error"),
            );
        }
    }
    Ok(())
}

/// One session per method, all solving at the same time.
fn solve_sessions(entered: &SolverState, choice: MethodChoice) -> Vec<SolverState> {
    let pending: Vec<_> = choice.methods().into_iter()
        .map(|method| {
            let state = entered.clone().reduce(Action::SetLoading(true));
            let solve = spawn_solve(state.matrix().to_vec(), state.vector().to_vec(), method);
            (state, solve)
        })
        .collect();

    pending.into_iter()
        .map(|(state, solve)| state.reduce(Action::SetResult(solve.wait())))
        .collect()
}

fn check_agreement(a: &SolutionResult, b: &SolutionResult) {
    if let (Some(x), Some(y)) = (a.solution(), b.solution()) {
        let diff = max_difference(x, y);
        if diff > AGREEMENT_TOL {
            warn!("{} and {} disagree by up to {:e}", a.method(), b.method(), diff);
        } else {
            info!("{} and {} agree", a.method(), b.method());
        }
    }
}

fn max_difference(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauss_trace_engine::{Method, Status};
    use std::io::Write;
    use tempdir::TempDir;

    fn entered(matrix: &[Vec<f64>], vector: &[f64]) -> SolverState {
        entry_actions(matrix, vector).into_iter().fold(SolverState::default(), SolverState::reduce)
    }

    #[test]
    fn sessions_per_method() {
        let state = entered(
            &[vec![2.0, 1.0, -1.0], vec![-3.0, -1.0, 2.0], vec![-2.0, 1.0, 2.0]],
            &[8.0, -11.0, -3.0],
        );
        let sessions = solve_sessions(&state, MethodChoice::Both);
        assert_eq!(sessions.len(), 2);
        for (session, &method) in sessions.iter().zip(&Method::ALL) {
            assert!(!session.is_loading());
            let result = session.result().unwrap();
            assert_eq!(result.method(), method);
            assert_close!(abs=1e-6, result.solution().unwrap(), &[2.0, 3.0, -1.0][..]);
        }
    }

    #[test]
    fn differences() {
        assert_eq!(max_difference(&[1.0, 2.0], &[1.0, 2.5]), 0.5);
        assert_eq!(max_difference(&[], &[]), 0.0);
    }

    fn write_input(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("input.yaml");
        let mut file = ::std::fs::File::create(&path).unwrap();
        file.write_all(text.as_bytes()).unwrap();
        path
    }

    fn quiet(output: Option<PathBuf>) -> DisplayArgs {
        DisplayArgs { output, heatmap: false, color: false }
    }

    #[test]
    fn run_writes_json() {
        let dir = TempDir::new("gauss-trace").unwrap();
        let input = write_input(&dir, "method: gauss-jordan\nmatrix: [[2, 0], [0, 4]]\nvector: [2, 2]\n");
        let output = dir.path().join("out.json");

        run(&SolveArgs { input, method: None }, &quiet(Some(output.clone()))).unwrap();

        let text = ::std::fs::read_to_string(&output).unwrap();
        let result: SolutionResult = serde_json::from_str(&text).unwrap();
        assert_eq!(result.method(), Method::GaussJordan);
        assert_eq!(result.solution(), Some(&[1.0, 0.5][..]));
    }

    #[test]
    fn run_reports_singular_systems() {
        let dir = TempDir::new("gauss-trace").unwrap();
        let input = write_input(&dir, "matrix: [[1, 2], [2, 4]]\nvector: [3, 6]\n");
        let output = dir.path().join("out.json");

        let err = run(&SolveArgs { input, method: Some(MethodChoice::Both) }, &quiet(Some(output.clone())));
        assert!(err.unwrap_err().to_string().contains("did not produce a solution"));

        // the failed results are still written
        let text = ::std::fs::read_to_string(&output).unwrap();
        let results: Vec<SolutionResult> = serde_json::from_str(&text).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.status() == Status::Error));
    }

    #[test]
    fn run_rejects_zero_matrix() {
        let dir = TempDir::new("gauss-trace").unwrap();
        let input = write_input(&dir, "matrix: [[0, 0], [0, 0]]\nvector: [1, 1]\n");
        let err = run(&SolveArgs { input, method: None }, &quiet(None)).unwrap_err();
        assert_eq!(err.to_string(), "Matrix cannot be all zeros");
    }
}
