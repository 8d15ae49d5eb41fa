/* ************************************************************************ **
** This file is part of gauss-trace, and is licensed under EITHER the MIT   **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! State of one interactive solving session, updated only through [`Action`]s.

use gauss_trace_engine::SolutionResult;

pub const INITIAL_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct SolverState {
    size: usize,
    matrix: Vec<Vec<f64>>,
    vector: Vec<f64>,
    result: Option<SolutionResult>,
    is_loading: bool,
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Resize to `n x n`.  Discards all entries, the result, and the error.
    SetSize(usize),
    SetMatrix { row: usize, col: usize, value: f64 },
    SetVector { index: usize, value: f64 },
    /// Store a finished solve.  Also ends loading.
    SetResult(SolutionResult),
    SetLoading(bool),
    /// Also ends loading.
    SetError(Option<String>),
    /// Zero everything, keeping the current size.
    Reset,
}

impl Default for SolverState {
    fn default() -> Self { SolverState::with_size(INITIAL_SIZE) }
}

impl SolverState {
    pub fn with_size(size: usize) -> Self {
        SolverState {
            size,
            matrix: vec![vec![0.0; size]; size],
            vector: vec![0.0; size],
            result: None,
            is_loading: false,
            error: None,
        }
    }

    pub fn size(&self) -> usize { self.size }
    pub fn matrix(&self) -> &[Vec<f64>] { &self.matrix }
    pub fn vector(&self) -> &[f64] { &self.vector }
    pub fn result(&self) -> Option<&SolutionResult> { self.result.as_ref() }
    pub fn is_loading(&self) -> bool { self.is_loading }
    pub fn error(&self) -> Option<&str> { self.error.as_ref().map(|s| &s[..]) }

    pub fn reduce(self, action: Action) -> SolverState {
        match action {
            Action::SetSize(size) => SolverState {
                is_loading: self.is_loading,
                ..SolverState::with_size(size)
            },
            Action::SetMatrix { row, col, value } => {
                let mut state = self;
                match state.matrix.get_mut(row).and_then(|r| r.get_mut(col)) {
                    Some(entry) => *entry = value,
                    None => warn!("ignoring edit of matrix[{}][{}] in a {}x{} system", row, col, state.size, state.size),
                }
                state
            },
            Action::SetVector { index, value } => {
                let mut state = self;
                match state.vector.get_mut(index) {
                    Some(entry) => *entry = value,
                    None => warn!("ignoring edit of vector[{}] in a {}x{} system", index, state.size, state.size),
                }
                state
            },
            Action::SetResult(result) => SolverState { result: Some(result), is_loading: false, ..self },
            Action::SetLoading(is_loading) => SolverState { is_loading, ..self },
            Action::SetError(error) => SolverState { error, is_loading: false, ..self },
            Action::Reset => SolverState::with_size(self.size),
        }
    }
}

/// The edits that turn a fresh session into one holding `matrix` and `vector`.
pub fn entry_actions(matrix: &[Vec<f64>], vector: &[f64]) -> Vec<Action> {
    let mut actions = vec![Action::SetSize(matrix.len())];
    for (row, values) in matrix.iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            actions.push(Action::SetMatrix { row, col, value });
        }
    }
    for (index, &value) in vector.iter().enumerate() {
        actions.push(Action::SetVector { index, value });
    }
    actions
}
