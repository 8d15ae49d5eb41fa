use crate::dispatch::{self, Method, SolutionResult, INITIAL_DESCRIPTION, INITIAL_OPERATION};
use crate::step::StepRecorder;

use std::sync::mpsc::{self, Receiver, TryRecvError};

/// A solve running on the rayon pool.
///
/// The engine itself is strictly synchronous; this only moves one whole
/// [`solve`](crate::solve) call off of the caller's thread so that an event
/// loop does not stall on it.
#[must_use = "the result is only delivered through wait() or try_take()"]
pub struct PendingSolve {
    receiver: Receiver<SolutionResult>,
    method: Method,
    // kept for a last-resort result if the worker vanishes
    matrix: Vec<Vec<f64>>,
    vector: Vec<f64>,
}

/// Start `solve(matrix, vector, method)` in the background.
///
/// Inputs are moved into the task, so the caller cannot observe or disturb
/// the engine's copy while it runs.
pub fn spawn_solve(matrix: Vec<Vec<f64>>, vector: Vec<f64>, method: Method) -> PendingSolve {
    let (sender, receiver) = mpsc::channel();
    {
        let (matrix, vector) = (matrix.clone(), vector.clone());
        rayon::spawn(move || {
            let result = dispatch::solve(&matrix, &vector, method);
            // the handle may have been dropped already; nobody to tell
            let _ = sender.send(result);
        });
    }
    PendingSolve { receiver, method, matrix, vector }
}

impl PendingSolve {
    pub fn method(&self) -> Method { self.method }

    /// Block until the result is available.
    pub fn wait(self) -> SolutionResult {
        match self.receiver.recv() {
            Ok(result) => result,
            Err(_) => self.abandoned(),
        }
    }

    /// Non-blocking poll.  Returns `None` while the solve is still running.
    pub fn try_take(&mut self) -> Option<SolutionResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(self.abandoned()),
        }
    }

    fn abandoned(&self) -> SolutionResult {
        error!("background {} solve ended without producing a result", self.method);
        let mut recorder = StepRecorder::new();
        recorder.record_raw(&self.matrix, &self.vector, INITIAL_DESCRIPTION, INITIAL_OPERATION);
        SolutionResult::failed(
            self.method,
            "Background solve ended without producing a result".to_string(),
            recorder.into_steps(),
        )
    }
}
