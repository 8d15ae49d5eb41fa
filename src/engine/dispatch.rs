use crate::errors::UnknownMethod;
use crate::step::{Step, StepRecorder};
use crate::system::AugmentedSystem;
use crate::{gauss, gauss_jordan};

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    #[serde(rename = "gauss")] Gauss,
    #[serde(rename = "gauss-jordan")] GaussJordan,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Gauss, Method::GaussJordan];

    pub fn name(self) -> &'static str {
        match self {
            Method::Gauss => "gauss",
            Method::GaussJordan => "gauss-jordan",
        }
    }

    /// Human-readable name, e.g. for reports.
    pub fn title(self) -> &'static str {
        match self {
            Method::Gauss => "Gauss Elimination",
            Method::GaussJordan => "Gauss-Jordan Elimination",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gauss" => Ok(Method::Gauss),
            "gauss-jordan" => Ok(Method::GaussJordan),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

/// Outcome of a solve.
///
/// `NoSolution` and `InfiniteSolutions` are part of the vocabulary shared
/// with consumers, but the engine does not classify rank-deficient systems;
/// those are reported as `Error` through the singular pivot path.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Solved,
    NoSolution,
    InfiniteSolutions,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Status::Solved => "solved",
            Status::NoSolution => "no-solution",
            Status::InfiniteSolutions => "infinite-solutions",
            Status::Error => "error",
        })
    }
}

/// Everything a caller gets back from [`solve`].
///
/// Invariants: `solution` is `Some` only when `status` is `Solved`, and
/// `steps` always holds at least the initial snapshot.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionResult {
    method: Method,
    status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    solution: Option<Vec<f64>>,
    steps: Vec<Step>,
}

impl SolutionResult {
    pub fn method(&self) -> Method { self.method }
    pub fn status(&self) -> Status { self.status }
    pub fn message(&self) -> Option<&str> { self.message.as_ref().map(|s| &s[..]) }
    pub fn solution(&self) -> Option<&[f64]> { self.solution.as_ref().map(|v| &v[..]) }
    pub fn steps(&self) -> &[Step] { &self.steps }
    pub fn is_solved(&self) -> bool { self.status == Status::Solved }

    fn solved(method: Method, solution: Vec<f64>, steps: Vec<Step>) -> Self {
        let message = format!("System solved successfully using {} with partial pivoting", method.title());
        SolutionResult { method, status: Status::Solved, message: Some(message), solution: Some(solution), steps }
    }

    pub(crate) fn failed(method: Method, message: String, steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty(), "(BUG) result without an initial step");
        SolutionResult { method, status: Status::Error, message: Some(message), solution: None, steps }
    }
}

pub(crate) const INITIAL_DESCRIPTION: &str = "Initial augmented matrix";
pub(crate) const INITIAL_OPERATION: &str = "Starting configuration";

/// Solve `matrix * x = vector` and record every transformation along the way.
///
/// The inputs are copied before anything happens to them.  This never
/// panics and never returns an `Err`: singular systems, malformed shapes, and
/// even bugs inside the engine come back as a result with `Status::Error`,
/// carrying whatever steps were recorded up to that point.
pub fn solve(matrix: &[Vec<f64>], vector: &[f64], method: Method) -> SolutionResult {
    info!("solving {}x{} system with {}", matrix.len(), matrix.len(), method);
    // the input exactly as given, even when it is malformed
    let mut recorder = StepRecorder::new();
    recorder.record_raw(matrix, vector, INITIAL_DESCRIPTION, INITIAL_OPERATION);

    let mut system = match AugmentedSystem::from_parts(matrix, vector) {
        Ok(system) => system,
        Err(e) => {
            error!("{}", e);
            return SolutionResult::failed(method, e.to_string(), recorder.into_steps());
        },
    };

    // The recorder lives outside of the closure so that steps recorded
    // before a panic are still around afterwards.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| match method {
        Method::Gauss => gauss::solve(&mut system, &mut recorder),
        Method::GaussJordan => gauss_jordan::solve(&mut system, &mut recorder),
    }));

    let result = match outcome {
        Ok(Ok(solution)) => SolutionResult::solved(method, solution, recorder.into_steps()),
        Ok(Err(e)) => SolutionResult::failed(method, e.to_string(), recorder.into_steps()),
        Err(payload) => {
            let message = panic_message(&*payload);
            error!("elimination panicked: {}", message);
            SolutionResult::failed(method, message, recorder.into_steps())
        },
    };
    info!("{}: {} after {} steps", method, result.status, result.steps.len());
    result
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown error occurred".to_string()
    }
}
