use crate::numeric::round_display;
use crate::system::AugmentedSystem;

/// One recorded state of the augmented system.
///
/// The matrix and vector are copies taken at the moment of recording,
/// rounded for display everywhere except in the initial step.  They never
/// alias the working buffer.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    step: usize,
    description: String,
    operation: String,
    matrix: Vec<Vec<f64>>,
    vector: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pivot_row: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pivot_col: Option<usize>,
}

impl Step {
    /// Ordinal position in the trace.  0 is the untouched input.
    pub fn index(&self) -> usize { self.step }
    pub fn description(&self) -> &str { &self.description }
    /// Symbolic label such as `R2 = R2 - 1.500000 × R1`.
    pub fn operation(&self) -> &str { &self.operation }
    pub fn matrix(&self) -> &[Vec<f64>] { &self.matrix }
    pub fn vector(&self) -> &[f64] { &self.vector }
    pub fn pivot_row(&self) -> Option<usize> { self.pivot_row }
    pub fn pivot_col(&self) -> Option<usize> { self.pivot_col }

    /// `(row, col)` of the cell driving this step, if any.
    pub fn pivot(&self) -> Option<(usize, usize)> {
        match (self.pivot_row, self.pivot_col) {
            (Some(r), Some(c)) => Some((r, c)),
            _ => None,
        }
    }
}

/// Append-only builder for the trace of a single solve.
///
/// Indices are handed out here and nowhere else, which is what keeps them
/// gapless.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.steps.len() }
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }
    pub fn steps(&self) -> &[Step] { &self.steps }
    pub fn into_steps(self) -> Vec<Step> { self.steps }

    /// Snapshot `system` (rounded for display) as the next step.
    pub fn record(
        &mut self,
        system: &AugmentedSystem,
        description: impl Into<String>,
        operation: impl Into<String>,
        pivot: Option<(usize, usize)>,
    ) {
        let matrix = system.matrix().rows()
            .take(system.dim())
            .map(|row| row.iter().cloned().map(round_display).collect())
            .collect();
        let vector = system.vector().iter().cloned().map(round_display).collect();
        self.push(description.into(), operation.into(), matrix, vector, pivot);
    }

    /// Records the caller's data exactly as given, without rounding.
    ///
    /// This is how the initial state is captured, including input that cannot
    /// even be turned into an `AugmentedSystem`.
    pub fn record_raw(
        &mut self,
        matrix: &[Vec<f64>],
        vector: &[f64],
        description: impl Into<String>,
        operation: impl Into<String>,
    ) {
        self.push(description.into(), operation.into(), matrix.to_vec(), vector.to_vec(), None);
    }

    fn push(
        &mut self,
        description: String,
        operation: String,
        matrix: Vec<Vec<f64>>,
        vector: Vec<f64>,
        pivot: Option<(usize, usize)>,
    ) {
        let step = Step {
            step: self.steps.len(),
            pivot_row: pivot.map(|(r, _)| r),
            pivot_col: pivot.map(|(_, c)| c),
            description,
            operation,
            matrix,
            vector,
        };
        trace!("step {}: {} [{}]", step.step, step.description, step.operation);
        self.steps.push(step);
    }
}
