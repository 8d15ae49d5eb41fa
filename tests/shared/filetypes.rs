use gauss_trace_engine::SolutionResult;
use gauss_trace_integration_test::{CheckFile, Result};
use path_abs::FileRead;
use std::path::Path;

/// The json written by `--output` for a single method.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultJson(pub SolutionResult);

impl CheckFile for ResultJson {
    /// Absolute tolerance for every number in the file.
    type OtherArgs = f64;

    fn read_file(path: &Path) -> Result<Self> {
        Ok(ResultJson(serde_json::from_reader(FileRead::open(path)?)?))
    }

    fn check_against(&self, expected: &ResultJson, tol: f64) {
        let (actual, expected) = (&self.0, &expected.0);
        assert_eq!(actual.method(), expected.method());
        assert_eq!(actual.status(), expected.status());
        assert_eq!(actual.message(), expected.message());
        assert_close!(abs=tol, actual.solution(), expected.solution());

        assert_eq!(actual.steps().len(), expected.steps().len());
        for (a, b) in actual.steps().iter().zip(expected.steps()) {
            assert_eq!(a.index(), b.index());
            assert_eq!(a.description(), b.description());
            assert_eq!(a.operation(), b.operation());
            assert_eq!(a.pivot(), b.pivot());
            assert_close!(abs=tol, a.matrix(), b.matrix(), "step {}", a.index());
            assert_close!(abs=tol, a.vector(), b.vector(), "step {}", a.index());
        }
    }
}
