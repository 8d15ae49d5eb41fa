/// Reasons an elimination stops before producing a solution.
///
/// Both variants describe the same underlying rank deficiency; they differ
/// only in *where* it is noticed.  The display strings are what ends up in
/// `SolutionResult::message`.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum EliminationError {
    /// No row at or below `column` has a usable entry in that column.
    #[fail(display = "Near-singular matrix detected. The system may be ill-conditioned or have no unique solution.")]
    PivotTooSmall { column: usize },

    /// Every pivot passed selection, yet a diagonal entry is sub-epsilon
    /// once forward elimination is done.
    #[fail(display = "Matrix became nearly singular during elimination. The system is likely ill-conditioned.")]
    PostEliminationSingularity { row: usize },
}

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum ShapeError {
    #[fail(display = "coefficient matrix is not square: row {} has {} entries, expected {}", row, len, dim)]
    NotSquare { row: usize, len: usize, dim: usize },

    #[fail(display = "constant vector has {} entries, but the matrix is {}x{}", len, dim, dim)]
    VectorLength { len: usize, dim: usize },
}

#[derive(Debug, Fail, Clone, PartialEq)]
#[fail(display = "unknown method '{}' (expected 'gauss' or 'gauss-jordan')", _0)]
pub struct UnknownMethod(pub String);
