/// Error raised by the caller-supplied update capability, propagated unchanged.
pub type UpdateError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Reasons why a refinement run may be rejected or abort.
#[derive(Debug)]
pub enum RefineError {
    /// The input matrix has no rows or no columns.
    EmptyMatrix,
    /// An entry of the input matrix is negative.
    NegativeEntry { row: usize, col: usize, value: f64 },
    /// An entry of the input matrix is NaN or infinite.
    NonFiniteEntry { row: usize, col: usize },
    /// The probe-location list does not match the matrix column count.
    ProbeCountMismatch { cols: usize, probes: usize },
    /// A row summed to zero under `ZeroSumPolicy::Reject`.
    ZeroSumRow { row: usize },
    /// A column summed to zero under `ZeroSumPolicy::Reject`.
    ZeroSumColumn { col: usize },
    /// The update capability returned a matrix of a different shape.
    ShapeChanged {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// Error surfaced by the update capability. Never retried.
    ExternalUpdate(UpdateError),
}

impl std::fmt::Display for RefineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefineError::EmptyMatrix => write!(f, "hypothesis-probe matrix is empty"),
            RefineError::NegativeEntry { row, col, value } => {
                write!(f, "negative entry {value} at ({row}, {col})")
            }
            RefineError::NonFiniteEntry { row, col } => {
                write!(f, "non-finite entry at ({row}, {col})")
            }
            RefineError::ProbeCountMismatch { cols, probes } => write!(
                f,
                "matrix has {cols} probe columns but {probes} probe locations were supplied"
            ),
            RefineError::ZeroSumRow { row } => {
                write!(f, "row {row} sums to zero")
            }
            RefineError::ZeroSumColumn { col } => {
                write!(f, "column {col} sums to zero")
            }
            RefineError::ShapeChanged { expected, got } => write!(
                f,
                "update returned a {}x{} matrix, expected {}x{}",
                got.0, got.1, expected.0, expected.1
            ),
            RefineError::ExternalUpdate(err) => write!(f, "external update failed: {err}"),
        }
    }
}

impl std::error::Error for RefineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RefineError::ExternalUpdate(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
