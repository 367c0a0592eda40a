//! Validated hypothesis-probe score matrix.
//!
//! Rows index hypotheses, columns index yet-unobserved probe locations. The
//! matrix carries, for each hypothesis, an unnormalized score over which probe
//! would be queried next. Validation happens once at construction; the
//! refinement loop then replaces (never mutates) the matrix each iteration.

use crate::error::RefineError;
use nalgebra::DMatrix;

/// Identifier of a grid cell eligible to be probed next.
pub type ProbeId = usize;

/// Non-negative `nHypo × nProbe` score matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct HypoProbeMatrix {
    data: DMatrix<f64>,
}

impl HypoProbeMatrix {
    /// Validate and wrap a dense score matrix.
    ///
    /// Rejects empty matrices and any negative or non-finite entry. Checks run
    /// before any refinement iteration can observe the data.
    pub fn new(data: DMatrix<f64>) -> Result<Self, RefineError> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(RefineError::EmptyMatrix);
        }
        for col in 0..data.ncols() {
            for row in 0..data.nrows() {
                let value = data[(row, col)];
                if !value.is_finite() {
                    return Err(RefineError::NonFiniteEntry { row, col });
                }
                if value < 0.0 {
                    return Err(RefineError::NegativeEntry { row, col, value });
                }
            }
        }
        Ok(HypoProbeMatrix { data })
    }

    /// Build from a row-major slice, validating as in [`HypoProbeMatrix::new`].
    pub fn from_rows(nhypo: usize, nprobe: usize, entries: &[f64]) -> Result<Self, RefineError> {
        if nhypo == 0 || nprobe == 0 {
            return Err(RefineError::EmptyMatrix);
        }
        Self::new(DMatrix::from_row_slice(nhypo, nprobe, entries))
    }

    /// Number of hypotheses (rows).
    pub fn nhypo(&self) -> usize {
        self.data.nrows()
    }

    /// Number of unobserved probe locations (columns).
    pub fn nprobe(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.data.nrows(), self.data.ncols())
    }

    /// Ensure the probe-location list lines up with the matrix columns.
    pub fn check_probes(&self, probes: &[ProbeId]) -> Result<(), RefineError> {
        if probes.len() != self.data.ncols() {
            return Err(RefineError::ProbeCountMismatch {
                cols: self.data.ncols(),
                probes: probes.len(),
            });
        }
        Ok(())
    }

    pub fn as_inner(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub fn into_inner(self) -> DMatrix<f64> {
        self.data
    }
}

impl AsRef<DMatrix<f64>> for HypoProbeMatrix {
    fn as_ref(&self) -> &DMatrix<f64> {
        &self.data
    }
}
