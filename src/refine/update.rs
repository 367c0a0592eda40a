//! Narrow capability through which the external model re-weights the matrix.
//!
//! The probabilistic model (posterior joint, hypothesis priors) stays outside
//! this crate; an implementation captures whatever posterior state it needs and
//! exposes exactly one method. The refiner treats it as opaque: its output
//! becomes the next iterate, its errors propagate unchanged, nothing is
//! retried.

use crate::error::UpdateError;
use crate::matrix::ProbeId;
use nalgebra::DMatrix;

/// Model-specific re-weighting of a normalized, sharpened matrix back into
/// probe-location space.
pub trait ProbeUpdate {
    /// Fold posterior weighting into `matrix`. Must return a matrix of the
    /// same shape it was given; `probes` is the ordered probe-location list
    /// the columns refer to.
    fn update(
        &mut self,
        matrix: &DMatrix<f64>,
        probes: &[ProbeId],
    ) -> Result<DMatrix<f64>, UpdateError>;
}

/// Update that returns its input unchanged. Useful for tests and for probing
/// the fixed-point behavior of the bare normalization cycle.
pub struct IdentityUpdate;

impl ProbeUpdate for IdentityUpdate {
    fn update(
        &mut self,
        matrix: &DMatrix<f64>,
        _probes: &[ProbeId],
    ) -> Result<DMatrix<f64>, UpdateError> {
        Ok(matrix.clone())
    }
}

impl<F> ProbeUpdate for F
where
    F: FnMut(&DMatrix<f64>, &[ProbeId]) -> Result<DMatrix<f64>, UpdateError>,
{
    fn update(
        &mut self,
        matrix: &DMatrix<f64>,
        probes: &[ProbeId],
    ) -> Result<DMatrix<f64>, UpdateError> {
        self(matrix, probes)
    }
}
