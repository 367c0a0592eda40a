#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod matrix;
pub mod normalize;
pub mod refine;

// --- High-level re-exports -------------------------------------------------

// Main entry points: refiner + result.
pub use crate::refine::{IdentityUpdate, ProbeUpdate, RefineOptions, RefineResult, Refiner};

pub use crate::error::{RefineError, UpdateError};
pub use crate::matrix::{HypoProbeMatrix, ProbeId};
pub use crate::normalize::ZeroSumPolicy;
pub use crate::refine::{ConvergenceMode, Sharpening};

// Diagnostics returned alongside the refined matrix.
pub use crate::diagnostics::{IterationRecord, RefinementStage, StageSnapshots};

/// Small prelude for quick experiments.
///
/// ```
/// use probe_refiner::prelude::*;
///
/// let scores = HypoProbeMatrix::from_rows(2, 2, &[1.0, 1.0, 1.0, 3.0]).unwrap();
/// let refiner = Refiner::new(RefineOptions {
///     power: 1.0,
///     ..Default::default()
/// });
/// let result = refiner.refine(&scores, &[0, 1], &mut IdentityUpdate).unwrap();
/// assert!(result.converged);
/// ```
pub mod prelude {
    pub use crate::matrix::{HypoProbeMatrix, ProbeId};
    pub use crate::{IdentityUpdate, ProbeUpdate, RefineOptions, RefineResult, Refiner};
}
