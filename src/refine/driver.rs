//! Refinement loop driver.
//!
//! Each iteration applies the fixed four-stage transform (column-normalize,
//! sharpen, row-normalize, external update) and compares the result against
//! the matrix the iteration started from. Convergence is informational: the
//! loop reports a fixed point but keeps running through its full budget
//! unless `stop_on_convergence` asks for an early exit.

use std::time::Instant;

use nalgebra::DMatrix;

use super::options::{ConvergenceMode, RefineOptions, Sharpening};
use super::update::ProbeUpdate;
use crate::diagnostics::{IterationRecord, RefinementStage, StageSnapshots};
use crate::error::RefineError;
use crate::matrix::{HypoProbeMatrix, ProbeId};
use crate::normalize::{normalize_cols, normalize_rows, sharpen_power, threshold_row_max};

/// Outcome of a refinement run.
#[derive(Clone, Debug)]
pub struct RefineResult {
    /// Matrix after the last executed iteration.
    pub matrix: HypoProbeMatrix,
    /// Convergence flag of the last executed iteration.
    pub converged: bool,
    /// Number of iterations actually executed.
    pub iterations: usize,
    /// Per-iteration trace, present when `collect_trace` was set.
    pub trace: Option<RefinementStage>,
}

/// Drives the iterative hypothesis-probe matrix refinement.
#[derive(Clone, Debug, Default)]
pub struct Refiner {
    options: RefineOptions,
}

impl Refiner {
    pub fn new(options: RefineOptions) -> Self {
        Refiner { options }
    }

    pub fn options(&self) -> &RefineOptions {
        &self.options
    }

    /// Run the refinement loop on `initial`.
    ///
    /// `probes` is the ordered list of unobserved locations the matrix columns
    /// refer to; its length must equal the column count. `update` is the
    /// model's re-weighting capability; its errors propagate unchanged and are
    /// never retried. The input matrix is read-only for the whole call; every
    /// iteration produces a fresh matrix.
    pub fn refine(
        &self,
        initial: &HypoProbeMatrix,
        probes: &[ProbeId],
        update: &mut impl ProbeUpdate,
    ) -> Result<RefineResult, RefineError> {
        initial.check_probes(probes)?;

        let opts = &self.options;
        let budget = opts.max_iterations.max(1);
        let shape = initial.shape();

        let t0 = Instant::now();
        let mut current: DMatrix<f64> = initial.as_inner().clone();
        let mut converged = false;
        let mut executed = 0usize;
        let mut records: Vec<IterationRecord> = if opts.collect_trace {
            Vec::with_capacity(budget)
        } else {
            Vec::new()
        };

        for iter in 0..budget {
            let start = current.clone();

            let col_nor = normalize_cols(&start, opts.zero_sum)?;
            let sharpened = match opts.sharpening {
                Sharpening::Power => sharpen_power(&col_nor, opts.power),
                Sharpening::RowMax => threshold_row_max(&col_nor),
            };
            let row_nor = normalize_rows(&sharpened, opts.zero_sum)?;

            let updated = update
                .update(&row_nor, probes)
                .map_err(RefineError::ExternalUpdate)?;
            if updated.shape() != shape {
                return Err(RefineError::ShapeChanged {
                    expected: shape,
                    got: updated.shape(),
                });
            }

            let residual = max_abs_diff(&start, &updated);
            converged = match opts.convergence {
                ConvergenceMode::Exact => updated == start,
                ConvergenceMode::Tolerance(eps) => residual <= eps,
            };
            executed = iter + 1;

            if converged {
                log::debug!("Refiner::refine iteration {iter} converged (residual {residual:.3e})");
            } else {
                log::debug!("Refiner::refine iteration {iter} residual {residual:.3e}");
            }

            if opts.collect_trace {
                records.push(IterationRecord {
                    index: iter,
                    residual,
                    converged,
                    stages: Some(StageSnapshots {
                        input: start,
                        col_normalized: col_nor,
                        sharpened,
                        row_normalized: row_nor,
                        updated: updated.clone(),
                    }),
                });
            }

            current = updated;

            if converged && opts.stop_on_convergence {
                break;
            }
        }

        let trace = if opts.collect_trace {
            Some(RefinementStage {
                elapsed_ms: t0.elapsed().as_secs_f64() * 1000.0,
                converged,
                iterations: records,
            })
        } else {
            None
        };

        // Re-wrapping revalidates whatever the update capability produced.
        let matrix = HypoProbeMatrix::new(current)?;

        Ok(RefineResult {
            matrix,
            converged,
            iterations: executed,
            trace,
        })
    }
}

fn max_abs_diff(a: &DMatrix<f64>, b: &DMatrix<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0f64, f64::max)
}
