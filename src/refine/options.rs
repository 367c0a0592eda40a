//! Parameters controlling the hypothesis-probe refinement loop.

use crate::normalize::ZeroSumPolicy;
use serde::Deserialize;

/// How the sharpened matrix is produced from the column-normalized one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sharpening {
    /// Element-wise power raise, a softmax-like sharpening.
    #[default]
    Power,
    /// Winner-take-all: keep each row's maxima, zero the rest.
    RowMax,
}

/// How two consecutive matrices are compared for convergence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceMode {
    /// Bit-exact element-wise equality. Fragile under iterative floating
    /// point; prefer `Tolerance` when the update step is not idempotent.
    #[default]
    Exact,
    /// Max absolute entry difference below the given threshold.
    Tolerance(f64),
}

/// Parameters controlling a refinement run.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RefineOptions {
    /// Exponent applied element-wise after column normalization.
    pub power: f64,
    /// Fixed iteration budget.
    pub max_iterations: usize,
    /// Sharpening variant applied between the two normalizations.
    pub sharpening: Sharpening,
    /// Policy for rows/columns that sum to zero.
    pub zero_sum: ZeroSumPolicy,
    /// Convergence comparison between the start and end of an iteration.
    pub convergence: ConvergenceMode,
    /// Stop as soon as convergence is detected. Defaults to `false`:
    /// convergence is reported, and whether to act on it is the caller's
    /// policy.
    pub stop_on_convergence: bool,
    /// Record per-iteration diagnostics, including stage snapshots.
    pub collect_trace: bool,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            power: 20.0,
            max_iterations: 20,
            sharpening: Sharpening::Power,
            zero_sum: ZeroSumPolicy::PreserveZeros,
            convergence: ConvergenceMode::Exact,
            stop_on_convergence: false,
            collect_trace: false,
        }
    }
}
