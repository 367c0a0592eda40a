//! Diagnostics data model exposed by the refiner and the demo binaries.
//!
//! `RefinementStage` is the entry point: timing plus one `IterationRecord` per
//! executed iteration. Stage snapshots capture every intermediate matrix of an
//! iteration, in transform order, and are only present when
//! `RefineOptions::collect_trace` asks for them.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Full trace of a refinement run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementStage {
    pub elapsed_ms: f64,
    /// Whether the final iteration reported convergence.
    pub converged: bool,
    pub iterations: Vec<IterationRecord>,
}

/// Diagnostics collected for a single refinement iteration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationRecord {
    pub index: usize,
    /// Max absolute entry change between the start and end of the iteration.
    pub residual: f64,
    pub converged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<StageSnapshots>,
}

/// Intermediate matrices of one iteration, in transform order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageSnapshots {
    pub input: DMatrix<f64>,
    pub col_normalized: DMatrix<f64>,
    pub sharpened: DMatrix<f64>,
    pub row_normalized: DMatrix<f64>,
    pub updated: DMatrix<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_without_empty_stages() {
        let stage = RefinementStage {
            elapsed_ms: 0.42,
            converged: true,
            iterations: vec![IterationRecord {
                index: 0,
                residual: 0.0,
                converged: true,
                stages: None,
            }],
        };
        let json = serde_json::to_string(&stage).expect("serialize");
        assert!(json.contains("\"elapsedMs\""));
        assert!(!json.contains("stages"));
    }
}
