//! JSON runtime configuration for the demo binaries.

use crate::matrix::{HypoProbeMatrix, ProbeId};
use crate::refine::RefineOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Write the serialized refinement trace here when set.
    pub json_out: Option<PathBuf>,
}

/// Row-major matrix literal as it appears in config files.
#[derive(Clone, Deserialize)]
pub struct MatrixConfig {
    pub nhypo: usize,
    pub nprobe: usize,
    pub entries: Vec<f64>,
}

impl MatrixConfig {
    pub fn build(&self) -> Result<HypoProbeMatrix, String> {
        if self.entries.len() != self.nhypo * self.nprobe {
            return Err(format!(
                "matrix literal has {} entries, expected {}x{}",
                self.entries.len(),
                self.nhypo,
                self.nprobe
            ));
        }
        HypoProbeMatrix::from_rows(self.nhypo, self.nprobe, &self.entries)
            .map_err(|e| format!("invalid matrix literal: {e}"))
    }
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub matrix: MatrixConfig,
    pub probes: Vec<ProbeId>,
    #[serde(default)]
    pub refine: RefineOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
