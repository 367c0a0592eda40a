//! Iterative hypothesis-probe matrix refinement.
//!
//! The module groups the refinement machinery into focused components:
//!
//! - [`options`]: loop parameters (power, budget, sharpening, convergence).
//! - [`update`]: the narrow capability through which the external model
//!   re-weights the matrix each iteration.
//! - [`driver`]: the [`Refiner`] running the four-stage transform and
//!   convergence check.
//!
//! A typical caller builds a [`Refiner`] once and feeds it a validated
//! [`crate::HypoProbeMatrix`] together with the ordered probe-location list
//! and a [`ProbeUpdate`] implementation wrapping the model's posterior state.

pub mod driver;
pub mod options;
pub mod update;

pub use driver::{RefineResult, Refiner};
pub use options::{ConvergenceMode, RefineOptions, Sharpening};
pub use update::{IdentityUpdate, ProbeUpdate};
