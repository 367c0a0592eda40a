//! Pure normalization and sharpening primitives used by the refinement loop.
//!
//! All functions are shape-preserving and allocate a fresh matrix rather than
//! mutating their input. A row or column that sums to zero is handled by an
//! explicit [`ZeroSumPolicy`]; division by zero never reaches the output.

use crate::error::RefineError;
use nalgebra::DMatrix;
use serde::Deserialize;

/// Sums below this are treated as exactly zero when normalizing.
const SUM_EPS: f64 = 0.0;

/// What to do when a row or column of the matrix sums to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroSumPolicy {
    /// Leave an all-zero row/column as all zeros.
    #[default]
    PreserveZeros,
    /// Fail with an error naming the offending row/column index.
    Reject,
}

/// Divide each row by its own sum so rows sum to 1.
pub fn normalize_rows(
    m: &DMatrix<f64>,
    policy: ZeroSumPolicy,
) -> Result<DMatrix<f64>, RefineError> {
    let mut out = m.clone();
    for row in 0..m.nrows() {
        let sum: f64 = m.row(row).iter().sum();
        if sum > SUM_EPS {
            let inv = 1.0 / sum;
            for col in 0..m.ncols() {
                out[(row, col)] *= inv;
            }
        } else if policy == ZeroSumPolicy::Reject {
            return Err(RefineError::ZeroSumRow { row });
        }
    }
    Ok(out)
}

/// Divide each column by its own sum so columns sum to 1.
pub fn normalize_cols(
    m: &DMatrix<f64>,
    policy: ZeroSumPolicy,
) -> Result<DMatrix<f64>, RefineError> {
    let mut out = m.clone();
    for col in 0..m.ncols() {
        let sum: f64 = m.column(col).iter().sum();
        if sum > SUM_EPS {
            let inv = 1.0 / sum;
            for row in 0..m.nrows() {
                out[(row, col)] *= inv;
            }
        } else if policy == ZeroSumPolicy::Reject {
            return Err(RefineError::ZeroSumColumn { col });
        }
    }
    Ok(out)
}

/// Raise every entry to `alpha`, sharpening peaks toward a near-one-hot
/// selection per hypothesis as `alpha` grows. `0^alpha` stays 0 for positive
/// `alpha`.
pub fn sharpen_power(m: &DMatrix<f64>, alpha: f64) -> DMatrix<f64> {
    m.map(|x| if x == 0.0 { 0.0 } else { x.powf(alpha) })
}

/// Winner-take-all alternative to [`sharpen_power`]: keep each row's maxima,
/// zero everything else. Ties all survive.
pub fn threshold_row_max(m: &DMatrix<f64>) -> DMatrix<f64> {
    let mut out = m.clone();
    for row in 0..m.nrows() {
        let max = m.row(row).iter().cloned().fold(f64::MIN, f64::max);
        for col in 0..m.ncols() {
            if m[(row, col)] < max {
                out[(row, col)] = 0.0;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;

    const TOL: f64 = 1e-9;

    #[test]
    fn rows_sum_to_one() {
        let m = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 0.0, 4.0]);
        let out = normalize_rows(&m, ZeroSumPolicy::PreserveZeros).expect("no zero rows");
        for row in 0..out.nrows() {
            let sum: f64 = out.row(row).iter().sum();
            assert!((sum - 1.0).abs() < TOL, "row {} sum = {}", row, sum);
        }
    }

    #[test]
    fn cols_sum_to_one() {
        let m = DMatrix::from_row_slice(3, 2, &[1.0, 5.0, 2.0, 0.5, 3.0, 1.5]);
        let out = normalize_cols(&m, ZeroSumPolicy::PreserveZeros).expect("no zero cols");
        for col in 0..out.ncols() {
            let sum: f64 = out.column(col).iter().sum();
            assert!((sum - 1.0).abs() < TOL, "col {} sum = {}", col, sum);
        }
    }

    #[test]
    fn zero_row_passes_through_by_default() {
        let m = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, 3.0]);
        let out = normalize_rows(&m, ZeroSumPolicy::PreserveZeros).expect("preserve");
        assert_eq!(out[(0, 0)], 0.0);
        assert_eq!(out[(0, 1)], 0.0);
        assert!(out.iter().all(|x| x.is_finite()), "no NaN/Inf allowed");
        assert!((out[(1, 0)] - 0.25).abs() < TOL);
        assert!((out[(1, 1)] - 0.75).abs() < TOL);
    }

    #[test]
    fn zero_row_rejected_under_strict_policy() {
        let m = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, 3.0]);
        let err = normalize_rows(&m, ZeroSumPolicy::Reject).unwrap_err();
        assert!(matches!(err, crate::RefineError::ZeroSumRow { row: 0 }));
    }

    #[test]
    fn zero_col_rejected_under_strict_policy() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 3.0, 0.0]);
        let err = normalize_cols(&m, ZeroSumPolicy::Reject).unwrap_err();
        assert!(matches!(err, crate::RefineError::ZeroSumColumn { col: 1 }));
    }

    #[test]
    fn power_sharpening_keeps_zeros() {
        let m = DMatrix::from_row_slice(1, 3, &[0.0, 0.5, 2.0]);
        let out = sharpen_power(&m, 20.0);
        assert_eq!(out[(0, 0)], 0.0);
        assert!(out[(0, 1)] > 0.0);
        assert!(out[(0, 2)] > out[(0, 1)]);
    }

    #[test]
    fn power_one_is_identity() {
        let m = DMatrix::from_row_slice(2, 2, &[0.5, 0.25, 0.5, 0.75]);
        let out = sharpen_power(&m, 1.0);
        assert_eq!(out, m);
    }

    #[test]
    fn sharpening_increases_max_share() {
        // A row with two distinct positive values: raising the power must
        // strictly grow the max entry's share of the row sum.
        let m = DMatrix::from_row_slice(1, 2, &[0.4, 0.6]);
        let share = |alpha: f64| {
            let s = sharpen_power(&m, alpha);
            let n = normalize_rows(&s, ZeroSumPolicy::PreserveZeros).expect("positive row");
            n[(0, 1)]
        };
        let base = share(1.0);
        let sharp = share(4.0);
        let sharper = share(20.0);
        assert!(sharp > base, "{} !> {}", sharp, base);
        assert!(sharper > sharp, "{} !> {}", sharper, sharp);
    }

    #[test]
    fn row_max_threshold_keeps_only_maxima() {
        let m = DMatrix::from_row_slice(2, 3, &[1.0, 3.0, 2.0, 5.0, 5.0, 0.0]);
        let out = threshold_row_max(&m);
        assert_eq!(out.row(0).iter().cloned().collect::<Vec<_>>(), [0.0, 3.0, 0.0]);
        // ties all survive
        assert_eq!(out.row(1).iter().cloned().collect::<Vec<_>>(), [5.0, 5.0, 0.0]);
    }
}
