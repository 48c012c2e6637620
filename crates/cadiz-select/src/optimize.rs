//! Box-constrained heuristic weight optimizer.
//!
//! The unconstrained direction is the inverse-covariance solution
//! `w = sigma^-1 mu`, computed via a Cholesky solve (the matrix is
//! symmetric and positive definite once the ridge is applied). Negatives
//! are clamped, the vector is normalized, and `apply_bounds` iterates the
//! weights into the `[min, max]` box. An infeasible box (`k * min > 1` or
//! `k * max < 1`) still yields a finite best-effort vector.

use cadiz_traits::{CadizError, Result};
use ndarray::{Array1, Array2};

/// Maximum `apply_bounds` passes before accepting the current vector.
pub const BOUND_ITERATIONS: usize = 10;

/// Bound violation tolerance accepted after convergence.
pub const BOUND_TOLERANCE: f64 = 1e-9;

/// Solve for bounded portfolio weights.
///
/// On a failed factorization the diagonal is inflated by 10% of its own
/// magnitude and the solve retried once; a second failure is a fatal
/// numerical error.
///
/// # Errors
///
/// Returns [`CadizError::Numerical`] when the covariance matrix stays
/// singular after the retry.
pub fn solve(
    mu: &Array1<f64>,
    sigma: &Array2<f64>,
    min_weight: f64,
    max_weight: f64,
) -> Result<Array1<f64>> {
    let n = mu.len();
    if n == 0 {
        return Ok(Array1::zeros(0));
    }

    let mut weights = match solve_spd(sigma, mu) {
        Some(w) => w,
        None => {
            let mut boosted = sigma.clone();
            for i in 0..n {
                let bump = 0.1 * boosted[[i, i]].abs();
                boosted[[i, i]] += bump;
            }
            solve_spd(&boosted, mu).ok_or_else(|| {
                CadizError::Numerical(format!(
                    "covariance solve failed twice for {n} assets"
                ))
            })?
        }
    };

    weights.mapv_inplace(|w| w.max(0.0));
    normalize(&mut weights);
    apply_bounds(&mut weights, min_weight, max_weight);
    Ok(weights)
}

/// Scale the vector to sum to one when its sum is positive.
fn normalize(weights: &mut Array1<f64>) {
    let sum = weights.sum();
    if sum > 0.0 {
        *weights /= sum;
    }
}

/// Iterate weights into the `[min, max]` box while keeping the sum at one.
///
/// Each pass clamps to `[0, max]` and renormalizes, then raises every entry
/// below `min` to `min`, funding the total deficit proportionally from the
/// donors' headroom above `min`, and renormalizes again. Stops early once
/// every entry is inside the box.
fn apply_bounds(weights: &mut Array1<f64>, min_weight: f64, max_weight: f64) {
    for _ in 0..BOUND_ITERATIONS {
        weights.mapv_inplace(|w| w.clamp(0.0, max_weight));
        normalize(weights);

        let mut needy = vec![false; weights.len()];
        let mut deficit = 0.0;
        for (i, w) in weights.iter_mut().enumerate() {
            if *w < min_weight {
                needy[i] = true;
                deficit += min_weight - *w;
                *w = min_weight;
            }
        }

        if deficit > 0.0 {
            let donor_sum: f64 = weights
                .iter()
                .enumerate()
                .filter(|&(i, _)| !needy[i])
                .map(|(_, w)| w - min_weight)
                .sum();
            if donor_sum > 1e-9 {
                for (i, w) in weights.iter_mut().enumerate() {
                    if !needy[i] {
                        *w -= (*w - min_weight) / donor_sum * deficit;
                    }
                }
            }
        }
        normalize(weights);

        if in_bounds(weights, min_weight, max_weight) {
            break;
        }
    }
}

/// Whether every entry sits inside the box within tolerance.
fn in_bounds(weights: &Array1<f64>, min_weight: f64, max_weight: f64) -> bool {
    weights
        .iter()
        .all(|&w| w >= min_weight - BOUND_TOLERANCE && w <= max_weight + BOUND_TOLERANCE)
}

/// Cholesky factorization of a symmetric positive definite matrix.
///
/// Returns the lower-triangular factor, or `None` when a pivot is not
/// positive (the matrix is singular or indefinite).
fn cholesky(matrix: &Array2<f64>) -> Option<Array2<f64>> {
    let n = matrix.nrows();
    let mut lower = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..=i {
            let mut sum = matrix[[i, j]];
            for k in 0..j {
                sum -= lower[[i, k]] * lower[[j, k]];
            }
            if i == j {
                if sum <= 0.0 || !sum.is_finite() {
                    return None;
                }
                lower[[i, j]] = sum.sqrt();
            } else {
                lower[[i, j]] = sum / lower[[j, j]];
            }
        }
    }
    Some(lower)
}

/// Solve `matrix * x = rhs` for a symmetric positive definite matrix via
/// Cholesky forward/back substitution.
fn solve_spd(matrix: &Array2<f64>, rhs: &Array1<f64>) -> Option<Array1<f64>> {
    let lower = cholesky(matrix)?;
    let n = rhs.len();

    // Forward: L y = rhs
    let mut y = Array1::<f64>::zeros(n);
    for i in 0..n {
        let mut sum = rhs[i];
        for k in 0..i {
            sum -= lower[[i, k]] * y[k];
        }
        y[i] = sum / lower[[i, i]];
    }

    // Back: L^T x = y
    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let mut sum = y[i];
        for k in (i + 1)..n {
            sum -= lower[[k, i]] * x[k];
        }
        x[i] = sum / lower[[i, i]];
    }
    Some(x)
}
