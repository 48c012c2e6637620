//! Greedy cardinality pruning with re-optimization.
//!
//! True cardinality-constrained mean-variance selection is a mixed-integer
//! program; this module uses the standard greedy heuristic instead: drop
//! the smallest weight, re-solve on the survivors, repeat.

use cadiz_traits::Result;
use ndarray::{Array1, Array2};

use crate::optimize;

/// Reduce an optimized weight vector to `target` names.
///
/// While more than `target` indices remain active, the active index with
/// the smallest current weight is removed (ties break on the lowest index,
/// the first one encountered), the mean vector and covariance are
/// restricted to the survivors (keeping the already-ridged diagonal), and
/// the optimizer runs again on the subset.
///
/// Returns `(index, weight)` pairs for the surviving indices, ascending by
/// index. Indices refer to the full-width input vector.
///
/// # Errors
///
/// Propagates the optimizer's numerical error if a restricted covariance
/// matrix cannot be solved.
pub fn reduce(
    weights: &Array1<f64>,
    mu: &Array1<f64>,
    sigma: &Array2<f64>,
    target: usize,
    min_weight: f64,
    max_weight: f64,
) -> Result<Vec<(usize, f64)>> {
    let mut active: Vec<usize> = (0..weights.len()).collect();
    let mut current = weights.clone();

    while active.len() > target {
        let mut drop_pos = 0;
        for (pos, &idx) in active.iter().enumerate() {
            if current[idx] < current[active[drop_pos]] {
                drop_pos = pos;
            }
        }
        active.remove(drop_pos);

        let mu_sub = Array1::from_iter(active.iter().map(|&i| mu[i]));
        let mut sigma_sub = Array2::<f64>::zeros((active.len(), active.len()));
        for (a, &i) in active.iter().enumerate() {
            for (b, &j) in active.iter().enumerate() {
                sigma_sub[[a, b]] = sigma[[i, j]];
            }
        }

        let resolved = optimize::solve(&mu_sub, &sigma_sub, min_weight, max_weight)?;

        current.fill(0.0);
        for (pos, &idx) in active.iter().enumerate() {
            current[idx] = resolved[pos];
        }
    }

    Ok(active.iter().map(|&idx| (idx, current[idx])).collect())
}
