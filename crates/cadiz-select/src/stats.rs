//! Return statistics: Sharpe ratio, mean vector, ridge covariance.

use ndarray::{Array1, Array2, Axis};

/// Months per year, used to annualize the monthly Sharpe ratio.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Minimum present monthly observations for a Sharpe ratio.
pub const MIN_SHARPE_OBS: usize = 12;

/// Annualized Sharpe ratio over a ragged monthly return series.
///
/// Absent months are skipped. The annual risk-free rate is de-compounded to
/// a monthly rate, excess returns use the sample standard deviation
/// (divisor `max(1, n - 1)`), and the ratio is scaled by sqrt(12).
///
/// Returns NaN when fewer than [`MIN_SHARPE_OBS`] observations are present
/// or the standard deviation is not positive.
pub fn sharpe_ratio(returns: &[Option<f64>], annual_risk_free: f64) -> f64 {
    let present: Vec<f64> = returns.iter().flatten().copied().collect();
    if present.len() < MIN_SHARPE_OBS {
        return f64::NAN;
    }

    let monthly_rf = (1.0 + annual_risk_free).powf(1.0 / MONTHS_PER_YEAR) - 1.0;
    let excess: Vec<f64> = present.iter().map(|r| r - monthly_rf).collect();

    let n = excess.len();
    let mean = excess.iter().sum::<f64>() / n as f64;
    let variance =
        excess.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / (n - 1).max(1) as f64;
    let std = variance.sqrt();

    if std <= 0.0 {
        return f64::NAN;
    }
    mean / std * MONTHS_PER_YEAR.sqrt()
}

/// Column means of the return panel.
pub fn mean_vector(matrix: &Array2<f64>) -> Array1<f64> {
    matrix
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(matrix.ncols()))
}

/// Sample covariance of the (demeaned) panel with a ridge on the diagonal.
///
/// The raw estimate is `R^T R / max(1, T - 1)`. The ridge added to every
/// diagonal entry is `max(ridge, 0.05 * |median diagonal|)`, with the
/// median taken as the upper-middle element of the sorted diagonal. This
/// keeps the matrix invertible when T < N or columns are collinear.
pub fn covariance(matrix: &Array2<f64>, ridge: f64) -> Array2<f64> {
    let t = matrix.nrows();
    let denom = t.saturating_sub(1).max(1) as f64;
    let mut cov = matrix.t().dot(matrix);
    cov /= denom;

    let mut diag: Vec<f64> = cov.diag().to_vec();
    diag.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = if diag.is_empty() {
        0.0
    } else {
        diag[diag.len() / 2]
    };
    let lambda = ridge.max(0.05 * median.abs());

    for i in 0..cov.nrows() {
        cov[[i, i]] += lambda;
    }
    cov
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_sharpe_requires_twelve_observations() {
        let returns: Vec<Option<f64>> = vec![Some(0.01); 11];
        assert!(sharpe_ratio(&returns, 0.04).is_nan());

        let returns: Vec<Option<f64>> = vec![Some(0.01), Some(0.02)]
            .into_iter()
            .cycle()
            .take(12)
            .collect();
        assert!(sharpe_ratio(&returns, 0.04).is_finite());
    }

    #[test]
    fn test_sharpe_skips_absent_months() {
        // 12 present values interleaved with gaps still qualify.
        let mut returns = Vec::new();
        for i in 0..12 {
            returns.push(Some(if i % 2 == 0 { 0.02 } else { -0.01 }));
            returns.push(None);
        }
        assert!(sharpe_ratio(&returns, 0.04).is_finite());
    }

    #[test]
    fn test_sharpe_zero_std_is_nan() {
        let returns: Vec<Option<f64>> = vec![Some(0.01); 24];
        assert!(sharpe_ratio(&returns, 0.04).is_nan());
    }

    #[test]
    fn test_sharpe_known_value() {
        // Alternating +2% / 0% with zero risk-free: mean 1%, sample std 1.0219%
        // over 24 observations (variance = 24 * 0.0001 / 23).
        let returns: Vec<Option<f64>> = (0..24)
            .map(|i| Some(if i % 2 == 0 { 0.02 } else { 0.0 }))
            .collect();
        let sharpe = sharpe_ratio(&returns, 0.0);
        let std = (24.0 * 0.0001_f64 / 23.0).sqrt();
        assert_abs_diff_eq!(sharpe, 0.01 / std * 12f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_sharpe_sign_follows_excess() {
        let losing: Vec<Option<f64>> = (0..24)
            .map(|i| Some(if i % 2 == 0 { -0.03 } else { 0.01 }))
            .collect();
        assert!(sharpe_ratio(&losing, 0.04) < 0.0);
    }

    #[test]
    fn test_mean_vector() {
        let matrix = array![[1.0, 2.0], [3.0, 6.0]];
        let mu = mean_vector(&matrix);
        assert_abs_diff_eq!(mu[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mu[1], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_vector_empty_rows() {
        let matrix = Array2::<f64>::zeros((0, 3));
        let mu = mean_vector(&matrix);
        assert_eq!(mu.len(), 3);
        assert!(mu.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_covariance_denominator() {
        // Two demeaned columns over three periods.
        let matrix = array![[1.0, -1.0], [0.0, 0.0], [-1.0, 1.0]];
        let cov = covariance(&matrix, 0.0);

        // Raw diagonal is 2/2 = 1.0; off-diagonal -1.0. With ridge = 0,
        // lambda = 0.05 * |median| = 0.05.
        assert_abs_diff_eq!(cov[[0, 0]], 1.05, epsilon = 1e-12);
        assert_abs_diff_eq!(cov[[0, 1]], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cov[[1, 1]], 1.05, epsilon = 1e-12);
    }

    #[test]
    fn test_covariance_ridge_floor_wins() {
        let matrix = array![[0.01, 0.0], [-0.01, 0.0]];
        let cov = covariance(&matrix, 0.1);

        // Median |diagonal| is tiny, so the configured floor dominates.
        assert_abs_diff_eq!(cov[[1, 1]], 0.1, epsilon = 1e-12);
        assert!(cov[[0, 0]] > 0.1);
    }

    #[test]
    fn test_covariance_median_is_upper_middle() {
        // Diagonals 0.0002, 0.0008, 0.0018, 0.0032: sorted index 2 holds
        // 0.0018, so lambda = max(0, 0.05 * 0.0018) = 9e-5.
        let matrix = array![
            [0.01, 0.02, 0.03, 0.04],
            [-0.01, -0.02, -0.03, -0.04],
        ];
        let cov = covariance(&matrix, 0.0);
        assert_abs_diff_eq!(cov[[0, 0]], 0.0002 + 9e-5, epsilon = 1e-12);
    }

    #[test]
    fn test_covariance_single_row_denominator() {
        // T = 1 uses divisor max(1, T - 1) = 1 instead of zero.
        let matrix = array![[0.1, 0.2]];
        let cov = covariance(&matrix, 0.0);
        assert!(cov[[0, 0]].is_finite());
        assert!(cov[[0, 0]] > 0.0);
    }
}
