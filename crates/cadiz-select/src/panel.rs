//! Coverage-tolerant assembly of the monthly return panel.
//!
//! Ragged per-symbol return series become a dense T x N matrix in three
//! passes: drop thin columns, drop thin rows, then demean each column and
//! zero-impute the holes. Demeaning happens before imputation, so a zero
//! stands in for the column mean rather than for a literal 0% return.

use ndarray::Array2;

/// Minimum fraction of present values for a column (symbol) to survive.
pub const COLUMN_COVERAGE_MIN: f64 = 0.85;

/// Minimum fraction of present values for a row (month) to survive, measured
/// over the surviving columns.
pub const ROW_COVERAGE_MIN: f64 = 0.80;

/// Minimum number of surviving rows for the panel to be usable.
pub const MIN_PANEL_ROWS: usize = 24;

/// A dense, demeaned monthly return panel.
#[derive(Debug, Clone)]
pub struct ReturnPanel {
    /// Demeaned returns, shape (months kept, symbols kept).
    pub matrix: Array2<f64>,
    /// Indices of surviving rows in the pre-filter month grid.
    pub kept_rows: Vec<usize>,
    /// Indices of surviving columns in the pre-filter symbol list.
    pub kept_cols: Vec<usize>,
    /// Pre-demean mean of each surviving column over its present values.
    pub col_means: Vec<f64>,
}

impl ReturnPanel {
    /// Number of surviving months.
    pub fn n_rows(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of surviving symbols.
    pub fn n_cols(&self) -> usize {
        self.matrix.ncols()
    }
}

/// Assemble the return panel from ragged per-symbol series.
///
/// `series` holds one column per symbol, all aligned to the same month-end
/// grid (equal lengths, missing months as `None`).
///
/// The filters run in order: columns below [`COLUMN_COVERAGE_MIN`] are
/// dropped first, then rows below [`ROW_COVERAGE_MIN`] measured over the
/// surviving columns. Each surviving column is demeaned over its present
/// values on the surviving rows; absent entries become 0 after demeaning.
pub fn assemble(series: &[Vec<Option<f64>>]) -> ReturnPanel {
    let n_rows_full = series.first().map_or(0, Vec::len);

    // Column filter
    let kept_cols: Vec<usize> = series
        .iter()
        .enumerate()
        .filter(|(_, col)| {
            n_rows_full > 0
                && col.iter().flatten().count() as f64 / n_rows_full as f64 >= COLUMN_COVERAGE_MIN
        })
        .map(|(j, _)| j)
        .collect();

    // Row filter over the surviving columns
    let kept_rows: Vec<usize> = (0..n_rows_full)
        .filter(|&i| {
            !kept_cols.is_empty()
                && kept_cols
                    .iter()
                    .filter(|&&j| series[j][i].is_some())
                    .count() as f64
                    / kept_cols.len() as f64
                    >= ROW_COVERAGE_MIN
        })
        .collect();

    // Demean present values per column, impute zero for the rest
    let mut matrix = Array2::<f64>::zeros((kept_rows.len(), kept_cols.len()));
    let mut col_means = Vec::with_capacity(kept_cols.len());
    for (out_j, &j) in kept_cols.iter().enumerate() {
        let mut sum = 0.0;
        let mut count = 0usize;
        for &i in &kept_rows {
            if let Some(value) = series[j][i] {
                sum += value;
                count += 1;
            }
        }
        let mean = if count > 0 { sum / count as f64 } else { 0.0 };
        col_means.push(mean);

        for (out_i, &i) in kept_rows.iter().enumerate() {
            if let Some(value) = series[j][i] {
                matrix[[out_i, out_j]] = value - mean;
            }
        }
    }

    ReturnPanel {
        matrix,
        kept_rows,
        kept_cols,
        col_means,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_empty_input() {
        let panel = assemble(&[]);
        assert_eq!(panel.n_rows(), 0);
        assert_eq!(panel.n_cols(), 0);
        assert!(panel.kept_rows.is_empty());
        assert!(panel.kept_cols.is_empty());
    }

    #[test]
    fn test_full_coverage_demeans() {
        let series = vec![
            vec![Some(0.01), Some(0.03), Some(0.02)],
            vec![Some(-0.02), Some(0.00), Some(0.04)],
        ];
        let panel = assemble(&series);

        assert_eq!(panel.kept_cols, vec![0, 1]);
        assert_eq!(panel.kept_rows, vec![0, 1, 2]);
        assert_abs_diff_eq!(panel.col_means[0], 0.02, epsilon = 1e-12);

        // Each column sums to zero after demeaning.
        for j in 0..panel.n_cols() {
            let col_sum: f64 = panel.matrix.column(j).sum();
            assert_abs_diff_eq!(col_sum, 0.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(panel.matrix[[0, 0]], -0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_thin_column_dropped() {
        // Second symbol has 50% coverage, well under the 85% floor.
        let series = vec![
            vec![Some(0.01), Some(0.02), Some(0.03), Some(0.04)],
            vec![Some(0.01), None, Some(0.03), None],
        ];
        let panel = assemble(&series);

        assert_eq!(panel.kept_cols, vec![0]);
        assert_eq!(panel.n_cols(), 1);
        assert_eq!(panel.n_rows(), 4);
    }

    #[test]
    fn test_thin_row_dropped() {
        // Seven months, four symbols. Columns 0..=2 miss only month 1
        // (6/7 coverage, above the column floor), column 3 is complete.
        // Month 1 then has 1/4 = 25% coverage and falls below the row floor.
        let column = |gap: bool| {
            let mut col: Vec<Option<f64>> = vec![Some(0.01); 7];
            if gap {
                col[1] = None;
            }
            col
        };
        let series = vec![column(true), column(true), column(true), column(false)];
        let panel = assemble(&series);

        assert_eq!(panel.kept_cols, vec![0, 1, 2, 3]);
        assert_eq!(panel.kept_rows, vec![0, 2, 3, 4, 5, 6]);
        assert_eq!(panel.n_rows(), 6);
    }

    #[test]
    fn test_hole_imputed_to_zero_after_demean() {
        // Five symbols, seven months. Column 0 misses month 3 (6/7 > 85%);
        // month 3 still has 4/5 = 80% coverage and survives the row filter,
        // so the hole reaches the imputation step.
        let col0: Vec<Option<f64>> = vec![
            Some(0.01),
            Some(0.03),
            Some(0.02),
            None,
            Some(0.02),
            Some(0.01),
            Some(0.03),
        ];
        let mut series = vec![col0];
        for _ in 0..4 {
            series.push(vec![Some(0.01); 7]);
        }

        let panel = assemble(&series);
        assert_eq!(panel.kept_cols, vec![0, 1, 2, 3, 4]);
        assert_eq!(panel.n_rows(), 7);

        // The hole is imputed to zero after demeaning, which is equivalent
        // to substituting the pre-demean column mean.
        assert_abs_diff_eq!(panel.col_means[0], 0.02, epsilon = 1e-12);
        assert_abs_diff_eq!(panel.matrix[[3, 0]], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(panel.matrix[[0, 0]], -0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_kept_indices_reference_prefilter_universe() {
        let series = vec![
            vec![Some(0.01), None],
            vec![Some(0.02), Some(0.01)],
            vec![None, None],
        ];
        let panel = assemble(&series);

        // Column 0 has 50%, column 2 has 0%; only column 1 survives.
        assert_eq!(panel.kept_cols, vec![1]);
        assert_eq!(panel.kept_rows, vec![0, 1]);
    }
}
