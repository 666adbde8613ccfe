//! Generic sweep evaluation.
//!
//! Every table in the app is one of two shapes: a single parameter swept
//! against a formula, or two parameters crossed into a matrix. The models
//! all funnel through these two helpers so ordering and row/column semantics
//! are identical everywhere.

use serde::Serialize;

/// One row of a one-parameter sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SweepRow {
    pub parameter: f64,
    pub profit: f64,
}

/// One row of a two-parameter matrix. The column axis is shared across all
/// rows and supplied once by the caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatrixRow {
    pub parameter: f64,
    pub cells: Vec<f64>,
}

/// Evaluates `profit` over `values` in input order. Empty input yields an
/// empty sweep.
pub fn sweep_1d<T, F>(values: &[T], mut profit: F) -> Vec<SweepRow>
where
    T: Copy + Into<f64>,
    F: FnMut(T) -> f64,
{
    values
        .iter()
        .map(|&value| SweepRow {
            parameter: value.into(),
            profit: profit(value),
        })
        .collect()
}

/// Evaluates `profit` over the Cartesian product of the two axes, one
/// `MatrixRow` per row value. Either axis being empty yields an empty result
/// (or rows with no cells), never an error.
pub fn sweep_2d<R, C, F>(row_values: &[R], col_values: &[C], mut profit: F) -> Vec<MatrixRow>
where
    R: Copy + Into<f64>,
    C: Copy,
    F: FnMut(R, C) -> f64,
{
    row_values
        .iter()
        .map(|&row| MatrixRow {
            parameter: row.into(),
            cells: col_values.iter().map(|&col| profit(row, col)).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_1d_preserves_input_order() {
        let rows = sweep_1d(&[300_u32, 100, 200], |v| v as f64 * 2.0);
        let params: Vec<f64> = rows.iter().map(|r| r.parameter).collect();
        assert_eq!(params, vec![300.0, 100.0, 200.0]);
        assert_eq!(rows[0].profit, 600.0);
    }

    #[test]
    fn sweep_1d_of_nothing_is_nothing() {
        let rows = sweep_1d::<u32, _>(&[], |v| v as f64);
        assert!(rows.is_empty());
    }

    #[test]
    fn sweep_2d_dimensions_match_the_axes() {
        let rows = sweep_2d(&[1_u32, 2, 3], &[10.0_f64, 20.0], |r, c| r as f64 + c);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.cells.len() == 2));
        assert_eq!(rows[2].cells, vec![13.0, 23.0]);
    }

    #[test]
    fn sweep_2d_with_an_empty_axis_is_empty_not_an_error() {
        assert!(sweep_2d::<u32, f64, _>(&[], &[1.0], |_, _| 0.0).is_empty());
        let rows = sweep_2d(&[1_u32], &[] as &[f64], |_, _| 0.0);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].cells.is_empty());
    }

    #[test]
    fn sweeps_are_deterministic() {
        let f = |v: u32| v as f64 * 1.5 - 10.0;
        assert_eq!(sweep_1d(&[5_u32, 7], f), sweep_1d(&[5_u32, 7], f));
    }
}
