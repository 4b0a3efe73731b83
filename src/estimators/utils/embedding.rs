// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array2;

use crate::error::{EntropyError, Result};

/// Create the pattern space of `series` for a given lag and dimension.
///
/// Row `i` is `[x[i], x[i+lag], ..., x[i+(dim-1)·lag]]`, so the result has shape
/// `(n - lag·(dim-1), dim)`.
///
/// # Errors
///
/// - `InvalidParameter` if `lag < 1` or `dim < 1`
/// - `SizeExceeded` if `lag·dim > n`
pub fn pattern_space(series: &[f64], lag: usize, dim: usize) -> Result<Array2<f64>> {
    if lag < 1 {
        return Err(EntropyError::invalid("lag should be greater or equal to 1"));
    }
    if dim < 1 {
        return Err(EntropyError::invalid("dim should be greater or equal to 1"));
    }
    let n = series.len();
    let required = lag.saturating_mul(dim);
    if required > n {
        return Err(EntropyError::SizeExceeded {
            required,
            available: n,
        });
    }

    let rows = n - lag * (dim - 1);
    Ok(Array2::from_shape_fn((rows, dim), |(i, j)| series[i + j * lag]))
}

/// Time-delay embedding used by the ordinal estimators.
///
/// Same table as [`pattern_space`] with `lag = delay` and `dim = order`, and the
/// same validity rules (`order·delay ≤ n`).
pub fn embed(series: &[f64], order: usize, delay: usize) -> Result<Array2<f64>> {
    if order < 1 {
        return Err(EntropyError::invalid("order should be greater or equal to 1"));
    }
    if delay < 1 {
        return Err(EntropyError::invalid("delay should be greater or equal to 1"));
    }
    pattern_space(series, delay, order)
}
