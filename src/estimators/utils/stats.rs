// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::error::{EntropyError, Result};

/// Population standard deviation (`ddof = 0`). `NaN` for an empty slice.
pub fn std_dev(series: &[f64]) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    ArrayView1::from(series).std(0.0)
}

/// Population variance (`ddof = 0`). `NaN` for an empty slice.
pub fn variance(series: &[f64]) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    ArrayView1::from(series).var(0.0)
}

/// Standardize a series to zero mean and unit (population) standard deviation.
///
/// Fails with `DegenerateInput` for a constant series instead of producing
/// `NaN`/`inf` values.
pub fn standardize(series: &[f64]) -> Result<Array1<f64>> {
    let view = ArrayView1::from(series);
    let mean = view.mean().ok_or(EntropyError::EmptyInput)?;
    let sd = view.std(0.0);
    if sd == 0.0 {
        return Err(EntropyError::degenerate(
            "standard deviation is zero, cannot standardize",
        ));
    }
    Ok(view.mapv(|x| (x - mean) / sd))
}
