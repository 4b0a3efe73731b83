// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::error::{EntropyError, Result};

/// Coarse-grain a series by averaging consecutive, non-overlapping blocks.
///
/// Element `j` of the result is the mean of `series[j·scale..(j+1)·scale]`.
/// Only full blocks are kept, so the result has `floor(n/scale)` elements and a
/// trailing remainder is dropped. For `scale > n` the result is empty; for
/// `scale = 1` it is a copy of the input.
///
/// # Errors
///
/// `InvalidParameter` if `scale < 1`.
pub fn granulate(series: &[f64], scale: usize) -> Result<Array1<f64>> {
    coarse_grain(series, scale).map(Array1::from)
}

/// Coarse-grain `series[offset..]` at `scale`.
///
/// This is the phase-shifted granulation used by composite multiscale entropy.
/// An offset at or past the end yields an empty series.
pub fn granulate_from(series: &[f64], scale: usize, offset: usize) -> Result<Array1<f64>> {
    coarse_grain_from(series, scale, offset).map(Array1::from)
}

pub(crate) fn coarse_grain(series: &[f64], scale: usize) -> Result<Vec<f64>> {
    if scale < 1 {
        return Err(EntropyError::invalid("scale should be greater or equal to 1"));
    }
    if scale == 1 {
        return Ok(series.to_vec());
    }
    let width = scale as f64;
    Ok(series
        .chunks_exact(scale)
        .map(|block| block.iter().sum::<f64>() / width)
        .collect())
}

pub(crate) fn coarse_grain_from(series: &[f64], scale: usize, offset: usize) -> Result<Vec<f64>> {
    let start = offset.min(series.len());
    coarse_grain(&series[start..], scale)
}
