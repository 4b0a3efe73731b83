// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-function interface to the estimators.
//!
//! Each function builds the matching estimator and returns its value, for
//! callers who do not need local values or the intermediate counts.

use ndarray::{Array1, Array2};
use std::hash::Hash;

use crate::error::Result;
use crate::estimators::entropy::Entropy;
use crate::estimators::params::PermutationParams;
use crate::estimators::traits::{GlobalValue, ProfileValues};

pub use crate::estimators::utils::embedding::pattern_space;
pub use crate::estimators::utils::granulate::granulate;
pub use crate::estimators::utils::stats::standardize;

/// Shannon entropy in bits of a symbol sequence.
pub fn shannon_entropy<T: Eq + Hash + Clone>(symbols: &[T]) -> Result<f64> {
    Ok(Entropy::new_shannon(symbols.to_vec())?.global_value())
}

/// Sample entropy for every template length `1..=sample_length`.
///
/// `tolerance = None` uses `0.1 · std(series)`.
pub fn sample_entropy(
    series: &[f64],
    sample_length: usize,
    tolerance: Option<f64>,
) -> Result<Array1<f64>> {
    let se = Entropy::new_sample(Array1::from(series.to_vec()), sample_length, tolerance.into())?;
    Ok(se.values())
}

/// Multiscale entropy for scales `1..=maxscale` (default: the series length).
pub fn multiscale_entropy(
    series: &[f64],
    sample_length: usize,
    tolerance: Option<f64>,
    maxscale: Option<usize>,
) -> Result<Array1<f64>> {
    let mse = Entropy::new_multiscale(
        Array1::from(series.to_vec()),
        sample_length,
        tolerance.into(),
        maxscale,
    )?;
    Ok(mse.values())
}

/// Composite multiscale entropy for scales `1..=scale`.
///
/// `tolerance = None` uses `0.1 · std(series)`. For the `0.15 · std` convention
/// of Wu et al. pass `Tolerance::StdFactor(WU_TOLERANCE_FACTOR)` to
/// [`Entropy::new_composite_multiscale`].
pub fn composite_multiscale_entropy(
    series: &[f64],
    sample_length: usize,
    scale: usize,
    tolerance: Option<f64>,
) -> Result<Array1<f64>> {
    let cmse = Entropy::new_composite_multiscale(
        Array1::from(series.to_vec()),
        sample_length,
        scale,
        tolerance.into(),
    )?;
    Ok(cmse.values())
}

/// Permutation entropy in bits.
pub fn permutation_entropy(series: &[f64], params: PermutationParams) -> Result<f64> {
    Ok(Entropy::new_permutation(Array1::from(series.to_vec()), params)?.global_value())
}

/// Weighted permutation entropy in bits.
pub fn weighted_permutation_entropy(series: &[f64], params: PermutationParams) -> Result<f64> {
    Ok(Entropy::new_weighted_permutation(Array1::from(series.to_vec()), params)?.global_value())
}

/// Multiscale permutation entropy for scales `1..=scale`.
pub fn multiscale_permutation_entropy(
    series: &[f64],
    order: usize,
    delay: usize,
    scale: usize,
) -> Result<Array1<f64>> {
    let mspe = Entropy::new_multiscale_permutation(
        Array1::from(series.to_vec()),
        PermutationParams::new(order, delay),
        scale,
    )?;
    Ok(mspe.values())
}

/// The pattern space of `series`; alias of [`pattern_space`] under the name of
/// the utility it mirrors.
pub fn util_pattern_space(series: &[f64], lag: usize, dim: usize) -> Result<Array2<f64>> {
    pattern_space(series, lag, dim)
}

/// Coarse-grained copy of `series`; alias of [`granulate`].
pub fn util_granulate_time_series(series: &[f64], scale: usize) -> Result<Array1<f64>> {
    granulate(series, scale)
}
