// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter types shared by the estimators.
//!
//! Every parameter is caller-supplied. Defaults are conveniences and are
//! resolved once per top-level call, never per internal sub-call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{EntropyError, Result};
use crate::estimators::utils::stats::std_dev;

/// Default tolerance as a multiple of the series' standard deviation.
pub const DEFAULT_TOLERANCE_FACTOR: f64 = 0.1;

/// Tolerance factor used by Wu et al. (2013) for composite multiscale entropy.
pub const WU_TOLERANCE_FACTOR: f64 = 0.15;

/// Largest permutation order accepted by the ordinal estimators.
///
/// The positional-weight motif hash `Σ perm[k]·order^k` must fit into a `u64`.
pub const MAX_ORDER: usize = 16;

/// Matching tolerance for sample-entropy based estimators.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tolerance {
    /// Fixed absolute tolerance `r`.
    Absolute(f64),
    /// `factor · std(series)`, using the population standard deviation.
    StdFactor(f64),
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::StdFactor(DEFAULT_TOLERANCE_FACTOR)
    }
}

impl From<f64> for Tolerance {
    fn from(r: f64) -> Self {
        Tolerance::Absolute(r)
    }
}

impl From<Option<f64>> for Tolerance {
    fn from(r: Option<f64>) -> Self {
        r.map_or_else(Tolerance::default, Tolerance::Absolute)
    }
}

impl Tolerance {
    /// Resolve to an absolute tolerance against `series`.
    ///
    /// Multiscale estimators call this on the original series so the tolerance
    /// stays fixed across scales.
    pub fn resolve(&self, series: &[f64]) -> Result<f64> {
        match *self {
            Tolerance::Absolute(r) => {
                if !r.is_finite() || r < 0.0 {
                    return Err(EntropyError::invalid(format!(
                        "tolerance must be a finite non-negative number, got {r}"
                    )));
                }
                Ok(r)
            }
            Tolerance::StdFactor(factor) => {
                if !factor.is_finite() || factor < 0.0 {
                    return Err(EntropyError::invalid(format!(
                        "tolerance factor must be a finite non-negative number, got {factor}"
                    )));
                }
                if series.is_empty() {
                    return Err(EntropyError::EmptyInput);
                }
                Ok(factor * std_dev(series))
            }
        }
    }
}

/// Encoding used to turn an ordinal pattern into an integer key.
///
/// Both encodings are injective over permutations of a fixed order, so the
/// resulting entropies are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MotifEncoding {
    /// `Σ perm[k] · order^k`
    #[default]
    PositionalWeight,
    /// Factoradic rank of the permutation.
    Lehmer,
}

/// Parameters of the permutation entropy family.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PermutationParams {
    /// Embedding dimension (number of samples per ordinal pattern).
    pub order: usize,
    /// Spacing between the samples of one pattern.
    pub delay: usize,
    /// Divide by `log2(order!)` to bound the result in `[0, 1]`.
    pub normalize: bool,
    pub encoding: MotifEncoding,
}

impl Default for PermutationParams {
    fn default() -> Self {
        Self {
            order: 3,
            delay: 1,
            normalize: false,
            encoding: MotifEncoding::default(),
        }
    }
}

impl PermutationParams {
    pub fn new(order: usize, delay: usize) -> Self {
        Self {
            order,
            delay,
            ..Self::default()
        }
    }

    pub fn normalized(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_encoding(mut self, encoding: MotifEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Check order and delay. Series-length checks happen at embedding time.
    pub fn validate(&self) -> Result<()> {
        if self.order < 1 {
            return Err(EntropyError::invalid("order should be greater or equal to 1"));
        }
        if self.delay < 1 {
            return Err(EntropyError::invalid("delay should be greater or equal to 1"));
        }
        if self.order > MAX_ORDER {
            return Err(EntropyError::invalid(format!(
                "order {} exceeds the supported maximum of {MAX_ORDER}",
                self.order
            )));
        }
        Ok(())
    }

    /// Maximum attainable entropy in bits, `log2(order!)`.
    pub fn max_entropy(&self) -> f64 {
        (2..=self.order).map(|k| (k as f64).log2()).sum()
    }
}
