// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use tracing::debug;

use crate::error::Result;
use crate::estimators::approaches::discrete::shannon::ShannonEntropy;
use crate::estimators::approaches::ordinal::ordinal_utils::symbolize_series;
use crate::estimators::params::PermutationParams;
use crate::estimators::traits::{GlobalValue, LocalValues, OptionalLocalValues};

/// Permutation entropy (Bandt & Pompe), in bits.
///
/// The series is embedded with `order` samples spaced by `delay`, each window
/// is reduced to its rank permutation, and the Shannon entropy of the
/// permutation frequencies is returned. Only the rank order of the samples
/// matters, so the value is invariant under strictly increasing transforms of
/// the input.
///
/// With `normalize` the value is divided by `log2(order!)` and lies in `[0, 1]`.
/// For `order = 1` there is a single trivial pattern and the entropy is 0.
///
/// Local values are `-log2 p(motif_t)` per window, scaled the same way.
pub struct PermutationEntropy {
    inner: ShannonEntropy<u64>,
    codes: Array1<u64>,
    pub params: PermutationParams,
}

impl PermutationEntropy {
    pub fn new(data: Array1<f64>, params: PermutationParams) -> Result<Self> {
        let series = data.to_vec();
        let symbolized = symbolize_series(&series, &params)?;
        let codes = symbolized.codes;
        let inner = ShannonEntropy::new(codes.to_vec())?;
        debug!(
            n = series.len(),
            order = params.order,
            delay = params.delay,
            windows = codes.len(),
            motifs = inner.num_symbols(),
            "permutation entropy"
        );
        Ok(Self {
            inner,
            codes,
            params,
        })
    }

    /// Motif code of each embedded window.
    pub fn motif_codes(&self) -> &Array1<u64> {
        &self.codes
    }

    /// Number of distinct motifs observed.
    pub fn num_motifs(&self) -> usize {
        self.inner.num_symbols()
    }

    fn scale(&self) -> f64 {
        normalization(&self.params)
    }
}

/// Divisor applied to an ordinal entropy: `log2(order!)` when normalising,
/// otherwise 1. Stays 1 for `order = 1` so no `0/0` arises.
pub(crate) fn normalization(params: &PermutationParams) -> f64 {
    let max_entropy = params.max_entropy();
    if params.normalize && max_entropy > 0.0 {
        max_entropy
    } else {
        1.0
    }
}

impl GlobalValue for PermutationEntropy {
    fn global_value(&self) -> f64 {
        self.inner.global_value() / self.scale()
    }
}

impl LocalValues for PermutationEntropy {
    fn local_values(&self) -> Array1<f64> {
        self.inner.local_values() / self.scale()
    }
}

impl OptionalLocalValues for PermutationEntropy {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}
