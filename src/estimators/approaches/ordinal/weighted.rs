// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use std::collections::HashMap;
use tracing::debug;

use crate::error::{EntropyError, Result};
use crate::estimators::approaches::discrete::discrete_utils::entropy_from_masses;
use crate::estimators::approaches::ordinal::ordinal_utils::symbolize_series;
use crate::estimators::approaches::ordinal::permutation::normalization;
use crate::estimators::params::PermutationParams;
use crate::estimators::traits::{GlobalValue, OptionalLocalValues};

/// Weighted permutation entropy (Fadlallah et al.), in bits.
///
/// Like [`PermutationEntropy`](super::permutation::PermutationEntropy), but each
/// window contributes the population variance of its samples instead of a unit
/// count. A window with zero variance (all samples tied) carries no weight and
/// so drops out of the distribution.
pub struct WeightedPermutationEntropy {
    /// Accumulated weight per motif code, sorted by code
    weights: Vec<(u64, f64)>,
    pub params: PermutationParams,
}

impl WeightedPermutationEntropy {
    /// # Errors
    ///
    /// `DegenerateInput` when every window has zero variance or a sample is
    /// NaN, as the weights cannot be normalised.
    pub fn new(data: Array1<f64>, params: PermutationParams) -> Result<Self> {
        let series = data.to_vec();
        let symbolized = symbolize_series(&series, &params)?;

        let mut acc: HashMap<u64, f64> = HashMap::new();
        for (row, &code) in symbolized.embedding.rows().into_iter().zip(symbolized.codes.iter()) {
            *acc.entry(code).or_insert(0.0) += row.var(0.0);
        }
        let mut weights: Vec<(u64, f64)> = acc.into_iter().collect();
        weights.sort_unstable_by_key(|&(code, _)| code);

        let total: f64 = weights.iter().map(|&(_, w)| w).sum();
        if total.is_nan() || total <= 0.0 {
            return Err(EntropyError::degenerate(format!(
                "total window variance must be positive, got {total}"
            )));
        }
        debug!(
            n = series.len(),
            order = params.order,
            delay = params.delay,
            windows = symbolized.codes.len(),
            total_weight = total,
            "weighted permutation entropy"
        );
        Ok(Self { weights, params })
    }

    /// Normalised weight of each motif with non-zero weight, sorted by code.
    pub fn motif_distribution(&self) -> Vec<(u64, f64)> {
        let total: f64 = self.weights.iter().map(|&(_, w)| w).sum();
        self.weights
            .iter()
            .filter(|&&(_, w)| w > 0.0)
            .map(|&(code, w)| (code, w / total))
            .collect()
    }
}

impl GlobalValue for WeightedPermutationEntropy {
    fn global_value(&self) -> f64 {
        let masses: Vec<f64> = self.weights.iter().map(|&(_, w)| w).collect();
        entropy_from_masses(&masses) / normalization(&self.params)
    }
}

impl OptionalLocalValues for WeightedPermutationEntropy {
    fn supports_local(&self) -> bool {
        false
    }

    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Err("Local values are not defined for weighted permutation entropy.")
    }
}
