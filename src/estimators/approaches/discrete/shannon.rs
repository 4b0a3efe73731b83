// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use std::hash::Hash;
use tracing::debug;

use crate::error::{EntropyError, Result};
use crate::estimators::approaches::discrete::discrete_utils::{
    SymbolDataset, entropy_from_masses, float_key,
};
use crate::estimators::traits::{GlobalValue, LocalValues, OptionalLocalValues};

/// Shannon entropy of a sequence of discrete symbols, in bits.
///
/// Computes H = -Σ p_i log2 p_i from the empirical frequencies p_i = n_i/N.
/// Symbols are compared by equality only, so any `Eq + Hash` type works:
/// integers, characters, strings or composite keys. Local values are the
/// information content -log2 p(x) of each observation.
pub struct ShannonEntropy<T> {
    dataset: SymbolDataset<T>,
}

impl<T: Eq + Hash + Clone> ShannonEntropy<T> {
    /// Build from a non-empty symbol sequence.
    pub fn new(data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(EntropyError::EmptyInput);
        }
        let dataset = SymbolDataset::from_data(data);
        debug!(n = dataset.n, k = dataset.k, "shannon entropy");
        Ok(Self { dataset })
    }

    /// Number of distinct symbols.
    pub fn num_symbols(&self) -> usize {
        self.dataset.k
    }

    pub fn len(&self) -> usize {
        self.dataset.n
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.n == 0
    }
}

impl ShannonEntropy<char> {
    /// Entropy of the characters of a string, e.g. `"1112345"`.
    pub fn from_chars(text: &str) -> Result<Self> {
        Self::new(text.chars().collect())
    }
}

impl ShannonEntropy<u64> {
    /// Entropy of real values compared by equality (`-0.0 == 0.0`).
    pub fn from_values(values: &[f64]) -> Result<Self> {
        Self::new(values.iter().map(|&x| float_key(x)).collect())
    }
}

impl<T: Eq + Hash + Clone> GlobalValue for ShannonEntropy<T> {
    fn global_value(&self) -> f64 {
        let masses: Vec<f64> = self
            .dataset
            .sorted_counts()
            .into_iter()
            .map(|c| c as f64)
            .collect();
        entropy_from_masses(&masses)
    }
}

impl<T: Eq + Hash + Clone> LocalValues for ShannonEntropy<T> {
    fn local_values(&self) -> Array1<f64> {
        -self.dataset.map_probs().mapv(f64::log2)
    }
}

impl<T: Eq + Hash + Clone> OptionalLocalValues for ShannonEntropy<T> {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}
