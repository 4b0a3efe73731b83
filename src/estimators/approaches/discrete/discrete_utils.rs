// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use std::collections::HashMap;
use std::hash::Hash;

/// Shared dataset for frequency-based (plug-in) entropy estimators.
pub struct SymbolDataset<T> {
    /// Original symbols, in observation order
    pub data: Vec<T>,
    /// Counts per unique symbol
    pub counts: HashMap<T, usize>,
    /// Total number of observations
    pub n: usize,
    /// Number of unique symbols
    pub k: usize,
    /// Probability dictionary p(x) for each unique symbol
    pub dist: HashMap<T, f64>,
}

impl<T: Eq + Hash + Clone> SymbolDataset<T> {
    /// Build a SymbolDataset from raw symbols
    pub fn from_data(data: Vec<T>) -> Self {
        let n = data.len();
        let counts = count_frequencies(&data);
        let k = counts.len();
        let n_f = n as f64;
        let mut dist = HashMap::with_capacity(k);
        for (val, cnt) in counts.iter() {
            dist.insert(val.clone(), *cnt as f64 / n_f);
        }
        Self {
            data,
            counts,
            n,
            k,
            dist,
        }
    }

    /// Map each observation to its probability using the cached distribution dictionary
    pub fn map_probs(&self) -> Array1<f64> {
        self.data.iter().map(|v| self.dist[v]).collect()
    }

    /// Counts of the unique symbols in ascending order.
    ///
    /// Summing over this instead of the map keeps floating-point accumulation
    /// independent of hash iteration order.
    pub fn sorted_counts(&self) -> Vec<usize> {
        let mut counts: Vec<usize> = self.counts.values().copied().collect();
        counts.sort_unstable();
        counts
    }
}

/// Count the occurrences of each symbol in a slice.
pub fn count_frequencies<T: Eq + Hash + Clone>(data: &[T]) -> HashMap<T, usize> {
    let mut frequency_map = HashMap::new();
    for value in data.iter() {
        *frequency_map.entry(value.clone()).or_insert(0) += 1;
    }
    frequency_map
}

/// Shannon entropy in bits of a distribution given by non-negative masses.
///
/// Masses are normalised by their sum; zero masses are skipped so no
/// `0·log(0)` term enters. The caller provides the masses in a fixed order.
pub fn entropy_from_masses(masses: &[f64]) -> f64 {
    let total: f64 = masses.iter().sum();
    let mut h = 0.0_f64;
    for &w in masses {
        if w > 0.0 {
            let p = w / total;
            h -= p * p.log2();
        }
    }
    h
}

/// Canonical key for comparing floats by value.
///
/// `-0.0` and `0.0` share a key, and every NaN maps to one key.
pub fn float_key(x: f64) -> u64 {
    if x == 0.0 {
        0.0_f64.to_bits()
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}
