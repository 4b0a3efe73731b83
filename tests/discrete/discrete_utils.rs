// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use tsentropy::estimators::approaches::discrete::discrete_utils::{
    SymbolDataset, count_frequencies, entropy_from_masses, float_key,
};

#[test]
fn count_frequencies_basic() {
    let counts = count_frequencies(&['a', 'b', 'a', 'c', 'a']);
    assert_eq!(counts.len(), 3);
    assert_eq!(counts[&'a'], 3);
    assert_eq!(counts[&'b'], 1);
    assert_eq!(counts[&'c'], 1);
    assert!(count_frequencies::<i32>(&[]).is_empty());
}

#[test]
fn dataset_distribution_and_sorted_counts() {
    let ds = SymbolDataset::from_data(vec![3, 1, 3, 2, 3, 1]);
    assert_eq!(ds.n, 6);
    assert_eq!(ds.k, 3);
    assert_abs_diff_eq!(ds.dist[&3], 0.5, epsilon = 1e-12);
    assert_eq!(ds.sorted_counts(), vec![1, 2, 3]);

    let probs = ds.map_probs();
    assert_abs_diff_eq!(probs[0], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(probs[1], 2.0 / 6.0, epsilon = 1e-12);
}

#[test]
fn entropy_from_masses_skips_zeros_and_normalises() {
    assert_abs_diff_eq!(entropy_from_masses(&[1.0, 1.0]), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(entropy_from_masses(&[2.0, 0.0, 2.0]), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(entropy_from_masses(&[5.0]), 0.0, epsilon = 1e-12);
}

#[test]
fn float_key_canonicalises() {
    assert_eq!(float_key(0.0), float_key(-0.0));
    assert_eq!(float_key(f64::NAN), float_key(-f64::NAN));
    assert_ne!(float_key(1.0), float_key(2.0));
}
