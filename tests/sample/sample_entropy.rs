// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::Array1;
use rstest::rstest;
use tsentropy::EntropyError;
use tsentropy::estimators::approaches::sample::sample::SampleEntropy;
use tsentropy::estimators::{ProfileValues, Tolerance};

use crate::test_helpers::{
    TS_SAMPLE_ENTROPY_STD, assert_profile_eq, fixture, generate_gaussian_data,
};

#[test]
fn sample_entropy_reference_values() {
    let r = 0.2 * TS_SAMPLE_ENTROPY_STD;
    let se = SampleEntropy::new(fixture(), 4, Tolerance::Absolute(r)).unwrap();
    assert_profile_eq(
        &se.values(),
        &[2.21187685, 2.12087873, 2.3826278, 1.79175947],
        1e-8,
    );
    assert_eq!(se.template_counts(), &[4950, 542, 65, 6, 1]);
}

#[test]
fn sample_entropy_std_factor_resolves_on_series() {
    let a = SampleEntropy::new(fixture(), 4, Tolerance::StdFactor(0.2)).unwrap();
    let b = SampleEntropy::new(fixture(), 4, Tolerance::Absolute(0.2 * TS_SAMPLE_ENTROPY_STD))
        .unwrap();
    assert_abs_diff_eq!(a.tolerance, b.tolerance, epsilon = 1e-12);
    assert_eq!(a.template_counts(), b.template_counts());
}

#[test]
fn sample_entropy_default_tolerance_is_tenth_of_std() {
    let se = SampleEntropy::new(fixture(), 2, Tolerance::default()).unwrap();
    assert_abs_diff_eq!(se.tolerance, 0.1 * TS_SAMPLE_ENTROPY_STD, epsilon = 1e-12);
    // Integer-valued fixture: any r in (0, 1] only matches exact repeats
    assert_profile_eq(&se.values(), &[2.21187685, 2.12087873], 1e-8);
}

#[test]
fn sample_entropy_hand_counted_example() {
    // i=0: [1,2] vs rest [2,1,2,1] -> first-element hits {1,3}, extended {2}
    // i=1: [2,1] vs rest [1,2,1]   -> hits {1}, extended {2}
    // i=2: [1,2] vs rest [2,1]     -> hits {1}, extension runs off the end
    let se = SampleEntropy::new(
        Array1::from(vec![1.0, 2.0, 1.0, 2.0, 1.0]),
        2,
        Tolerance::Absolute(0.5),
    )
    .unwrap();
    assert_eq!(se.template_counts(), &[10, 4, 2]);
    assert_profile_eq(&se.values(), &[-(0.4f64).ln(), -(0.5f64).ln()], 1e-12);
}

#[test]
fn sample_entropy_constant_series() {
    let se = SampleEntropy::new(Array1::from(vec![5.0; 10]), 2, Tolerance::Absolute(0.1)).unwrap();
    assert_eq!(se.template_counts(), &[45, 44, 36]);
    assert_profile_eq(
        &se.values(),
        &[-(44.0f64 / 45.0).ln(), -(36.0f64 / 44.0).ln()],
        1e-12,
    );
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(6)]
fn sample_entropy_profile_length_and_n0(#[case] sample_length: usize) {
    for &r in &[0.0, 0.3, 1.0, 50.0] {
        let se = SampleEntropy::new(fixture(), sample_length, Tolerance::Absolute(r)).unwrap();
        assert_eq!(se.values().len(), sample_length);
        assert_eq!(se.template_counts().len(), sample_length + 1);
        assert_eq!(se.template_counts()[0], 100 * 99 / 2);
        // Longer templates can only match less often
        for w in se.template_counts().windows(2) {
            assert!(w[1] <= w[0]);
        }
    }
}

#[test]
fn sample_entropy_zero_tolerance_without_duplicates_is_infinite() {
    let series = Array1::from(vec![1.0, 2.0, 3.0, 4.5, 7.0, 8.5]);
    let se = SampleEntropy::new(series, 2, Tolerance::Absolute(0.0)).unwrap();
    let values = se.values();
    assert_eq!(values[0], f64::INFINITY);
    // 0/0 for the next length
    assert!(values[1].is_nan());
}

#[test]
fn sample_entropy_longer_run_bounds_shorter_runs() {
    let data = Array1::from(generate_gaussian_data(300, 0.0, 1.0, 3));
    let full = SampleEntropy::new(data.clone(), 4, Tolerance::Absolute(0.4)).unwrap();
    assert!(full.values().iter().all(|v| v.is_finite()));
    for len in 1..=4 {
        let part = SampleEntropy::new(data.clone(), len, Tolerance::Absolute(0.4)).unwrap();
        // A longer run scans fewer start indices, never more
        for k in 0..=len {
            assert!(full.template_counts()[k] <= part.template_counts()[k]);
        }
    }
    let same = SampleEntropy::new(data, 4, Tolerance::Absolute(0.4)).unwrap();
    assert_eq!(same.template_counts(), full.template_counts());
}

#[test]
fn sample_entropy_short_series_gives_numeric_edge_values() {
    let se = SampleEntropy::new(Array1::from(vec![1.0, 2.0]), 3, Tolerance::Absolute(1.0)).unwrap();
    assert_eq!(se.template_counts(), &[1, 0, 0, 0]);
    let values = se.values();
    assert_eq!(values[0], f64::INFINITY);
    assert!(values[1].is_nan());
}

#[test]
fn sample_entropy_invalid_inputs() {
    assert!(matches!(
        SampleEntropy::new(fixture(), 0, Tolerance::default()),
        Err(EntropyError::InvalidParameter(_))
    ));
    assert!(matches!(
        SampleEntropy::new(fixture(), 2, Tolerance::Absolute(-0.1)),
        Err(EntropyError::InvalidParameter(_))
    ));
    assert!(matches!(
        SampleEntropy::new(fixture(), 2, Tolerance::Absolute(f64::NAN)),
        Err(EntropyError::InvalidParameter(_))
    ));
    assert!(matches!(
        SampleEntropy::new(Array1::from(vec![]), 2, Tolerance::default()),
        Err(EntropyError::EmptyInput)
    ));
}
