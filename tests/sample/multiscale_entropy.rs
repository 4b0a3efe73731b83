// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::Array1;
use tsentropy::EntropyError;
use tsentropy::estimators::approaches::sample::multiscale::{
    CompositeMultiscaleEntropy, MultiscaleEntropy,
};
use tsentropy::estimators::approaches::sample::sample::SampleEntropy;
use tsentropy::estimators::params::WU_TOLERANCE_FACTOR;
use tsentropy::estimators::{ProfileValues, Tolerance};

use crate::test_helpers::{TS_SAMPLE_ENTROPY_STD, assert_profile_eq, fixture};

fn r02() -> Tolerance {
    Tolerance::Absolute(0.2 * TS_SAMPLE_ENTROPY_STD)
}

#[test]
fn multiscale_entropy_reference_values() {
    let mse = MultiscaleEntropy::new(fixture(), 2, r02(), Some(4)).unwrap();
    assert_profile_eq(
        &mse.values(),
        &[2.120878731544009, 3.39002408106403, 1.8137383759468302, 2.1041341542702074],
        1e-10,
    );
}

#[test]
fn multiscale_entropy_scale_one_equals_sample_entropy() {
    let mse = MultiscaleEntropy::new(fixture(), 3, r02(), Some(1)).unwrap();
    let se = SampleEntropy::new(fixture(), 3, r02()).unwrap();
    assert_eq!(mse.values().len(), 1);
    assert_eq!(mse.values()[0], se.last_value());
}

#[test]
fn multiscale_entropy_tolerance_fixed_from_original_series() {
    // Default tolerance is 0.1·std of the original series at every scale
    let mse = MultiscaleEntropy::new(fixture(), 2, Tolerance::default(), Some(3)).unwrap();
    assert_abs_diff_eq!(mse.tolerance, 0.1 * TS_SAMPLE_ENTROPY_STD, epsilon = 1e-12);
    assert_profile_eq(
        &mse.values(),
        &[2.120878731544009, 3.39002408106403, 2.6026896854443837],
        1e-10,
    );
}

#[test]
fn multiscale_entropy_default_max_scale_is_series_length() {
    let mse = MultiscaleEntropy::new(fixture(), 2, r02(), None).unwrap();
    assert_eq!(mse.max_scale, 100);
    let values = mse.values();
    assert_eq!(values.len(), 100);
    // A single coarse-grained sample has no pairs at all
    assert!(values[99].is_nan());
}

#[test]
fn multiscale_entropy_profile_uses_requested_length() {
    // With sample_length 4, the coarser copies quickly run out of matches
    let mse = MultiscaleEntropy::new(fixture(), 4, r02(), Some(2)).unwrap();
    let values = mse.values();
    assert_abs_diff_eq!(values[0], 1.791759469228055, epsilon = 1e-10);
    assert_eq!(values[1], f64::INFINITY);
}

#[test]
fn multiscale_entropy_invalid_scales() {
    assert!(matches!(
        MultiscaleEntropy::new(fixture(), 2, r02(), Some(0)),
        Err(EntropyError::InvalidParameter(_))
    ));
    assert!(matches!(
        MultiscaleEntropy::new(fixture(), 2, r02(), Some(101)),
        Err(EntropyError::SizeExceeded {
            required: 101,
            available: 100
        })
    ));
    assert!(matches!(
        MultiscaleEntropy::new(Array1::from(vec![]), 2, r02(), None),
        Err(EntropyError::EmptyInput)
    ));
}

#[test]
fn composite_multiscale_entropy_reference_values() {
    let cmse = CompositeMultiscaleEntropy::new(fixture(), 2, 3, r02()).unwrap();
    assert_profile_eq(
        &cmse.values(),
        &[2.120878731544009, 2.8939596769312006, 2.058559417351325],
        1e-10,
    );
}

#[test]
fn composite_multiscale_entropy_scale_one_equals_sample_entropy() {
    let cmse = CompositeMultiscaleEntropy::new(fixture(), 2, 1, r02()).unwrap();
    let se = SampleEntropy::new(fixture(), 2, r02()).unwrap();
    assert_eq!(cmse.values().len(), 1);
    assert_abs_diff_eq!(cmse.values()[0], se.last_value(), epsilon = 1e-12);
}

#[test]
fn composite_multiscale_entropy_wu_tolerance() {
    let cmse =
        CompositeMultiscaleEntropy::new(fixture(), 2, 2, Tolerance::StdFactor(WU_TOLERANCE_FACTOR))
            .unwrap();
    assert_abs_diff_eq!(cmse.tolerance, 0.15 * TS_SAMPLE_ENTROPY_STD, epsilon = 1e-12);
    // Integer fixture: 0.15·std and 0.2·std both only match exact repeats
    assert_profile_eq(&cmse.values(), &[2.120878731544009, 2.8939596769312006], 1e-10);
}

#[test]
fn composite_multiscale_entropy_invalid_scales() {
    assert!(matches!(
        CompositeMultiscaleEntropy::new(fixture(), 2, 0, r02()),
        Err(EntropyError::InvalidParameter(_))
    ));
    assert!(matches!(
        CompositeMultiscaleEntropy::new(fixture(), 2, 101, r02()),
        Err(EntropyError::SizeExceeded { .. })
    ));
}
