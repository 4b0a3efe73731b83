// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

pub trait LocalValues: GlobalValue {
    /// Compute and return the local values of the measure, one per observation.
    fn local_values(&self) -> Array1<f64>;

    /// Derive the global value as the mean of local values.
    ///
    /// Returns `NaN` when there are no observations.
    fn global_from_local(&self) -> f64 {
        self.local_values().mean().unwrap_or(f64::NAN)
    }
}

/// Optional interface for estimators that may not support local values.
///
/// Estimators that do support local values should return supports_local() = true
/// and provide local values via `Ok(Array1<f64>)`. Estimators that do not support
/// local values should return supports_local() = false and an Err with a brief reason.
pub trait OptionalLocalValues {
    fn supports_local(&self) -> bool;
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str>;
}

/// Interface for estimators whose result is a profile rather than a scalar:
/// one value per template length (sample entropy) or per scale (multiscale variants).
pub trait ProfileValues {
    /// Return the profile, ordered by increasing template length or scale.
    fn values(&self) -> Array1<f64>;

    /// Return the last entry of the profile, or `NaN` if it is empty.
    fn last_value(&self) -> f64 {
        self.values().last().copied().unwrap_or(f64::NAN)
    }
}
