// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type shared by all estimators.

use thiserror::Error;

/// Result type alias for estimator operations.
pub type Result<T> = std::result::Result<T, EntropyError>;

/// Errors raised when an estimator is handed inputs it cannot work with.
///
/// Numeric edge results are not errors: an estimator that finds no matching
/// templates returns `+inf`, and a `0/0` count ratio returns `NaN`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntropyError {
    /// A parameter lies outside its valid range (zero lag, order, delay, scale, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The requested embedding needs more samples than the series holds.
    #[error("result matrix exceeded size limit: need {required} samples, series has {available}")]
    SizeExceeded { required: usize, available: usize },

    /// The series carries no variation where the computation needs some.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// The series is empty.
    #[error("empty input data")]
    EmptyInput,
}

impl EntropyError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        EntropyError::InvalidParameter(msg.into())
    }

    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        EntropyError::DegenerateInput(msg.into())
    }
}
