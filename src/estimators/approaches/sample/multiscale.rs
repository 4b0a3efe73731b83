// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use tracing::{debug, trace};

use crate::error::{EntropyError, Result};
use crate::estimators::approaches::sample::sample::SampleEntropy;
use crate::estimators::params::Tolerance;
use crate::estimators::traits::ProfileValues;
use crate::estimators::utils::granulate::{coarse_grain, coarse_grain_from};

/// Multiscale entropy (Costa et al.).
///
/// For each scale `s = 1..=max_scale` the series is coarse-grained at `s` and
/// the sample entropy at `sample_length` is taken. The tolerance is resolved
/// once on the original series and held fixed across scales.
pub struct MultiscaleEntropy {
    values: Array1<f64>,
    pub sample_length: usize,
    pub tolerance: f64,
    pub max_scale: usize,
}

impl MultiscaleEntropy {
    /// `max_scale` defaults to the series length.
    pub fn new(
        data: Array1<f64>,
        sample_length: usize,
        tolerance: Tolerance,
        max_scale: Option<usize>,
    ) -> Result<Self> {
        let series = data.to_vec();
        let n = series.len();
        if n == 0 {
            return Err(EntropyError::EmptyInput);
        }
        let max_scale = max_scale.unwrap_or(n);
        check_scale(max_scale, n)?;
        let r = tolerance.resolve(&series)?;
        debug!(n, sample_length, tolerance = r, max_scale, "multiscale entropy");

        let mut values = Vec::with_capacity(max_scale);
        for scale in 1..=max_scale {
            let coarse = coarse_grain(&series, scale)?;
            let se = SampleEntropy::with_resolved_tolerance(&coarse, sample_length, r)?;
            let value = se.last_value();
            trace!(scale, value, "multiscale entropy scale");
            values.push(value);
        }

        Ok(Self {
            values: Array1::from(values),
            sample_length,
            tolerance: r,
            max_scale,
        })
    }
}

impl ProfileValues for MultiscaleEntropy {
    fn values(&self) -> Array1<f64> {
        self.values.clone()
    }
}

/// Composite multiscale entropy (Wu et al., 2013).
///
/// At scale `s` all `s` phase-shifted coarse-grainings `series[j..]`,
/// `j = 0..s`, are computed and their sample entropies at `sample_length` are
/// averaged. Averaging over phases lowers the variance of the estimate
/// relative to [`MultiscaleEntropy`]; at scale 1 both agree.
///
/// Wu et al. use `0.15 · std` as the tolerance
/// ([`WU_TOLERANCE_FACTOR`](crate::estimators::params::WU_TOLERANCE_FACTOR));
/// the default here is [`Tolerance::default`] for consistency with the other
/// sample-entropy estimators.
pub struct CompositeMultiscaleEntropy {
    values: Array1<f64>,
    pub sample_length: usize,
    pub tolerance: f64,
    pub scale: usize,
}

impl CompositeMultiscaleEntropy {
    pub fn new(
        data: Array1<f64>,
        sample_length: usize,
        scale: usize,
        tolerance: Tolerance,
    ) -> Result<Self> {
        let series = data.to_vec();
        let n = series.len();
        if n == 0 {
            return Err(EntropyError::EmptyInput);
        }
        check_scale(scale, n)?;
        let r = tolerance.resolve(&series)?;
        debug!(n, sample_length, tolerance = r, scale, "composite multiscale entropy");

        let mut values = Vec::with_capacity(scale);
        for s in 1..=scale {
            let mut acc = 0.0_f64;
            for offset in 0..s {
                let coarse = coarse_grain_from(&series, s, offset)?;
                let se = SampleEntropy::with_resolved_tolerance(&coarse, sample_length, r)?;
                acc += se.last_value() / s as f64;
            }
            trace!(scale = s, value = acc, "composite multiscale entropy scale");
            values.push(acc);
        }

        Ok(Self {
            values: Array1::from(values),
            sample_length,
            tolerance: r,
            scale,
        })
    }
}

impl ProfileValues for CompositeMultiscaleEntropy {
    fn values(&self) -> Array1<f64> {
        self.values.clone()
    }
}

fn check_scale(scale: usize, n: usize) -> Result<()> {
    if scale < 1 {
        return Err(EntropyError::invalid("scale should be greater or equal to 1"));
    }
    if scale > n {
        return Err(EntropyError::SizeExceeded {
            required: scale,
            available: n,
        });
    }
    Ok(())
}
