// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use tracing::{debug, trace};

use crate::error::{EntropyError, Result};
use crate::estimators::approaches::ordinal::permutation::PermutationEntropy;
use crate::estimators::params::PermutationParams;
use crate::estimators::traits::{GlobalValue, ProfileValues};
use crate::estimators::utils::granulate::granulate;

/// Multiscale permutation entropy.
///
/// Permutation entropy with fixed `order`/`delay` of the series coarse-grained
/// at each scale `1..=scale`. Fails if a coarse-grained copy becomes too short
/// for the embedding.
pub struct MultiscalePermutationEntropy {
    values: Array1<f64>,
    pub params: PermutationParams,
    pub scale: usize,
}

impl MultiscalePermutationEntropy {
    pub fn new(data: Array1<f64>, params: PermutationParams, scale: usize) -> Result<Self> {
        if scale < 1 {
            return Err(EntropyError::invalid("scale should be greater or equal to 1"));
        }
        let series = data.to_vec();
        debug!(
            n = series.len(),
            order = params.order,
            delay = params.delay,
            scale,
            "multiscale permutation entropy"
        );

        let mut values = Vec::with_capacity(scale);
        for s in 1..=scale {
            let coarse = granulate(&series, s)?;
            let value = PermutationEntropy::new(coarse, params)?.global_value();
            trace!(scale = s, value, "multiscale permutation entropy scale");
            values.push(value);
        }
        Ok(Self {
            values: Array1::from(values),
            params,
            scale,
        })
    }
}

impl ProfileValues for MultiscalePermutationEntropy {
    fn values(&self) -> Array1<f64> {
        self.values.clone()
    }
}
