// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use tracing::{debug, trace};

use crate::error::{EntropyError, Result};
use crate::estimators::params::Tolerance;
use crate::estimators::traits::ProfileValues;

/// Sample entropy estimator for template lengths `1..=sample_length`.
///
/// Two samples match when their absolute difference is strictly below the
/// tolerance `r`; templates match when every element matches (Chebyshev
/// distance). A single pass over the series counts matching pairs for every
/// template length up to `sample_length`, so the whole profile costs the same
/// as its last entry.
///
/// Entry `k-1` of the profile is `-ln(N[k] / N[k-1])`, where `N[k]` is the
/// number of matching template pairs of length `k` and
/// `N[0] = n·(n-1)/2`. A zero count yields `+inf` (no repeats found), and
/// `0/0` yields `NaN`; both are returned as values.
pub struct SampleEntropy {
    counts: Vec<u64>,
    pub sample_length: usize,
    pub tolerance: f64,
}

impl SampleEntropy {
    /// Build from a series with a tolerance resolved against that series.
    ///
    /// `Tolerance::default()` is `0.1 · std(series)`.
    pub fn new(
        data: Array1<f64>,
        sample_length: usize,
        tolerance: Tolerance,
    ) -> Result<Self> {
        let series = data.to_vec();
        if series.is_empty() {
            return Err(EntropyError::EmptyInput);
        }
        let r = tolerance.resolve(&series)?;
        Self::with_resolved_tolerance(&series, sample_length, r)
    }

    /// Build with an already-resolved absolute tolerance.
    ///
    /// Used by the multiscale estimators, which fix `r` on the original series
    /// and feed coarse-grained copies through here. Any series length is
    /// accepted, including empty.
    pub fn with_resolved_tolerance(series: &[f64], sample_length: usize, r: f64) -> Result<Self> {
        if sample_length < 1 {
            return Err(EntropyError::invalid(
                "sample_length should be greater or equal to 1",
            ));
        }
        let r = Tolerance::Absolute(r).resolve(series)?;
        debug!(n = series.len(), sample_length, tolerance = r, "sample entropy");
        let counts = template_counts(series, sample_length, r);
        Ok(Self {
            counts,
            sample_length,
            tolerance: r,
        })
    }

    /// Matching pair counts `N[0..=sample_length]`.
    pub fn template_counts(&self) -> &[u64] {
        &self.counts
    }
}

impl ProfileValues for SampleEntropy {
    fn values(&self) -> Array1<f64> {
        self.counts
            .windows(2)
            .map(|w| -((w[1] as f64) / (w[0] as f64)).ln())
            .collect()
    }
}

/// Count matching template pairs for every length `0..=sample_length`.
///
/// For each start index `i` the candidate set holds the positions (relative to
/// `series[i+1..]`) whose window matches the template `series[i..]` so far.
/// Each round shifts the survivors one step forward, drops those that run off
/// the end, and keeps the ones matching the next template element.
pub(crate) fn template_counts(series: &[f64], sample_length: usize, r: f64) -> Vec<u64> {
    let n = series.len();
    let m = sample_length - 1;
    let mut counts = vec![0u64; sample_length + 1];
    counts[0] = (n as u64) * (n.saturating_sub(1) as u64) / 2;

    let within = |a: f64, b: f64| (a - b).abs() < r;

    for i in 0..n.saturating_sub(m + 1) {
        let template = &series[i..=i + m];
        let rest = &series[i + 1..];

        let mut candidates: Vec<usize> = rest
            .iter()
            .enumerate()
            .filter(|&(_, &v)| within(v, template[0]))
            .map(|(j, _)| j)
            .collect();
        counts[1] += candidates.len() as u64;

        let mut length = 1;
        while !candidates.is_empty() && length <= m {
            let target = template[length];
            let survivors: Vec<usize> = candidates
                .iter()
                .map(|&j| j + 1)
                .filter(|&j| j < rest.len() && within(rest[j], target))
                .collect();
            length += 1;
            counts[length] += survivors.len() as u64;
            candidates = survivors;
        }
    }

    trace!(?counts, "template counts");
    counts
}
