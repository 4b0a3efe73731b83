use ndarray::Array1;
use std::hash::Hash;

use crate::error::Result;
use crate::estimators::approaches::{
    CompositeMultiscaleEntropy, MultiscaleEntropy, MultiscalePermutationEntropy,
    PermutationEntropy, SampleEntropy, ShannonEntropy, WeightedPermutationEntropy,
};
use crate::estimators::params::{PermutationParams, Tolerance};
pub use crate::estimators::traits::{GlobalValue, LocalValues, ProfileValues};

/// Entropy estimation methods for various data types
///
/// This struct provides static methods for creating entropy estimators
/// for symbol sequences and real-valued time series.
pub struct Entropy;

impl Entropy {
    /// Creates a Shannon entropy estimator for a sequence of discrete symbols
    ///
    /// # Arguments
    ///
    /// * `data` - Symbols compared by equality (integers, chars, strings, ...)
    ///
    /// # Errors
    ///
    /// `EmptyInput` if `data` is empty
    pub fn new_shannon<T: Eq + Hash + Clone>(data: Vec<T>) -> Result<ShannonEntropy<T>> {
        ShannonEntropy::new(data)
    }

    /// Creates a sample entropy estimator for template lengths `1..=sample_length`
    ///
    /// # Arguments
    ///
    /// * `data` - Real-valued time series
    /// * `sample_length` - Longest template length
    /// * `tolerance` - Absolute or std-relative tolerance; `Tolerance::default()` is `0.1 · std(data)`
    pub fn new_sample(
        data: Array1<f64>,
        sample_length: usize,
        tolerance: Tolerance,
    ) -> Result<SampleEntropy> {
        SampleEntropy::new(data, sample_length, tolerance)
    }

    /// Creates a multiscale entropy estimator
    ///
    /// # Arguments
    ///
    /// * `data` - Real-valued time series
    /// * `sample_length` - Template length whose sample entropy is reported per scale
    /// * `tolerance` - Resolved once on `data`; `Tolerance::default()` is `0.1 · std(data)`
    /// * `max_scale` - Largest scale; `None` selects `data.len()`
    pub fn new_multiscale(
        data: Array1<f64>,
        sample_length: usize,
        tolerance: Tolerance,
        max_scale: Option<usize>,
    ) -> Result<MultiscaleEntropy> {
        MultiscaleEntropy::new(data, sample_length, tolerance, max_scale)
    }

    /// Creates a composite multiscale entropy estimator for scales `1..=scale`
    pub fn new_composite_multiscale(
        data: Array1<f64>,
        sample_length: usize,
        scale: usize,
        tolerance: Tolerance,
    ) -> Result<CompositeMultiscaleEntropy> {
        CompositeMultiscaleEntropy::new(data, sample_length, scale, tolerance)
    }

    /// Creates a permutation entropy estimator
    ///
    /// # Arguments
    ///
    /// * `data` - Real-valued time series
    /// * `params` - Order, delay and normalisation; see [`PermutationParams::default`]
    pub fn new_permutation(
        data: Array1<f64>,
        params: PermutationParams,
    ) -> Result<PermutationEntropy> {
        PermutationEntropy::new(data, params)
    }

    /// Creates a weighted permutation entropy estimator
    pub fn new_weighted_permutation(
        data: Array1<f64>,
        params: PermutationParams,
    ) -> Result<WeightedPermutationEntropy> {
        WeightedPermutationEntropy::new(data, params)
    }

    /// Creates a multiscale permutation entropy estimator for scales `1..=scale`
    pub fn new_multiscale_permutation(
        data: Array1<f64>,
        params: PermutationParams,
        scale: usize,
    ) -> Result<MultiscalePermutationEntropy> {
        MultiscalePermutationEntropy::new(data, params, scale)
    }
}
