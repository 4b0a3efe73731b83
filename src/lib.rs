// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # tsentropy
//!
//! Entropy-based complexity measures for discrete and real-valued time series:
//! Shannon entropy, sample entropy with its multiscale and composite-multiscale
//! variants, and the permutation entropy family.
//!
//! ## Quick Start
//!
//! ```rust
//! use tsentropy::estimators::entropy::Entropy;
//! use tsentropy::estimators::params::{PermutationParams, Tolerance};
//! use tsentropy::estimators::traits::{GlobalValue, ProfileValues};
//! use ndarray::array;
//!
//! // Shannon entropy (bits) of a symbol sequence
//! let h = Entropy::new_shannon(vec![1, 1, 1, 2, 3, 4, 5]).unwrap().global_value();
//! assert!((h - 2.12809).abs() < 1e-5);
//!
//! // Permutation entropy of order 3
//! let series = array![4.0, 7.0, 9.0, 10.0, 6.0, 11.0, 3.0];
//! let pe = Entropy::new_permutation(series.clone(), PermutationParams::new(3, 1))
//!     .unwrap()
//!     .global_value();
//! assert!((pe - 1.522).abs() < 1e-3);
//!
//! // Sample entropy for template lengths 1..=2
//! let sampen = Entropy::new_sample(series, 2, Tolerance::default()).unwrap().values();
//! assert_eq!(sampen.len(), 2);
//! ```
//!
//! ## Estimators
//!
//! | Estimator | Output | Module |
//! |-----------|--------|--------|
//! | Shannon | scalar | `approaches::discrete::shannon` |
//! | Sample entropy | one value per template length | `approaches::sample::sample` |
//! | Multiscale / composite multiscale entropy | one value per scale | `approaches::sample::multiscale` |
//! | Permutation / weighted permutation entropy | scalar | `approaches::ordinal` |
//! | Multiscale permutation entropy | one value per scale | `approaches::ordinal::multiscale` |
//!
//! All entropies of discrete distributions are reported in bits; sample
//! entropy is a natural-log ratio as in its defining references.
//!
//! ## Logging
//!
//! Estimators emit `tracing` events at `debug` and `trace` level. The crate
//! never installs a subscriber.
//!
//! ## Feature Flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` for the parameter types.

pub mod error;
pub mod estimators;

pub use error::{EntropyError, Result};
