// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2};

use crate::error::{EntropyError, Result};
use crate::estimators::params::{MAX_ORDER, MotifEncoding, PermutationParams};
use crate::estimators::utils::embedding::embed;

/// Stable argsort for f64 values.
///
/// Writes into `idx` the indices that would sort `window` in ascending order.
/// Ties are resolved by the original index order, matching
/// `numpy.argsort(kind="stable")`, so identical windows always produce the same
/// permutation. NaNs sort after every number.
///
/// `idx` must have the same length as `window`.
pub fn argsort(window: &[f64], idx: &mut [usize]) {
    debug_assert_eq!(idx.len(), window.len(), "argsort buffer length mismatch");
    for (i, val) in idx.iter_mut().enumerate() {
        *val = i;
    }
    idx.sort_by(|&i, &j| {
        let a = window[i];
        let b = window[j];
        match a.partial_cmp(&b) {
            Some(core::cmp::Ordering::Equal) => i.cmp(&j),
            Some(ord) => ord,
            None => {
                if a.is_nan() && b.is_nan() {
                    i.cmp(&j)
                } else if a.is_nan() {
                    core::cmp::Ordering::Greater
                } else {
                    core::cmp::Ordering::Less
                }
            }
        }
    });
}

/// Longest permutation whose Lehmer code fits a `u64` (`20! < 2^64 < 21!`).
pub const MAX_LEHMER_LEN: usize = 20;

/// Positional-weight hash of a permutation: `Σ perm[k] · len^k`.
///
/// Injective over permutations of `0..len`.
///
/// # Errors
///
/// `InvalidParameter` if `perm` is longer than [`MAX_ORDER`], where the sum
/// no longer fits a `u64`, or holds an entry outside `0..len`.
pub fn hash_motif(perm: &[usize]) -> Result<u64> {
    let len = perm.len();
    if len > MAX_ORDER {
        return Err(EntropyError::invalid(format!(
            "motif length {len} exceeds the supported maximum of {MAX_ORDER}"
        )));
    }
    if let Some(&p) = perm.iter().find(|&&p| p >= len) {
        return Err(EntropyError::invalid(format!(
            "motif entry {p} is outside 0..{len}"
        )));
    }
    Ok(positional_hash(perm))
}

/// `hash_motif` without the checks. The sum stays below `len^len`, which
/// fits a `u64` for `len <= MAX_ORDER` and entries in `0..len`.
fn positional_hash(perm: &[usize]) -> u64 {
    let deg = perm.len() as u64;
    let mut weight = 1u64;
    let mut acc = 0u64;
    for (k, &p) in perm.iter().enumerate() {
        acc += p as u64 * weight;
        if k + 1 < perm.len() {
            weight *= deg;
        }
    }
    acc
}

/// Compute the Lehmer code (factoradic ranking) for a given permutation.
///
/// The input is a permutation of 0..m-1 as produced by [`argsort`].
/// Identity maps to 0 and the reversed permutation to `m! - 1`.
///
/// # Errors
///
/// `InvalidParameter` if `perm` is longer than [`MAX_LEHMER_LEN`].
pub fn lehmer_code(perm: &[usize]) -> Result<u64> {
    let n = perm.len();
    if n > MAX_LEHMER_LEN {
        return Err(EntropyError::invalid(format!(
            "Lehmer codes of permutations longer than {MAX_LEHMER_LEN} do not fit a u64, got {n}"
        )));
    }
    Ok(lehmer_code_with_fact(perm, &factorials(n)))
}

/// `[0!, 1!, ..., (n-1)!]`, at least one entry. `n` stays at or below
/// [`MAX_LEHMER_LEN`].
fn factorials(n: usize) -> Vec<u128> {
    let mut fact: Vec<u128> = vec![1u128; n.max(1)];
    for i in 1..n {
        fact[i] = fact[i - 1] * (i as u128);
    }
    fact
}

fn lehmer_code_with_fact(perm: &[usize], fact: &[u128]) -> u64 {
    let n = perm.len();
    let mut acc: u128 = 0;
    for i in 0..n {
        let c = perm[i + 1..].iter().filter(|&&p| perm[i] > p).count() as u128;
        acc += c * fact[n - 1 - i];
    }
    acc as u64
}

/// Ordinal embedding of a series together with the motif code of each row.
pub struct Symbolized {
    /// Embedded windows, shape `(n - (order-1)·delay, order)`
    pub embedding: Array2<f64>,
    /// One code per window
    pub codes: Array1<u64>,
}

/// Embed `series` and encode each window's rank permutation.
///
/// Validates `params` and the embedding size.
pub fn symbolize_series(series: &[f64], params: &PermutationParams) -> Result<Symbolized> {
    params.validate()?;
    let embedding = embed(series, params.order, params.delay)?;
    let order = params.order;

    // Reuse buffers to avoid repeated allocations
    let mut w: Vec<f64> = vec![0.0; order];
    let mut idx: Vec<usize> = (0..order).collect();

    let fact = factorials(order);

    let mut codes: Vec<u64> = Vec::with_capacity(embedding.nrows());
    for row in embedding.rows() {
        for (dst, &src) in w.iter_mut().zip(row.iter()) {
            *dst = src;
        }
        argsort(&w, &mut idx);
        let code = match params.encoding {
            MotifEncoding::PositionalWeight => positional_hash(&idx),
            MotifEncoding::Lehmer => lehmer_code_with_fact(&idx, &fact),
        };
        codes.push(code);
    }

    Ok(Symbolized {
        embedding,
        codes: Array1::from(codes),
    })
}
