// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Ordinal (permutation) estimators module
// This module contains the permutation entropy family and its utilities.

pub mod multiscale;
pub mod ordinal_utils;
pub mod permutation;
pub mod weighted;
