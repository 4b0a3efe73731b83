// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: frequency counting and the Shannon estimator
// that the ordinal estimators reduce to.

pub mod discrete_utils;
pub mod shannon;
