// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Sequence utilities shared by the estimators: embedding, coarse-graining
// and summary statistics.

pub mod embedding;
pub mod granulate;
pub mod stats;

pub use embedding::{embed, pattern_space};
pub use granulate::{granulate, granulate_from};
pub use stats::standardize;
