// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Sample entropy estimators module: the template-matching engine and the
// multiscale estimators built on top of it.

pub mod multiscale;
pub mod sample;
