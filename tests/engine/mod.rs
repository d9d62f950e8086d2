// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Module containing tests for the engine, the registry and the reference table.
mod log_base;
mod measure_registry;
mod reference_table;
