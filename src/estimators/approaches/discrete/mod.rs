// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: groups all discrete-related submodules
// and exposes them to the parent approaches module.

pub mod discrete_utils;

pub mod metric;
pub mod relative;
pub mod shannon;

pub use metric::MetricEntropy;
pub use relative::RelativeEntropy;
pub use shannon::ShannonEntropy;

use log::trace;

use crate::error::Result;
use crate::estimators::base::LogBase;
use crate::estimators::traits::GlobalValue;

// Measure functions over strings. All share the `MeasureFn` signature so the engine
// can dispatch to them uniformly.

/// Shannon entropy of the characters of `sequence`. Never fails.
pub fn shannon_entropy(sequence: &str, base: LogBase) -> Result<f64> {
    let h = ShannonEntropy::from_chars(sequence).with_base(base).global_value();
    trace!("shannon entropy of {sequence:?} (base {base}) = {h}");
    Ok(h)
}

/// Shannon entropy divided by the number of characters. Never fails.
pub fn metric_entropy(sequence: &str, base: LogBase) -> Result<f64> {
    let m = MetricEntropy::from_chars(sequence).with_base(base).global_value();
    trace!("metric entropy of {sequence:?} (base {base}) = {m}");
    Ok(m)
}

/// Relative entropy of the characters of `sequence` from the domain-label reference.
/// Fails on the first character outside the reference alphabet.
pub fn relative_entropy(sequence: &str, base: LogBase) -> Result<f64> {
    let d = RelativeEntropy::new(sequence)?.with_base(base).global_value();
    trace!("relative entropy of {sequence:?} (base {base}) = {d}");
    Ok(d)
}
