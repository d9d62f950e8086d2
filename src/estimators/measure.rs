// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::error::{EntropyError, Result};
use crate::estimators::approaches::discrete::{metric_entropy, relative_entropy, shannon_entropy};
use crate::estimators::base::LogBase;

/// Signature shared by every registered measure: `(sequence, base) -> value`.
pub type MeasureFn = fn(&str, LogBase) -> Result<f64>;

/// Built-in measures.
///
/// A new built-in measure is one variant here plus one [`MeasureFn`]; the engine
/// registers every entry of [`MeasureKind::ALL`] and needs no other change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeasureKind {
    Metric,
    Relative,
    Shannon,
}

impl MeasureKind {
    pub const ALL: [MeasureKind; 3] = [Self::Metric, Self::Relative, Self::Shannon];

    /// Stable identifier used as the key in batch results.
    pub fn name(self) -> &'static str {
        match self {
            Self::Metric => "Metric",
            Self::Relative => "Relative",
            Self::Shannon => "Shannon",
        }
    }

    pub fn function(self) -> MeasureFn {
        match self {
            Self::Metric => metric_entropy,
            Self::Relative => relative_entropy,
            Self::Shannon => shannon_entropy,
        }
    }

    /// Whether the measure only accepts symbols of the reference distribution.
    pub fn requires_reference(self) -> bool {
        matches!(self, Self::Relative)
    }

    pub fn evaluate(self, sequence: &str, base: LogBase) -> Result<f64> {
        (self.function())(sequence, base)
    }
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MeasureKind {
    type Err = EntropyError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| EntropyError::UnknownMeasure(name.to_string()))
    }
}
