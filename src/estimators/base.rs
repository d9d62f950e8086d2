// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use crate::error::{EntropyError, Result};

/// Logarithm base used by every measure.
///
/// A valid base is finite, strictly positive and not equal to 1. Construction through
/// [`LogBase::new`] is the only way to obtain an arbitrary base, so a `LogBase` in hand
/// never divides by `ln(1) = 0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LogBase(f64);

impl LogBase {
    /// Base 2, results in bits (default).
    pub const BITS: LogBase = LogBase(2.0);
    /// Base e, results in nats.
    pub const NATS: LogBase = LogBase(std::f64::consts::E);
    /// Base 10, results in bans.
    pub const BANS: LogBase = LogBase(10.0);

    pub fn new(base: f64) -> Result<Self> {
        if base.is_finite() && base > 0.0 && base != 1.0 {
            Ok(Self(base))
        } else {
            Err(EntropyError::InvalidBase(base))
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Natural logarithm of the base, the divisor for change of base.
    #[inline]
    pub fn ln(self) -> f64 {
        self.0.ln()
    }

    /// Logarithm of `x` in this base.
    #[inline]
    pub fn log(self, x: f64) -> f64 {
        if self.0 == 2.0 {
            x.log2()
        } else {
            x.ln() / self.ln()
        }
    }
}

impl Default for LogBase {
    fn default() -> Self {
        Self::BITS
    }
}

impl TryFrom<f64> for LogBase {
    type Error = EntropyError;

    fn try_from(base: f64) -> Result<Self> {
        Self::new(base)
    }
}

impl fmt::Display for LogBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
