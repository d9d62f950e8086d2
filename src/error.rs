// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type shared by every measure and the engine.

use thiserror::Error;

/// Errors raised while evaluating entropy measures.
///
/// An empty input sequence is never an error: every measure defines it as 0.0.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EntropyError {
    /// The symbol has no entry in the reference distribution.
    #[error("unsupported symbol {0:?}: not present in the reference distribution")]
    UnsupportedSymbol(char),

    /// Logarithm bases must be finite, strictly positive and different from 1.
    #[error("invalid logarithm base {0}: must be finite, positive and not equal to 1")]
    InvalidBase(f64),

    #[error("unknown measure '{0}'")]
    UnknownMeasure(String),

    #[error("measure '{0}' is already registered")]
    DuplicateMeasure(String),

    /// `calculate_data` was called on an engine without a stored payload.
    #[error("no default data stored in the engine")]
    NoData,
}

pub type Result<T> = std::result::Result<T, EntropyError>;
