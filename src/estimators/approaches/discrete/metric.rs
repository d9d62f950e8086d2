// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::estimators::approaches::discrete::discrete_utils::SymbolCounts;
use crate::estimators::approaches::discrete::shannon::ShannonEntropy;
use crate::estimators::base::LogBase;
use crate::estimators::traits::{GlobalValue, LocalValues};

/// Metric entropy: Shannon entropy divided by the sequence length.
///
/// Entropy density per symbol, which makes sequences of different lengths comparable.
/// The length is checked before dividing, so an empty sequence yields 0.0.
#[derive(Debug, Clone)]
pub struct MetricEntropy<S> {
    shannon: ShannonEntropy<S>,
}

impl<S: Ord + Copy> MetricEntropy<S> {
    pub fn new(data: Vec<S>) -> Self {
        Self {
            shannon: ShannonEntropy::new(data),
        }
    }

    pub fn from_counts(dataset: SymbolCounts<S>) -> Self {
        Self {
            shannon: ShannonEntropy::from_counts(dataset),
        }
    }

    /// Set logarithm base (default 2)
    pub fn with_base(mut self, base: LogBase) -> Self {
        self.shannon = self.shannon.with_base(base);
        self
    }

    pub fn len(&self) -> usize {
        self.shannon.dataset().n
    }

    pub fn is_empty(&self) -> bool {
        self.shannon.dataset().is_empty()
    }
}

impl MetricEntropy<char> {
    pub fn from_chars(sequence: &str) -> Self {
        Self {
            shannon: ShannonEntropy::from_chars(sequence),
        }
    }
}

impl<S: Ord + Copy> GlobalValue for MetricEntropy<S> {
    fn global_value(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.shannon.global_value() / self.len() as f64
    }
}

impl<S: Ord + Copy> LocalValues for MetricEntropy<S> {
    fn local_values(&self) -> Array1<f64> {
        let n_f = self.len() as f64;
        self.shannon.local_values() / n_f
    }
}
