// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::estimators::approaches::discrete::discrete_utils::SymbolCounts;
use crate::estimators::base::LogBase;
use crate::estimators::traits::{GlobalValue, LocalValues};

/// Shannon entropy estimator for discrete symbols using maximum likelihood.
///
/// Computes H = -Σ p_s log_b p_s from empirical probabilities p_s = n_s/N, in bits unless
/// another base is configured with [`ShannonEntropy::with_base`]. Accepts any ordered
/// symbol type; no reference alphabet is involved.
///
/// Local values are the self-information -log_b p(x) of each position, whose mean is the
/// global value.
#[derive(Debug, Clone)]
pub struct ShannonEntropy<S> {
    dataset: SymbolCounts<S>,
    base: LogBase,
}

impl<S: Ord + Copy> ShannonEntropy<S> {
    pub fn new(data: Vec<S>) -> Self {
        Self::from_counts(SymbolCounts::from_data(data))
    }

    pub fn from_counts(dataset: SymbolCounts<S>) -> Self {
        Self {
            dataset,
            base: LogBase::default(),
        }
    }

    /// Set logarithm base (default 2)
    pub fn with_base(mut self, base: LogBase) -> Self {
        self.base = base;
        self
    }

    pub fn base(&self) -> LogBase {
        self.base
    }

    pub fn dataset(&self) -> &SymbolCounts<S> {
        &self.dataset
    }
}

impl ShannonEntropy<char> {
    pub fn from_chars(sequence: &str) -> Self {
        Self::from_counts(SymbolCounts::from_chars(sequence))
    }
}

impl<S: Ord + Copy> GlobalValue for ShannonEntropy<S> {
    fn global_value(&self) -> f64 {
        if self.dataset.is_empty() {
            return 0.0;
        }
        let n_f = self.dataset.n as f64;
        // Iteration runs in symbol order, so permutations sum identically.
        let mut h = 0.0_f64;
        for &cnt in self.dataset.counts.values() {
            let p = (cnt as f64) / n_f;
            h -= p * self.base.log(p);
        }
        h
    }
}

impl<S: Ord + Copy> LocalValues for ShannonEntropy<S> {
    fn local_values(&self) -> Array1<f64> {
        let base = self.base;
        self.dataset.map_probs().mapv(|p| -base.log(p))
    }
}
