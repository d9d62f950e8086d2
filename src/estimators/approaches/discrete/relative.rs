// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use std::collections::BTreeMap;

use crate::error::{EntropyError, Result};
use crate::estimators::approaches::discrete::discrete_utils::SymbolCounts;
use crate::estimators::base::LogBase;
use crate::estimators::reference::ReferenceDistribution;
use crate::estimators::traits::{CrossEntropy, GlobalValue, LocalValues};

/// Relative entropy (Kullback–Leibler divergence) of observed symbols from a reference
/// distribution.
///
/// D(P||Q) = Σ_s p_s log_b (p_s / q_s), summed over the distinct symbols of the input,
/// where p is the empirical distribution and q the reference. Large positive values mark
/// inputs whose characters stray from the reference, such as generated domain labels.
///
/// Every distinct symbol must have a reference probability: construction fails with
/// [`EntropyError::UnsupportedSymbol`] otherwise. Unseen symbols are never smoothed.
#[derive(Debug, Clone)]
pub struct RelativeEntropy {
    dataset: SymbolCounts<char>,
    expected: BTreeMap<char, f64>,
    reference: ReferenceDistribution,
    base: LogBase,
}

impl RelativeEntropy {
    /// Estimator against the domain-label reference distribution.
    pub fn new(sequence: &str) -> Result<Self> {
        Self::with_reference(sequence, ReferenceDistribution::domain_labels())
    }

    pub fn with_reference(sequence: &str, reference: ReferenceDistribution) -> Result<Self> {
        // Report the first offending symbol in input order.
        if let Some(symbol) = sequence.chars().find(|&c| !reference.contains(c)) {
            return Err(EntropyError::UnsupportedSymbol(symbol));
        }
        let dataset = SymbolCounts::from_chars(sequence);
        let expected = dataset
            .counts
            .keys()
            .filter_map(|&s| reference.probability(s).map(|q| (s, q)))
            .collect();
        Ok(Self {
            dataset,
            expected,
            reference,
            base: LogBase::default(),
        })
    }

    /// Set logarithm base (default 2)
    pub fn with_base(mut self, base: LogBase) -> Self {
        self.base = base;
        self
    }

    /// Reference distribution the estimator was validated against.
    pub fn reference(&self) -> ReferenceDistribution {
        self.reference
    }
}

impl CrossEntropy<ReferenceDistribution> for RelativeEntropy {
    /// Cross-entropy H(P, Q) = -Σ_s p_s log_b q_s of the observed symbols against `other`.
    /// Against the estimator's own reference, D(P||Q) = H(P, Q) - H(P).
    /// A symbol missing from `other` has q_s = 0 and makes the result infinite.
    fn cross_entropy(&self, other: &ReferenceDistribution) -> f64 {
        if self.dataset.is_empty() {
            return 0.0;
        }
        let p = self.dataset.probabilities();
        let log_q: Array1<f64> = self
            .dataset
            .dist
            .keys()
            .map(|&s| self.base.log(other.probability(s).unwrap_or(0.0)))
            .collect();
        -p.dot(&log_q)
    }
}

impl GlobalValue for RelativeEntropy {
    fn global_value(&self) -> f64 {
        if self.dataset.is_empty() {
            return 0.0;
        }
        let mut d = 0.0_f64;
        for (symbol, &observed) in self.dataset.dist.iter() {
            let expected = self.expected[symbol];
            d += observed * self.base.log(observed / expected);
        }
        d
    }
}

impl LocalValues for RelativeEntropy {
    /// Pointwise log-ratio log_b(p(x) / q(x)) for each position.
    fn local_values(&self) -> Array1<f64> {
        self.dataset
            .data
            .iter()
            .map(|s| self.base.log(self.dataset.dist[s] / self.expected[s]))
            .collect()
    }
}
