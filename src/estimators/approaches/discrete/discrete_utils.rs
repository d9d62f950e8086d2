// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use std::collections::BTreeMap;

/// Shared dataset and utilities for discrete (histogram-based) entropy estimators.
///
/// Counts live in an ordered map so that sums over distinct symbols always run in the
/// same order: two datasets built from permutations of one sequence yield bit-identical
/// measures.
#[derive(Debug, Clone)]
pub struct SymbolCounts<S> {
    /// Original symbol sequence
    pub data: Vec<S>,
    /// Counts per unique symbol
    pub counts: BTreeMap<S, usize>,
    /// Total number of observations
    pub n: usize,
    /// Number of unique symbols
    pub k: usize,
    /// Probability dictionary p(x) for each unique symbol
    pub dist: BTreeMap<S, f64>,
}

impl<S: Ord + Copy> SymbolCounts<S> {
    /// Build a SymbolCounts from a raw symbol sequence
    pub fn from_data(data: Vec<S>) -> Self {
        let n = data.len();
        let counts = count_frequencies(&data);
        let k = counts.len();
        let n_f = n as f64;
        let dist = counts
            .iter()
            .map(|(&symbol, &cnt)| (symbol, cnt as f64 / n_f))
            .collect();
        Self {
            data,
            counts,
            n,
            k,
            dist,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Map each sample to its probability using the cached distribution dictionary
    pub fn map_probs(&self) -> Array1<f64> {
        self.data.iter().map(|v| self.dist[v]).collect()
    }

    /// Empirical probabilities of the distinct symbols, in symbol order.
    pub fn probabilities(&self) -> Array1<f64> {
        self.dist.values().copied().collect()
    }
}

impl SymbolCounts<char> {
    /// Build a SymbolCounts over the characters of a string.
    pub fn from_chars(sequence: &str) -> Self {
        Self::from_data(sequence.chars().collect())
    }
}

/// Helper function to count the occurrences of each symbol in a sequence.
pub fn count_frequencies<S: Ord + Copy>(data: &[S]) -> BTreeMap<S, usize> {
    let mut frequency_map = BTreeMap::new();
    for &value in data {
        *frequency_map.entry(value).or_insert(0) += 1;
    }
    frequency_map
}
