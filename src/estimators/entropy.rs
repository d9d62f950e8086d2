// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::{debug, trace};
use std::collections::HashMap;

use crate::error::{EntropyError, Result};
use crate::estimators::approaches::{MetricEntropy, ShannonEntropy};
use crate::estimators::base::LogBase;
use crate::estimators::measure::{MeasureFn, MeasureKind};
use crate::estimators::reference::ReferenceDistribution;
use crate::estimators::traits::GlobalValue;

/// Entropy engine: a registry of named measures evaluated at a configurable base.
///
/// The engine holds no per-call state. The reference distribution is a static table
/// and the registry is fixed after construction (or extended through
/// [`EntropyEngine::register`], which takes `&mut self`), so one engine can be shared
/// across threads.
///
/// # Example
///
/// ```rust
/// use labelentropy::{EntropyEngine, LogBase};
///
/// let engine = EntropyEngine::new().with_base(LogBase::NATS);
/// let h = engine.shannon_entropy("aab");
/// assert!((h - 0.6365141682948128).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct EntropyEngine {
    registry: HashMap<String, MeasureFn>,
    base: LogBase,
    data: Option<String>,
}

impl EntropyEngine {
    /// Creates an engine with every [`MeasureKind`] registered and base 2.
    pub fn new() -> Self {
        let reference = ReferenceDistribution::domain_labels();
        debug_assert!(
            reference.is_valid(),
            "reference distribution must be non-negative and sum to 1 (total = {})",
            reference.total()
        );

        let registry = MeasureKind::ALL
            .into_iter()
            .map(|kind| (kind.name().to_string(), kind.function()))
            .collect();
        debug!(
            "entropy engine created with {} measures over a {}-symbol reference",
            MeasureKind::ALL.len(),
            reference.len()
        );
        Self {
            registry,
            base: LogBase::default(),
            data: None,
        }
    }

    /// Set logarithm base used by every measure (default 2)
    pub fn with_base(mut self, base: LogBase) -> Self {
        self.base = base;
        self
    }

    /// Store a default payload for [`EntropyEngine::calculate_data`].
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn base(&self) -> LogBase {
        self.base
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Register an additional measure under a unique name.
    pub fn register(&mut self, name: impl Into<String>, measure: MeasureFn) -> Result<()> {
        let name = name.into();
        if self.registry.contains_key(&name) {
            return Err(EntropyError::DuplicateMeasure(name));
        }
        debug!("registering measure '{name}'");
        self.registry.insert(name, measure);
        Ok(())
    }

    /// Registered measure names, sorted.
    pub fn measure_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn shannon_entropy(&self, sequence: &str) -> f64 {
        ShannonEntropy::from_chars(sequence).with_base(self.base).global_value()
    }

    pub fn metric_entropy(&self, sequence: &str) -> f64 {
        MetricEntropy::from_chars(sequence).with_base(self.base).global_value()
    }

    /// Fails with [`EntropyError::UnsupportedSymbol`] when `sequence` holds a character
    /// outside the reference alphabet.
    pub fn relative_entropy(&self, sequence: &str) -> Result<f64> {
        MeasureKind::Relative.evaluate(sequence, self.base)
    }

    /// Evaluate one registered measure by name.
    pub fn evaluate(&self, name: &str, sequence: &str) -> Result<f64> {
        let measure = self
            .registry
            .get(name)
            .ok_or_else(|| EntropyError::UnknownMeasure(name.to_string()))?;
        measure(sequence, self.base)
    }

    /// Run every registered measure against `sequence`.
    ///
    /// All-or-nothing: the first failing measure aborts the batch and its error is
    /// returned, with no partial results. When a registered measure needs the reference
    /// alphabet, the input is checked against it before any measure runs.
    pub fn calculate(&self, sequence: &str) -> Result<Measurements> {
        if self.requires_reference() {
            self.check_alphabet(sequence)?;
        }
        let mut values = HashMap::with_capacity(self.registry.len());
        for (name, measure) in &self.registry {
            let value = measure(sequence, self.base)?;
            trace!("{name}({sequence:?}) = {value}");
            values.insert(name.clone(), value);
        }
        Ok(Measurements { values })
    }

    /// Whether any registered built-in measure only accepts reference symbols.
    fn requires_reference(&self) -> bool {
        self.registry
            .keys()
            .filter_map(|name| name.parse::<MeasureKind>().ok())
            .any(MeasureKind::requires_reference)
    }

    /// Fails on the first character of `sequence` outside the reference alphabet.
    fn check_alphabet(&self, sequence: &str) -> Result<()> {
        let reference = ReferenceDistribution::domain_labels();
        match sequence.chars().find(|&c| !reference.contains(c)) {
            Some(symbol) => {
                debug!("rejecting {sequence:?}: unsupported symbol {symbol:?}");
                Err(EntropyError::UnsupportedSymbol(symbol))
            }
            None => Ok(()),
        }
    }

    /// Run [`EntropyEngine::calculate`] on the stored payload.
    pub fn calculate_data(&self) -> Result<Measurements> {
        let data = self.data.as_deref().ok_or(EntropyError::NoData)?;
        self.calculate(data)
    }
}

impl Default for EntropyEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Batch result of [`EntropyEngine::calculate`]: measure name to value.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurements {
    values: HashMap<String, f64>,
}

impl Measurements {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn kind(&self, kind: MeasureKind) -> Option<f64> {
        self.get(kind.name())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }

    pub fn into_inner(self) -> HashMap<String, f64> {
        self.values
    }
}
