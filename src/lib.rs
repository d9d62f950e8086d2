// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # labelentropy
//!
//! Information-theoretic measures over short symbol sequences, such as the characters
//! of a domain-name label. The values feed DGA-style detectors that flag labels whose
//! character distribution strays from natural-language domain names.
//!
//! ## Quick Start
//!
//! ```rust
//! use labelentropy::EntropyEngine;
//!
//! let engine = EntropyEngine::new();
//! let values = engine.calculate("google").unwrap();
//!
//! let shannon = values.get("Shannon").unwrap();
//! let metric = values.get("Metric").unwrap();
//! assert_eq!(metric, shannon / 6.0);
//! assert!(values.get("Relative").unwrap().is_finite());
//! ```
//!
//! ## Measures
//!
//! | Measure | Name | Symbols | Fails on |
//! |---------|------|---------|----------|
//! | Shannon entropy | `"Shannon"` | any | never |
//! | Metric entropy | `"Metric"` | any | never |
//! | Relative entropy (KL divergence) | `"Relative"` | reference alphabet | unsupported symbol |
//!
//! Every measure returns `0.0` for an empty sequence.
//!
//! ## Architecture
//!
//! 1. **Reference layer**: the fixed character distribution of domain labels
//!    ([`ReferenceDistribution`])
//! 2. **Estimators**: pure estimators over symbol counts
//!    ([`ShannonEntropy`], [`MetricEntropy`], [`RelativeEntropy`])
//! 3. **Registry**: named measure functions ([`MeasureKind`], [`MeasureFn`])
//! 4. **Engine**: dispatch over the registry at a configurable base ([`EntropyEngine`])
//!
//! ## Logarithm Base
//!
//! Values are in bits by default. Use [`LogBase`] to select nats, bans or any other
//! valid base.

pub mod error;
pub mod estimators;

pub use error::{EntropyError, Result};
pub use estimators::approaches::discrete::{MetricEntropy, RelativeEntropy, ShannonEntropy};
pub use estimators::entropy::{EntropyEngine, Measurements};
pub use estimators::measure::{MeasureFn, MeasureKind};
pub use estimators::reference::ReferenceDistribution;
pub use estimators::traits::{CrossEntropy, GlobalValue, LocalValues};
pub use estimators::LogBase;
