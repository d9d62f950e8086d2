// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use labelentropy::{EntropyEngine, EntropyError, LogBase, MeasureKind, Result};
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTED_CALLS: AtomicUsize = AtomicUsize::new(0);

/// Number of distinct symbols, as a stand-in for an extension measure.
fn distinct_symbols(sequence: &str, _base: LogBase) -> Result<f64> {
    let mut chars: Vec<char> = sequence.chars().collect();
    chars.sort_unstable();
    chars.dedup();
    Ok(chars.len() as f64)
}

/// Records every evaluation in `COUNTED_CALLS`.
fn counted_length(sequence: &str, _base: LogBase) -> Result<f64> {
    COUNTED_CALLS.fetch_add(1, Ordering::SeqCst);
    Ok(sequence.chars().count() as f64)
}

#[rstest]
#[case(MeasureKind::Metric, "Metric")]
#[case(MeasureKind::Relative, "Relative")]
#[case(MeasureKind::Shannon, "Shannon")]
fn measure_names_are_stable(#[case] kind: MeasureKind, #[case] name: &str) {
    assert_eq!(kind.name(), name);
    assert_eq!(kind.to_string(), name);
    assert_eq!(name.parse::<MeasureKind>().unwrap(), kind);
}

#[test]
fn unknown_measure_name() {
    assert_eq!(
        "Renyi".parse::<MeasureKind>().unwrap_err(),
        EntropyError::UnknownMeasure("Renyi".to_string())
    );
    assert_eq!(
        EntropyEngine::new().evaluate("shannon", "abc").unwrap_err(),
        EntropyError::UnknownMeasure("shannon".to_string())
    );
}

#[test]
fn only_relative_requires_reference() {
    let requiring: Vec<MeasureKind> = MeasureKind::ALL
        .into_iter()
        .filter(|k| k.requires_reference())
        .collect();
    assert_eq!(requiring, vec![MeasureKind::Relative]);
}

#[test]
fn engine_registers_every_kind() {
    let engine = EntropyEngine::new();
    assert_eq!(engine.measure_names(), vec!["Metric", "Relative", "Shannon"]);
    for kind in MeasureKind::ALL {
        assert_eq!(
            engine.evaluate(kind.name(), "google").unwrap(),
            kind.evaluate("google", LogBase::BITS).unwrap()
        );
    }
}

#[test_log::test]
fn registered_measure_joins_batch() {
    let mut engine = EntropyEngine::new();
    engine.register("Distinct", distinct_symbols).unwrap();

    let values = engine.calculate("google").unwrap();
    assert_eq!(values.len(), 4);
    assert_abs_diff_eq!(values.get("Distinct").unwrap(), 4.0);
    assert!(values.contains("Shannon"));
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut engine = EntropyEngine::new();
    assert_eq!(
        engine.register("Shannon", distinct_symbols).unwrap_err(),
        EntropyError::DuplicateMeasure("Shannon".to_string())
    );
    assert_eq!(engine.measure_names().len(), 3);
}

#[test_log::test]
fn unsupported_symbol_rejected_before_any_measure_runs() {
    let mut engine = EntropyEngine::new();
    engine.register("Counted", counted_length).unwrap();

    assert_eq!(
        engine.calculate("Google").unwrap_err(),
        EntropyError::UnsupportedSymbol('G')
    );
    assert_eq!(COUNTED_CALLS.load(Ordering::SeqCst), 0);

    let values = engine.calculate("google").unwrap();
    assert_eq!(values.get("Counted"), Some(6.0));
    assert_eq!(COUNTED_CALLS.load(Ordering::SeqCst), 1);

    // Relative is the only built-in that restricts the alphabet.
    assert_eq!(engine.evaluate("Counted", "G!").unwrap(), 2.0);
    assert_eq!(engine.evaluate("Shannon", "G!").unwrap(), 1.0);
}
