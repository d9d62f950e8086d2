// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use labelentropy::{EntropyEngine, EntropyError, LogBase};
use rstest::rstest;

#[rstest]
#[case(1.0)]
#[case(0.0)]
#[case(-2.0)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn invalid_bases_are_rejected(#[case] base: f64) {
    assert_eq!(LogBase::new(base), Err(EntropyError::InvalidBase(base)));
    assert!(LogBase::try_from(base).is_err());
}

#[test]
fn nan_base_is_rejected() {
    assert!(matches!(LogBase::new(f64::NAN), Err(EntropyError::InvalidBase(b)) if b.is_nan()));
}

#[test]
fn default_base_is_bits() {
    assert_eq!(LogBase::default(), LogBase::BITS);
    assert_eq!(EntropyEngine::new().base(), LogBase::BITS);
    assert_eq!(LogBase::BITS.value(), 2.0);
}

#[rstest]
#[case(LogBase::BITS, 8.0, 3.0)]
#[case(LogBase::BANS, 1000.0, 3.0)]
#[case(LogBase::NATS, std::f64::consts::E, 1.0)]
fn log_in_base(#[case] base: LogBase, #[case] x: f64, #[case] expected: f64) {
    assert_abs_diff_eq!(base.log(x), expected, epsilon = 1e-12);
}

#[test]
fn custom_base() {
    let base = LogBase::new(4.0).unwrap();
    let engine = EntropyEngine::new().with_base(base);
    // Four equiprobable symbols carry exactly one base-4 digit.
    assert_abs_diff_eq!(engine.shannon_entropy("abcd"), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(engine.metric_entropy("abcd"), 0.25, epsilon = 1e-12);
}
