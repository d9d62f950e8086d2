// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use labelentropy::ReferenceDistribution;

use crate::test_helpers::LABEL_ALPHABET;

#[test]
fn reference_is_valid_distribution() {
    let reference = ReferenceDistribution::domain_labels();
    assert!(reference.is_valid());
    assert_abs_diff_eq!(reference.total(), 1.0, epsilon = 1e-9);
    assert!(reference.iter().all(|(_, p)| p >= 0.0));
}

#[test]
fn reference_covers_label_alphabet() {
    let reference = ReferenceDistribution::default();
    assert_eq!(reference.len(), LABEL_ALPHABET.chars().count());
    for symbol in LABEL_ALPHABET.chars() {
        assert!(reference.contains(symbol), "missing {symbol:?}");
    }
    let mut symbols: Vec<char> = reference.symbols().collect();
    let mut alphabet: Vec<char> = LABEL_ALPHABET.chars().collect();
    symbols.sort_unstable();
    alphabet.sort_unstable();
    assert_eq!(symbols, alphabet);
}

#[test]
fn reference_lookup() {
    let reference = ReferenceDistribution::domain_labels();
    assert_eq!(reference.probability('o'), Some(0.09413783122067709));
    assert_eq!(reference.probability('_'), Some(9.04562613824129e-06));
    assert_eq!(reference.probability('-'), Some(0.013342298553905901));
    assert_eq!(reference.probability('.'), None);
    assert_eq!(reference.probability('A'), None);
    assert!(!reference.contains(' '));
}

#[test]
fn reference_most_frequent_symbol_is_o() {
    let (symbol, _) = ReferenceDistribution::domain_labels()
        .iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    assert_eq!(symbol, 'o');
}

static UNSORTED: [(char, f64); 2] = [('b', 0.5), ('a', 0.5)];
static SHORT: [(char, f64); 2] = [('a', 0.5), ('b', 0.25)];
static NEGATIVE: [(char, f64); 2] = [('a', 1.5), ('b', -0.5)];

#[test]
fn invalid_custom_tables_are_rejected() {
    assert!(ReferenceDistribution::from_static(&UNSORTED).is_none());
    assert!(ReferenceDistribution::from_static(&SHORT).is_none());
    assert!(ReferenceDistribution::from_static(&NEGATIVE).is_none());
    assert!(ReferenceDistribution::from_static(&[]).is_none());
}
