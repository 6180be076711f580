//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.

use proptest::prelude::*;
use zia::inspect::{cramers_v, yules_y};
use zia::{
    ZiAnalysisConfigBuilder, ZiAssociation, ZiColumn, ZiCorrelationCalculator,
    ZiCorrelationMethod, ZiDiagonalPolicy, ZiError, ZiRankMethod, ZiTable,
};

fn categorical() -> ZiTable {
    ZiTable::new(vec![
        ZiColumn::utf8("f1", vec![Some("a"), Some("a"), Some("b"), Some("b")]),
        ZiColumn::utf8("spread", vec![Some("x"), Some("y"), Some("x"), Some("y")]),
        ZiColumn::utf8("linked", vec![Some("x"), Some("x"), Some("y"), Some("y")]),
        ZiColumn::utf8("constant", vec![Some("k"), Some("k"), Some("k"), Some("k")]),
    ])
    .unwrap()
}

fn numeric() -> ZiTable {
    ZiTable::new(vec![
        ZiColumn::float64("x", vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)]),
        ZiColumn::int64("y", vec![Some(1), Some(3), Some(2), Some(5), Some(4)]),
        ZiColumn::float64("z", vec![Some(5.0), Some(4.0), None, Some(2.0), Some(1.0)]),
        ZiColumn::utf8("label", vec![Some("a"), Some("b"), Some("c"), Some("d"), Some("e")]),
    ])
    .unwrap()
}

#[test]
fn test_cramers_v_independent_and_associated() {
    let calculator = ZiCorrelationCalculator::new();
    let table = categorical();

    let low = calculator.cramers_v(&table, "f1", "spread").unwrap();
    let high = calculator.cramers_v(&table, "f1", "linked").unwrap();
    assert!(low < 1e-12, "low = {}", low);
    assert!((high - 1.0).abs() < 1e-12, "high = {}", high);
}

#[test]
fn test_cramers_v_degenerate_column() {
    let err = ZiCorrelationCalculator::new()
        .cramers_v(&categorical(), "f1", "constant")
        .unwrap_err();
    assert!(err.is_degenerate());
    assert!(err.to_string().contains("'f1' vs 'constant'"));
}

#[test]
fn test_cramers_v_matrix_computed_diagonal() {
    let matrix = ZiCorrelationCalculator::new()
        .cramers_v_matrix(&categorical(), &["f1", "spread", "linked"])
        .unwrap();

    assert_eq!(matrix.measure(), "cramers_v");
    for i in 0..3 {
        assert!((matrix.get(i, i).unwrap() - 1.0).abs() < 1e-12);
    }
    assert_eq!(matrix.value("f1", "linked"), matrix.value("linked", "f1"));
    assert!(matrix.value("spread", "f1").unwrap() < 1e-12);
}

#[test]
fn test_cramers_v_matrix_degenerate_column_fails() {
    let err = ZiCorrelationCalculator::new()
        .cramers_v_matrix(&categorical(), &["f1", "constant"])
        .unwrap_err();
    assert!(err.is_degenerate());
}

#[test]
fn test_cramers_v_matrix_fixed_diagonal() {
    let config = ZiAnalysisConfigBuilder::new()
        .diagonal(ZiDiagonalPolicy::Fixed(1.0))
        .build()
        .unwrap();
    let matrix = ZiCorrelationCalculator::with_config(config)
        .unwrap()
        .cramers_v_matrix(&categorical(), &["f1", "linked"])
        .unwrap();
    assert_eq!(matrix.get(0, 0), Some(1.0));
    assert_eq!(matrix.len(), 2);
}

#[test]
fn test_yules_y_example() {
    let y = yules_y(&[0, 1, 1, 0, 1], &[0, 0, 1, 1, 1]);
    // c11 = 1, c12 = 1, c21 = 1, c22 = 2
    let (c11, c12, c21, c22) = (1.0f64, 1.0f64, 1.0f64, 2.0f64);
    let expected = ((c11 * c22).sqrt() - (c12 * c21).sqrt()) / ((c11 * c22).sqrt() + (c12 * c21).sqrt());
    assert!((y.value().unwrap() - expected).abs() < 1e-12);
}

#[test]
fn test_yules_y_on_table_not_applicable() {
    let calculator = ZiCorrelationCalculator::new();
    let result = calculator.yules_y(&categorical(), "f1", "constant").unwrap();
    assert!(matches!(result, ZiAssociation::NotApplicable { .. }));

    let ok = calculator.yules_y(&categorical(), "f1", "linked").unwrap();
    assert_eq!(ok, ZiAssociation::Value(1.0));
}

#[test]
fn test_pearson_and_rank_on_table() {
    let calculator = ZiCorrelationCalculator::new();
    let table = numeric();

    assert!((calculator.pearson(&table, "x", "y").unwrap() - 0.8).abs() < 1e-12);
    assert!((calculator.pearson(&table, "x", "z").unwrap() + 1.0).abs() < 1e-12);
    let tau = calculator
        .rank_correlation(&table, "x", "y", ZiRankMethod::Kendall)
        .unwrap();
    assert!((tau - 0.6).abs() < 1e-12);
    let rho = calculator
        .rank_correlation(&table, "x", "y", ZiRankMethod::Spearman)
        .unwrap();
    assert!((rho - 0.8).abs() < 1e-12);
}

#[test]
fn test_non_numeric_column_rejected() {
    let err = ZiCorrelationCalculator::new()
        .pearson(&numeric(), "x", "label")
        .unwrap_err();
    assert!(matches!(err, ZiError::Schema { .. }));
}

#[test]
fn test_correlation_matrix_uses_configured_method() {
    let config = ZiAnalysisConfigBuilder::new()
        .method(ZiCorrelationMethod::Spearman)
        .build()
        .unwrap();
    let matrix = ZiCorrelationCalculator::with_config(config)
        .unwrap()
        .correlation_matrix(&numeric(), &["x", "y", "z"])
        .unwrap();

    assert_eq!(matrix.measure(), "spearman");
    assert!((matrix.value("x", "z").unwrap() + 1.0).abs() < 1e-12);
    assert!((matrix.get(1, 1).unwrap() - 1.0).abs() < 1e-12);
}

fn category_pairs() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    prop::collection::vec((0u8..4, 0u8..3), 2..120).prop_map(|pairs| pairs.into_iter().unzip())
}

proptest! {
    #[test]
    fn prop_cramers_v_in_unit_interval((f1, f2) in category_pairs()) {
        match cramers_v(&f1, &f2) {
            Ok(v) => prop_assert!((0.0..=1.0).contains(&v), "v = {}", v),
            Err(err) => prop_assert!(err.is_degenerate()),
        }
    }

    #[test]
    fn prop_cramers_v_symmetric((f1, f2) in category_pairs()) {
        match (cramers_v(&f1, &f2), cramers_v(&f2, &f1)) {
            (Ok(a), Ok(b)) => prop_assert!((a - b).abs() < 1e-12, "{} vs {}", a, b),
            (Err(a), Err(b)) => prop_assert!(a.is_degenerate() && b.is_degenerate()),
            other => prop_assert!(false, "asymmetric outcome {:?}", other),
        }
    }

    #[test]
    fn prop_yules_y_applicability((f1, f2) in category_pairs()) {
        let dichotomous = |v: &[u8]| v.iter().collect::<std::collections::BTreeSet<_>>().len() == 2;
        let y = yules_y(&f1, &f2);
        prop_assert_eq!(y.is_applicable(), dichotomous(&f1) && dichotomous(&f2));
        if let Some(value) = y.value() {
            prop_assert!((-1.0..=1.0).contains(&value));
        }
    }
}
