//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.

use proptest::prelude::*;
use zia::{
    ZiAnalysisConfigBuilder, ZiCategory, ZiColumn, ZiContingencyTable, ZiCorrelationCalculator,
    ZiError, ZiMissingPolicy, ZiTable,
};

fn survey() -> ZiTable {
    ZiTable::new(vec![
        ZiColumn::utf8(
            "region",
            vec![Some("north"), Some("south"), Some("north"), None, Some("south"), Some("east")],
        ),
        ZiColumn::int64("tier", vec![Some(1), Some(2), Some(1), Some(2), None, Some(3)]),
    ])
    .unwrap()
}

#[test]
fn test_contingency_counts_sum_to_observations() {
    let f1 = ["a", "b", "a", "c", "b", "a"];
    let f2 = [1, 1, 2, 2, 1, 1];
    let f1: Vec<ZiCategory> = f1.iter().map(|v| ZiCategory::from(*v)).collect();
    let f2: Vec<ZiCategory> = f2.iter().map(|v| ZiCategory::from(*v as i64)).collect();

    let table = ZiContingencyTable::build(&f1, &f2, false).unwrap();
    assert_eq!(table.total(), 6.0);
    assert_eq!(table.shape(), (3, 2));
    assert_eq!(table.cell(&ZiCategory::from("a"), &ZiCategory::Int(1)), Some(2.0));
}

#[test]
fn test_table_level_drop_policy() {
    let calculator = ZiCorrelationCalculator::new();
    let table = calculator
        .contingency_table(&survey(), "region", "tier", false)
        .unwrap();

    // rows 4 (region missing) and 5 (tier missing) are excluded
    assert_eq!(table.total(), 4.0);
    assert_eq!(
        table.row_labels(),
        &[
            ZiCategory::from("east"),
            ZiCategory::from("north"),
            ZiCategory::from("south")
        ]
    );
    assert_eq!(table.cell(&ZiCategory::from("north"), &ZiCategory::Int(1)), Some(2.0));
}

#[test]
fn test_table_level_missing_as_category() {
    let config = ZiAnalysisConfigBuilder::new()
        .missing(ZiMissingPolicy::AsCategory)
        .build()
        .unwrap();
    let calculator = ZiCorrelationCalculator::with_config(config).unwrap();
    let table = calculator
        .contingency_table(&survey(), "region", "tier", true)
        .unwrap();

    assert_eq!(table.observations(), 6);
    assert_eq!(table.row_labels().last(), Some(&ZiCategory::Missing));
    assert_eq!(table.column_labels().last(), Some(&ZiCategory::Missing));
    assert!((table.total() - 1.0).abs() < 1e-12);
}

#[test]
fn test_unknown_column_is_schema_error() {
    let err = ZiCorrelationCalculator::new()
        .contingency_table(&survey(), "region", "nope", false)
        .unwrap_err();
    assert!(matches!(err, ZiError::Schema { .. }));
}

#[test]
fn test_malformed_json_table_is_rejected() {
    let payload = serde_json::json!({
        "row_labels": ["a", "b"],
        "column_labels": ["x", "y"],
        "cells": [1.0],
        "observations": 1,
        "normalized": false
    });
    assert!(serde_json::from_value::<ZiContingencyTable<ZiCategory>>(payload).is_err());

    let unsorted = serde_json::json!({
        "row_labels": ["b", "a"],
        "column_labels": ["x"],
        "cells": [1.0, 1.0],
        "observations": 2,
        "normalized": false
    });
    assert!(serde_json::from_value::<ZiContingencyTable<ZiCategory>>(unsorted).is_err());
}

#[test]
fn test_serialized_table_reloads() {
    let table = ZiCorrelationCalculator::new()
        .contingency_table(&survey(), "region", "tier", false)
        .unwrap();
    let restored: ZiContingencyTable<ZiCategory> = serde_json::from_value(table.to_json()).unwrap();
    assert_eq!(restored, table);
    assert!(zia::inspect::cramers_v_from_table(&restored).is_ok());
}

proptest! {
    #[test]
    fn prop_normalized_cells_sum_to_one(
        pairs in prop::collection::vec((0u8..5, 0u8..4), 1..200)
    ) {
        let (f1, f2): (Vec<u8>, Vec<u8>) = pairs.into_iter().unzip();
        let table = ZiContingencyTable::build(&f1, &f2, true).unwrap();
        prop_assert!((table.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_count_cells_sum_to_rows(
        pairs in prop::collection::vec((0u8..5, 0u8..4), 0..200)
    ) {
        let rows = pairs.len();
        let (f1, f2): (Vec<u8>, Vec<u8>) = pairs.into_iter().unzip();
        let table = ZiContingencyTable::build(&f1, &f2, false).unwrap();
        prop_assert_eq!(table.total(), rows as f64);
        let row_sum: f64 = table.row_totals().iter().sum();
        let column_sum: f64 = table.column_totals().iter().sum();
        prop_assert_eq!(row_sum, rows as f64);
        prop_assert_eq!(column_sum, rows as f64);
    }
}
