//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.

use zia::{ZiCategory, ZiColumn, ZiDType, ZiMetric, ZiProfiler, ZiTable};

fn mixed() -> ZiTable {
    ZiTable::new(vec![
        ZiColumn::float64(
            "amount",
            vec![Some(10.0), None, Some(20.0), Some(f64::NAN), Some(30.0), Some(40.0)],
        ),
        ZiColumn::utf8(
            "segment",
            vec![Some("retail"), Some("b2b"), None, Some("retail"), Some("retail"), Some("b2b")],
        ),
    ])
    .unwrap()
}

#[test]
fn test_profile_numeric_and_categorical_columns() {
    let report = ZiProfiler::new().profile(&mixed()).unwrap();
    assert_eq!(report.total_records, 6);
    assert_eq!(report.total_features, 2);

    let amount = report.feature("amount").unwrap();
    assert_eq!(amount.dtype, ZiDType::Float64);
    assert_eq!(amount.na_count, 2);
    assert!((amount.mean.value().unwrap() - 25.0).abs() < 1e-12);
    let expected_std = (500.0f64 / 3.0).sqrt();
    assert!((amount.std.value().unwrap() - expected_std).abs() < 1e-9);
    assert_eq!(amount.mode, ZiMetric::NotApplicable);
    assert_eq!(amount.nunique, 4);

    let segment = report.feature("segment").unwrap();
    assert_eq!(segment.dtype, ZiDType::Utf8);
    assert_eq!(segment.na_count, 1);
    assert_eq!(segment.mean, ZiMetric::NotApplicable);
    assert_eq!(segment.std, ZiMetric::NotApplicable);
    assert_eq!(segment.mode, ZiMetric::Value(ZiCategory::from("retail")));
    assert_eq!(segment.nunique, 2);
    assert!((segment.distinctness - 2.0 / 6.0).abs() < 1e-12);
}

#[test]
fn test_profile_selected_columns() {
    let report = ZiProfiler::new()
        .profile_columns(&mixed(), &["segment"])
        .unwrap();
    assert_eq!(report.features.len(), 1);
    assert!(report.feature("amount").is_none());
    assert!(ZiProfiler::new().profile_columns(&mixed(), &["missing"]).is_err());
}

#[test]
fn test_boolean_column_is_numeric_with_mode() {
    let table = ZiTable::new(vec![ZiColumn::boolean(
        "active",
        vec![Some(true), Some(true), Some(false), None],
    )])
    .unwrap();
    let profile = &ZiProfiler::new().profile(&table).unwrap().features[0];
    assert!((profile.mean.value().unwrap() - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(profile.mode, ZiMetric::Value(ZiCategory::Bool(true)));
}

#[test]
fn test_empty_table_distinctness_is_nan() {
    let table = ZiTable::new(vec![ZiColumn::int64("n", vec![])]).unwrap();
    let report = ZiProfiler::new().profile(&table).unwrap();
    assert!(report.features[0].distinctness.is_nan());
    assert_eq!(report.features[0].mode, ZiMetric::NotApplicable);
}

#[test]
fn test_report_json_uses_dash_marker() {
    let json = ZiProfiler::new().profile(&mixed()).unwrap().to_json();
    assert_eq!(json["features"][0]["mode"], "-");
    assert_eq!(json["features"][1]["mean"], "-");
    assert_eq!(json["features"][1]["mode"], "retail");
    assert_eq!(json["features"][0]["na_count"], 2);
}
