//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.

use std::io::Write;

use serde_json::json;
use tempfile::Builder;
use zia::{ZiDType, ZiError, ZiTableLoader};

#[test]
fn test_json_rows_build_typed_table() {
    let rows = vec![
        json!({"age": 31, "city": "Oslo", "score": 0.5}),
        json!({"age": 45, "city": "Bergen", "score": 1}),
        json!({"age": null, "city": "Oslo"}),
    ];
    let table = ZiTableLoader::from_json_rows(&rows).unwrap();

    assert_eq!(table.num_rows(), 3);
    assert_eq!(table.dtype("age").unwrap(), ZiDType::Int64);
    assert_eq!(table.dtype("city").unwrap(), ZiDType::Utf8);
    assert_eq!(table.dtype("score").unwrap(), ZiDType::Float64);
    assert_eq!(table.numeric("score").unwrap(), vec![Some(0.5), Some(1.0), None]);
}

#[test]
fn test_load_csv_file() {
    let mut file = Builder::new().suffix(".csv").tempfile().expect("tmp");
    file.write_all(b"city,visits\nOslo,3\nBergen,\nOslo,5\n").expect("write");
    file.flush().expect("flush");

    let table = ZiTableLoader::load_auto(file.path()).unwrap();
    assert_eq!(table.column_names(), vec!["city", "visits"]);
    assert_eq!(table.dtype("visits").unwrap(), ZiDType::Int64);
    assert_eq!(table.column("visits").unwrap().missing_count(), 1);
}

#[test]
fn test_load_jsonl_file() {
    let mut file = Builder::new().suffix(".jsonl").tempfile().expect("tmp");
    file.write_all(b"{\"flag\": true}\n{\"flag\": false}\n").expect("write");
    file.flush().expect("flush");

    let table = ZiTableLoader::load_auto(file.path()).unwrap();
    assert_eq!(table.dtype("flag").unwrap(), ZiDType::Bool);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = ZiTableLoader::load_auto("/nonexistent/zia/table.csv").unwrap_err();
    assert!(matches!(err, ZiError::Io(_)));
}
