//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! Column type inference for untyped input.
//!
//! Text cells try `bool`, then `int64`, then `float64`, falling back to
//! `utf8`. JSON cells follow the same order using the JSON value kind.
//! A column with no present value is typed `float64`.

use serde_json::Value;

use crate::table::{ZiColumn, ZiColumnData};

fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Parses every present cell with `parse`, or `None` if any cell fails.
fn parse_all<T, F>(raw: &[Option<String>], parse: F) -> Option<Vec<Option<T>>>
where
    F: Fn(&str) -> Option<T>,
{
    raw.iter()
        .map(|cell| match cell {
            Some(text) => parse(text.trim()).map(Some),
            None => Some(None),
        })
        .collect()
}

/// Infers the narrowest column type that holds every present text cell.
pub fn infer_text_column(name: String, raw: Vec<Option<String>>) -> ZiColumn {
    if raw.iter().all(Option::is_none) {
        return ZiColumn::new(name, ZiColumnData::Float64(vec![None; raw.len()]));
    }

    let data = if let Some(values) = parse_all(&raw, parse_bool) {
        ZiColumnData::Bool(values)
    } else if let Some(values) = parse_all(&raw, |s| s.parse::<i64>().ok()) {
        ZiColumnData::Int64(values)
    } else if let Some(values) = parse_all(&raw, |s| s.parse::<f64>().ok()) {
        ZiColumnData::Float64(values)
    } else {
        ZiColumnData::Utf8(raw)
    };
    ZiColumn::new(name, data)
}

/// Infers a column type from JSON cells; `None` and `null` are missing.
pub fn infer_json_column(name: String, raw: Vec<Option<Value>>) -> ZiColumn {
    let present: Vec<&Value> = raw.iter().flatten().filter(|v| !v.is_null()).collect();
    let cells = raw.iter().map(|cell| cell.as_ref().filter(|v| !v.is_null()));

    let data = if present.is_empty() {
        ZiColumnData::Float64(vec![None; raw.len()])
    } else if present.iter().all(|v| v.is_boolean()) {
        ZiColumnData::Bool(cells.map(|c| c.and_then(Value::as_bool)).collect())
    } else if present.iter().all(|v| v.is_i64()) {
        ZiColumnData::Int64(cells.map(|c| c.and_then(Value::as_i64)).collect())
    } else if present.iter().all(|v| v.is_number()) {
        ZiColumnData::Float64(cells.map(|c| c.and_then(Value::as_f64)).collect())
    } else {
        ZiColumnData::Utf8(
            cells
                .map(|c| {
                    c.map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                })
                .collect(),
        )
    };
    ZiColumn::new(name, data)
}
