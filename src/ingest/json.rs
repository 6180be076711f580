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

use std::io::BufRead;

use serde_json::Value;

use crate::errors::{Result, ZiError};
use crate::ingest::infer::infer_json_column;
use crate::table::ZiTable;

/// Builds a table from JSON objects, one object per row.
///
/// Columns appear in first-seen key order. A key absent from a row is a
/// missing value for that row.
pub fn table_from_rows(rows: &[Value]) -> Result<ZiTable> {
    let mut names: Vec<String> = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let object = row
            .as_object()
            .ok_or_else(|| ZiError::schema(format!("row {}: expected a JSON object", idx + 1)))?;
        for key in object.keys() {
            if !names.iter().any(|n| n == key) {
                names.push(key.clone());
            }
        }
    }

    let columns = names
        .into_iter()
        .map(|name| {
            let cells = rows.iter().map(|row| row.get(&name).cloned()).collect();
            infer_json_column(name, cells)
        })
        .collect();

    ZiTable::new(columns)
}

/// Builds a table from JSON lines. Blank lines are skipped.
pub fn table_from_jsonl<R: BufRead>(reader: R) -> Result<ZiTable> {
    let rows = reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(content) if content.trim().is_empty() => None,
            Ok(content) => Some(serde_json::from_str::<Value>(&content).map_err(|err| {
                ZiError::Serde(format!("line {}: {}", idx + 1, err))
            })),
            Err(err) => Some(Err(err.into())),
        })
        .collect::<Result<Vec<_>>>()?;
    table_from_rows(&rows)
}
