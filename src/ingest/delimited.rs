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

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::errors::{Result, ZiError};
use crate::ingest::infer::infer_text_column;
use crate::table::ZiTable;

/// Configuration for CSV ingestion.
#[derive(Clone, Debug)]
pub struct ZiCsvOptions {
    pub delimiter: u8,
    pub has_headers: bool,
    /// Cell texts read as missing values.
    pub null_values: Vec<String>,
}

impl Default for ZiCsvOptions {
    fn default() -> Self {
        ZiCsvOptions {
            delimiter: b',',
            has_headers: true,
            null_values: ["", "NA", "N/A", "NaN", "nan", "null", "NULL"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Reads CSV from any reader and infers one type per column.
///
/// Without headers, columns are named `column_0`, `column_1`, ...
pub fn table_from_csv_reader<R: Read>(reader: R, options: &ZiCsvOptions) -> Result<ZiTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        .from_reader(reader);

    let mut names: Vec<String> = if options.has_headers {
        reader.headers()?.iter().map(str::to_string).collect()
    } else {
        Vec::new()
    };
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];

    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        if names.is_empty() && !options.has_headers {
            names = (0..record.len()).map(|i| format!("column_{}", i)).collect();
            cells = vec![Vec::new(); names.len()];
        }
        if record.len() != names.len() {
            return Err(ZiError::schema(format!(
                "csv row {}: expected {} fields, found {}",
                row_idx + 1,
                names.len(),
                record.len()
            )));
        }
        for (column, field) in cells.iter_mut().zip(record.iter()) {
            let missing = options.null_values.iter().any(|n| n == field.trim());
            column.push(if missing { None } else { Some(field.to_string()) });
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| infer_text_column(name, raw))
        .collect();
    ZiTable::new(columns)
}

/// Reads a CSV file.
pub fn table_from_csv_path(path: impl AsRef<Path>, options: &ZiCsvOptions) -> Result<ZiTable> {
    let file = std::fs::File::open(path.as_ref())?;
    log::debug!(
        "ingest.csv: reading table - path={}",
        path.as_ref().display()
    );
    table_from_csv_reader(std::io::BufReader::new(file), options)
}
