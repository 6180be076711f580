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

//! # Data Ingestion Module
//!
//! Builds [`ZiTable`]s from untyped input, inferring one type per column.
//!
//! ## Supported Input Formats
//!
//! - **JSON rows**: a slice of JSON objects, one per row
//! - **JSONL**: line-delimited JSON objects
//! - **CSV**: delimited text with optional headers (`csv` feature)
//!
//! ## Usage
//!
//! ```rust
//! use zia::ingest::ZiTableLoader;
//!
//! let table = ZiTableLoader::load_auto("data/customers.csv")?;
//! ```

pub mod infer;
pub mod json;
#[cfg(feature = "csv")]
pub mod delimited;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::errors::{Result, ZiError};
use crate::table::ZiTable;

#[cfg(feature = "csv")]
pub use delimited::ZiCsvOptions;
pub use infer::{infer_json_column, infer_text_column};

/// Formats understood by [`ZiTableLoader`].
#[derive(Clone, Debug)]
pub enum ZiTableFormat {
    Jsonl,
    #[cfg(feature = "csv")]
    Csv(ZiCsvOptions),
}

/// Loading façade over the ingestion helpers.
pub struct ZiTableLoader;

impl ZiTableLoader {
    /// Infers a format from the file extension.
    pub fn detect_format(path: impl AsRef<Path>) -> Option<ZiTableFormat> {
        let ext = path
            .as_ref()
            .extension()?
            .to_string_lossy()
            .to_ascii_lowercase();
        match ext.as_str() {
            "jsonl" | "ndjson" => Some(ZiTableFormat::Jsonl),
            #[cfg(feature = "csv")]
            "csv" => Some(ZiTableFormat::Csv(ZiCsvOptions::default())),
            #[cfg(feature = "csv")]
            "tsv" => Some(ZiTableFormat::Csv(ZiCsvOptions {
                delimiter: b'\t',
                ..Default::default()
            })),
            _ => None,
        }
    }

    pub fn load(path: impl AsRef<Path>, format: ZiTableFormat) -> Result<ZiTable> {
        match format {
            ZiTableFormat::Jsonl => {
                let file = File::open(path)?;
                json::table_from_jsonl(BufReader::new(file))
            }
            #[cfg(feature = "csv")]
            ZiTableFormat::Csv(options) => delimited::table_from_csv_path(path, &options),
        }
    }

    pub fn load_auto(path: impl AsRef<Path>) -> Result<ZiTable> {
        let format = Self::detect_format(&path)
            .ok_or_else(|| ZiError::validation("unable to detect format from extension"))?;
        Self::load(path, format)
    }

    pub fn from_json_rows(rows: &[Value]) -> Result<ZiTable> {
        json::table_from_rows(rows)
    }
}
