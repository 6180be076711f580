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

//! # Zia Core Library
//!
//! Zia computes pairwise association measures between the columns of an
//! in-memory table and profiles each column, for exploratory analysis ahead
//! of modeling.
//!
//! ## Module Overview
//!
//! - **table**: `ZiTable`, an arrow2-backed column-oriented table
//! - **category**: `ZiCategory`, the ordered key of categorical values
//! - **ingest**: Table construction from JSON rows, JSONL and CSV
//! - **inspect**: Contingency tables, Cramér's V, Yule's Y, Pearson,
//!   Spearman and Kendall correlation, correlation matrices and profiling
//! - **config**: Analysis configuration loaded from JSON or YAML
//! - **errors**: `ZiError` and the crate `Result` alias
//!
//! ## Feature Flags
//!
//! - `csv`: CSV ingestion
//! - `parallel`: Evaluates matrix pairs on the rayon pool
//! - `full`: Enables all features
//!
//! ## Quick Start
//!
//! ```rust
//! use zia::{ZiColumn, ZiCorrelationCalculator, ZiProfiler, ZiTable};
//!
//! let table = ZiTable::new(vec![
//!     ZiColumn::utf8("plan", vec![Some("free"), Some("free"), Some("pro"), Some("pro")]),
//!     ZiColumn::utf8("churned", vec![Some("no"), Some("no"), Some("yes"), Some("yes")]),
//! ])?;
//!
//! let calculator = ZiCorrelationCalculator::new();
//! let v = calculator.cramers_v(&table, "plan", "churned")?;
//! let report = ZiProfiler::new().profile(&table)?;
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, ZiError>`. Yule's Y reports
//! unsuitable input as a `ZiAssociation::NotApplicable` value instead.

#![allow(non_snake_case)]

pub mod errors;
pub mod category;
pub mod config;
pub mod table;
pub mod ingest;
pub mod inspect;

pub use errors::{Result, ZiError};
pub use category::ZiCategory;
pub use config::{
    ZiAnalysisConfig, ZiAnalysisConfigBuilder, ZiCorrelationMethod, ZiDiagonalPolicy,
    ZiMissingPolicy, ZiRankMethod,
};
pub use table::{ZiColumn, ZiColumnData, ZiColumnView, ZiDType, ZiTable};
#[cfg(feature = "csv")]
pub use ingest::ZiCsvOptions;
pub use ingest::{ZiTableFormat, ZiTableLoader};
pub use inspect::{
    ZiAssociation, ZiContingencyTable, ZiCorrelationCalculator, ZiCorrelationMatrix,
    ZiFeatureProfile, ZiMetric, ZiProfileReport, ZiProfiler,
};
