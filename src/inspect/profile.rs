//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.
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

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::Value;
use statrs::statistics::Statistics;

use crate::category::ZiCategory;
use crate::errors::Result;
use crate::table::{ZiColumnView, ZiDType, ZiTable};

/// Profile entry that only exists for some column types.
///
/// Serializes as the value itself, or `"-"` when not applicable.
#[derive(Clone, Debug, PartialEq)]
pub enum ZiMetric<T> {
    Value(T),
    NotApplicable,
}

impl<T> ZiMetric<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            ZiMetric::Value(v) => Some(v),
            ZiMetric::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, ZiMetric::Value(_))
    }
}

impl<T: Serialize> Serialize for ZiMetric<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ZiMetric::Value(v) => v.serialize(serializer),
            ZiMetric::NotApplicable => serializer.serialize_str("-"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZiFeatureProfile {
    pub feature: String,
    pub dtype: ZiDType,
    /// Total rows, missing included.
    pub value_count: usize,
    pub na_count: usize,
    pub mean: ZiMetric<f64>,
    /// Sample standard deviation.
    pub std: ZiMetric<f64>,
    pub mode: ZiMetric<ZiCategory>,
    /// Distinct non-missing values.
    pub nunique: usize,
    /// `nunique / value_count`; NaN for an empty table.
    pub distinctness: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ZiProfileReport {
    pub total_records: usize,
    pub total_features: usize,
    pub features: Vec<ZiFeatureProfile>,
}

impl ZiProfileReport {
    pub fn feature(&self, name: &str) -> Option<&ZiFeatureProfile> {
        self.features.iter().find(|p| p.feature == name)
    }

    #[allow(non_snake_case)]
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Descriptive per-column profiler.
#[derive(Clone, Debug, Default)]
pub struct ZiProfiler;

impl ZiProfiler {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self
    }

    /// Profiles every column of `table` in schema order.
    pub fn profile(&self, table: &ZiTable) -> Result<ZiProfileReport> {
        let features = table
            .columns()?
            .into_iter()
            .map(|(name, view)| self.profile_column(name, view, table.num_rows()))
            .collect::<Vec<_>>();

        log::debug!(
            "inspect.profile: table profiled - features={}, records={}",
            features.len(),
            table.num_rows()
        );

        Ok(ZiProfileReport {
            total_records: table.num_rows(),
            total_features: features.len(),
            features,
        })
    }

    /// Profiles the listed columns only.
    pub fn profile_columns(&self, table: &ZiTable, columns: &[&str]) -> Result<ZiProfileReport> {
        let features = columns
            .iter()
            .map(|name| Ok(self.profile_column(name, table.column(name)?, table.num_rows())))
            .collect::<Result<Vec<_>>>()?;

        Ok(ZiProfileReport {
            total_records: table.num_rows(),
            total_features: features.len(),
            features,
        })
    }

    fn profile_column(&self, name: &str, view: ZiColumnView<'_>, rows: usize) -> ZiFeatureProfile {
        let dtype = view.dtype();

        let (mean, std) = match view.numeric() {
            Ok(values) => {
                let present: Vec<f64> = values.into_iter().flatten().collect();
                (
                    ZiMetric::Value(present.iter().mean()),
                    ZiMetric::Value(present.iter().std_dev()),
                )
            }
            Err(_) => (ZiMetric::NotApplicable, ZiMetric::NotApplicable),
        };

        let mut counts: BTreeMap<ZiCategory, usize> = BTreeMap::new();
        for value in view.categories().into_iter().flatten() {
            *counts.entry(value).or_insert(0) += 1;
        }
        let nunique = counts.len();

        let mode = if dtype.is_float() {
            ZiMetric::NotApplicable
        } else {
            most_frequent(counts).map_or(ZiMetric::NotApplicable, ZiMetric::Value)
        };

        ZiFeatureProfile {
            feature: name.to_string(),
            dtype,
            value_count: rows,
            na_count: view.missing_count(),
            mean,
            std,
            mode,
            nunique,
            distinctness: nunique as f64 / rows as f64,
        }
    }
}

/// Most frequent key; ties resolve to the smallest key.
fn most_frequent(counts: BTreeMap<ZiCategory, usize>) -> Option<ZiCategory> {
    let mut best: Option<(ZiCategory, usize)> = None;
    for (value, count) in counts {
        if best.as_ref().map_or(true, |(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}
