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

//! Table-level entry point for association and correlation measures.
//!
//! `ZiCorrelationCalculator` resolves columns of a [`ZiTable`] by label,
//! pairs them according to the configured missing-value policy and hands
//! the paired values to the slice-level functions in
//! [`association`](crate::inspect::association) and
//! [`correlation`](crate::inspect::correlation).

use crate::category::ZiCategory;
use crate::config::{ZiAnalysisConfig, ZiCorrelationMethod, ZiMissingPolicy, ZiRankMethod};
use crate::errors::{Result, ZiError};
use crate::inspect::association::{self, ZiAssociation};
use crate::inspect::contingency::ZiContingencyTable;
use crate::inspect::correlation;
use crate::inspect::matrix::ZiCorrelationMatrix;
use crate::table::ZiTable;

/// Pairs two nullable category columns under `policy`.
pub fn pair_categories(
    feature1: &[Option<ZiCategory>],
    feature2: &[Option<ZiCategory>],
    policy: ZiMissingPolicy,
) -> (Vec<ZiCategory>, Vec<ZiCategory>) {
    let fill = |value: &Option<ZiCategory>| value.clone().unwrap_or(ZiCategory::Missing);
    match policy {
        ZiMissingPolicy::Drop => feature1
            .iter()
            .zip(feature2)
            .filter_map(|(a, b)| Some((a.clone()?, b.clone()?)))
            .unzip(),
        ZiMissingPolicy::AsCategory => feature1.iter().zip(feature2).map(|(a, b)| (fill(a), fill(b))).unzip(),
    }
}

fn as_nan(values: Vec<Option<f64>>) -> Vec<f64> {
    values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()
}

fn with_columns(err: ZiError, feature1: &str, feature2: &str) -> ZiError {
    match err {
        ZiError::Degenerate { message } => {
            ZiError::degenerate(format!("'{}' vs '{}': {}", feature1, feature2, message))
        }
        ZiError::Input { message } => {
            ZiError::input(format!("'{}' vs '{}': {}", feature1, feature2, message))
        }
        other => other,
    }
}

/// Computes association and correlation measures between table columns.
#[derive(Clone, Debug, Default)]
pub struct ZiCorrelationCalculator {
    config: ZiAnalysisConfig,
}

impl ZiCorrelationCalculator {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ZiAnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ZiAnalysisConfig {
        &self.config
    }

    fn paired(&self, table: &ZiTable, feature1: &str, feature2: &str) -> Result<(Vec<ZiCategory>, Vec<ZiCategory>)> {
        let a = table.categories(feature1)?;
        let b = table.categories(feature2)?;
        Ok(pair_categories(&a, &b, self.config.missing))
    }

    /// Cross tabulation of two columns.
    pub fn contingency_table(
        &self,
        table: &ZiTable,
        feature1: &str,
        feature2: &str,
        normalize: bool,
    ) -> Result<ZiContingencyTable<ZiCategory>> {
        let (a, b) = self.paired(table, feature1, feature2)?;
        ZiContingencyTable::build(&a, &b, normalize)
    }

    /// Cramér's V between two columns.
    pub fn cramers_v(&self, table: &ZiTable, feature1: &str, feature2: &str) -> Result<f64> {
        let (a, b) = self.paired(table, feature1, feature2)?;
        association::cramers_v(&a, &b).map_err(|e| with_columns(e, feature1, feature2))
    }

    /// Cramér's V for every pair of `features`.
    ///
    /// The diagonal follows the configured [`ZiDiagonalPolicy`](crate::config::ZiDiagonalPolicy).
    pub fn cramers_v_matrix(&self, table: &ZiTable, features: &[&str]) -> Result<ZiCorrelationMatrix> {
        let columns = features
            .iter()
            .map(|name| table.categories(name))
            .collect::<Result<Vec<_>>>()?;

        ZiCorrelationMatrix::compute(
            "cramers_v",
            features.iter().map(|f| f.to_string()).collect(),
            self.config.diagonal,
            |i, j| {
                let (a, b) = pair_categories(&columns[i], &columns[j], self.config.missing);
                association::cramers_v(&a, &b).map_err(|e| with_columns(e, features[i], features[j]))
            },
        )
    }

    /// Yule's Y between two dichotomous columns.
    pub fn yules_y(&self, table: &ZiTable, feature1: &str, feature2: &str) -> Result<ZiAssociation> {
        let (a, b) = self.paired(table, feature1, feature2)?;
        Ok(association::yules_y(&a, &b))
    }

    /// Pearson correlation between two numeric columns.
    pub fn pearson(&self, table: &ZiTable, feature1: &str, feature2: &str) -> Result<f64> {
        self.numeric_pair(table, feature1, feature2, ZiCorrelationMethod::Pearson)
    }

    /// Spearman or Kendall correlation between two numeric columns.
    pub fn rank_correlation(
        &self,
        table: &ZiTable,
        feature1: &str,
        feature2: &str,
        method: ZiRankMethod,
    ) -> Result<f64> {
        self.numeric_pair(table, feature1, feature2, method.into())
    }

    fn numeric_pair(
        &self,
        table: &ZiTable,
        feature1: &str,
        feature2: &str,
        method: ZiCorrelationMethod,
    ) -> Result<f64> {
        let x = as_nan(table.numeric(feature1)?);
        let y = as_nan(table.numeric(feature2)?);
        correlation::correlation(&x, &y, method)
    }

    /// Numeric correlation matrix using the configured method.
    pub fn correlation_matrix(&self, table: &ZiTable, features: &[&str]) -> Result<ZiCorrelationMatrix> {
        let method = self.config.method;
        let columns = features
            .iter()
            .map(|name| table.numeric(name).map(as_nan))
            .collect::<Result<Vec<_>>>()?;

        let measure = match method {
            ZiCorrelationMethod::Pearson => "pearson",
            ZiCorrelationMethod::Spearman => "spearman",
            ZiCorrelationMethod::Kendall => "kendall",
        };

        ZiCorrelationMatrix::compute(
            measure,
            features.iter().map(|f| f.to_string()).collect(),
            self.config.diagonal,
            |i, j| correlation::correlation(&columns[i], &columns[j], method),
        )
    }
}
