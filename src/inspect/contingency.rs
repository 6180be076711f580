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

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ZiError};

/// Cross tabulation of two paired categorical columns.
///
/// Rows are labeled by the sorted distinct values of the first feature,
/// columns by the sorted distinct values of the second. Cells are stored
/// row-major. Row, column and grand totals are always summed from the cells.
///
/// Deserialized tables pass through [`ZiContingencyTable::from_parts`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "ZiRawContingencyTable<K>",
    bound(deserialize = "K: Ord + Clone + Deserialize<'de>")
)]
pub struct ZiContingencyTable<K> {
    row_labels: Vec<K>,
    column_labels: Vec<K>,
    cells: Vec<f64>,
    observations: usize,
    normalized: bool,
}

/// Unchecked wire form of [`ZiContingencyTable`].
#[derive(Deserialize)]
struct ZiRawContingencyTable<K> {
    row_labels: Vec<K>,
    column_labels: Vec<K>,
    cells: Vec<f64>,
    observations: usize,
    normalized: bool,
}

impl<K: Ord + Clone> TryFrom<ZiRawContingencyTable<K>> for ZiContingencyTable<K> {
    type Error = ZiError;

    fn try_from(raw: ZiRawContingencyTable<K>) -> Result<Self> {
        Self::from_parts(
            raw.row_labels,
            raw.column_labels,
            raw.cells,
            raw.observations,
            raw.normalized,
        )
    }
}

fn strictly_sorted<K: Ord>(labels: &[K]) -> bool {
    labels.windows(2).all(|w| w[0] < w[1])
}

impl<K: Ord + Clone> ZiContingencyTable<K> {
    /// Assembles a table from its parts, checking every layout invariant.
    ///
    /// Labels must be strictly ascending, `cells` must hold
    /// `rows * columns` finite non-negative values, and the cells must agree
    /// with `observations`: count tables sum to it exactly, normalized tables
    /// sum to 1 when there are observations.
    pub fn from_parts(
        row_labels: Vec<K>,
        column_labels: Vec<K>,
        cells: Vec<f64>,
        observations: usize,
        normalized: bool,
    ) -> Result<Self> {
        if !strictly_sorted(&row_labels) || !strictly_sorted(&column_labels) {
            return Err(ZiError::schema(
                "contingency labels must be unique and sorted ascending",
            ));
        }
        let expected = row_labels.len() * column_labels.len();
        if cells.len() != expected {
            return Err(ZiError::schema(format!(
                "contingency table of shape ({}, {}) needs {} cells, got {}",
                row_labels.len(),
                column_labels.len(),
                expected,
                cells.len()
            )));
        }
        if cells.iter().any(|c| !c.is_finite() || *c < 0.0) {
            return Err(ZiError::schema(
                "contingency cells must be finite and non-negative",
            ));
        }

        let total: f64 = cells.iter().sum();
        let consistent = if normalized {
            observations == 0 || (total - 1.0).abs() < 1e-9
        } else {
            cells.iter().all(|c| c.fract() == 0.0) && total == observations as f64
        };
        if !consistent {
            return Err(ZiError::schema(format!(
                "contingency cells sum to {} which does not match {} observations",
                total, observations
            )));
        }

        Ok(Self {
            row_labels,
            column_labels,
            cells,
            observations,
            normalized,
        })
    }

    /// Counts co-occurrences of `feature1[i]` and `feature2[i]`.
    ///
    /// With `normalize` every cell is divided by the number of paired
    /// observations, giving joint probability estimates.
    pub fn build(feature1: &[K], feature2: &[K], normalize: bool) -> Result<Self> {
        if feature1.len() != feature2.len() {
            return Err(ZiError::input(format!(
                "contingency table needs columns of equal length, got {} and {}",
                feature1.len(),
                feature2.len()
            )));
        }

        let row_labels: Vec<K> = feature1.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
        let column_labels: Vec<K> = feature2.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();

        let row_index: BTreeMap<&K, usize> = row_labels.iter().enumerate().map(|(i, k)| (k, i)).collect();
        let column_index: BTreeMap<&K, usize> =
            column_labels.iter().enumerate().map(|(i, k)| (k, i)).collect();

        let width = column_labels.len();
        let mut cells = vec![0.0; row_labels.len() * width];
        for (a, b) in feature1.iter().zip(feature2) {
            cells[row_index[a] * width + column_index[b]] += 1.0;
        }

        let observations = feature1.len();
        if normalize && observations > 0 {
            let total = observations as f64;
            for cell in &mut cells {
                *cell /= total;
            }
        }

        Ok(Self {
            row_labels,
            column_labels,
            cells,
            observations,
            normalized: normalize,
        })
    }

    /// Position of `label` among the row labels.
    pub fn row_position(&self, label: &K) -> Option<usize> {
        self.row_labels.binary_search(label).ok()
    }

    /// Position of `label` among the column labels.
    pub fn column_position(&self, label: &K) -> Option<usize> {
        self.column_labels.binary_search(label).ok()
    }

    /// Cell addressed by row and column label.
    pub fn cell(&self, row: &K, column: &K) -> Option<f64> {
        self.get(self.row_position(row)?, self.column_position(column)?)
    }
}

impl<K> ZiContingencyTable<K> {
    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_labels.len(), self.column_labels.len())
    }

    pub fn row_labels(&self) -> &[K] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[K] {
        &self.column_labels
    }

    /// Row-major cell values.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        let (rows, columns) = self.shape();
        if row >= rows || column >= columns {
            return None;
        }
        Some(self.cells[row * columns + column])
    }

    /// Number of paired observations the table was built from.
    pub fn observations(&self) -> usize {
        self.observations
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// Sum of row `row`, `None` when out of range.
    pub fn row_total(&self, row: usize) -> Option<f64> {
        let columns = self.column_labels.len();
        self.cells
            .get(row * columns..(row + 1) * columns)
            .filter(|_| row < self.row_labels.len())
            .map(|cells| cells.iter().sum())
    }

    /// Sum of column `column`, `None` when out of range.
    pub fn column_total(&self, column: usize) -> Option<f64> {
        let columns = self.column_labels.len();
        if column >= columns {
            return None;
        }
        Some(self.cells.iter().skip(column).step_by(columns).sum())
    }

    pub fn row_totals(&self) -> Vec<f64> {
        (0..self.row_labels.len()).filter_map(|r| self.row_total(r)).collect()
    }

    pub fn column_totals(&self) -> Vec<f64> {
        (0..self.column_labels.len()).filter_map(|c| self.column_total(c)).collect()
    }

    /// Sum of all cells.
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }
}

impl<K: Clone> ZiContingencyTable<K> {
    /// Proportions copy of a count table. Already normalized tables are cloned.
    pub fn to_normalized(&self) -> Self {
        let mut table = self.clone();
        if !table.normalized && table.observations > 0 {
            let total = table.observations as f64;
            for cell in &mut table.cells {
                *cell /= total;
            }
        }
        table.normalized = true;
        table
    }
}

impl<K: Serialize> ZiContingencyTable<K> {
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
