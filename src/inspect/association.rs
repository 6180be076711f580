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

//! Association measures for categorical features.
//!
//! - **Cramér's V**: `sqrt(chi2 / (n * (m - 1)))` where `m` is the smaller
//!   number of distinct categories. Ranges over `[0, 1]`.
//! - **Yule's Y**: coefficient of colligation for two dichotomous features,
//!   `(sqrt(c11*c22) - sqrt(c12*c21)) / (sqrt(c11*c22) + sqrt(c12*c21))`.
//!   A value above 0.5 is read as a pronounced association.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::inspect::contingency::ZiContingencyTable;

/// Outcome of a measure that is only defined for some inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiAssociation {
    Value(f64),
    NotApplicable { reason: String },
}

impl ZiAssociation {
    pub fn not_applicable(reason: impl Into<String>) -> Self {
        ZiAssociation::NotApplicable {
            reason: reason.into(),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            ZiAssociation::Value(v) => Some(*v),
            ZiAssociation::NotApplicable { .. } => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, ZiAssociation::Value(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ZiAssociation::Value(_) => None,
            ZiAssociation::NotApplicable { reason } => Some(reason),
        }
    }
}

impl fmt::Display for ZiAssociation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZiAssociation::Value(v) => write!(f, "{}", v),
            ZiAssociation::NotApplicable { reason } => write!(f, "n/a ({})", reason),
        }
    }
}

/// Expected count of a cell under independence: `n_j * n_k / n`.
pub fn expected_count(n: f64, n_j: f64, n_k: f64) -> f64 {
    (n_j * n_k) / n
}

/// Pearson chi-squared statistic of a count table.
///
/// Fails with an input error for a normalized table, and with a degenerate
/// error for an empty table or when any expected count is zero.
pub fn chi_squared<K>(table: &ZiContingencyTable<K>) -> Result<f64> {
    if table.is_normalized() {
        return Err(ZiError::input("chi-squared needs a count table, not proportions"));
    }

    let n = table.total();
    if n <= 0.0 {
        return Err(ZiError::degenerate("contingency table has no observations"));
    }

    let (rows, columns) = table.shape();
    let row_totals = table.row_totals();
    let column_totals = table.column_totals();

    let mut chi2 = 0.0;
    for j in 0..rows {
        for k in 0..columns {
            let n_jk = table.cells()[j * columns + k];
            let e_jk = expected_count(n, row_totals[j], column_totals[k]);
            if e_jk == 0.0 {
                return Err(ZiError::degenerate(format!(
                    "expected count is zero at cell ({}, {})",
                    j, k
                )));
            }
            chi2 += (n_jk - e_jk).powi(2) / e_jk;
        }
    }
    Ok(chi2)
}

/// Cramér's V of an unnormalized contingency table.
pub fn cramers_v_from_table<K>(table: &ZiContingencyTable<K>) -> Result<f64> {
    if table.is_normalized() {
        return Err(ZiError::input("Cramér's V needs a count table, not proportions"));
    }

    let (rows, columns) = table.shape();
    let m = rows.min(columns);
    if m < 2 {
        return Err(ZiError::degenerate(format!(
            "both features need at least 2 distinct values, got {} and {}",
            rows, columns
        )));
    }

    let chi2 = chi_squared(table)?;
    let n = table.total();
    let v = (chi2 / (n * (m - 1) as f64)).sqrt();
    Ok(v.clamp(0.0, 1.0))
}

/// Cramér's V between two paired categorical columns.
pub fn cramers_v<K: Ord + Clone>(feature1: &[K], feature2: &[K]) -> Result<f64> {
    let table = ZiContingencyTable::build(feature1, feature2, false)?;
    cramers_v_from_table(&table)
}

/// Yule's Y between two paired dichotomous columns.
///
/// Inputs that are not exactly two categories per feature, or columns of
/// different length, yield [`ZiAssociation::NotApplicable`].
pub fn yules_y<K: Ord + Clone>(feature1: &[K], feature2: &[K]) -> ZiAssociation {
    if feature1.len() != feature2.len() {
        return not_applicable(format!(
            "features differ in length ({} vs {})",
            feature1.len(),
            feature2.len()
        ));
    }

    let distinct1 = feature1.iter().collect::<BTreeSet<_>>().len();
    let distinct2 = feature2.iter().collect::<BTreeSet<_>>().len();
    if distinct1 != 2 || distinct2 != 2 {
        return not_applicable(format!(
            "Yule's Y needs two dichotomous features, got {} and {} categories",
            distinct1, distinct2
        ));
    }

    let table = match ZiContingencyTable::build(feature1, feature2, false) {
        Ok(table) => table,
        Err(err) => return not_applicable(err.to_string()),
    };
    let cells = table.cells();
    let (c11, c12, c21, c22) = (cells[0], cells[1], cells[2], cells[3]);

    let concordant = (c11 * c22).sqrt();
    let discordant = (c12 * c21).sqrt();
    ZiAssociation::Value((concordant - discordant) / (concordant + discordant))
}

fn not_applicable(reason: String) -> ZiAssociation {
    log::warn!("inspect.association.yule: not applicable - reason={}", reason);
    ZiAssociation::NotApplicable { reason }
}
