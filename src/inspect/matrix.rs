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

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ZiDiagonalPolicy;
use crate::errors::{Result, ZiError};

/// Symmetric `features x features` table of pairwise coefficients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ZiRawCorrelationMatrix")]
pub struct ZiCorrelationMatrix {
    measure: String,
    features: Vec<String>,
    /// Row-major values.
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct ZiRawCorrelationMatrix {
    measure: String,
    features: Vec<String>,
    values: Vec<f64>,
}

impl TryFrom<ZiRawCorrelationMatrix> for ZiCorrelationMatrix {
    type Error = ZiError;

    fn try_from(raw: ZiRawCorrelationMatrix) -> Result<Self> {
        Self::from_parts(raw.measure, raw.features, raw.values)
    }
}

impl ZiCorrelationMatrix {
    /// Assembles a matrix, requiring unique features and `n * n` values.
    pub fn from_parts(measure: impl Into<String>, features: Vec<String>, values: Vec<f64>) -> Result<Self> {
        let n = features.len();
        if values.len() != n * n {
            return Err(ZiError::schema(format!(
                "matrix over {} features needs {} values, got {}",
                n,
                n * n,
                values.len()
            )));
        }
        let unique: HashSet<&String> = features.iter().collect();
        if unique.len() != n {
            return Err(ZiError::schema("matrix features must be unique"));
        }
        Ok(Self {
            measure: measure.into(),
            features,
            values,
        })
    }

    /// Name of the coefficient, e.g. `cramers_v` or `pearson`.
    pub fn measure(&self) -> &str {
        &self.measure
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Evaluates `pair(i, j)` for every `i <= j` and mirrors the result.
    ///
    /// With the `parallel` feature the pairs are evaluated on the rayon pool.
    /// The first failing pair aborts the whole matrix.
    pub fn compute<F>(
        measure: impl Into<String>,
        features: Vec<String>,
        diagonal: ZiDiagonalPolicy,
        pair: F,
    ) -> Result<Self>
    where
        F: Fn(usize, usize) -> Result<f64> + Sync,
    {
        let n = features.len();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i..n).map(move |j| (i, j)))
            .collect();

        let evaluate = |&(i, j): &(usize, usize)| -> Result<f64> {
            match diagonal {
                ZiDiagonalPolicy::Fixed(value) if i == j => Ok(value),
                _ => pair(i, j),
            }
        };

        #[cfg(feature = "parallel")]
        let results: Vec<f64> = {
            use rayon::prelude::*;
            pairs.par_iter().map(evaluate).collect::<Result<Vec<_>>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<f64> = pairs.iter().map(evaluate).collect::<Result<Vec<_>>>()?;

        let mut values = vec![0.0; n * n];
        for (&(i, j), v) in pairs.iter().zip(results) {
            values[i * n + j] = v;
            values[j * n + i] = v;
        }

        let measure = measure.into();
        log::debug!(
            "inspect.matrix.compute: matrix computed - measure={}, features={}, pairs={}",
            measure,
            n,
            pairs.len()
        );

        Ok(Self {
            measure,
            features,
            values,
        })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        let n = self.len();
        if row >= n || column >= n {
            return None;
        }
        Some(self.values[row * n + column])
    }

    /// Coefficient addressed by feature labels.
    pub fn value(&self, feature1: &str, feature2: &str) -> Option<f64> {
        let row = self.features.iter().position(|f| f == feature1)?;
        let column = self.features.iter().position(|f| f == feature2)?;
        self.get(row, column)
    }

    pub fn row(&self, feature: &str) -> Option<&[f64]> {
        let n = self.len();
        let row = self.features.iter().position(|f| f == feature)?;
        Some(&self.values[row * n..(row + 1) * n])
    }

    #[allow(non_snake_case)]
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
