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

//! Numeric correlation coefficients.
//!
//! NaN marks a missing value: any pair with a NaN on either side is dropped
//! before the coefficient is computed. Degenerate input (fewer than two
//! complete pairs, a constant column) yields NaN rather than an error.

use statrs::statistics::{Data, OrderStatistics, RankTieBreaker, Statistics};

use crate::config::{ZiCorrelationMethod, ZiRankMethod};
use crate::errors::{Result, ZiError};

fn complete_pairs(x: &[f64], y: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    if x.len() != y.len() {
        return Err(ZiError::input(format!(
            "correlation needs sequences of equal length, got {} and {}",
            x.len(),
            y.len()
        )));
    }
    Ok(x.iter()
        .zip(y)
        .filter(|(a, b)| !a.is_nan() && !b.is_nan())
        .map(|(a, b)| (*a, *b))
        .unzip())
}

fn product_moment(x: &[f64], y: &[f64]) -> f64 {
    let covariance = x.iter().covariance(y.iter());
    covariance / (x.iter().std_dev() * y.iter().std_dev())
}

/// Pearson product-moment correlation.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    let (x, y) = complete_pairs(x, y)?;
    Ok(product_moment(&x, &y))
}

/// Spearman rank correlation: Pearson over average ranks.
pub fn spearman(x: &[f64], y: &[f64]) -> Result<f64> {
    let (x, y) = complete_pairs(x, y)?;
    let rx = Data::new(x).ranks(RankTieBreaker::Average);
    let ry = Data::new(y).ranks(RankTieBreaker::Average);
    Ok(product_moment(&rx, &ry))
}

/// Kendall's tau-b, corrected for ties on either side.
pub fn kendall(x: &[f64], y: &[f64]) -> Result<f64> {
    let (x, y) = complete_pairs(x, y)?;
    let n = x.len();

    let mut concordant = 0.0;
    let mut discordant = 0.0;
    let mut ties_x = 0.0;
    let mut ties_y = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let dx = x[i] - x[j];
            let dy = y[i] - y[j];
            if dx == 0.0 {
                ties_x += 1.0;
            }
            if dy == 0.0 {
                ties_y += 1.0;
            }
            let sign = dx * dy;
            if sign > 0.0 {
                concordant += 1.0;
            } else if sign < 0.0 {
                discordant += 1.0;
            }
        }
    }

    let pairs = (n * n.saturating_sub(1)) as f64 / 2.0;
    Ok((concordant - discordant) / ((pairs - ties_x) * (pairs - ties_y)).sqrt())
}

/// Rank correlation with an explicit method.
pub fn rank_correlation(x: &[f64], y: &[f64], method: ZiRankMethod) -> Result<f64> {
    match method {
        ZiRankMethod::Spearman => spearman(x, y),
        ZiRankMethod::Kendall => kendall(x, y),
    }
}

/// Dispatches to the coefficient named by `method`.
pub fn correlation(x: &[f64], y: &[f64], method: ZiCorrelationMethod) -> Result<f64> {
    match method {
        ZiCorrelationMethod::Pearson => pearson(x, y),
        ZiCorrelationMethod::Spearman => spearman(x, y),
        ZiCorrelationMethod::Kendall => kendall(x, y),
    }
}
