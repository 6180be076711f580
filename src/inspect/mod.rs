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

pub mod contingency;
pub mod association;
pub mod correlation;
pub mod matrix;
pub mod calculator;
pub mod profile;

pub use contingency::ZiContingencyTable;
pub use association::{chi_squared, cramers_v, cramers_v_from_table, expected_count, yules_y, ZiAssociation};
pub use correlation::{kendall, pearson, rank_correlation, spearman};
pub use matrix::ZiCorrelationMatrix;
pub use calculator::{pair_categories, ZiCorrelationCalculator};
pub use profile::{ZiFeatureProfile, ZiMetric, ZiProfileReport, ZiProfiler};
