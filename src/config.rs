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

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ZiError};

/// Rank correlation flavour. Kendall suits data with many ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiRankMethod {
    Spearman,
    Kendall,
}

/// Coefficient used by numeric correlation matrices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiCorrelationMethod {
    Pearson,
    Spearman,
    Kendall,
}

impl From<ZiRankMethod> for ZiCorrelationMethod {
    fn from(method: ZiRankMethod) -> Self {
        match method {
            ZiRankMethod::Spearman => ZiCorrelationMethod::Spearman,
            ZiRankMethod::Kendall => ZiCorrelationMethod::Kendall,
        }
    }
}

/// Handling of missing values when two columns are paired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiMissingPolicy {
    /// Rows where either value is missing are excluded.
    Drop,
    /// Missing becomes its own category, ordered after every other value.
    AsCategory,
}

/// Diagonal of pairwise matrices.
///
/// Written as `{"policy": "computed"}` or `{"policy": "fixed", "value": 1.0}`
/// in both JSON and YAML.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", content = "value", rename_all = "snake_case")]
pub enum ZiDiagonalPolicy {
    /// Each column is compared against itself with the regular formula.
    Computed,
    /// The diagonal is set to the given value without computation.
    Fixed(f64),
}

/// Settings for table-level association and correlation runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiAnalysisConfig {
    pub method: ZiCorrelationMethod,
    pub missing: ZiMissingPolicy,
    pub diagonal: ZiDiagonalPolicy,
}

impl Default for ZiAnalysisConfig {
    fn default() -> Self {
        ZiAnalysisConfig {
            method: ZiCorrelationMethod::Pearson,
            missing: ZiMissingPolicy::Drop,
            diagonal: ZiDiagonalPolicy::Computed,
        }
    }
}

impl ZiAnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if let ZiDiagonalPolicy::Fixed(value) = self.diagonal {
            if !value.is_finite() {
                return Err(ZiError::validation(
                    "fixed diagonal value must be finite",
                ));
            }
        }
        Ok(())
    }
}

/// Partial configuration; unset fields fall back to [`ZiAnalysisConfig::default`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZiAnalysisConfigBuilder {
    pub method: Option<ZiCorrelationMethod>,
    pub missing: Option<ZiMissingPolicy>,
    pub diagonal: Option<ZiDiagonalPolicy>,
}

impl ZiAnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: ZiCorrelationMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn missing(mut self, missing: ZiMissingPolicy) -> Self {
        self.missing = Some(missing);
        self
    }

    pub fn diagonal(mut self, diagonal: ZiDiagonalPolicy) -> Self {
        self.diagonal = Some(diagonal);
        self
    }

    pub fn build(self) -> Result<ZiAnalysisConfig> {
        let base = ZiAnalysisConfig::default();
        let config = ZiAnalysisConfig {
            method: self.method.unwrap_or(base.method),
            missing: self.missing.unwrap_or(base.missing),
            diagonal: self.diagonal.unwrap_or(base.diagonal),
        };
        config.validate()?;
        Ok(config)
    }

    #[allow(non_snake_case)]
    pub fn from_json(value: &Value) -> Result<ZiAnalysisConfig> {
        let builder: ZiAnalysisConfigBuilder = serde_json::from_value(value.clone())?;
        builder.build()
    }

    #[allow(non_snake_case)]
    pub fn from_yaml(text: &str) -> Result<ZiAnalysisConfig> {
        let builder: ZiAnalysisConfigBuilder = serde_yaml::from_str(text)?;
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_json_yields_defaults() {
        let config = ZiAnalysisConfigBuilder::from_json(&json!({})).unwrap();
        assert_eq!(config, ZiAnalysisConfig::default());
    }

    #[test]
    fn json_overrides_fields() {
        let config = ZiAnalysisConfigBuilder::from_json(&json!({
            "method": "kendall",
            "missing": "as_category",
            "diagonal": {"policy": "fixed", "value": 1.0}
        }))
        .unwrap();
        assert_eq!(config.method, ZiCorrelationMethod::Kendall);
        assert_eq!(config.missing, ZiMissingPolicy::AsCategory);
        assert_eq!(config.diagonal, ZiDiagonalPolicy::Fixed(1.0));
    }

    #[test]
    fn yaml_overrides_fields() {
        let config = ZiAnalysisConfigBuilder::from_yaml("method: spearman\nmissing: drop\n").unwrap();
        assert_eq!(config.method, ZiCorrelationMethod::Spearman);
        assert_eq!(config.diagonal, ZiDiagonalPolicy::Computed);
    }

    #[test]
    fn yaml_fixed_diagonal() {
        let config = ZiAnalysisConfigBuilder::from_yaml(
            "method: pearson\ndiagonal:\n  policy: fixed\n  value: 0.5\n",
        )
        .unwrap();
        assert_eq!(config.diagonal, ZiDiagonalPolicy::Fixed(0.5));

        let computed = ZiAnalysisConfigBuilder::from_yaml("diagonal:\n  policy: computed\n").unwrap();
        assert_eq!(computed.diagonal, ZiDiagonalPolicy::Computed);
    }

    #[test]
    fn diagonal_policy_serializes_with_tag() {
        assert_eq!(
            serde_json::to_value(ZiDiagonalPolicy::Fixed(1.0)).unwrap(),
            json!({"policy": "fixed", "value": 1.0})
        );
        assert_eq!(
            serde_json::to_value(ZiDiagonalPolicy::Computed).unwrap(),
            json!({"policy": "computed"})
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ZiAnalysisConfigBuilder::from_json(&json!({"metod": "pearson"})).unwrap_err();
        assert!(matches!(err, ZiError::Serde(_)));
    }

    #[test]
    fn non_finite_diagonal_is_invalid() {
        let err = ZiAnalysisConfigBuilder::new()
            .diagonal(ZiDiagonalPolicy::Fixed(f64::NAN))
            .build()
            .unwrap_err();
        assert!(matches!(err, ZiError::Validation { .. }));
    }
}
