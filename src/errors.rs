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

//! # Zia Error Module
//!
//! This module defines the error types used throughout Zia for consistent
//! error handling and reporting.
//!
//! ## Error Categories
//!
//! - **Input**: Mismatched column lengths or violated categorical constraints
//! - **Degenerate**: Statistically undefined configurations (a single category,
//!   a zero expected count in the chi-squared sum)
//! - **Schema**: Unknown or duplicate columns, unsupported or non-numeric types
//! - **Validation**: Invalid configuration values
//! - **Io / Serde / Csv / Arrow**: Wrapped library failures
//!
//! Computations that delegate to the statistics library (Pearson, rank
//! correlation, profiling) do not raise a distinct error for degenerate
//! numeric input. They produce NaN the same way the library does.
//!
//! ## Usage
//!
//! ```rust
//! use zia::errors::{Result, ZiError};
//!
//! fn check(a: &[u8], b: &[u8]) -> Result<()> {
//!     if a.len() != b.len() {
//!         return Err(ZiError::input("columns differ in length"));
//!     }
//!     Ok(())
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zia.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zia.
#[derive(Debug, Error, Serialize, Deserialize, PartialEq)]
pub enum ZiError {
    /// Mismatched input lengths or a violated categorical constraint.
    #[error("input error: {message}")]
    Input { message: String },

    /// Statistically undefined configuration of otherwise valid input.
    #[error("degenerate input: {message}")]
    Degenerate { message: String },

    /// Errors caused by malformed schema or incompatible data layout.
    #[error("schema error: {message}")]
    Schema { message: String },

    /// Validation errors triggered by invalid configuration values.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors raised while parsing CSV input.
    #[error("csv error: {0}")]
    Csv(String),

    /// Errors raised by the arrow2 array layer.
    #[error("arrow error: {0}")]
    Arrow(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for ZiError {
    fn from(err: serde_yaml::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for ZiError {
    fn from(err: csv::Error) -> Self {
        ZiError::Csv(err.to_string())
    }
}

impl From<arrow2::error::Error> for ZiError {
    fn from(err: arrow2::error::Error) -> Self {
        ZiError::Arrow(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct input errors.
    pub fn input<T: Into<String>>(message: T) -> Self {
        ZiError::Input {
            message: message.into(),
        }
    }

    /// Helper to construct degenerate input errors.
    pub fn degenerate<T: Into<String>>(message: T) -> Self {
        ZiError::Degenerate {
            message: message.into(),
        }
    }

    /// Helper to construct schema errors.
    pub fn schema<T: Into<String>>(message: T) -> Self {
        ZiError::Schema {
            message: message.into(),
        }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiError::Validation {
            message: message.into(),
        }
    }

    /// Returns true for statistically undefined input.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, ZiError::Degenerate { .. })
    }
}
