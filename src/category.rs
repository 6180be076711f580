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

//! # Zia Category Module
//!
//! `ZiCategory` is the discrete value used to key contingency tables and
//! mode counts. It is hashable and totally ordered so that tables built from
//! it have a deterministic row and column order.
//!
//! Ordering across kinds is `Bool < Int < Float < Str < Missing`. Floats
//! compare by IEEE total order with `-0.0` folded into `0.0`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Discrete categorical value.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZiCategory {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Explicit missing marker, only produced under
    /// [`ZiMissingPolicy::AsCategory`](crate::config::ZiMissingPolicy).
    Missing,
}

impl ZiCategory {
    fn rank(&self) -> u8 {
        match self {
            ZiCategory::Bool(_) => 0,
            ZiCategory::Int(_) => 1,
            ZiCategory::Float(_) => 2,
            ZiCategory::Str(_) => 3,
            ZiCategory::Missing => 4,
        }
    }

    fn float_key(value: f64) -> f64 {
        if value == 0.0 {
            0.0
        } else {
            value
        }
    }

    /// Returns true for the explicit missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, ZiCategory::Missing)
    }
}

impl PartialEq for ZiCategory {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ZiCategory {}

impl PartialOrd for ZiCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZiCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ZiCategory::Bool(a), ZiCategory::Bool(b)) => a.cmp(b),
            (ZiCategory::Int(a), ZiCategory::Int(b)) => a.cmp(b),
            (ZiCategory::Float(a), ZiCategory::Float(b)) => {
                Self::float_key(*a).total_cmp(&Self::float_key(*b))
            }
            (ZiCategory::Str(a), ZiCategory::Str(b)) => a.cmp(b),
            (ZiCategory::Missing, ZiCategory::Missing) => Ordering::Equal,
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for ZiCategory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            ZiCategory::Bool(v) => v.hash(state),
            ZiCategory::Int(v) => v.hash(state),
            ZiCategory::Float(v) => Self::float_key(*v).to_bits().hash(state),
            ZiCategory::Str(v) => v.hash(state),
            ZiCategory::Missing => {}
        }
    }
}

impl fmt::Display for ZiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZiCategory::Bool(v) => write!(f, "{}", v),
            ZiCategory::Int(v) => write!(f, "{}", v),
            ZiCategory::Float(v) => write!(f, "{}", v),
            ZiCategory::Str(v) => f.write_str(v),
            ZiCategory::Missing => f.write_str("<missing>"),
        }
    }
}

impl From<bool> for ZiCategory {
    fn from(value: bool) -> Self {
        ZiCategory::Bool(value)
    }
}

impl From<i64> for ZiCategory {
    fn from(value: i64) -> Self {
        ZiCategory::Int(value)
    }
}

impl From<i32> for ZiCategory {
    fn from(value: i32) -> Self {
        ZiCategory::Int(value as i64)
    }
}

impl From<f64> for ZiCategory {
    fn from(value: f64) -> Self {
        ZiCategory::Float(value)
    }
}

impl From<&str> for ZiCategory {
    fn from(value: &str) -> Self {
        ZiCategory::Str(value.to_string())
    }
}

impl From<String> for ZiCategory {
    fn from(value: String) -> Self {
        ZiCategory::Str(value)
    }
}
