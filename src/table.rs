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

//! # Zia Table Module
//!
//! `ZiTable` is the column-oriented, strongly typed table consumed by the
//! association and profiling operations. Columns are stored as arrow2 arrays
//! inside a single [`Chunk`] with a matching [`Schema`]; every column is
//! nullable and addressed by label.
//!
//! ## Supported Types
//!
//! | [`ZiDType`] | arrow2 array            |
//! |-------------|-------------------------|
//! | `int64`     | `PrimitiveArray<i64>`   |
//! | `float64`   | `PrimitiveArray<f64>`   |
//! | `bool`      | `BooleanArray`          |
//! | `utf8`      | `Utf8Array<i32>`        |
//!
//! Float NaN values are treated as missing everywhere a column is read.
//!
//! ## Usage Example
//!
//! ```rust
//! use zia::table::{ZiColumn, ZiTable};
//!
//! let table = ZiTable::new(vec![
//!     ZiColumn::utf8("color", vec![Some("red"), Some("blue"), None]),
//!     ZiColumn::float64("price", vec![Some(1.0), Some(2.5), Some(4.0)]),
//! ])?;
//! assert_eq!(table.num_rows(), 3);
//! ```

use std::collections::HashSet;
use std::fmt;

use arrow2::array::{Array, BooleanArray, PrimitiveArray, Utf8Array};
use arrow2::chunk::Chunk;
use arrow2::datatypes::{DataType, Field, Schema};
use serde::{Deserialize, Serialize};

use crate::category::ZiCategory;
use crate::errors::{Result, ZiError};

/// Logical column type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiDType {
    Int64,
    Float64,
    Bool,
    Utf8,
}

impl ZiDType {
    /// Maps an arrow2 data type onto a supported logical type.
    pub fn from_arrow(data_type: &DataType) -> Result<Self> {
        match data_type {
            DataType::Int64 => Ok(ZiDType::Int64),
            DataType::Float64 => Ok(ZiDType::Float64),
            DataType::Boolean => Ok(ZiDType::Bool),
            DataType::Utf8 => Ok(ZiDType::Utf8),
            other => Err(ZiError::schema(format!(
                "unsupported column type {:?}",
                other
            ))),
        }
    }

    pub fn to_arrow(self) -> DataType {
        match self {
            ZiDType::Int64 => DataType::Int64,
            ZiDType::Float64 => DataType::Float64,
            ZiDType::Bool => DataType::Boolean,
            ZiDType::Utf8 => DataType::Utf8,
        }
    }

    /// Numeric columns take part in mean, standard deviation and correlation.
    pub fn is_numeric(self) -> bool {
        !matches!(self, ZiDType::Utf8)
    }

    pub fn is_float(self) -> bool {
        matches!(self, ZiDType::Float64)
    }
}

impl fmt::Display for ZiDType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZiDType::Int64 => "int64",
            ZiDType::Float64 => "float64",
            ZiDType::Bool => "bool",
            ZiDType::Utf8 => "utf8",
        };
        f.write_str(name)
    }
}

/// Owned column values prior to conversion into arrow2 arrays.
#[derive(Clone, Debug, PartialEq)]
pub enum ZiColumnData {
    Int64(Vec<Option<i64>>),
    Float64(Vec<Option<f64>>),
    Bool(Vec<Option<bool>>),
    Utf8(Vec<Option<String>>),
}

impl ZiColumnData {
    pub fn len(&self) -> usize {
        match self {
            ZiColumnData::Int64(v) => v.len(),
            ZiColumnData::Float64(v) => v.len(),
            ZiColumnData::Bool(v) => v.len(),
            ZiColumnData::Utf8(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> ZiDType {
        match self {
            ZiColumnData::Int64(_) => ZiDType::Int64,
            ZiColumnData::Float64(_) => ZiDType::Float64,
            ZiColumnData::Bool(_) => ZiDType::Bool,
            ZiColumnData::Utf8(_) => ZiDType::Utf8,
        }
    }

    fn into_array(self) -> Box<dyn Array> {
        match self {
            ZiColumnData::Int64(v) => PrimitiveArray::<i64>::from(v).boxed(),
            ZiColumnData::Float64(v) => PrimitiveArray::<f64>::from(v).boxed(),
            ZiColumnData::Bool(v) => BooleanArray::from(v).boxed(),
            ZiColumnData::Utf8(v) => Utf8Array::<i32>::from(v).boxed(),
        }
    }
}

/// Named column used to assemble a [`ZiTable`].
#[derive(Clone, Debug, PartialEq)]
pub struct ZiColumn {
    pub name: String,
    pub data: ZiColumnData,
}

impl ZiColumn {
    pub fn new(name: impl Into<String>, data: ZiColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn int64(name: impl Into<String>, values: Vec<Option<i64>>) -> Self {
        Self::new(name, ZiColumnData::Int64(values))
    }

    pub fn float64(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self::new(name, ZiColumnData::Float64(values))
    }

    pub fn boolean(name: impl Into<String>, values: Vec<Option<bool>>) -> Self {
        Self::new(name, ZiColumnData::Bool(values))
    }

    pub fn utf8<S: Into<String>>(name: impl Into<String>, values: Vec<Option<S>>) -> Self {
        Self::new(
            name,
            ZiColumnData::Utf8(values.into_iter().map(|v| v.map(Into::into)).collect()),
        )
    }
}

/// Borrowed, downcast view over one column of a [`ZiTable`].
#[derive(Clone, Copy)]
pub enum ZiColumnView<'a> {
    Int64(&'a PrimitiveArray<i64>),
    Float64(&'a PrimitiveArray<f64>),
    Bool(&'a BooleanArray),
    Utf8(&'a Utf8Array<i32>),
}

impl<'a> ZiColumnView<'a> {
    fn from_array(array: &'a dyn Array) -> Result<Self> {
        let dtype = ZiDType::from_arrow(array.data_type())?;
        let any = array.as_any();
        let view = match dtype {
            ZiDType::Int64 => any.downcast_ref::<PrimitiveArray<i64>>().map(ZiColumnView::Int64),
            ZiDType::Float64 => any.downcast_ref::<PrimitiveArray<f64>>().map(ZiColumnView::Float64),
            ZiDType::Bool => any.downcast_ref::<BooleanArray>().map(ZiColumnView::Bool),
            ZiDType::Utf8 => any.downcast_ref::<Utf8Array<i32>>().map(ZiColumnView::Utf8),
        };
        view.ok_or_else(|| ZiError::schema(format!("column array does not match type {}", dtype)))
    }

    pub fn dtype(&self) -> ZiDType {
        match self {
            ZiColumnView::Int64(_) => ZiDType::Int64,
            ZiColumnView::Float64(_) => ZiDType::Float64,
            ZiColumnView::Bool(_) => ZiDType::Bool,
            ZiColumnView::Utf8(_) => ZiDType::Utf8,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ZiColumnView::Int64(a) => a.len(),
            ZiColumnView::Float64(a) => a.len(),
            ZiColumnView::Bool(a) => a.len(),
            ZiColumnView::Utf8(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values as categories; nulls and float NaN become `None`.
    pub fn categories(&self) -> Vec<Option<ZiCategory>> {
        match self {
            ZiColumnView::Int64(a) => a.iter().map(|v| v.map(|x| ZiCategory::Int(*x))).collect(),
            ZiColumnView::Float64(a) => a
                .iter()
                .map(|v| v.filter(|x| !x.is_nan()).map(|x| ZiCategory::Float(*x)))
                .collect(),
            ZiColumnView::Bool(a) => a.iter().map(|v| v.map(ZiCategory::Bool)).collect(),
            ZiColumnView::Utf8(a) => a
                .iter()
                .map(|v| v.map(|s| ZiCategory::Str(s.to_string())))
                .collect(),
        }
    }

    /// Values as floats; booleans map to 0/1, nulls and NaN become `None`.
    pub fn numeric(&self) -> Result<Vec<Option<f64>>> {
        match self {
            ZiColumnView::Int64(a) => Ok(a.iter().map(|v| v.map(|x| *x as f64)).collect()),
            ZiColumnView::Float64(a) => Ok(a
                .iter()
                .map(|v| v.copied().filter(|x| !x.is_nan()))
                .collect()),
            ZiColumnView::Bool(a) => Ok(a
                .iter()
                .map(|v| v.map(|b| if b { 1.0 } else { 0.0 }))
                .collect()),
            ZiColumnView::Utf8(_) => Err(ZiError::schema("utf8 column is not numeric")),
        }
    }

    /// Number of missing entries, counting float NaN.
    pub fn missing_count(&self) -> usize {
        match self {
            ZiColumnView::Float64(a) => a
                .iter()
                .filter(|v| v.map_or(true, |x| x.is_nan()))
                .count(),
            ZiColumnView::Int64(a) => a.null_count(),
            ZiColumnView::Bool(a) => a.null_count(),
            ZiColumnView::Utf8(a) => a.null_count(),
        }
    }
}

/// Column-oriented table of named, equally long, nullable columns.
#[derive(Clone, Debug)]
pub struct ZiTable {
    schema: Schema,
    chunk: Chunk<Box<dyn Array>>,
}

impl ZiTable {
    /// Builds a table from owned columns.
    pub fn new(columns: Vec<ZiColumn>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(columns.len());
        let mut arrays = Vec::with_capacity(columns.len());
        let expected_len = columns.first().map(|c| c.data.len());

        for column in columns {
            if !seen.insert(column.name.clone()) {
                return Err(ZiError::schema(format!(
                    "duplicate column '{}'",
                    column.name
                )));
            }
            if let Some(expected) = expected_len {
                if column.data.len() != expected {
                    return Err(ZiError::schema(format!(
                        "column '{}' has {} rows, expected {}",
                        column.name,
                        column.data.len(),
                        expected
                    )));
                }
            }
            fields.push(Field::new(column.name, column.data.dtype().to_arrow(), true));
            arrays.push(column.data.into_array());
        }

        Self::from_arrow(Schema::from(fields), Chunk::try_new(arrays)?)
    }

    /// Wraps existing arrow2 data, validating that every column type is supported.
    pub fn from_arrow(schema: Schema, chunk: Chunk<Box<dyn Array>>) -> Result<Self> {
        if schema.fields.len() != chunk.arrays().len() {
            return Err(ZiError::schema(format!(
                "schema has {} fields but chunk has {} arrays",
                schema.fields.len(),
                chunk.arrays().len()
            )));
        }
        for (field, array) in schema.fields.iter().zip(chunk.arrays()) {
            let declared = ZiDType::from_arrow(&field.data_type)?;
            if ZiDType::from_arrow(array.data_type())? != declared {
                return Err(ZiError::schema(format!(
                    "field '{}' declared as {} but holds {:?}",
                    field.name,
                    declared,
                    array.data_type()
                )));
            }
        }

        log::debug!(
            "table.build: table assembled - columns={}, rows={}",
            schema.fields.len(),
            chunk.len()
        );

        Ok(Self { schema, chunk })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn chunk(&self) -> &Chunk<Box<dyn Array>> {
        &self.chunk
    }

    pub fn num_rows(&self) -> usize {
        self.chunk.len()
    }

    pub fn num_columns(&self) -> usize {
        self.schema.fields.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.schema.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn position(&self, name: &str) -> Result<usize> {
        self.schema
            .fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| ZiError::schema(format!("unknown column '{}'", name)))
    }

    pub fn dtype(&self, name: &str) -> Result<ZiDType> {
        let idx = self.position(name)?;
        ZiDType::from_arrow(&self.schema.fields[idx].data_type)
    }

    /// Typed view over the column labeled `name`.
    pub fn column(&self, name: &str) -> Result<ZiColumnView<'_>> {
        let idx = self.position(name)?;
        ZiColumnView::from_array(self.chunk.arrays()[idx].as_ref())
    }

    /// Typed views in schema order, paired with their labels.
    pub fn columns(&self) -> Result<Vec<(&str, ZiColumnView<'_>)>> {
        self.schema
            .fields
            .iter()
            .zip(self.chunk.arrays())
            .map(|(field, array)| Ok((field.name.as_str(), ZiColumnView::from_array(array.as_ref())?)))
            .collect()
    }

    pub fn categories(&self, name: &str) -> Result<Vec<Option<ZiCategory>>> {
        Ok(self.column(name)?.categories())
    }

    pub fn numeric(&self, name: &str) -> Result<Vec<Option<f64>>> {
        self.column(name)?
            .numeric()
            .map_err(|_| ZiError::schema(format!("column '{}' is not numeric", name)))
    }
}
