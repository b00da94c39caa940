use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Stable identity of one record across reorders and redraws.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<usize> for RecordId {
    fn from(value: usize) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One immutable row of the source dataset.
///
/// `values` maps dimension names to numbers; `color_value` is the stroke
/// value used when the record has no entry for the configured color
/// dimension. Either way the stroke ignores which dimensions are displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    values: IndexMap<String, f64>,
    color_value: f64,
}

impl Record {
    #[must_use]
    pub fn new(id: impl Into<RecordId>, color_value: f64) -> Self {
        Self {
            id: id.into(),
            values: IndexMap::new(),
            color_value,
        }
    }

    #[must_use]
    pub fn from_values<K, I>(id: impl Into<RecordId>, values: I, color_value: f64) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Self {
            id: id.into(),
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            color_value,
        }
    }

    #[must_use]
    pub fn with_value(mut self, dimension: impl Into<String>, value: f64) -> Self {
        self.values.insert(dimension.into(), value);
        self
    }

    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the finite value stored for `dimension`.
    #[must_use]
    pub fn value(&self, dimension: &str) -> Option<f64> {
        self.values
            .get(dimension)
            .copied()
            .filter(|value| value.is_finite())
    }

    #[must_use]
    pub fn values(&self) -> &IndexMap<String, f64> {
        &self.values
    }

    #[must_use]
    pub fn color_value(&self) -> f64 {
        self.color_value
    }

    /// Value driving the stroke color: the entry for `color_dimension` when
    /// present (finite or not), else the record's own color value.
    #[must_use]
    pub fn color_value_on(&self, color_dimension: &str) -> f64 {
        self.values
            .get(color_dimension)
            .copied()
            .unwrap_or(self.color_value)
    }
}

/// Ordered record collection consumed by the engine.
///
/// Dataset order is the draw order of the bitmap pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Min/max of the finite values of `dimension`, or `None` when no record
    /// carries one.
    #[must_use]
    pub fn extent(&self, dimension: &str) -> Option<(f64, f64)> {
        extent_of(self.records.iter().filter_map(|record| record.value(dimension)))
    }

    /// Min/max of the finite color values on `color_dimension`.
    #[must_use]
    pub fn color_extent(&self, color_dimension: &str) -> Option<(f64, f64)> {
        extent_of(
            self.records
                .iter()
                .map(|record| record.color_value_on(color_dimension))
                .filter(|value| value.is_finite()),
        )
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

pub(crate) fn extent_of(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}
