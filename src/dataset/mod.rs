//! Datasets
//!
//! This module implements the row-record table shared between the clustering pipeline and the
//! chart views, and the helpers moving data between the table and numeric matrices.
use ndarray::ScalarOperand;

use num_traits::{FromPrimitive, NumAssignOps, NumCast};
use rand::distributions::uniform::SampleUniform;

use std::fmt;
use std::iter::{FromIterator, Sum};
use std::ops::{AddAssign, DivAssign, Index, MulAssign, SubAssign};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::FieldValueError;

mod labels;
mod select;

pub use labels::{write_labels, CLUSTER_FIELD};
pub use select::{select_fields, unique_fields};

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used in the numeric matrices
/// handed to the clustering and preprocessing algorithms.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + for<'a> AddAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
    + SampleUniform
    + ScalarOperand
    + approx::AbsDiffEq
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// A scalar stored in a row-record
///
/// Numeric fields hold a `Number`, categorical fields (like the cluster label) hold `Text`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", untagged)
)]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Null,
}

impl Value {
    /// Converts the value to a finite number.
    ///
    /// Text is accepted when it parses as a number once surrounding whitespace is trimmed, so
    /// `"3.5"` and `" 2 "` are numeric while `""` and `"setosa"` are not.
    pub fn to_number(&self) -> Result<f64, FieldValueError> {
        let number = match self {
            Value::Number(x) => *x,
            Value::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| FieldValueError::NotNumeric(s.clone()))?,
            Value::Null => return Err(FieldValueError::Null),
        };

        if number.is_finite() {
            Ok(number)
        } else {
            Err(FieldValueError::NonFinite(number))
        }
    }

    /// Returns the text content, if this is a categorical value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
            Value::Null => write!(f, "null"),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Number(x as f64)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Value::Number(x as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// A single row: field names mapped to scalar values, in insertion order
///
/// Field order is kept because views build their axes in the order fields appear.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `name`
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Sets `name` to `value`. An existing field keeps its position, a new field is appended.
    /// Returns the previous value, if any.
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, name: K, value: V) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, old)) => Some(std::mem::replace(old, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    /// Builder-style variant of [`insert`](Record::insert)
    pub fn with<K: Into<String>, V: Into<Value>>(mut self, name: K, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// An ordered sequence of row-records
///
/// This is the dataset shared by the clustering pipeline and every chart view. Rows keep their
/// order for their whole lifetime: the cluster assignment is matched to rows by position.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Table { records }
    }

    pub fn nrows(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns every field name appearing in the table, in order of first appearance
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in &self.records {
            for name in record.names() {
                if !names.iter().any(|known| known == name) {
                    names.push(name.to_string());
                }
            }
        }
        names
    }

    /// Returns all values of one field, `None` where a row lacks it
    pub fn column(&self, name: &str) -> Vec<Option<&Value>> {
        self.records.iter().map(|record| record.get(name)).collect()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl Index<usize> for Table {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Self {
        Table::new(records)
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Table::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean_of<F: Float>(values: &[F]) -> F {
        let mut total = F::zero();
        for value in values {
            total += value;
        }
        total / F::cast(values.len())
    }

    #[test]
    fn float_covers_both_precisions() {
        assert_eq!(mean_of(&[1f32, 2., 6.]), 3.);
        assert_eq!(mean_of(&[0.5f64, 1.5]), 1.);
        assert_eq!(<f32 as Float>::cast(7usize), 7.);
    }

    #[test]
    fn numeric_text_is_converted() {
        assert_eq!(Value::from(" 2.5 ").to_number(), Ok(2.5));
        assert_eq!(Value::from(4).to_number(), Ok(4.0));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        assert_eq!(
            Value::from("setosa").to_number(),
            Err(FieldValueError::NotNumeric("setosa".to_string()))
        );
        assert_eq!(
            Value::from("").to_number(),
            Err(FieldValueError::NotNumeric(String::new()))
        );
        assert_eq!(Value::Null.to_number(), Err(FieldValueError::Null));
        assert!(matches!(
            Value::from(f64::NAN).to_number(),
            Err(FieldValueError::NonFinite(_))
        ));
    }

    #[test]
    fn insert_keeps_field_position() {
        let mut record = Record::new().with("a", 1.).with("b", 2.).with("c", 3.);
        let old = record.insert("b", "x");

        assert_eq!(old, Some(Value::Number(2.)));
        assert_eq!(record.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(record.get("b"), Some(&Value::from("x")));
    }

    #[test]
    fn field_names_follow_first_appearance() {
        let table: Table = vec![
            Record::new().with("y", 1.).with("x", 2.),
            Record::new().with("x", 3.).with("z", "a"),
        ]
        .into();

        assert_eq!(table.field_names(), vec!["y", "x", "z"]);
        assert_eq!(table.column("z"), vec![None, Some(&Value::from("a"))]);
    }
}
