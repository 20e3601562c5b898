//! Key-value records of diagnostic values.
use crate::error::CoreError;
use std::collections::{
    hash_map::{IntoIter, Iter},
    HashMap,
};

/// A value in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A number, such as a reward or a distance.
    Scalar(f32),

    /// A vector of numbers, such as a position.
    Array1(Vec<f32>),

    /// A label, such as the result of a step.
    String(String),
}

impl RecordValue {
    fn type_name(&self) -> &'static str {
        match self {
            RecordValue::Scalar(_) => "Scalar",
            RecordValue::Array1(_) => "Array1",
            RecordValue::String(_) => "String",
        }
    }
}

/// Named values produced by an environment step or an evaluation.
///
/// ```rust
/// use bugnav_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_scalar("reward", 0.5);
/// record.insert("position", RecordValue::Array1(vec![1.0, 2.0]));
///
/// assert_eq!(record.get_scalar("reward").unwrap(), 0.5);
/// assert!(record.get_string("reward").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// An empty record.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A record holding a single scalar.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        let mut record = Self::empty();
        record.insert(name, RecordValue::Scalar(value));
        record
    }

    /// A record holding the given pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        let mut record = Self::empty();
        for (k, v) in s {
            record.insert(k.clone(), v.clone());
        }
        record
    }

    /// Inserts a value, replacing the one with the same key.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Iterates over the entries, in no particular order.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Consumes the record into its entries.
    pub fn into_iter_in_record(self) -> IntoIter<String, RecordValue> {
        self.0.into_iter()
    }

    /// The value of `k`, if any.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    fn get_as<T>(
        &self,
        k: &str,
        expected: &'static str,
        f: impl FnOnce(&RecordValue) -> Option<T>,
    ) -> Result<T, CoreError> {
        let value = self
            .0
            .get(k)
            .ok_or_else(|| CoreError::RecordKeyError(k.to_string()))?;
        f(value).ok_or_else(|| {
            CoreError::RecordValueTypeError(format!(
                "{} is {}, not {}",
                k,
                value.type_name(),
                expected
            ))
        })
    }

    /// The scalar value of `k`.
    ///
    /// # Errors
    ///
    /// Fails if the key is missing or holds another type of value.
    pub fn get_scalar(&self, k: &str) -> Result<f32, CoreError> {
        self.get_as(k, "Scalar", |v| match v {
            RecordValue::Scalar(x) => Some(*x),
            _ => None,
        })
    }

    /// The array value of `k`; fails like [`Record::get_scalar`].
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, CoreError> {
        self.get_as(k, "Array1", |v| match v {
            RecordValue::Array1(x) => Some(x.clone()),
            _ => None,
        })
    }

    /// The string value of `k`; fails like [`Record::get_scalar`].
    pub fn get_string(&self, k: &str) -> Result<String, CoreError> {
        self.get_as(k, "String", |v| match v {
            RecordValue::String(x) => Some(x.clone()),
            _ => None,
        })
    }

    /// Whether the record has no entry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
