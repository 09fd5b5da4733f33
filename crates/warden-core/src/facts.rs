use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point in world space.
pub type Location = [f32; 3];

/// A single fact or belief value.
///
/// Values are plain data so that a [`Facts`] container can be duplicated with a
/// regular `Clone` and never alias the original.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f32),
    Location(Location),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Location,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Location => "location",
        })
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Location(_) => ValueKind::Location,
        }
    }

    /// The value an absent fact of the same kind is read as.
    pub fn zero(&self) -> Value {
        match self {
            Value::Bool(_) => Value::Bool(false),
            Value::Int(_) => Value::Int(0),
            Value::Float(_) => Value::Float(0.0),
            Value::Location(_) => Value::Location([0.0; 3]),
        }
    }

    /// Numeric view used for ordered comparisons; ints and floats compare with each other.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Int(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Bool(_) | Value::Location(_) => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<Location> for Value {
    fn from(value: Location) -> Self {
        Value::Location(value)
    }
}

/// Rust types that can be stored behind a typed [`FactKey`].
pub trait FactType: Copy + 'static {
    const KIND: ValueKind;

    fn into_value(self) -> Value;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FactType for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl FactType for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl FactType for f32 {
    const KIND: ValueKind = ValueKind::Float;

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    // Scenario files write `1` as often as `1.0`.
    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Float(v) => Some(v),
            Value::Int(v) => Some(v as f32),
            _ => None,
        }
    }
}

impl FactType for Location {
    const KIND: ValueKind = ValueKind::Location;

    fn into_value(self) -> Value {
        Value::Location(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Location(v) => Some(v),
            _ => None,
        }
    }
}

/// Typed name of a fact.
///
/// Keys are `const`-constructible so a behaviour crate can declare its vocabulary up front:
///
/// ```
/// use warden_core::FactKey;
///
/// const THIEF_VISIBLE: FactKey<bool> = FactKey::new("ThiefVisible");
/// assert_eq!(THIEF_VISIBLE.name(), "ThiefVisible");
/// ```
#[derive(Debug, PartialEq)]
pub struct FactKey<T: FactType> {
    name: &'static str,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: FactType> Copy for FactKey<T> {}

impl<T: FactType> Clone for FactKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: FactType> FactKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _phantom: PhantomData,
        }
    }

    pub fn name(self) -> &'static str {
        self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactError {
    #[error("fact `{key}` holds a {found} value, expected {expected}")]
    TypeMismatch {
        key: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },
}

/// Keyed fact storage shared by [`WorldState`](crate::WorldState) and
/// [`Beliefs`](crate::Beliefs).
///
/// A missing key is never an error: readers pick the default that makes sense for the fact.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Facts {
    values: BTreeMap<Cow<'static, str>, Value>,
}

impl Facts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn set_value(&mut self, name: impl Into<Cow<'static, str>>, value: Value) -> Option<Value> {
        self.values.insert(name.into(), value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_ref(), v))
    }

    pub fn try_get<T: FactType>(&self, key: FactKey<T>) -> Result<Option<T>, FactError> {
        let Some(value) = self.values.get(key.name()) else {
            return Ok(None);
        };
        T::from_value(value)
            .map(Some)
            .ok_or(FactError::TypeMismatch {
                key: key.name(),
                expected: T::KIND,
                found: value.kind(),
            })
    }

    /// Typed read. A value of the wrong kind is logged and read as absent.
    pub fn get<T: FactType>(&self, key: FactKey<T>) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "ignoring fact of unexpected kind");
                None
            }
        }
    }

    pub fn get_or<T: FactType>(&self, key: FactKey<T>, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    pub fn set<T: FactType>(&mut self, key: FactKey<T>, value: T) {
        self.values.insert(Cow::Borrowed(key.name()), value.into_value());
    }

    pub fn remove<T: FactType>(&mut self, key: FactKey<T>) -> Option<T> {
        let value = self.values.remove(key.name())?;
        T::from_value(&value)
    }
}

impl<K> FromIterator<(K, Value)> for Facts
where
    K: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K> Extend<(K, Value)> for Facts
where
    K: Into<Cow<'static, str>>,
{
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        self.values
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEALTH: FactKey<f32> = FactKey::new("Health");
    const ALERT: FactKey<bool> = FactKey::new("Alert");

    #[test]
    fn float_reads_accept_integers() {
        let mut facts = Facts::new();
        facts.set_value("Health", Value::Int(1));
        assert_eq!(facts.get(HEALTH), Some(1.0));
    }

    #[test]
    fn mismatched_kind_reads_as_absent() {
        let mut facts = Facts::new();
        facts.set_value("Alert", Value::Float(0.5));
        assert_eq!(facts.get(ALERT), None);
        assert_eq!(
            facts.try_get(ALERT),
            Err(FactError::TypeMismatch {
                key: "Alert",
                expected: ValueKind::Bool,
                found: ValueKind::Float,
            })
        );
    }
}
