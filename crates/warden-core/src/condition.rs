use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Facts, Value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Cmp {
    #[default]
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Cmp {
    /// Ints and floats compare numerically; other kinds only support `Eq`/`Ne`.
    pub fn compare(self, lhs: &Value, rhs: &Value) -> bool {
        if let (Some(a), Some(b)) = (lhs.as_number(), rhs.as_number()) {
            return match self {
                Cmp::Eq => a == b,
                Cmp::Ne => a != b,
                Cmp::Lt => a < b,
                Cmp::Le => a <= b,
                Cmp::Gt => a > b,
                Cmp::Ge => a >= b,
            };
        }

        match self {
            Cmp::Eq => lhs == rhs,
            Cmp::Ne => lhs != rhs,
            Cmp::Lt | Cmp::Le | Cmp::Gt | Cmp::Ge => false,
        }
    }
}

/// A single test against a fact, e.g. `Health < 0.3`.
///
/// An absent fact is read as the zero value of the expected kind (`false`, `0`, `0.0`, origin).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Condition {
    pub key: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cmp: Cmp,
    pub value: Value,
}

impl Condition {
    pub fn new(key: impl Into<Cow<'static, str>>, cmp: Cmp, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            cmp,
            value: value.into(),
        }
    }

    pub fn is(key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Self::new(key, Cmp::Eq, value)
    }

    pub fn holds(&self, facts: &Facts) -> bool {
        let actual = facts
            .value(&self.key)
            .copied()
            .unwrap_or_else(|| self.value.zero());
        self.cmp.compare(&actual, &self.value)
    }
}

/// `true` when every condition holds; an empty list is vacuously satisfied.
pub fn all_hold(conditions: &[Condition], facts: &Facts) -> bool {
    conditions.iter().all(|c| c.holds(facts))
}
