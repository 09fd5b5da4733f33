use std::ops::{Deref, DerefMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Facts;

/// Ground-truth facts about the environment.
///
/// `Clone` is a deep copy. The planner relies on this to evaluate hypothetical plans against a
/// scratch state while the live state stays untouched.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct WorldState {
    facts: Facts,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<Facts> for WorldState {
    fn from(facts: Facts) -> Self {
        Self { facts }
    }
}

impl Deref for WorldState {
    type Target = Facts;

    fn deref(&self) -> &Facts {
        &self.facts
    }
}

impl DerefMut for WorldState {
    fn deref_mut(&mut self) -> &mut Facts {
        &mut self.facts
    }
}

impl<K> FromIterator<(K, crate::Value)> for WorldState
where
    K: Into<std::borrow::Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, crate::Value)>>(iter: I) -> Self {
        Self {
            facts: iter.into_iter().collect(),
        }
    }
}
