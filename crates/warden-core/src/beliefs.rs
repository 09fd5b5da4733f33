use std::ops::{Deref, DerefMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Facts;

/// What an agent believes about the world, e.g. where it last saw a target.
///
/// Beliefs can be stale or wrong; they are kept apart from [`WorldState`](crate::WorldState) so
/// goals and actions can tell "known" from "true".
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Beliefs {
    facts: Facts,
}

impl Beliefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<Facts> for Beliefs {
    fn from(facts: Facts) -> Self {
        Self { facts }
    }
}

impl Deref for Beliefs {
    type Target = Facts;

    fn deref(&self) -> &Facts {
        &self.facts
    }
}

impl DerefMut for Beliefs {
    fn deref_mut(&mut self) -> &mut Facts {
        &mut self.facts
    }
}

impl<K> FromIterator<(K, crate::Value)> for Beliefs
where
    K: Into<std::borrow::Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, crate::Value)>>(iter: I) -> Self {
        Self {
            facts: iter.into_iter().collect(),
        }
    }
}
