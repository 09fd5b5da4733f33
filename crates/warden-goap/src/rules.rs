//! Data-driven actions and goals built from [`Condition`]s.
//!
//! Rule actions cover the common case of "if these facts hold, these facts become true". They
//! are what scenario files deserialize into, and they are handy for tests and tools that do not
//! need a custom [`Action`] implementation.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use warden_core::{
    all_hold, Action, Beliefs, Condition, Facts, Goal, TickContext, Value, WorldState,
};

fn default_cost() -> f32 {
    1.0
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleAction {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "default_cost"))]
    pub cost: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub preconditions: Vec<Condition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Facts,
    #[cfg_attr(feature = "serde", serde(skip))]
    done: bool,
}

impl RuleAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost: default_cost(),
            preconditions: Vec::new(),
            effects: Facts::new(),
            done: false,
        }
    }

    pub fn with_cost(mut self, cost: f32) -> Self {
        self.cost = cost;
        self
    }

    pub fn requires(mut self, condition: Condition) -> Self {
        self.preconditions.push(condition);
        self
    }

    pub fn sets(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.effects.set_value(key, value.into());
        self
    }

    fn write_effects(&self, world: &mut WorldState) {
        for (key, value) in self.effects.iter() {
            world.set_value(key.to_owned(), *value);
        }
    }
}

/// Rule actions work for any host: performing one writes its effects into the live world and
/// completes immediately.
impl<W> Action<W> for RuleAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_possible(&self, world: &WorldState, _beliefs: &Beliefs) -> bool {
        all_hold(&self.preconditions, world)
    }

    fn apply_effects(&self, world: &mut WorldState) {
        self.write_effects(world);
    }

    fn perform(
        &mut self,
        _ctx: &TickContext,
        _host: &mut W,
        world: &mut WorldState,
        _beliefs: &mut Beliefs,
    ) {
        self.write_effects(world);
        self.done = true;
    }

    fn is_complete(&self) -> bool {
        self.done
    }

    fn cost(&self) -> f32 {
        self.cost
    }

    fn reset(&mut self) {
        self.done = false;
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleGoal {
    pub name: String,
    pub priority: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub relevant_when: Vec<Condition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub achieved_when: Vec<Condition>,
}

impl RuleGoal {
    pub fn new(name: impl Into<String>, priority: f32) -> Self {
        Self {
            name: name.into(),
            priority,
            relevant_when: Vec::new(),
            achieved_when: Vec::new(),
        }
    }

    pub fn relevant_when(mut self, condition: Condition) -> Self {
        self.relevant_when.push(condition);
        self
    }

    pub fn achieved_when(mut self, condition: Condition) -> Self {
        self.achieved_when.push(condition);
        self
    }
}

impl Goal for RuleGoal {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_relevant(&self, world: &WorldState, _beliefs: &Beliefs) -> bool {
        all_hold(&self.relevant_when, world)
    }

    fn is_achieved(&self, world: &WorldState, _beliefs: &Beliefs) -> bool {
        all_hold(&self.achieved_when, world)
    }

    fn priority(&self) -> f32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perform_completes_and_reset_rearms() {
        let mut action = RuleAction::new("raise_alarm").sets("Alarm", true);
        let mut world = WorldState::new();
        let mut beliefs = Beliefs::new();
        let ctx = TickContext::new(0, 0.1);

        assert!(!Action::<()>::is_complete(&action));
        Action::<()>::perform(&mut action, &ctx, &mut (), &mut world, &mut beliefs);
        assert!(Action::<()>::is_complete(&action));
        assert_eq!(world.value("Alarm"), Some(&Value::Bool(true)));

        Action::<()>::reset(&mut action);
        assert!(!Action::<()>::is_complete(&action));
    }
}
