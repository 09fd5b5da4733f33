use crate::{Beliefs, WorldState};

/// Index of a goal in its agent's goal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GoalId(pub usize);

/// A target condition an agent may pursue.
pub trait Goal: Send + Sync + 'static {
    fn name(&self) -> &str;

    /// Whether the goal is worth planning for right now (evaluated against live state).
    fn is_relevant(&self, world: &WorldState, beliefs: &Beliefs) -> bool;

    /// Whether the (possibly hypothetical) state satisfies the goal.
    fn is_achieved(&self, world: &WorldState, beliefs: &Beliefs) -> bool;

    /// Higher is more urgent. The scale is shared across one agent's goal list.
    fn priority(&self) -> f32;
}
