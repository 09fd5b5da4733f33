use core::fmt;

use crate::{Action, ActionId, Goal, GoalId};

/// An agent's planning roster: the actions it can take, the goals it may pursue, and the goal it
/// currently holds.
///
/// `current_goal` is an index into the agent's own goal list. Only the planner sets it; it
/// persists across planning calls until a new goal is adopted.
pub struct Agent<W> {
    id: u64,
    actions: Vec<Box<dyn Action<W>>>,
    goals: Vec<Box<dyn Goal>>,
    current_goal: Option<GoalId>,
}

impl<W> Agent<W> {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            actions: Vec::new(),
            goals: Vec::new(),
            current_goal: None,
        }
    }

    pub fn with_action(mut self, action: impl Action<W> + 'static) -> Self {
        self.add_action(Box::new(action));
        self
    }

    pub fn with_goal(mut self, goal: impl Goal) -> Self {
        self.add_goal(Box::new(goal));
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn add_action(&mut self, action: Box<dyn Action<W>>) -> ActionId {
        self.actions.push(action);
        ActionId(self.actions.len() - 1)
    }

    pub fn add_goal(&mut self, goal: Box<dyn Goal>) -> GoalId {
        self.goals.push(goal);
        GoalId(self.goals.len() - 1)
    }

    pub fn available_actions(&self) -> &[Box<dyn Action<W>>] {
        &self.actions
    }

    pub fn goals(&self) -> &[Box<dyn Goal>] {
        &self.goals
    }

    pub fn action_ids(&self) -> impl Iterator<Item = ActionId> {
        (0..self.actions.len()).map(ActionId)
    }

    pub fn action(&self, id: ActionId) -> Option<&dyn Action<W>> {
        self.actions.get(id.0).map(|a| a.as_ref())
    }

    pub fn action_mut(&mut self, id: ActionId) -> Option<&mut (dyn Action<W> + 'static)> {
        self.actions.get_mut(id.0).map(|a| a.as_mut())
    }

    pub fn goal(&self, id: GoalId) -> Option<&dyn Goal> {
        self.goals.get(id.0).map(|g| g.as_ref())
    }

    pub fn find_goal(&self, name: &str) -> Option<GoalId> {
        self.goals.iter().position(|g| g.name() == name).map(GoalId)
    }

    pub fn find_action(&self, name: &str) -> Option<ActionId> {
        self.actions.iter().position(|a| a.name() == name).map(ActionId)
    }

    pub fn current_goal(&self) -> Option<GoalId> {
        self.current_goal
    }

    /// The goal object behind `current_goal`, if it still names a goal in the list.
    pub fn held_goal(&self) -> Option<&dyn Goal> {
        self.goal(self.current_goal?)
    }

    pub fn set_current_goal(&mut self, goal: Option<GoalId>) {
        self.current_goal = goal;
    }
}

impl<W> fmt::Debug for Agent<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field(
                "actions",
                &self.actions.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .field(
                "goals",
                &self.goals.iter().map(|g| g.name()).collect::<Vec<_>>(),
            )
            .field("current_goal", &self.current_goal)
            .finish()
    }
}
