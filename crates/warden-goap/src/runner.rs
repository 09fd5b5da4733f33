use warden_core::{ActionId, Agent, Beliefs, TickContext, WorldState};

use crate::Plan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    Done,
    /// A step overran its tick budget or no longer resolves on the agent.
    Stalled,
}

/// Execute a [`Plan`] one step at a time against the live world.
///
/// Each tick performs the current action once and advances when the action reports completion.
/// Actions are reset as their step begins, so a plan may reuse instances that ran before.
#[derive(Debug, Clone)]
pub struct PlanRunner {
    plan: Plan,
    index: usize,
    step_ticks: u32,
    max_ticks_per_step: Option<u32>,
    stalled: bool,
}

impl PlanRunner {
    pub fn new(plan: Plan) -> Self {
        Self {
            plan,
            index: 0,
            step_ticks: 0,
            max_ticks_per_step: None,
            stalled: false,
        }
    }

    pub fn with_step_budget(mut self, max_ticks_per_step: Option<u32>) -> Self {
        self.max_ticks_per_step = max_ticks_per_step;
        self
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn len(&self) -> usize {
        self.plan.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_action(&self) -> Option<ActionId> {
        self.plan.steps.get(self.index).copied()
    }

    pub fn status(&self) -> RunStatus {
        if self.stalled {
            RunStatus::Stalled
        } else if self.index >= self.plan.len() {
            RunStatus::Done
        } else {
            RunStatus::Running
        }
    }

    pub fn tick<W>(
        &mut self,
        ctx: &TickContext,
        agent: &mut Agent<W>,
        host: &mut W,
        world: &mut WorldState,
        beliefs: &mut Beliefs,
    ) -> RunStatus {
        if self.status() != RunStatus::Running {
            return self.status();
        }

        let id = self.plan.steps[self.index];
        let agent_id = agent.id();
        let Some(action) = agent.action_mut(id) else {
            tracing::warn!(agent = agent_id, action = ?id, "plan step does not resolve");
            self.stalled = true;
            return RunStatus::Stalled;
        };

        if self.step_ticks == 0 {
            action.reset();
            tracing::debug!(agent = agent_id, action = action.name(), tick = ctx.tick, "step started");
        }

        action.perform(ctx, host, world, beliefs);
        self.step_ticks = self.step_ticks.saturating_add(1);

        if action.is_complete() {
            tracing::debug!(
                agent = agent_id,
                action = action.name(),
                ticks = self.step_ticks,
                "step complete"
            );
            self.index += 1;
            self.step_ticks = 0;
            return self.status();
        }

        if let Some(max) = self.max_ticks_per_step {
            if self.step_ticks >= max {
                tracing::warn!(
                    agent = agent_id,
                    action = action.name(),
                    ticks = self.step_ticks,
                    "step exceeded its tick budget"
                );
                self.stalled = true;
            }
        }

        self.status()
    }
}
