use warden_core::{Agent, Beliefs, TickContext, WorldState};

use crate::{PlanRunner, Planner, RunStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrainConfig {
    pub think_every_ticks: u32,
    pub think_offset_ticks: u32,
    /// Budget handed to each [`PlanRunner`]; `None` lets a step run forever.
    pub max_ticks_per_step: Option<u32>,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            think_every_ticks: 1,
            think_offset_ticks: 0,
            max_ticks_per_step: None,
        }
    }
}

impl BrainConfig {
    /// Spread agents that think every `think_every_ticks` across ticks by id.
    pub fn deterministic(agent_id: u64, think_every_ticks: u32) -> Self {
        let every = think_every_ticks.max(1);
        let offset = (agent_id % (every as u64)) as u32;
        Self {
            think_every_ticks: every,
            think_offset_ticks: offset,
            ..Self::default()
        }
    }

    pub fn should_think(&self, tick: u64) -> bool {
        let every = self.think_every_ticks.max(1) as u64;
        ((tick + (self.think_offset_ticks as u64)) % every) == 0
    }
}

/// An agent, what it believes, and the plan it is carrying out.
///
/// While idle the brain plans on think ticks; once a plan starts it runs to completion (or
/// stalls) before the brain plans again.
pub struct Brain<W> {
    pub agent: Agent<W>,
    pub beliefs: Beliefs,
    pub config: BrainConfig,
    planner: Planner,
    runner: Option<PlanRunner>,
    last_status: Option<RunStatus>,
}

impl<W> Brain<W> {
    pub fn new(agent: Agent<W>) -> Self {
        Self {
            agent,
            beliefs: Beliefs::new(),
            config: BrainConfig::default(),
            planner: Planner::new(),
            runner: None,
            last_status: None,
        }
    }

    pub fn with_beliefs(mut self, beliefs: Beliefs) -> Self {
        self.beliefs = beliefs;
        self
    }

    pub fn with_config(mut self, config: BrainConfig) -> Self {
        self.config = config;
        self
    }

    pub fn runner(&self) -> Option<&PlanRunner> {
        self.runner.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.runner.is_none()
    }

    pub fn last_status(&self) -> Option<RunStatus> {
        self.last_status
    }

    /// Drop the running plan. The current goal is kept.
    pub fn cancel(&mut self) {
        if self.runner.take().is_some() {
            tracing::debug!(agent = self.agent.id(), "plan cancelled");
        }
    }

    /// Plan if idle and due, then advance the running plan by one step tick.
    ///
    /// Returns the runner status for this tick, or `None` when there was nothing to run.
    pub fn tick(
        &mut self,
        ctx: &TickContext,
        host: &mut W,
        world: &mut WorldState,
    ) -> Option<RunStatus> {
        if self.runner.is_none() && self.config.should_think(ctx.tick) {
            let plan = self
                .planner
                .find_best_plan(&mut self.agent, world, &self.beliefs);
            if !plan.is_empty() {
                tracing::info!(
                    agent = self.agent.id(),
                    tick = ctx.tick,
                    goal = self.agent.held_goal().map(|g| g.name()).unwrap_or("<none>"),
                    plan = ?plan.names(&self.agent),
                    "starting plan"
                );
                self.runner =
                    Some(PlanRunner::new(plan).with_step_budget(self.config.max_ticks_per_step));
            }
        }

        let runner = self.runner.as_mut()?;
        let status = runner.tick(ctx, &mut self.agent, host, world, &mut self.beliefs);
        if status != RunStatus::Running {
            tracing::info!(agent = self.agent.id(), tick = ctx.tick, ?status, "plan finished");
            self.runner = None;
        }
        self.last_status = Some(status);
        Some(status)
    }
}
