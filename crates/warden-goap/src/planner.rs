use warden_core::{ActionId, Agent, Beliefs, Goal, GoalId, WorldState};

/// An ordered list of actions from one agent's roster.
///
/// Steps are action ids rather than references so the plan can be held while the actions are
/// borrowed mutably for execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub steps: Vec<ActionId>,
    /// `false` for a partial plan: the action pool ran out before the goal was reached.
    pub reaches_goal: bool,
}

impl Plan {
    pub fn new(steps: Vec<ActionId>, reaches_goal: bool) -> Self {
        Self {
            steps,
            reaches_goal,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.steps.iter().copied()
    }

    /// Sum of step costs. Ids that no longer resolve on `agent` contribute nothing.
    pub fn cost<W>(&self, agent: &Agent<W>) -> f32 {
        self.iter()
            .filter_map(|id| agent.action(id))
            .map(|action| action.cost())
            .sum()
    }

    pub fn names<'a, W>(&self, agent: &'a Agent<W>) -> Vec<&'a str> {
        self.iter()
            .filter_map(|id| agent.action(id))
            .map(|action| action.name())
            .collect()
    }
}

/// The outcome of goal arbitration: which goal to pursue and how.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub goal: GoalId,
    pub plan: Plan,
    pub cost: f32,
}

/// Greedy forward-chaining planner.
///
/// The planner holds no state between calls. Every call works on a scratch copy of the world
/// state, so agents that own their state can be planned concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner;

impl Planner {
    pub fn new() -> Self {
        Self
    }

    /// Chain actions from `agent`'s roster until `goal` is achieved or the pool runs dry.
    ///
    /// The pool is scanned in list order and the first possible action is taken; each action is
    /// used at most once and every append restarts the scan at the front of the remaining pool.
    /// A goal that already holds is not treated as done: it yields an empty plan, which goal
    /// arbitration skips. When the pool is exhausted without reaching the goal the partial plan
    /// is returned with `reaches_goal == false`.
    pub fn create_plan<W>(
        &self,
        agent: &Agent<W>,
        goal: &dyn Goal,
        world: &WorldState,
        beliefs: &Beliefs,
    ) -> Plan {
        if goal.is_achieved(world, beliefs) {
            return Plan::default();
        }

        let actions = agent.available_actions();
        let mut remaining: Vec<usize> = (0..actions.len()).collect();
        let mut scratch = world.clone();
        let mut steps = Vec::new();

        let mut index = 0;
        while index < remaining.len() {
            let action = &actions[remaining[index]];
            if !action.is_possible(&scratch, beliefs) {
                index += 1;
                continue;
            }

            let id = ActionId(remaining.remove(index));
            action.apply_effects(&mut scratch);
            steps.push(id);
            tracing::trace!(
                agent = agent.id(),
                goal = goal.name(),
                action = action.name(),
                "appended action"
            );

            if goal.is_achieved(&scratch, beliefs) {
                return Plan::new(steps, true);
            }
            index = 0;
        }

        Plan::new(steps, false)
    }

    /// Pick the goal to pursue without touching the agent.
    ///
    /// Goals are visited in list order and irrelevant goals or goals with no plan are skipped.
    /// A candidate whose priority beats the held goal (or any candidate when no goal is held) is
    /// taken immediately and ends the scan. Otherwise a candidate replaces the best so far only
    /// if its plan is strictly cheaper, and it becomes the held goal for later comparisons.
    pub fn select<W>(
        &self,
        agent: &Agent<W>,
        world: &WorldState,
        beliefs: &Beliefs,
    ) -> Option<Selection> {
        let mut held = agent.current_goal();
        let mut best: Option<Selection> = None;
        let mut best_cost = f32::MAX;

        for (index, goal) in agent.goals().iter().enumerate() {
            let id = GoalId(index);
            if !goal.is_relevant(world, beliefs) {
                tracing::debug!(agent = agent.id(), goal = goal.name(), "goal not relevant");
                continue;
            }

            let plan = self.create_plan(agent, goal.as_ref(), world, beliefs);
            if plan.is_empty() {
                tracing::debug!(agent = agent.id(), goal = goal.name(), "no plan for goal");
                continue;
            }

            let cost = plan.cost(agent);
            let outranks = match held.and_then(|h| agent.goal(h)) {
                None => true,
                Some(current) => goal.priority() > current.priority(),
            };

            if outranks {
                tracing::debug!(
                    agent = agent.id(),
                    goal = goal.name(),
                    priority = goal.priority(),
                    cost,
                    "goal outranks held goal"
                );
                return Some(Selection {
                    goal: id,
                    plan,
                    cost,
                });
            }

            if cost < best_cost {
                tracing::debug!(agent = agent.id(), goal = goal.name(), cost, "cheaper plan");
                best_cost = cost;
                held = Some(id);
                best = Some(Selection {
                    goal: id,
                    plan,
                    cost,
                });
            }
        }

        best
    }

    /// Select a goal and plan, recording the winning goal as the agent's current goal.
    ///
    /// Returns an empty plan, and leaves the current goal alone, when no relevant goal produced
    /// a plan.
    pub fn find_best_plan<W>(
        &self,
        agent: &mut Agent<W>,
        world: &WorldState,
        beliefs: &Beliefs,
    ) -> Plan {
        let Some(selection) = self.select(agent, world, beliefs) else {
            return Plan::default();
        };

        agent.set_current_goal(Some(selection.goal));
        tracing::debug!(
            agent = agent.id(),
            goal = ?selection.goal,
            steps = selection.plan.len(),
            cost = selection.cost,
            "adopted goal"
        );
        selection.plan
    }
}
