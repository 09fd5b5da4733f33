use warden_core::{Action, ActionId, Agent, Beliefs, TickContext, WorldState};
use warden_goap::{Plan, PlanRunner, RunStatus};

#[derive(Default)]
struct Log {
    performed: Vec<&'static str>,
}

struct Countdown {
    name: &'static str,
    needed: u32,
    done: u32,
}

impl Countdown {
    fn new(name: &'static str, needed: u32) -> Self {
        Self {
            name,
            needed,
            done: 0,
        }
    }
}

impl Action<Log> for Countdown {
    fn name(&self) -> &str {
        self.name
    }

    fn is_possible(&self, _world: &WorldState, _beliefs: &Beliefs) -> bool {
        true
    }

    fn apply_effects(&self, _world: &mut WorldState) {}

    fn perform(
        &mut self,
        _ctx: &TickContext,
        host: &mut Log,
        _world: &mut WorldState,
        _beliefs: &mut Beliefs,
    ) {
        host.performed.push(self.name);
        self.done += 1;
    }

    fn is_complete(&self) -> bool {
        self.done >= self.needed
    }

    fn cost(&self) -> f32 {
        self.needed as f32
    }

    fn reset(&mut self) {
        self.done = 0;
    }
}

fn agent() -> Agent<Log> {
    Agent::new(1)
        .with_action(Countdown::new("slow", 3))
        .with_action(Countdown::new("fast", 1))
}

fn run_to_end(runner: &mut PlanRunner, agent: &mut Agent<Log>, host: &mut Log) -> Vec<RunStatus> {
    let mut world = WorldState::new();
    let mut beliefs = Beliefs::new();
    let mut statuses = Vec::new();
    for tick in 0..20u64 {
        let ctx = TickContext::new(tick, 0.1);
        let status = runner.tick(&ctx, agent, host, &mut world, &mut beliefs);
        statuses.push(status);
        if status != RunStatus::Running {
            break;
        }
    }
    statuses
}

#[test]
fn advances_only_when_step_completes() {
    let mut agent = agent();
    let mut host = Log::default();
    let mut runner = PlanRunner::new(Plan::new(vec![ActionId(0), ActionId(1)], true));

    let statuses = run_to_end(&mut runner, &mut agent, &mut host);

    assert_eq!(
        statuses,
        vec![
            RunStatus::Running,
            RunStatus::Running,
            RunStatus::Running,
            RunStatus::Done
        ]
    );
    assert_eq!(host.performed, vec!["slow", "slow", "slow", "fast"]);
    assert_eq!(runner.current_action(), None);
}

#[test]
fn steps_are_reset_before_reuse() {
    let mut agent = agent();
    let mut host = Log::default();

    let mut first = PlanRunner::new(Plan::new(vec![ActionId(0)], true));
    run_to_end(&mut first, &mut agent, &mut host);
    let mut second = PlanRunner::new(Plan::new(vec![ActionId(0)], true));
    run_to_end(&mut second, &mut agent, &mut host);

    assert_eq!(host.performed.len(), 6);
}

#[test]
fn step_budget_stalls_the_plan() {
    let mut agent = Agent::new(1).with_action(Countdown::new("endless", 50));
    let mut host = Log::default();
    let mut runner =
        PlanRunner::new(Plan::new(vec![ActionId(0)], true)).with_step_budget(Some(2));

    let statuses = run_to_end(&mut runner, &mut agent, &mut host);
    assert_eq!(statuses, vec![RunStatus::Running, RunStatus::Stalled]);

    // A stalled runner no longer drives its action.
    let mut world = WorldState::new();
    let mut beliefs = Beliefs::new();
    let status = runner.tick(
        &TickContext::new(99, 0.1),
        &mut agent,
        &mut host,
        &mut world,
        &mut beliefs,
    );
    assert_eq!(status, RunStatus::Stalled);
    assert_eq!(host.performed.len(), 2);
}

#[test]
fn dangling_step_stalls() {
    let mut agent = agent();
    let mut host = Log::default();
    let mut runner = PlanRunner::new(Plan::new(vec![ActionId(9)], true));

    assert_eq!(
        run_to_end(&mut runner, &mut agent, &mut host),
        vec![RunStatus::Stalled]
    );
    assert!(host.performed.is_empty());
}

#[test]
fn empty_plan_is_already_done() {
    let runner = PlanRunner::new(Plan::default());
    assert!(runner.is_empty());
    assert_eq!(runner.status(), RunStatus::Done);
}

/// A host that borrows its journal from the caller.
struct Journal<'a> {
    lines: &'a mut Vec<String>,
}

struct Note(&'static str);

impl<'a> Action<Journal<'a>> for Note {
    fn name(&self) -> &str {
        self.0
    }

    fn is_possible(&self, _world: &WorldState, _beliefs: &Beliefs) -> bool {
        true
    }

    fn apply_effects(&self, world: &mut WorldState) {
        world.set_value(self.0, true.into());
    }

    fn perform(
        &mut self,
        _ctx: &TickContext,
        host: &mut Journal<'a>,
        _world: &mut WorldState,
        _beliefs: &mut Beliefs,
    ) {
        host.lines.push(self.0.to_owned());
    }

    fn is_complete(&self) -> bool {
        true
    }

    fn cost(&self) -> f32 {
        1.0
    }
}

#[test]
fn host_may_borrow_from_the_caller() {
    let mut lines = Vec::new();
    {
        let mut agent: Agent<Journal<'_>> = Agent::new(3).with_action(Note("wrote"));
        let mut host = Journal { lines: &mut lines };
        let mut world = WorldState::new();
        let mut beliefs = Beliefs::new();
        let mut runner = PlanRunner::new(Plan::new(vec![ActionId(0)], true));

        assert_eq!(Plan::new(vec![ActionId(0)], true).names(&agent), vec!["wrote"]);
        let status = runner.tick(
            &TickContext::new(0, 0.1),
            &mut agent,
            &mut host,
            &mut world,
            &mut beliefs,
        );
        assert_eq!(status, RunStatus::Done);
        assert!(format!("{agent:?}").contains("wrote"));
    }
    assert_eq!(lines, vec!["wrote".to_owned()]);
}
