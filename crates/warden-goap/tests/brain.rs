use warden_core::{Agent, Condition, GoalId, TickContext, Value, WorldState};
use warden_goap::{Brain, BrainConfig, RuleAction, RuleGoal, RunStatus};

fn defeat_brain() -> Brain<()> {
    let agent = Agent::new(1)
        .with_action(RuleAction::new("MoveTo").sets("AtTarget", true))
        .with_action(
            RuleAction::new("Attack")
                .with_cost(2.0)
                .requires(Condition::is("AtTarget", true))
                .sets("TargetDefeated", true),
        )
        .with_goal(
            RuleGoal::new("Defeat", 5.0)
                .relevant_when(Condition::is("TargetVisible", true))
                .achieved_when(Condition::is("TargetDefeated", true)),
        );
    Brain::new(agent)
}

#[test]
fn brain_plans_and_executes_to_completion() {
    let mut brain = defeat_brain().with_config(BrainConfig {
        think_every_ticks: 100,
        ..BrainConfig::default()
    });
    let mut world: WorldState = [("TargetVisible", Value::Bool(true))].into_iter().collect();

    let t0 = brain.tick(&TickContext::new(0, 0.1), &mut (), &mut world);
    assert_eq!(t0, Some(RunStatus::Running));
    assert_eq!(brain.agent.current_goal(), Some(GoalId(0)));
    assert_eq!(world.value("AtTarget"), Some(&Value::Bool(true)));
    let runner = brain.runner().expect("plan in progress");
    assert_eq!(runner.len(), 2);
    assert_eq!(runner.current_index(), 1);

    let t1 = brain.tick(&TickContext::new(1, 0.1), &mut (), &mut world);
    assert_eq!(t1, Some(RunStatus::Done));
    assert_eq!(world.value("TargetDefeated"), Some(&Value::Bool(true)));
    assert!(brain.is_idle());

    // Not a think tick: nothing to run.
    assert_eq!(brain.tick(&TickContext::new(2, 0.1), &mut (), &mut world), None);
    assert_eq!(brain.last_status(), Some(RunStatus::Done));
}

#[test]
fn brain_only_plans_on_think_ticks() {
    let mut brain = defeat_brain().with_config(BrainConfig {
        think_every_ticks: 4,
        think_offset_ticks: 1,
        max_ticks_per_step: None,
    });
    let mut world: WorldState = [("TargetVisible", Value::Bool(true))].into_iter().collect();

    for tick in 0..3u64 {
        assert_eq!(brain.tick(&TickContext::new(tick, 0.1), &mut (), &mut world), None);
    }
    assert_eq!(
        brain.tick(&TickContext::new(3, 0.1), &mut (), &mut world),
        Some(RunStatus::Running)
    );
}

#[test]
fn cancel_drops_the_running_plan() {
    let mut brain = defeat_brain();
    let mut world: WorldState = [("TargetVisible", Value::Bool(true))].into_iter().collect();

    brain.tick(&TickContext::new(0, 0.1), &mut (), &mut world);
    assert!(!brain.is_idle());

    brain.cancel();
    assert!(brain.is_idle());
    assert_eq!(brain.agent.current_goal(), Some(GoalId(0)));
}

#[test]
fn deterministic_config_spreads_agents() {
    let a = BrainConfig::deterministic(6, 4);
    assert_eq!(a.think_offset_ticks, 2);
    assert!(a.should_think(2));
    assert!(!a.should_think(4));

    let every_tick = BrainConfig::deterministic(6, 0);
    assert_eq!(every_tick.think_every_ticks, 1);
    assert!(every_tick.should_think(17));
}
