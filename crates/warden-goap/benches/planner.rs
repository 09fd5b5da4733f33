use criterion::{black_box, criterion_group, criterion_main, Criterion};
use warden_core::{Agent, Beliefs, Condition, WorldState};
use warden_goap::{Planner, RuleAction, RuleGoal};

const FACTS: [&str; 12] = [
    "F0", "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11",
];

/// A chain where each action needs the previous fact, listed in reverse so every append
/// restarts the scan across the whole remaining pool.
fn chain_agent() -> Agent<()> {
    let mut agent = Agent::new(0);
    for i in (0..FACTS.len()).rev() {
        let mut action = RuleAction::new(FACTS[i]).sets(FACTS[i], true);
        if i > 0 {
            action = action.requires(Condition::is(FACTS[i - 1], true));
        }
        agent.add_action(Box::new(action));
    }
    for (i, fact) in FACTS.iter().enumerate() {
        agent.add_goal(Box::new(
            RuleGoal::new(*fact, i as f32).achieved_when(Condition::is(*fact, true)),
        ));
    }
    agent
}

fn bench_planner(c: &mut Criterion) {
    let agent = chain_agent();
    let world = WorldState::new();
    let beliefs = Beliefs::new();
    let planner = Planner::new();
    let Some(last) = agent.goals().last() else {
        return;
    };

    c.bench_function("warden-goap/create_plan(chain=12)", |b| {
        b.iter(|| {
            let plan = planner.create_plan(&agent, last.as_ref(), &world, &beliefs);
            black_box(plan.len());
        })
    });

    c.bench_function("warden-goap/select(goals=12)", |b| {
        b.iter(|| {
            let selection = planner.select(&agent, &world, &beliefs);
            black_box(selection.map(|s| s.cost));
        })
    });
}

criterion_group!(benches, bench_planner);
criterion_main!(benches);
