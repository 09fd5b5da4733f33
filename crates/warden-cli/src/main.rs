//! Warden CLI - plan and simulate GOAP agents from scenario files.
//!
//! - `warden plan <scenario>` - pick a goal and print its plan
//! - `warden run <scenario>` - drive a brain over a number of ticks

mod arena;
mod scenario;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use warden_core::TickContext;
use warden_goap::{Planner, RunStatus};

use crate::scenario::Scenario;

#[derive(Parser)]
#[command(name = "warden")]
#[command(about = "Goal-oriented action planning for game agents", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a goal and print the plan for it
    Plan {
        /// Scenario file (YAML)
        scenario: PathBuf,
    },

    /// Simulate the agent's brain against the scenario world
    Run {
        /// Scenario file (YAML)
        scenario: PathBuf,

        /// Number of ticks to simulate
        #[arg(long, default_value_t = 20)]
        ticks: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Plan { scenario } => plan(&scenario),
        Commands::Run { scenario, ticks } => run(&scenario, ticks),
    }
}

fn plan(path: &Path) -> Result<()> {
    let scenario = Scenario::load(path)?;
    let mut agent = scenario.agent()?;

    let plan = Planner::new().find_best_plan(&mut agent, &scenario.world, &scenario.beliefs);
    if plan.is_empty() {
        println!("No plan: no relevant goal could be advanced");
        return Ok(());
    }

    let goal = agent.held_goal().map(|g| g.name()).unwrap_or("<none>");
    println!("Goal: {goal}");
    println!("Cost: {}", plan.cost(&agent));
    if !plan.reaches_goal {
        println!("(partial: the goal is not reached)");
    }
    for (step, id) in plan.iter().enumerate() {
        if let Some(action) = agent.action(id) {
            println!("  {}. {} (cost {})", step + 1, action.name(), action.cost());
        }
    }

    Ok(())
}

fn run(path: &Path, ticks: u64) -> Result<()> {
    let scenario = Scenario::load(path)?;
    let mut brain = scenario.brain()?;
    let mut world = scenario.world.clone();
    let mut arena = scenario.arena.clone();

    tracing::info!(
        scenario = %path.display(),
        agent = scenario.agent_id,
        ticks,
        "Simulation started"
    );

    let mut finished = 0usize;
    let mut stalled = 0usize;
    for tick in 0..ticks {
        arena.advance(scenario.dt_seconds);
        let ctx = TickContext::new(tick, scenario.dt_seconds);
        match brain.tick(&ctx, &mut arena, &mut world) {
            Some(RunStatus::Done) => finished += 1,
            Some(RunStatus::Stalled) => stalled += 1,
            Some(RunStatus::Running) | None => {}
        }
    }

    println!("Plans completed: {finished}");
    println!("Plans stalled: {stalled}");
    println!(
        "Current goal: {}",
        brain.agent.held_goal().map(|g| g.name()).unwrap_or("<none>")
    );
    println!("Guard: {:?} (health {})", arena.guard, arena.health);
    match arena.thief {
        Some(thief) => println!("Thief: {thief:?}"),
        None => println!("Thief: <none>"),
    }
    print_facts("World", &world)?;
    print_facts("Beliefs", &brain.beliefs)?;

    Ok(())
}

fn print_facts<T: serde::Serialize>(label: &str, facts: &T) -> Result<()> {
    println!("{label}:");
    print!("{}", indent(&serde_yaml::to_string(facts)?));
    Ok(())
}

fn indent(text: &str) -> String {
    text.lines().map(|line| format!("  {line}\n")).collect()
}
