//! Scenario files: an agent's rule actions and goals, the world it starts in, and the arena it
//! acts on.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use warden_core::{Agent, Beliefs, WorldState};
use warden_goap::{Brain, BrainConfig, RuleAction, RuleGoal};
use warden_patrol::{guard_agent, PatrolConfig};

use crate::arena::Arena;

#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("action `{0}` is defined more than once")]
    DuplicateAction(String),
    #[error("goal `{0}` is defined more than once")]
    DuplicateGoal(String),
    #[error("action `{action}` has invalid cost {cost}; costs must be finite and non-negative")]
    InvalidCost { action: String, cost: f32 },
    #[error("goal `{goal}` has non-finite priority {priority}")]
    NonFinitePriority { goal: String, priority: f32 },
    #[error("current goal `{0}` is not one of the scenario's goals")]
    UnknownGoal(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrainSettings {
    #[serde(default = "default_think_every_ticks")]
    pub think_every_ticks: u32,
    #[serde(default)]
    pub max_ticks_per_step: Option<u32>,
}

impl Default for BrainSettings {
    fn default() -> Self {
        Self {
            think_every_ticks: default_think_every_ticks(),
            max_ticks_per_step: None,
        }
    }
}

fn default_think_every_ticks() -> u32 {
    1
}

fn default_dt_seconds() -> f32 {
    0.1
}

/// A scenario loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub agent_id: u64,

    /// Simulated seconds per tick
    #[serde(default = "default_dt_seconds")]
    pub dt_seconds: f32,

    #[serde(default)]
    pub brain: BrainSettings,

    #[serde(default)]
    pub world: WorldState,

    #[serde(default)]
    pub beliefs: Beliefs,

    #[serde(default)]
    pub arena: Arena,

    /// Stock guard roster (heal, charge attack, chase) placed ahead of the rule actions
    #[serde(default)]
    pub guard: Option<PatrolConfig>,

    /// Goal the agent already holds, by name
    #[serde(default)]
    pub current_goal: Option<String>,

    #[serde(default)]
    pub actions: Vec<RuleAction>,

    #[serde(default)]
    pub goals: Vec<RuleGoal>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario from {}", path.display()))?;
        let scenario = Self::from_yaml(&content)
            .with_context(|| format!("Invalid scenario in {}", path.display()))?;
        Ok(scenario)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let scenario: Self =
            serde_yaml::from_str(content).context("Failed to parse scenario YAML")?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> std::result::Result<(), ScenarioError> {
        let agent = self.roster();

        let mut seen = HashSet::new();
        for action in agent.available_actions() {
            let name = action.name();
            if !seen.insert(name) {
                return Err(ScenarioError::DuplicateAction(name.to_owned()));
            }
            let cost = action.cost();
            if !(cost.is_finite() && cost >= 0.0) {
                return Err(ScenarioError::InvalidCost {
                    action: name.to_owned(),
                    cost,
                });
            }
        }

        let mut seen = HashSet::new();
        for goal in agent.goals() {
            let name = goal.name();
            if !seen.insert(name) {
                return Err(ScenarioError::DuplicateGoal(name.to_owned()));
            }
            let priority = goal.priority();
            if !priority.is_finite() {
                return Err(ScenarioError::NonFinitePriority {
                    goal: name.to_owned(),
                    priority,
                });
            }
        }

        if let Some(name) = &self.current_goal {
            if !seen.contains(name.as_str()) {
                return Err(ScenarioError::UnknownGoal(name.clone()));
            }
        }

        Ok(())
    }

    fn roster(&self) -> Agent<Arena> {
        let mut agent = match &self.guard {
            Some(config) => guard_agent(self.agent_id, config),
            None => Agent::new(self.agent_id),
        };
        for action in &self.actions {
            agent.add_action(Box::new(action.clone()));
        }
        for goal in &self.goals {
            agent.add_goal(Box::new(goal.clone()));
        }
        agent
    }

    /// Build the agent, with its current goal resolved by name.
    pub fn agent(&self) -> std::result::Result<Agent<Arena>, ScenarioError> {
        let mut agent = self.roster();
        if let Some(name) = &self.current_goal {
            let id = agent
                .find_goal(name)
                .ok_or_else(|| ScenarioError::UnknownGoal(name.clone()))?;
            agent.set_current_goal(Some(id));
        }
        Ok(agent)
    }

    pub fn brain(&self) -> std::result::Result<Brain<Arena>, ScenarioError> {
        let config = BrainConfig {
            max_ticks_per_step: self.brain.max_ticks_per_step,
            ..BrainConfig::deterministic(self.agent_id, self.brain.think_every_ticks)
        };
        Ok(Brain::new(self.agent()?)
            .with_beliefs(self.beliefs.clone())
            .with_config(config))
    }
}
