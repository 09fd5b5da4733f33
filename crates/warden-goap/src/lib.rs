//! Greedy forward-chaining GOAP planner for `warden-core` agents.
//!
//! [`Planner::create_plan`] chains actions toward one goal; [`Planner::find_best_plan`] arbitrates
//! between an agent's goals by priority, then cost. [`PlanRunner`] and [`Brain`] execute the
//! result against a live host.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod brain;
pub mod planner;
pub mod rules;
pub mod runner;

pub use brain::{Brain, BrainConfig};
pub use planner::{Plan, Planner, Selection};
pub use rules::{RuleAction, RuleGoal};
pub use runner::{PlanRunner, RunStatus};
