//! World state, beliefs, and the action/goal model shared by Warden's planners and behaviours.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod agent;
pub mod beliefs;
pub mod condition;
pub mod facts;
pub mod goal;
pub mod tick;
pub mod world;

pub use action::{Action, ActionId};
pub use agent::Agent;
pub use beliefs::Beliefs;
pub use condition::{all_hold, Cmp, Condition};
pub use facts::{FactError, FactKey, FactType, Facts, Location, Value, ValueKind};
pub use goal::{Goal, GoalId};
pub use tick::TickContext;
pub use world::WorldState;
