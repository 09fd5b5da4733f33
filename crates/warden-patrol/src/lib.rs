//! Guard behaviours for Warden agents.
//!
//! The actions here drive a [`GuardHost`] during execution and describe their outcomes with the
//! fact vocabulary in [`keys`], so the planner can chain them.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod actions;
pub mod config;
pub mod goals;
pub mod host;
pub mod keys;

pub use actions::{ChargeAttack, ChaseThief, Heal};
pub use config::PatrolConfig;
pub use goals::{DefeatTarget, PursueThief, RecoverHealth};
pub use host::GuardHost;

use warden_core::Agent;

/// The stock guard: heal, charge attack, and chase, with goals ordered by urgency.
pub fn guard_agent<W: GuardHost + 'static>(id: u64, config: &PatrolConfig) -> Agent<W> {
    Agent::new(id)
        .with_action(Heal::new(
            config.heal_cost,
            config.heal_threshold,
            config.heal_rate_per_second,
        ))
        .with_action(ChargeAttack::new(config.charge_cost))
        .with_action(ChaseThief::new(config.chase_cost))
        .with_goal(RecoverHealth::new(
            config.recover_priority,
            config.heal_threshold,
        ))
        .with_goal(DefeatTarget::new(config.defeat_priority))
        .with_goal(PursueThief::new(config.pursue_priority))
}
