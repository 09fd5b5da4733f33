#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning for the stock guard roster built by [`guard_agent`](crate::guard_agent).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PatrolConfig {
    pub chase_cost: f32,
    pub heal_cost: f32,
    pub charge_cost: f32,
    /// Health fraction below which the guard wants to, and is able to, heal.
    pub heal_threshold: f32,
    pub heal_rate_per_second: f32,
    pub recover_priority: f32,
    pub defeat_priority: f32,
    pub pursue_priority: f32,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            chase_cost: 1.0,
            heal_cost: 2.0,
            charge_cost: 3.0,
            heal_threshold: 0.35,
            heal_rate_per_second: 0.25,
            recover_priority: 8.0,
            defeat_priority: 6.0,
            pursue_priority: 5.0,
        }
    }
}
