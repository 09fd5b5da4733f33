//! Fact vocabulary shared by the patrol actions and goals.

use warden_core::{FactKey, Facts, Location};

pub const THIEF_VISIBLE: FactKey<bool> = FactKey::new("ThiefVisible");
pub const TARGET_VISIBLE: FactKey<bool> = FactKey::new("TargetVisible");
pub const TARGET_DEFEATED: FactKey<bool> = FactKey::new("TargetDefeated");
/// Health as a fraction of maximum. A guard with no recorded health is unhurt.
pub const HEALTH: FactKey<f32> = FactKey::new("Health");

/// Belief: where the thief was last seen.
pub const LAST_KNOWN_THIEF_LOCATION: FactKey<Location> = FactKey::new("LastKnownThiefLocation");

pub const FULL_HEALTH: f32 = 1.0;

pub fn health(facts: &Facts) -> f32 {
    facts.get_or(HEALTH, FULL_HEALTH)
}
