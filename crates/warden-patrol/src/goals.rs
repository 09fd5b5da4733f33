use warden_core::{Beliefs, Goal, WorldState};

use crate::keys::{health, LAST_KNOWN_THIEF_LOCATION, TARGET_DEFEATED, TARGET_VISIBLE, THIEF_VISIBLE};

/// Keep after a thief that is in sight or was recently seen.
#[derive(Debug, Clone)]
pub struct PursueThief {
    priority: f32,
}

impl PursueThief {
    pub fn new(priority: f32) -> Self {
        Self { priority }
    }
}

impl Goal for PursueThief {
    fn name(&self) -> &str {
        "pursue_thief"
    }

    fn is_relevant(&self, world: &WorldState, beliefs: &Beliefs) -> bool {
        world.get_or(THIEF_VISIBLE, false) || beliefs.contains(LAST_KNOWN_THIEF_LOCATION.name())
    }

    fn is_achieved(&self, world: &WorldState, _beliefs: &Beliefs) -> bool {
        !world.get_or(THIEF_VISIBLE, false)
    }

    fn priority(&self) -> f32 {
        self.priority
    }
}

#[derive(Debug, Clone)]
pub struct RecoverHealth {
    priority: f32,
    threshold: f32,
}

impl RecoverHealth {
    pub fn new(priority: f32, threshold: f32) -> Self {
        Self {
            priority,
            threshold,
        }
    }
}

impl Goal for RecoverHealth {
    fn name(&self) -> &str {
        "recover_health"
    }

    fn is_relevant(&self, world: &WorldState, _beliefs: &Beliefs) -> bool {
        health(world) < self.threshold
    }

    fn is_achieved(&self, world: &WorldState, _beliefs: &Beliefs) -> bool {
        health(world) >= self.threshold
    }

    fn priority(&self) -> f32 {
        self.priority
    }
}

#[derive(Debug, Clone)]
pub struct DefeatTarget {
    priority: f32,
}

impl DefeatTarget {
    pub fn new(priority: f32) -> Self {
        Self { priority }
    }
}

impl Goal for DefeatTarget {
    fn name(&self) -> &str {
        "defeat_target"
    }

    fn is_relevant(&self, world: &WorldState, _beliefs: &Beliefs) -> bool {
        world.get_or(TARGET_VISIBLE, false)
    }

    fn is_achieved(&self, world: &WorldState, _beliefs: &Beliefs) -> bool {
        world.get_or(TARGET_DEFEATED, false)
    }

    fn priority(&self) -> f32 {
        self.priority
    }
}
