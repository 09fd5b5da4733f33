use warden_core::{Action, Beliefs, TickContext, WorldState};

use crate::keys::{
    health, FULL_HEALTH, HEALTH, LAST_KNOWN_THIEF_LOCATION, TARGET_DEFEATED, TARGET_VISIBLE,
    THIEF_VISIBLE,
};
use crate::GuardHost;

/// Chase the thief toward where it was last seen until sight of it is lost.
#[derive(Debug, Clone)]
pub struct ChaseThief {
    cost: f32,
    lost_sight: bool,
}

impl ChaseThief {
    pub fn new(cost: f32) -> Self {
        Self {
            cost,
            lost_sight: false,
        }
    }
}

impl<W: GuardHost + 'static> Action<W> for ChaseThief {
    fn name(&self) -> &str {
        "chase_thief"
    }

    fn is_possible(&self, world: &WorldState, _beliefs: &Beliefs) -> bool {
        world.get_or(THIEF_VISIBLE, false)
    }

    // A chase ends when the thief slips out of sight.
    fn apply_effects(&self, world: &mut WorldState) {
        world.set(THIEF_VISIBLE, false);
    }

    fn perform(
        &mut self,
        ctx: &TickContext,
        host: &mut W,
        world: &mut WorldState,
        beliefs: &mut Beliefs,
    ) {
        match host.thief_location() {
            Some(location) => {
                beliefs.set(LAST_KNOWN_THIEF_LOCATION, location);
                world.set(THIEF_VISIBLE, true);
                // Reaching the spot does not end the chase; only losing sight does.
                if host.move_towards(location, ctx.dt_seconds) {
                    tracing::trace!(?location, "reached thief");
                }
            }
            None => {
                world.set(THIEF_VISIBLE, false);
                self.lost_sight = true;
                tracing::debug!(
                    last_known = ?beliefs.get(LAST_KNOWN_THIEF_LOCATION),
                    "lost sight of thief"
                );
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.lost_sight
    }

    fn cost(&self) -> f32 {
        self.cost
    }

    fn reset(&mut self) {
        self.lost_sight = false;
    }
}

/// Recover health over time once it drops below the threshold.
#[derive(Debug, Clone)]
pub struct Heal {
    cost: f32,
    threshold: f32,
    rate_per_second: f32,
    healed: bool,
}

impl Heal {
    pub fn new(cost: f32, threshold: f32, rate_per_second: f32) -> Self {
        Self {
            cost,
            threshold,
            rate_per_second,
            healed: false,
        }
    }
}

impl<W: GuardHost + 'static> Action<W> for Heal {
    fn name(&self) -> &str {
        "heal"
    }

    fn is_possible(&self, world: &WorldState, _beliefs: &Beliefs) -> bool {
        health(world) < self.threshold
    }

    fn apply_effects(&self, world: &mut WorldState) {
        world.set(HEALTH, FULL_HEALTH);
    }

    fn perform(
        &mut self,
        ctx: &TickContext,
        host: &mut W,
        world: &mut WorldState,
        _beliefs: &mut Beliefs,
    ) {
        let current = host.restore_health(self.rate_per_second * ctx.dt_seconds);
        world.set(HEALTH, current);
        self.healed = current >= FULL_HEALTH;
    }

    fn is_complete(&self) -> bool {
        self.healed
    }

    fn cost(&self) -> f32 {
        self.cost
    }

    fn reset(&mut self) {
        self.healed = false;
    }
}

/// Charge a visible target until the strike lands.
#[derive(Debug, Clone)]
pub struct ChargeAttack {
    cost: f32,
    landed: bool,
}

impl ChargeAttack {
    pub fn new(cost: f32) -> Self {
        Self {
            cost,
            landed: false,
        }
    }
}

impl<W: GuardHost + 'static> Action<W> for ChargeAttack {
    fn name(&self) -> &str {
        "charge_attack"
    }

    fn is_possible(&self, world: &WorldState, _beliefs: &Beliefs) -> bool {
        world.get_or(TARGET_VISIBLE, false)
    }

    fn apply_effects(&self, world: &mut WorldState) {
        world.set(TARGET_DEFEATED, true);
    }

    fn perform(
        &mut self,
        ctx: &TickContext,
        host: &mut W,
        world: &mut WorldState,
        _beliefs: &mut Beliefs,
    ) {
        if host.charge(ctx.dt_seconds) {
            self.landed = true;
            world.set(TARGET_DEFEATED, true);
        }
    }

    fn is_complete(&self) -> bool {
        self.landed
    }

    fn cost(&self) -> f32 {
        self.cost
    }

    fn reset(&mut self) {
        self.landed = false;
    }
}
