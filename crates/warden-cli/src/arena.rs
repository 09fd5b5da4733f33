//! A small simulated guard and thief that scenario runs drive.

use serde::Deserialize;

use warden_core::Location;
use warden_patrol::GuardHost;

/// The live host for scenario runs.
///
/// The guard moves at `speed` toward wherever its actions send it; the thief drifts by
/// `thief_velocity` each second and is visible while within `sight_range`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Arena {
    pub guard: Location,
    pub thief: Option<Location>,
    pub thief_velocity: Location,
    pub sight_range: f32,
    pub speed: f32,
    pub health: f32,
    pub charge_seconds: f32,
    #[serde(skip)]
    charged: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            guard: [0.0; 3],
            thief: None,
            thief_velocity: [0.0; 3],
            sight_range: 10.0,
            speed: 2.0,
            health: 1.0,
            charge_seconds: 0.5,
            charged: 0.0,
        }
    }
}

impl Arena {
    /// Move the thief along its velocity.
    pub fn advance(&mut self, dt_seconds: f32) {
        if let Some(thief) = self.thief.as_mut() {
            for (axis, velocity) in thief.iter_mut().zip(self.thief_velocity) {
                *axis += velocity * dt_seconds;
            }
        }
    }
}

fn distance(a: Location, b: Location) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

impl GuardHost for Arena {
    fn thief_location(&self) -> Option<Location> {
        self.thief
            .filter(|thief| distance(self.guard, *thief) <= self.sight_range)
    }

    fn move_towards(&mut self, target: Location, dt_seconds: f32) -> bool {
        let step = self.speed * dt_seconds;
        let remaining = distance(self.guard, target);
        if remaining <= step {
            self.guard = target;
            return true;
        }

        let scale = step / remaining;
        for (axis, goal) in self.guard.iter_mut().zip(target) {
            *axis += (goal - *axis) * scale;
        }
        false
    }

    fn restore_health(&mut self, amount: f32) -> f32 {
        self.health = (self.health + amount).min(1.0);
        self.health
    }

    fn charge(&mut self, dt_seconds: f32) -> bool {
        self.charged += dt_seconds;
        if self.charged >= self.charge_seconds {
            self.charged = 0.0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thief_is_seen_only_within_range() {
        let mut arena = Arena {
            thief: Some([9.0, 0.0, 0.0]),
            thief_velocity: [2.0, 0.0, 0.0],
            ..Arena::default()
        };
        assert_eq!(arena.thief_location(), Some([9.0, 0.0, 0.0]));

        arena.advance(1.0);
        assert_eq!(arena.thief_location(), None);
    }

    #[test]
    fn guard_steps_toward_target_then_arrives() {
        let mut arena = Arena::default();
        assert!(!arena.move_towards([3.0, 4.0, 0.0], 1.0));
        assert!((distance(arena.guard, [3.0, 4.0, 0.0]) - 3.0).abs() < 1e-5);

        assert!(!arena.move_towards([3.0, 4.0, 0.0], 1.0));
        assert!(arena.move_towards([3.0, 4.0, 0.0], 1.0));
        assert_eq!(arena.guard, [3.0, 4.0, 0.0]);
    }

    #[test]
    fn charge_lands_after_its_wind_up() {
        let mut arena = Arena {
            charge_seconds: 0.25,
            ..Arena::default()
        };
        assert!(!arena.charge(0.125));
        assert!(arena.charge(0.125));
        assert!(!arena.charge(0.125));
    }
}
