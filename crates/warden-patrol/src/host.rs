use warden_core::Location;

/// The live guard a patrol action drives.
///
/// Implemented by the game (character controller, AI controller) or by a simulation. Patrol
/// actions only call it from `perform`; planning never touches the host.
pub trait GuardHost {
    /// The thief's position while the guard can see it.
    fn thief_location(&self) -> Option<Location>;

    /// Step toward `target`. Returns `true` once the guard has arrived.
    fn move_towards(&mut self, target: Location, dt_seconds: f32) -> bool;

    /// Restore up to `amount` health and return the resulting health fraction.
    fn restore_health(&mut self, amount: f32) -> f32;

    /// Advance a charge attack. Returns `true` on the tick the strike lands.
    fn charge(&mut self, dt_seconds: f32) -> bool;
}
