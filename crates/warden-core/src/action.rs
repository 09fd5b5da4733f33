use crate::{Beliefs, TickContext, WorldState};

/// Index of an action in its agent's action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(pub usize);

/// A single atomic behaviour an agent can plan with and later execute.
///
/// The planning half (`is_possible`, `apply_effects`, `cost`) must be free of side effects: the
/// same instance is evaluated against many scratch states. The execution half (`perform`,
/// `is_complete`) acts on the live host and may keep transient state, which `reset` clears
/// before each new use.
///
/// `W` is the live host the action drives (a character controller, a simulation, `()` for
/// purely symbolic actions). The host may borrow; the action itself is stored boxed and so must
/// be `'static`.
///
/// Implementors must keep precondition and effect consistent: if `is_possible` holds and
/// `apply_effects` runs, the resulting state should describe the action's intended outcome.
pub trait Action<W>: Send {
    fn name(&self) -> &str;

    fn is_possible(&self, world: &WorldState, beliefs: &Beliefs) -> bool;

    fn apply_effects(&self, world: &mut WorldState);

    fn perform(
        &mut self,
        ctx: &TickContext,
        host: &mut W,
        world: &mut WorldState,
        beliefs: &mut Beliefs,
    );

    fn is_complete(&self) -> bool;

    /// Non-negative planning cost.
    fn cost(&self) -> f32;

    fn reset(&mut self) {}
}
