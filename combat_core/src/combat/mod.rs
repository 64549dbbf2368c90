//! Combat resolution - Zone rolls, crits, exchanges and the session state machine

mod action;
mod result;
mod session;
mod simulation;

pub use action::{pick_zone, resolve_action, resolve_exchange, resolve_zone_index, ActionInput};
pub use result::{CombatTurnResult, ExchangeResult, Side, TurnRecord};
pub use session::{CombatSession, CombatStatus, PlayerCombatant};
pub use simulation::CombatSimulation;
