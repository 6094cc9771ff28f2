//! State-transition operations.
//!
//! Every operation is synchronous and atomic: preconditions are checked
//! against the exclusive `&mut GameState` borrow before any field is
//! touched, so a rejected call leaves the state exactly as it found it.

pub mod production;
pub mod roster;
pub mod turn;

use crate::fleet::ShipId;

pub use production::{
    claim_bounty, commission_cost, commission_ship, construct_building, trade_gems, Commissioned,
};
pub use roster::{
    adjust_base_hp, adjust_enemy_ship_hp, adjust_ship_hp, mark_torpedo_used, remove_enemy_ship,
    scrap_ship, spawn_enemy_ship, toggle_ship_status,
};
pub use turn::{end_turn, TurnSummary};

/// Rejection kinds for engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OpError {
    /// One or more currency preconditions failed.
    #[error("insufficient resources")]
    InsufficientResources,

    /// An ownership, roster, or bucket cap would be violated.
    #[error("capacity exceeded")]
    CapacityExceeded,

    /// The referenced ship is not in the targeted roster.
    #[error("unknown ship {0}")]
    UnknownShip(ShipId),
}
