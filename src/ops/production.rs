//! Production operations: ship commissions, building construction,
//! gem trades, and bounty claims.
//!
//! All costs are checked up front; nothing is deducted on rejection. The
//! shipyard, when owned, discounts every commission by 20 gold and one
//! build turn, floored at zero.

use super::OpError;
use crate::fleet::{
    BuildingKind, Currency, EnemyId, GameState, QueueItem, Ship, ShipClass, ShipId, ShipStatus,
    ACTIVE_CAP, ENEMY_BOUNTY_GOLD, GEMS_PER_RUSH_TURN,
};

/// Shipyard gold discount on every ship commission.
const SHIPYARD_GOLD_DISCOUNT: u32 = 20;
/// Shipyard build-turn discount on every ship commission.
const SHIPYARD_TURN_DISCOUNT: u8 = 1;

/// The outcome of a successful commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commissioned {
    /// Build time reached zero at commission; the ship is already afloat.
    Deployed { id: ShipId, hull_number: u8 },
    /// The ship entered the build queue.
    Queued { hull_number: u8, turns: u8 },
}

/// Returns the effective commission cost for a class in the current state:
/// (gold, steel, build turns), with any shipyard discount applied.
pub fn commission_cost(state: &GameState, class: ShipClass) -> (u32, u32, u8) {
    let info = class.info();
    if state.building_count(BuildingKind::Shipyard) > 0 {
        (
            info.gold_cost.saturating_sub(SHIPYARD_GOLD_DISCOUNT),
            info.steel_cost,
            info.build_turns.saturating_sub(SHIPYARD_TURN_DISCOUNT),
        )
    } else {
        (info.gold_cost, info.steel_cost, info.build_turns)
    }
}

/// Commissions a ship of the given class, optionally rushing construction
/// by spending gems. Rush turns beyond the effective build time are
/// ignored, so a commission never charges gems for turns it cannot remove.
pub fn commission_ship(
    state: &mut GameState,
    class: ShipClass,
    rush_turns: u8,
) -> Result<Commissioned, OpError> {
    let info = class.info();
    if state.class_count(class) >= usize::from(info.cap) {
        return Err(OpError::CapacityExceeded);
    }

    let (gold_cost, steel_cost, build_turns) = commission_cost(state, class);
    let rush = rush_turns.min(build_turns);
    let gem_cost = u32::from(rush) * GEMS_PER_RUSH_TURN;
    if state.gold < gold_cost || state.steel < steel_cost || state.gems < gem_cost {
        return Err(OpError::InsufficientResources);
    }

    state.gold -= gold_cost;
    state.steel -= steel_cost;
    state.gems -= gem_cost;

    let hull_number = state.free_hull(class);
    let effective_turns = build_turns - rush;
    if effective_turns == 0 {
        let status = if state.active_count() < ACTIVE_CAP {
            ShipStatus::Active
        } else {
            ShipStatus::Reserve
        };
        let id = state.alloc_ship_id();
        let ship = Ship::new(id, class, hull_number, status);
        let name = ship.display_name();
        state.fleet.push(ship);
        if rush > 0 {
            state.log(format!("Rushed {} into service ({} gems).", name, gem_cost));
        } else {
            state.log(format!("Built {} (instant).", name));
        }
        Ok(Commissioned::Deployed { id, hull_number })
    } else {
        state.queue.push(QueueItem {
            class,
            hull_number,
            turns_remaining: effective_turns,
        });
        state.log(format!(
            "Started {} {} construction ({} turns).",
            class.name(),
            hull_number,
            effective_turns
        ));
        Ok(Commissioned::Queued {
            hull_number,
            turns: effective_turns,
        })
    }
}

/// Constructs one copy of a building.
pub fn construct_building(state: &mut GameState, kind: BuildingKind) -> Result<u8, OpError> {
    let info = kind.info();
    let owned = state.building_count(kind);
    if owned >= info.limit {
        return Err(OpError::CapacityExceeded);
    }
    if state.gold < info.gold_cost || state.steel < info.steel_cost {
        return Err(OpError::InsufficientResources);
    }

    state.gold -= info.gold_cost;
    state.steel -= info.steel_cost;
    state.buildings[kind as usize] = owned + 1;
    state.log(format!(
        "Constructed {} ({}/{}).",
        info.name,
        owned + 1,
        info.limit
    ));
    Ok(owned + 1)
}

/// Spends gems for gold or steel at the caller-quoted rate.
pub fn trade_gems(
    state: &mut GameState,
    currency: Currency,
    gem_cost: u32,
    amount: u32,
) -> Result<(), OpError> {
    if state.gems < gem_cost {
        return Err(OpError::InsufficientResources);
    }
    state.gems -= gem_cost;
    match currency {
        Currency::Gold => state.gold = state.gold.saturating_add(amount),
        Currency::Steel => state.steel = state.steel.saturating_add(amount),
    }
    state.log(format!(
        "Traded {} gems for {} {}.",
        gem_cost,
        amount,
        currency.token()
    ));
    Ok(())
}

/// Credits the fixed gold reward for a reported enemy ship kill.
pub fn claim_bounty(state: &mut GameState, enemy: EnemyId) -> u32 {
    state.gold = state.gold.saturating_add(ENEMY_BOUNTY_GOLD);
    state.log(format!(
        "Victory at sea! {} ship destroyed, +{} gold.",
        enemy.name(),
        ENEMY_BOUNTY_GOLD
    ));
    ENEMY_BOUNTY_GOLD
}
