//! End-of-turn resolution.
//!
//! Applies income, advances the build queue, deploys completed ships,
//! clears once-per-turn weapon flags, and increments the turn counter.
//! Income is credited before queue resolution, and both are logged under
//! the turn that just ended.

use crate::fleet::{
    BuildingKind, GameState, Ship, ShipId, ShipStatus, ACTIVE_CAP, BASE_GOLD_INCOME,
    BASE_STEEL_INCOME, GOLD_PER_MINE, STEEL_PER_FACTORY,
};

/// What happened during one end-of-turn resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSummary {
    pub gold_gain: u32,
    pub steel_gain: u32,
    /// Ids of ships deployed from the queue this turn.
    pub deployed: Vec<ShipId>,
}

/// Collects income, advances the build queue, and ends the turn.
pub fn end_turn(state: &mut GameState) -> TurnSummary {
    // 1. Income, scaled by owned production buildings.
    let mines = u32::from(state.building_count(BuildingKind::GoldMine));
    let factories = u32::from(state.building_count(BuildingKind::SteelFactory));
    let gold_gain = BASE_GOLD_INCOME + mines * GOLD_PER_MINE;
    let steel_gain = BASE_STEEL_INCOME + factories * STEEL_PER_FACTORY;
    state.gold = state.gold.saturating_add(gold_gain);
    state.steel = state.steel.saturating_add(steel_gain);

    // 2. Queue advancement. Completed items keep their reserved hull number.
    let mut remaining = Vec::with_capacity(state.queue.len());
    let mut completed = Vec::new();
    for mut item in state.queue.drain(..) {
        item.turns_remaining = item.turns_remaining.saturating_sub(1);
        if item.turns_remaining == 0 {
            completed.push(item);
        } else {
            remaining.push(item);
        }
    }
    state.queue = remaining;

    let mut deployed = Vec::with_capacity(completed.len());
    let mut deployed_names = Vec::with_capacity(completed.len());
    for item in completed {
        let status = if state.active_count() < ACTIVE_CAP {
            ShipStatus::Active
        } else {
            ShipStatus::Reserve
        };
        let id = state.alloc_ship_id();
        let ship = Ship::new(id, item.class, item.hull_number, status);
        deployed_names.push(ship.display_name());
        state.fleet.push(ship);
        deployed.push(id);
    }

    // 3. One-shot weapon flags recharge at turn end.
    for ship in &mut state.fleet {
        ship.torpedo_used = false;
    }

    // 4. Log under the turn that just ended.
    state.log(format!(
        "Collected +{} gold, +{} steel.",
        gold_gain, steel_gain
    ));
    if !deployed_names.is_empty() {
        state.log(format!("Deployment complete: {}.", deployed_names.join(", ")));
    }

    // 5. Only now does the counter advance.
    state.turn += 1;

    TurnSummary {
        gold_gain,
        steel_gain,
        deployed,
    }
}
