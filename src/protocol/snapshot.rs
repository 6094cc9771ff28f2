//! Read-only snapshot encoding.
//!
//! Builds the JSON view of the full session state that the presentation
//! layer renders from: resources, turn, queue, rosters, building counts,
//! base health, and the mission log.

use serde::Serialize;

use crate::fleet::{
    GameState, Ship, ALL_BUILDINGS, ALL_ENEMIES, BASE_MAX_HP,
};

/// A ship as exposed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct ShipView {
    pub id: u32,
    pub class: &'static str,
    pub name: String,
    pub hull_number: u8,
    pub status: &'static str,
    pub hp: u32,
    pub max_hp: u32,
    pub torpedo_used: bool,
}

impl ShipView {
    fn from_ship(ship: &Ship) -> Self {
        ShipView {
            id: ship.id.0,
            class: ship.class.token(),
            name: ship.display_name(),
            hull_number: ship.hull_number,
            status: ship.status.token(),
            hp: ship.hp,
            max_hp: ship.max_hp,
            torpedo_used: ship.torpedo_used,
        }
    }
}

/// A queued construction item.
#[derive(Debug, Clone, Serialize)]
pub struct QueueView {
    pub class: &'static str,
    pub hull_number: u8,
    pub turns_remaining: u8,
}

/// An owned-building counter.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingView {
    pub kind: &'static str,
    pub owned: u8,
    pub limit: u8,
}

/// One enemy tracker: base health plus spotted ships.
#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub id: &'static str,
    pub base_hp: u32,
    pub base_max_hp: u32,
    pub ships: Vec<ShipView>,
}

/// A mission-log line.
#[derive(Debug, Clone, Serialize)]
pub struct LogView {
    pub turn: u32,
    pub message: String,
}

/// The full read-only view of engine state.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub turn: u32,
    pub gold: u32,
    pub steel: u32,
    pub gems: u32,
    pub queue: Vec<QueueView>,
    pub fleet: Vec<ShipView>,
    pub buildings: Vec<BuildingView>,
    pub base_hp: u32,
    pub base_max_hp: u32,
    pub enemies: Vec<EnemyView>,
    /// Newest first.
    pub log: Vec<LogView>,
}

/// Builds the snapshot for the current state.
pub fn snapshot(state: &GameState) -> Snapshot {
    Snapshot {
        turn: state.turn,
        gold: state.gold,
        steel: state.steel,
        gems: state.gems,
        queue: state
            .queue
            .iter()
            .map(|q| QueueView {
                class: q.class.token(),
                hull_number: q.hull_number,
                turns_remaining: q.turns_remaining,
            })
            .collect(),
        fleet: state.fleet.iter().map(ShipView::from_ship).collect(),
        buildings: ALL_BUILDINGS
            .iter()
            .map(|&kind| BuildingView {
                kind: kind.token(),
                owned: state.building_count(kind),
                limit: kind.info().limit,
            })
            .collect(),
        base_hp: state.base_hp,
        base_max_hp: BASE_MAX_HP,
        enemies: ALL_ENEMIES
            .iter()
            .map(|&enemy| {
                let force = state.enemy(enemy);
                EnemyView {
                    id: enemy.token(),
                    base_hp: force.base_hp,
                    base_max_hp: BASE_MAX_HP,
                    ships: force.ships.iter().map(ShipView::from_ship).collect(),
                }
            })
            .collect(),
        log: state
            .log
            .iter()
            .map(|entry| LogView {
                turn: entry.turn,
                message: entry.message.clone(),
            })
            .collect(),
    }
}
