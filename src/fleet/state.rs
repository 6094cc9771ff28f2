//! Game state representation.
//!
//! Holds the complete snapshot of a command-center session at a given point
//! in time: currencies, build queue, player fleet, building counts, base and
//! enemy hull points, enemy trackers, the mission log, and the turn counter.

use std::collections::VecDeque;

use super::building::{BuildingKind, BUILDING_COUNT};
use super::class::ShipClass;
use super::ship::{smallest_free_hull, Ship, ShipId, ShipStatus};

/// Starting gold balance.
pub const STARTING_GOLD: u32 = 150;
/// Starting steel balance.
pub const STARTING_STEEL: u32 = 10;
/// Starting gem balance.
pub const STARTING_GEMS: u32 = 5;
/// Gold credited every turn before mine bonuses.
pub const BASE_GOLD_INCOME: u32 = 20;
/// Steel credited every turn before factory bonuses.
pub const BASE_STEEL_INCOME: u32 = 2;
/// Additional gold per owned gold mine per turn.
pub const GOLD_PER_MINE: u32 = 10;
/// Additional steel per owned steel factory per turn.
pub const STEEL_PER_FACTORY: u32 = 1;
/// Gems spent per build turn removed when rushing a commission.
pub const GEMS_PER_RUSH_TURN: u32 = 2;
/// Maximum ships in the Active bucket.
pub const ACTIVE_CAP: usize = 10;
/// Maximum ships in the Reserve bucket.
pub const RESERVE_CAP: usize = 4;
/// Maximum hull points of the player base and each enemy base.
pub const BASE_MAX_HP: u32 = 30;
/// Gold reward for reporting a destroyed enemy ship.
pub const ENEMY_BOUNTY_GOLD: u32 = 30;

/// The number of tracked enemy task forces.
pub const ENEMY_COUNT: usize = 2;

/// A tracked enemy task force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EnemyId {
    Alpha = 0,
    Bravo = 1,
}

/// All enemy variants in index order.
pub const ALL_ENEMIES: [EnemyId; ENEMY_COUNT] = [EnemyId::Alpha, EnemyId::Bravo];

impl EnemyId {
    /// Returns the display name for this enemy.
    pub const fn name(self) -> &'static str {
        match self {
            EnemyId::Alpha => "Alpha",
            EnemyId::Bravo => "Bravo",
        }
    }

    /// Returns the lowercase protocol token.
    pub const fn token(self) -> &'static str {
        match self {
            EnemyId::Alpha => "alpha",
            EnemyId::Bravo => "bravo",
        }
    }

    /// Looks up an enemy by its lowercase protocol token.
    pub fn from_token(token: &str) -> Option<EnemyId> {
        ALL_ENEMIES.iter().find(|e| e.token() == token).copied()
    }
}

/// A base HP counter owner: the player base or one of the enemy bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseOwner {
    Player,
    Enemy(EnemyId),
}

impl BaseOwner {
    /// Returns the display name for log entries.
    pub fn name(self) -> &'static str {
        match self {
            BaseOwner::Player => "Home Base",
            BaseOwner::Enemy(e) => e.name(),
        }
    }
}

/// A tradeable currency (gems are spent, never bought).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Gold,
    Steel,
}

impl Currency {
    /// Returns the lowercase protocol token.
    pub const fn token(self) -> &'static str {
        match self {
            Currency::Gold => "gold",
            Currency::Steel => "steel",
        }
    }

    /// Looks up a currency by its lowercase protocol token.
    pub fn from_token(token: &str) -> Option<Currency> {
        match token {
            "gold" => Some(Currency::Gold),
            "steel" => Some(Currency::Steel),
            _ => None,
        }
    }
}

/// A ship under construction. The hull number is reserved at commission
/// time so display naming stays stable from enqueue to deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueItem {
    pub class: ShipClass,
    pub hull_number: u8,
    pub turns_remaining: u8,
}

/// A timestamped mission-log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub turn: u32,
    pub message: String,
}

/// The roster and base tracker for one enemy task force.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyForce {
    pub base_hp: u32,
    pub ships: Vec<Ship>,
}

impl EnemyForce {
    fn new() -> Self {
        EnemyForce {
            base_hp: BASE_MAX_HP,
            ships: Vec::new(),
        }
    }

    /// Counts spotted ships of the given class.
    pub fn class_count(&self, class: ShipClass) -> usize {
        self.ships.iter().filter(|s| s.class == class).count()
    }

    /// Allocates the smallest free hull number for the given class.
    pub fn free_hull(&self, class: ShipClass) -> u8 {
        let in_use: Vec<u8> = self
            .ships
            .iter()
            .filter(|s| s.class == class)
            .map(|s| s.hull_number)
            .collect();
        smallest_free_hull(class.info().cap, &in_use)
    }
}

/// Complete session state.
///
/// All mutation goes through the operations in the `ops` module; the fields
/// are public so the snapshot encoder and tests can read them directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub turn: u32,
    pub gold: u32,
    pub steel: u32,
    pub gems: u32,
    pub queue: Vec<QueueItem>,
    pub fleet: Vec<Ship>,
    /// Owned count per building, indexed by `BuildingKind as usize`.
    pub buildings: [u8; BUILDING_COUNT],
    pub base_hp: u32,
    pub enemies: [EnemyForce; ENEMY_COUNT],
    /// Newest-first mission log; append-only, never read by the engine.
    pub log: VecDeque<LogEntry>,
    next_id: u32,
}

impl GameState {
    /// Creates the initial session state: starting currencies, two Active
    /// destroyers, full base health, empty enemy trackers.
    pub fn new() -> Self {
        let mut state = GameState {
            turn: 1,
            gold: STARTING_GOLD,
            steel: STARTING_STEEL,
            gems: STARTING_GEMS,
            queue: Vec::new(),
            fleet: Vec::new(),
            buildings: [0; BUILDING_COUNT],
            base_hp: BASE_MAX_HP,
            enemies: [EnemyForce::new(), EnemyForce::new()],
            log: VecDeque::new(),
            next_id: 1,
        };
        for hull in [1, 2] {
            let id = state.alloc_ship_id();
            state
                .fleet
                .push(Ship::new(id, ShipClass::Destroyer, hull, ShipStatus::Active));
        }
        state.log("Game started. Good luck, Commander.");
        state
    }

    /// Allocates the next process-unique ship id.
    pub fn alloc_ship_id(&mut self) -> ShipId {
        let id = ShipId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Prepends a log entry stamped with the current turn.
    pub fn log(&mut self, message: impl Into<String>) {
        self.log.push_front(LogEntry {
            turn: self.turn,
            message: message.into(),
        });
    }

    /// Counts player ships in the Active bucket.
    pub fn active_count(&self) -> usize {
        self.fleet
            .iter()
            .filter(|s| s.status == ShipStatus::Active)
            .count()
    }

    /// Counts player ships in the Reserve bucket.
    pub fn reserve_count(&self) -> usize {
        self.fleet
            .iter()
            .filter(|s| s.status == ShipStatus::Reserve)
            .count()
    }

    /// Counts owned plus queued ships of the given class.
    pub fn class_count(&self, class: ShipClass) -> usize {
        let owned = self.fleet.iter().filter(|s| s.class == class).count();
        let queued = self.queue.iter().filter(|q| q.class == class).count();
        owned + queued
    }

    /// Returns the owned count of a building.
    pub fn building_count(&self, kind: BuildingKind) -> u8 {
        self.buildings[kind as usize]
    }

    /// Allocates the smallest free hull number for the given class,
    /// considering both owned and queued ships.
    pub fn free_hull(&self, class: ShipClass) -> u8 {
        let in_use: Vec<u8> = self
            .fleet
            .iter()
            .filter(|s| s.class == class)
            .map(|s| s.hull_number)
            .chain(
                self.queue
                    .iter()
                    .filter(|q| q.class == class)
                    .map(|q| q.hull_number),
            )
            .collect();
        smallest_free_hull(class.info().cap, &in_use)
    }

    /// Finds a player ship by id.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.fleet.iter().find(|s| s.id == id)
    }

    /// Finds a player ship by id, mutably.
    pub fn ship_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.fleet.iter_mut().find(|s| s.id == id)
    }

    /// Returns the enemy force tracker.
    pub fn enemy(&self, id: EnemyId) -> &EnemyForce {
        &self.enemies[id as usize]
    }

    /// Returns the enemy force tracker, mutably.
    pub fn enemy_mut(&mut self, id: EnemyId) -> &mut EnemyForce {
        &mut self.enemies[id as usize]
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
