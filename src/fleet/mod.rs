//! Fleet data model and game-state types.
//!
//! Contains the static ship/building catalogs, live ship instances, enemy
//! trackers, and the overall session state.

pub mod building;
pub mod class;
pub mod ship;
pub mod state;

pub use building::{BuildingInfo, BuildingKind, ALL_BUILDINGS, BUILDING_COUNT, BUILDING_INFO};
pub use class::{ClassInfo, ShipClass, ALL_CLASSES, CLASS_COUNT, CLASS_INFO};
pub use ship::{smallest_free_hull, Ship, ShipId, ShipStatus};
pub use state::{
    BaseOwner, Currency, EnemyForce, EnemyId, GameState, LogEntry, QueueItem, ACTIVE_CAP,
    ALL_ENEMIES, BASE_GOLD_INCOME, BASE_MAX_HP, BASE_STEEL_INCOME, ENEMY_BOUNTY_GOLD, ENEMY_COUNT,
    GEMS_PER_RUSH_TURN, GOLD_PER_MINE, RESERVE_CAP, STARTING_GEMS, STARTING_GOLD, STARTING_STEEL,
    STEEL_PER_FACTORY,
};
