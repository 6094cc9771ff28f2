//! Building definitions and the static infrastructure catalog.
//!
//! Buildings are pure counters on the game state: each owned copy adds a
//! per-turn income bonus, except the shipyard which discounts every ship
//! commission instead.

/// The number of building kinds.
pub const BUILDING_COUNT: usize = 3;

/// A constructible building kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BuildingKind {
    GoldMine = 0,
    SteelFactory = 1,
    Shipyard = 2,
}

/// All building variants in index order.
pub const ALL_BUILDINGS: [BuildingKind; BUILDING_COUNT] = [
    BuildingKind::GoldMine,
    BuildingKind::SteelFactory,
    BuildingKind::Shipyard,
];

/// Static catalog entry for a building kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingInfo {
    pub name: &'static str,
    pub token: &'static str,
    pub gold_cost: u32,
    pub steel_cost: u32,
    /// Maximum owned copies.
    pub limit: u8,
    pub effect: &'static str,
}

/// Catalog of building stats, indexed by `BuildingKind as usize`.
pub const BUILDING_INFO: [BuildingInfo; BUILDING_COUNT] = [
    BuildingInfo {
        name: "Gold Mine",
        token: "mine",
        gold_cost: 20,
        steel_cost: 0,
        limit: 3,
        effect: "+10 gold/turn",
    },
    BuildingInfo {
        name: "Steel Factory",
        token: "factory",
        gold_cost: 40,
        steel_cost: 2,
        limit: 3,
        effect: "+1 steel/turn",
    },
    BuildingInfo {
        name: "Shipyard",
        token: "shipyard",
        gold_cost: 100,
        steel_cost: 5,
        limit: 1,
        effect: "-20 gold, -1 turn on ship commissions",
    },
];

impl BuildingKind {
    /// Returns the catalog entry for this building.
    pub const fn info(self) -> &'static BuildingInfo {
        &BUILDING_INFO[self as usize]
    }

    /// Returns the full display name for this building.
    pub const fn name(self) -> &'static str {
        BUILDING_INFO[self as usize].name
    }

    /// Returns the lowercase protocol token for this building.
    pub const fn token(self) -> &'static str {
        BUILDING_INFO[self as usize].token
    }

    /// Looks up a building by its lowercase protocol token.
    pub fn from_token(token: &str) -> Option<BuildingKind> {
        ALL_BUILDINGS.iter().find(|b| b.token() == token).copied()
    }
}
