//! Ship class definitions and the static construction catalog.
//!
//! All six commissionable classes are enumerated; per-class stats (cost,
//! build time, hull points, ownership cap) are stored in a compile-time
//! lookup table indexed by the `ShipClass` enum discriminant.

/// The number of ship classes in the catalog.
pub const CLASS_COUNT: usize = 6;

/// A commissionable ship class.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShipClass {
    AircraftCarrier = 0,
    Battleship = 1,
    Cruiser = 2,
    Destroyer = 3,
    Submarine = 4,
    Decoy = 5,
}

/// All ship class variants in index order.
pub const ALL_CLASSES: [ShipClass; CLASS_COUNT] = [
    ShipClass::AircraftCarrier,
    ShipClass::Battleship,
    ShipClass::Cruiser,
    ShipClass::Destroyer,
    ShipClass::Submarine,
    ShipClass::Decoy,
];

/// Static catalog entry for a ship class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassInfo {
    pub name: &'static str,
    pub token: &'static str,
    pub gold_cost: u32,
    pub steel_cost: u32,
    pub build_turns: u8,
    pub max_hp: u32,
    /// Maximum owned + queued ships of this class per roster.
    pub cap: u8,
    pub armament: &'static str,
}

/// Catalog of class stats, indexed by `ShipClass as usize`.
pub const CLASS_INFO: [ClassInfo; CLASS_COUNT] = [
    ClassInfo {
        name: "Aircraft Carrier",
        token: "carrier",
        gold_cost: 100,
        steel_cost: 5,
        build_turns: 3,
        max_hp: 12,
        cap: 2,
        armament: "3x air wing rolls (1-6)",
    },
    ClassInfo {
        name: "Battleship",
        token: "battleship",
        gold_cost: 90,
        steel_cost: 7,
        build_turns: 2,
        max_hp: 10,
        cap: 3,
        armament: "main guns (1-10)",
    },
    ClassInfo {
        name: "Cruiser",
        token: "cruiser",
        gold_cost: 50,
        steel_cost: 5,
        build_turns: 1,
        max_hp: 7,
        cap: 4,
        armament: "guns (1-5) + heavy torpedo (7)",
    },
    ClassInfo {
        name: "Destroyer",
        token: "destroyer",
        gold_cost: 40,
        steel_cost: 4,
        build_turns: 0,
        max_hp: 5,
        cap: 5,
        armament: "guns (1-3) + heavy torpedo (7)",
    },
    ClassInfo {
        name: "Submarine",
        token: "submarine",
        gold_cost: 30,
        steel_cost: 1,
        build_turns: 0,
        max_hp: 4,
        cap: 4,
        armament: "torpedo (5), hidden",
    },
    ClassInfo {
        name: "Decoy",
        token: "decoy",
        gold_cost: 10,
        steel_cost: 0,
        build_turns: 0,
        max_hp: 1,
        cap: 6,
        armament: "none",
    },
];

impl ShipClass {
    /// Returns the catalog entry for this class.
    pub const fn info(self) -> &'static ClassInfo {
        &CLASS_INFO[self as usize]
    }

    /// Returns the full display name for this class.
    pub const fn name(self) -> &'static str {
        CLASS_INFO[self as usize].name
    }

    /// Returns the lowercase protocol token for this class.
    pub const fn token(self) -> &'static str {
        CLASS_INFO[self as usize].token
    }

    /// Returns true if this class carries a once-per-turn torpedo.
    pub const fn has_torpedo(self) -> bool {
        matches!(
            self,
            ShipClass::Cruiser | ShipClass::Destroyer | ShipClass::Submarine
        )
    }

    /// Looks up a class by its lowercase protocol token.
    pub fn from_token(token: &str) -> Option<ShipClass> {
        ALL_CLASSES.iter().find(|c| c.token() == token).copied()
    }
}
