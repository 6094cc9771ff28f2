//! Ship instances and hull-number allocation.
//!
//! A `Ship` is a live roster entry with a stable id, a per-class hull number
//! used for display naming, a deployment status, and clamped hull points.

use super::class::ShipClass;

/// Stable, process-unique identifier for a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipId(pub u32);

impl std::fmt::Display for ShipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The deployment bucket a player ship occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipStatus {
    Active,
    Reserve,
}

impl ShipStatus {
    /// Returns the opposite bucket.
    pub const fn flipped(self) -> ShipStatus {
        match self {
            ShipStatus::Active => ShipStatus::Reserve,
            ShipStatus::Reserve => ShipStatus::Active,
        }
    }

    /// Returns the lowercase protocol token.
    pub const fn token(self) -> &'static str {
        match self {
            ShipStatus::Active => "active",
            ShipStatus::Reserve => "reserve",
        }
    }
}

/// A live ship in a roster (player fleet or an enemy tracker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    pub id: ShipId,
    pub class: ShipClass,
    /// Display sequence number, unique per class within the owning roster.
    pub hull_number: u8,
    pub status: ShipStatus,
    pub hp: u32,
    pub max_hp: u32,
    /// Once-per-turn torpedo flag; cleared at end of turn.
    pub torpedo_used: bool,
}

impl Ship {
    /// Creates a full-health ship of the given class.
    pub fn new(id: ShipId, class: ShipClass, hull_number: u8, status: ShipStatus) -> Self {
        let max_hp = class.info().max_hp;
        Ship {
            id,
            class,
            hull_number,
            status,
            hp: max_hp,
            max_hp,
            torpedo_used: false,
        }
    }

    /// Returns the display name, e.g. "Destroyer 2".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.class.name(), self.hull_number)
    }
}

/// Returns the smallest positive hull number not present in `in_use`.
///
/// Falls back to `cap + 1` when every number up to the class cap is taken;
/// the cap precondition on commissioning makes that unreachable in practice,
/// but the allocator must stay total.
pub fn smallest_free_hull(cap: u8, in_use: &[u8]) -> u8 {
    for n in 1..=cap {
        if !in_use.contains(&n) {
            return n;
        }
    }
    cap + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ship_has_full_health() {
        let ship = Ship::new(ShipId(7), ShipClass::Battleship, 1, ShipStatus::Active);
        assert_eq!(ship.hp, ship.max_hp);
        assert_eq!(ship.hp, ShipClass::Battleship.info().max_hp);
        assert!(!ship.torpedo_used);
    }

    #[test]
    fn display_name_includes_hull_number() {
        let ship = Ship::new(ShipId(1), ShipClass::Destroyer, 3, ShipStatus::Reserve);
        assert_eq!(ship.display_name(), "Destroyer 3");
    }

    #[test]
    fn status_flips_both_ways() {
        assert_eq!(ShipStatus::Active.flipped(), ShipStatus::Reserve);
        assert_eq!(ShipStatus::Reserve.flipped(), ShipStatus::Active);
    }

    #[test]
    fn hull_allocation_fills_gaps_first() {
        assert_eq!(smallest_free_hull(5, &[]), 1);
        assert_eq!(smallest_free_hull(5, &[1, 2]), 3);
        assert_eq!(smallest_free_hull(5, &[2, 3]), 1);
        assert_eq!(smallest_free_hull(5, &[1, 3]), 2);
    }

    #[test]
    fn hull_allocation_overflows_past_cap() {
        assert_eq!(smallest_free_hull(2, &[1, 2]), 3);
    }
}
