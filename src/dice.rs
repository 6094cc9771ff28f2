//! Weapon roll tables for the combat display.
//!
//! Rolls are cosmetic: they are shown to the player (and recorded in the
//! mission log) but never fed back into the game state. The generator is
//! generic over `rand::Rng` so sessions seeded in tests roll
//! deterministically.

use rand::Rng;

/// A rollable weapon on the combat display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weapon {
    /// Three air-wing dice, 1-6 each, summed.
    CarrierAirWing,
    /// Main guns, 1-10.
    BattleshipGuns,
    /// Guns, 1-5.
    CruiserGuns,
    /// Guns, 1-3.
    DestroyerGuns,
    /// Fixed 7 damage.
    HeavyTorpedo,
    /// Fixed 5 damage.
    SubTorpedo,
    /// Three defense dice, 1-5 each, summed.
    BaseDefense,
}

/// All weapon variants.
pub const ALL_WEAPONS: [Weapon; 7] = [
    Weapon::CarrierAirWing,
    Weapon::BattleshipGuns,
    Weapon::CruiserGuns,
    Weapon::DestroyerGuns,
    Weapon::HeavyTorpedo,
    Weapon::SubTorpedo,
    Weapon::BaseDefense,
];

impl Weapon {
    /// Returns the display name for log entries.
    pub const fn name(self) -> &'static str {
        match self {
            Weapon::CarrierAirWing => "Carrier air wing",
            Weapon::BattleshipGuns => "Battleship guns",
            Weapon::CruiserGuns => "Cruiser guns",
            Weapon::DestroyerGuns => "Destroyer guns",
            Weapon::HeavyTorpedo => "Heavy torpedo",
            Weapon::SubTorpedo => "Sub torpedo",
            Weapon::BaseDefense => "Base defense",
        }
    }

    /// Returns the lowercase protocol token.
    pub const fn token(self) -> &'static str {
        match self {
            Weapon::CarrierAirWing => "carrier",
            Weapon::BattleshipGuns => "battleship",
            Weapon::CruiserGuns => "cruiser",
            Weapon::DestroyerGuns => "destroyer",
            Weapon::HeavyTorpedo => "htorp",
            Weapon::SubTorpedo => "storp",
            Weapon::BaseDefense => "base",
        }
    }

    /// Looks up a weapon by its lowercase protocol token.
    pub fn from_token(token: &str) -> Option<Weapon> {
        ALL_WEAPONS.iter().find(|w| w.token() == token).copied()
    }
}

/// The individual dice and total of one weapon roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll {
    pub weapon: Weapon,
    pub dice: Vec<u32>,
    pub total: u32,
}

/// Rolls a weapon's damage display.
pub fn roll<R: Rng>(weapon: Weapon, rng: &mut R) -> Roll {
    let dice: Vec<u32> = match weapon {
        Weapon::CarrierAirWing => (0..3).map(|_| rng.gen_range(1..=6)).collect(),
        Weapon::BattleshipGuns => vec![rng.gen_range(1..=10)],
        Weapon::CruiserGuns => vec![rng.gen_range(1..=5)],
        Weapon::DestroyerGuns => vec![rng.gen_range(1..=3)],
        Weapon::HeavyTorpedo => vec![7],
        Weapon::SubTorpedo => vec![5],
        Weapon::BaseDefense => (0..3).map(|_| rng.gen_range(1..=5)).collect(),
    };
    let total = dice.iter().sum();
    Roll {
        weapon,
        dice,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn token_roundtrip() {
        for weapon in ALL_WEAPONS {
            assert_eq!(Weapon::from_token(weapon.token()), Some(weapon));
        }
        assert_eq!(Weapon::from_token("railgun"), None);
    }

    #[test]
    fn torpedoes_deal_fixed_damage() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(roll(Weapon::HeavyTorpedo, &mut rng).total, 7);
        assert_eq!(roll(Weapon::SubTorpedo, &mut rng).total, 5);
    }

    #[test]
    fn rolls_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let r = roll(Weapon::CarrierAirWing, &mut rng);
            assert_eq!(r.dice.len(), 3);
            assert!(r.dice.iter().all(|&d| (1..=6).contains(&d)));
            assert!((3..=18).contains(&r.total));

            let r = roll(Weapon::BattleshipGuns, &mut rng);
            assert!((1..=10).contains(&r.total));

            let r = roll(Weapon::DestroyerGuns, &mut rng);
            assert!((1..=3).contains(&r.total));

            let r = roll(Weapon::BaseDefense, &mut rng);
            assert!(r.dice.iter().all(|&d| (1..=5).contains(&d)));
        }
    }

    #[test]
    fn seeded_rolls_are_reproducible() {
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        for weapon in ALL_WEAPONS {
            assert_eq!(roll(weapon, &mut a), roll(weapon, &mut b));
        }
    }

    #[test]
    fn total_is_sum_of_dice() {
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..50 {
            let r = roll(Weapon::BaseDefense, &mut rng);
            assert_eq!(r.total, r.dice.iter().sum::<u32>());
        }
    }
}
