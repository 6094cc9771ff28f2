//! Session engine.
//!
//! Owns the authoritative game state and the display-roll RNG, and turns
//! parsed FCI commands into state transitions and protocol responses. Every
//! handler writes its reply to the provided writer, so the main loop and
//! tests share the same code path.

use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::dice::{roll, Weapon};
use crate::fleet::{BaseOwner, BuildingKind, Currency, EnemyId, GameState, ShipClass, ShipId};
use crate::ops::{self, Commissioned, OpError};
use crate::protocol::snapshot;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub state: GameState,
    rng: SmallRng,
}

impl Engine {
    /// Creates a new engine with a fresh session and an entropy-seeded RNG.
    pub fn new() -> Self {
        Engine {
            state: GameState::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an engine with a fixed RNG seed, for deterministic rolls.
    pub fn with_seed(seed: u64) -> Self {
        Engine {
            state: GameState::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Resets the session to initial state. The RNG is not reseeded.
    pub fn new_game(&mut self) {
        self.state = GameState::new();
    }

    /// Handles the FCI handshake: writes id lines, protocol_version, and fciok.
    pub fn handle_fci<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name flotilla").unwrap();
        writeln!(out, "id author flotilla").unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "fciok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Emits the full JSON snapshot on a single line.
    pub fn handle_status<W: Write>(&self, out: &mut W) {
        let snap = snapshot(&self.state);
        writeln!(out, "{}", serde_json::to_string(&snap).unwrap()).unwrap();
        out.flush().unwrap();
    }

    /// Applies income, advances the queue, and ends the turn.
    pub fn handle_endturn<W: Write>(&mut self, out: &mut W) {
        let summary = ops::end_turn(&mut self.state);
        writeln!(
            out,
            "ok turn {} (+{} gold, +{} steel, {} deployed)",
            self.state.turn,
            summary.gold_gain,
            summary.steel_gain,
            summary.deployed.len()
        )
        .unwrap();
        out.flush().unwrap();
    }

    /// Commissions a ship.
    pub fn handle_build<W: Write>(&mut self, class: ShipClass, rush: u8, out: &mut W) {
        match ops::commission_ship(&mut self.state, class, rush) {
            Ok(Commissioned::Deployed { id, hull_number }) => {
                writeln!(out, "ok deployed {} {} id {}", class.token(), hull_number, id).unwrap();
            }
            Ok(Commissioned::Queued { hull_number, turns }) => {
                writeln!(
                    out,
                    "ok queued {} {} {} turns",
                    class.token(),
                    hull_number,
                    turns
                )
                .unwrap();
            }
            Err(e) => Self::write_error(out, e),
        }
        out.flush().unwrap();
    }

    /// Constructs a building.
    pub fn handle_construct<W: Write>(&mut self, kind: BuildingKind, out: &mut W) {
        match ops::construct_building(&mut self.state, kind) {
            Ok(owned) => {
                writeln!(
                    out,
                    "ok constructed {} {}/{}",
                    kind.token(),
                    owned,
                    kind.info().limit
                )
                .unwrap();
            }
            Err(e) => Self::write_error(out, e),
        }
        out.flush().unwrap();
    }

    /// Flips a ship between Active and Reserve.
    pub fn handle_toggle<W: Write>(&mut self, id: ShipId, out: &mut W) {
        match ops::toggle_ship_status(&mut self.state, id) {
            Ok(status) => writeln!(out, "ok {} {}", id, status.token()).unwrap(),
            Err(e) => Self::write_error(out, e),
        }
        out.flush().unwrap();
    }

    /// Adjusts a player ship's hull points.
    pub fn handle_hp<W: Write>(&mut self, id: ShipId, delta: i64, out: &mut W) {
        match ops::adjust_ship_hp(&mut self.state, id, delta) {
            Ok(hp) => {
                let max = self.state.ship(id).map(|s| s.max_hp).unwrap_or(0);
                writeln!(out, "ok {} hp {}/{}", id, hp, max).unwrap();
            }
            Err(e) => Self::write_error(out, e),
        }
        out.flush().unwrap();
    }

    /// Adjusts a spotted enemy ship's hull points.
    pub fn handle_enemy_hp<W: Write>(&mut self, enemy: EnemyId, id: ShipId, delta: i64, out: &mut W) {
        match ops::adjust_enemy_ship_hp(&mut self.state, enemy, id, delta) {
            Ok(hp) => writeln!(out, "ok {} {} hp {}", enemy.token(), id, hp).unwrap(),
            Err(e) => Self::write_error(out, e),
        }
        out.flush().unwrap();
    }

    /// Adjusts a base HP counter.
    pub fn handle_base_hp<W: Write>(&mut self, owner: BaseOwner, delta: i64, out: &mut W) {
        let hp = ops::adjust_base_hp(&mut self.state, owner, delta);
        let token = match owner {
            BaseOwner::Player => "base",
            BaseOwner::Enemy(e) => e.token(),
        };
        writeln!(out, "ok {} hp {}", token, hp).unwrap();
        out.flush().unwrap();
    }

    /// Scraps a player ship.
    pub fn handle_scrap<W: Write>(&mut self, id: ShipId, out: &mut W) {
        match ops::scrap_ship(&mut self.state, id) {
            Ok(ship) => writeln!(out, "ok scrapped {} ({})", id, ship.display_name()).unwrap(),
            Err(e) => Self::write_error(out, e),
        }
        out.flush().unwrap();
    }

    /// Records a spotted enemy ship.
    pub fn handle_spawn<W: Write>(&mut self, enemy: EnemyId, class: ShipClass, out: &mut W) {
        match ops::spawn_enemy_ship(&mut self.state, enemy, class) {
            Ok(id) => {
                writeln!(out, "ok spotted {} {} id {}", enemy.token(), class.token(), id).unwrap();
            }
            Err(e) => Self::write_error(out, e),
        }
        out.flush().unwrap();
    }

    /// Removes a spotted enemy ship.
    pub fn handle_sink<W: Write>(&mut self, enemy: EnemyId, id: ShipId, out: &mut W) {
        match ops::remove_enemy_ship(&mut self.state, enemy, id) {
            Ok(ship) => writeln!(out, "ok sunk {} ({})", id, ship.display_name()).unwrap(),
            Err(e) => Self::write_error(out, e),
        }
        out.flush().unwrap();
    }

    /// Spends gems for gold or steel.
    pub fn handle_trade<W: Write>(
        &mut self,
        currency: Currency,
        gem_cost: u32,
        amount: u32,
        out: &mut W,
    ) {
        match ops::trade_gems(&mut self.state, currency, gem_cost, amount) {
            Ok(()) => {
                writeln!(
                    out,
                    "ok traded {} gems for {} {}",
                    gem_cost,
                    amount,
                    currency.token()
                )
                .unwrap();
            }
            Err(e) => Self::write_error(out, e),
        }
        out.flush().unwrap();
    }

    /// Claims the kill reward for a destroyed enemy ship.
    pub fn handle_bounty<W: Write>(&mut self, enemy: EnemyId, out: &mut W) {
        let reward = ops::claim_bounty(&mut self.state, enemy);
        writeln!(out, "ok bounty +{} gold", reward).unwrap();
        out.flush().unwrap();
    }

    /// Expends a ship's once-per-turn torpedo.
    pub fn handle_torp<W: Write>(&mut self, id: ShipId, out: &mut W) {
        match ops::mark_torpedo_used(&mut self.state, id) {
            Ok(true) => writeln!(out, "ok torp {} away", id).unwrap(),
            Ok(false) => writeln!(out, "ok torp {} unavailable", id).unwrap(),
            Err(e) => Self::write_error(out, e),
        }
        out.flush().unwrap();
    }

    /// Rolls a weapon's damage display and records it in the mission log.
    pub fn handle_roll<W: Write>(&mut self, weapon: Weapon, out: &mut W) {
        let result = roll(weapon, &mut self.rng);
        let dice: Vec<String> = result.dice.iter().map(u32::to_string).collect();
        self.state.log(format!(
            "{}: [{}] = {} dmg.",
            weapon.name(),
            dice.join(", "),
            result.total
        ));
        writeln!(
            out,
            "roll {} {} total {}",
            weapon.token(),
            dice.join(","),
            result.total
        )
        .unwrap();
        out.flush().unwrap();
    }

    fn write_error<W: Write>(out: &mut W, e: OpError) {
        writeln!(out, "error {}", e).unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::{STARTING_GEMS, STARTING_GOLD};

    fn output_of(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut out = Vec::new();
        f(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn handle_fci_outputs_handshake() {
        let engine = Engine::new();
        let output = output_of(|out| engine.handle_fci(out));
        assert!(output.contains("id name flotilla"));
        assert!(output.contains("protocol_version 1"));
        assert!(output.trim_end().ends_with("fciok"));
    }

    #[test]
    fn handle_isready_outputs_readyok() {
        let engine = Engine::new();
        let output = output_of(|out| engine.handle_isready(out));
        assert_eq!(output.trim(), "readyok");
    }

    #[test]
    fn handle_status_emits_json_line() {
        let engine = Engine::new();
        let output = output_of(|out| engine.handle_status(out));
        assert!(output.starts_with('{'));
        assert!(output.contains("\"gold\":150"));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn handle_endturn_reports_new_turn() {
        let mut engine = Engine::new();
        let output = output_of(|out| engine.handle_endturn(out));
        assert!(output.starts_with("ok turn 2"));
        assert_eq!(engine.state.turn, 2);
    }

    #[test]
    fn handle_build_success_and_rejection() {
        let mut engine = Engine::new();
        let output = output_of(|out| engine.handle_build(ShipClass::Destroyer, 0, out));
        assert!(output.starts_with("ok deployed destroyer 3"));

        engine.state.gold = 0;
        let output = output_of(|out| engine.handle_build(ShipClass::Destroyer, 0, out));
        assert_eq!(output.trim(), "error insufficient resources");
    }

    #[test]
    fn handle_toggle_reports_new_status() {
        let mut engine = Engine::new();
        let id = engine.state.fleet[0].id;
        let output = output_of(|out| engine.handle_toggle(id, out));
        assert_eq!(output.trim(), format!("ok {} reserve", id));
    }

    #[test]
    fn handle_hp_reports_clamped_value() {
        let mut engine = Engine::new();
        let id = engine.state.fleet[0].id;
        let output = output_of(|out| engine.handle_hp(id, -100, out));
        assert_eq!(output.trim(), format!("ok {} hp 0/5", id));
    }

    #[test]
    fn handle_unknown_ship_reports_error() {
        let mut engine = Engine::new();
        let output = output_of(|out| engine.handle_toggle(ShipId(404), out));
        assert_eq!(output.trim(), "error unknown ship 404");
    }

    #[test]
    fn handle_bounty_credits_gold() {
        let mut engine = Engine::new();
        let output = output_of(|out| engine.handle_bounty(EnemyId::Bravo, out));
        assert_eq!(output.trim(), "ok bounty +30 gold");
        assert_eq!(engine.state.gold, STARTING_GOLD + 30);
    }

    #[test]
    fn handle_roll_is_deterministic_with_seed() {
        let first = output_of(|out| Engine::with_seed(11).handle_roll(Weapon::CarrierAirWing, out));
        let second = output_of(|out| Engine::with_seed(11).handle_roll(Weapon::CarrierAirWing, out));
        assert_eq!(first, second);
        assert!(first.starts_with("roll carrier "));
    }

    #[test]
    fn handle_roll_appends_to_mission_log() {
        let mut engine = Engine::with_seed(3);
        output_of(|out| engine.handle_roll(Weapon::HeavyTorpedo, out));
        assert!(engine.state.log[0].message.contains("Heavy torpedo"));
        assert!(engine.state.log[0].message.contains("7 dmg"));
    }

    #[test]
    fn new_game_resets_state() {
        let mut engine = Engine::new();
        output_of(|out| engine.handle_endturn(out));
        output_of(|out| engine.handle_build(ShipClass::Destroyer, 0, out));
        engine.new_game();
        assert_eq!(engine.state.turn, 1);
        assert_eq!(engine.state.gold, STARTING_GOLD);
        assert_eq!(engine.state.gems, STARTING_GEMS);
        assert_eq!(engine.state.fleet.len(), 2);
    }
}
