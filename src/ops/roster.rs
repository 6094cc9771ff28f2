//! Roster operations: status toggles, HP adjustments, scrapping, and
//! enemy-tracker bookkeeping.
//!
//! HP adjustments saturate into [0, max] and never reject; removal is
//! always a separate explicit action, so a ship at zero hull points stays
//! on the roster until scrapped or sunk.

use super::OpError;
use crate::fleet::{
    BaseOwner, EnemyId, GameState, Ship, ShipClass, ShipId, ShipStatus, ACTIVE_CAP, BASE_MAX_HP,
    RESERVE_CAP,
};

/// Clamps `hp + delta` into [0, max]. The addition saturates so the full
/// i64 delta range stays total.
fn clamp_hp(hp: u32, max: u32, delta: i64) -> u32 {
    let next = i64::from(hp).saturating_add(delta);
    next.clamp(0, i64::from(max)) as u32
}

/// Flips a player ship between Active and Reserve. Rejected when the
/// destination bucket is already at its cap; the status is unchanged on
/// rejection and the move is logged only on success.
pub fn toggle_ship_status(state: &mut GameState, id: ShipId) -> Result<ShipStatus, OpError> {
    let ship = state.ship(id).ok_or(OpError::UnknownShip(id))?;
    let target = ship.status.flipped();
    let room = match target {
        ShipStatus::Active => state.active_count() < ACTIVE_CAP,
        ShipStatus::Reserve => state.reserve_count() < RESERVE_CAP,
    };
    if !room {
        return Err(OpError::CapacityExceeded);
    }

    let name = ship.display_name();
    if let Some(ship) = state.ship_mut(id) {
        ship.status = target;
    }
    state.log(format!("{} moved to {}.", name, target.token()));
    Ok(target)
}

/// Adjusts a player ship's hull points by `delta`, saturating into
/// [0, max]. Returns the new HP value.
pub fn adjust_ship_hp(state: &mut GameState, id: ShipId, delta: i64) -> Result<u32, OpError> {
    adjust_roster_ship_hp(state, None, id, delta)
}

/// Adjusts a spotted enemy ship's hull points, same clamping rule.
pub fn adjust_enemy_ship_hp(
    state: &mut GameState,
    enemy: EnemyId,
    id: ShipId,
    delta: i64,
) -> Result<u32, OpError> {
    adjust_roster_ship_hp(state, Some(enemy), id, delta)
}

fn adjust_roster_ship_hp(
    state: &mut GameState,
    enemy: Option<EnemyId>,
    id: ShipId,
    delta: i64,
) -> Result<u32, OpError> {
    let roster = match enemy {
        None => &mut state.fleet,
        Some(e) => &mut state.enemy_mut(e).ships,
    };
    let ship = roster
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(OpError::UnknownShip(id))?;
    ship.hp = clamp_hp(ship.hp, ship.max_hp, delta);
    Ok(ship.hp)
}

/// Adjusts a base HP counter (player or enemy), saturating into
/// [0, BASE_MAX_HP]. Returns the new value.
pub fn adjust_base_hp(state: &mut GameState, owner: BaseOwner, delta: i64) -> u32 {
    let hp = match owner {
        BaseOwner::Player => &mut state.base_hp,
        BaseOwner::Enemy(e) => &mut state.enemy_mut(e).base_hp,
    };
    *hp = clamp_hp(*hp, BASE_MAX_HP, delta);
    *hp
}

/// Marks a player ship's once-per-turn torpedo as expended. Returns true
/// if the flag was newly set; false when the class has no torpedo or the
/// torpedo was already used this turn.
pub fn mark_torpedo_used(state: &mut GameState, id: ShipId) -> Result<bool, OpError> {
    let ship = state.ship_mut(id).ok_or(OpError::UnknownShip(id))?;
    if !ship.class.has_torpedo() || ship.torpedo_used {
        return Ok(false);
    }
    ship.torpedo_used = true;
    let name = ship.display_name();
    state.log(format!("{} torpedo away.", name));
    Ok(true)
}

/// Removes a player ship from the fleet, freeing its hull number.
pub fn scrap_ship(state: &mut GameState, id: ShipId) -> Result<Ship, OpError> {
    let idx = state
        .fleet
        .iter()
        .position(|s| s.id == id)
        .ok_or(OpError::UnknownShip(id))?;
    let ship = state.fleet.remove(idx);
    state.log(format!("{} scrapped.", ship.display_name()));
    Ok(ship)
}

/// Records a newly spotted enemy ship. Same per-class cap as the player's
/// commissions, but no cost and no build delay.
pub fn spawn_enemy_ship(
    state: &mut GameState,
    enemy: EnemyId,
    class: ShipClass,
) -> Result<ShipId, OpError> {
    let force = state.enemy(enemy);
    if force.class_count(class) >= usize::from(class.info().cap) {
        return Err(OpError::CapacityExceeded);
    }
    let hull_number = force.free_hull(class);
    let id = state.alloc_ship_id();
    let ship = Ship::new(id, class, hull_number, ShipStatus::Active);
    let name = ship.display_name();
    state.enemy_mut(enemy).ships.push(ship);
    state.log(format!("{} {} spotted.", enemy.name(), name));
    Ok(id)
}

/// Removes a spotted ship from an enemy tracker, freeing its hull number.
pub fn remove_enemy_ship(state: &mut GameState, enemy: EnemyId, id: ShipId) -> Result<Ship, OpError> {
    let idx = state
        .enemy(enemy)
        .ships
        .iter()
        .position(|s| s.id == id)
        .ok_or(OpError::UnknownShip(id))?;
    let ship = state.enemy_mut(enemy).ships.remove(idx);
    state.log(format!("{} {} sunk.", enemy.name(), ship.display_name()));
    Ok(ship)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starting_destroyer(state: &GameState) -> ShipId {
        state.fleet[0].id
    }

    #[test]
    fn toggle_moves_between_buckets() {
        let mut state = GameState::new();
        let id = starting_destroyer(&state);
        assert_eq!(toggle_ship_status(&mut state, id).unwrap(), ShipStatus::Reserve);
        assert_eq!(state.active_count(), 1);
        assert_eq!(state.reserve_count(), 1);
        assert_eq!(toggle_ship_status(&mut state, id).unwrap(), ShipStatus::Active);
        assert_eq!(state.reserve_count(), 0);
    }

    #[test]
    fn toggle_rejects_full_reserve_bucket() {
        let mut state = GameState::new();
        // Fill Reserve to cap with decoys.
        for hull in 1..=RESERVE_CAP as u8 {
            let id = state.alloc_ship_id();
            state
                .fleet
                .push(Ship::new(id, ShipClass::Decoy, hull, ShipStatus::Reserve));
        }
        let id = starting_destroyer(&state);
        let before = state.clone();
        let err = toggle_ship_status(&mut state, id).unwrap_err();
        assert_eq!(err, OpError::CapacityExceeded);
        assert_eq!(state, before);
        assert_eq!(state.ship(id).unwrap().status, ShipStatus::Active);
    }

    #[test]
    fn toggle_unknown_ship() {
        let mut state = GameState::new();
        let err = toggle_ship_status(&mut state, ShipId(999)).unwrap_err();
        assert_eq!(err, OpError::UnknownShip(ShipId(999)));
    }

    #[test]
    fn hp_clamps_at_zero_and_max() {
        let mut state = GameState::new();
        let id = starting_destroyer(&state);
        assert_eq!(adjust_ship_hp(&mut state, id, -1000).unwrap(), 0);
        // Idempotent at the floor.
        assert_eq!(adjust_ship_hp(&mut state, id, -1).unwrap(), 0);
        assert_eq!(adjust_ship_hp(&mut state, id, i64::MAX / 2).unwrap(), 5);
        // Idempotent at the ceiling.
        assert_eq!(adjust_ship_hp(&mut state, id, 1).unwrap(), 5);
    }

    #[test]
    fn hp_clamps_at_extreme_deltas_without_overflow() {
        let mut state = GameState::new();
        let id = starting_destroyer(&state);
        assert_eq!(adjust_ship_hp(&mut state, id, i64::MAX).unwrap(), 5);
        assert_eq!(adjust_ship_hp(&mut state, id, i64::MIN).unwrap(), 0);
        // hp is already nonzero when the maximal heal lands.
        adjust_ship_hp(&mut state, id, 3).unwrap();
        assert_eq!(adjust_ship_hp(&mut state, id, i64::MAX).unwrap(), 5);
        assert_eq!(adjust_base_hp(&mut state, BaseOwner::Player, i64::MAX), BASE_MAX_HP);
        assert_eq!(adjust_base_hp(&mut state, BaseOwner::Player, i64::MIN), 0);
    }

    #[test]
    fn zero_hp_does_not_remove_ship() {
        let mut state = GameState::new();
        let id = starting_destroyer(&state);
        adjust_ship_hp(&mut state, id, -100).unwrap();
        assert!(state.ship(id).is_some());
        assert_eq!(state.fleet.len(), 2);
    }

    #[test]
    fn base_hp_clamps_for_player_and_enemies() {
        let mut state = GameState::new();
        assert_eq!(adjust_base_hp(&mut state, BaseOwner::Player, -7), BASE_MAX_HP - 7);
        assert_eq!(adjust_base_hp(&mut state, BaseOwner::Player, 1000), BASE_MAX_HP);
        assert_eq!(
            adjust_base_hp(&mut state, BaseOwner::Enemy(EnemyId::Bravo), -1000),
            0
        );
        assert_eq!(state.enemy(EnemyId::Bravo).base_hp, 0);
        assert_eq!(state.enemy(EnemyId::Alpha).base_hp, BASE_MAX_HP);
    }

    #[test]
    fn torpedo_flag_sets_once_per_turn() {
        let mut state = GameState::new();
        let id = starting_destroyer(&state);
        assert!(mark_torpedo_used(&mut state, id).unwrap());
        assert!(!mark_torpedo_used(&mut state, id).unwrap());
        assert!(state.ship(id).unwrap().torpedo_used);
    }

    #[test]
    fn torpedo_flag_ignored_for_unarmed_classes() {
        let mut state = GameState::new();
        let id = state.alloc_ship_id();
        state
            .fleet
            .push(Ship::new(id, ShipClass::Decoy, 1, ShipStatus::Active));
        assert!(!mark_torpedo_used(&mut state, id).unwrap());
        assert!(!state.ship(id).unwrap().torpedo_used);
    }

    #[test]
    fn scrap_removes_and_logs() {
        let mut state = GameState::new();
        let id = starting_destroyer(&state);
        let ship = scrap_ship(&mut state, id).unwrap();
        assert_eq!(ship.id, id);
        assert_eq!(state.fleet.len(), 1);
        assert!(state.log[0].message.contains("scrapped"));
        assert!(matches!(
            scrap_ship(&mut state, id),
            Err(OpError::UnknownShip(_))
        ));
    }

    #[test]
    fn spawn_enemy_ship_respects_class_cap() {
        let mut state = GameState::new();
        // Carrier cap is 2 per roster.
        spawn_enemy_ship(&mut state, EnemyId::Alpha, ShipClass::AircraftCarrier).unwrap();
        spawn_enemy_ship(&mut state, EnemyId::Alpha, ShipClass::AircraftCarrier).unwrap();
        let err =
            spawn_enemy_ship(&mut state, EnemyId::Alpha, ShipClass::AircraftCarrier).unwrap_err();
        assert_eq!(err, OpError::CapacityExceeded);
        // The other tracker has its own cap.
        spawn_enemy_ship(&mut state, EnemyId::Bravo, ShipClass::AircraftCarrier).unwrap();
    }

    #[test]
    fn enemy_hull_numbers_reuse_after_sinking() {
        let mut state = GameState::new();
        let first = spawn_enemy_ship(&mut state, EnemyId::Alpha, ShipClass::Cruiser).unwrap();
        spawn_enemy_ship(&mut state, EnemyId::Alpha, ShipClass::Cruiser).unwrap();
        remove_enemy_ship(&mut state, EnemyId::Alpha, first).unwrap();
        let third = spawn_enemy_ship(&mut state, EnemyId::Alpha, ShipClass::Cruiser).unwrap();
        let hull = state
            .enemy(EnemyId::Alpha)
            .ships
            .iter()
            .find(|s| s.id == third)
            .unwrap()
            .hull_number;
        assert_eq!(hull, 1);
    }

    #[test]
    fn enemy_ship_hp_adjusts_with_clamp() {
        let mut state = GameState::new();
        let id = spawn_enemy_ship(&mut state, EnemyId::Bravo, ShipClass::Battleship).unwrap();
        assert_eq!(adjust_enemy_ship_hp(&mut state, EnemyId::Bravo, id, -4).unwrap(), 6);
        assert_eq!(
            adjust_enemy_ship_hp(&mut state, EnemyId::Bravo, id, -100).unwrap(),
            0
        );
        // Wrong tracker: the ship is unknown there.
        assert!(matches!(
            adjust_enemy_ship_hp(&mut state, EnemyId::Alpha, id, -1),
            Err(OpError::UnknownShip(_))
        ));
    }
}
