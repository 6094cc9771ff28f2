//! FCI command parser.
//!
//! Parses incoming FCI console-protocol commands from raw text into
//! structured `Command` variants that the engine main loop can dispatch on.

use crate::dice::Weapon;
use crate::fleet::{BaseOwner, BuildingKind, Currency, EnemyId, ShipClass, ShipId};

/// A parsed client-to-engine FCI command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Initialize the FCI protocol handshake.
    Fci,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Reset the session to initial state.
    NewGame,

    /// Emit the full JSON snapshot.
    Status,

    /// Apply income, advance the build queue, and end the turn.
    EndTurn,

    /// Commission a ship: `build <class> [rush <n>]`.
    Build { class: ShipClass, rush: u8 },

    /// Construct a building: `construct <building>`.
    Construct { kind: BuildingKind },

    /// Flip a ship between Active and Reserve: `toggle <id>`.
    Toggle { id: ShipId },

    /// Adjust a player ship's HP: `hp <id> <delta>`.
    AdjustHp { id: ShipId, delta: i64 },

    /// Adjust a spotted enemy ship's HP: `enemyhp <enemy> <id> <delta>`.
    AdjustEnemyHp {
        enemy: EnemyId,
        id: ShipId,
        delta: i64,
    },

    /// Adjust a base HP counter: `basehp <base|alpha|bravo> <delta>`.
    AdjustBaseHp { owner: BaseOwner, delta: i64 },

    /// Scrap a player ship: `scrap <id>`.
    Scrap { id: ShipId },

    /// Record a spotted enemy ship: `spawn <enemy> <class>`.
    Spawn { enemy: EnemyId, class: ShipClass },

    /// Remove a spotted enemy ship: `sink <enemy> <id>`.
    Sink { enemy: EnemyId, id: ShipId },

    /// Spend gems for a currency: `trade <gold|steel> <gems> <amount>`.
    Trade {
        currency: Currency,
        gem_cost: u32,
        amount: u32,
    },

    /// Claim the kill reward: `bounty <enemy>`.
    Bounty { enemy: EnemyId },

    /// Expend a ship's once-per-turn torpedo: `torp <id>`.
    Torpedo { id: ShipId },

    /// Roll a weapon's damage display: `roll <weapon>`.
    Roll { weapon: Weapon },

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "fci" => Some(Command::Fci),
        "isready" => Some(Command::IsReady),
        "newgame" => Some(Command::NewGame),
        "status" => Some(Command::Status),
        "endturn" => Some(Command::EndTurn),
        "quit" => Some(Command::Quit),

        "build" => parse_build(&tokens),
        "construct" => parse_construct(&tokens),
        "toggle" => parse_ship_id(&tokens, "toggle").map(|id| Command::Toggle { id }),
        "hp" => parse_hp(&tokens),
        "enemyhp" => parse_enemy_hp(&tokens),
        "basehp" => parse_base_hp(&tokens),
        "scrap" => parse_ship_id(&tokens, "scrap").map(|id| Command::Scrap { id }),
        "spawn" => parse_spawn(&tokens),
        "sink" => parse_sink(&tokens),
        "trade" => parse_trade(&tokens),
        "bounty" => parse_bounty(&tokens),
        "torp" => parse_ship_id(&tokens, "torp").map(|id| Command::Torpedo { id }),
        "roll" => parse_roll(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `build <class> [rush <n>]`.
fn parse_build(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed build: expected 'build <class> [rush <n>]'");
        return None;
    }
    let class = match ShipClass::from_token(tokens[1]) {
        Some(c) => c,
        None => {
            eprintln!("unknown ship class: '{}'", tokens[1]);
            return None;
        }
    };
    let rush = match tokens.get(2) {
        None => 0,
        Some(&"rush") => match tokens.get(3).and_then(|t| t.parse::<u8>().ok()) {
            Some(n) => n,
            None => {
                eprintln!("malformed build: expected 'rush <n>'");
                return None;
            }
        },
        Some(other) => {
            eprintln!("unknown build parameter: '{}'", other);
            return None;
        }
    };
    Some(Command::Build { class, rush })
}

/// Parses `construct <building>`.
fn parse_construct(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed construct: expected 'construct <building>'");
        return None;
    }
    match BuildingKind::from_token(tokens[1]) {
        Some(kind) => Some(Command::Construct { kind }),
        None => {
            eprintln!("unknown building: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses a `<cmd> <id>` form shared by toggle/scrap/torp.
fn parse_ship_id(tokens: &[&str], cmd: &str) -> Option<ShipId> {
    if tokens.len() < 2 {
        eprintln!("malformed {}: expected '{} <id>'", cmd, cmd);
        return None;
    }
    match tokens[1].parse::<u32>() {
        Ok(raw) => Some(ShipId(raw)),
        Err(_) => {
            eprintln!("invalid ship id: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `hp <id> <delta>`.
fn parse_hp(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 {
        eprintln!("malformed hp: expected 'hp <id> <delta>'");
        return None;
    }
    let id = match tokens[1].parse::<u32>() {
        Ok(raw) => ShipId(raw),
        Err(_) => {
            eprintln!("invalid ship id: '{}'", tokens[1]);
            return None;
        }
    };
    let delta = match tokens[2].parse::<i64>() {
        Ok(d) => d,
        Err(_) => {
            eprintln!("invalid hp delta: '{}'", tokens[2]);
            return None;
        }
    };
    Some(Command::AdjustHp { id, delta })
}

/// Parses `enemyhp <enemy> <id> <delta>`.
fn parse_enemy_hp(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 4 {
        eprintln!("malformed enemyhp: expected 'enemyhp <enemy> <id> <delta>'");
        return None;
    }
    let enemy = parse_enemy(tokens[1])?;
    let id = match tokens[2].parse::<u32>() {
        Ok(raw) => ShipId(raw),
        Err(_) => {
            eprintln!("invalid ship id: '{}'", tokens[2]);
            return None;
        }
    };
    let delta = match tokens[3].parse::<i64>() {
        Ok(d) => d,
        Err(_) => {
            eprintln!("invalid hp delta: '{}'", tokens[3]);
            return None;
        }
    };
    Some(Command::AdjustEnemyHp { enemy, id, delta })
}

/// Parses `basehp <base|alpha|bravo> <delta>`.
fn parse_base_hp(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 {
        eprintln!("malformed basehp: expected 'basehp <base|alpha|bravo> <delta>'");
        return None;
    }
    let owner = if tokens[1] == "base" {
        BaseOwner::Player
    } else {
        match EnemyId::from_token(tokens[1]) {
            Some(e) => BaseOwner::Enemy(e),
            None => {
                eprintln!("unknown base owner: '{}'", tokens[1]);
                return None;
            }
        }
    };
    let delta = match tokens[2].parse::<i64>() {
        Ok(d) => d,
        Err(_) => {
            eprintln!("invalid hp delta: '{}'", tokens[2]);
            return None;
        }
    };
    Some(Command::AdjustBaseHp { owner, delta })
}

/// Parses `spawn <enemy> <class>`.
fn parse_spawn(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 {
        eprintln!("malformed spawn: expected 'spawn <enemy> <class>'");
        return None;
    }
    let enemy = parse_enemy(tokens[1])?;
    let class = match ShipClass::from_token(tokens[2]) {
        Some(c) => c,
        None => {
            eprintln!("unknown ship class: '{}'", tokens[2]);
            return None;
        }
    };
    Some(Command::Spawn { enemy, class })
}

/// Parses `sink <enemy> <id>`.
fn parse_sink(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 {
        eprintln!("malformed sink: expected 'sink <enemy> <id>'");
        return None;
    }
    let enemy = parse_enemy(tokens[1])?;
    let id = match tokens[2].parse::<u32>() {
        Ok(raw) => ShipId(raw),
        Err(_) => {
            eprintln!("invalid ship id: '{}'", tokens[2]);
            return None;
        }
    };
    Some(Command::Sink { enemy, id })
}

/// Parses `trade <gold|steel> <gems> <amount>`.
fn parse_trade(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 4 {
        eprintln!("malformed trade: expected 'trade <gold|steel> <gems> <amount>'");
        return None;
    }
    let currency = match Currency::from_token(tokens[1]) {
        Some(c) => c,
        None => {
            eprintln!("unknown currency: '{}'", tokens[1]);
            return None;
        }
    };
    let gem_cost = match tokens[2].parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("invalid gem cost: '{}'", tokens[2]);
            return None;
        }
    };
    let amount = match tokens[3].parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("invalid trade amount: '{}'", tokens[3]);
            return None;
        }
    };
    Some(Command::Trade {
        currency,
        gem_cost,
        amount,
    })
}

/// Parses `bounty <enemy>`.
fn parse_bounty(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed bounty: expected 'bounty <enemy>'");
        return None;
    }
    parse_enemy(tokens[1]).map(|enemy| Command::Bounty { enemy })
}

/// Parses `roll <weapon>`.
fn parse_roll(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed roll: expected 'roll <weapon>'");
        return None;
    }
    match Weapon::from_token(tokens[1]) {
        Some(weapon) => Some(Command::Roll { weapon }),
        None => {
            eprintln!("unknown weapon: '{}'", tokens[1]);
            None
        }
    }
}

fn parse_enemy(token: &str) -> Option<EnemyId> {
    match EnemyId::from_token(token) {
        Some(e) => Some(e),
        None => {
            eprintln!("unknown enemy: '{}'", token);
            None
        }
    }
}
