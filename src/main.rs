//! Flotilla -- a turn-based naval command dashboard engine.
//!
//! This binary reads FCI commands from stdin and writes responses to
//! stdout; the presentation layer (dashboard UI) lives on the other side
//! of the pipe.

use std::io::{self, BufRead};

use flotilla::engine::Engine;
use flotilla::protocol::parser::{parse_command, Command};

/// Runs the main FCI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Fci => engine.handle_fci(&mut out),
            Command::IsReady => engine.handle_isready(&mut out),
            Command::NewGame => engine.new_game(),
            Command::Status => engine.handle_status(&mut out),
            Command::EndTurn => engine.handle_endturn(&mut out),
            Command::Build { class, rush } => engine.handle_build(class, rush, &mut out),
            Command::Construct { kind } => engine.handle_construct(kind, &mut out),
            Command::Toggle { id } => engine.handle_toggle(id, &mut out),
            Command::AdjustHp { id, delta } => engine.handle_hp(id, delta, &mut out),
            Command::AdjustEnemyHp { enemy, id, delta } => {
                engine.handle_enemy_hp(enemy, id, delta, &mut out)
            }
            Command::AdjustBaseHp { owner, delta } => engine.handle_base_hp(owner, delta, &mut out),
            Command::Scrap { id } => engine.handle_scrap(id, &mut out),
            Command::Spawn { enemy, class } => engine.handle_spawn(enemy, class, &mut out),
            Command::Sink { enemy, id } => engine.handle_sink(enemy, id, &mut out),
            Command::Trade {
                currency,
                gem_cost,
                amount,
            } => engine.handle_trade(currency, gem_cost, amount, &mut out),
            Command::Bounty { enemy } => engine.handle_bounty(enemy, &mut out),
            Command::Torpedo { id } => engine.handle_torp(id, &mut out),
            Command::Roll { weapon } => engine.handle_roll(weapon, &mut out),
            Command::Quit => break,
        }
    }
}
