//! FCI console protocol.
//!
//! The engine's boundary with its presentation collaborator: a line command
//! parser and the JSON snapshot encoding the dashboard renders from.

pub mod parser;
pub mod snapshot;

pub use parser::{parse_command, Command};
pub use snapshot::{snapshot, Snapshot};
