//! Flotilla engine library.
//!
//! Exposes the fleet data model, state-transition operations, dice tables,
//! and the console protocol for use by integration tests and the binary
//! entry point.

pub mod dice;
pub mod engine;
pub mod fleet;
pub mod ops;
pub mod protocol;
