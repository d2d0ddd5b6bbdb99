//! Per-trial game state and the opening-game engine.
//!
//! ## Key Types
//!
//! - `GameState`: zones, floating mana, storm and turn bookkeeping for
//!   one simulated game
//! - `Zone`: which vector a card currently lives in
//!
//! ## Modules
//!
//! - `state`: the mutable record of one game
//! - `lands`: land sequencing, tapping and the combo-turn sacrifice
//! - `turns`: mulligan and the scripted opening turns

pub mod lands;
pub mod state;
pub mod turns;

pub use state::{GameState, Zone};
