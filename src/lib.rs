//! # goldfisher
//!
//! A Monte Carlo goldfishing simulator for tuning a solitaire combo deck:
//! play a candidate deck against nobody, over and over, and count how
//! often it assembles its game-winning sequence before running out of
//! cards or mana.
//!
//! ## Design Principles
//!
//! 1. **Data-driven policy**: the combo turn is an ordered table of
//!    (predicate, action) rules dispatched once per iteration; the
//!    priority ordering is auditable and each rule tests on its own.
//!
//! 2. **Per-trial everything**: each trial owns its `GameState` and its
//!    seeded RNG. No globals, no shared mutation, embarrassingly
//!    parallel batches.
//!
//! 3. **Expected losses are values, defects are errors**: running out of
//!    library or plays returns `Outcome::Lost`; over-spending mana a
//!    precondition should have covered aborts the trial with a
//!    `TrialError` and is tallied separately.
//!
//! 4. **Presentation stays outside**: the core emits card identifiers
//!    and counts through an injected `Observer`; rendering, CSV and
//!    progress display are the caller's business.
//!
//! ## Modules
//!
//! - `cards`: card identifiers and the static capability catalog
//! - `mana`: the six-color floating pool and its spend/make policies
//! - `rng`: deterministic seeded RNG, one per trial
//! - `game`: per-trial state, land operations, mulligan and openings
//! - `policy`: the combo rule tables, scry and discard heuristics
//! - `observe`: the injected event-sink capability
//! - `search`: deck enumeration and the Monte Carlo harness
//! - `error`: the defect-class error taxonomy

pub mod cards;
pub mod error;
pub mod game;
pub mod mana;
pub mod observe;
pub mod policy;
pub mod rng;
pub mod search;

// Re-export commonly used types
pub use crate::cards::{CardId, Tags};
pub use crate::error::TrialError;
pub use crate::game::{GameState, Zone};
pub use crate::mana::{Color, ColorSet, ManaPool};
pub use crate::observe::{NullObserver, Observer, PlayoutEvent, RecordingObserver};
pub use crate::policy::{LossReason, Outcome};
pub use crate::rng::GameRng;
pub use crate::search::{
    evaluate_deck, run_search, run_trial, Deck, DeckReport, DeckSpec, SearchConfig, DECK_SIZE,
};
