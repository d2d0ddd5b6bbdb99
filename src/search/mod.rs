//! Deck enumeration and the Monte Carlo harness.
//!
//! ## Key Types
//!
//! - `Deck`: a canonicalised 60-card multiset
//! - `DeckSpec`: fixed base + options pool, enumerated into candidate decks
//! - `SearchConfig`: trial count and base seed
//! - `DeckReport`: win/loss/error tallies for one candidate
//!
//! Trials are embarrassingly parallel: every trial owns its state and its
//! seed, so the harness fans out with rayon and reduces to plain counts.

pub mod deck;
pub mod harness;

pub use deck::{Deck, DeckSpec, DECK_SIZE};
pub use harness::{evaluate_deck, run_search, run_trial, DeckReport, SearchConfig};
