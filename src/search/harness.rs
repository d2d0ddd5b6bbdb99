//! The Monte Carlo harness: run trials, tally outcomes per deck.
//!
//! Every trial owns an independent `GameState` and an independent seed
//! derived from the config's base seed, so the whole batch fans out over
//! rayon with nothing shared. A defect-class [`TrialError`] aborts its
//! own trial only; the report carries it in a separate `errors` tally so
//! rule bugs can never masquerade as losses.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::TrialError;
use crate::game::state::GameState;
use crate::game::turns;
use crate::observe::{NullObserver, Observer, PlayoutEvent};
use crate::policy::{self, Outcome};

use super::deck::{Deck, DeckSpec};

/// Golden-ratio stride between per-trial seed streams.
const TRIAL_STRIDE: u64 = 0x9E3779B97F4A7C15;
/// A second stride keeps per-deck streams off the per-trial lattice.
const DECK_STRIDE: u64 = 0xD1B54A32D192ED03;

/// Harness configuration.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Independent trials per candidate deck.
    pub trials: usize,

    /// Base seed every trial seed derives from.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            seed: 0,
        }
    }
}

impl SearchConfig {
    /// Create a config with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trial count per deck.
    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Tallied results for one candidate deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckReport {
    /// The candidate, multiset form.
    pub deck: Deck,
    /// Trials that resolved the finisher.
    pub wins: u32,
    /// Trials that ended in an expected loss.
    pub losses: u32,
    /// Trials aborted by a defect-class error.
    pub errors: u32,
    /// Trials attempted.
    pub trials: u32,
}

impl DeckReport {
    /// Wins over trials attempted.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.trials)
    }
}

fn trial_seed(base: u64, index: u64) -> u64 {
    base.wrapping_add(index.wrapping_mul(TRIAL_STRIDE))
}

/// Run one trial to a terminal outcome.
///
/// Mulligan, scripted opening, then the combo attempt.
pub fn run_trial(deck: &Deck, seed: u64, obs: &mut dyn Observer) -> Result<Outcome, TrialError> {
    let mut state = GameState::new(deck.cards(), seed);
    obs.on_event(&PlayoutEvent::GameStart { seed });
    turns::mulligan(&mut state, obs)?;
    turns::opening_turns(&mut state, obs)?;
    policy::run_combo(&mut state, obs)
}

fn evaluate_seeded(deck: &Deck, trials: usize, base_seed: u64) -> DeckReport {
    let outcomes: Vec<Result<Outcome, TrialError>> = (0..trials)
        .into_par_iter()
        .map(|i| run_trial(deck, trial_seed(base_seed, i as u64), &mut NullObserver))
        .collect();

    let mut report = DeckReport {
        deck: deck.clone(),
        wins: 0,
        losses: 0,
        errors: 0,
        trials: trials as u32,
    };
    for outcome in outcomes {
        match outcome {
            Ok(outcome) if outcome.is_win() => report.wins += 1,
            Ok(_) => report.losses += 1,
            Err(_) => report.errors += 1,
        }
    }
    report
}

/// Run the configured number of independent trials against one deck.
#[must_use]
pub fn evaluate_deck(deck: &Deck, config: &SearchConfig) -> DeckReport {
    evaluate_seeded(deck, config.trials, config.seed)
}

/// Enumerate a spec's candidates and evaluate every one of them.
///
/// Reports come back in enumeration order; decks and their trials both
/// run in parallel.
#[must_use]
pub fn run_search(spec: &DeckSpec, config: &SearchConfig) -> Vec<DeckReport> {
    let decks = spec.enumerate();
    decks
        .into_par_iter()
        .enumerate()
        .map(|(i, deck)| {
            let deck_seed = config.seed.wrapping_add((i as u64).wrapping_mul(DECK_STRIDE));
            evaluate_seeded(&deck, config.trials, deck_seed)
        })
        .collect()
}
