//! The combo decision engine.
//!
//! After the scripted opening, the game enters the combo attempt: all
//! lands are converted to one floating pool, and the rule tables in
//! [`rules`] are dispatched once per iteration until the finisher
//! resolves, the library runs dry, or nothing is playable.
//!
//! Terminal results are plain [`Outcome`] values. A [`TrialError`] is
//! not an outcome; it is a rule-precondition bug surfacing.

pub mod heuristics;
pub mod rules;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::error::TrialError;
use crate::game::lands;
use crate::game::state::GameState;
use crate::observe::Observer;

pub use heuristics::{discard, scry};
pub use rules::{dispatch, BoardRule, HandRule, Step, BOARD_RULES, HAND_RULES};

/// Why an attempt ended short of a win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossReason {
    /// The library could not supply another iteration.
    LibraryEmpty,
    /// No rule's predicate held.
    NoPlayableAction,
}

/// Terminal result of one trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The finisher resolved; `winning_card` names it.
    Won { winning_card: CardId },
    Lost { reason: LossReason },
}

impl Outcome {
    /// True for wins.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Won { .. })
    }
}

/// Run the combo attempt to a terminal outcome.
///
/// Entry converts the whole manabase into floating mana; the archetype
/// commits fully once it goes off. Every iteration then plays at most
/// one action; each action strictly consumes a resource, so the loop
/// cannot run forever.
pub fn run_combo(state: &mut GameState, obs: &mut dyn Observer) -> Result<Outcome, TrialError> {
    lands::tap_and_sacrifice(state);
    state.emit_pool(obs);

    loop {
        if state.library.is_empty() {
            return Ok(Outcome::Lost {
                reason: LossReason::LibraryEmpty,
            });
        }
        match rules::dispatch(state, obs)? {
            Step::Won(card) => {
                state.emit_pool(obs);
                return Ok(Outcome::Won { winning_card: card });
            }
            Step::Acted => state.emit_pool(obs),
            Step::NoAction => {
                return Ok(Outcome::Lost {
                    reason: LossReason::NoPlayableAction,
                })
            }
        }
    }
}
