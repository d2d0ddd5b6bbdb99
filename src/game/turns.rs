//! Mulligan and the scripted opening turns.
//!
//! The archetype's first three turns are rote: draw, sequence lands, and
//! on turn 3 bank mana into the cheap filtering artifacts. Turn 4 is
//! where the decision policy takes over.

use crate::cards::{self, Tags};
use crate::error::TrialError;
use crate::game::lands;
use crate::game::state::{GameState, Zone};
use crate::observe::{Observer, PlayoutEvent};

/// Hand sizes the mulligan loop will try, in order.
const MULLIGAN_SIZES: [usize; 4] = [7, 6, 5, 4];

/// Mulligan until the hand is worth keeping.
///
/// A hand keeps if it has two to four lands and at least one easy draw,
/// or once down to five cards, any two lands. The four-card hand is kept
/// unconditionally, so the loop always ends on one of the four sizes.
pub fn mulligan(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    for size in MULLIGAN_SIZES {
        // Everything back in, fresh shuffle, fresh hand.
        let hand = std::mem::take(&mut state.hand);
        state.library.extend(hand);
        state.shuffle_library();
        state.draw(size, obs)?;

        let lands = state.count(Zone::Hand, Tags::LAND);
        let draws = state.count(Zone::Hand, Tags::EASY_DRAW);
        if ((2..=4).contains(&lands) && draws >= 1) || (size <= 5 && lands >= 2) {
            break;
        }
    }
    obs.on_event(&PlayoutEvent::HandKept {
        size: state.hand.len(),
    });
    Ok(())
}

/// Play turns 1 through 3, then set up turn 4's draw.
///
/// Leaves the state at turn 4 with the draw taken and nothing else done:
/// the combo attempt owns the rest of the turn.
pub fn opening_turns(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    for turn in 1..=3 {
        state.begin_turn(turn, obs);
        if turn != 1 {
            state.draw(1, obs)?;
        }

        if turn == 3 {
            lands::tap_for_mana(state);
            cast_early_plays(state, obs)?;
            state.emit_pool(obs);
        }

        if state.count(Zone::Hand, Tags::LAND) > 0 {
            lands::play_land(state, obs);
        }
    }

    state.begin_turn(4, obs);
    state.draw(1, obs)?;
    Ok(())
}

/// Cast early-play artifacts while a mana remains to pay for them.
fn cast_early_plays(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    while state.pool.total() >= 1 {
        let Some(index) = cards::position_tagged(&state.hand, Tags::EARLY_PLAY) else {
            break;
        };
        state.pool.spend(1, 0, 0, 0, 0, 0)?;
        let card = state.move_card(Zone::Hand, index, Zone::Battlefield);
        state.storm += 1;
        obs.on_event(&PlayoutEvent::Played {
            card,
            to: Zone::Battlefield,
        });
    }
    Ok(())
}
