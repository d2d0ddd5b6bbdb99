//! Land sequencing, tapping, and the combo-turn sacrifice.
//!
//! Sequencing policy: while setting up (turns 1-3) a sacrifice land is
//! the preferred drop: it enters tapped, so spending a setup-turn slot
//! on it costs nothing. From turn 4 every point of mana has to be live
//! immediately, so only basics are played.

use crate::cards::{self, Tags};
use crate::game::state::{GameState, Zone};
use crate::observe::{Observer, PlayoutEvent};

/// Play one land from hand under the sequencing policy.
///
/// Returns whether a land was played.
pub fn play_land(state: &mut GameState, obs: &mut dyn Observer) -> bool {
    if state.turn < 4 {
        play_matching_land(state, Tags::SAC_LAND, obs) || play_matching_land(state, Tags::BASIC, obs)
    } else {
        play_matching_land(state, Tags::BASIC, obs)
    }
}

/// Play the first land in hand carrying `wanted`, spending the land drop.
pub fn play_matching_land(state: &mut GameState, wanted: Tags, obs: &mut dyn Observer) -> bool {
    let Some(index) = cards::position_tagged(&state.hand, wanted) else {
        return false;
    };
    let card = state.move_card(Zone::Hand, index, Zone::Battlefield);
    state.lands_played += 1;
    state.played_land_this_turn = true;
    obs.on_event(&PlayoutEvent::Played {
        card,
        to: Zone::Battlefield,
    });
    true
}

/// Tap every untapped basic for its color.
pub fn tap_basics(state: &mut GameState) {
    while let Some(index) = cards::position_tagged(&state.battlefield, Tags::BASIC) {
        let card = state.move_card(Zone::Battlefield, index, Zone::Tapped);
        if let Some(color) = cards::basic_color(card) {
            state.pool.add(color, 1);
        }
    }
}

/// Tap for mana without sacrificing anything (the turn-3 operation).
///
/// Basics all tap; sacrifice lands tap for their single color, but only
/// as many as have had a turn to untap; a sacrifice land enters tapped,
/// so at most one per land drop already used can be live.
pub fn tap_for_mana(state: &mut GameState) {
    tap_basics(state);
    let mut live = state.lands_played as usize;
    while live > 0 {
        let Some(index) = cards::position_tagged(&state.battlefield, Tags::SAC_LAND) else {
            break;
        };
        let card = state.move_card(Zone::Battlefield, index, Zone::Tapped);
        if let Some(color) = cards::tap_yield(card) {
            state.pool.add(color, 1);
        }
        live -= 1;
    }
}

/// Tap everything and sacrifice every sacrifice land (the combo-turn
/// operation): the whole manabase becomes one floating pool, permanently.
pub fn tap_and_sacrifice(state: &mut GameState) {
    tap_basics(state);
    while let Some(index) = cards::position_tagged(&state.battlefield, Tags::SAC_LAND) {
        let card = state.move_card(Zone::Battlefield, index, Zone::Graveyard);
        if let Some((first, second)) = cards::sac_yield(card) {
            state.pool.add(first, 1);
            state.pool.add(second, 1);
        }
    }
}
