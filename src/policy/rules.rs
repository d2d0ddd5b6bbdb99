//! The ordered combo rule tables.
//!
//! Every iteration of the combo loop executes at most one action: the
//! first rule whose predicate holds. Hand rules are scanned per hand
//! position (leftmost card first); board rules run only when no hand
//! rule fired. The ordering is a hand-tuned priority (free value first,
//! then ramp, then card selection) and lives in two const tables so it
//! can be audited and each rule tested on its own.
//!
//! Predicates must fully cover their action's costs: `perform` pays with
//! [`ManaPool::spend`](crate::mana::ManaPool::spend), which converts an
//! under-checked precondition into a [`TrialError`] instead of a silent
//! negative balance.

use crate::cards::{
    self, CardId, Tags, BRAINSPOIL, ENERGY_TAP, KNOWLEDGE, LOOTING, MANAMORPHOSE, OFFERING,
    PONDER, PREORDAIN, RITUAL, TORCH, VISIONS,
};
use crate::error::TrialError;
use crate::game::lands;
use crate::game::state::{GameState, Zone};
use crate::mana::{Color, ColorSet};
use crate::observe::{Observer, PlayoutEvent};

use super::heuristics;

/// What a dispatch round did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// One rule fired; the loop continues.
    Acted,
    /// The finisher resolved.
    Won(CardId),
    /// No rule's predicate held.
    NoAction,
}

/// A rule scanned once per hand position.
pub struct HandRule {
    pub name: &'static str,
    pub matches: fn(&GameState, usize) -> bool,
    pub perform: fn(&mut GameState, usize, &mut dyn Observer) -> Result<Option<CardId>, TrialError>,
}

/// A rule evaluated against the whole position.
pub struct BoardRule {
    pub name: &'static str,
    pub matches: fn(&GameState) -> bool,
    pub perform: fn(&mut GameState, &mut dyn Observer) -> Result<(), TrialError>,
}

/// Hand-scanned rules, highest priority first.
pub const HAND_RULES: [HandRule; 5] = [
    HandRule {
        name: "lethal finisher",
        matches: finisher_matches,
        perform: finisher_perform,
    },
    HandRule {
        name: "free mana rock",
        matches: free_rock_matches,
        perform: free_rock_perform,
    },
    HandRule {
        name: "ritual",
        matches: ritual_matches,
        perform: ritual_perform,
    },
    HandRule {
        name: "cycle for a card",
        matches: cycle_matches,
        perform: cycle_perform,
    },
    HandRule {
        name: "land drop",
        matches: land_drop_matches,
        perform: land_drop_perform,
    },
];

/// Whole-position rules, highest priority first.
pub const BOARD_RULES: [BoardRule; 13] = [
    BoardRule {
        name: "delve creature",
        matches: delve_matches,
        perform: delve_perform,
    },
    BoardRule {
        name: "crack mana rock",
        matches: crack_rock_matches,
        perform: crack_rock_perform,
    },
    BoardRule {
        name: "energy burst",
        matches: energy_matches,
        perform: energy_perform,
    },
    BoardRule {
        name: "creature offering",
        matches: offering_matches,
        perform: offering_perform,
    },
    BoardRule {
        name: "crack filter artifact",
        matches: crack_filter_matches,
        perform: crack_filter_perform,
    },
    BoardRule {
        name: "cast filter artifact",
        matches: cast_filter_matches,
        perform: cast_filter_perform,
    },
    BoardRule {
        name: "mana-neutral filter",
        matches: manamorphose_matches,
        perform: manamorphose_perform,
    },
    BoardRule {
        name: "big draw",
        matches: big_draw_matches,
        perform: big_draw_perform,
    },
    BoardRule {
        name: "tutor the finisher",
        matches: tutor_matches,
        perform: tutor_perform,
    },
    BoardRule {
        name: "dig: scry two draw one",
        matches: preordain_matches,
        perform: preordain_perform,
    },
    BoardRule {
        name: "dig: scry three draw one",
        matches: ponder_matches,
        perform: ponder_perform,
    },
    BoardRule {
        name: "dig: draw one scry two",
        matches: visions_matches,
        perform: visions_perform,
    },
    BoardRule {
        name: "dig: draw two discard two",
        matches: looting_matches,
        perform: looting_perform,
    },
];

/// Run one iteration of the combo loop: execute the first rule whose
/// predicate holds, or report that nothing is playable.
pub fn dispatch(state: &mut GameState, obs: &mut dyn Observer) -> Result<Step, TrialError> {
    for index in 0..state.hand.len() {
        for rule in &HAND_RULES {
            if (rule.matches)(state, index) {
                obs.on_event(&PlayoutEvent::RuleFired { rule: rule.name });
                return match (rule.perform)(state, index, obs)? {
                    Some(card) => Ok(Step::Won(card)),
                    None => Ok(Step::Acted),
                };
            }
        }
    }
    for rule in &BOARD_RULES {
        if (rule.matches)(state) {
            obs.on_event(&PlayoutEvent::RuleFired { rule: rule.name });
            (rule.perform)(state, obs)?;
            return Ok(Step::Acted);
        }
    }
    Ok(Step::NoAction)
}

// === Shared helpers ===

/// Move a card out of hand as a play: bumps storm and notifies the sink.
fn cast_from_hand(
    state: &mut GameState,
    index: usize,
    to: Zone,
    obs: &mut dyn Observer,
) -> CardId {
    let card = state.move_card(Zone::Hand, index, to);
    state.storm += 1;
    obs.on_event(&PlayoutEvent::Played { card, to });
    card
}

fn hand_position(state: &GameState, card: CardId) -> Option<usize> {
    state.hand.iter().position(|&c| c == card)
}

/// Best creature mana value across battlefield and tapped permanents.
fn best_creature_mv(state: &GameState) -> Option<u32> {
    let on_field = cards::best_tagged(&state.battlefield, Tags::CREATURE).map(|(_, mv)| mv);
    let tapped = cards::best_tagged(&state.tapped, Tags::CREATURE).map(|(_, mv)| mv);
    on_field.into_iter().chain(tapped).max()
}

// === Hand rules ===

fn finisher_matches(state: &GameState, index: usize) -> bool {
    state.hand[index] == TORCH
        && state.pool.get(Color::Red) >= 1
        && state.pool.total() >= 21
}

fn finisher_perform(
    state: &mut GameState,
    index: usize,
    obs: &mut dyn Observer,
) -> Result<Option<CardId>, TrialError> {
    state.pool.spend(20, 0, 0, 0, 1, 0)?;
    let card = cast_from_hand(state, index, Zone::Graveyard, obs);
    Ok(Some(card))
}

fn free_rock_matches(state: &GameState, index: usize) -> bool {
    cards::tags(state.hand[index]).contains(Tags::MANA_ROCK)
}

fn free_rock_perform(
    state: &mut GameState,
    index: usize,
    obs: &mut dyn Observer,
) -> Result<Option<CardId>, TrialError> {
    cast_from_hand(state, index, Zone::Battlefield, obs);
    Ok(None)
}

fn ritual_matches(state: &GameState, index: usize) -> bool {
    state.hand[index] == RITUAL && state.pool.get(Color::Black) >= 1
}

fn ritual_perform(
    state: &mut GameState,
    index: usize,
    obs: &mut dyn Observer,
) -> Result<Option<CardId>, TrialError> {
    state.pool.spend(0, 0, 0, 1, 0, 0)?;
    cast_from_hand(state, index, Zone::Graveyard, obs);
    state.pool.add(Color::Black, 3);
    Ok(None)
}

fn cycle_matches(state: &GameState, index: usize) -> bool {
    cards::tags(state.hand[index]).contains(Tags::CYCLING) && !state.library.is_empty()
}

fn cycle_perform(
    state: &mut GameState,
    index: usize,
    obs: &mut dyn Observer,
) -> Result<Option<CardId>, TrialError> {
    cast_from_hand(state, index, Zone::Graveyard, obs);
    // Cycling is not a cast: take the storm bump straight back.
    state.storm -= 1;
    state.draw(1, obs)?;
    Ok(None)
}

fn land_drop_matches(state: &GameState, index: usize) -> bool {
    !state.played_land_this_turn && cards::tags(state.hand[index]).contains(Tags::BASIC)
}

fn land_drop_perform(
    state: &mut GameState,
    _index: usize,
    obs: &mut dyn Observer,
) -> Result<Option<CardId>, TrialError> {
    // Plays the first untapped land, which is the card that matched.
    lands::play_land(state, obs);
    lands::tap_basics(state);
    Ok(None)
}

// === Board rules ===

/// The delve cast this position supports: hand index, mana value, and
/// how many graveyard cards get exiled.
///
/// The highest-mana-value delve creature is the one considered. Exiling
/// covers the cost one-for-one up to the mana value; the colored pip and
/// whatever generic remains must come from the pool.
fn delve_play(state: &GameState) -> Option<(usize, u32, usize)> {
    let (index, mv) = cards::best_tagged(&state.hand, Tags::DELVE)?;
    if state.pool.get(Color::Black) < 1 {
        return None;
    }
    let exile = state.graveyard.len().min(mv as usize);
    let generic = mv - exile as u32;
    if state.pool.total() < generic + 1 {
        return None;
    }
    Some((index, mv, exile))
}

fn delve_matches(state: &GameState) -> bool {
    delve_play(state).is_some()
}

fn delve_perform(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    let (index, mv, exile) = delve_play(state).expect("matched delve play");
    for _ in 0..exile {
        let last = state.graveyard.len() - 1;
        state.move_card(Zone::Graveyard, last, Zone::Exile);
    }
    state.pool.spend(mv - exile as u32, 0, 0, 1, 0, 0)?;
    cast_from_hand(state, index, Zone::Battlefield, obs);
    Ok(())
}

fn crack_rock_matches(state: &GameState) -> bool {
    cards::position_tagged(&state.battlefield, Tags::MANA_ROCK).is_some()
}

fn crack_rock_perform(state: &mut GameState, _obs: &mut dyn Observer) -> Result<(), TrialError> {
    let index = cards::position_tagged(&state.battlefield, Tags::MANA_ROCK)
        .expect("matched mana rock");
    state.move_card(Zone::Battlefield, index, Zone::Graveyard);
    state.pool.make(1, ColorSet::SPELL_COLORS);
    Ok(())
}

fn energy_matches(state: &GameState) -> bool {
    hand_position(state, ENERGY_TAP).is_some()
        && state.pool.get(Color::Blue) >= 1
        && cards::position_tagged(&state.battlefield, Tags::CREATURE).is_some()
}

fn energy_perform(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    state.pool.spend(0, 0, 1, 0, 0, 0)?;
    let (creature, mv) =
        cards::best_tagged(&state.battlefield, Tags::CREATURE).expect("matched untapped creature");
    state.move_card(Zone::Battlefield, creature, Zone::Tapped);
    state.pool.add(Color::Colorless, mv);
    let index = hand_position(state, ENERGY_TAP).expect("matched energy spell");
    cast_from_hand(state, index, Zone::Graveyard, obs);
    Ok(())
}

fn offering_matches(state: &GameState) -> bool {
    hand_position(state, OFFERING).is_some()
        && state.pool.get(Color::Black) >= 1
        && (cards::position_tagged(&state.tapped, Tags::CREATURE).is_some()
            || cards::position_tagged(&state.battlefield, Tags::CREATURE).is_some())
}

fn offering_perform(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    state.pool.spend(0, 0, 0, 1, 0, 0)?;
    // A tapped creature has already given its value; offer it first.
    let (zone, index, mv) = match cards::best_tagged(&state.tapped, Tags::CREATURE) {
        Some((index, mv)) => (Zone::Tapped, index, mv),
        None => {
            let (index, mv) = cards::best_tagged(&state.battlefield, Tags::CREATURE)
                .expect("matched creature to offer");
            (Zone::Battlefield, index, mv)
        }
    };
    state.move_card(zone, index, Zone::Graveyard);
    state.pool.make(mv, ColorSet::BLACK_RED);
    let index = hand_position(state, OFFERING).expect("matched offering spell");
    cast_from_hand(state, index, Zone::Graveyard, obs);
    Ok(())
}

fn crack_filter_matches(state: &GameState) -> bool {
    cards::position_tagged(&state.battlefield, Tags::EARLY_PLAY).is_some()
        && state.pool.total() >= 1
        && !state.library.is_empty()
}

fn crack_filter_perform(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    state.pool.spend(1, 0, 0, 0, 0, 0)?;
    let index = cards::position_tagged(&state.battlefield, Tags::EARLY_PLAY)
        .expect("matched filter artifact");
    state.move_card(Zone::Battlefield, index, Zone::Graveyard);
    state.pool.make(1, ColorSet::SPELL_COLORS);
    state.draw(1, obs)?;
    Ok(())
}

fn cast_filter_matches(state: &GameState) -> bool {
    cards::position_tagged(&state.hand, Tags::EARLY_PLAY).is_some() && state.pool.total() >= 2
}

fn cast_filter_perform(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    state.pool.spend(1, 0, 0, 0, 0, 0)?;
    let index =
        cards::position_tagged(&state.hand, Tags::EARLY_PLAY).expect("matched filter in hand");
    cast_from_hand(state, index, Zone::Battlefield, obs);
    Ok(())
}

fn manamorphose_matches(state: &GameState) -> bool {
    hand_position(state, MANAMORPHOSE).is_some()
        && state.pool.get(Color::Red) >= 1
        && state.pool.total() >= 2
        && !state.library.is_empty()
}

fn manamorphose_perform(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    state.pool.spend(1, 0, 0, 0, 1, 0)?;
    let index = hand_position(state, MANAMORPHOSE).expect("matched filter spell");
    cast_from_hand(state, index, Zone::Graveyard, obs);
    state.pool.make(2, ColorSet::SPELL_COLORS);
    state.draw(1, obs)?;
    Ok(())
}

fn big_draw_matches(state: &GameState) -> bool {
    hand_position(state, KNOWLEDGE).is_some()
        && state.pool.get(Color::Black) >= 1
        && state.pool.total() >= 5
        && best_creature_mv(state).is_some_and(|mv| state.library.len() >= mv as usize)
}

fn big_draw_perform(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    let mv = best_creature_mv(state).expect("matched creature in play");
    state.pool.spend(4, 0, 0, 1, 0, 0)?;
    let index = hand_position(state, KNOWLEDGE).expect("matched big draw spell");
    cast_from_hand(state, index, Zone::Graveyard, obs);
    state.draw(mv as usize, obs)?;
    Ok(())
}

fn tutor_matches(state: &GameState) -> bool {
    hand_position(state, BRAINSPOIL).is_some()
        && state.pool.get(Color::Black) >= 2
        && state.pool.total() >= 3
        && state.library.contains(&TORCH)
}

fn tutor_perform(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    state.pool.spend(1, 0, 0, 2, 0, 0)?;
    // Discarded for its tutoring half, so no storm bump.
    let index = hand_position(state, BRAINSPOIL).expect("matched tutor");
    let card = state.move_card(Zone::Hand, index, Zone::Graveyard);
    obs.on_event(&PlayoutEvent::Played {
        card,
        to: Zone::Graveyard,
    });
    let found = state
        .library
        .iter()
        .position(|&c| c == TORCH)
        .expect("matched finisher in library");
    state.move_card(Zone::Library, found, Zone::Hand);
    state.shuffle_library();
    Ok(())
}

fn preordain_matches(state: &GameState) -> bool {
    hand_position(state, PREORDAIN).is_some()
        && state.pool.get(Color::Blue) >= 1
        && !state.library.is_empty()
}

fn preordain_perform(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    state.pool.spend(0, 0, 1, 0, 0, 0)?;
    let index = hand_position(state, PREORDAIN).expect("matched dig spell");
    cast_from_hand(state, index, Zone::Graveyard, obs);
    heuristics::scry(state, 2, obs);
    state.draw(1, obs)?;
    Ok(())
}

fn ponder_matches(state: &GameState) -> bool {
    hand_position(state, PONDER).is_some()
        && state.pool.get(Color::Blue) >= 1
        && !state.library.is_empty()
}

fn ponder_perform(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    state.pool.spend(0, 0, 1, 0, 0, 0)?;
    let index = hand_position(state, PONDER).expect("matched dig spell");
    cast_from_hand(state, index, Zone::Graveyard, obs);
    heuristics::scry(state, 3, obs);
    state.draw(1, obs)?;
    Ok(())
}

fn visions_matches(state: &GameState) -> bool {
    hand_position(state, VISIONS).is_some()
        && state.pool.get(Color::Blue) >= 1
        && !state.library.is_empty()
}

fn visions_perform(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    state.pool.spend(0, 0, 1, 0, 0, 0)?;
    let index = hand_position(state, VISIONS).expect("matched dig spell");
    cast_from_hand(state, index, Zone::Graveyard, obs);
    state.draw(1, obs)?;
    heuristics::scry(state, 2, obs);
    Ok(())
}

fn looting_matches(state: &GameState) -> bool {
    hand_position(state, LOOTING).is_some()
        && state.pool.get(Color::Red) >= 1
        && state.library.len() >= 2
}

fn looting_perform(state: &mut GameState, obs: &mut dyn Observer) -> Result<(), TrialError> {
    state.pool.spend(0, 0, 0, 0, 1, 0)?;
    let index = hand_position(state, LOOTING).expect("matched dig spell");
    cast_from_hand(state, index, Zone::Graveyard, obs);
    state.draw(2, obs)?;
    heuristics::discard(state, 2, obs);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ANGLER, ATTENDANTS, EPICURE, ISLAND, PETAL, SPHERE, STAR, SWAMP, WRAITH};
    use crate::observe::NullObserver;

    fn bare_state() -> GameState {
        GameState::new(&[], 1)
    }

    #[test]
    fn test_finisher_needs_red_and_twenty_one() {
        let mut state = bare_state();
        state.hand = vec![TORCH];
        state.pool.add(Color::Green, 20);
        assert!(!finisher_matches(&state, 0));

        state.pool.add(Color::Red, 1);
        assert!(finisher_matches(&state, 0));

        let won = finisher_perform(&mut state, 0, &mut NullObserver).unwrap();
        assert_eq!(won, Some(TORCH));
        assert_eq!(state.pool.total(), 0);
        assert_eq!(state.graveyard, vec![TORCH]);
        assert_eq!(state.storm, 1);
    }

    #[test]
    fn test_ritual_nets_two_black() {
        let mut state = bare_state();
        state.hand = vec![RITUAL];
        state.pool.add(Color::Black, 1);

        assert!(ritual_matches(&state, 0));
        ritual_perform(&mut state, 0, &mut NullObserver).unwrap();

        assert_eq!(state.pool.get(Color::Black), 3);
        assert_eq!(state.graveyard, vec![RITUAL]);
        assert_eq!(state.storm, 1);
    }

    #[test]
    fn test_cycle_replaces_itself_without_storm() {
        let mut state = bare_state();
        state.hand = vec![WRAITH];
        state.library = vec![SWAMP];

        assert!(cycle_matches(&state, 0));
        cycle_perform(&mut state, 0, &mut NullObserver).unwrap();

        assert_eq!(state.hand, vec![SWAMP]);
        assert_eq!(state.graveyard, vec![WRAITH]);
        assert_eq!(state.storm, 0);
    }

    #[test]
    fn test_cycle_requires_a_library() {
        let mut state = bare_state();
        state.hand = vec![WRAITH];
        assert!(!cycle_matches(&state, 0));
    }

    #[test]
    fn test_land_drop_once_per_turn() {
        let mut state = bare_state();
        state.turn = 4;
        state.hand = vec![ISLAND, SWAMP];

        assert!(land_drop_matches(&state, 0));
        land_drop_perform(&mut state, 0, &mut NullObserver).unwrap();

        // The land was played and immediately tapped for its color.
        assert_eq!(state.tapped, vec![ISLAND]);
        assert_eq!(state.pool.get(Color::Blue), 1);
        assert!(!land_drop_matches(&state, 0));
    }

    #[test]
    fn test_delve_exiles_up_to_mana_value() {
        let mut state = bare_state();
        state.hand = vec![ANGLER];
        state.graveyard = vec![RITUAL, RITUAL, PONDER, PONDER, PONDER, SWAMP, SWAMP];
        state.pool.add(Color::Black, 1);

        assert!(delve_matches(&state));
        delve_perform(&mut state, &mut NullObserver).unwrap();

        // Seven in the graveyard, mana value seven: all of it exiled and
        // only the colored pip paid.
        assert!(state.graveyard.is_empty());
        assert_eq!(state.exiled.len(), 7);
        assert_eq!(state.battlefield, vec![ANGLER]);
        assert_eq!(state.pool.total(), 0);
        assert_eq!(state.storm, 1);
    }

    #[test]
    fn test_delve_pays_remaining_generic_from_pool() {
        let mut state = bare_state();
        state.hand = vec![ATTENDANTS];
        state.graveyard = vec![RITUAL, RITUAL, PONDER, PONDER];
        state.pool.add(Color::Black, 1);

        // Mana value 6, four exiled: two generic short.
        assert!(!delve_matches(&state));

        state.pool.add(Color::Colorless, 2);
        assert!(delve_matches(&state));
        delve_perform(&mut state, &mut NullObserver).unwrap();

        assert_eq!(state.exiled.len(), 4);
        assert_eq!(state.pool.total(), 0);
        assert_eq!(state.battlefield, vec![ATTENDANTS]);
    }

    #[test]
    fn test_delve_prefers_biggest_creature() {
        let mut state = bare_state();
        state.hand = vec![ATTENDANTS, ANGLER];
        state.graveyard = vec![RITUAL; 10];
        state.pool.add(Color::Black, 1);

        delve_perform(&mut state, &mut NullObserver).unwrap();

        assert_eq!(state.battlefield, vec![ANGLER]);
        assert_eq!(state.exiled.len(), 7);
        assert_eq!(state.graveyard.len(), 3);
    }

    #[test]
    fn test_crack_rock_balances_into_spell_colors() {
        let mut state = bare_state();
        state.battlefield = vec![PETAL];

        assert!(crack_rock_matches(&state));
        crack_rock_perform(&mut state, &mut NullObserver).unwrap();

        assert_eq!(state.graveyard, vec![PETAL]);
        assert_eq!(state.pool.total(), 1);
        assert_eq!(state.pool.get(Color::Blue), 1);
    }

    #[test]
    fn test_energy_taps_biggest_creature_for_colorless() {
        let mut state = bare_state();
        state.hand = vec![ENERGY_TAP];
        state.battlefield = vec![EPICURE, ANGLER];
        state.pool.add(Color::Blue, 1);

        assert!(energy_matches(&state));
        energy_perform(&mut state, &mut NullObserver).unwrap();

        assert_eq!(state.tapped, vec![ANGLER]);
        assert_eq!(state.pool.get(Color::Colorless), 7);
        assert_eq!(state.pool.get(Color::Blue), 0);
        assert_eq!(state.graveyard, vec![ENERGY_TAP]);
    }

    #[test]
    fn test_offering_prefers_tapped_creatures() {
        let mut state = bare_state();
        state.hand = vec![OFFERING];
        state.battlefield = vec![ANGLER];
        state.tapped = vec![EPICURE];
        state.pool.add(Color::Black, 1);

        assert!(offering_matches(&state));
        offering_perform(&mut state, &mut NullObserver).unwrap();

        // The tapped epicure goes, even though the angler is bigger.
        assert_eq!(state.battlefield, vec![ANGLER]);
        assert!(state.tapped.is_empty());
        assert_eq!(state.pool.total(), 3);
        assert_eq!(
            state.pool.get(Color::Black) + state.pool.get(Color::Red),
            3
        );
    }

    #[test]
    fn test_crack_filter_draws_and_filters() {
        let mut state = bare_state();
        state.battlefield = vec![STAR];
        state.library = vec![SWAMP];
        state.pool.add(Color::Green, 1);

        assert!(crack_filter_matches(&state));
        crack_filter_perform(&mut state, &mut NullObserver).unwrap();

        assert_eq!(state.graveyard, vec![STAR]);
        assert_eq!(state.hand, vec![SWAMP]);
        assert_eq!(state.pool.total(), 1);
        assert_eq!(state.pool.get(Color::Green), 0);
    }

    #[test]
    fn test_cast_filter_keeps_a_mana_to_crack_it() {
        let mut state = bare_state();
        state.hand = vec![SPHERE];
        state.pool.add(Color::Colorless, 1);
        assert!(!cast_filter_matches(&state));

        state.pool.add(Color::Colorless, 1);
        assert!(cast_filter_matches(&state));
        cast_filter_perform(&mut state, &mut NullObserver).unwrap();

        assert_eq!(state.battlefield, vec![SPHERE]);
        assert_eq!(state.pool.total(), 1);
        assert_eq!(state.storm, 1);
    }

    #[test]
    fn test_big_draw_scales_with_best_creature() {
        let mut state = bare_state();
        state.hand = vec![KNOWLEDGE];
        state.tapped = vec![ANGLER];
        state.library = vec![SWAMP; 7];
        state.pool.add(Color::Black, 2);
        state.pool.add(Color::Blue, 3);

        assert!(big_draw_matches(&state));
        big_draw_perform(&mut state, &mut NullObserver).unwrap();

        assert_eq!(state.hand.len(), 7);
        assert_eq!(state.pool.total(), 0);
        assert_eq!(state.graveyard, vec![KNOWLEDGE]);
    }

    #[test]
    fn test_big_draw_refuses_partial_draws() {
        let mut state = bare_state();
        state.hand = vec![KNOWLEDGE];
        state.tapped = vec![ANGLER];
        state.library = vec![SWAMP; 6]; // one short of the seven draws
        state.pool.add(Color::Black, 5);

        assert!(!big_draw_matches(&state));
    }

    #[test]
    fn test_tutor_swaps_finisher_out_of_library() {
        let mut state = bare_state();
        state.hand = vec![BRAINSPOIL];
        state.library = vec![SWAMP, TORCH, ISLAND];
        state.pool.add(Color::Black, 2);
        state.pool.add(Color::Blue, 1);

        assert!(tutor_matches(&state));
        tutor_perform(&mut state, &mut NullObserver).unwrap();

        assert_eq!(state.hand, vec![TORCH]);
        assert_eq!(state.graveyard, vec![BRAINSPOIL]);
        assert_eq!(state.library.len(), 2);
        assert!(!state.library.contains(&TORCH));
        assert_eq!(state.storm, 0);
        assert_eq!(state.pool.total(), 0);
    }

    #[test]
    fn test_dispatch_prefers_hand_rules_and_position_order() {
        let mut state = bare_state();
        state.turn = 4;
        state.library = vec![SWAMP];
        state.hand = vec![RITUAL, PETAL];
        state.battlefield = vec![STAR];
        state.pool.add(Color::Black, 1);

        // Ritual sits leftmost and matches first, ahead of the petal and
        // any board rule.
        let step = dispatch(&mut state, &mut NullObserver).unwrap();
        assert_eq!(step, Step::Acted);
        assert_eq!(state.graveyard, vec![RITUAL]);
        assert_eq!(state.battlefield, vec![STAR]);
    }

    #[test]
    fn test_dispatch_reports_no_action() {
        let mut state = bare_state();
        state.turn = 4;
        state.library = vec![SWAMP];
        state.hand = vec![KNOWLEDGE]; // unaffordable
        let step = dispatch(&mut state, &mut NullObserver).unwrap();
        assert_eq!(step, Step::NoAction);
    }

    #[test]
    fn test_dispatch_wins_through_the_finisher() {
        let mut state = bare_state();
        state.hand = vec![TORCH];
        state.pool.add(Color::Red, 1);
        state.pool.add(Color::Green, 20);

        let step = dispatch(&mut state, &mut NullObserver).unwrap();
        assert_eq!(step, Step::Won(TORCH));
    }
}
