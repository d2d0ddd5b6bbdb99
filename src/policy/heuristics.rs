//! Card-selection heuristics: scry and discard.
//!
//! Scry decisions are driven by a snapshot of situational wants taken
//! when the scry starts. The finisher always stays on top; sacrifice
//! lands are dead past turn 3 and always go to the bottom; everything
//! else stays only if the matching want currently holds.

use smallvec::SmallVec;

use crate::cards::{self, CardId, Tags, KNOWLEDGE, TORCH};
use crate::game::state::{GameState, Zone};
use crate::observe::{Observer, PlayoutEvent};

/// What the current game state is short of.
#[derive(Clone, Copy, Debug)]
struct Wants {
    /// No creature held; a delve body is worth keeping.
    creature: bool,
    /// Two or fewer mana filters across hand and battlefield.
    filtering: bool,
    /// One or fewer easy draws in hand.
    draw: bool,
    /// No big draw spell in hand while mana is already plentiful.
    card_advantage: bool,
    /// No untapped-type land in hand or among tapped permanents.
    land: bool,
}

impl Wants {
    fn current(state: &GameState) -> Self {
        let filters = state.count(Zone::Hand, Tags::MANA_FILTER)
            + state.count(Zone::Battlefield, Tags::MANA_FILTER);
        Self {
            creature: state.count(Zone::Hand, Tags::CREATURE) == 0,
            filtering: filters <= 2,
            draw: state.count(Zone::Hand, Tags::EASY_DRAW) <= 1,
            card_advantage: !state.hand.contains(&KNOWLEDGE) && state.pool.total() > 5,
            land: state.count(Zone::Hand, Tags::BASIC) == 0
                && state.count(Zone::Tapped, Tags::BASIC) == 0,
        }
    }
}

fn keep_on_top(card: CardId, wants: Wants) -> bool {
    if card == TORCH {
        return true;
    }
    let t = cards::tags(card);
    if t.contains(Tags::SAC_LAND) {
        return false;
    }
    (t.contains(Tags::CREATURE) && wants.creature)
        || (t.contains(Tags::MANA_FILTER) && wants.filtering)
        || (t.contains(Tags::EASY_DRAW) && wants.draw)
        || (card == KNOWLEDGE && wants.card_advantage)
        || (t.contains(Tags::BASIC) && wants.land)
}

/// Look at the top `n` library cards; keep the useful ones on top and
/// bury the rest.
///
/// Kept cards stay in their scry order; the remainder of the library sits
/// between them and the buried cards.
pub fn scry(state: &mut GameState, n: usize, obs: &mut dyn Observer) {
    let n = n.min(state.library.len());
    if n == 0 {
        return;
    }

    let wants = Wants::current(state);
    let looked: SmallVec<[CardId; 4]> = state.library.drain(..n).collect();

    let mut kept: SmallVec<[CardId; 4]> = SmallVec::new();
    let mut bottomed: SmallVec<[CardId; 4]> = SmallVec::new();
    for card in looked {
        if keep_on_top(card, wants) {
            kept.push(card);
        } else {
            bottomed.push(card);
        }
    }

    obs.on_event(&PlayoutEvent::Scryed {
        kept: &kept,
        bottomed: &bottomed,
    });

    let mut library = Vec::with_capacity(kept.len() + state.library.len() + bottomed.len());
    library.extend_from_slice(&kept);
    library.append(&mut state.library);
    library.extend_from_slice(&bottomed);
    state.library = library;
}

/// Discard `n` cards: lands first, then surplus creatures (always keeping
/// one), then whatever is leftmost.
pub fn discard(state: &mut GameState, n: usize, obs: &mut dyn Observer) {
    for _ in 0..n {
        if state.hand.is_empty() {
            return;
        }
        let index = cards::position_tagged(&state.hand, Tags::LAND)
            .or_else(|| {
                if cards::count_tagged(&state.hand, Tags::CREATURE) > 1 {
                    cards::position_tagged(&state.hand, Tags::CREATURE)
                } else {
                    None
                }
            })
            .unwrap_or(0);
        let card = state.move_card(Zone::Hand, index, Zone::Graveyard);
        obs.on_event(&PlayoutEvent::Played {
            card,
            to: Zone::Graveyard,
        });
    }
}
