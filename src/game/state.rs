//! The mutable record of one simulated game.
//!
//! All real state is per-trial and lives here: the five card zones plus
//! the exile sink, the floating mana pool, and the turn/storm/land-drop
//! bookkeeping. Cards only ever move between zones, so the multiset union
//! of every zone always equals the deck the game started from.

use crate::cards::{self, CardId, Tags};
use crate::error::TrialError;
use crate::mana::ManaPool;
use crate::observe::{Observer, PlayoutEvent};
use crate::rng::GameRng;

/// Which vector a card currently lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Face-down stack; index 0 is the next draw.
    Library,
    Hand,
    /// Untapped permanents.
    Battlefield,
    /// Tapped permanents; returned to the battlefield at each untap step.
    Tapped,
    Graveyard,
    /// Removed from the game (delve). Never leaves.
    Exile,
}

impl Zone {
    /// Every zone, for conservation sweeps.
    pub const ALL: [Zone; 6] = [
        Zone::Library,
        Zone::Hand,
        Zone::Battlefield,
        Zone::Tapped,
        Zone::Graveyard,
        Zone::Exile,
    ];
}

/// State of one simulated game.
///
/// Built fresh per trial from a shuffled deck copy, mutated in place
/// through mulligan, opening turns and the combo loop, then discarded
/// once an outcome is recorded. Never shared between trials.
#[derive(Clone, Debug)]
pub struct GameState {
    pub library: Vec<CardId>,
    pub hand: Vec<CardId>,
    pub battlefield: Vec<CardId>,
    pub tapped: Vec<CardId>,
    pub graveyard: Vec<CardId>,
    pub exiled: Vec<CardId>,

    /// Floating mana, cleared at each turn boundary.
    pub pool: ManaPool,
    /// Spells and permanents played this turn.
    pub storm: u32,
    /// Current turn, 0 until the first turn begins.
    pub turn: u32,
    /// Land-drop slots used across the whole game.
    pub lands_played: u32,
    /// Whether this turn's land drop is spent.
    pub played_land_this_turn: bool,

    /// This trial's private random stream.
    pub rng: GameRng,
}

impl GameState {
    /// Start a game from a deck, shuffling the library immediately.
    #[must_use]
    pub fn new(deck: &[CardId], seed: u64) -> Self {
        let mut state = Self {
            library: deck.to_vec(),
            hand: Vec::new(),
            battlefield: Vec::new(),
            tapped: Vec::new(),
            graveyard: Vec::new(),
            exiled: Vec::new(),
            pool: ManaPool::new(),
            storm: 0,
            turn: 0,
            lands_played: 0,
            played_land_this_turn: false,
            rng: GameRng::new(seed),
        };
        state.shuffle_library();
        state
    }

    /// Borrow a zone's cards.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &[CardId] {
        match zone {
            Zone::Library => &self.library,
            Zone::Hand => &self.hand,
            Zone::Battlefield => &self.battlefield,
            Zone::Tapped => &self.tapped,
            Zone::Graveyard => &self.graveyard,
            Zone::Exile => &self.exiled,
        }
    }

    fn zone_mut(&mut self, zone: Zone) -> &mut Vec<CardId> {
        match zone {
            Zone::Library => &mut self.library,
            Zone::Hand => &mut self.hand,
            Zone::Battlefield => &mut self.battlefield,
            Zone::Tapped => &mut self.tapped,
            Zone::Graveyard => &mut self.graveyard,
            Zone::Exile => &mut self.exiled,
        }
    }

    /// Move the card at `index` of `from` to the back of `to`.
    ///
    /// Panics if `index` is out of bounds; callers locate the card in
    /// the same borrow they decide to move it.
    pub fn move_card(&mut self, from: Zone, index: usize, to: Zone) -> CardId {
        let card = self.zone_mut(from).remove(index);
        self.zone_mut(to).push(card);
        card
    }

    /// Cards across every zone including exile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        Zone::ALL.iter().map(|&z| self.zone(z).len()).sum()
    }

    /// Number of cards in a zone carrying all of `wanted`.
    #[must_use]
    pub fn count(&self, zone: Zone, wanted: Tags) -> usize {
        cards::count_tagged(self.zone(zone), wanted)
    }

    /// Shuffle the library with this trial's stream.
    pub fn shuffle_library(&mut self) {
        self.rng.shuffle(&mut self.library);
    }

    /// Draw `n` cards into hand.
    ///
    /// Check-before-draw: the whole draw is verified against the library
    /// first. Callers inside the combo loop gate draws behind their rule
    /// preconditions; tripping this is a defect, not a loss.
    pub fn draw(&mut self, n: usize, obs: &mut dyn Observer) -> Result<(), TrialError> {
        if self.library.len() < n {
            return Err(TrialError::LibraryUnderflow {
                requested: n,
                available: self.library.len(),
            });
        }
        let start = self.hand.len();
        for _ in 0..n {
            let card = self.library.remove(0);
            self.hand.push(card);
        }
        obs.on_event(&PlayoutEvent::Drew {
            cards: &self.hand[start..],
        });
        Ok(())
    }

    /// Begin a turn: untap everything, clear mana and storm, refresh the
    /// land drop.
    pub fn begin_turn(&mut self, turn: u32, obs: &mut dyn Observer) {
        self.turn = turn;
        self.pool.clear();
        self.storm = 0;
        self.played_land_this_turn = false;
        let untapping = std::mem::take(&mut self.tapped);
        self.battlefield.extend(untapping);
        obs.on_event(&PlayoutEvent::TurnStart { turn });
    }

    /// Emit the current pool/storm to the observer.
    pub fn emit_pool(&self, obs: &mut dyn Observer) {
        obs.on_event(&PlayoutEvent::Pool {
            floating: self.pool.components(),
            storm: self.storm,
        });
    }
}
