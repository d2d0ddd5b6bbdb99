//! Decks and the candidate-deck search space.
//!
//! A deck is a multiset: two lists with the same cards in a different
//! order are the same deck. Candidates are generated from a fixed base
//! plus an options pool, and the enumeration works over grouped card
//! counts so each distinct multiset comes out exactly once, with no
//! post-hoc dedup pass needed.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{
    CardId, ANGLER, ATTENDANTS, BRAINSPOIL, ENERGY_TAP, EPICURE, ISLAND, KNOWLEDGE, LOOTING,
    MANAMORPHOSE, OFFERING, PETAL, PONDER, PREORDAIN, RITUAL, SKERRY, SPHERE, SPRING, STAR, TORCH,
    VENT, VISIONS, WEATHER, WRAITH,
};

/// Every candidate is built out to exactly this many cards.
pub const DECK_SIZE: usize = 60;

/// A deck, canonicalised as a sorted card list.
///
/// Equality, hashing and deduplication all run on the canonical form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<CardId>,
}

impl Deck {
    /// Build a deck from any card order.
    #[must_use]
    pub fn new(mut cards: Vec<CardId>) -> Self {
        cards.sort_unstable();
        Self { cards }
    }

    /// The cards, in canonical order.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Distinct cards with their copy counts, in canonical order.
    ///
    /// This is the shape external tabular exporters consume.
    #[must_use]
    pub fn card_counts(&self) -> Vec<(CardId, u32)> {
        let mut counts: Vec<(CardId, u32)> = Vec::new();
        for &card in &self.cards {
            match counts.last_mut() {
                Some((last, n)) if *last == card => *n += 1,
                _ => counts.push((card, 1)),
            }
        }
        counts
    }

    /// The archetype's stock 60.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        push_copies(&mut cards, STAR, 4);
        push_copies(&mut cards, PETAL, 3);
        push_copies(&mut cards, OFFERING, 4);
        push_copies(&mut cards, RITUAL, 4);
        push_copies(&mut cards, MANAMORPHOSE, 4);
        push_copies(&mut cards, BRAINSPOIL, 2);
        push_copies(&mut cards, ENERGY_TAP, 4);
        push_copies(&mut cards, LOOTING, 2);
        push_copies(&mut cards, TORCH, 1);
        push_copies(&mut cards, PONDER, 3);
        push_copies(&mut cards, PREORDAIN, 4);
        push_copies(&mut cards, KNOWLEDGE, 4);
        push_copies(&mut cards, VISIONS, 2);
        push_copies(&mut cards, ANGLER, 3);
        push_copies(&mut cards, ATTENDANTS, 4);
        push_copies(&mut cards, SPRING, 4);
        push_copies(&mut cards, ISLAND, 1);
        push_copies(&mut cards, SKERRY, 4);
        push_copies(&mut cards, VENT, 3);
        Self::new(cards)
    }
}

fn push_copies(cards: &mut Vec<CardId>, card: CardId, copies: usize) {
    for _ in 0..copies {
        cards.push(card);
    }
}

/// The candidate-deck search space: a fixed base plus an options pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
    base: Vec<CardId>,
    options: Vec<CardId>,
}

impl DeckSpec {
    /// Define a search space.
    ///
    /// Panics if the base alone exceeds [`DECK_SIZE`].
    #[must_use]
    pub fn new(base: Vec<CardId>, options: Vec<CardId>) -> Self {
        assert!(
            base.len() <= DECK_SIZE,
            "base of {} cards exceeds the {DECK_SIZE}-card deck",
            base.len()
        );
        Self { base, options }
    }

    /// The fixed cards every candidate shares.
    #[must_use]
    pub fn base(&self) -> &[CardId] {
        &self.base
    }

    /// The pool the remaining slots are filled from.
    #[must_use]
    pub fn options(&self) -> &[CardId] {
        &self.options
    }

    /// Slots each candidate fills from the options pool.
    #[must_use]
    pub fn open_slots(&self) -> usize {
        DECK_SIZE - self.base.len()
    }

    /// The stock list with its flex slots opened up.
    ///
    /// 47 fixed cards; the 13 open slots choose between the stock flex
    /// spells and the pool-only cards.
    #[must_use]
    pub fn standard() -> Self {
        let mut base = Vec::with_capacity(47);
        push_copies(&mut base, STAR, 4);
        push_copies(&mut base, PETAL, 3);
        push_copies(&mut base, OFFERING, 4);
        push_copies(&mut base, RITUAL, 4);
        push_copies(&mut base, MANAMORPHOSE, 4);
        push_copies(&mut base, ENERGY_TAP, 4);
        push_copies(&mut base, TORCH, 1);
        push_copies(&mut base, KNOWLEDGE, 4);
        push_copies(&mut base, ANGLER, 3);
        push_copies(&mut base, ATTENDANTS, 4);
        push_copies(&mut base, SPRING, 4);
        push_copies(&mut base, ISLAND, 1);
        push_copies(&mut base, SKERRY, 4);
        push_copies(&mut base, VENT, 3);

        let mut options = Vec::new();
        push_copies(&mut options, PONDER, 3);
        push_copies(&mut options, PREORDAIN, 4);
        push_copies(&mut options, VISIONS, 2);
        push_copies(&mut options, LOOTING, 2);
        push_copies(&mut options, BRAINSPOIL, 2);
        push_copies(&mut options, SPHERE, 4);
        push_copies(&mut options, WRAITH, 2);
        push_copies(&mut options, EPICURE, 2);
        push_copies(&mut options, WEATHER, 2);

        Self::new(base, options)
    }

    /// Every way to fill the open slots from the options pool, one deck
    /// per distinct multiset.
    ///
    /// An options pool too small to fill the slots yields no candidates.
    #[must_use]
    pub fn enumerate(&self) -> Vec<Deck> {
        let mut grouped: FxHashMap<CardId, usize> = FxHashMap::default();
        for &card in &self.options {
            *grouped.entry(card).or_insert(0) += 1;
        }
        let mut groups: Vec<(CardId, usize)> = grouped.into_iter().collect();
        groups.sort_unstable_by_key(|&(card, _)| card);

        let mut decks = Vec::new();
        let mut chosen = Vec::with_capacity(self.open_slots());
        self.fill(&groups, self.open_slots(), &mut chosen, &mut decks);
        decks
    }

    fn fill(
        &self,
        groups: &[(CardId, usize)],
        slots: usize,
        chosen: &mut Vec<CardId>,
        decks: &mut Vec<Deck>,
    ) {
        if slots == 0 {
            let mut cards = self.base.clone();
            cards.extend_from_slice(chosen);
            decks.push(Deck::new(cards));
            return;
        }
        let Some(&(card, available)) = groups.first() else {
            return;
        };
        let rest = &groups[1..];

        let supply_after: usize = rest.iter().map(|&(_, n)| n).sum();
        let min_take = slots.saturating_sub(supply_after);
        let max_take = available.min(slots);
        for take in min_take..=max_take {
            for _ in 0..take {
                chosen.push(card);
            }
            self.fill(rest, slots - take, chosen, decks);
            chosen.truncate(chosen.len() - take);
        }
    }
}
