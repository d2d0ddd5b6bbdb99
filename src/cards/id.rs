//! Card identifiers.
//!
//! `CardId` identifies a card in the fixed archetype set. Decks are
//! multisets of ids; two copies of the same card are indistinguishable.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
///
/// Identifies the card itself ("Lotus Petal"), not a specific copy in a
/// game; copies are positions in zone vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", super::catalog::name(*self))
    }
}

// === The archetype card set ===
//
// Basic lands tap for one fixed color. Sacrifice lands enter tapped and
// trade themselves for a two-mana burst on the combo turn.

pub const PLAINS: CardId = CardId::new(1);
pub const ISLAND: CardId = CardId::new(2);
pub const SWAMP: CardId = CardId::new(3);
pub const MOUNTAIN: CardId = CardId::new(4);
pub const FOREST: CardId = CardId::new(5);

pub const SPRING: CardId = CardId::new(11);
pub const SKERRY: CardId = CardId::new(12);
pub const VENT: CardId = CardId::new(13);

pub const STAR: CardId = CardId::new(101);
pub const PETAL: CardId = CardId::new(102);

pub const OFFERING: CardId = CardId::new(111);
pub const RITUAL: CardId = CardId::new(112);
pub const MANAMORPHOSE: CardId = CardId::new(113);

pub const BRAINSPOIL: CardId = CardId::new(121);
pub const ENERGY_TAP: CardId = CardId::new(122);
pub const LOOTING: CardId = CardId::new(123);
pub const TORCH: CardId = CardId::new(124);
pub const PONDER: CardId = CardId::new(125);
pub const PREORDAIN: CardId = CardId::new(126);
pub const KNOWLEDGE: CardId = CardId::new(127);
pub const VISIONS: CardId = CardId::new(128);

pub const ANGLER: CardId = CardId::new(131);
pub const ATTENDANTS: CardId = CardId::new(132);

pub const SPHERE: CardId = CardId::new(203);
pub const WEATHER: CardId = CardId::new(214);
pub const WRAITH: CardId = CardId::new(233);
pub const EPICURE: CardId = CardId::new(234);

/// Every card the catalog knows about.
pub const ALL_CARDS: [CardId; 27] = [
    PLAINS, ISLAND, SWAMP, MOUNTAIN, FOREST, SPRING, SKERRY, VENT, STAR, PETAL, OFFERING, RITUAL,
    MANAMORPHOSE, BRAINSPOIL, ENERGY_TAP, LOOTING, TORCH, PONDER, PREORDAIN, KNOWLEDGE, VISIONS,
    ANGLER, ATTENDANTS, SPHERE, WEATHER, WRAITH, EPICURE,
];
