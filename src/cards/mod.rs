//! Card identity and the static capability catalog.
//!
//! A card is an opaque `CardId`; everything the simulation needs to know
//! about it (category tags, mana value, land yields) is a constant-time
//! lookup in the catalog. No card carries behavior of its own: behavior
//! lives in the decision policy, keyed off these facts.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card in the fixed archetype set
//! - `Tags`: Static capability-tag set per card (land, creature, ...)

pub mod catalog;
pub mod id;

pub use catalog::{
    basic_color, best_tagged, count_tagged, mana_value, name, position_tagged, sac_yield, tags,
    tap_yield, Tags,
};
pub use id::CardId;

// The named card set, re-exported flat for callers building decks.
pub use id::{
    ANGLER, ATTENDANTS, BRAINSPOIL, ENERGY_TAP, EPICURE, FOREST, ISLAND, KNOWLEDGE, LOOTING,
    MANAMORPHOSE, MOUNTAIN, OFFERING, PETAL, PLAINS, PONDER, PREORDAIN, RITUAL, SKERRY, SPHERE,
    SPRING, STAR, SWAMP, TORCH, VENT, VISIONS, WEATHER, WRAITH,
};
