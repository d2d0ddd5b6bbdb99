//! The static card catalog: capability tags and mana facts.
//!
//! Category membership is a bitset per card, queried by set containment.
//! A card may carry several tags (a sacrifice land is also a land; a star
//! is an artifact, a mana filter, an easy draw and an early play).
//!
//! Everything here is pure data. There are no failure modes: unknown ids
//! simply carry no tags and mana value 0.

use crate::mana::Color;

use super::id::{self, CardId};

/// Capability-tag set for a card.
///
/// Tags overlap freely; membership is queried with [`Tags::contains`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tags(u16);

impl Tags {
    pub const NONE: Tags = Tags(0);
    /// Any land.
    pub const LAND: Tags = Tags(1);
    /// Basic land: enters untapped, taps for one fixed color.
    pub const BASIC: Tags = Tags(1 << 1);
    /// Sacrifice land: enters tapped, sacrifices for a two-mana burst.
    pub const SAC_LAND: Tags = Tags(1 << 2);
    pub const CREATURE: Tags = Tags(1 << 3);
    pub const ARTIFACT: Tags = Tags(1 << 4);
    /// Cheap cantrip-style selection; counted by the mulligan keep rule.
    pub const EASY_DRAW: Tags = Tags(1 << 5);
    /// Worth casting on turn 3 to bank storm and filtering for the attempt.
    pub const EARLY_PLAY: Tags = Tags(1 << 6);
    /// Converts mana of one color into another (plus a card).
    pub const MANA_FILTER: Tags = Tags(1 << 7);
    /// Generic cost payable by exiling cards from the graveyard.
    pub const DELVE: Tags = Tags(1 << 8);
    /// Can be pitched from hand for a replacement card.
    pub const CYCLING: Tags = Tags(1 << 9);
    /// Zero-cost permanent that sacrifices for a mana.
    pub const MANA_ROCK: Tags = Tags(1 << 10);

    /// Union of two tag sets.
    #[must_use]
    pub const fn union(self, other: Tags) -> Tags {
        Tags(self.0 | other.0)
    }

    /// True if every tag in `other` is present in `self`.
    #[must_use]
    pub const fn contains(self, other: Tags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for Tags {
    type Output = Tags;

    fn bitor(self, rhs: Tags) -> Tags {
        self.union(rhs)
    }
}

const LAND_BASIC: Tags = Tags::LAND.union(Tags::BASIC);
const LAND_SAC: Tags = Tags::LAND.union(Tags::SAC_LAND);
const FILTER_ARTIFACT: Tags = Tags::ARTIFACT
    .union(Tags::EASY_DRAW)
    .union(Tags::EARLY_PLAY)
    .union(Tags::MANA_FILTER);

/// Capability tags for a card.
#[must_use]
pub const fn tags(card: CardId) -> Tags {
    match card.raw() {
        1..=5 => LAND_BASIC,
        11..=13 => LAND_SAC,
        101 | 203 => FILTER_ARTIFACT, // star, sphere
        102 => Tags::ARTIFACT.union(Tags::MANA_ROCK), // petal
        113 => Tags::EASY_DRAW.union(Tags::MANA_FILTER), // manamorphose
        123 | 125 | 126 | 128 => Tags::EASY_DRAW, // looting, ponder, preordain, visions
        131 | 132 => Tags::CREATURE.union(Tags::DELVE), // angler, attendants
        233 => Tags::CREATURE.union(Tags::CYCLING), // wraith
        234 => Tags::CREATURE, // epicure
        _ => Tags::NONE,
    }
}

/// Mana value ("converted mana cost") of a card.
///
/// Drives delve discounts and the creature-sized mana/draw effects.
#[must_use]
pub const fn mana_value(card: CardId) -> u32 {
    match card.raw() {
        101 | 203 => 1,       // star, sphere
        111 | 112 => 1,       // offering, ritual
        113 => 2,             // manamorphose
        121 => 5,             // brainspoil
        122 | 123 => 1,       // energy tap, looting
        124 => 2,             // torch (X excluded)
        125 | 126 | 128 => 1, // ponder, preordain, visions
        127 => 5,             // knowledge
        131 => 7,             // angler
        132 => 6,             // attendants
        214 => 2,             // weather
        233 => 5,             // wraith
        234 => 3,             // epicure
        _ => 0,
    }
}

/// The single color a basic land taps for.
#[must_use]
pub const fn basic_color(card: CardId) -> Option<Color> {
    match card.raw() {
        1 => Some(Color::White),
        2 => Some(Color::Blue),
        3 => Some(Color::Black),
        4 => Some(Color::Red),
        5 => Some(Color::Green),
        _ => None,
    }
}

/// The single color a sacrifice land yields when tapped without sacrificing.
#[must_use]
pub const fn tap_yield(card: CardId) -> Option<Color> {
    match card.raw() {
        11 | 12 => Some(Color::Blue), // spring, skerry
        13 => Some(Color::Black),     // vent
        _ => None,
    }
}

/// The two-mana combination a sacrifice land yields when sacrificed.
#[must_use]
pub const fn sac_yield(card: CardId) -> Option<(Color, Color)> {
    match card.raw() {
        11 => Some((Color::White, Color::Black)), // spring
        12 => Some((Color::Blue, Color::Blue)),   // skerry
        13 => Some((Color::Blue, Color::Red)),    // vent
        _ => None,
    }
}

/// Display name, for external presentation and debugging only.
#[must_use]
pub const fn name(card: CardId) -> &'static str {
    match card.raw() {
        1 => "Plains",
        2 => "Island",
        3 => "Swamp",
        4 => "Mountain",
        5 => "Forest",
        11 => "Ancient Spring",
        12 => "Saprazzan Skerry",
        13 => "Sulfur Vent",
        101 => "Chromatic Star",
        102 => "Lotus Petal",
        111 => "Burnt Offering",
        112 => "Dark Ritual",
        113 => "Manamorphose",
        121 => "Brainspoil",
        122 => "Energy Tap",
        123 => "Faithless Looting",
        124 => "Kaervek's Torch",
        125 => "Ponder",
        126 => "Preordain",
        127 => "Rush of Knowledge",
        128 => "Serum Visions",
        131 => "Gurmag Angler",
        132 => "Sultai Scavenger",
        203 => "Chromatic Sphere",
        214 => "Weather the Storm",
        233 => "Street Wraith",
        234 => "Gixian Epicure",
        _ => "Unknown Card",
    }
}

// === Slice queries ===
//
// Zone contents are plain `&[CardId]`; these are the membership scans the
// policy and heuristics run against them. Positional order is the only
// tie-break anywhere in the engine.

/// Number of cards in `cards` carrying all tags in `wanted`.
#[must_use]
pub fn count_tagged(cards: &[CardId], wanted: Tags) -> usize {
    cards.iter().filter(|&&c| tags(c).contains(wanted)).count()
}

/// Index of the first card in `cards` carrying all tags in `wanted`.
#[must_use]
pub fn position_tagged(cards: &[CardId], wanted: Tags) -> Option<usize> {
    cards.iter().position(|&c| tags(c).contains(wanted))
}

/// Index and mana value of the highest-mana-value tagged card.
///
/// Ties keep the earliest position.
#[must_use]
pub fn best_tagged(cards: &[CardId], wanted: Tags) -> Option<(usize, u32)> {
    let mut best: Option<(usize, u32)> = None;
    for (i, &c) in cards.iter().enumerate() {
        if !tags(c).contains(wanted) {
            continue;
        }
        let mv = mana_value(c);
        match best {
            Some((_, mv_best)) if mv_best >= mv => {}
            _ => best = Some((i, mv)),
        }
    }
    best
}
