//! The mana economy: colors, the floating pool, and its spend/make policies.
//!
//! The pool is six unsigned counters (white, blue, black, red, green,
//! colorless). Components can never go negative: a spend that would
//! overdraw a color is a [`TrialError`], because every decision-policy
//! rule is required to verify affordability before paying. An overdraw
//! means a rule's precondition under-counted, and must surface, not clamp.
//!
//! ## Payment policy
//!
//! Colored costs come straight out of their components. Generic costs are
//! paid one unit at a time in a fixed priority: colorless, then white,
//! then the largest of {white, red, green}, then blue, then black. The
//! ordering spends the colors least useful to the remaining plays first
//! and keeps blue and black (the colors the dig and ritual spells need)
//! alive longest.
//!
//! ## Production policy
//!
//! Color-flexible sources add one unit at a time to whichever enabled
//! color currently holds the smallest balance, spreading value across the
//! usable colors instead of stranding it in one.

use serde::{Deserialize, Serialize};

use crate::error::TrialError;

/// A mana color, including colorless as its own component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White = 0,
    Blue = 1,
    Black = 2,
    Red = 3,
    Green = 4,
    Colorless = 5,
}

impl Color {
    /// Number of pool components.
    pub const COUNT: usize = 6;

    /// All colors in component order.
    pub const ALL: [Color; Color::COUNT] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Colorless,
    ];

    /// Component index of this color.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A set of colors a flexible source may produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSet(u8);

impl ColorSet {
    pub const EMPTY: ColorSet = ColorSet(0);
    /// The colors the archetype actually spends: blue, black, red.
    pub const SPELL_COLORS: ColorSet = ColorSet::EMPTY
        .with(Color::Blue)
        .with(Color::Black)
        .with(Color::Red);
    /// Black/red only (creature-sacrifice bursts).
    pub const BLACK_RED: ColorSet = ColorSet::EMPTY.with(Color::Black).with(Color::Red);
    pub const COLORLESS: ColorSet = ColorSet::EMPTY.with(Color::Colorless);

    /// This set plus one color.
    #[must_use]
    pub const fn with(self, color: Color) -> ColorSet {
        ColorSet(self.0 | 1 << color.index())
    }

    /// Membership test.
    #[must_use]
    pub const fn contains(self, color: Color) -> bool {
        self.0 & (1 << color.index()) != 0
    }
}

/// The floating mana pool of one game.
///
/// Component order is W, U, B, R, G, colorless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaPool([u32; Color::COUNT]);

impl ManaPool {
    /// An empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Floating amount of one color.
    #[must_use]
    pub fn get(&self, color: Color) -> u32 {
        self.0[color.index()]
    }

    /// Total floating mana across all components.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Raw component snapshot, for observers and assertions.
    #[must_use]
    pub fn components(&self) -> [u32; Color::COUNT] {
        self.0
    }

    /// Add `amount` of a single fixed color.
    pub fn add(&mut self, color: Color, amount: u32) {
        self.0[color.index()] += amount;
    }

    /// Empty the pool (turn boundary).
    pub fn clear(&mut self) {
        self.0 = [0; Color::COUNT];
    }

    /// Pay a cost of `generic` plus fixed colored amounts.
    ///
    /// Colored amounts are verified against their components before any
    /// subtraction happens, so a failed spend leaves the pool untouched.
    /// The generic part is then paid per the priority order documented on
    /// the module.
    pub fn spend(
        &mut self,
        generic: u32,
        white: u32,
        blue: u32,
        black: u32,
        red: u32,
        green: u32,
    ) -> Result<(), TrialError> {
        let colored = [
            (Color::White, white),
            (Color::Blue, blue),
            (Color::Black, black),
            (Color::Red, red),
            (Color::Green, green),
        ];

        for (color, amount) in colored {
            if self.get(color) < amount {
                return Err(TrialError::ManaUnderflow {
                    color,
                    requested: amount,
                    available: self.get(color),
                });
            }
        }
        if self.total() < generic + white + blue + black + red + green {
            return Err(TrialError::GenericUnderflow { remaining: generic });
        }

        for (color, amount) in colored {
            self.0[color.index()] -= amount;
        }

        for paid in 0..generic {
            let color = self
                .next_generic_payment()
                .ok_or(TrialError::GenericUnderflow {
                    remaining: generic - paid,
                })?;
            self.0[color.index()] -= 1;
        }
        Ok(())
    }

    /// Which component the next unit of generic cost comes out of.
    fn next_generic_payment(&self) -> Option<Color> {
        if self.get(Color::Colorless) > 0 {
            return Some(Color::Colorless);
        }
        if self.get(Color::White) > 0 {
            return Some(Color::White);
        }
        // Largest of white/red/green next, so no single off-color pile
        // strands while the others drain. Ties keep the earliest color.
        let mut best: Option<Color> = None;
        for c in [Color::White, Color::Red, Color::Green] {
            if self.get(c) == 0 {
                continue;
            }
            match best {
                Some(b) if self.get(b) >= self.get(c) => {}
                _ => best = Some(c),
            }
        }
        if best.is_some() {
            return best;
        }
        if self.get(Color::Blue) > 0 {
            return Some(Color::Blue);
        }
        if self.get(Color::Black) > 0 {
            return Some(Color::Black);
        }
        None
    }

    /// Produce `amount` units across an enabled color set.
    ///
    /// Each unit lands in the enabled color currently holding the least,
    /// ties resolved in component order.
    pub fn make(&mut self, amount: u32, colors: ColorSet) {
        for _ in 0..amount {
            let Some(&color) = Color::ALL
                .iter()
                .filter(|&&c| colors.contains(c))
                .min_by_key(|&&c| self.get(c))
            else {
                return;
            };
            self.0[color.index()] += 1;
        }
    }
}
