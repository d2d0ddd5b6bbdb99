//! The injected verbose-sink capability.
//!
//! The engine never prints, colors or serializes anything. Diagnostic
//! consumers hand a [`Observer`] into a trial and receive structured
//! [`PlayoutEvent`]s (card identifiers, counts and plain integers)
//! to render however they like. The default sink drops everything.

use crate::cards::CardId;
use crate::game::Zone;
use crate::mana::Color;

/// One structured event from inside a trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayoutEvent<'a> {
    /// A trial began with this seed.
    GameStart { seed: u64 },
    /// The mulligan loop settled on a hand of this size.
    HandKept { size: usize },
    /// A turn began.
    TurnStart { turn: u32 },
    /// Cards moved from the top of the library to hand, in draw order.
    Drew { cards: &'a [CardId] },
    /// A card was played out of hand into the given zone.
    Played { card: CardId, to: Zone },
    /// A decision-policy rule fired this iteration.
    RuleFired { rule: &'static str },
    /// Top-of-library cards were inspected and split.
    Scryed {
        kept: &'a [CardId],
        bottomed: &'a [CardId],
    },
    /// Floating mana and storm after the latest action.
    Pool {
        floating: [u32; Color::COUNT],
        storm: u32,
    },
}

/// A sink for playout events.
pub trait Observer {
    fn on_event(&mut self, event: &PlayoutEvent<'_>);
}

/// Discards every event. The harness default.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn on_event(&mut self, _event: &PlayoutEvent<'_>) {}
}

/// Collects events in owned form, for tests and diagnostic consumers.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    /// Every card drawn, in draw order.
    pub drawn: Vec<CardId>,
    /// Every rule that fired, in firing order.
    pub rules: Vec<&'static str>,
    /// Every card played out of hand, with its destination.
    pub plays: Vec<(CardId, Zone)>,
    /// Every card seen while scrying, kept-on-top cards first per scry.
    pub scried: Vec<CardId>,
    /// Kept hand sizes (one entry per completed mulligan).
    pub kept_hands: Vec<usize>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for RecordingObserver {
    fn on_event(&mut self, event: &PlayoutEvent<'_>) {
        match *event {
            PlayoutEvent::Drew { cards } => self.drawn.extend_from_slice(cards),
            PlayoutEvent::RuleFired { rule } => self.rules.push(rule),
            PlayoutEvent::Played { card, to } => self.plays.push((card, to)),
            PlayoutEvent::Scryed { kept, bottomed } => {
                self.scried.extend_from_slice(kept);
                self.scried.extend_from_slice(bottomed);
            }
            PlayoutEvent::HandKept { size } => self.kept_hands.push(size),
            _ => {}
        }
    }
}
