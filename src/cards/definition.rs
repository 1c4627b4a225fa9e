//! Card definitions - static card data.
//!
//! `CardDef` holds the immutable properties of a card type. A `Card` is a
//! copyable handle to one; zones store handles, never copies of the data.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::core::Result;
use crate::decision::Seats;
use crate::effects::{self, Effect, Resources};
use crate::game::Game;
use crate::zones::PlayerState;

/// Upper bound for "any number of cards" decisions.
pub const UNBOUNDED: usize = usize::MAX;

/// A treasure or victory value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardValue {
    /// The same value in every deck.
    Fixed(i32),
    /// One point for every `n` cards the owner has.
    PerDeckSize(u32),
}

impl CardValue {
    /// Evaluate against the owning player's state.
    #[must_use]
    pub fn value(self, state: &PlayerState) -> i32 {
        match self {
            CardValue::Fixed(v) => v,
            CardValue::PerDeckSize(n) => (state.deck_size() / n.max(1) as usize) as i32,
        }
    }

    /// Whether the value is positive (state-derived values always are).
    #[must_use]
    pub const fn is_positive(self) -> bool {
        match self {
            CardValue::Fixed(v) => v > 0,
            CardValue::PerDeckSize(_) => true,
        }
    }

    /// Whether the value is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, CardValue::Fixed(v) if v < 0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::cards::{Card, CardDef};
///
/// const LAB: CardDef = CardDef { cards: 2, actions: 1, ..CardDef::new("Lab", 5) };
/// let lab = Card::new(&LAB);
///
/// assert!(lab.is_action());
/// assert!(!lab.is_treasure());
/// ```
#[derive(Debug, Serialize)]
pub struct CardDef {
    /// Card name; also the card's identity.
    pub name: &'static str,
    /// Supply price.
    pub cost: i32,
    /// Coins this card is worth while in hand.
    pub treasure: CardValue,
    /// Victory points this card is worth in a deck.
    pub vp: CardValue,
    /// +Coins when played.
    pub coins: i32,
    /// +Cards when played.
    pub cards: usize,
    /// +Actions when played.
    pub actions: i32,
    /// +Buys when played.
    pub buys: i32,
    /// Applied in order after the resource deltas.
    pub effect: &'static [Effect],
    /// Applied, with the holder acting, when an attack reaches the holder.
    pub reaction: &'static [Effect],
    pub is_attack: bool,
    pub is_defense: bool,
}

impl CardDef {
    /// A card with the given name and cost and nothing else.
    #[must_use]
    pub const fn new(name: &'static str, cost: i32) -> Self {
        Self {
            name,
            cost,
            treasure: CardValue::Fixed(0),
            vp: CardValue::Fixed(0),
            coins: 0,
            cards: 0,
            actions: 0,
            buys: 0,
            effect: &[],
            reaction: &[],
            is_attack: false,
            is_defense: false,
        }
    }
}

/// Handle to a card type.
///
/// Equality, ordering and hashing go by name.
#[derive(Clone, Copy)]
pub struct Card(&'static CardDef);

impl Card {
    /// Wrap a static definition.
    #[must_use]
    pub const fn new(def: &'static CardDef) -> Self {
        Self(def)
    }

    /// The underlying definition.
    #[must_use]
    pub const fn def(self) -> &'static CardDef {
        self.0
    }

    #[must_use]
    pub fn is_treasure(self) -> bool {
        self.treasure.is_positive()
    }

    #[must_use]
    pub fn is_victory(self) -> bool {
        self.vp.is_positive()
    }

    #[must_use]
    pub fn is_curse(self) -> bool {
        self.vp.is_negative()
    }

    /// Victory card that is neither an action nor a treasure.
    #[must_use]
    pub fn is_pure_victory(self) -> bool {
        self.is_victory() && !self.is_action() && !self.is_treasure()
    }

    /// Anything that does something when played.
    #[must_use]
    pub fn is_action(self) -> bool {
        self.coins != 0
            || self.cards != 0
            || self.actions != 0
            || self.buys != 0
            || !self.effect.is_empty()
    }

    #[must_use]
    pub fn is_attack(self) -> bool {
        self.is_attack
    }

    #[must_use]
    pub fn is_defense(self) -> bool {
        self.is_defense
    }

    #[must_use]
    pub fn is_reaction(self) -> bool {
        !self.reaction.is_empty()
    }

    /// The coins/actions/buys deltas granted on play.
    #[must_use]
    pub fn resources(self) -> Resources {
        Resources::new(self.coins, self.actions, self.buys)
    }

    /// Apply this card's play effects for the acting seat of `game`.
    pub fn perform_action(self, game: &Game, seats: &mut dyn Seats) -> Result<Game> {
        effects::perform_action(self, game, seats)
    }
}

impl Deref for Card {
    type Target = CardDef;

    fn deref(&self) -> &CardDef {
        self.0
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.name.cmp(other.0.name)
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.name)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.name)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.name)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        super::by_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown card `{}`", name)))
    }
}
