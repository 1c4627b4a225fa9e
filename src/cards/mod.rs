//! Card system: immutable card descriptors and the built-in catalogue.
//!
//! ## Key Types
//!
//! - `CardDef`: Static card data (cost, values, resource deltas, effects, flags)
//! - `Card`: Copyable handle to a `CardDef`; two handles with the same name
//!   are interchangeable
//! - `CardValue`: Treasure or VP that is either constant or derived from the
//!   owner's deck
//!
//! Every card type is a `const` descriptor defined once and shared by every
//! zone of every game.

pub mod definition;
pub mod base;
pub mod kingdom;

pub use definition::{Card, CardDef, CardValue, UNBOUNDED};
pub use base::{BASE_CARDS, COPPER, CURSE, DUCHY, ESTATE, GOLD, PROVINCE, SILVER};
pub use kingdom::{
    BASE_ACTIONS, CELLAR, CHAPEL, COUNCIL_ROOM, FESTIVAL, GARDENS, LABORATORY, MARKET, MILITIA,
    MOAT, SMITHY, VILLAGE, WAREHOUSE, WITCH, WOODCUTTER,
};

/// Every card the catalogue knows, base cards first.
pub fn catalogue() -> impl Iterator<Item = Card> {
    BASE_CARDS.iter().chain(kingdom::KINGDOM_CARDS.iter()).copied()
}

/// Look up a catalogue card by name.
///
/// ```
/// use rust_deckbuilder::cards;
///
/// assert_eq!(cards::by_name("Smithy"), Some(cards::SMITHY));
/// assert_eq!(cards::by_name("Nonesuch"), None);
/// ```
pub fn by_name(name: &str) -> Option<Card> {
    catalogue().find(|card| card.name == name)
}
