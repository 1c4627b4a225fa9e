//! The cards in every game's supply.

use super::definition::{Card, CardDef, CardValue};

const CURSE_DEF: CardDef = CardDef { vp: CardValue::Fixed(-1), ..CardDef::new("Curse", 0) };
const ESTATE_DEF: CardDef = CardDef { vp: CardValue::Fixed(1), ..CardDef::new("Estate", 2) };
const DUCHY_DEF: CardDef = CardDef { vp: CardValue::Fixed(3), ..CardDef::new("Duchy", 5) };
const PROVINCE_DEF: CardDef = CardDef { vp: CardValue::Fixed(6), ..CardDef::new("Province", 8) };

const COPPER_DEF: CardDef = CardDef { treasure: CardValue::Fixed(1), ..CardDef::new("Copper", 0) };
const SILVER_DEF: CardDef = CardDef { treasure: CardValue::Fixed(2), ..CardDef::new("Silver", 3) };
const GOLD_DEF: CardDef = CardDef { treasure: CardValue::Fixed(3), ..CardDef::new("Gold", 6) };

pub const CURSE: Card = Card::new(&CURSE_DEF);
pub const ESTATE: Card = Card::new(&ESTATE_DEF);
pub const DUCHY: Card = Card::new(&DUCHY_DEF);
pub const PROVINCE: Card = Card::new(&PROVINCE_DEF);

pub const COPPER: Card = Card::new(&COPPER_DEF);
pub const SILVER: Card = Card::new(&SILVER_DEF);
pub const GOLD: Card = Card::new(&GOLD_DEF);

/// Base supply cards.
pub const BASE_CARDS: [Card; 7] = [CURSE, ESTATE, DUCHY, PROVINCE, COPPER, SILVER, GOLD];
