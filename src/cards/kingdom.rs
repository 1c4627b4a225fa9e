//! Kingdom cards expressible in the generic effect model.

use super::base::CURSE;
use super::definition::{Card, CardDef, CardValue, UNBOUNDED};
use crate::effects::{DecisionTemplate, Effect};

const VILLAGE_DEF: CardDef = CardDef { cards: 1, actions: 2, ..CardDef::new("Village", 3) };
const WOODCUTTER_DEF: CardDef = CardDef { coins: 2, buys: 1, ..CardDef::new("Woodcutter", 3) };
const SMITHY_DEF: CardDef = CardDef { cards: 3, ..CardDef::new("Smithy", 4) };
const FESTIVAL_DEF: CardDef = CardDef {
    coins: 2,
    actions: 2,
    buys: 1,
    ..CardDef::new("Festival", 5)
};
const MARKET_DEF: CardDef = CardDef {
    coins: 1,
    cards: 1,
    actions: 1,
    buys: 1,
    ..CardDef::new("Market", 5)
};
const LABORATORY_DEF: CardDef = CardDef { cards: 2, actions: 1, ..CardDef::new("Laboratory", 5) };

const CHAPEL_DEF: CardDef = CardDef {
    effect: &[Effect::Decide(DecisionTemplate::Trash { min: 0, max: 4 })],
    ..CardDef::new("Chapel", 2)
};
const CELLAR_DEF: CardDef = CardDef {
    actions: 1,
    effect: &[Effect::DiscardThenDraw { min: 0, max: UNBOUNDED }],
    ..CardDef::new("Cellar", 2)
};
const WAREHOUSE_DEF: CardDef = CardDef {
    cards: 3,
    actions: 1,
    effect: &[Effect::Decide(DecisionTemplate::Discard { min: 3, max: 3 })],
    ..CardDef::new("Warehouse", 3)
};
const COUNCIL_ROOM_DEF: CardDef = CardDef {
    cards: 4,
    buys: 1,
    effect: &[Effect::OthersDraw(1)],
    ..CardDef::new("Council Room", 5)
};
const MILITIA_DEF: CardDef = CardDef {
    coins: 2,
    effect: &[Effect::OthersDecide {
        template: DecisionTemplate::DiscardDownTo(3),
        attack: true,
    }],
    is_attack: true,
    ..CardDef::new("Militia", 4)
};
const MOAT_DEF: CardDef = CardDef { cards: 2, is_defense: true, ..CardDef::new("Moat", 2) };
const WITCH_DEF: CardDef = CardDef {
    cards: 2,
    effect: &[Effect::OthersDecide {
        template: DecisionTemplate::Gain(CURSE),
        attack: true,
    }],
    is_attack: true,
    ..CardDef::new("Witch", 5)
};
const GARDENS_DEF: CardDef = CardDef { vp: CardValue::PerDeckSize(10), ..CardDef::new("Gardens", 4) };

pub const VILLAGE: Card = Card::new(&VILLAGE_DEF);
pub const WOODCUTTER: Card = Card::new(&WOODCUTTER_DEF);
pub const SMITHY: Card = Card::new(&SMITHY_DEF);
pub const FESTIVAL: Card = Card::new(&FESTIVAL_DEF);
pub const MARKET: Card = Card::new(&MARKET_DEF);
pub const LABORATORY: Card = Card::new(&LABORATORY_DEF);
pub const CHAPEL: Card = Card::new(&CHAPEL_DEF);
pub const CELLAR: Card = Card::new(&CELLAR_DEF);
pub const WAREHOUSE: Card = Card::new(&WAREHOUSE_DEF);
pub const COUNCIL_ROOM: Card = Card::new(&COUNCIL_ROOM_DEF);
pub const MILITIA: Card = Card::new(&MILITIA_DEF);
pub const MOAT: Card = Card::new(&MOAT_DEF);
pub const WITCH: Card = Card::new(&WITCH_DEF);
pub const GARDENS: Card = Card::new(&GARDENS_DEF);

/// The classic eleven-card first-game kingdom.
pub const BASE_ACTIONS: [Card; 11] = [
    VILLAGE,
    CELLAR,
    SMITHY,
    FESTIVAL,
    MARKET,
    LABORATORY,
    CHAPEL,
    WAREHOUSE,
    COUNCIL_ROOM,
    MILITIA,
    MOAT,
];

pub(crate) const KINGDOM_CARDS: [Card; 14] = [
    VILLAGE,
    WOODCUTTER,
    SMITHY,
    FESTIVAL,
    MARKET,
    LABORATORY,
    CHAPEL,
    CELLAR,
    WAREHOUSE,
    COUNCIL_ROOM,
    MILITIA,
    MOAT,
    WITCH,
    GARDENS,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{by_name, catalogue};

    #[test]
    fn test_catalogue_names_are_unique() {
        let mut names: Vec<_> = catalogue().map(|c| c.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_lookup_round_trips() {
        for card in catalogue() {
            assert_eq!(by_name(card.name), Some(card));
        }
    }

    #[test]
    fn test_attack_cards() {
        let attacks: Vec<_> = KINGDOM_CARDS.iter().filter(|c| c.is_attack()).collect();
        assert_eq!(attacks, vec![&MILITIA, &WITCH]);
    }

    #[test]
    fn test_base_actions_are_actions() {
        assert!(BASE_ACTIONS.iter().all(|c| c.is_action()));
        assert!(!GARDENS.is_action());
    }
}
