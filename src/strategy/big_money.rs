//! The "Big Money" baseline.

use crate::cards::{Card, COPPER, CURSE, DUCHY, ESTATE, GOLD, PROVINCE, SILVER};
use crate::decision::{Choice, Decision, DecisionKind, DecisionMaker};

/// Buys money, then victory cards as the Province pile runs down.
///
/// Also provides incremental trash and discard heuristics that other
/// strategies reuse for their non-buy decisions.
#[derive(Clone, Debug)]
pub struct BigMoney {
    name: String,
    /// Provinces left at or below which Duchy outranks Gold.
    cutoff1: u32,
    /// Provinces left at or below which Duchy outranks Silver.
    cutoff2: u32,
}

impl Default for BigMoney {
    fn default() -> Self {
        Self::new(3, 6)
    }
}

impl BigMoney {
    #[must_use]
    pub fn new(cutoff1: u32, cutoff2: u32) -> Self {
        Self {
            name: format!("BigMoney({}, {})", cutoff1, cutoff2),
            cutoff1,
            cutoff2,
        }
    }

    /// Buy preferences from least to most wanted; `None` is buying nothing.
    #[must_use]
    pub fn buy_priority_order(&self, provinces_left: u32) -> &'static [Option<Card>] {
        if provinces_left <= self.cutoff1 {
            &[None, Some(ESTATE), Some(SILVER), Some(DUCHY), Some(PROVINCE)]
        } else if provinces_left <= self.cutoff2 {
            &[None, Some(SILVER), Some(DUCHY), Some(GOLD), Some(PROVINCE)]
        } else {
            &[None, Some(SILVER), Some(GOLD), Some(PROVINCE)]
        }
    }

    /// The most wanted affordable card.
    #[must_use]
    pub fn buy(&self, decision: &Decision<'_>) -> Choice {
        let choices = decision.choices();
        let left = decision.game().supply_count(PROVINCE);
        self.buy_priority_order(left)
            .iter()
            .rev()
            .find(|&&option| choices.contains(&option))
            .copied()
            .flatten()
            .into()
    }

    /// Play order: more +actions first, then +coins and +cards, then +buys.
    #[must_use]
    pub fn act_priority(card: Option<Card>) -> i32 {
        match card {
            None => 0,
            Some(card) => {
                100 * card.actions + 10 * (card.coins + card.cards as i32) + card.buys + 1
            }
        }
    }

    #[must_use]
    pub fn act(&self, decision: &Decision<'_>) -> Choice {
        decision
            .choices()
            .into_iter()
            .max_by_key(|&card| Self::act_priority(card))
            .flatten()
            .into()
    }

    /// One more card to trash, or `None` to stop.
    #[must_use]
    pub fn trash_one(&self, decision: &Decision<'_>, remaining: &[Card], allow_none: bool) -> Option<Card> {
        let state = decision.state();
        let money: i32 = state.all_cards().map(|c| c.treasure.value(state) + c.coins).sum();

        if remaining.contains(&CURSE) {
            Some(CURSE)
        } else if remaining.contains(&COPPER) && money > 3 {
            Some(COPPER)
        } else if decision.game().round() < 10 && remaining.contains(&ESTATE) {
            Some(ESTATE)
        } else if allow_none {
            None
        } else {
            remaining.iter().copied().min_by_key(|c| (c.vp.value(state), c.cost))
        }
    }

    /// One more card to discard, or `None` to stop.
    #[must_use]
    pub fn discard_one(&self, decision: &Decision<'_>, remaining: &[Card], allow_none: bool) -> Option<Card> {
        let state = decision.state();
        let mut actions: Vec<Card> = remaining.iter().copied().filter(|c| c.is_action()).collect();
        actions.sort_by_key(|c| c.actions);
        let plus_actions: i32 = actions.iter().map(|c| c.actions).sum();
        let wasted = actions.len() as i32 - plus_actions - state.actions;

        if wasted > 0 {
            actions.first().copied()
        } else if let Some(&victory) = remaining.iter().find(|c| c.is_pure_victory()) {
            Some(victory)
        } else if remaining.contains(&COPPER) {
            Some(COPPER)
        } else if allow_none {
            None
        } else {
            remaining
                .iter()
                .copied()
                .min_by_key(|c| (c.actions, c.cards, c.coins, c.treasure.value(state)))
        }
    }

    /// Pick cards one at a time until `pick` declines or `max` is reached.
    /// Declining is only offered once `min` cards are chosen.
    fn pick_cards(
        &self,
        decision: &Decision<'_>,
        min: usize,
        max: usize,
        pick: impl Fn(&Self, &Decision<'_>, &[Card], bool) -> Option<Card>,
    ) -> Choice {
        let mut remaining = decision.choice_cards();
        let mut chosen = Vec::new();

        while !remaining.is_empty() && chosen.len() < max {
            let Some(card) = pick(self, decision, &remaining, chosen.len() >= min) else {
                break;
            };
            match remaining.iter().position(|&c| c == card) {
                Some(index) => {
                    remaining.remove(index);
                    chosen.push(card);
                }
                None => break,
            }
        }

        Choice::Cards(chosen)
    }
}

impl DecisionMaker for BigMoney {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, decision: &Decision<'_>) -> Choice {
        match decision.kind() {
            DecisionKind::Buy => self.buy(decision),
            DecisionKind::Act => self.act(decision),
            DecisionKind::Trash { min, max } => self.pick_cards(decision, min, max, Self::trash_one),
            DecisionKind::Discard { min, max } => {
                self.pick_cards(decision, min, max, Self::discard_one)
            }
            DecisionKind::Gain(_) => Choice::Pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CHAPEL, FESTIVAL, MILITIA, SMITHY, VILLAGE};
    use crate::core::PlayerId;
    use crate::game::{Game, GameBuilder};
    use crate::zones::PlayerState;

    fn game_with(state: PlayerState) -> Game {
        GameBuilder::new()
            .seats(2)
            .seed(1)
            .build()
            .unwrap()
            .replace_state(PlayerId(0), state)
    }

    fn decide(game: &Game, kind: DecisionKind) -> Choice {
        BigMoney::default().decide(&Decision::new(game, PlayerId(0), kind))
    }

    #[test]
    fn test_buys_best_affordable() {
        let rich = game_with(PlayerState::default().with_hand(&[GOLD, GOLD, SILVER]).with_counters(0, 1, 0));
        assert_eq!(decide(&rich, DecisionKind::Buy), Choice::Card(PROVINCE));

        let middling = game_with(PlayerState::default().with_hand(&[GOLD, GOLD]).with_counters(0, 1, 0));
        assert_eq!(decide(&middling, DecisionKind::Buy), Choice::Card(GOLD));

        let poor = game_with(PlayerState::default().with_hand(&[COPPER]).with_counters(0, 1, 0));
        assert_eq!(decide(&poor, DecisionKind::Buy), Choice::Pass);
    }

    #[test]
    fn test_priority_shifts_late() {
        let strategy = BigMoney::default();
        assert_eq!(strategy.buy_priority_order(8).last(), Some(&Some(PROVINCE)));
        assert!(strategy.buy_priority_order(5).contains(&Some(DUCHY)));
        assert!(strategy.buy_priority_order(2).contains(&Some(ESTATE)));
        assert!(!strategy.buy_priority_order(8).contains(&Some(DUCHY)));
    }

    #[test]
    fn test_plays_villages_first() {
        let game = game_with(
            PlayerState::default()
                .with_hand(&[SMITHY, VILLAGE, FESTIVAL])
                .with_counters(1, 1, 0),
        );
        assert_eq!(decide(&game, DecisionKind::Act), Choice::Card(FESTIVAL));
        assert_eq!(BigMoney::act_priority(Some(VILLAGE)), 211);
        assert_eq!(BigMoney::act_priority(Some(SMITHY)), 31);
        assert_eq!(BigMoney::act_priority(None), 0);
    }

    #[test]
    fn test_trash_heuristic() {
        let game = game_with(
            PlayerState::default()
                .with_hand(&[CURSE, ESTATE, COPPER, GOLD])
                .with_discard(&[COPPER; 6]),
        );
        let choice = decide(&game, DecisionKind::Trash { min: 0, max: 4 });
        assert_eq!(choice, Choice::Cards(vec![CURSE, COPPER, ESTATE]));
    }

    #[test]
    fn test_forced_trash_falls_back() {
        let game = game_with(PlayerState::default().with_hand(&[GOLD, CHAPEL]));
        let choice = decide(&game, DecisionKind::Trash { min: 1, max: 1 });
        assert_eq!(choice, Choice::Cards(vec![CHAPEL]));
    }

    #[test]
    fn test_discard_heuristic() {
        let game = game_with(
            PlayerState::default()
                .with_hand(&[SMITHY, MILITIA, ESTATE, COPPER, GOLD])
                .with_counters(1, 1, 0),
        );
        let choice = decide(&game, DecisionKind::Discard { min: 2, max: 2 });
        assert_eq!(choice, Choice::Cards(vec![SMITHY, ESTATE]));
    }

    #[test]
    fn test_gain_accepts() {
        let game = game_with(PlayerState::default());
        assert_eq!(decide(&game, DecisionKind::Gain(CURSE)), Choice::Pass);
    }
}
