//! Rollout-driven buying.

use tracing::{debug, warn};

use super::BigMoney;
use crate::cards::{Card, DUCHY, ESTATE, GOLD, PROVINCE};
use crate::core::Result;
use crate::decision::{Choice, Decision, DecisionKind, DecisionMaker};
use crate::simulation::Simulator;
use crate::zones::PlayerState;

/// Score a simulated hand by how much of it a Province-buying turn can use.
///
/// Coins beyond what the buys can spend on Provinces are capped, and a lone
/// coin that cannot change what is bought is discounted.
///
/// ```
/// use rust_deckbuilder::strategy::buying_value;
///
/// assert_eq!(buying_value(12, 1), 8);
/// assert_eq!(buying_value(7, 1), 6);
/// assert_eq!(buying_value(5, 1), 5);
/// ```
#[must_use]
pub fn buying_value(coins: i32, buys: i32) -> i32 {
    let province = PROVINCE.cost;
    let coins = coins.min(buys * province);
    let spare = coins - (buys - 1) * province;
    if spare == 1 || spare == province - 1 {
        coins - 1
    } else {
        coins
    }
}

/// Buys victory cards greedily and otherwise hill-climbs on rollouts.
///
/// Each candidate buy is scored by the summed `buying_value` of
/// `steps` simulated hands with that card on top of the deck. Non-buy
/// decisions follow `BigMoney`.
#[derive(Clone, Debug)]
pub struct HillClimb {
    name: String,
    /// Provinces left at or below which Estate is bought whenever possible.
    cutoff1: u32,
    /// Provinces left at or below which Duchy is bought whenever possible.
    cutoff2: u32,
    steps: usize,
    simulator: Simulator,
    fallback: BigMoney,
}

impl Default for HillClimb {
    fn default() -> Self {
        Self::new(2, 3, 100, 0)
    }
}

impl HillClimb {
    #[must_use]
    pub fn new(cutoff1: u32, cutoff2: u32, steps: usize, seed: u64) -> Self {
        Self {
            name: format!("HillClimb({}, {}, {})", cutoff1, cutoff2, steps),
            cutoff1,
            cutoff2,
            steps,
            simulator: Simulator::new(seed),
            fallback: BigMoney::new(cutoff1, cutoff2),
        }
    }

    /// Summed rollout value of gaining `card` (or nothing).
    pub fn buy_priority(&mut self, state: &PlayerState, card: Option<Card>) -> Result<i64> {
        let extra: Vec<Card> = card.into_iter().collect();
        let outcomes = self
            .simulator
            .simulate_hands(state, self.steps, &extra, &mut self.fallback)?;

        let mut total: i64 = outcomes
            .iter()
            .map(|o| i64::from(buying_value(o.coins, o.buys)))
            .sum();
        // Gold pays off beyond the next few hands.
        if card == Some(GOLD) {
            total += (self.steps / 2) as i64;
        }
        Ok(total)
    }

    fn buy(&mut self, decision: &Decision<'_>) -> Result<Choice> {
        let choices = decision.choices();
        let left = decision.game().supply_count(PROVINCE);

        if choices.contains(&Some(PROVINCE)) {
            return Ok(Choice::Card(PROVINCE));
        }
        if choices.contains(&Some(DUCHY)) && left <= self.cutoff2 {
            return Ok(Choice::Card(DUCHY));
        }
        if choices.contains(&Some(ESTATE)) && left <= self.cutoff1 {
            return Ok(Choice::Card(ESTATE));
        }

        let state = decision.state();
        let mut best = (None, i64::MIN);
        for &option in &choices {
            let value = self.buy_priority(state, option)?;
            debug!(card = ?option, value, "buy priority");
            if value > best.1 {
                best = (option, value);
            }
        }
        Ok(best.0.into())
    }
}

impl DecisionMaker for HillClimb {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, decision: &Decision<'_>) -> Choice {
        match decision.kind() {
            DecisionKind::Buy => self.buy(decision).unwrap_or_else(|err| {
                warn!(%err, "rollout failed, buying by priority");
                self.fallback.buy(decision)
            }),
            _ => self.fallback.decide(decision),
        }
    }
}
