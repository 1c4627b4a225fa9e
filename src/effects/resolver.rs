//! Effect resolution - interpreting effect ops against game snapshots.
//!
//! Every op takes a `Game` by reference and returns its successor. Ops that
//! raise decisions route them through the `Seats` table, so a single card
//! play can hand control to several collaborators before it returns.

use tracing::debug;

use super::{DecisionTemplate, Effect, Resources};
use crate::cards::Card;
use crate::core::{EngineError, Result};
use crate::decision::Seats;
use crate::game::Game;

/// Apply a card's play sequence for the acting seat.
///
/// The order is fixed: draw `cards`, then apply the coin/action/buy deltas
/// together, then each entry of `effect` in list order. The card must
/// already have been moved to the tableau by the caller.
pub fn perform_action(card: Card, game: &Game, seats: &mut dyn Seats) -> Result<Game> {
    if !card.is_action() {
        return Err(EngineError::IllegalSelection {
            decision: "play".to_string(),
            selection: card.to_string(),
        });
    }

    debug!(parent: game.span(), seat = %game.player_turn(), card = %card, "perform action");

    let mut game = if card.cards > 0 {
        game.current_draw_cards(card.cards)
    } else {
        game.clone()
    };

    let delta = card.resources();
    if !delta.is_zero() {
        game = game.change_current_state(delta);
    }

    for effect in card.effect {
        game = apply_effect(effect, &game, seats)?;
    }
    Ok(game)
}

/// Interpret one effect op.
pub fn apply_effect(effect: &Effect, game: &Game, seats: &mut dyn Seats) -> Result<Game> {
    match *effect {
        Effect::Draw(n) => Ok(game.current_draw_cards(n)),
        Effect::Resources(delta) => Ok(game.change_current_state(delta)),
        Effect::OthersDraw(n) => Ok(game.change_other_states(Resources::NONE, n)),
        Effect::Decide(template) => game.decide(template, seats),
        Effect::OthersDecide { template, attack } => {
            game.everyone_else_decides(template, attack, seats)
        }
        Effect::DiscardThenDraw { min, max } => {
            let before = game.state().hand_size();
            let game = game.decide(DecisionTemplate::Discard { min, max }, seats)?;
            let discarded = before.saturating_sub(game.state().hand_size());
            Ok(game.current_draw_cards(discarded))
        }
        Effect::RemoveFromSupply(card) => game.remove_card(card),
        Effect::Composite(effects) => {
            let mut game = game.clone();
            for effect in effects {
                game = apply_effect(effect, &game, seats)?;
            }
            Ok(game)
        }
    }
}
