//! Deck mechanics tests.
//!
//! Drawing, reshuffling and end-of-turn cleanup on `PlayerState`.

use proptest::prelude::*;

use rust_deckbuilder::cards::{Card, COPPER, ESTATE, GOLD, SILVER};
use rust_deckbuilder::core::GameRng;
use rust_deckbuilder::zones::{PlayerState, STARTING_DECK};

fn pile(n: usize, offset: usize) -> Vec<Card> {
    [COPPER, SILVER, GOLD, ESTATE].iter().copied().cycle().skip(offset).take(n).collect()
}

/// Test that a fresh seat has its opening hand and nothing left in discard.
#[test]
fn test_opening_hand() {
    let mut rng = GameRng::new(42);
    let state = PlayerState::initial_state(&mut rng);

    assert_eq!(state.hand_size(), 5);
    assert_eq!(state.drawpile.len(), 5);
    assert!(state.discard.is_empty());

    let mut deck: Vec<Card> = state.all_cards().collect();
    let mut expected = STARTING_DECK.to_vec();
    deck.sort();
    expected.sort();
    assert_eq!(deck, expected);
}

/// Test that the same seed deals the same opening.
#[test]
fn test_opening_is_seeded() {
    let a = PlayerState::initial_state(&mut GameRng::new(5));
    let b = PlayerState::initial_state(&mut GameRng::new(5));
    assert_eq!(a, b);
}

/// Test a full turn cycle keeps every card.
#[test]
fn test_turn_cycle_conserves_deck() {
    let mut rng = GameRng::new(8);
    let mut state = PlayerState::initial_state(&mut rng);

    for _ in 0..10 {
        let hand: Vec<Card> = state.hand.iter().copied().collect();
        state = state.play_card(hand[0]).unwrap().next_turn(&mut rng);
        assert_eq!(state.deck_size(), 10);
        assert_eq!(state.hand_size(), 5);
        assert!(state.tableau.is_empty());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: drawing `n` moves exactly min(n, d + k) cards into hand.
    #[test]
    fn prop_draw_count(
        d in 0usize..12,
        k in 0usize..12,
        n in 0usize..30,
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let state = PlayerState::default()
            .with_drawpile(&pile(d, 0))
            .with_discard(&pile(k, 1));

        let drawn = state.draw(n, &mut rng);

        prop_assert_eq!(drawn.hand_size(), n.min(d + k));
        prop_assert_eq!(drawn.deck_size(), d + k);
    }

    /// Property: when the draw pile suffices, the top `n` cards are drawn
    /// and the discard pile is untouched.
    #[test]
    fn prop_draw_from_top(
        d in 1usize..12,
        k in 0usize..12,
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let drawpile = pile(d, 0);
        let discard = pile(k, 2);
        let state = PlayerState::default()
            .with_drawpile(&drawpile)
            .with_discard(&discard);

        let n = d / 2 + 1;
        let drawn = state.draw(n, &mut rng);

        prop_assert_eq!(drawn.hand.iter().copied().collect::<Vec<_>>(), drawpile[..n].to_vec());
        prop_assert_eq!(drawn.discard.iter().copied().collect::<Vec<_>>(), discard);
    }

    /// Property: a draw that exhausts the draw pile consumes the discard.
    #[test]
    fn prop_draw_reshuffles(
        d in 0usize..6,
        k in 1usize..12,
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let state = PlayerState::default()
            .with_drawpile(&pile(d, 0))
            .with_discard(&pile(k, 3));

        let drawn = state.draw(d + 1, &mut rng);

        prop_assert_eq!(drawn.hand_size(), d + 1);
        prop_assert!(drawn.discard.is_empty());
        prop_assert_eq!(drawn.drawpile.len(), k - 1);
    }
}
