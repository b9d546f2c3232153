//! Move legality.

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// Returns whether `card` may be played on `top` while `active_suit` governs.
///
/// A card is legal if it is an eight, matches the active suit, or matches
/// the rank of the top discard. The suit of `top` itself is not consulted:
/// after a wild it no longer governs.
#[must_use]
pub fn is_legal(card: Card, top: Card, active_suit: Suit) -> bool {
    card.is_wild() || card.suit == active_suit || card.rank == top.rank
}

/// Returns the legal cards of `hand`, in hand order.
#[must_use]
pub fn playable(hand: &[Card], top: Card, active_suit: Suit) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|&card| is_legal(card, top, active_suit))
        .collect()
}
