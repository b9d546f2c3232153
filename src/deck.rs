//! Deck construction, shuffling and the draw pile.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, RANKS_PER_SUIT, Suit};

/// Builds all 52 cards in canonical order (suit-major, rank-minor).
///
/// The position of each card matches its [`Card::id`].
#[must_use]
pub fn build() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in 1..=RANKS_PER_SUIT {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Returns a uniformly random permutation of `cards`.
///
/// The input is left untouched. Uses Fisher-Yates: walking from the last
/// index down to 1, each element is swapped with a uniformly chosen element
/// at an index no greater than its own.
#[must_use]
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();

    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }

    shuffled
}

/// The draw pile.
///
/// Cards are kept so that the next card to be drawn sits at the end of the
/// backing vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a draw pile that yields `cards` front to back.
    #[must_use]
    pub fn from_draw_order(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the next card, or `None` if the pile is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}
