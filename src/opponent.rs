//! Computer opponent decision policy.
//!
//! The policy is a pure function of the opponent's hand and the table, apart
//! from random tie-breaking between equally good plays. It never mutates
//! state; the game applies whatever move it returns.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::card::{Card, Suit};
use crate::rules::playable;

/// Suit called when the remaining hand gives no signal.
pub const FALLBACK_SUIT: Suit = Suit::Hearts;

/// A move chosen by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentMove {
    /// Play a card. `suit` is set when the card is an eight.
    Play {
        /// The card to play.
        card: Card,
        /// The suit to call for a wild card.
        suit: Option<Suit>,
    },
    /// No legal card: draw from the deck.
    Draw,
}

/// Chooses the opponent's move.
///
/// Non-eight legal cards are preferred and picked uniformly at random; an
/// eight is only played when it is the sole kind of legal card. With no legal
/// card the opponent draws.
pub fn choose_move<R: Rng + ?Sized>(
    hand: &[Card],
    top: Card,
    active_suit: Suit,
    rng: &mut R,
) -> OpponentMove {
    let legal = playable(hand, top, active_suit);
    let (wild, natural): (Vec<Card>, Vec<Card>) = legal.into_iter().partition(|c| c.is_wild());

    let Some(&card) = natural.choose(rng).or_else(|| wild.first()) else {
        return OpponentMove::Draw;
    };
    let suit = card.is_wild().then(|| suit_for_wild(hand, card));
    OpponentMove::Play { card, suit }
}

/// Picks the suit to call when playing the eight `wild` out of `hand`.
///
/// The eight itself is not counted.
#[must_use]
pub fn suit_for_wild(hand: &[Card], wild: Card) -> Suit {
    let mut remaining = hand.to_vec();
    if let Some(index) = remaining.iter().position(|&c| c == wild) {
        remaining.remove(index);
    }
    choose_suit(&remaining)
}

/// Picks the suit held most often in `remaining`.
///
/// Ties go to the suit earliest in [`Suit::ALL`]; an empty hand calls
/// [`FALLBACK_SUIT`].
#[must_use]
pub fn choose_suit(remaining: &[Card]) -> Suit {
    let mut counts = [0usize; 4];
    for card in remaining {
        counts[card.suit.index()] += 1;
    }

    let mut best = FALLBACK_SUIT;
    let mut best_count = 0;
    for suit in Suit::ALL {
        if counts[suit.index()] > best_count {
            best = suit;
            best_count = counts[suit.index()];
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn prefers_a_matching_rank_over_an_eight() {
        let hand = [
            card(Suit::Spades, 8),
            card(Suit::Hearts, 3),
            card(Suit::Diamonds, 3),
            card(Suit::Clubs, 3),
        ];
        let top = card(Suit::Spades, 3);

        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            match choose_move(&hand, top, Suit::Spades, &mut rng) {
                OpponentMove::Play { card, suit } => {
                    assert_eq!(card.rank, 3);
                    assert_eq!(suit, None);
                }
                OpponentMove::Draw => panic!("expected a play"),
            }
        }
    }

    #[test]
    fn tie_break_reaches_every_candidate() {
        let hand = [
            card(Suit::Hearts, 3),
            card(Suit::Diamonds, 3),
            card(Suit::Clubs, 3),
        ];
        let top = card(Suit::Spades, 3);
        let mut seen = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..200 {
            if let OpponentMove::Play { card, .. } = choose_move(&hand, top, Suit::Spades, &mut rng)
            {
                if !seen.contains(&card) {
                    seen.push(card);
                }
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn plays_the_eight_when_nothing_else_fits() {
        let hand = [
            card(Suit::Clubs, 8),
            card(Suit::Diamonds, 2),
            card(Suit::Diamonds, 6),
            card(Suit::Hearts, 1),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let chosen = choose_move(&hand, card(Suit::Spades, 12), Suit::Spades, &mut rng);
        assert_eq!(
            chosen,
            OpponentMove::Play {
                card: card(Suit::Clubs, 8),
                suit: Some(Suit::Diamonds),
            }
        );
    }

    #[test]
    fn draws_without_a_legal_card() {
        let hand = [card(Suit::Clubs, 2), card(Suit::Diamonds, 6)];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            choose_move(&hand, card(Suit::Spades, 12), Suit::Spades, &mut rng),
            OpponentMove::Draw
        );
        assert_eq!(
            choose_move(&[], card(Suit::Spades, 12), Suit::Spades, &mut rng),
            OpponentMove::Draw
        );
    }

    #[test]
    fn suit_choice_counts_the_remaining_hand() {
        assert_eq!(choose_suit(&[]), Suit::Hearts);
        assert_eq!(
            choose_suit(&[card(Suit::Spades, 2), card(Suit::Spades, 9), card(Suit::Clubs, 4)]),
            Suit::Spades
        );
        // Tie between clubs and diamonds goes to the earlier suit.
        assert_eq!(
            choose_suit(&[card(Suit::Clubs, 4), card(Suit::Diamonds, 4)]),
            Suit::Diamonds
        );
    }

    #[test]
    fn played_eight_is_not_counted_for_its_own_suit() {
        let hand = [card(Suit::Spades, 8), card(Suit::Clubs, 4)];
        assert_eq!(suit_for_wild(&hand, card(Suit::Spades, 8)), Suit::Clubs);
        // A lone eight leaves nothing to count.
        assert_eq!(
            suit_for_wild(&[card(Suit::Spades, 8)], card(Suit::Spades, 8)),
            Suit::Hearts
        );
    }
}
