//! Arranged table set-ups.

use alloc::vec::Vec;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::deck::{self, Deck};
use crate::error::PositionError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::sync::Mutex;

use super::{Game, GameEvent, GameState, Side, Table};

/// A table arranged by hand instead of dealt, for puzzles and tests.
///
/// Every card not named in the position is placed for you, so the full deck
/// is always accounted for:
/// - without an explicit draw pile, unnamed cards form the draw pile in
///   canonical order;
/// - with one, unnamed cards are buried beneath the top discard.
///
/// ```
/// use crazy8s::{Card, Game, GameOptions, Position, Suit};
///
/// let position = Position::new(
///     vec![Card::new(Suit::Clubs, 4)],
///     vec![Card::new(Suit::Hearts, 9), Card::new(Suit::Hearts, 10)],
///     Card::new(Suit::Clubs, 12),
/// );
/// let game = Game::from_position(GameOptions::default(), 1, position).unwrap();
/// assert_eq!(game.snapshot().total_cards(), 52);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Cards in the player's hand.
    pub player_hand: Vec<Card>,
    /// Cards in the opponent's hand.
    pub opponent_hand: Vec<Card>,
    /// The top discard.
    pub top_discard: Card,
    /// Active suit. Defaults to the top discard's suit.
    pub active_suit: Option<Suit>,
    /// Draw pile in draw order. Defaults to every unnamed card.
    pub draw_pile: Option<Vec<Card>>,
    /// The side to move.
    pub to_move: Side,
}

impl Position {
    /// Creates a position with the player to move.
    #[must_use]
    pub const fn new(player_hand: Vec<Card>, opponent_hand: Vec<Card>, top_discard: Card) -> Self {
        Self {
            player_hand,
            opponent_hand,
            top_discard,
            active_suit: None,
            draw_pile: None,
            to_move: Side::Player,
        }
    }

    /// Sets the active suit.
    #[must_use]
    pub const fn with_active_suit(mut self, suit: Suit) -> Self {
        self.active_suit = Some(suit);
        self
    }

    /// Sets the draw pile, in draw order.
    #[must_use]
    pub fn with_draw_pile(mut self, cards: Vec<Card>) -> Self {
        self.draw_pile = Some(cards);
        self
    }

    /// Sets the side to move.
    #[must_use]
    pub const fn with_to_move(mut self, side: Side) -> Self {
        self.to_move = side;
        self
    }

    fn named_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.player_hand
            .iter()
            .chain(&self.opponent_hand)
            .chain(core::iter::once(&self.top_discard))
            .chain(self.draw_pile.iter().flatten())
            .copied()
    }

    fn into_table(self) -> Result<Table, PositionError> {
        if self.player_hand.is_empty() {
            return Err(PositionError::EmptyHand(Side::Player));
        }
        if self.opponent_hand.is_empty() {
            return Err(PositionError::EmptyHand(Side::Opponent));
        }

        let mut seen = [false; DECK_SIZE];
        for card in self.named_cards() {
            if !card.is_valid() {
                return Err(PositionError::InvalidRank(card));
            }
            let slot = &mut seen[card.id() as usize];
            if *slot {
                return Err(PositionError::DuplicateCard(card));
            }
            *slot = true;
        }

        let unnamed: Vec<Card> = deck::build()
            .into_iter()
            .filter(|card| !seen[card.id() as usize])
            .collect();
        let (deck, buried) = match self.draw_pile {
            Some(draw_pile) => (Deck::from_draw_order(draw_pile), unnamed),
            None => (Deck::from_draw_order(unnamed), Vec::new()),
        };

        Ok(Table {
            deck,
            player: Hand::from_cards(self.player_hand),
            opponent: Hand::from_cards(self.opponent_hand),
            top: self.top_discard,
            buried,
            active_suit: self.active_suit.unwrap_or(self.top_discard.suit),
            state: GameState::turn_of(self.to_move),
            last_event: GameEvent::Dealt,
            version: 0,
        })
    }
}

impl Game {
    /// Creates a game from an arranged position.
    ///
    /// `seed` drives the opponent's tie-breaks and later shuffles.
    ///
    /// # Errors
    ///
    /// Returns an error if a card is named twice, a card has an invalid
    /// rank, or either hand is empty.
    pub fn from_position(
        options: GameOptions,
        seed: u64,
        position: Position,
    ) -> Result<Self, PositionError> {
        let table = position.into_table()?;
        debug!(
            "arranged game: {} vs {} cards, {} to draw",
            table.player.len(),
            table.opponent.len(),
            table.deck.len()
        );

        Ok(Self {
            options,
            table: Mutex::new(table),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        })
    }
}
