//! Game engine and state management.

use core::mem;

use alloc::string::ToString;
use alloc::vec::Vec;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, HAND_SIZE, Suit};
use crate::deck::{self, Deck};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::sync::Mutex;

mod actions;
mod opponent_turn;
mod position;
#[cfg(feature = "std")]
pub mod scheduler;
pub mod state;

pub use opponent_turn::OpponentTurn;
pub use position::Position;
pub use state::{GameEvent, GameState, Phase, Side};

/// Everything on the table, kept as one record so that every change is
/// applied under a single lock.
///
/// Each of the 52 cards sits in exactly one of `deck`, `player`,
/// `opponent`, or the discard pile (`top` plus `buried`).
#[derive(Debug)]
struct Table {
    deck: Deck,
    player: Hand,
    opponent: Hand,
    /// The top discard.
    top: Card,
    /// Discards beneath `top`, oldest first.
    buried: Vec<Card>,
    active_suit: Suit,
    state: GameState,
    last_event: GameEvent,
    /// Bumped on every completed change; outstanding opponent tickets
    /// compare against it.
    version: u64,
}

impl Table {
    /// Deals a new game from `order`, which must hold all 52 cards.
    ///
    /// The player receives the first eight cards, the opponent the next
    /// eight, and the seventeenth becomes the first discard.
    fn deal(mut order: Vec<Card>, version: u64) -> Self {
        let player: Vec<Card> = order.drain(..HAND_SIZE).collect();
        let opponent: Vec<Card> = order.drain(..HAND_SIZE).collect();
        let top = order.remove(0);

        Self {
            deck: Deck::from_draw_order(order),
            player: Hand::from_cards(player),
            opponent: Hand::from_cards(opponent),
            top,
            buried: Vec::new(),
            active_suit: top.suit,
            state: GameState::PlayerTurn,
            last_event: GameEvent::Dealt,
            version,
        }
    }

    const fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    const fn hand_mut(&mut self, side: Side) -> &mut Hand {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    fn is_legal(&self, card: Card) -> bool {
        rules::is_legal(card, self.top, self.active_suit)
    }

    fn record(&mut self, event: GameEvent) {
        self.last_event = event;
        self.version += 1;
    }

    /// Draws one card for `side` and settles the turn.
    ///
    /// Returns the drawn card if `side` may play it straight away; the state
    /// is then left on `side`'s turn. Otherwise the turn passes.
    fn draw_for(&mut self, side: Side) -> Option<Card> {
        let Some(card) = self.deck.draw() else {
            debug!("{side:?} found the deck empty and passes");
            self.state = GameState::turn_of(side.other());
            self.record(GameEvent::DeckEmpty { side });
            return None;
        };

        self.hand_mut(side).add_card(card);
        if self.is_legal(card) {
            debug!("{side:?} drew {card}, which is playable");
            return Some(card);
        }

        debug!("{side:?} drew {card} and passes");
        self.state = GameState::turn_of(side.other());
        self.record(GameEvent::DrewUnplayable { side });
        None
    }

    /// Moves `card` from `side`'s hand onto the discard pile and ends the
    /// turn: the game is over if the hand is now empty, otherwise the other
    /// side moves.
    ///
    /// `suit` becomes the active suit. For a non-wild card it must be the
    /// card's own suit.
    fn complete_play(&mut self, side: Side, card: Card, suit: Suit) {
        let held = self.hand_mut(side).remove(card);
        debug_assert!(held, "{side:?} does not hold {card}");
        self.buried.push(mem::replace(&mut self.top, card));
        self.active_suit = suit;

        let event = if card.is_wild() {
            debug!("{side:?} played {card} and called {suit}");
            GameEvent::WildPlayed { side, card, suit }
        } else {
            debug!("{side:?} played {card}");
            GameEvent::Played { side, card }
        };

        if self.hand(side).is_empty() {
            info!("{side:?} emptied their hand and wins");
            self.state = GameState::GameOver { winner: side };
            self.record(GameEvent::Won { side });
        } else {
            self.state = GameState::turn_of(side.other());
            self.record(event);
        }
    }

    fn snapshot(&self) -> GameSnapshot {
        let playable = if self.state == GameState::PlayerTurn {
            rules::playable(self.player.cards(), self.top, self.active_suit)
        } else {
            Vec::new()
        };

        GameSnapshot {
            player_hand: self.player.cards().to_vec(),
            opponent_hand: self.opponent.cards().to_vec(),
            player_count: self.player.len(),
            opponent_count: self.opponent.len(),
            top_discard: self.top,
            discard_count: self.buried.len() + 1,
            draw_pile_count: self.deck.len(),
            active_suit: self.active_suit,
            state: self.state,
            phase: self.state.phase(),
            turn: self.state.turn(),
            pending_wild: self.state.pending_wild(),
            winner: self.state.winner(),
            playable,
            last_event: self.last_event,
            status: self.last_event.to_string(),
            version: self.version,
        }
    }
}

/// A Crazy Eights game between the player and the computer opponent.
///
/// `Game` is the only thing allowed to change the table. Every method takes
/// the table lock once, validates, and then applies all of its changes, so
/// observers never see a half-finished move.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The table.
    table: Mutex<Table>,
    /// Random number generator for shuffling and opponent tie-breaks.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a game with the given seed and deals the first hand.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let snapshot = game.snapshot();
    /// assert_eq!(snapshot.state, GameState::PlayerTurn);
    /// assert_eq!(snapshot.player_count, 8);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let table = Self::deal_table(&options, &mut rng, 0);
        info!("new game dealt, {} cards to draw", table.deck.len());

        Self {
            options,
            table: Mutex::new(table),
            rng: Mutex::new(rng),
        }
    }

    /// Builds, optionally shuffles, and deals a fresh table.
    fn deal_table(options: &GameOptions, rng: &mut ChaCha8Rng, version: u64) -> Table {
        let cards = deck::build();
        let order = if options.shuffle {
            deck::shuffle(&cards, rng)
        } else {
            cards
        };
        Table::deal(order, version)
    }

    /// Abandons the current game and deals a new one.
    ///
    /// Any opponent turn scheduled for the old game is superseded and will
    /// not be applied.
    pub fn new_game(&self) -> GameSnapshot {
        self.table.with(|table| {
            let mut rng = self.rng.lock();
            *table = Self::deal_table(&self.options, &mut rng, table.version + 1);
            drop(rng);
            info!("new game dealt, {} cards to draw", table.deck.len());
            table.snapshot()
        })
    }

    /// Returns a snapshot of the table.
    pub fn snapshot(&self) -> GameSnapshot {
        self.table.lock().snapshot()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.table.lock().state
    }
}
